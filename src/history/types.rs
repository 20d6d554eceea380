use std::collections::HashMap;
use std::fmt;

pub type PlayerId = String;
pub type RatingValue = f64;

/// Dense rating table: row `i` is the rating state after `i` global matches,
/// one column per player id. Row 0 holds the reconstructed initial ratings,
/// so every cell is populated once the first row is in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingMatrix {
    columns: Vec<PlayerId>,
    column_index: HashMap<PlayerId, usize>,
    rows: Vec<Vec<RatingValue>>,
}

impl RatingMatrix {
    pub fn new(columns: Vec<PlayerId>) -> Self {
        let column_index = columns
            .iter()
            .enumerate()
            .map(|(idx, id)| (id.clone(), idx))
            .collect();
        Self {
            columns,
            column_index,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[PlayerId] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[RatingValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn last_row(&self) -> Option<&[RatingValue]> {
        self.rows.last().map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, id: &str) -> Option<RatingValue> {
        let column = *self.column_index.get(id)?;
        self.rows.get(row).map(|r| r[column])
    }

    /// All values of one column, from row 0 to the last row.
    pub fn column(&self, id: &str) -> Option<impl Iterator<Item = RatingValue> + '_> {
        let column = *self.column_index.get(id)?;
        Some(self.rows.iter().map(move |row| row[column]))
    }

    pub fn push_row(&mut self, row: Vec<RatingValue>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Appends a copy of the last row, the carry-forward step between
    /// consecutive game states.
    pub fn push_copy_of_last(&mut self) {
        let row = self.rows.last().cloned().unwrap_or_default();
        self.rows.push(row);
    }

    /// Overwrites one cell. Returns false when the id is not a known column,
    /// leaving the row untouched.
    pub fn set(&mut self, row: usize, id: &str, value: RatingValue) -> bool {
        let Some(&column) = self.column_index.get(id) else {
            return false;
        };
        match self.rows.get_mut(row) {
            Some(r) => {
                r[column] = value;
                true
            }
            None => false,
        }
    }
}

/// Which side of a match a recorded rating belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSide {
    Winner,
    Loser,
}

impl MatchSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchSide::Winner => "winner",
            MatchSide::Loser => "loser",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MatchSide::Winner => "Winner",
            MatchSide::Loser => "Loser",
        }
    }
}

/// Outcome of applying one recorded post-match rating to the matrix. The
/// defaulting policy is a value, not a print side effect, so it can be
/// asserted on directly.
#[derive(Debug, Clone, PartialEq)]
pub enum CellUpdate {
    /// The recorded rating overwrote the carried-forward value.
    Applied { id: PlayerId, rating: RatingValue },
    /// No rating was recorded for this side; the previous value stands.
    CarriedForward,
    /// The match record had no usable id for this side.
    SkippedEmptyId,
    /// The id is not a known column; the previous value stands.
    SkippedUnknown { id: PlayerId },
}

/// Recoverable oddities surfaced during reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryWarning {
    /// An id appeared in the match log without a `players` entry.
    UnknownPlayer { id: PlayerId },
    /// A recorded rating referenced an id outside the column set.
    SkippedUpdate {
        id: PlayerId,
        game_number: usize,
        side: MatchSide,
    },
}

impl fmt::Display for HistoryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryWarning::UnknownPlayer { id } => write!(
                f,
                "Player ID {id} found in matches but not in 'players' section. \
                 Added with default ELO 1000."
            ),
            HistoryWarning::SkippedUpdate {
                id,
                game_number,
                side,
            } => write!(
                f,
                "{} ID {id} from game {game_number} not in player list. \
                 Skipping ELO update for this {}.",
                side.label(),
                side.as_str()
            ),
        }
    }
}

/// Everything one reconstruction pass produces. Immutable once built; the
/// exporter only reads from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconstructedHistory {
    pub matrix: RatingMatrix,
    pub player_ids: Vec<PlayerId>,
    pub display_names: HashMap<PlayerId, String>,
    pub initial_ratings: HashMap<PlayerId, RatingValue>,
    pub warnings: Vec<HistoryWarning>,
}

impl ReconstructedHistory {
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.display_names.get(id).map(String::as_str).unwrap_or(id)
    }
}
