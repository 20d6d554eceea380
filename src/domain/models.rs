use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// The serialized game ledger: a `players` section keyed by player id and a
/// global `matches` log.
#[derive(Debug, Deserialize)]
pub struct LedgerDocument {
    #[serde(default, deserialize_with = "players_in_document_order")]
    pub players: Vec<PlayerRecord>,
    #[serde(default)]
    pub matches: Vec<GlobalMatch>,
}

/// One entry from the `players` section, with its object key carried as `id`.
#[derive(Debug, Clone)]
pub struct PlayerRecord {
    pub id: String,
    pub name: Option<String>,
    pub elo: Option<f64>,
    pub matches: Vec<PersonalMatch>,
}

impl PlayerRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Deserialize)]
struct PlayerBody {
    name: Option<String>,
    elo: Option<f64>,
    #[serde(default)]
    matches: Vec<PersonalMatch>,
}

/// An entry in a player's personal match log.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonalMatch {
    #[serde(default)]
    pub timestamp: String,
    #[serde(rename = "eloChange")]
    pub elo_change: Option<f64>,
}

/// An entry in the global match log. Winner and loser carry the rating they
/// held after this match, when the ledger recorded it.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalMatch {
    #[serde(rename = "winnerId", default)]
    pub winner_id: String,
    #[serde(rename = "loserId", default)]
    pub loser_id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(rename = "winnerElo")]
    pub winner_elo: Option<f64>,
    #[serde(rename = "loserElo")]
    pub loser_elo: Option<f64>,
}

/// The `players` object keeps its key order from the source database, and
/// matrix column order downstream depends on it, so it is collected into a
/// Vec instead of a HashMap.
fn players_in_document_order<'de, D>(deserializer: D) -> Result<Vec<PlayerRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PlayersVisitor;

    impl<'de> Visitor<'de> for PlayersVisitor {
        type Value = Vec<PlayerRecord>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of player id to player object")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut players = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((id, body)) = map.next_entry::<String, PlayerBody>()? {
                players.push(PlayerRecord {
                    id,
                    name: body.name,
                    elo: body.elo,
                    matches: body.matches,
                });
            }
            Ok(players)
        }
    }

    deserializer.deserialize_map(PlayersVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_keep_document_order() {
        let json = r#"{
            "players": {
                "zed": {"name": "Zed", "elo": 1100, "matches": []},
                "alice": {"name": "Alice", "elo": 900, "matches": []},
                "mike": {"name": "Mike", "elo": 1000, "matches": []}
            },
            "matches": []
        }"#;

        let document: LedgerDocument = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = document.players.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["zed", "alice", "mike"]);
    }

    #[test]
    fn test_player_fields_default_when_absent() {
        let json = r#"{"players": {"p1": {}}, "matches": []}"#;

        let document: LedgerDocument = serde_json::from_str(json).unwrap();
        let player = &document.players[0];
        assert_eq!(player.name, None);
        assert_eq!(player.elo, None);
        assert!(player.matches.is_empty());
        assert_eq!(player.display_name(), "p1");
    }

    #[test]
    fn test_personal_match_defaults() {
        let json = r#"{
            "players": {"p1": {"matches": [{"timestamp": "t1"}, {"eloChange": -8}]}},
            "matches": []
        }"#;

        let document: LedgerDocument = serde_json::from_str(json).unwrap();
        let matches = &document.players[0].matches;
        assert_eq!(matches[0].elo_change, None);
        assert_eq!(matches[1].timestamp, "");
        assert_eq!(matches[1].elo_change, Some(-8.0));
    }

    #[test]
    fn test_global_match_ratings_are_optional() {
        let json = r#"{
            "players": {"p1": {}},
            "matches": [{"winnerId": "p1", "loserId": "p2", "timestamp": "t1"}]
        }"#;

        let document: LedgerDocument = serde_json::from_str(json).unwrap();
        let game = &document.matches[0];
        assert_eq!(game.winner_id, "p1");
        assert_eq!(game.winner_elo, None);
        assert_eq!(game.loser_elo, None);
    }
}
