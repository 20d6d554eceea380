pub mod reconstruct;
pub mod types;

pub use reconstruct::{build_rating_matrix, compute_initial_ratings};
pub use types::{
    CellUpdate, HistoryWarning, MatchSide, PlayerId, RatingMatrix, RatingValue,
    ReconstructedHistory,
};
