pub mod models;

pub use models::{GlobalMatch, LedgerDocument, PersonalMatch, PlayerRecord};
