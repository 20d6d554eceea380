use log::info;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{GlobalMatch, LedgerDocument, PlayerRecord};
use crate::errors::LoadError;

/// Reads and parses the ledger document, returning the player records and
/// the global match log. Nothing is retained on failure; the file handle is
/// scoped to the read and released on every path.
pub fn load(path: &Path) -> Result<(Vec<PlayerRecord>, Vec<GlobalMatch>), LoadError> {
    let raw = read_document(path)?;
    let document = parse_document(path, &raw)?;
    require_sections(path, document)
}

fn read_document(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn parse_document(path: &Path, raw: &str) -> Result<LedgerDocument, LoadError> {
    serde_json::from_str(raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn require_sections(
    path: &Path,
    document: LedgerDocument,
) -> Result<(Vec<PlayerRecord>, Vec<GlobalMatch>), LoadError> {
    if document.players.is_empty() || document.matches.is_empty() {
        return Err(LoadError::MissingSection {
            path: path.to_path_buf(),
        });
    }

    info!(
        "Loaded {} players and {} matches from {}",
        document.players.len(),
        document.matches.len(),
        path.display()
    );
    Ok((document.players, document.matches))
}
