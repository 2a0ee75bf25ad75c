//! Session setup and initialization

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::{DEFAULT_RFM_PATH, DEFAULT_TRANSACTIONS_PATH};
use crate::data::{LoadedTables, Tables, store};

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Session data for both TUI and summary modes
#[derive(Debug)]
pub struct SessionData {
    /// Loaded tables, shared with whichever mode runs
    pub tables: Arc<Tables>,
    /// Whether the tables came from the in-process cache
    pub from_cache: bool,
    /// Wall time the load took, in milliseconds
    pub load_ms: u128,
    /// Resolved transaction table location
    pub transactions_path: PathBuf,
    /// Resolved RFM table location
    pub rfm_path: PathBuf,
}

/// Resolves table locations: explicit flags win, then the saved config,
/// then the defaults the upstream pipeline writes to.
pub fn resolve_data_paths(
    transactions: Option<PathBuf>,
    rfm: Option<PathBuf>,
) -> (PathBuf, PathBuf) {
    let saved = get_config_path()
        .ok()
        .filter(|path| path.exists())
        .and_then(|path| Config::load_from_file(&path).ok());
    let transactions_path = transactions
        .or_else(|| {
            saved
                .as_ref()
                .map(|config| PathBuf::from(&config.transactions_path))
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSACTIONS_PATH));
    let rfm_path = rfm
        .or_else(|| saved.as_ref().map(|config| PathBuf::from(&config.rfm_path)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RFM_PATH));
    (transactions_path, rfm_path)
}

/// Sets up a dashboard session
///
/// This function handles the common setup required for both TUI and
/// summary modes:
/// 1. Resolves where the two tables live
/// 2. Loads them off the async runtime
/// 3. Returns session data for mode-specific handling
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - Loading or parsing failed
pub async fn setup_session(
    transactions: Option<PathBuf>,
    rfm: Option<PathBuf>,
) -> Result<SessionData, Box<dyn Error>> {
    let (transactions_path, rfm_path) = resolve_data_paths(transactions, rfm);
    let started = Instant::now();

    // CSV parsing is CPU-bound, keep it off the async runtime
    let loaded: LoadedTables = tokio::task::spawn_blocking({
        let transactions_path = transactions_path.clone();
        let rfm_path = rfm_path.clone();
        move || store::get_or_load(&transactions_path, &rfm_path)
    })
    .await??;

    Ok(SessionData {
        tables: loaded.tables,
        from_cache: loaded.from_cache,
        load_ms: started.elapsed().as_millis(),
        transactions_path,
        rfm_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags_win() {
        let (transactions, rfm) = resolve_data_paths(
            Some(PathBuf::from("/tmp/tx.csv")),
            Some(PathBuf::from("/tmp/rfm.csv")),
        );
        assert_eq!(transactions, PathBuf::from("/tmp/tx.csv"));
        assert_eq!(rfm, PathBuf::from("/tmp/rfm.csv"));
    }
}
