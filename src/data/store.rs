//! Process-wide table cache.
//!
//! Parsing half a million rows takes long enough to notice, so parsed tables
//! are cached for the life of the process, keyed by a digest of both files'
//! bytes. A reload re-reads the bytes but only re-parses when they differ;
//! filter changes never come near this module.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use sha3::{Digest, Keccak256};
use tokio::sync::mpsc;

use crate::data::loader::{self, DataError};
use crate::data::model::Tables;

struct CacheEntry {
    fingerprint: String,
    tables: Arc<Tables>,
}

/// Global cache slot; lives for the process, emptied only by [`clear`].
static TABLE_CACHE: OnceLock<Mutex<Option<CacheEntry>>> = OnceLock::new();

/// A successful load, with the cache's verdict attached so callers can
/// report "reloaded" and "unchanged" differently.
pub struct LoadedTables {
    pub tables: Arc<Tables>,
    pub from_cache: bool,
}

fn lock_slot() -> MutexGuard<'static, Option<CacheEntry>> {
    let slot = TABLE_CACHE.get_or_init(|| Mutex::new(None));
    match slot.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Digest over both files' raw bytes; the cache keys on content, not mtime.
fn fingerprint(transactions_path: &Path, rfm_path: &Path) -> Result<String, DataError> {
    let mut hasher = Keccak256::new();
    for path in [transactions_path, rfm_path] {
        let bytes = fs::read(path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        hasher.update(&bytes);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// Returns the cached tables when the files' bytes are unchanged, otherwise
/// parses them fresh and replaces the cache entry.
pub fn get_or_load(transactions_path: &Path, rfm_path: &Path) -> Result<LoadedTables, DataError> {
    let fingerprint = fingerprint(transactions_path, rfm_path)?;

    {
        let slot = lock_slot();
        if let Some(entry) = slot.as_ref() {
            if entry.fingerprint == fingerprint {
                log::debug!("table cache hit ({})", &fingerprint[..12]);
                return Ok(LoadedTables {
                    tables: Arc::clone(&entry.tables),
                    from_cache: true,
                });
            }
        }
    }

    log::debug!("table cache miss, parsing {}", transactions_path.display());
    let tables = Arc::new(loader::load_tables(transactions_path, rfm_path)?);
    let mut slot = lock_slot();
    *slot = Some(CacheEntry {
        fingerprint,
        tables: Arc::clone(&tables),
    });
    Ok(LoadedTables {
        tables,
        from_cache: false,
    })
}

/// Empties the cache; the next [`get_or_load`] parses from scratch.
pub fn clear() {
    let mut slot = lock_slot();
    *slot = None;
}

/// Runs [`get_or_load`] off the UI thread and delivers the outcome over a
/// channel the dashboard loop drains with `try_recv`. Load panics close the
/// channel without a message; receivers treat that as a failed load.
pub fn spawn_load(
    transactions_path: PathBuf,
    rfm_path: PathBuf,
) -> mpsc::Receiver<Result<LoadedTables, DataError>> {
    let (sender, receiver) = mpsc::channel(1);
    tokio::spawn(async move {
        let result =
            tokio::task::spawn_blocking(move || get_or_load(&transactions_path, &rfm_path)).await;
        match result {
            Ok(outcome) => {
                let _ = sender.send(outcome).await;
            }
            Err(join_error) => {
                log::error!("table load task failed: {}", join_error);
            }
        }
    });
    receiver
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    const TX_HEADER: &str =
        "InvoiceNo,StockCode,Description,Quantity,UnitPrice,TotalPrice,CustomerID,Country,InvoiceDate";
    const RFM_HEADER: &str = "CustomerID,Recency,Frequency,Monetary,RFM_Score_Numeric,Segment";

    fn write_file(path: &Path, contents: &str) {
        let mut file = fs::File::create(path).unwrap();
        write!(file, "{}", contents).unwrap();
    }

    // The cache is one global slot, so the full lifecycle runs in a single
    // test to keep it away from the parallel test runner.
    #[test]
    fn test_cache_lifecycle() {
        let dir = tempdir().unwrap();
        let tx_path = dir.path().join("tx.csv");
        let rfm_path = dir.path().join("rfm.csv");
        write_file(
            &tx_path,
            &format!(
                "{}\n536365,85123A,LANTERN,4,3.39,13.56,17850,United Kingdom,2010-12-01 08:26:00\n",
                TX_HEADER
            ),
        );
        write_file(
            &rfm_path,
            &format!("{}\n17850,12,5,1100.50,9.0,Champions\n", RFM_HEADER),
        );

        // First load parses.
        let first = get_or_load(&tx_path, &rfm_path).unwrap();
        assert!(!first.from_cache);
        assert_eq!(first.tables.transactions.len(), 1);

        // Same bytes come back from the cache as the same allocation.
        let second = get_or_load(&tx_path, &rfm_path).unwrap();
        assert!(second.from_cache);
        assert!(Arc::ptr_eq(&first.tables, &second.tables));

        // Changed bytes force a fresh parse.
        write_file(
            &tx_path,
            &format!(
                "{}\n536365,85123A,LANTERN,4,3.39,13.56,17850,United Kingdom,2010-12-01 08:26:00\n\
                 536366,71053,WHITE METAL LANTERN,2,3.39,6.78,17850,United Kingdom,2010-12-01 08:28:00\n",
                TX_HEADER
            ),
        );
        let third = get_or_load(&tx_path, &rfm_path).unwrap();
        assert!(!third.from_cache);
        assert_eq!(third.tables.transactions.len(), 2);

        // Explicit clear drops the entry even when bytes are unchanged.
        clear();
        let fourth = get_or_load(&tx_path, &rfm_path).unwrap();
        assert!(!fourth.from_cache);

        // A vanished file surfaces as a load error, not a stale hit.
        fs::remove_file(&rfm_path).unwrap();
        assert!(get_or_load(&tx_path, &rfm_path).is_err());
    }
}
