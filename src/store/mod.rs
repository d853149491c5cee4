//! Durable record storage behind one trait, with a flat-file adapter and a
//! relational adapter selected by configuration.

pub mod file;
pub mod table;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::ServiceError;
use crate::models::{InspectionRecord, RecordDraft};

pub use file::FileStore;
pub use table::TableStore;

/// Storage abstraction for inspection records.
///
/// Implementations own the record collection; callers never cache results
/// across requests, so every `list_all` reflects the latest committed state.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns every current record.
    async fn list_all(&self) -> Result<Vec<InspectionRecord>, ServiceError>;

    /// Persists a new record and returns its assigned identifier.
    async fn create(&self, draft: RecordDraft) -> Result<i64, ServiceError>;

    /// Removes the record with the given identifier. Returns `Ok(true)` if a
    /// record was removed and `Ok(false)` if no such record exists.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Constructs the store named by `storage_backend`, connecting (and
/// migrating, when `auto_migrate` is set) for the database backend.
///
/// The database backend also hands back its connection pool so the
/// readiness probe can ping the engine directly; the file backend has no
/// pool.
pub async fn build_store(
    cfg: &AppConfig,
) -> Result<(Arc<dyn RecordStore>, Option<Arc<DbPool>>), ServiceError> {
    match cfg.storage_backend.as_str() {
        "database" => {
            let pool = Arc::new(crate::db::establish_connection_from_app_config(cfg).await?);
            if cfg.auto_migrate {
                crate::db::run_migrations(&pool).await?;
            }
            info!("Using database-backed record store");
            Ok((Arc::new(TableStore::new(pool.clone())), Some(pool)))
        }
        "file" => {
            info!(path = %cfg.storage_file_path, "Using file-backed record store");
            Ok((Arc::new(FileStore::new(&cfg.storage_file_path)), None))
        }
        other => Err(ServiceError::InvalidInput(format!(
            "unknown storage backend '{}'",
            other
        ))),
    }
}
