use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use waste_core::ReportingOffset;
use waste_db::Db;

use crate::error::{AppError, Result};
use crate::services::{AppServices, SharedStore};

/// Settings needed to run the tracker.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub reporting_offset: ReportingOffset,
}

/// Application state shared by every frontend. Owns the single store handle,
/// which services borrow through [`AppServices`].
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: AppServices,
    store: SharedStore,
}

impl AppState {
    /// Opens and migrates the store at `config.db_path`.
    pub fn open(config: AppConfig) -> Result<Self> {
        let mut db = Db::open(&config.db_path)
            .map_err(|err| AppError::Message(format!("open db: {}", err)))?;
        db.migrate()
            .map_err(|err| AppError::Message(format!("migrate db: {}", err)))?;
        tracing::info!(
            db_path = %config.db_path.display(),
            reporting_offset = %config.reporting_offset,
            "waste store opened"
        );
        Ok(Self::with_store(config, db))
    }

    /// Wraps an already migrated store.
    pub fn with_store(config: AppConfig, db: Db) -> Self {
        let store: SharedStore = Arc::new(Mutex::new(db));
        let services = AppServices::new(store.clone(), config.reporting_offset);
        Self {
            config,
            services,
            store,
        }
    }

    /// Closes the store. Fails if another clone of this state is still alive.
    pub fn close(self) -> Result<()> {
        self.try_close()
            .unwrap_or_else(|_| Err(AppError::Message("waste store is still in use".to_string())))
    }

    /// Closes the store if this is the last clone of the state; otherwise
    /// hands the state back untouched so the caller can retry later.
    pub fn try_close(self) -> std::result::Result<Result<()>, Self> {
        let Self {
            config,
            services,
            store,
        } = self;
        drop(services);
        match Arc::try_unwrap(store) {
            Ok(store) => Ok(close_store(&config, store)),
            Err(store) => {
                let services = AppServices::new(store.clone(), config.reporting_offset);
                Err(Self {
                    config,
                    services,
                    store,
                })
            }
        }
    }
}

fn close_store(config: &AppConfig, store: Mutex<Db>) -> Result<()> {
    let db = store
        .into_inner()
        .map_err(|_| AppError::Message("waste store lock poisoned".to_string()))?;
    db.close()?;
    tracing::info!(db_path = %config.db_path.display(), "waste store closed");
    Ok(())
}
