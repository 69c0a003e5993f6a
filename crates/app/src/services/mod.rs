mod waste;

use std::sync::{Arc, Mutex, MutexGuard};

use waste_core::ReportingOffset;
use waste_db::Db;

use crate::error::{AppError, Result};

pub use waste::WasteService;

pub(crate) type SharedStore = Arc<Mutex<Db>>;

/// Service registry for app-level operations.
#[derive(Clone)]
pub struct AppServices {
    pub waste: WasteService,
}

impl AppServices {
    pub(crate) fn new(store: SharedStore, offset: ReportingOffset) -> Self {
        Self {
            waste: WasteService::new(store, offset),
        }
    }
}

fn lock_store(store: &SharedStore) -> Result<MutexGuard<'_, Db>> {
    store
        .lock()
        .map_err(|_| AppError::Message("waste store lock poisoned".to_string()))
}
