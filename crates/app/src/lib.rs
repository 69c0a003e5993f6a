pub mod app;
pub mod config;
pub mod error;
pub mod services;
pub mod startup;
pub mod util;

pub use app::{AppConfig, AppState};
pub use config::{DEFAULT_UTC_OFFSET, PeriodParams};
pub use error::{ApiError, AppError, Result};
pub use services::{AppServices, WasteService};
pub use startup::{AppPaths, DB_FILE_NAME, ensure_app_data_dir};
pub use util::time::{parse_order, resolve_selector};
