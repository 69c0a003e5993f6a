use serde::{Deserialize, Serialize};

/// Offset applied when no reporting offset is configured.
pub const DEFAULT_UTC_OFFSET: &str = "-04:00";

/// Raw period selection as received from a caller.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PeriodParams {
    pub period: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
