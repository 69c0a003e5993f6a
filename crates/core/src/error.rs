use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("unsupported period {0}")]
    InvalidPeriod(String),
    #[error("unsupported order {0}, expected asc or desc")]
    InvalidOrder(String),
    #[error("invalid date {0}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("startDate and endDate must be provided together")]
    IncompleteRange,
    #[error("startDate {start} is after endDate {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
    #[error("invalid utc offset {0}, expected +HH:MM or -HH:MM")]
    InvalidOffset(String),
    #[error("amount_ml is required")]
    MissingAmount,
    #[error("amount_ml must be a finite, non-negative number (got {0})")]
    InvalidAmount(f64),
}

pub type Result<T> = std::result::Result<T, CoreError>;
