use waste_core::{PeriodSelector, SortOrder};

use crate::config::PeriodParams;
use crate::error::Result;

pub fn resolve_selector(params: &PeriodParams) -> Result<PeriodSelector> {
    Ok(PeriodSelector::resolve(
        params.period.as_deref(),
        params.start_date.as_deref(),
        params.end_date.as_deref(),
    )?)
}

/// Missing order means newest day first, the expandable daily list default.
pub fn parse_order(order: Option<&str>) -> Result<SortOrder> {
    match order.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => Ok(value.parse()?),
        None => Ok(SortOrder::Descending),
    }
}
