use serde_json::Value;
use waste_app::{AppError, Result, parse_order, resolve_selector};

use crate::{
    AppContext, CreateWasteRequest, CreatedResponse, DailyQuery, DailyResponse, DeleteWasteQuery,
    DeletedResponse, EntryResponse, OkResponse, WasteListResponse, WasteQuery,
};

fn parse_amount(value: Option<Value>) -> Result<Option<f64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => Ok(number.as_f64()),
        Some(_) => Err(AppError::InvalidInput(
            "amount_ml must be a number".to_string(),
        )),
    }
}

fn parse_id(value: Option<&str>) -> Result<i64> {
    let raw = value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::InvalidInput("id is required".to_string()))?;
    raw.parse::<i64>()
        .map_err(|_| AppError::InvalidInput(format!("invalid id {}", raw)))
}

pub fn list_waste(ctx: &AppContext, req: WasteQuery) -> Result<WasteListResponse> {
    let selector = resolve_selector(&req.period_params())?;
    let waste = &ctx.app_state.services.waste;
    let report = waste.report(&selector)?;
    let offset = waste.offset();
    let entries = report
        .entries
        .into_iter()
        .map(|entry| EntryResponse {
            date: entry.local_date(offset),
            id: entry.id,
            amount_ml: entry.amount_ml,
            cost_dollars: entry.cost_dollars,
            created_at: entry.created_at,
        })
        .collect();
    Ok(WasteListResponse {
        entries,
        totals: report.totals,
        vials: report.vials.into(),
        billed_total: report.billed_total,
        period: report.period.to_string(),
    })
}

pub fn daily_waste(ctx: &AppContext, req: DailyQuery) -> Result<DailyResponse> {
    let selector = resolve_selector(&req.period_params())?;
    let order = parse_order(req.order.as_deref())?;
    let report = ctx.app_state.services.waste.daily(&selector, order)?;
    Ok(DailyResponse {
        days: report.daily,
        totals: report.totals,
        period: report.period.to_string(),
    })
}

pub fn create_waste(ctx: &AppContext, req: CreateWasteRequest) -> Result<CreatedResponse> {
    let amount_ml = parse_amount(req.amount_ml)?;
    let entry = ctx.app_state.services.waste.record(amount_ml)?;
    Ok(CreatedResponse {
        id: entry.id,
        amount_ml: entry.amount_ml,
        cost_dollars: entry.cost_dollars,
        created_at: entry.created_at,
        message: "Waste entry recorded successfully".to_string(),
    })
}

pub fn delete_waste(ctx: &AppContext, req: DeleteWasteQuery) -> Result<DeletedResponse> {
    let id = parse_id(req.id.as_deref())?;
    let deleted_id = ctx.app_state.services.waste.delete(id)?;
    Ok(DeletedResponse {
        message: "Waste entry deleted successfully".to_string(),
        deleted_id,
    })
}

pub fn ok() -> OkResponse {
    OkResponse { ok: true }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_amount_distinguishes_missing_from_malformed() {
        assert_eq!(parse_amount(None).expect("missing"), None);
        assert_eq!(parse_amount(Some(Value::Null)).expect("null"), None);
        assert_eq!(parse_amount(Some(json!(2.5))).expect("number"), Some(2.5));
        assert_eq!(parse_amount(Some(json!(0))).expect("zero"), Some(0.0));
        assert!(parse_amount(Some(json!("5"))).is_err());
        assert!(parse_amount(Some(json!(true))).is_err());
    }

    #[test]
    fn parse_id_requires_an_integer() {
        assert_eq!(parse_id(Some("42")).expect("id"), 42);
        assert!(matches!(parse_id(None), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_id(Some(" ")), Err(AppError::InvalidInput(_))));
        assert!(matches!(
            parse_id(Some("abc")),
            Err(AppError::InvalidInput(_))
        ));
    }
}
