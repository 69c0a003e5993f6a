use serde::Deserialize;
use serde_json::Value;
use waste_app::PeriodParams;

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WasteQuery {
    pub period: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl WasteQuery {
    pub fn period_params(&self) -> PeriodParams {
        PeriodParams {
            period: self.period.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuery {
    pub period: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub order: Option<String>,
}

impl DailyQuery {
    pub fn period_params(&self) -> PeriodParams {
        PeriodParams {
            period: self.period.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

/// `amount_ml` stays untyped so that strings, booleans and the like surface as
/// validation failures instead of body rejections.
#[derive(Debug, Deserialize, Default)]
pub struct CreateWasteRequest {
    pub amount_ml: Option<Value>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DeleteWasteQuery {
    pub id: Option<String>,
}
