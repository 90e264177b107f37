use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::decision::{decision_router, DecisionEngine, LoanRequest};

pub(super) const INELIGIBLE: &str = "49002010246";
pub(super) const SEGMENT_1: &str = "49002013008";
pub(super) const SEGMENT_2: &str = "49002016000";
pub(super) const SEGMENT_3: &str = "49002019001";

pub(super) const TURNS_18_TODAY: &str = "50810199608";
pub(super) const TURNS_18_TOMORROW: &str = "50810209606";

pub(super) const ESTONIA_AGED_74: &str = "35210199609";
pub(super) const ESTONIA_AGED_75: &str = "35110199606";
pub(super) const LATVIA_AGED_71: &str = "35510197406";
pub(super) const LATVIA_AGED_72: &str = "35410197403";
pub(super) const LITHUANIA_AGED_72: &str = "35410198607";
pub(super) const LITHUANIA_AGED_73: &str = "35310198604";

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::new().with_as_of(Some(today()))
}

pub(super) fn request(code: &str, amount: i64, period: i64) -> LoanRequest {
    LoanRequest::new(code, amount, period)
}

pub(super) fn router() -> axum::Router {
    decision_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_declined(body: &Value) {
    assert_eq!(body["loanAmount"], Value::Null);
    assert_eq!(body["loanPeriod"], Value::Null);
    assert!(body["errorMessage"].is_string());
}

pub(super) fn assert_status(response: &Response, status: StatusCode) {
    assert_eq!(response.status(), status);
}
