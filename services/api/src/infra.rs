use chrono::NaiveDate;
use loan_decision::config::DecisionConfig;
use loan_decision::decision::DecisionEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine using the configured as-of date, overridden by `today` when given.
pub(crate) fn build_engine(config: &DecisionConfig, today: Option<NaiveDate>) -> DecisionEngine {
    DecisionEngine::new().with_as_of(today.or(config.as_of))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
