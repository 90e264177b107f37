//! Loan decision engine.
//!
//! The [`decision`] module owns the policy: input validation, age eligibility, credit segments and
//! the amount/period searches. The remaining modules carry the service plumbing shared with the
//! HTTP binary.

pub mod config;
pub mod decision;
pub mod error;
pub mod telemetry;
