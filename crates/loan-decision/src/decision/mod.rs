//! Loan decision policy.
//!
//! A request passes through four stages:
//!
//! 1. input validation (personal code, amount range, period range),
//! 2. age eligibility against the customer's jurisdiction,
//! 3. credit segment lookup from the last four digits of the code,
//! 4. the amount search for the requested period, falling back to other periods.
//!
//! The engine itself holds no per-request state; everything derived from the customer is carried
//! by a [`CreditScorer`] built for that call.

pub mod domain;
pub(crate) mod eligibility;
pub mod identifier;
pub mod policy;
pub mod router;
pub mod scoring;
pub(crate) mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    AmountRejection, Decision, DecisionError, IdentifierRejection, LoanRequest, ScoringFault,
};
pub use identifier::{EstonianPersonalCodeValidator, IdentifierValidator, PersonalCode};
pub use policy::{CreditSegment, Jurisdiction};
pub use router::decision_router;
pub use scoring::{credit_score, CreditScorer};

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use validation::ValidatedTerms;

/// Stateless decision engine; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine<V = EstonianPersonalCodeValidator> {
    validator: V,
    as_of: Option<NaiveDate>,
}

impl DecisionEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V> DecisionEngine<V>
where
    V: IdentifierValidator,
{
    pub fn with_validator(validator: V) -> Self {
        Self {
            validator,
            as_of: None,
        }
    }

    /// Pins the date used for age checks. `None` restores the local date.
    pub fn with_as_of(mut self, as_of: Option<NaiveDate>) -> Self {
        self.as_of = as_of;
        self
    }

    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }

    /// Decides the request against the pinned date, or today's local date.
    pub fn decide(&self, request: &LoanRequest) -> Result<Decision, DecisionError> {
        let today = self.as_of.unwrap_or_else(|| Local::now().date_naive());
        self.decide_on(request, today)
    }

    /// Decides the request with ages computed as of `today`.
    pub fn decide_on(
        &self,
        request: &LoanRequest,
        today: NaiveDate,
    ) -> Result<Decision, DecisionError> {
        let terms = validation::verify_inputs(&self.validator, request)?;
        let code = PersonalCode::parse(&request.personal_code)?;
        let age = eligibility::verify_age(&code, terms.loan_period, today)?;

        let segment = code.credit_segment();
        let Some(scorer) = CreditScorer::for_segment(segment) else {
            info!(?segment, "customer segment is not eligible for a loan");
            return Err(DecisionError::no_valid_loan());
        };
        debug!(age, ?segment, "customer eligible for scoring");

        match resolve(&scorer, terms) {
            Ok(Some(decision)) => {
                info!(
                    ?segment,
                    approved_amount = ?decision.loan_amount,
                    approved_period = ?decision.loan_period,
                    "loan approved"
                );
                Ok(decision)
            }
            Ok(None) => {
                info!(?segment, "no loan satisfies the credit score threshold");
                Err(DecisionError::no_valid_loan())
            }
            Err(fault) => {
                warn!(error = %fault, "scoring failed, declining request");
                Err(fault.into())
            }
        }
    }
}

/// Largest approvable amount for the requested period, otherwise an alternative period.
fn resolve(
    scorer: &CreditScorer,
    terms: ValidatedTerms,
) -> Result<Option<Decision>, ScoringFault> {
    let ValidatedTerms {
        loan_amount,
        loan_period,
    } = terms;

    debug!(
        loan_amount,
        loan_period,
        score = scorer.score(loan_amount, loan_period),
        "requested terms scored"
    );

    if let Some(amount) = scorer.max_approved_amount(loan_period)? {
        return Ok(Some(Decision::approved(amount, loan_period)));
    }

    scorer.find_alternative(loan_amount)
}
