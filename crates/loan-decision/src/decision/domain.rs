use serde::{Deserialize, Serialize};

use super::identifier::IdentifierError;
use super::policy::{
    MAXIMUM_LOAN_AMOUNT, MAXIMUM_LOAN_PERIOD, MINIMUM_AGE, MINIMUM_LOAN_AMOUNT,
    MINIMUM_LOAN_PERIOD,
};

/// Loan request as received from the caller. Amount is optional so that a missing value is
/// reported as an invalid amount rather than a transport error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub personal_code: String,
    #[serde(default)]
    pub loan_amount: Option<i64>,
    pub loan_period: i64,
}

impl LoanRequest {
    pub fn new(personal_code: impl Into<String>, loan_amount: i64, loan_period: i64) -> Self {
        Self {
            personal_code: personal_code.into(),
            loan_amount: Some(loan_amount),
            loan_period,
        }
    }
}

/// Outcome record returned to callers.
///
/// Approved decisions carry amount and period; `error_message` is only filled when a failure is
/// rendered for a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub loan_amount: Option<u32>,
    pub loan_period: Option<u32>,
    pub error_message: Option<String>,
}

impl Decision {
    pub fn approved(loan_amount: u32, loan_period: u32) -> Self {
        Self {
            loan_amount: Some(loan_amount),
            loan_period: Some(loan_period),
            error_message: None,
        }
    }

    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            loan_amount: None,
            loan_period: None,
            error_message: Some(message.into()),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.loan_amount.is_some() && self.loan_period.is_some()
    }
}

/// Terminal failures of a decision request.
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    #[error("invalid personal code: {0}")]
    InvalidIdentifier(#[from] IdentifierRejection),
    #[error("{0}")]
    InvalidAmount(AmountRejection),
    #[error(
        "loan period {period} is invalid, it must be between {} and {} months",
        MINIMUM_LOAN_PERIOD,
        MAXIMUM_LOAN_PERIOD
    )]
    InvalidPeriod { period: i64 },
    #[error("customer is underage, the minimum age for a loan is {} years", MINIMUM_AGE)]
    Underage { age: u32 },
    #[error("customer exceeds the maximum age of {maximum_age} for a loan of this period")]
    OverAge { age: u32, maximum_age: u32 },
    #[error("no valid loan found")]
    NoValidLoan {
        #[source]
        source: Option<ScoringFault>,
    },
}

impl DecisionError {
    pub(crate) fn no_valid_loan() -> Self {
        Self::NoValidLoan { source: None }
    }

    /// True for failures the caller can fix by changing the request.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidIdentifier(_) | Self::InvalidAmount(_) | Self::InvalidPeriod { .. }
        )
    }
}

impl From<ScoringFault> for DecisionError {
    fn from(fault: ScoringFault) -> Self {
        Self::NoValidLoan {
            source: Some(fault),
        }
    }
}

impl From<IdentifierError> for DecisionError {
    fn from(error: IdentifierError) -> Self {
        Self::InvalidIdentifier(IdentifierRejection::Unreadable(error))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierRejection {
    #[error("personal code cannot be empty")]
    Empty,
    #[error("personal code failed validation")]
    Malformed,
    #[error(transparent)]
    Unreadable(IdentifierError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountRejection {
    #[error("loan amount is required")]
    Missing,
    #[error(
        "loan amount {0} is invalid, it must be between {} and {}",
        MINIMUM_LOAN_AMOUNT,
        MAXIMUM_LOAN_AMOUNT
    )]
    OutOfRange(i64),
}

/// Unexpected condition hit while scoring; surfaced as the cause of `NoValidLoan`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringFault {
    #[error("credit score for {amount} over {period} months is not a finite number")]
    NonFiniteScore { amount: u32, period: u32 },
}
