use super::domain::{AmountRejection, DecisionError, IdentifierRejection, LoanRequest};
use super::identifier::IdentifierValidator;
use super::policy::{
    MAXIMUM_LOAN_AMOUNT, MAXIMUM_LOAN_PERIOD, MINIMUM_LOAN_AMOUNT, MINIMUM_LOAN_PERIOD,
};

/// Amount and period after range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ValidatedTerms {
    pub loan_amount: u32,
    pub loan_period: u32,
}

/// Identifier, then amount, then period; the first failure wins.
pub(crate) fn verify_inputs<V>(
    validator: &V,
    request: &LoanRequest,
) -> Result<ValidatedTerms, DecisionError>
where
    V: IdentifierValidator + ?Sized,
{
    if request.personal_code.is_empty() {
        return Err(IdentifierRejection::Empty.into());
    }
    if !validator.is_valid(&request.personal_code) {
        return Err(IdentifierRejection::Malformed.into());
    }

    let amount = request
        .loan_amount
        .ok_or(DecisionError::InvalidAmount(AmountRejection::Missing))?;
    let loan_amount = u32::try_from(amount)
        .ok()
        .filter(|amount| (MINIMUM_LOAN_AMOUNT..=MAXIMUM_LOAN_AMOUNT).contains(amount))
        .ok_or(DecisionError::InvalidAmount(AmountRejection::OutOfRange(amount)))?;

    let loan_period = u32::try_from(request.loan_period)
        .ok()
        .filter(|period| (MINIMUM_LOAN_PERIOD..=MAXIMUM_LOAN_PERIOD).contains(period))
        .ok_or(DecisionError::InvalidPeriod {
            period: request.loan_period,
        })?;

    Ok(ValidatedTerms {
        loan_amount,
        loan_period,
    })
}
