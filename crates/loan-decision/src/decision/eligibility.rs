use chrono::{Datelike, NaiveDate};

use super::domain::DecisionError;
use super::identifier::{IdentifierError, PersonalCode};
use super::policy::MINIMUM_AGE;

/// Whole years between `birth_date` and `today`; zero when born after `today`.
pub(crate) fn age_on(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Rejects customers younger than the minimum age or too old to finish repaying within the
/// expected lifetime of their jurisdiction. Returns the age on success.
pub(crate) fn verify_age(
    code: &PersonalCode<'_>,
    loan_period: u32,
    today: NaiveDate,
) -> Result<u32, DecisionError> {
    let birth_date = code
        .birth_date()
        .ok_or(IdentifierError::ImpossibleBirthDate)?;
    let age = age_on(birth_date, today);

    if age < MINIMUM_AGE {
        return Err(DecisionError::Underage { age });
    }

    let maximum_age = code.jurisdiction().maximum_age(loan_period);
    if age > maximum_age {
        return Err(DecisionError::OverAge { age, maximum_age });
    }

    Ok(age)
}
