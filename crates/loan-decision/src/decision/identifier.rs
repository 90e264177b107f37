use chrono::NaiveDate;

use super::policy::{CreditSegment, Jurisdiction};

/// Well-formedness predicate for customer identifiers.
///
/// The engine only asks whether a code is acceptable; checksum rules live behind this seam so
/// deployments (and tests) can swap them.
pub trait IdentifierValidator: Send + Sync {
    fn is_valid(&self, code: &str) -> bool;
}

impl<F> IdentifierValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, code: &str) -> bool {
        self(code)
    }
}

/// Validator for Estonian personal codes (`GYYMMDDSSSC`).
#[derive(Debug, Clone, Copy, Default)]
pub struct EstonianPersonalCodeValidator;

const FIRST_STAGE_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECOND_STAGE_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

impl EstonianPersonalCodeValidator {
    /// Check digit for the first ten digits of a code.
    pub fn check_digit(digits: &[u32]) -> u32 {
        let weighted = |weights: &[u32; 10]| {
            digits
                .iter()
                .zip(weights.iter())
                .map(|(digit, weight)| digit * weight)
                .sum::<u32>()
                % 11
        };

        match weighted(&FIRST_STAGE_WEIGHTS) {
            10 => match weighted(&SECOND_STAGE_WEIGHTS) {
                10 => 0,
                remainder => remainder,
            },
            remainder => remainder,
        }
    }
}

impl IdentifierValidator for EstonianPersonalCodeValidator {
    fn is_valid(&self, code: &str) -> bool {
        if code.len() != 11 {
            return false;
        }
        let Ok(parsed) = PersonalCode::parse(code) else {
            return false;
        };
        if parsed.birth_date().is_none() {
            return false;
        }

        let digits: Vec<u32> = code.chars().filter_map(|c| c.to_digit(10)).collect();
        Self::check_digit(&digits[..10]) == digits[10]
    }
}

/// Reasons a code cannot be read as a personal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("personal code must contain only digits")]
    NonDigit,
    #[error("personal code is too short")]
    TooShort,
    #[error("personal code has an unknown century indicator {0}")]
    UnknownCentury(u32),
    #[error("personal code does not encode a calendar date")]
    ImpossibleBirthDate,
}

/// Digit-level view over a personal code.
///
/// Only the positions the policy reads are interpreted: century and birth date (1-7),
/// jurisdiction (8) and the trailing four digits used for the credit segment.
#[derive(Debug, Clone, Copy)]
pub struct PersonalCode<'a> {
    raw: &'a str,
}

impl<'a> PersonalCode<'a> {
    pub fn parse(raw: &'a str) -> Result<Self, IdentifierError> {
        if !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdentifierError::NonDigit);
        }
        if raw.len() < 8 {
            return Err(IdentifierError::TooShort);
        }

        let code = Self { raw };
        code.century_base()?;
        Ok(code)
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    fn number(&self, start: usize, end: usize) -> u32 {
        self.raw[start..end]
            .bytes()
            .fold(0, |acc, byte| acc * 10 + u32::from(byte - b'0'))
    }

    fn century_base(&self) -> Result<i32, IdentifierError> {
        match self.number(0, 1) {
            1 | 2 => Ok(1800),
            3 | 4 => Ok(1900),
            5 | 6 => Ok(2000),
            other => Err(IdentifierError::UnknownCentury(other)),
        }
    }

    /// Date of birth, or `None` when the encoded date does not exist.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        let year = self.century_base().ok()? + self.number(1, 3) as i32;
        NaiveDate::from_ymd_opt(year, self.number(3, 5), self.number(5, 7))
    }

    pub fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::from_digit(self.number(7, 8))
    }

    pub fn credit_segment(&self) -> CreditSegment {
        let start = self.raw.len() - 4;
        CreditSegment::from_digits(self.number(start, self.raw.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_codes_with_matching_check_digit() {
        let validator = EstonianPersonalCodeValidator;
        assert!(validator.is_valid("49002010965"));
        assert!(validator.is_valid("37605280247"));
        assert!(validator.is_valid("50810199608"));
    }

    #[test]
    fn rejects_malformed_codes() {
        let validator = EstonianPersonalCodeValidator;
        assert!(!validator.is_valid(""));
        assert!(!validator.is_valid("49002010966"));
        assert!(!validator.is_valid("4900201096"));
        assert!(!validator.is_valid("4900201096a"));
        assert!(!validator.is_valid("79002010965"));
        assert!(!validator.is_valid("49013010965"));
    }

    #[test]
    fn falls_back_to_second_stage_weights() {
        // first stage remainder for 4900201004 is 10
        let digits = [4, 9, 0, 0, 2, 0, 1, 0, 0, 4];
        assert_eq!(EstonianPersonalCodeValidator::check_digit(&digits), 6);
        assert!(EstonianPersonalCodeValidator.is_valid("49002010046"));
    }

    #[test]
    fn closures_act_as_validators() {
        let accept_all = |_: &str| true;
        assert!(accept_all.is_valid("anything"));
    }

    #[test]
    fn reads_birth_date_across_centuries() {
        let code = PersonalCode::parse("19901019608").expect("parses");
        assert_eq!(code.birth_date(), NaiveDate::from_ymd_opt(1899, 10, 19));

        let code = PersonalCode::parse("49002010965").expect("parses");
        assert_eq!(code.birth_date(), NaiveDate::from_ymd_opt(1990, 2, 1));

        let code = PersonalCode::parse("50810199608").expect("parses");
        assert_eq!(code.birth_date(), NaiveDate::from_ymd_opt(2008, 10, 19));
    }

    #[test]
    fn reads_jurisdiction_and_segment() {
        let code = PersonalCode::parse("35510197406").expect("parses");
        assert_eq!(code.jurisdiction(), Jurisdiction::Latvia);
        assert_eq!(code.credit_segment(), CreditSegment::Segment2);

        let code = PersonalCode::parse("35410198607").expect("parses");
        assert_eq!(code.jurisdiction(), Jurisdiction::Lithuania);
        assert_eq!(code.credit_segment(), CreditSegment::Segment3);
    }

    #[test]
    fn parse_rejects_unreadable_codes() {
        assert_eq!(
            PersonalCode::parse("4900a010965").unwrap_err(),
            IdentifierError::NonDigit
        );
        assert_eq!(
            PersonalCode::parse("4900201").unwrap_err(),
            IdentifierError::TooShort
        );
        assert_eq!(
            PersonalCode::parse("99002010965").unwrap_err(),
            IdentifierError::UnknownCentury(9)
        );
        let impossible = PersonalCode::parse("49013010965").expect("digits parse");
        assert!(impossible.birth_date().is_none());
    }
}
