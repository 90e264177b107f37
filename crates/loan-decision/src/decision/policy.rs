use serde::{Deserialize, Serialize};

pub const MINIMUM_LOAN_AMOUNT: u32 = 2000;
pub const MAXIMUM_LOAN_AMOUNT: u32 = 10000;
pub const MINIMUM_LOAN_PERIOD: u32 = 12;
pub const MAXIMUM_LOAN_PERIOD: u32 = 48;
pub const MINIMUM_AGE: u32 = 18;

/// A terms combination is approvable when its credit score reaches this value.
pub const APPROVAL_THRESHOLD: f64 = 0.1;

const SEGMENT_1_CREDIT_MODIFIER: u32 = 100;
const SEGMENT_2_CREDIT_MODIFIER: u32 = 300;
const SEGMENT_3_CREDIT_MODIFIER: u32 = 1000;

/// Customer risk class derived from the last four digits of the personal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditSegment {
    /// Outstanding debt; no loan is offered.
    Ineligible,
    Segment1,
    Segment2,
    Segment3,
}

impl CreditSegment {
    /// Maps a value in `0..=9999` onto its band. Larger values land in the top band.
    pub fn from_digits(value: u32) -> Self {
        match value {
            0..=2499 => Self::Ineligible,
            2500..=4999 => Self::Segment1,
            5000..=7499 => Self::Segment2,
            _ => Self::Segment3,
        }
    }

    pub fn credit_modifier(self) -> u32 {
        match self {
            Self::Ineligible => 0,
            Self::Segment1 => SEGMENT_1_CREDIT_MODIFIER,
            Self::Segment2 => SEGMENT_2_CREDIT_MODIFIER,
            Self::Segment3 => SEGMENT_3_CREDIT_MODIFIER,
        }
    }

    pub fn is_eligible(self) -> bool {
        self != Self::Ineligible
    }
}

/// Country bucket selecting the expected lifetime used for the maximum age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    Estonia,
    Latvia,
    Lithuania,
}

impl Jurisdiction {
    /// Selects the jurisdiction from the eighth digit of the personal code.
    pub fn from_digit(digit: u32) -> Self {
        match digit % 3 {
            0 => Self::Estonia,
            1 => Self::Latvia,
            _ => Self::Lithuania,
        }
    }

    pub fn expected_lifetime(self) -> u32 {
        match self {
            Self::Estonia => 78,
            Self::Latvia => 75,
            Self::Lithuania => 76,
        }
    }

    /// Oldest age at which a loan of `period_months` can still be granted.
    pub fn maximum_age(self, period_months: u32) -> u32 {
        let period_years = period_months.div_ceil(12);
        self.expected_lifetime().saturating_sub(period_years)
    }
}
