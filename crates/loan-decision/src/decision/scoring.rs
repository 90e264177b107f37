use tracing::debug;

use super::domain::{Decision, ScoringFault};
use super::policy::{
    CreditSegment, APPROVAL_THRESHOLD, MAXIMUM_LOAN_AMOUNT, MAXIMUM_LOAN_PERIOD,
    MINIMUM_LOAN_AMOUNT, MINIMUM_LOAN_PERIOD,
};

/// `(modifier / amount) * period / 10`. A zero amount scores zero.
pub fn credit_score(credit_modifier: u32, loan_amount: u32, loan_period: u32) -> f64 {
    if loan_amount == 0 {
        return 0.0;
    }
    (f64::from(credit_modifier) / f64::from(loan_amount)) * f64::from(loan_period) / 10.0
}

/// Scoring context for a single request.
///
/// The credit modifier lives here rather than on the engine so concurrent decisions never
/// observe each other's segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditScorer {
    credit_modifier: u32,
}

impl CreditScorer {
    pub fn new(credit_modifier: u32) -> Self {
        Self { credit_modifier }
    }

    /// `None` for segments that are never offered a loan.
    pub fn for_segment(segment: CreditSegment) -> Option<Self> {
        segment
            .is_eligible()
            .then(|| Self::new(segment.credit_modifier()))
    }

    pub fn credit_modifier(&self) -> u32 {
        self.credit_modifier
    }

    pub fn score(&self, loan_amount: u32, loan_period: u32) -> f64 {
        credit_score(self.credit_modifier, loan_amount, loan_period)
    }

    pub fn qualifies(&self, loan_amount: u32, loan_period: u32) -> Result<bool, ScoringFault> {
        let score = self.score(loan_amount, loan_period);
        if !score.is_finite() {
            return Err(ScoringFault::NonFiniteScore {
                amount: loan_amount,
                period: loan_period,
            });
        }
        Ok(score >= APPROVAL_THRESHOLD)
    }

    /// Largest amount in the policy range that qualifies for `loan_period`.
    ///
    /// The score falls as the amount grows, so qualifying amounts form a prefix of the range and
    /// a binary search that records hits and moves right finds its end.
    pub fn max_approved_amount(&self, loan_period: u32) -> Result<Option<u32>, ScoringFault> {
        let mut low = MINIMUM_LOAN_AMOUNT;
        let mut high = MAXIMUM_LOAN_AMOUNT;
        let mut best = None;

        while low <= high {
            let mid = low + (high - low) / 2;
            if self.qualifies(mid, loan_period)? {
                best = Some(mid);
                low = mid + 1;
            } else {
                // mid >= MINIMUM_LOAN_AMOUNT > 0, no underflow
                high = mid - 1;
            }
        }

        Ok(best)
    }

    /// Shortest period in the policy range at which `loan_amount` qualifies.
    pub fn min_qualifying_period(&self, loan_amount: u32) -> Result<Option<u32>, ScoringFault> {
        let mut low = MINIMUM_LOAN_PERIOD;
        let mut high = MAXIMUM_LOAN_PERIOD;
        let mut best = None;

        while low <= high {
            let mid = low + (high - low) / 2;
            if self.qualifies(loan_amount, mid)? {
                best = Some(mid);
                high = mid - 1;
            } else {
                low = mid + 1;
            }
        }

        Ok(best)
    }

    /// Offer for when the requested period yields nothing: first the requested amount over the
    /// shortest period that carries it, then the first period (ascending) with any approvable
    /// amount.
    pub fn find_alternative(&self, loan_amount: u32) -> Result<Option<Decision>, ScoringFault> {
        if let Some(period) = self.min_qualifying_period(loan_amount)? {
            debug!(loan_amount, period, "requested amount fits a longer period");
            return Ok(Some(Decision::approved(loan_amount, period)));
        }

        for period in MINIMUM_LOAN_PERIOD..=MAXIMUM_LOAN_PERIOD {
            if let Some(amount) = self.max_approved_amount(period)? {
                if amount >= MINIMUM_LOAN_AMOUNT {
                    debug!(amount, period, "reduced amount fits a longer period");
                    return Ok(Some(Decision::approved(amount, period)));
                }
            }
        }

        Ok(None)
    }
}
