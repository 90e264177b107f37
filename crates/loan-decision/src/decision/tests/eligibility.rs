use super::common::*;
use crate::decision::eligibility::age_on;
use crate::decision::DecisionError;
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn age_counts_whole_years() {
    assert_eq!(age_on(date(2008, 10, 19), today()), 18);
    assert_eq!(age_on(date(2008, 10, 20), today()), 17);
    assert_eq!(age_on(date(1990, 2, 1), today()), 36);
    assert_eq!(age_on(date(2008, 2, 29), date(2026, 2, 28)), 17);
    assert_eq!(age_on(date(2008, 2, 29), date(2026, 3, 1)), 18);
}

#[test]
fn birth_after_today_counts_as_zero() {
    assert_eq!(age_on(date(2030, 1, 1), today()), 0);
}

#[test]
fn customer_turning_18_today_is_eligible() {
    let decision = engine()
        .decide_on(&request(TURNS_18_TODAY, 4000, 12), today())
        .expect("18 year olds qualify");
    assert_eq!(decision.loan_amount, Some(10000));
}

#[test]
fn customer_aged_17_is_underage() {
    match engine().decide_on(&request(TURNS_18_TOMORROW, 4000, 12), today()) {
        Err(DecisionError::Underage { age }) => assert_eq!(age, 17),
        other => panic!("expected underage, got {other:?}"),
    }
}

#[test]
fn maximum_age_depends_on_jurisdiction_and_period() {
    let cases = [
        (ESTONIA_AGED_74, true),
        (ESTONIA_AGED_75, false),
        (LATVIA_AGED_71, true),
        (LATVIA_AGED_72, false),
        (LITHUANIA_AGED_72, true),
        (LITHUANIA_AGED_73, false),
    ];

    for (code, eligible) in cases {
        let outcome = engine().decide_on(&request(code, 4000, 48), today());
        match (eligible, outcome) {
            (true, Ok(decision)) => assert!(decision.is_approved()),
            (false, Err(DecisionError::OverAge { age, maximum_age })) => {
                assert_eq!(age, maximum_age + 1, "code {code}")
            }
            (expected, other) => panic!("code {code}: expected eligible={expected}, got {other:?}"),
        }
    }
}

#[test]
fn shorter_period_raises_maximum_age() {
    match engine().decide_on(&request(ESTONIA_AGED_75, 4000, 37), today()) {
        Err(DecisionError::OverAge { maximum_age, .. }) => assert_eq!(maximum_age, 74),
        other => panic!("expected over age for 37 months, got {other:?}"),
    }

    let decision = engine()
        .decide_on(&request(ESTONIA_AGED_75, 4000, 36), today())
        .expect("75 year olds qualify for three years in Estonia");
    assert_eq!(decision.loan_period, Some(36));
}

#[test]
fn age_is_checked_before_credit_segment() {
    let engine = crate::decision::DecisionEngine::with_validator(|_: &str| true);
    // born 2010, last four digits 0000
    match engine.decide_on(&request("61001010000", 4000, 12), today()) {
        Err(DecisionError::Underage { age }) => assert_eq!(age, 16),
        other => panic!("expected underage, got {other:?}"),
    }
}
