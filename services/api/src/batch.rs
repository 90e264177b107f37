use crate::infra::{build_engine, parse_date};
use chrono::NaiveDate;
use clap::Args;
use loan_decision::config::AppConfig;
use loan_decision::decision::{Decision, DecisionEngine, IdentifierValidator, LoanRequest};
use loan_decision::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    /// Customer personal code
    #[arg(long)]
    pub(crate) personal_code: String,
    /// Requested loan amount
    #[arg(long)]
    pub(crate) amount: i64,
    /// Requested loan period in months
    #[arg(long)]
    pub(crate) period: i64,
    /// Date used for age checks (defaults to APP_DECISION_DATE or today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with personal_code, loan_amount and loan_period columns
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Date used for age checks (defaults to APP_DECISION_DATE or today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
struct BatchRow {
    personal_code: String,
    loan_amount: Option<i64>,
    loan_period: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchOutcome {
    row: usize,
    personal_code: String,
    #[serde(flatten)]
    decision: Decision,
}

pub(crate) fn run_decide(args: DecideArgs) -> Result<(), AppError> {
    let DecideArgs {
        personal_code,
        amount,
        period,
        today,
    } = args;

    let config = AppConfig::load()?;
    let engine = build_engine(&config.decision, today);
    let decision = engine.decide(&LoanRequest::new(personal_code, amount, period))?;

    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = build_engine(&config.decision, args.today);
    let file = File::open(&args.input)?;

    let stdout = io::stdout();
    let decided = decide_rows(&engine, file, stdout.lock())?;
    eprintln!("decided {decided} request(s) from {}", args.input.display());
    Ok(())
}

/// Decides each CSV row, writing one JSON object per line. Declined rows carry the error message
/// instead of aborting the batch; malformed CSV does abort it.
fn decide_rows<V, R, W>(
    engine: &DecisionEngine<V>,
    reader: R,
    mut writer: W,
) -> Result<usize, AppError>
where
    V: IdentifierValidator,
    R: Read,
    W: Write,
{
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut decided = 0;

    for (index, row) in csv_reader.deserialize::<BatchRow>().enumerate() {
        let row = row.map_err(io::Error::from)?;
        let request = LoanRequest {
            personal_code: row.personal_code,
            loan_amount: row.loan_amount,
            loan_period: row.loan_period,
        };

        let decision = match engine.decide(&request) {
            Ok(decision) => decision,
            Err(error) => {
                debug!(row = index + 1, %error, "batch row declined");
                Decision::declined(error.to_string())
            }
        };

        let outcome = BatchOutcome {
            row: index + 1,
            personal_code: request.personal_code,
            decision,
        };
        serde_json::to_writer(&mut writer, &outcome)?;
        writeln!(writer)?;
        decided += 1;
    }

    writer.flush()?;
    Ok(decided)
}
