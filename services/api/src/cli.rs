use crate::batch::{run_batch, run_decide, BatchArgs, DecideArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_decision::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Decision Engine",
    about = "Serve or run loan decisions from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Decide a single loan request and print the decision as JSON
    Decide(DecideArgs),
    /// Decide every request in a CSV file, printing one JSON line per row
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Decide(args) => run_decide(args),
        Command::Batch(args) => run_batch(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["loan-decision-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_decide_arguments() {
        let cli = Cli::try_parse_from([
            "loan-decision-api",
            "decide",
            "--personal-code",
            "49002019001",
            "--amount",
            "4000",
            "--period",
            "24",
            "--today",
            "2026-10-19",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Decide(args)) => {
                assert_eq!(args.personal_code, "49002019001");
                assert_eq!(args.amount, 4000);
                assert_eq!(args.period, 24);
                assert!(args.today.is_some());
            }
            other => panic!("expected decide command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_today() {
        let result = Cli::try_parse_from([
            "loan-decision-api",
            "batch",
            "--input",
            "requests.csv",
            "--today",
            "19/10/2026",
        ]);
        assert!(result.is_err());
    }
}
