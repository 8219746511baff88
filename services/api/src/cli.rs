use crate::demo::{run_demo, run_rating, run_report, RatingArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use courier_ops::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "courier-ops",
    about = "Rate delivery drivers and build customer report lines",
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
    /// Rate a single driver or every driver in a roster CSV
    Rating(RatingArgs),
    /// Print the report lines for a customer
    Report(ReportArgs),
    /// Print the reference rating and report scenarios
    Demo,
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
        Command::Rating(args) => run_rating(args),
        Command::Report(args) => {
            run_report(args);
            Ok(())
        }
        Command::Demo => {
            run_demo();
            Ok(())
        }
    }
}
