use crate::server;
use crate::tour::{run_tour, TourArgs};
use clap::{Args, Parser, Subcommand};
use proplus::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ProPlus Site Service",
    about = "Serve and demonstrate the ProPlus property marketing site from the command line",
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
    /// Walk every route and interaction on stdout for stakeholder demos
    Tour(TourArgs),
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
        Command::Tour(args) => run_tour(args),
    }
}
