use crate::render::{
    run_eligibility, run_modalities, run_readiness, EligibilityArgs, ModalitiesArgs,
    ReadinessArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fetp_readiness::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "FETP Credentialing Readiness",
    about = "Score country credentialing readiness and classify program eligibility",
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
    /// Print the readiness snapshot for one country
    Readiness(ReadinessArgs),
    /// Classify every program against the credentialing ladder
    Eligibility(EligibilityArgs),
    /// Compare training modalities and the programs running them
    Modalities(ModalitiesArgs),
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
        Command::Readiness(args) => run_readiness(args),
        Command::Eligibility(args) => run_eligibility(args),
        Command::Modalities(args) => run_modalities(args),
    }
}
