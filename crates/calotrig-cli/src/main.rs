// crates/calotrig-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "calotrig-cli")]
#[command(about = "ECAL trigger clustering: captures, pipeline runs, configs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a synthetic input capture (.ctf) of crystal showers
    Gen(cmd::gen::GenArgs),

    /// Run every frame of an input capture through the clustering pipeline
    Run(cmd::run::RunArgs),

    /// Inspect a capture (header, crc, optional per-frame decode)
    Inspect(cmd::inspect::InspectArgs),

    /// Configuration tools (.ctc)
    Config(cmd::config::ConfigArgs),
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    Registry::default().with(filter).with(fmt_layer).init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Gen(args) => cmd::gen::run(args),
        Commands::Run(args) => cmd::run::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Config(args) => cmd::config::run(args),
    }
}
