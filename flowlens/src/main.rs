use clap::{Parser, Subcommand};
use flowlens_core::cli::{
    AdsArgs, ConfigCmd, MetricsArgs, TiaraArgs, run_ads, run_config, run_metrics, run_tiara,
};
use flowlens_core::logging::{LogFormat, init_logging};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "flowlens",
    version,
    about = "FlowLens: ad lifecycle, Tiara analytics and traffic metrics from captured flows"
)]
struct Cli {
    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ad request, impression and click lifecycle per ad
    Ads(AdsArgs),

    /// Tiara analytics events
    Tiara(TiaraArgs),

    /// Traffic-wide summary, status codes, domains and latency
    Metrics(MetricsArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    });
    debug!(command = ?cli.command, "starting");

    let result = match cli.command {
        Command::Ads(args) => run_ads(args),
        Command::Tiara(args) => run_tiara(args),
        Command::Metrics(args) => run_metrics(args),
        Command::Config { cmd } => run_config(cmd),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
