use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use jiffytop::config::{self, load_config, load_config_from_path};
use jiffytop::logging::init_tracing;
use jiffytop::report;
use jiffytop::system::clock::ClockTicks;
use jiffytop::system::collector::Collector;
use jiffytop::system::snapshot::SortMode;
use jiffytop::system::sources::ProcSources;

#[derive(Parser)]
#[command(
    name = "jiffytop",
    about = "Report CPU, memory and per-process utilization from /proc"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wait between the two CPU counter samples, in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Sort order: cpu, memory, pid
    #[arg(long)]
    sort: Option<String>,

    /// Maximum number of processes to list
    #[arg(long)]
    limit: Option<usize>,

    /// Print the full snapshot as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log debug details to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json)?;
    let config = load_config_for_cli(&cli);

    let interval = Duration::from_millis(config.general.sample_interval_ms);
    let sort_mode = SortMode::from_str_config(&config.general.default_sort);
    tracing::debug!(?interval, sort = sort_mode.label(), "sampling");

    let mut collector =
        Collector::new(ProcSources::default(), ClockTicks::host()).with_sort_mode(sort_mode);
    tokio::time::sleep(interval).await;
    let snapshot = collector.refresh();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", report::render(&snapshot, &config.display));
    }

    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(interval) = cli.interval_ms {
        config.general.sample_interval_ms = interval;
    }
    if let Some(ref sort) = cli.sort {
        config.general.default_sort = sort.clone();
    }
    if let Some(limit) = cli.limit {
        config.display.max_processes = limit;
    }

    config
}
