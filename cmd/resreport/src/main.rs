use anyhow::bail;
use clap::{ArgAction, Parser};
use pkg_client::ApiClient;
use pkg_report::build_reports;
use pkg_types::config::{ReportConfigFile, load_config_file};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;
mod settings;

use render::Palette;
use settings::{OutputFormat, Overrides, Settings, default_config_path};

/// Exit status when the cluster has no pods or quotas to report on.
const EXIT_NOTHING_FOUND: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "resreport",
    about = "Resource request, limit and quota reports from a Kubernetes-shaped cluster API"
)]
struct Cli {
    /// Path to YAML config file [default: ~/.k3rs/report.yaml]
    #[arg(long, short)]
    config: Option<String>,

    /// Cluster API endpoint
    #[arg(long, env = "RESREPORT_SERVER")]
    server: Option<String>,

    /// Bearer token for the cluster API
    #[arg(long, env = "RESREPORT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Report on the Running and Pending pods bound to this node
    #[arg(long)]
    node_name: Option<String>,

    /// Report cluster-wide quota allocation and usage
    #[arg(long)]
    cluster_report: bool,

    /// Output format
    #[arg(long, short, value_enum)]
    output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config file (returns defaults if file not found)
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let file_cfg: ReportConfigFile = load_config_file(&config_path)?;
    info!("Config file: {}", config_path);

    let settings = Settings::resolve(
        Overrides {
            server: cli.server,
            token: cli.token,
            node_name: cli.node_name,
            cluster_report: cli.cluster_report,
            output: cli.output,
        },
        file_cfg,
    )?;
    if settings.report.is_empty() {
        bail!("nothing to report: pass --node-name <NODE> and/or --cluster-report");
    }
    info!("Querying {}", settings.server);

    let client = ApiClient::new(&settings.server, settings.token.clone())?;
    let reports = match build_reports(&client, &settings.report).await {
        Ok(reports) => reports,
        Err(err) if err.is_empty_result() => {
            eprintln!("resreport: {}", err);
            std::process::exit(EXIT_NOTHING_FOUND);
        }
        Err(err) => return Err(err.into()),
    };
    let view = reports.normalize();

    let mut out = std::io::stdout().lock();
    match settings.output {
        OutputFormat::Table => render::write_reports(&mut out, &view, Palette::new(!cli.no_color))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &view)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
