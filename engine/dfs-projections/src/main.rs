use clap::Parser;
use dfs_projections::config::OutputFormat;
use dfs_projections::{
    logging, JsonFileSource, ProjectionConfig, ProjectionEngine, ProjectionError,
    ProjectionReport, StatCategory,
};
use std::path::PathBuf;
use tracing::{error, info};

/// Rank NBA players by fantasy points projected from Over prop lines
#[derive(Parser)]
#[command(name = "dfs-projections")]
struct Cli {
    /// Config file (defaults, then this file, then DFS_* env vars)
    #[arg(short, long, default_value = dfs_projections::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// JSON file of prop lines, overrides source.path
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of players to print, overrides report.top_n
    #[arg(short, long)]
    top: Option<usize>,

    /// Output format, overrides report.format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    run(Cli::parse())?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), ProjectionError> {
    let mut config = ProjectionConfig::load_from(&cli.config)?;
    config.apply_overrides(cli.input, cli.top, cli.format);

    logging::initialize_logging(&config.logging)?;
    info!("Loaded configuration: {:?}", config);

    let source = JsonFileSource::new(&config.source.path);
    let engine = ProjectionEngine::new();

    let report = match engine.project_from(&source) {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to load prop lines: {}", e);
            return Err(e.into());
        }
    };

    match config.report.format {
        OutputFormat::Table => print_table(&report, config.report.top_n),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report.top(config.report.top_n))?);
        }
    }

    Ok(())
}

fn print_table(report: &ProjectionReport, top_n: usize) {
    print!("{:<4} {:<28} {:<12} {:>6}", "#", "Player", "Game", "FPTS");
    for category in StatCategory::ALL {
        print!(" {:>5}", category.code());
    }
    println!(" {:>5}", "Conf%");

    for (rank, projection) in report.top(top_n).iter().enumerate() {
        print!(
            "{:<4} {:<28} {:<12} {:>6.1}",
            rank + 1,
            projection.description,
            projection.matchup(),
            projection.fantasy_points
        );
        for category in StatCategory::ALL {
            print!(" {:>5.1}", projection.stat(category).unwrap_or(0.0));
        }
        println!(" {:>4.0}%", projection.projection_confidence);
    }

    println!(
        "Showing top {} of {} players by projected fantasy points.",
        top_n.min(report.projections.len()),
        report.projections.len()
    );
}
