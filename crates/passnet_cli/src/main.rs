//! Passnet CLI
//!
//! Centrality report and substitution view for a stored match record.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use passnet_core::{analyze_match, substitution_view, Measure, Selection, Venue};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "passnet")]
#[command(about = "Passing-network analysis for football matches", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Centrality report for both teams
    Analyze {
        /// Match record JSON file
        #[arg(long = "match")]
        match_file: PathBuf,

        /// Analysis config (JSON, or YAML by extension)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Only report this measure (e.g. "pagerank", "closeness centrality")
        #[arg(long)]
        measure: Option<String>,

        /// Players listed per measure
        #[arg(long, default_value = "3")]
        top: usize,

        /// Write the full analysis as JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Network of a player selection, thresholded by pass count
    Subs {
        /// Match record JSON file
        #[arg(long = "match")]
        match_file: PathBuf,

        /// Team side: home or away
        #[arg(long)]
        venue: Venue,

        /// Comma-separated players (default: starters)
        #[arg(long)]
        players: Option<String>,

        /// Minimum passes per drawn connection (default from config)
        #[arg(long)]
        min_passes: Option<u32>,

        /// Analysis config (JSON, or YAML by extension)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the view as JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze { match_file, config, measure, top, out } => {
            let only = measure
                .as_deref()
                .map(str::parse::<Measure>)
                .transpose()
                .context("Invalid --measure")?;
            let cfg = passnet_cli::load_config(config.as_deref())?;
            let record = passnet_cli::load_match(&match_file)?;

            tracing::info!("Analysing {}", match_file.display());
            let analysis = analyze_match(&record, &cfg)?;
            print!("{}", passnet_cli::render_analysis(&analysis, only, top));

            if let Some(path) = out {
                passnet_cli::write_json(&path, &analysis)?;
                println!("Report saved to: {}", path.display());
            }
        }

        Commands::Subs { match_file, venue, players, min_passes, config, out } => {
            let cfg = passnet_cli::load_config(config.as_deref())?;
            let record = passnet_cli::load_match(&match_file)?;
            let graph = record
                .team_graph(venue)
                .with_context(|| format!("Invalid {} network", venue))?;

            let limit = cfg.substitution.max_selection;
            let selection = match players {
                Some(list) => Selection::with_limit(passnet_cli::parse_players(&list), limit),
                None => Selection::with_limit(record.side(venue).lineup.starters(), limit),
            };
            let min_passes = min_passes.unwrap_or(cfg.substitution.min_passes);

            let view = substitution_view(&graph, venue, &selection, min_passes);
            print!("{}", passnet_cli::render_substitution(&view));

            if let Some(path) = out {
                passnet_cli::write_json(&path, &view)?;
                println!("View saved to: {}", path.display());
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("passnet CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
