//! Passnet CLI Library
//!
//! Match file → TeamGraph → centrality report
//! Match file + selection → substitution view

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use passnet_core::{
    AnalysisConfig, MatchAnalysis, MatchRecord, Measure, MeasureOutcome, SubstitutionView,
    TeamAnalysis,
};

/// Read a stored match record from a JSON file.
pub fn load_match(path: &Path) -> Result<MatchRecord> {
    let json_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read match file: {}", path.display()))?;
    MatchRecord::from_json_str(&json_str)
        .with_context(|| format!("Failed to parse match file: {}", path.display()))
}

/// Read an analysis configuration; `.yaml`/`.yml` files are parsed as YAML,
/// anything else as JSON. No path means defaults.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let config = if is_yaml {
        AnalysisConfig::from_yaml_str(&text)
    } else {
        AnalysisConfig::from_json_str(&text)
    };
    config.with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Split a comma-separated player list, dropping empty entries.
pub fn parse_players(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Write any serializable report as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("Failed to write: {}", path.display()))?;
    Ok(())
}

/// Plain-text report of both teams: summary lines plus the top `top`
/// players of each measure (or only `only`, when given).
pub fn render_analysis(analysis: &MatchAnalysis, only: Option<Measure>, top: usize) -> String {
    let mut out = String::new();
    for team in [&analysis.home, &analysis.away] {
        render_team(&mut out, team, only, top);
    }
    out
}

fn render_team(out: &mut String, team: &TeamAnalysis, only: Option<Measure>, top: usize) {
    let _ = writeln!(out, "{} ({}) - coach {}", team.team, team.venue, team.coach);
    let _ = writeln!(
        out,
        "   Players: {}   Connections: {}   Passes: {}",
        team.players, team.connections, team.total_passes
    );
    if let Some(p) = team.average_positions.attacking {
        let _ = writeln!(out, "   Attacking half avg: ({:.1}, {:.1})", p.x, p.y);
    }
    if let Some(p) = team.average_positions.defensive {
        let _ = writeln!(out, "   Defensive half avg: ({:.1}, {:.1})", p.x, p.y);
    }

    for (measure, outcome) in &team.measures {
        if only.is_some_and(|m| m != *measure) {
            continue;
        }
        match outcome {
            MeasureOutcome::Available { scores, .. } => {
                let _ = writeln!(out, "   {}:", measure.title());
                for (rank, (player, score)) in scores.top(top).into_iter().enumerate() {
                    let _ = writeln!(out, "      {}. {:<20} {:.4}", rank + 1, player, score);
                }
            }
            MeasureOutcome::Unavailable { reason } => {
                let _ = writeln!(out, "   {}: unavailable ({})", measure.title(), reason);
            }
        }
    }
    out.push('\n');
}

/// Plain-text listing of a substitution view.
pub fn render_substitution(view: &SubstitutionView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} network: {} players, {} connections (>= {} passes)",
        view.venue,
        view.graph.node_count(),
        view.graph.edge_count(),
        view.min_passes
    );
    for (from, to, passes) in view.graph.edges() {
        let _ = writeln!(out, "   {} -> {}: {}", from, to, passes);
    }
    for dp in &view.display_positions {
        let _ = writeln!(out, "   @ {:<20} ({:.1}, {:.1})", dp.player, dp.position.x, dp.position.y);
    }
    out
}
