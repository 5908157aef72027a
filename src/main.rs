use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use playoff_pool::api::state::AppState;
use playoff_pool::calculate::{
    build_leaderboard, normalize_name, resolve_submission, roster, score_lineup, KickoffSchedule,
    ScoreIndex,
};
use playoff_pool::config::AppConfig;
use playoff_pool::fetch::{SheetsClient, SnapshotSource, StaticSource};
use playoff_pool::ingest;
use playoff_pool::models::{PickSubmission, PlayerScoreRecord, Position, Round};

#[derive(Parser)]
#[command(name = "playoff-pool")]
#[command(about = "Fantasy football playoff pool scoreboard")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Read the picks worksheet from a local JSON file instead of HTTP
    #[arg(long)]
    fixture_picks: Option<PathBuf>,

    /// Read the scores worksheet from a local JSON file instead of HTTP
    #[arg(long)]
    fixture_scores: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the current leaderboard
    Leaderboard,

    /// Print one user's lineup for a round
    Lineup {
        /// Competitor name
        #[arg(long)]
        user: String,

        /// Round name (e.g. "Wildcard")
        #[arg(long)]
        round: String,

        /// Viewer identity for visibility gating (defaults to public view)
        #[arg(long)]
        viewer: Option<String>,
    },
}

fn load_config(path: &PathBuf) -> Result<AppConfig> {
    if path.exists() {
        AppConfig::from_file(path).with_context(|| format!("loading {}", path.display()))
    } else {
        tracing::info!("No config file at {}, using defaults", path.display());
        Ok(AppConfig::default())
    }
}

fn build_source(cli: &Cli, config: &AppConfig) -> Result<Arc<dyn SnapshotSource>> {
    match (&cli.fixture_picks, &cli.fixture_scores) {
        (Some(picks), Some(scores)) => {
            let source = StaticSource::from_files(picks, scores)
                .context("loading worksheet fixtures")?;
            Ok(Arc::new(source))
        }
        (None, None) => {
            let Some(source) = &config.source else {
                bail!("No [source] configured and no fixtures given");
            };
            let client = SheetsClient::new(
                source.picks_url.clone(),
                source.scores_url.clone(),
                source.cache_ttl(),
            )?;
            Ok(Arc::new(client))
        }
        _ => bail!("--fixture-picks and --fixture-scores must be given together"),
    }
}

async fn load_snapshots(
    source: &Arc<dyn SnapshotSource>,
) -> Result<(Vec<PickSubmission>, Vec<PlayerScoreRecord>)> {
    let picks_rows = source.picks().await.context("fetching picks snapshot")?;
    let scores_rows = source.scores().await.context("fetching scores snapshot")?;
    Ok((
        ingest::parse_picks(&picks_rows),
        ingest::parse_scores(&scores_rows),
    ))
}

fn print_leaderboard(submissions: &[PickSubmission], scores: &[PlayerScoreRecord]) {
    let entries = build_leaderboard(submissions, scores);
    if entries.is_empty() {
        println!("No picks have been submitted yet.");
        return;
    }

    print!("{:<5} {:<30}", "Rank", "User");
    for round in Round::ALL {
        print!(" {:>12}", round.as_str());
    }
    println!(" {:>10}", "Season");

    for entry in entries {
        print!("#{:<4} {:<30}", entry.rank, entry.identity);
        for round in Round::ALL {
            print!(" {:>12.1}", entry.per_round.get(&round).copied().unwrap_or(0.0));
        }
        println!(" {:>10.1}", entry.total);
    }
}

fn print_lineup(
    submissions: &[PickSubmission],
    scores: &[PlayerScoreRecord],
    schedule: &KickoffSchedule,
    user: &str,
    round: Round,
    viewer: Option<&str>,
) -> Result<()> {
    let wanted = normalize_name(user);
    let Some(identity) = roster(submissions)
        .into_iter()
        .find(|candidate| normalize_name(candidate) == wanted)
    else {
        bail!("No picks found for user {user:?}");
    };

    let index = ScoreIndex::new(scores);
    let resolved = resolve_submission(submissions, &identity, round);
    let lineup = score_lineup(resolved, &identity, round, &index);

    let visible = schedule.can_view_lineup(round, Utc::now(), viewer, &identity);
    let shown = if visible { lineup.clone() } else { lineup.redacted() };

    println!("{} - {}", identity, round);
    for position in Position::ALL {
        let slot = &shown.positions[&position];
        println!(
            "  {:<4} {:<25} {:>6.1}",
            position.as_str(),
            slot.player.as_deref().unwrap_or("-"),
            slot.points
        );
    }
    println!("  Total {:>31.1}", lineup.round_total());
    if !visible {
        println!("  (player names hidden until kickoff)");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let config = load_config(&cli.config)?;
    let source = build_source(&cli, &config)?;
    let schedule = config.schedule.kickoff_schedule();

    match cli.command {
        Commands::Serve { host, port } => {
            let state = AppState {
                source,
                schedule: Arc::new(schedule),
            };
            let app = playoff_pool::api::build_router(state);

            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Scoreboard API: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Leaderboard => {
            let (submissions, scores) = load_snapshots(&source).await?;
            print_leaderboard(&submissions, &scores);
        }
        Commands::Lineup {
            user,
            round,
            viewer,
        } => {
            let Some(round) = Round::parse(&round) else {
                bail!("Unknown round {round:?} (expected one of: Wildcard, Divisional, Conference, Super Bowl)");
            };
            let (submissions, scores) = load_snapshots(&source).await?;
            print_lineup(
                &submissions,
                &scores,
                &schedule,
                &user,
                round,
                viewer.as_deref(),
            )?;
        }
    }

    Ok(())
}
