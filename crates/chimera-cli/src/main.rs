//! `chimera` - run campaigns through the swarm from the command line.
//!
//! The reference skills are registered; storage is in memory, so each
//! invocation starts from an empty store.

mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chimera_core::app::OrchestratorBuilder;
use chimera_core::config::{SwarmConfig, load_config};
use chimera_core::domain::{Campaign, CampaignId, ResultRecord};
use chimera_core::impls::TemplatePlanner;
use chimera_core::impls::skills::reference_registry;
use chimera_core::ports::{Planner, SystemClock, UlidGenerator};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::sync::Arc;

const DEFAULT_CONFIG: &str = "chimera.toml";

#[derive(Parser)]
#[command(name = "chimera", version, about = "Plan, execute and validate content campaigns")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a campaign and print one line per task result.
    Run {
        #[command(flatten)]
        campaign: CampaignArgs,
        /// Override the auto-approval threshold.
        #[arg(long)]
        threshold: Option<f64>,
        /// Print the result records as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the plan generated for a campaign as JSON.
    Plan {
        #[command(flatten)]
        campaign: CampaignArgs,
        /// Replan with this feedback applied.
        #[arg(long)]
        feedback: Option<String>,
    },
    /// List registered capability names.
    Capabilities,
}

#[derive(Args)]
struct CampaignArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    goal: String,
    /// TOML config file. Missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG)]
    config: PathBuf,
}

#[derive(Serialize)]
struct RunReport<'a> {
    campaign_id: CampaignId,
    records: &'a [ResultRecord],
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

#[tokio::main]
async fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            campaign,
            threshold,
            json,
        } => cmd_run(campaign, threshold, json).await,
        Command::Plan { campaign, feedback } => cmd_plan(campaign, feedback).await,
        Command::Capabilities => cmd_capabilities(),
    }
}

fn load(args: &CampaignArgs) -> Result<(SwarmConfig, Campaign)> {
    let config = load_config(&args.config)
        .with_context(|| format!("load config {}", args.config.display()))?;
    let campaign = Campaign::new(args.title.as_str(), args.goal.as_str())?;
    Ok((config, campaign))
}

async fn cmd_run(args: CampaignArgs, threshold: Option<f64>, json: bool) -> Result<()> {
    let (mut config, campaign) = load(&args)?;
    if let Some(threshold) = threshold {
        config.confidence_threshold = threshold;
        config.validate().context("--threshold")?;
    }

    let orchestrator = OrchestratorBuilder::from_config(&config)
        .registry(reference_registry())
        .build()?;
    tracing::debug!(health = ?orchestrator.health(), "orchestrator ready");

    let records = orchestrator
        .run(&campaign)
        .await
        .with_context(|| format!("run campaign {}", campaign.id))?;

    if json {
        let report = RunReport {
            campaign_id: campaign.id,
            records: &records,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for record in &records {
            println!(
                "{} {} {}",
                record.status,
                record.capability,
                record.feedback.as_deref().unwrap_or("")
            );
        }
    }
    Ok(())
}

async fn cmd_plan(args: CampaignArgs, feedback: Option<String>) -> Result<()> {
    let (config, campaign) = load(&args)?;
    let planner = TemplatePlanner::new(Arc::new(UlidGenerator::new(SystemClock)), config.planner);

    let plan = match feedback {
        Some(feedback) => planner.replan(&campaign, &feedback).await,
        None => planner.create_plan(&campaign).await,
    };
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn cmd_capabilities() -> Result<()> {
    for name in reference_registry().names() {
        println!("{name}");
    }
    Ok(())
}
