use std::path::Path;

use serde::Serialize;
use valora_core::models::alert::RiskAlert;
use valora_core::models::category::CategoryAggregate;
use valora_core::models::profile::OverallRiskProfile;
use valora_core::models::subject::Gender;
use valora_core::models::work_trial::{Concordance, DimensionScore};
use valora_narrative::render::generate_concept;
use valora_narrative::summary::{render_summary, render_work_trial_summary};
use valora_scoring::aggregate::aggregate_all;
use valora_scoring::alerts::detect_alerts;
use valora_scoring::all_batteries;
use valora_scoring::baremo::{concordance, score_dimensions};
use valora_scoring::synthesize::synthesize_overall;

use crate::cli::{Command, ConfigAction};
use crate::config::{self, ValoraConfig};
use crate::evaluation::{EvaluationFile, Scoring};

#[derive(Debug, Serialize)]
struct ScoreReport {
    aggregates: Vec<CategoryAggregate>,
    profile: OverallRiskProfile,
    alerts: Vec<RiskAlert>,
}

#[derive(Debug, Serialize)]
struct WorkTrialReport {
    dimensions: Vec<DimensionScore>,
    concordance: Concordance,
}

pub fn run(command: Command, config: &ValoraConfig, config_path: &Path) -> eyre::Result<()> {
    match command {
        Command::Batteries => list_batteries(),
        Command::Score { evaluation, json } => score(&evaluation, json, config),
        Command::Concept { evaluation, gender } => concept(&evaluation, gender, config),
        Command::Config { action } => match action {
            ConfigAction::Show => show_config(config, config_path),
            ConfigAction::Init { battery, force } => init_config(config_path, battery, force),
        },
    }
}

fn list_batteries() -> eyre::Result<()> {
    for battery in all_batteries() {
        println!(
            "{:<24} {:<28} {} categories, {} items, {}",
            battery.id(),
            battery.name(),
            battery.categories().len(),
            battery.item_count(),
            battery.method(),
        );
    }
    Ok(())
}

fn score(path: &Path, json: bool, config: &ValoraConfig) -> eyre::Result<()> {
    let evaluation = EvaluationFile::load(path)?;
    let categories = match evaluation.resolve(&config.default_battery)? {
        Scoring::Ratings(categories) => categories,
        Scoring::Baremo(battery) => {
            let dimensions =
                score_dimensions(battery.as_ref(), &evaluation.conditions, &evaluation.expert_levels)?;
            let concordance = concordance(&dimensions);
            if json {
                let report = WorkTrialReport {
                    dimensions,
                    concordance,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_work_trial_summary(&dimensions, &concordance));
            }
            return Ok(());
        }
    };

    let aggregates = aggregate_all(&evaluation.ratings, &categories);
    let profile = synthesize_overall(&aggregates);
    let alerts = detect_alerts(&evaluation.ratings, &categories);

    if json {
        let report = ScoreReport {
            aggregates,
            profile,
            alerts,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_summary(&aggregates, &profile));
    if !alerts.is_empty() {
        println!("\nAlertas de riesgo:");
        for alert in &alerts {
            println!("- {}", alert.message());
        }
    }
    Ok(())
}

fn concept(path: &Path, gender: Option<Gender>, config: &ValoraConfig) -> eyre::Result<()> {
    let mut evaluation = EvaluationFile::load(path)?;
    if let Some(gender) = gender {
        evaluation.subject.gender = gender;
    }
    let categories = match evaluation.resolve(&config.default_battery)? {
        Scoring::Ratings(categories) => categories,
        Scoring::Baremo(battery) => {
            return Err(eyre::eyre!(
                "battery '{}' is scored by baremo and has no psychological concept",
                battery.id()
            ));
        }
    };

    let aggregates = aggregate_all(&evaluation.ratings, &categories);
    let profile = synthesize_overall(&aggregates);
    println!("{}", generate_concept(&profile, &evaluation.subject)?);
    Ok(())
}

fn show_config(config: &ValoraConfig, path: &Path) -> eyre::Result<()> {
    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

fn init_config(path: &Path, battery: String, force: bool) -> eyre::Result<()> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    valora_scoring::require_battery(&battery)?;

    let config = ValoraConfig {
        default_battery: battery,
        ..ValoraConfig::default()
    };
    config::save_config(path, &config)?;
    println!("wrote {}", path.display());
    Ok(())
}
