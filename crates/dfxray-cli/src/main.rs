mod logging;
mod run;

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use dfxray_core::{Error as CoreError, EvaluateRequest};
use dfxray_eval::{EvalError, EvaluateOptions, EvaluationEngine};
use dfxray_rules::{RuleRegistry, REGISTRY_VERSION};
use run::{start_run, RunContext};

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "dfxray", version, about = "DfX design evaluation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a design brief against one DfX aspect.
    Evaluate(EvaluateArgs),
    /// List the rule registry.
    Aspects(AspectsArgs),
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Aspect wire code (DFA, DFM, DFS, DFSust).
    #[arg(long)]
    aspect: String,
    /// Product category label.
    #[arg(long, default_value = "")]
    category: String,
    /// Design brief text.
    #[arg(long, conflicts_with = "description_file")]
    description: Option<String>,
    /// Read the design brief from a file.
    #[arg(long)]
    description_file: Option<PathBuf>,
    /// TOML file overriding evaluation options.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for fallback phrasing, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
    /// Directory for run artifacts.
    #[arg(long, default_value = "runs")]
    run_dir: PathBuf,
    /// Skip writing run artifacts.
    #[arg(long, default_value_t = false)]
    no_artifacts: bool,
    /// Print the result as JSON instead of the report.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Append JSON logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct AspectsArgs {
    /// Print the registry as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Evaluate(args) => run_evaluate(args),
        Command::Aspects(args) => run_aspects(args),
    }
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), CliError> {
    logging::init(args.log_file.as_deref())?;

    let mut options = match &args.config {
        Some(path) => toml::from_str::<EvaluateOptions>(&fs::read_to_string(path)?)?,
        None => EvaluateOptions::default(),
    };
    if args.seed.is_some() {
        options.seed = args.seed;
    }

    let registry = RuleRegistry::load()?;
    let fingerprint = registry.fingerprint().to_string();
    let engine = EvaluationEngine::new(registry, options.clone());

    let description = match (&args.description, &args.description_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => String::new(),
    };

    let request = EvaluateRequest {
        description,
        aspect: args.aspect.clone(),
        category: args.category.clone(),
        raw_features: None,
    };

    info!(aspect = %args.aspect, category = %args.category, "starting evaluation");
    let result = engine.evaluate(&request)?;
    info!(
        score = result.score,
        qualifier = result.qualifier.label(),
        recommendations = result.recommendations.len(),
        "evaluation finished"
    );

    if !args.no_artifacts {
        let ctx = RunContext {
            run_id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            aspect: args.aspect.clone(),
            category: args.category.clone(),
            registry_fingerprint: fingerprint,
            run_dir: args.run_dir.clone(),
            options,
        };
        let paths = start_run(&ctx)?;
        run::write_result(&paths, &result)?;
        info!(result = %paths.result_path.display(), "artifacts written");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.report);
    }

    Ok(())
}

fn run_aspects(args: AspectsArgs) -> Result<(), CliError> {
    let registry = RuleRegistry::load()?;

    if args.json {
        let aspects: Vec<serde_json::Value> = registry
            .aspects()
            .map(|aspect| {
                serde_json::json!({
                    "id": aspect.id.code(),
                    "name": aspect.name,
                    "description": aspect.description,
                    "rules": aspect.rules.iter().map(|rule| {
                        serde_json::json!({
                            "id": rule.id,
                            "name": rule.name,
                            "weight": rule.weight,
                            "unit": rule.unit,
                            "optimal": rule.optimal,
                            "acceptable": rule.acceptable,
                        })
                    }).collect::<Vec<_>>(),
                    "positive_indicators": aspect.positive_indicators,
                    "negative_indicators": aspect.negative_indicators,
                })
            })
            .collect();
        let listing = serde_json::json!({
            "registry_version": REGISTRY_VERSION,
            "fingerprint": registry.fingerprint(),
            "aspects": aspects,
        });
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!(
        "DfX rule registry v{REGISTRY_VERSION} (fingerprint {})",
        registry.fingerprint()
    );
    for aspect in registry.aspects() {
        println!();
        println!("{} - {}", aspect.id.code(), aspect.name);
        println!("  {}", aspect.description);
        for rule in &aspect.rules {
            let unit = rule.unit.map(|unit| format!(" [{unit}]")).unwrap_or_default();
            println!(
                "  {:>4.0}%  {}{unit}",
                rule.weight * 100.0,
                rule.name
            );
        }
    }

    Ok(())
}
