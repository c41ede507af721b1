use std::fs::{create_dir_all, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use dfxray_core::{EvaluateResult, CONTRACT_VERSION};
use dfxray_eval::EvaluateOptions;

use crate::CliError;

/// Metadata captured at run start.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub aspect: String,
    pub category: String,
    pub registry_fingerprint: String,
    pub run_dir: PathBuf,
    pub options: EvaluateOptions,
}

/// JSON config written to each run directory.
#[derive(Debug, Serialize)]
struct RunConfig {
    run_id: String,
    started_at: String,
    contract_version: String,
    aspect: String,
    category: String,
    registry_fingerprint: String,
    options: EvaluateOptions,
}

/// Paths for run artifacts.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub result_path: PathBuf,
    pub report_path: PathBuf,
}

pub fn start_run(ctx: &RunContext) -> Result<RunPaths, CliError> {
    let timestamp = ctx.started_at.format("%Y-%m-%dT%H-%M-%SZ").to_string();
    let run_root = ctx.run_dir.join(format!("{timestamp}__run_{}", ctx.run_id));

    create_dir_all(&run_root)?;

    let config_path = run_root.join("config.json");
    let result_path = run_root.join("result.json");
    let report_path = run_root.join("report.md");

    let config = RunConfig {
        run_id: ctx.run_id.clone(),
        started_at: ctx.started_at.to_rfc3339(),
        contract_version: CONTRACT_VERSION.to_string(),
        aspect: ctx.aspect.clone(),
        category: ctx.category.clone(),
        registry_fingerprint: ctx.registry_fingerprint.clone(),
        options: ctx.options.clone(),
    };
    write_json(&config_path, &config)?;

    Ok(RunPaths {
        result_path,
        report_path,
    })
}

pub fn write_result(paths: &RunPaths, result: &EvaluateResult) -> Result<(), CliError> {
    write_json(&paths.result_path, result)?;
    std::fs::write(&paths.report_path, result.report.as_bytes())?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CliError> {
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    serde_json::to_writer_pretty(file, value).map_err(CliError::from)
}
