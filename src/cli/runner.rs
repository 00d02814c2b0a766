use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use webpify::{ConversionParams, ParamsOverrides, RunSummary, convert_all};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn resolve_params(args: &CliArgs) -> Result<ConversionParams, AppError> {
    let from_file = match &args.config {
        Some(path) => {
            let overrides =
                ParamsOverrides::from_json_file(path).map_err(|source| AppError::Config {
                    path: path.clone(),
                    source,
                })?;
            info!("Loaded config: {:?}", path);
            overrides
        }
        None => ParamsOverrides::default(),
    };
    Ok(from_file.merged(args.overrides()).resolve()?)
}

fn write_summary(path: &Path, summary: &RunSummary) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json).map_err(|source| AppError::Summary {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Summary written to: {:?}", path);
    Ok(())
}

fn try_run(args: &CliArgs) -> Result<RunSummary, AppError> {
    let params = resolve_params(args)?;
    let summary = convert_all(&params)?;
    if let Some(path) = &args.summary_json {
        write_summary(path, &summary)?;
    }
    Ok(summary)
}

pub fn run(args: CliArgs) -> ExitCode {
    init_logging(args.log);

    match try_run(&args) {
        Ok(summary) => {
            info!(
                "Converted: {}, Failed: {}, Skipped: {}",
                summary.converted, summary.failed, summary.skipped
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("webpify.json");
        std::fs::write(
            &config,
            r#"{ "input_folder": "cfg_in", "output_folder": "cfg_out", "quality": 40 }"#,
        )
        .unwrap();

        let args = CliArgs::parse_from([
            "webpify",
            "--config",
            config.to_str().unwrap(),
            "--output",
            "flag_out",
        ]);
        let params = resolve_params(&args).unwrap();
        assert_eq!(params.input_folder, PathBuf::from("cfg_in"));
        assert_eq!(params.output_folder, PathBuf::from("flag_out"));
        assert_eq!(params.quality, 40);
    }

    #[test]
    fn missing_input_folder_exits_with_1() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let out = dir.path().join("out");
        let args = CliArgs::parse_from([
            "webpify",
            "-i",
            missing.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ]);

        let err = try_run(&args).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::from(1));
        assert!(!out.exists());
    }

    #[test]
    fn unreadable_config_exits_with_2() {
        let dir = tempfile::tempdir().unwrap();
        let args = CliArgs::parse_from([
            "webpify",
            "--config",
            dir.path().join("absent.json").to_str().unwrap(),
        ]);

        let err = try_run(&args).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
        assert_eq!(err.exit_code(), ExitCode::from(2));
    }

    #[test]
    fn summary_json_is_written_for_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("summary.json");
        let args = CliArgs::parse_from([
            "webpify",
            "-i",
            dir.path().to_str().unwrap(),
            "--summary-json",
            report.to_str().unwrap(),
        ]);

        let summary = try_run(&args).unwrap();
        assert_eq!(summary.converted, 0);

        let written: RunSummary =
            serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(written, summary);
    }
}
