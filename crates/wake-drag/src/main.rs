//! Command-line front end: run cases, validate against measurements and
//! dump the wake retention curve.

mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use case_format::{load_case_file, write_result_file};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use validation_harness::{run_validation, ValidationManifest};
use wake_solver::WakeConfig;

#[derive(Parser, Debug)]
#[command(name = "wake-drag", version, about = "Drag estimates for assemblies of primitive shapes with wake shadowing")]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a case file and write its result
    Run {
        /// Input case .json
        case: PathBuf,
        /// Output result file (default: <case_stem>.result.json next to the case)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Run every case of a validation manifest and print the report
    Validate {
        /// Manifest .json listing cases and measured drags
        manifest: PathBuf,
    },
    /// Print the wake retention curve as CSV
    RetentionCurve {
        /// Number of evenly spaced samples
        #[arg(long, default_value_t = 101)]
        samples: usize,
        /// Take the curve from this case's configuration instead of the default
        #[arg(long)]
        case: Option<PathBuf>,
        /// Print the raw control points instead of samples
        #[arg(long)]
        control_points: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Run { case, output } => run_case(&case, output),
        Command::Validate { manifest } => validate(&manifest),
        Command::RetentionCurve {
            samples,
            case,
            control_points,
        } => retention_curve(samples, case.as_deref(), control_points),
    }
}

fn run_case(path: &Path, output: Option<PathBuf>) -> Result<ExitCode> {
    let case = load_case_file(path).with_context(|| format!("loading {}", path.display()))?;
    let result = case
        .assembly
        .run(&case.config)
        .with_context(|| format!("running case {}", case.name()))?;

    print!("{}", output::summary(&result));

    let out = output.unwrap_or_else(|| default_result_path(path));
    write_result_file(&out, &result).with_context(|| format!("writing {}", out.display()))?;
    info!(path = %out.display(), "done");
    Ok(ExitCode::SUCCESS)
}

fn default_result_path(case: &Path) -> PathBuf {
    let stem = case
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "case".to_string());
    case.with_file_name(format!("{stem}.result.json"))
}

fn validate(path: &Path) -> Result<ExitCode> {
    let manifest = ValidationManifest::load(path)?;
    let report = run_validation(&manifest);
    print!("{}", report.to_text());
    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

fn retention_curve(samples: usize, case: Option<&Path>, control_points: bool) -> Result<ExitCode> {
    let config = match case {
        Some(path) => load_case_file(path)
            .with_context(|| format!("loading {}", path.display()))?
            .config,
        None => WakeConfig::default(),
    };
    let curve = &config.retention_curve;
    let csv = if control_points {
        output::curve_csv(curve.control_points())
    } else {
        output::curve_csv(&curve.sample(samples))
    };
    print!("{csv}");
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_run_with_output() {
        let cli = Cli::try_parse_from(["wake-drag", "run", "pod.json", "-o", "out.json"]).unwrap();
        match cli.command {
            Command::Run { case, output } => {
                assert_eq!(case, PathBuf::from("pod.json"));
                assert_eq!(output, Some(PathBuf::from("out.json")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_parses_retention_curve_defaults() {
        let cli = Cli::try_parse_from(["wake-drag", "retention-curve", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::RetentionCurve { samples: 101, case: None, control_points: false }
        ));
    }

    #[test]
    fn default_result_path_sits_beside_case() {
        assert_eq!(
            default_result_path(Path::new("cases/pod.json")),
            PathBuf::from("cases/pod.result.json")
        );
    }
}
