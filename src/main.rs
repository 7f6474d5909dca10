use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;

use tally::config::{ApiConfig, Config};
use tally::error::HarnessError;
use tally::{render, report, runner};

/// Exit status for failures of the reporting pipeline itself, distinct from
/// the runner's test-outcome codes (pytest uses 0-5).
const PIPELINE_FAILURE: u8 = 70;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "API test harness and dashboard generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the test suite, then build a dashboard from its report.
    Run {
        /// Test file or directory (overrides harness.toml).
        #[arg(long)]
        suite: Option<String>,
    },
    /// Render a dashboard from an existing report.
    Dashboard {
        /// Report file; defaults to the newest report in the reports directory.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Output HTML path; defaults to a timestamped file in the dashboard directory.
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "ERROR".red().bold());
            ExitCode::from(PIPELINE_FAILURE)
        }
    }
}

fn execute(cli: Cli) -> Result<ExitCode> {
    let root = std::env::current_dir()?;
    let config = Config::load(&root);

    match cli.cmd {
        Commands::Run { suite } => {
            let api = ApiConfig::from_env();
            let test_runner = runner::detect(&config, api, suite);

            let now = Local::now();
            eprintln!(
                "{} suite via {} at {}",
                "RUN".cyan().bold(),
                test_runner.name(),
                now.format("%Y-%m-%d %H:%M:%S"),
            );

            let stamp = now.format("%Y%m%d_%H%M%S").to_string();
            let outcome = test_runner.run(&root.join(&config.paths.reports), &stamp)?;

            let loaded = report::load_report(&outcome.json_report)?;
            render::write_dashboard(
                &loaded,
                None,
                &root.join(&config.paths.dashboard),
                Local::now(),
            )?;

            // The runner's exit code is the test verdict; pass it through so
            // calling automation can branch on it.
            Ok(runner_exit(outcome.exit_code))
        }

        Commands::Dashboard { report: path, out } => {
            let json = match path {
                Some(path) => path,
                None => {
                    let reports_dir = root.join(&config.paths.reports);
                    report::find_latest_report(&reports_dir)
                        .ok_or(HarnessError::NotFound { path: reports_dir })?
                }
            };

            let loaded = report::load_report(&json)?;
            render::write_dashboard(
                &loaded,
                out.as_deref(),
                &root.join(&config.paths.dashboard),
                Local::now(),
            )?;

            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Map the runner's exit code onto this process's own.
fn runner_exit(code: i32) -> ExitCode {
    // Pytest codes fit in a byte; anything unusual still reads as failure.
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
