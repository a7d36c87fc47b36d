//! Command-line interface and run orchestration

use crate::nuker;
use crate::package_manager::PackageManager;
use crate::reinstall;
use crate::scanner::{self, ScanOptions};
use crate::spinner::{Spinner, SpinnerOptions};
use crate::theme::Theme;
use crate::utils;
use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "modnuke")]
#[command(version)]
#[command(about = "Find and nuke node_modules directories, then reinstall fresh")]
pub struct Cli {
    /// The directory to run in
    #[arg(long, default_value = ".")]
    pub cwd: PathBuf,

    /// Also remove package manager lock files
    #[arg(short = 'l', long)]
    pub lock_file: bool,

    /// Do not reinstall dependencies after nuking
    #[arg(long = "no-install", action = ArgAction::SetFalse)]
    pub install: bool,

    /// The package manager to use for the reinstall
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManager>,
}

impl Cli {
    /// Scan, nuke, summarize, and optionally reinstall.
    ///
    /// The spinner owns the status line for the whole run; scan and nuke
    /// progress arrive through their callbacks and only ever touch the
    /// terminal via the spinner.
    pub fn run(self) -> Result<()> {
        let started_at = Instant::now();

        let mut spinner = Spinner::new(SpinnerOptions {
            text: "Searching for node_modules".into(),
            ..Default::default()
        });
        spinner.start()?;

        let mut found: Vec<PathBuf> = Vec::new();
        let scan_result = scanner::scan(
            &self.cwd,
            ScanOptions {
                lock_files: self.lock_file,
            },
            |path| {
                found.push(path);
                let _ = spinner.message(format!("Found {}", Theme::count(found.len())));
            },
        );
        if let Err(err) = scan_result {
            let _ = spinner.error(&format!("Scan failed: {err:#}"));
            return Err(err);
        }

        spinner.message(format!("Nuking {}", Theme::count(found.len())))?;

        let mut nuked_count = 0usize;
        let nuke_result = nuker::nuke(&found, |_| {
            nuked_count += 1;
            let _ = spinner.message(format!("Nuked {}", Theme::count(nuked_count)));
        });
        if let Err(err) = nuke_result {
            let _ = spinner.error(&format!("Nuke failed: {err:#}"));
            return Err(err);
        }

        let elapsed = started_at.elapsed();
        spinner.success(&format!(
            "Nuked {} in {}",
            Theme::count(found.len()),
            Theme::value(&utils::format_duration(elapsed))
        ))?;

        if self.install {
            // Blank line separates the summary from the install stream
            println!();
            reinstall::reinstall(&self.cwd, self.package_manager)?;
        }

        Ok(())
    }
}
