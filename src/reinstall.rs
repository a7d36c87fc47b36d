//! Reinstall handoff to the package manager
//!
//! Once everything is nuked, hand control to the project's package manager
//! and stream its output back line by line.

use crate::package_manager::PackageManager;
use crate::theme::Theme;
use anyhow::{bail, Context, Result};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

/// Run the package manager's install command in `dir`.
///
/// Uses `preferred` when given, otherwise detects the manager from
/// package.json and lock files, falling back to npm. A non-zero exit from
/// the install command becomes an error.
pub fn reinstall(dir: &Path, preferred: Option<PackageManager>) -> Result<()> {
    let pm = preferred
        .or_else(|| PackageManager::detect(dir))
        .unwrap_or(PackageManager::Npm);
    let (command, args) = pm.install_command();

    println!(
        "Installing dependencies with {}",
        Theme::command(&format!("{} {}", command, args.join(" ")))
    );

    let mut child = Command::new(command)
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to run {command}"))?;

    // Drain stderr on its own thread so a chatty install can't fill one
    // pipe while we block reading the other
    let stderr_thread = child.stderr.take().map(|stderr| {
        thread::spawn(move || {
            for line in BufReader::new(stderr).lines().map_while(Result::ok) {
                println!("{}", Theme::muted(&line));
            }
        })
    });

    if let Some(stdout) = child.stdout.take() {
        for line in BufReader::new(stdout).lines() {
            let line = line.context("failed to read install output")?;
            println!("{}", Theme::muted(&line));
        }
    }

    if let Some(handle) = stderr_thread {
        let _ = handle.join();
    }

    let status = child
        .wait()
        .with_context(|| format!("failed to wait for {command}"))?;
    if !status.success() {
        bail!("{command} exited with {status}");
    }

    Ok(())
}
