//! Package manager detection and install command resolution
//!
//! Knows which lock files each supported manager writes, how to detect the
//! manager a project uses, and what its install invocation looks like.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// The package managers modnuke knows how to hand off to
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

/// The corepack-style `packageManager` field from package.json,
/// e.g. `"pnpm@9.1.0"`
#[derive(Deserialize)]
struct PackageJson {
    #[serde(rename = "packageManager")]
    package_manager: Option<String>,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Yarn,
        PackageManager::Pnpm,
        PackageManager::Bun,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Lock file names written by this manager
    pub fn lock_files(self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["package-lock.json"],
            PackageManager::Yarn => &["yarn.lock"],
            PackageManager::Pnpm => &["pnpm-lock.yaml"],
            PackageManager::Bun => &["bun.lockb", "bun.lock"],
        }
    }

    /// Every lock file name any supported manager writes
    pub fn all_lock_files() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().flat_map(|pm| pm.lock_files().iter().copied())
    }

    /// Install invocation for this manager as (command, arguments)
    pub fn install_command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            PackageManager::Npm => ("npm", &["install"]),
            PackageManager::Yarn => ("yarn", &["install"]),
            PackageManager::Pnpm => ("pnpm", &["install"]),
            PackageManager::Bun => ("bun", &["install"]),
        }
    }

    /// Detect the package manager used by the project in `dir`.
    ///
    /// The `packageManager` field in package.json wins over lock file
    /// presence, since a migrating project can carry stale lock files.
    /// Returns `None` when neither source identifies a supported manager.
    pub fn detect(dir: &Path) -> Option<PackageManager> {
        if let Some(pm) = Self::from_package_json(dir) {
            return Some(pm);
        }

        Self::ALL
            .into_iter()
            .find(|pm| pm.lock_files().iter().any(|lock| dir.join(lock).is_file()))
    }

    fn from_package_json(dir: &Path) -> Option<PackageManager> {
        let raw = fs::read_to_string(dir.join("package.json")).ok()?;
        let parsed: PackageJson = serde_json::from_str(&raw).ok()?;
        let spec = parsed.package_manager?;
        let name = spec.split('@').next()?;
        Self::ALL.into_iter().find(|pm| pm.name() == name)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
