//! Per-run state threaded through the pipeline

use crate::options::ProjectOptions;
use crate::runtime::PackageManager;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Start time, validated options and the resolved package manager of one run
#[derive(Debug, Clone)]
pub struct RunContext {
    started: Instant,
    options: ProjectOptions,
    project_dir: PathBuf,
    package_manager: PackageManager,
}

impl RunContext {
    pub fn new(
        started: Instant,
        options: ProjectOptions,
        base_dir: &Path,
        package_manager: PackageManager,
    ) -> Self {
        let project_dir = base_dir.join(options.project_name());
        Self {
            started,
            options,
            project_dir,
            package_manager,
        }
    }

    /// Record the manager that actually initialized the manifest
    pub fn with_package_manager(mut self, package_manager: PackageManager) -> Self {
        self.package_manager = package_manager;
        self
    }

    pub fn options(&self) -> &ProjectOptions {
        &self.options
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Elapsed seconds with two decimals, e.g. `12.34`
    pub fn elapsed_display(&self) -> String {
        format!("{:.2}", self.elapsed().as_secs_f64())
    }
}
