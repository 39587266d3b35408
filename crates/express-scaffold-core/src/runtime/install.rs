//! Package manager invocations: manifest initialization and batch install

use super::package_manager::PackageManager;
use crate::compose::DependencyManifest;
use crate::error::ScaffoldError;
use crate::manifest::{self, DevRelocation};
use std::path::Path;
use std::process::{Output, Stdio};
use tokio::process::Command as TokioCommand;

/// Number of trailing stderr lines kept in error messages
const ERROR_TAIL_LINES: usize = 10;

/// Result of manifest initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitOutcome {
    /// Manager that actually created package.json
    pub manager: PackageManager,
    /// True when the preferred manager failed and npm was used instead
    pub fell_back: bool,
}

pub fn init_args(pm: PackageManager) -> Vec<String> {
    match pm {
        PackageManager::Pnpm => vec!["init".to_string()],
        PackageManager::Npm | PackageManager::Yarn => vec!["init".to_string(), "-y".to_string()],
    }
}

/// Batch-install arguments following each manager's flag conventions.
/// Empty groups contribute no flag.
pub fn install_args(pm: PackageManager, deps: &DependencyManifest) -> Vec<String> {
    let mut args: Vec<String> = match pm {
        PackageManager::Yarn => vec!["add".into(), "--silent".into()],
        PackageManager::Pnpm => vec!["add".into(), "--reporter".into(), "silent".into()],
        PackageManager::Npm => vec![
            "install".into(),
            "--silent".into(),
            "--no-audit".into(),
            "--no-fund".into(),
        ],
    };

    args.extend(deps.dependencies.iter().cloned());
    if !deps.dev_dependencies.is_empty() {
        match pm {
            PackageManager::Yarn => args.push("--dev".into()),
            PackageManager::Pnpm => args.push("-D".into()),
            // npm records everything as runtime; reclassified after install
            PackageManager::Npm => {}
        }
        args.extend(deps.dev_dependencies.iter().cloned());
    }
    args
}

/// Run `program` in `cwd`, capturing its output
async fn run(program: &str, args: &[String], cwd: &Path) -> std::io::Result<Output> {
    TokioCommand::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
}

fn stderr_tail(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(ERROR_TAIL_LINES);
    lines[start..].join("\n")
}

async fn try_init(program: &str, pm: PackageManager, project_dir: &Path) -> Result<(), String> {
    match run(program, &init_args(pm), project_dir).await {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => Err(format!(
            "exit code {}: {}",
            output.status.code().unwrap_or(-1),
            stderr_tail(&output)
        )),
        Err(e) => Err(e.to_string()),
    }
}

/// Create package.json with the preferred manager, falling back to npm once
pub async fn init_manifest(
    project_dir: &Path,
    preferred: PackageManager,
) -> Result<InitOutcome, ScaffoldError> {
    init_manifest_with(project_dir, preferred, |pm| pm.program()).await
}

/// [`init_manifest`] with the executable for each manager supplied by `program`
pub async fn init_manifest_with(
    project_dir: &Path,
    preferred: PackageManager,
    program: impl Fn(PackageManager) -> String,
) -> Result<InitOutcome, ScaffoldError> {
    let first_error = match try_init(&program(preferred), preferred, project_dir).await {
        Ok(()) => {
            return Ok(InitOutcome {
                manager: preferred,
                fell_back: false,
            })
        }
        Err(e) => e,
    };

    if preferred == PackageManager::Npm {
        return Err(ScaffoldError::PackageManagerInit {
            manager: preferred.to_string(),
            detail: first_error,
        });
    }

    try_init(&program(PackageManager::Npm), PackageManager::Npm, project_dir)
        .await
        .map_err(|detail| ScaffoldError::PackageManagerInit {
            manager: PackageManager::Npm.to_string(),
            detail: format!("{} (after {} failed: {})", detail, preferred, first_error),
        })?;

    Ok(InitOutcome {
        manager: PackageManager::Npm,
        fell_back: true,
    })
}

/// Install every dependency in one invocation. For npm, packages requested as
/// development dependencies are moved into `devDependencies` afterwards;
/// the moved names are returned.
pub async fn install_all(
    project_dir: &Path,
    deps: &DependencyManifest,
    pm: PackageManager,
) -> Result<Vec<String>, ScaffoldError> {
    install_all_with(project_dir, deps, pm, &pm.program()).await
}

/// [`install_all`] running `program` in place of the manager's executable
pub async fn install_all_with(
    project_dir: &Path,
    deps: &DependencyManifest,
    pm: PackageManager,
    program: &str,
) -> Result<Vec<String>, ScaffoldError> {
    if deps.is_empty() {
        return Ok(Vec::new());
    }

    let output = run(program, &install_args(pm, deps), project_dir)
        .await
        .map_err(|e| ScaffoldError::Install {
            manager: pm.to_string(),
            code: -1,
            detail: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(ScaffoldError::Install {
            manager: pm.to_string(),
            code: output.status.code().unwrap_or(-1),
            detail: stderr_tail(&output),
        });
    }

    if pm == PackageManager::Npm && !deps.dev_dependencies.is_empty() {
        let relocation = DevRelocation::from_requested(&deps.dev_dependencies);
        return manifest::relocate_dev_dependencies(project_dir, &relocation).await;
    }

    Ok(Vec::new())
}
