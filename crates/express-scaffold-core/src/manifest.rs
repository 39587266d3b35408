//! package.json amendment and dependency section reclassification

use crate::compose::ProjectPlan;
use crate::error::ScaffoldError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const MANIFEST_FILE: &str = "package.json";

/// Strip version suffix from a package spec, keeping any scope.
///
/// `@types/node@20` -> `@types/node`, `jest@^29` -> `jest`. A bare scope
/// such as `@types` has no package name and yields `None`.
pub fn bare_package_name(spec: &str) -> Option<&str> {
    let spec = spec.trim();
    let name = if let Some(scoped) = spec.strip_prefix('@') {
        let (scope, rest) = scoped.split_once('/')?;
        let package = rest.split('@').next().unwrap_or_default();
        if scope.is_empty() || package.is_empty() {
            return None;
        }
        &spec[..1 + scope.len() + 1 + package.len()]
    } else {
        spec.split('@').next().unwrap_or_default()
    };
    (!name.is_empty()).then_some(name)
}

/// Packages requested as development dependencies that must end up in
/// `devDependencies` even if the package manager recorded them as runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevRelocation {
    names: Vec<String>,
}

impl DevRelocation {
    pub fn from_requested<S: AsRef<str>>(dev_dependencies: &[S]) -> Self {
        let mut names = Vec::new();
        for spec in dev_dependencies {
            if let Some(name) = bare_package_name(spec.as_ref()) {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
        Self { names }
    }

    /// Move matching entries from `dependencies` to `devDependencies`.
    /// Names absent from `dependencies` are left alone. Returns the moved names.
    pub fn apply(&self, manifest: &mut Value) -> Vec<String> {
        let Some(root) = manifest.as_object_mut() else {
            return Vec::new();
        };

        let mut moved = Vec::new();
        let mut relocated = Map::new();
        if let Some(Value::Object(runtime)) = root.get_mut("dependencies") {
            for name in &self.names {
                if let Some(version) = runtime.shift_remove(name) {
                    relocated.insert(name.clone(), version);
                    moved.push(name.clone());
                }
            }
        }

        if relocated.is_empty() {
            return moved;
        }

        let dev = root
            .entry("devDependencies")
            .or_insert_with(|| Value::Object(Map::new()));
        if !dev.is_object() {
            *dev = Value::Object(Map::new());
        }
        if let Value::Object(dev) = dev {
            dev.extend(relocated);
            sort_keys(dev);
        }

        moved
    }
}

/// npm writes dependency sections sorted by name
fn sort_keys(map: &mut Map<String, Value>) {
    let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    map.extend(entries);
}

/// Point `main` at the entry point and replace the script table
pub fn amend_manifest(manifest: &mut Value, plan: &ProjectPlan) {
    if !manifest.is_object() {
        *manifest = Value::Object(Map::new());
    }
    if let Value::Object(root) = manifest {
        root.insert("main".to_string(), Value::String(plan.entry_point.clone()));
        let scripts = serde_json::to_value(&plan.scripts).unwrap_or_else(|_| Value::Object(Map::new()));
        root.insert("scripts".to_string(), scripts);
    }
}

fn manifest_path(project_dir: &Path) -> PathBuf {
    project_dir.join(MANIFEST_FILE)
}

pub async fn read_manifest(project_dir: &Path) -> Result<Value, ScaffoldError> {
    let path = manifest_path(project_dir);
    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| ScaffoldError::filesystem(&path, e))?;
    serde_json::from_str(&content).map_err(|source| ScaffoldError::Manifest { path, source })
}

pub async fn write_manifest(project_dir: &Path, manifest: &Value) -> Result<(), ScaffoldError> {
    let path = manifest_path(project_dir);
    let content = serde_json::to_string_pretty(manifest).map_err(|source| {
        ScaffoldError::Manifest {
            path: path.clone(),
            source,
        }
    })?;
    fs::write(&path, content + "\n")
        .await
        .map_err(|e| ScaffoldError::filesystem(&path, e))
}

/// Read, amend and rewrite `<project_dir>/package.json`
pub async fn amend_manifest_file(project_dir: &Path, plan: &ProjectPlan) -> Result<(), ScaffoldError> {
    let mut manifest = read_manifest(project_dir).await?;
    amend_manifest(&mut manifest, plan);
    write_manifest(project_dir, &manifest).await
}

/// Apply a [`DevRelocation`] to `<project_dir>/package.json`, rewriting it only when something moved
pub async fn relocate_dev_dependencies(
    project_dir: &Path,
    relocation: &DevRelocation,
) -> Result<Vec<String>, ScaffoldError> {
    let mut manifest = read_manifest(project_dir).await?;
    let moved = relocation.apply(&mut manifest);
    if !moved.is_empty() {
        write_manifest(project_dir, &manifest).await?;
    }
    Ok(moved)
}
