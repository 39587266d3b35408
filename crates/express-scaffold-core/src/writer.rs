//! Writing a composed project to disk

use crate::compose::FileSet;
use crate::error::ScaffoldError;
use std::path::Path;
use tokio::fs;

/// Create the project root and its fixed directory skeleton
pub async fn create_skeleton(project_dir: &Path, directories: &[String]) -> Result<(), ScaffoldError> {
    fs::create_dir_all(project_dir)
        .await
        .map_err(|e| ScaffoldError::filesystem(project_dir, e))?;

    for dir in directories {
        let path = project_dir.join(dir);
        fs::create_dir_all(&path)
            .await
            .map_err(|e| ScaffoldError::filesystem(&path, e))?;
    }

    Ok(())
}

/// Write every file of the set below `project_dir`, creating parents as needed.
/// Returns the written relative paths in order. Nothing is rolled back on failure.
pub async fn write_files(project_dir: &Path, files: &FileSet) -> Result<Vec<String>, ScaffoldError> {
    let mut written = Vec::with_capacity(files.len());

    for (relative, content) in files.iter() {
        let target_path = project_dir.join(relative);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ScaffoldError::filesystem(parent, e))?;
        }

        fs::write(&target_path, content)
            .await
            .map_err(|e| ScaffoldError::filesystem(&target_path, e))?;

        written.push(relative.to_string());
    }

    Ok(written)
}
