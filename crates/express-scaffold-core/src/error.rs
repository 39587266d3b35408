//! Error types for option validation and project scaffolding

use std::path::PathBuf;
use thiserror::Error;

/// Raised while building [`crate::ProjectOptions`], before any side effect
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Project name cannot be empty")]
    EmptyName,

    #[error("Project name '{0}' can only contain letters, numbers, hyphens, and underscores")]
    InvalidName(String),

    #[error("Directory \"{0}\" already exists")]
    NameCollision(String),

    #[error("Invalid language \"{0}\". Choose 'TypeScript' or 'JavaScript'.")]
    InvalidLanguage(String),

    #[error("Invalid database \"{0}\". Choose 'Mongoose', 'Sequelize', 'Prisma' or 'None'.")]
    InvalidDatabase(String),
}

/// Failures of the scaffolding pipeline. All of them abort the run.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to initialize package.json with {manager}: {detail}")]
    PackageManagerInit { manager: String, detail: String },

    #[error("{manager} install failed (exit code {code}): {detail}")]
    Install {
        manager: String,
        code: i32,
        detail: String,
    },

    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid package manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}
