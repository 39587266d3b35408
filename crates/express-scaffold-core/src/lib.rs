//! Express Scaffold Core - Shared library for the Express project generator
//!
//! Given a small set of choices (project name, language, database, testing
//! and API-doc support) this library composes a backend service skeleton in
//! memory and materializes it through a package manager.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Composition** - Pure functions: option validation, dependency
//!   catalog, template rendering and the project composer
//! - **Layer 2: Execution** - Directory/file writer, package.json amendment,
//!   package manager detection, manifest init and install
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt flow
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use express_scaffold_core::{compose, Database, Language, ProjectOptions};
//!
//! let options = ProjectOptions::new("demo", Language::TypeScript, Database::Mongoose, true, false, &cwd)?;
//! let plan = compose(&options);
//! writer::create_skeleton(&project_dir, &plan.directories).await?;
//! writer::write_files(&project_dir, &plan.files).await?;
//! ```

pub mod catalog;
pub mod compose;
pub mod context;
pub mod error;
pub mod manifest;
pub mod options;
pub mod product;
pub mod report;
pub mod runtime;
pub mod templates;
pub mod writer;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use compose::{compose, DependencyManifest, FileSet, ProjectPlan, ScriptTable};
pub use context::RunContext;
pub use error::{ScaffoldError, ValidationError};
pub use options::{Database, Language, ProjectOptions, RawOptions};
pub use product::ProductConfig;
pub use runtime::PackageManager;

#[cfg(feature = "tui")]
pub use tui::run;
