//! Template rendering
//!
//! Every renderer is a total function of [`crate::ProjectOptions`]: given validated
//! options it always produces content, and never touches the filesystem.
//!
//! - `source`: entry point and API-doc bootstrap
//! - `tooling`: lint, format, compiler, test-runner, ignore and env files
//! - `database`: database connector and Prisma schema

pub mod database;
pub mod source;
pub mod tooling;

pub use database::{render_db_connector, render_prisma_schema};
pub use source::{render_entry_point, render_swagger};
pub use tooling::{
    render_env, render_eslint, render_gitignore, render_jest_config, render_prettier,
    render_tsconfig,
};

/// Port the generated server listens on when `PORT` is unset
pub const DEFAULT_PORT: u16 = 8080;

/// Pretty-print a JSON document the way package tooling writes it
pub(crate) fn pretty_json(value: &serde_json::Value) -> String {
    // Serializing a `Value` cannot fail
    let mut out = serde_json::to_string_pretty(value).unwrap_or_default();
    out.push('\n');
    out
}
