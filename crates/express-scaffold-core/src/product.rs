//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a generator binary implements to brand
//! the prompt flow and to configure environment-driven behaviour.

use crate::options::ProjectOptions;
use crate::runtime::PackageManager;

/// Configuration trait for generator products
///
/// Each binary implements this trait to define:
/// - Product identity (display name, docs link)
/// - Interactive defaults
/// - The environment variable overriding package manager detection
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Project name offered by the interactive prompt
    fn default_project_name(&self) -> &'static str;

    /// Environment variable that forces a package manager (`npm`, `yarn` or `pnpm`)
    fn package_manager_env(&self) -> &'static str;

    /// URL for framework documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, options: &ProjectOptions, pm: PackageManager) -> Vec<String>;
}
