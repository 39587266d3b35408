//! Package manager detection and invocation
//!
//! This module provides:
//! - Package manager detection (override variable, user-agent hint, probing)
//! - Manifest initialization with a single npm fallback
//! - Batch dependency installation

pub mod install;
pub mod package_manager;

pub use install::{init_manifest, init_manifest_with, install_all, install_all_with, InitOutcome};
pub use package_manager::{
    check_package_manager, detect_package_manager, detect_with, resolve_runtime, PackageManager,
    RuntimeInfo,
};
