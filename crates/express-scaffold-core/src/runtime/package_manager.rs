//! Package manager detection

use std::fmt;
use std::process::Command;

/// Environment variable set by npm, yarn and pnpm when they launch a binary
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Supported Node.js package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Probe order when no hint is available; npm is the final default
    pub const PROBE_ORDER: [PackageManager; 2] = [PackageManager::Pnpm, PackageManager::Yarn];

    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Some(PackageManager::Npm),
            "yarn" => Some(PackageManager::Yarn),
            "pnpm" => Some(PackageManager::Pnpm),
            _ => None,
        }
    }

    /// Executable name, accounting for the `.cmd` shims on Windows
    pub fn program(&self) -> String {
        if cfg!(windows) {
            format!("{}.cmd", self.name())
        } else {
            self.name().to_string()
        }
    }

    /// Command prefix for running a package.json script
    pub fn run_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Identify the manager from a `npm_config_user_agent` value such as
    /// `pnpm/9.1.0 npm/? node/v20.12.2 linux x64`
    pub fn from_user_agent(user_agent: &str) -> Option<Self> {
        [PackageManager::Pnpm, PackageManager::Yarn, PackageManager::Npm]
            .into_iter()
            .find(|pm| user_agent.starts_with(pm.name()))
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Package manager availability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub manager: PackageManager,
    pub version: Option<String>,
    pub available: bool,
}

/// Check if a package manager is installed by asking for its version
pub fn check_package_manager(pm: PackageManager) -> RuntimeInfo {
    let output = Command::new(pm.program()).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                manager: pm,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            manager: pm,
            version: None,
            available: false,
        },
    }
}

/// Resolve the package manager: explicit override, then the user-agent hint,
/// then the first available tool in [`PackageManager::PROBE_ORDER`], then npm.
pub fn detect_with(
    override_value: Option<&str>,
    user_agent: Option<&str>,
    mut is_available: impl FnMut(PackageManager) -> bool,
) -> PackageManager {
    if let Some(pm) = override_value.and_then(PackageManager::parse) {
        return pm;
    }
    if let Some(pm) = user_agent.and_then(PackageManager::from_user_agent) {
        return pm;
    }
    PackageManager::PROBE_ORDER
        .into_iter()
        .find(|pm| is_available(*pm))
        .unwrap_or(PackageManager::Npm)
}

/// Like [`detect_with`], returning the availability of the chosen manager.
/// Each manager is probed at most once.
pub fn resolve_runtime(
    override_value: Option<&str>,
    user_agent: Option<&str>,
    mut probe: impl FnMut(PackageManager) -> RuntimeInfo,
) -> RuntimeInfo {
    let mut probed: Vec<RuntimeInfo> = Vec::new();
    let pm = detect_with(override_value, user_agent, |pm| {
        let info = probe(pm);
        let available = info.available;
        probed.push(info);
        available
    });

    match probed.into_iter().find(|info| info.manager == pm) {
        Some(info) => info,
        None => probe(pm),
    }
}

/// Detect the package manager from the process environment and installed tools.
/// Spawns `--version` processes and blocks until they exit.
pub fn detect_package_manager(override_env: &str) -> RuntimeInfo {
    let override_value = std::env::var(override_env).ok();
    let user_agent = std::env::var(USER_AGENT_ENV).ok();
    resolve_runtime(
        override_value.as_deref(),
        user_agent.as_deref(),
        check_package_manager,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_user_agent_hint() {
        assert_eq!(
            PackageManager::from_user_agent("pnpm/9.1.0 npm/? node/v20.12.2 linux x64"),
            Some(PackageManager::Pnpm)
        );
        assert_eq!(
            PackageManager::from_user_agent("yarn/1.22.22 npm/? node/v20.12.2 darwin arm64"),
            Some(PackageManager::Yarn)
        );
        assert_eq!(
            PackageManager::from_user_agent("npm/10.5.0 node/v20.12.2 linux x64"),
            Some(PackageManager::Npm)
        );
        assert_eq!(PackageManager::from_user_agent("bun/1.1.0"), None);
    }

    #[test]
    fn test_user_agent_wins_over_probing() {
        let probed = RefCell::new(Vec::new());
        let pm = detect_with(None, Some("yarn/1.22.22"), |pm| {
            probed.borrow_mut().push(pm);
            true
        });
        assert_eq!(pm, PackageManager::Yarn);
        assert!(probed.borrow().is_empty());
    }

    #[test]
    fn test_probe_order() {
        assert_eq!(detect_with(None, None, |_| true), PackageManager::Pnpm);
        assert_eq!(
            detect_with(None, None, |pm| pm == PackageManager::Yarn),
            PackageManager::Yarn
        );
        assert_eq!(detect_with(None, None, |_| false), PackageManager::Npm);
        assert_eq!(
            detect_with(None, Some("deno/1.0"), |_| false),
            PackageManager::Npm
        );
    }

    #[test]
    fn test_override_takes_precedence() {
        assert_eq!(
            detect_with(Some("NPM"), Some("pnpm/9.1.0"), |_| true),
            PackageManager::Npm
        );
        // Unrecognized overrides are ignored
        assert_eq!(
            detect_with(Some("bun"), Some("yarn/1.22.22"), |_| true),
            PackageManager::Yarn
        );
    }

    fn fake_probe<'a>(
        available: &'static [PackageManager],
        calls: &'a RefCell<Vec<PackageManager>>,
    ) -> impl FnMut(PackageManager) -> RuntimeInfo + 'a {
        move |pm| {
            calls.borrow_mut().push(pm);
            let available = available.contains(&pm);
            RuntimeInfo {
                manager: pm,
                version: available.then(|| "1.0.0".to_string()),
                available,
            }
        }
    }

    #[test]
    fn test_resolve_reuses_probe_result() {
        let calls = RefCell::new(Vec::new());
        let info = resolve_runtime(
            None,
            None,
            fake_probe(&[PackageManager::Yarn], &calls),
        );
        assert_eq!(info.manager, PackageManager::Yarn);
        assert!(info.available);
        assert_eq!(info.version.as_deref(), Some("1.0.0"));
        assert_eq!(
            *calls.borrow(),
            vec![PackageManager::Pnpm, PackageManager::Yarn]
        );
    }

    #[test]
    fn test_resolve_probes_hinted_manager_once() {
        let calls = RefCell::new(Vec::new());
        let info = resolve_runtime(
            None,
            Some("pnpm/9.1.0 npm/? node/v20.12.2 linux x64"),
            fake_probe(&[], &calls),
        );
        assert_eq!(info.manager, PackageManager::Pnpm);
        assert!(!info.available);
        assert_eq!(*calls.borrow(), vec![PackageManager::Pnpm]);
    }

    #[test]
    fn test_resolve_falls_back_to_npm() {
        let calls = RefCell::new(Vec::new());
        let info = resolve_runtime(None, None, fake_probe(&[PackageManager::Npm], &calls));
        assert_eq!(info.manager, PackageManager::Npm);
        assert!(info.available);
        assert_eq!(
            *calls.borrow(),
            vec![PackageManager::Pnpm, PackageManager::Yarn, PackageManager::Npm]
        );
    }

    #[test]
    fn test_run_command() {
        assert_eq!(PackageManager::Npm.run_command(), "npm run");
        assert_eq!(PackageManager::Pnpm.run_command(), "pnpm");
    }
}
