//! Project composition: which files, which packages, which scripts
//!
//! [`compose`] is a pure function of [`ProjectOptions`]. It renders every
//! artifact in memory so the execution steps only have to write and install.

use crate::catalog::{self, DependencySet};
use crate::options::{Database, Language, ProjectOptions};
use crate::templates;
use indexmap::IndexMap;
use serde::Serialize;

/// Directories created under `src/` for every project
pub const SOURCE_DIRECTORIES: [&str; 10] = [
    "routes",
    "middlewares",
    "controllers",
    "services",
    "utils",
    "config",
    "interfaces",
    "models",
    "errors",
    "email",
];

/// Relative file path to content, in generation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: IndexMap<String, String>,
}

impl FileSet {
    fn insert(&mut self, path: impl Into<String>, content: String) {
        let path = path.into();
        debug_assert!(
            !path.split('/').any(|segment| segment == ".." || segment.is_empty()),
            "generated path must be relative without traversal: {path}"
        );
        let previous = self.files.insert(path, content);
        debug_assert!(previous.is_none(), "two rules produced the same path");
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Packages to install, split by manifest section. Names are unique across both lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyManifest {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

impl DependencyManifest {
    /// Append a catalog lookup, keeping first-seen order and skipping repeats
    fn extend(&mut self, set: DependencySet) {
        for dep in set.dependencies {
            if !self.contains(dep) {
                self.dependencies.push(dep.to_string());
            }
        }
        for dep in set.dev_dependencies {
            if !self.contains(dep) {
                self.dev_dependencies.push(dep.to_string());
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d == name)
            || self.dev_dependencies.iter().any(|d| d == name)
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }
}

/// `scripts` table written into package.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptTable {
    pub dev: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swagger: Option<String>,
}

impl ScriptTable {
    fn for_options(options: &ProjectOptions) -> Self {
        let (dev, build, start, swagger) = match options.language() {
            Language::TypeScript => (
                "ts-node-dev --respawn --transpile-only src/index.ts",
                Some("tsc"),
                "node dist/index.js",
                "ts-node src/swagger.ts",
            ),
            Language::JavaScript => (
                "nodemon src/index.js",
                None,
                "node src/index.js",
                "node src/swagger.js",
            ),
        };

        Self {
            dev: dev.to_string(),
            build: build.map(str::to_string),
            start: start.to_string(),
            test: options
                .include_testing()
                .then(|| "jest --passWithNoTests".to_string()),
            swagger: options.include_api_docs().then(|| swagger.to_string()),
        }
    }
}

/// Everything needed to materialize a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPlan {
    pub files: FileSet,
    pub dependencies: DependencyManifest,
    /// Directories relative to the project root, created before any file
    pub directories: Vec<String>,
    /// Value of `main` in package.json
    pub entry_point: String,
    pub scripts: ScriptTable,
}

/// Path of the entry point source for a language
pub fn entry_point_path(language: Language) -> String {
    format!("src/index.{}", language.extension())
}

pub fn compose(options: &ProjectOptions) -> ProjectPlan {
    let ext = options.extension();
    let entry_point = entry_point_path(options.language());

    let mut files = FileSet::default();
    files.insert(".gitignore", templates::render_gitignore());
    files.insert(".env", templates::render_env(options));
    files.insert(".prettierrc.json", templates::render_prettier());
    files.insert(".eslintrc.json", templates::render_eslint(options));
    files.insert(entry_point.clone(), templates::render_entry_point(options));

    if options.is_typescript() {
        files.insert("tsconfig.json", templates::render_tsconfig());
    }
    if let Some(connector) = templates::render_db_connector(options) {
        files.insert(format!("src/config/db.{}", ext), connector);
    }
    if options.database() == Database::Prisma {
        files.insert("prisma/schema.prisma", templates::render_prisma_schema());
    }
    if options.include_testing() {
        files.insert("jest.config.js", templates::render_jest_config(options));
    }
    if options.include_api_docs() {
        files.insert(format!("src/swagger.{}", ext), templates::render_swagger(options));
    }

    let language = options.language();
    let mut dependencies = DependencyManifest::default();
    dependencies.extend(catalog::language_deps(language));
    dependencies.extend(catalog::database_deps(language, options.database()));
    if options.include_testing() {
        dependencies.extend(catalog::testing_deps(language));
    }
    if options.include_api_docs() {
        dependencies.extend(catalog::api_doc_deps(language));
    }

    ProjectPlan {
        files,
        dependencies,
        directories: SOURCE_DIRECTORIES
            .iter()
            .map(|dir| format!("src/{}", dir))
            .collect(),
        entry_point,
        scripts: ScriptTable::for_options(options),
    }
}
