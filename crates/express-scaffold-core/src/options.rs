//! Project options: the validated, immutable user choices driving generation

use crate::error::ValidationError;
use std::fmt;
use std::path::Path;

/// Source language of the generated service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::TypeScript, Language::JavaScript];

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Source file extension used for every generated source path
    pub fn extension(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }

    /// Parse a language name as given on the command line
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "typescript" | "ts" => Some(Language::TypeScript),
            "javascript" | "js" => Some(Language::JavaScript),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Database integration wired into the generated service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Database {
    None,
    Mongoose,
    Sequelize,
    Prisma,
}

impl Database {
    /// Order offered by the interactive prompt
    pub const ALL: [Database; 4] = [
        Database::Mongoose,
        Database::Sequelize,
        Database::Prisma,
        Database::None,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Database::None => "None",
            Database::Mongoose => "Mongoose",
            Database::Sequelize => "Sequelize",
            Database::Prisma => "Prisma",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Database::None),
            "mongoose" => Some(Database::Mongoose),
            "sequelize" => Some(Database::Sequelize),
            "prisma" => Some(Database::Prisma),
            _ => None,
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Unvalidated answers, either from `--key=value` arguments or from prompts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    pub project_name: Option<String>,
    pub language: Option<String>,
    pub database: Option<String>,
    pub include_jest: Option<String>,
    pub include_swagger: Option<String>,
}

impl RawOptions {
    /// True when every field was supplied, which selects non-interactive mode.
    /// Partial argument sets are not merged with prompts.
    pub fn is_complete(&self) -> bool {
        self.project_name.is_some()
            && self.language.is_some()
            && self.database.is_some()
            && self.include_jest.is_some()
            && self.include_swagger.is_some()
    }
}

/// Validated project options. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    project_name: String,
    language: Language,
    database: Database,
    include_testing: bool,
    include_api_docs: bool,
}

impl ProjectOptions {
    /// Build options from already-typed values, checking the name against `base_dir`
    pub fn new(
        project_name: impl Into<String>,
        language: Language,
        database: Database,
        include_testing: bool,
        include_api_docs: bool,
        base_dir: &Path,
    ) -> Result<Self, ValidationError> {
        let project_name = project_name.into();
        validate_project_name(&project_name, base_dir)?;
        Ok(Self {
            project_name,
            language,
            database,
            include_testing,
            include_api_docs,
        })
    }

    /// Validate raw answers. Rules run in order and the first failure wins:
    /// empty name, invalid characters, existing entry, language, database.
    pub fn parse(raw: &RawOptions, base_dir: &Path) -> Result<Self, ValidationError> {
        let name = raw.project_name.as_deref().unwrap_or_default();
        validate_project_name(name, base_dir)?;

        let language_str = raw.language.as_deref().unwrap_or_default();
        let language = Language::parse(language_str)
            .ok_or_else(|| ValidationError::InvalidLanguage(language_str.to_string()))?;

        let database = match raw.database.as_deref() {
            Some(value) => Database::parse(value)
                .ok_or_else(|| ValidationError::InvalidDatabase(value.to_string()))?,
            None => Database::None,
        };

        Ok(Self {
            project_name: name.to_string(),
            language,
            database,
            include_testing: parse_flag(raw.include_jest.as_deref()),
            include_api_docs: parse_flag(raw.include_swagger.as_deref()),
        })
    }

    /// Options named `demo` that skip the filesystem check
    #[cfg(test)]
    pub(crate) fn fixture(
        language: Language,
        database: Database,
        include_testing: bool,
        include_api_docs: bool,
    ) -> Self {
        Self {
            project_name: "demo".to_string(),
            language,
            database,
            include_testing,
            include_api_docs,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn database(&self) -> Database {
        self.database
    }

    pub fn include_testing(&self) -> bool {
        self.include_testing
    }

    pub fn include_api_docs(&self) -> bool {
        self.include_api_docs
    }

    pub fn is_typescript(&self) -> bool {
        self.language == Language::TypeScript
    }

    pub fn extension(&self) -> &'static str {
        self.language.extension()
    }
}

/// Only the literal `true` enables a flag
fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

fn is_valid_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Check a project name against the character rules and the filesystem
pub fn validate_project_name(name: &str, base_dir: &Path) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !name.chars().all(is_valid_name_char) {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    if base_dir.join(name).exists() {
        return Err(ValidationError::NameCollision(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn raw(name: &str, language: &str, database: &str) -> RawOptions {
        RawOptions {
            project_name: Some(name.to_string()),
            language: Some(language.to_string()),
            database: Some(database.to_string()),
            include_jest: Some("true".to_string()),
            include_swagger: Some("false".to_string()),
        }
    }

    #[test]
    fn test_name_with_space_rejected() {
        let dir = TempDir::new().unwrap();
        let err = validate_project_name("My App", dir.path()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidName("My App".to_string()));
    }

    #[test]
    fn test_name_accepted_then_collides() {
        let dir = TempDir::new().unwrap();
        assert!(validate_project_name("my-app_2", dir.path()).is_ok());

        std::fs::create_dir(dir.path().join("my-app_2")).unwrap();
        let err = validate_project_name("my-app_2", dir.path()).unwrap_err();
        assert_eq!(err, ValidationError::NameCollision("my-app_2".to_string()));
    }

    #[test]
    fn test_empty_and_blank_names() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            validate_project_name("", dir.path()).unwrap_err(),
            ValidationError::EmptyName
        );
        assert_eq!(
            validate_project_name("   ", dir.path()).unwrap_err(),
            ValidationError::EmptyName
        );
    }

    #[test]
    fn test_invalid_characters() {
        let dir = TempDir::new().unwrap();
        for name in ["my.app", "my/app", "../app", "app!", "ünï"] {
            assert!(
                matches!(
                    validate_project_name(name, dir.path()),
                    Err(ValidationError::InvalidName(_))
                ),
                "Name should be rejected: {name}"
            );
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let dir = TempDir::new().unwrap();
        // Bad name and bad language: the name is reported
        let err = ProjectOptions::parse(&raw("bad name", "Rust", "None"), dir.path()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidName(_)));

        let err = ProjectOptions::parse(&raw("demo", "Rust", "Oracle"), dir.path()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidLanguage("Rust".to_string()));

        let err =
            ProjectOptions::parse(&raw("demo", "JavaScript", "Oracle"), dir.path()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidDatabase("Oracle".to_string()));
    }

    #[test]
    fn test_parse_flags() {
        let dir = TempDir::new().unwrap();
        let options =
            ProjectOptions::parse(&raw("demo", "TypeScript", "Mongoose"), dir.path()).unwrap();
        assert_eq!(options.language(), Language::TypeScript);
        assert_eq!(options.database(), Database::Mongoose);
        assert!(options.include_testing());
        assert!(!options.include_api_docs());

        let mut yes = raw("demo", "js", "none");
        yes.include_swagger = Some("TRUE".to_string());
        yes.include_jest = Some("yes".to_string());
        let options = ProjectOptions::parse(&yes, dir.path()).unwrap();
        assert_eq!(options.language(), Language::JavaScript);
        assert!(options.include_api_docs());
        assert!(!options.include_testing());
    }

    #[test]
    fn test_both_modes_produce_identical_options() {
        let dir = TempDir::new().unwrap();
        let from_args =
            ProjectOptions::parse(&raw("demo", "TypeScript", "Prisma"), dir.path()).unwrap();
        let from_prompts = ProjectOptions::new(
            "demo",
            Language::TypeScript,
            Database::Prisma,
            true,
            false,
            dir.path(),
        )
        .unwrap();
        assert_eq!(from_args, from_prompts);
    }

    #[test]
    fn test_is_complete() {
        let mut options = raw("demo", "TypeScript", "None");
        assert!(options.is_complete());
        options.include_swagger = None;
        assert!(!options.is_complete());
        assert!(!RawOptions::default().is_complete());
    }
}
