//! Dependency catalog: fixed package lists keyed by option subsets

use crate::options::{Database, Language};

/// Runtime and development packages contributed by one catalog lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    pub dependencies: Vec<&'static str>,
    pub dev_dependencies: Vec<&'static str>,
}

impl DependencySet {
    fn new(dependencies: &[&'static str], dev_dependencies: &[&'static str]) -> Self {
        Self {
            dependencies: dependencies.to_vec(),
            dev_dependencies: dev_dependencies.to_vec(),
        }
    }
}

const BASE_RUNTIME: &[&str] = &["express", "dotenv"];

/// Linting and formatting toolchain shared by both languages
const BASE_DEV: &[&str] = &[
    "nodemon",
    "eslint",
    "eslint-config-prettier",
    "eslint-plugin-prettier",
    "prettier",
];

const TYPESCRIPT_DEV: &[&str] = &[
    "typescript",
    "ts-node",
    "ts-node-dev",
    "@types/express",
    "@types/node",
    "@typescript-eslint/eslint-plugin",
    "@typescript-eslint/parser",
];

pub fn language_deps(language: Language) -> DependencySet {
    let mut set = DependencySet::new(BASE_RUNTIME, BASE_DEV);
    if language == Language::TypeScript {
        set.dev_dependencies.extend_from_slice(TYPESCRIPT_DEV);
    }
    set
}

pub fn database_deps(language: Language, database: Database) -> DependencySet {
    let ts = language == Language::TypeScript;
    match database {
        Database::None => DependencySet::default(),
        Database::Mongoose => DependencySet::new(&["mongoose"], &[]),
        Database::Sequelize => {
            let dev: &[&'static str] = if ts { &["@types/sequelize"] } else { &[] };
            DependencySet::new(&["sequelize", "pg", "pg-hstore"], dev)
        }
        Database::Prisma => DependencySet::new(&["@prisma/client"], &["prisma"]),
    }
}

pub fn testing_deps(language: Language) -> DependencySet {
    let mut set = DependencySet::new(&[], &["jest", "supertest"]);
    if language == Language::TypeScript {
        set.dev_dependencies
            .extend_from_slice(&["@types/jest", "@types/supertest", "ts-jest"]);
    }
    set
}

pub fn api_doc_deps(language: Language) -> DependencySet {
    let mut set = DependencySet::new(&["swagger-jsdoc", "swagger-ui-express"], &[]);
    if language == Language::TypeScript {
        set.dev_dependencies
            .extend_from_slice(&["@types/swagger-jsdoc", "@types/swagger-ui-express"]);
    }
    set
}
