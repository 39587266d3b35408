//! Database connector sources and the Prisma schema

use super::tooling::database_url;
use crate::options::{Database, Language, ProjectOptions};

const MONGOOSE_TS: &str = r#"import mongoose from 'mongoose';

const connectDB = async (): Promise<void> => {
  try {
    const conn = await mongoose.connect(process.env.DATABASE_URL || '');
    console.log(`MongoDB Connected: ${conn.connection.host}`);
  } catch (error) {
    console.error(`Error: ${error}`);
    process.exit(1);
  }
};

export default connectDB;
"#;

const MONGOOSE_JS: &str = r#"const mongoose = require('mongoose');

const connectDB = async () => {
  try {
    const conn = await mongoose.connect(process.env.DATABASE_URL || '');
    console.log(`MongoDB Connected: ${conn.connection.host}`);
  } catch (error) {
    console.error(`Error: ${error}`);
    process.exit(1);
  }
};

module.exports = connectDB;
"#;

const SEQUELIZE_TS: &str = r#"import { Sequelize } from 'sequelize';

const sequelize = new Sequelize(process.env.DATABASE_URL || '', {
  dialect: 'postgres',
  logging: false,
});

export const connectDB = async (): Promise<void> => {
  try {
    await sequelize.authenticate();
    console.log('PostgreSQL Connected');
  } catch (error) {
    console.error('Unable to connect to database:', error);
    process.exit(1);
  }
};

export default sequelize;
"#;

const SEQUELIZE_JS: &str = r#"const { Sequelize } = require('sequelize');

const sequelize = new Sequelize(process.env.DATABASE_URL || '', {
  dialect: 'postgres',
  logging: false,
});

const connectDB = async () => {
  try {
    await sequelize.authenticate();
    console.log('PostgreSQL Connected');
  } catch (error) {
    console.error('Unable to connect to database:', error);
    process.exit(1);
  }
};

module.exports = { sequelize, connectDB };
"#;

const PRISMA_TS: &str = r#"import { PrismaClient } from '@prisma/client';

const prisma = new PrismaClient();

export default prisma;
"#;

const PRISMA_JS: &str = r#"const { PrismaClient } = require('@prisma/client');

const prisma = new PrismaClient();

module.exports = prisma;
"#;

const PRISMA_SCHEMA: &str = r#"// This is your Prisma schema file,
// learn more about it in the docs: https://pris.ly/d/prisma-schema

generator client {
  provider = "prisma-client-js"
}

datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

// Example model - you can modify this
// model User {
//   id        Int      @id @default(autoincrement())
//   email     String   @unique
//   name      String?
//   createdAt DateTime @default(now())
//   updatedAt DateTime @updatedAt
// }
"#;

/// Connector module for `src/config/db.<ext>`; `None` when no database is selected
pub fn render_db_connector(options: &ProjectOptions) -> Option<String> {
    let source = match (options.database(), options.language()) {
        (Database::None, _) => return None,
        (Database::Mongoose, Language::TypeScript) => MONGOOSE_TS,
        (Database::Mongoose, Language::JavaScript) => MONGOOSE_JS,
        (Database::Sequelize, Language::TypeScript) => SEQUELIZE_TS,
        (Database::Sequelize, Language::JavaScript) => SEQUELIZE_JS,
        (Database::Prisma, Language::TypeScript) => PRISMA_TS,
        (Database::Prisma, Language::JavaScript) => PRISMA_JS,
    };
    let example = database_url(options.database())
        .unwrap_or_default()
        .trim_matches('"');
    Some(format!("// DATABASE_URL example: {}\n{}", example, source))
}

pub fn render_prisma_schema() -> String {
    PRISMA_SCHEMA.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_connector_without_database() {
        for language in Language::ALL {
            let options = ProjectOptions::fixture(language, Database::None, false, false);
            assert!(render_db_connector(&options).is_none());
        }
    }

    #[test]
    fn test_connectors_match_language() {
        let ts = ProjectOptions::fixture(Language::TypeScript, Database::Mongoose, false, false);
        let src = render_db_connector(&ts).unwrap();
        assert!(src.starts_with("// DATABASE_URL example: mongodb://"));
        assert!(src.contains("import mongoose from 'mongoose';"));
        assert!(src.contains("process.exit(1)"));

        let js = ProjectOptions::fixture(Language::JavaScript, Database::Sequelize, false, false);
        let src = render_db_connector(&js).unwrap();
        assert!(src.contains("require('sequelize')"));
        assert!(src.contains("postgresql://"));
        assert!(src.contains("dialect: 'postgres'"));
        assert!(src.contains("logging: false"));

        let prisma = ProjectOptions::fixture(Language::TypeScript, Database::Prisma, false, false);
        assert!(render_db_connector(&prisma)
            .unwrap()
            .contains("new PrismaClient()"));
    }

    #[test]
    fn test_prisma_schema_has_no_models() {
        let schema = render_prisma_schema();
        assert!(schema.contains("url      = env(\"DATABASE_URL\")"));
        assert!(!schema.lines().any(|l| l.starts_with("model ")));
    }
}
