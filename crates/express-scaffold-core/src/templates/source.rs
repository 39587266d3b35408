//! Entry point and API-doc bootstrap sources

use super::DEFAULT_PORT;
use crate::options::ProjectOptions;

const ROUTE_ANNOTATION: &str = r#"/**
 * @openapi
 * /:
 *   get:
 *     summary: Greeting endpoint
 *     responses:
 *       200:
 *         description: Returns a greeting message
 */
"#;

/// Minimal HTTP server: env config, one greeting route, optional docs UI
pub fn render_entry_point(options: &ProjectOptions) -> String {
    let ts = options.is_typescript();
    let docs = options.include_api_docs();
    let mut out = String::new();

    if ts {
        out.push_str("import express, { Request, Response } from 'express';\n");
        out.push_str("import dotenv from 'dotenv';\n");
        if docs {
            out.push_str("import swaggerUi from 'swagger-ui-express';\n");
            out.push_str("import { swaggerSpec } from './swagger';\n");
        }
        out.push_str("\ndotenv.config();\n");
    } else {
        out.push_str("const express = require('express');\n");
        if docs {
            out.push_str("const swaggerUi = require('swagger-ui-express');\n");
            out.push_str("const { swaggerSpec } = require('./swagger');\n");
        }
        out.push_str("require('dotenv').config();\n");
    }

    out.push_str("\nconst app = express();\n");
    out.push_str(&format!(
        "const PORT = process.env.PORT || {};\n\n",
        DEFAULT_PORT
    ));
    out.push_str("app.use(express.json());\n");
    if docs {
        out.push_str("app.use('/api-docs', swaggerUi.serve, swaggerUi.setup(swaggerSpec));\n");
    }
    out.push('\n');

    if docs {
        out.push_str(ROUTE_ANNOTATION);
    }
    if ts {
        out.push_str("app.get('/', (req: Request, res: Response) => {\n");
    } else {
        out.push_str("app.get('/', (req, res) => {\n");
    }
    out.push_str("  res.json({ message: 'Hello World!' });\n");
    out.push_str("});\n\n");

    out.push_str("app.listen(PORT, () => {\n");
    out.push_str("  console.log(`Server running on port ${PORT}`);\n");
    out.push_str("});\n");

    out
}

/// OpenAPI bootstrap scanning the entry point for `@openapi` annotations
pub fn render_swagger(options: &ProjectOptions) -> String {
    let ts = options.is_typescript();
    let mut out = String::new();

    if ts {
        out.push_str("import swaggerJsdoc from 'swagger-jsdoc';\n\n");
        out.push_str("const options: swaggerJsdoc.Options = {\n");
    } else {
        out.push_str("const swaggerJsdoc = require('swagger-jsdoc');\n\n");
        out.push_str("const options = {\n");
    }

    out.push_str(&format!(
        r#"  definition: {{
    openapi: '3.0.0',
    info: {{
      title: 'Express API',
      version: '1.0.0',
      description: 'API documentation generated from route annotations',
    }},
    servers: [{{ url: 'http://localhost:{port}' }}],
  }},
  apis: ['./src/index.{ext}'],
}};
"#,
        port = DEFAULT_PORT,
        ext = options.extension()
    ));

    if ts {
        out.push_str("\nexport const swaggerSpec = swaggerJsdoc(options);\n");
    } else {
        out.push_str("\nconst swaggerSpec = swaggerJsdoc(options);\n");
    }

    out.push_str("\nif (require.main === module) {\n");
    out.push_str("  console.log(JSON.stringify(swaggerSpec, null, 2));\n");
    out.push_str("}\n");

    if !ts {
        out.push_str("\nmodule.exports = { swaggerSpec };\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Database, Language};

    fn options(language: Language, docs: bool) -> ProjectOptions {
        ProjectOptions::fixture(language, Database::None, false, docs)
    }

    #[test]
    fn test_typescript_entry_point() {
        let src = render_entry_point(&options(Language::TypeScript, false));
        assert!(src.starts_with("import express, { Request, Response } from 'express';"));
        assert!(src.contains("dotenv.config();"));
        assert!(src.contains("process.env.PORT || 8080"));
        assert!(src.contains("res.json({ message: 'Hello World!' });"));
        assert!(src.contains("console.log(`Server running on port ${PORT}`);"));
        assert!(!src.contains("swagger"));
    }

    #[test]
    fn test_javascript_entry_point_mounts_docs() {
        let src = render_entry_point(&options(Language::JavaScript, true));
        assert!(src.contains("const express = require('express');"));
        assert!(src.contains("require('./swagger')"));
        assert!(src.contains("app.use('/api-docs'"));
        assert!(src.contains("@openapi"));
        assert!(!src.contains("Request, Response"));
    }

    #[test]
    fn test_swagger_scans_entry_point() {
        let ts = render_swagger(&options(Language::TypeScript, true));
        assert!(ts.contains("apis: ['./src/index.ts']"));
        assert!(ts.contains("export const swaggerSpec"));
        assert!(ts.contains("http://localhost:8080"));

        let js = render_swagger(&options(Language::JavaScript, true));
        assert!(js.contains("apis: ['./src/index.js']"));
        assert!(js.contains("module.exports = { swaggerSpec };"));
    }
}
