//! Express CLI - Project scaffolding for Express backend services

use clap::Parser;
use colored::Colorize;
use express_scaffold_core::tui::CreateArgs;
use express_scaffold_core::{Database, PackageManager, ProductConfig, ProjectOptions, RawOptions};

/// Express generator product configuration
#[derive(Clone)]
pub struct ExpressConfig;

impl ProductConfig for ExpressConfig {
    fn display_name(&self) -> &'static str {
        "Express.js Project Generator"
    }

    fn default_project_name(&self) -> &'static str {
        "my-express-app"
    }

    fn package_manager_env(&self) -> &'static str {
        "EXPRESS_CREATE_PACKAGE_MANAGER"
    }

    fn docs_url(&self) -> &'static str {
        "https://expressjs.com"
    }

    fn next_steps(&self, options: &ProjectOptions, pm: PackageManager) -> Vec<String> {
        let mut steps = vec![format!("cd {}", options.project_name())];

        if options.database() == Database::Prisma {
            steps.push("npx prisma generate".to_string());
        }

        steps.push(format!("{} dev", pm.run_command()));

        steps
    }
}

/// Generate a new Express project. Without a complete set of options the
/// generator asks for every option interactively.
#[derive(Parser, Debug)]
#[command(name = "express-create")]
#[command(about = "CLI for scaffolding Express backend services")]
#[command(version)]
pub struct Args {
    /// Project name (letters, numbers, hyphens, underscores)
    #[arg(long = "projectName")]
    pub project_name: Option<String>,

    /// TypeScript or JavaScript
    #[arg(long)]
    pub language: Option<String>,

    /// Mongoose, Sequelize, Prisma or None
    #[arg(long)]
    pub database: Option<String>,

    /// Include Jest for testing (true|false)
    #[arg(long = "includeJest")]
    pub include_jest: Option<String>,

    /// Include Swagger for API documentation (true|false)
    #[arg(long = "includeSwagger")]
    pub include_swagger: Option<String>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            options: RawOptions {
                project_name: args.project_name,
                language: args.language,
                database: args.database,
                include_jest: args.include_jest,
                include_swagger: args.include_swagger,
            },
            base_dir: None,
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = ExpressConfig;

    let result = express_scaffold_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!();
        eprintln!("{} {:#}", "Fatal error:".red().bold(), e);
        std::process::exit(1);
    }
}
