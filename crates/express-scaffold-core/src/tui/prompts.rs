//! Charm-style CLI prompts using cliclack

use crate::compose::{compose, ProjectPlan};
use crate::context::RunContext;
use crate::manifest;
use crate::options::{validate_project_name, Database, Language, ProjectOptions, RawOptions};
use crate::product::ProductConfig;
use crate::report;
use crate::runtime::{self, PackageManager};
use crate::writer;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Answers supplied on the command line. Used only when complete.
    pub options: RawOptions,

    /// Directory the project is created in (defaults to the current directory)
    pub base_dir: Option<PathBuf>,
}

/// Run the generator: collect options, then create, initialize, generate,
/// install and report. Any failure aborts the remaining steps.
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    let started = Instant::now();

    let base_dir = match &args.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    // Non-interactive only when every option was given; validation precedes any output
    let options = if args.options.is_complete() {
        let options = ProjectOptions::parse(&args.options, &base_dir)?;
        cliclack::intro(config.display_name())?;
        cliclack::log::info(format!(
            "Using command line options: {}, {}, {}",
            options.project_name(),
            options.language(),
            options.database()
        ))?;
        options
    } else {
        cliclack::intro(config.display_name())?;
        prompt_options(config, &base_dir)?
    };

    let package_manager = select_package_manager(config).await?;
    let ctx = RunContext::new(started, options, &base_dir, package_manager);
    let plan = compose(ctx.options());

    create_structure(&ctx, &plan).await?;
    let ctx = initialize_manifest(ctx).await?;
    generate_files(&ctx, &plan).await?;
    install_dependencies(&ctx, &plan).await?;

    print_summary(config, &ctx, &plan)?;

    Ok(())
}

fn prompt_options<C: ProductConfig>(config: &C, base_dir: &Path) -> Result<ProjectOptions> {
    let validation_dir = base_dir.to_path_buf();
    let project_name: String = cliclack::input("What is the name of your project?")
        .placeholder(config.default_project_name())
        .default_input(config.default_project_name())
        .validate(move |input: &String| {
            validate_project_name(input, &validation_dir).map_err(|e| e.to_string())
        })
        .interact()?;

    let mut language_select = cliclack::select("Choose a language");
    for language in Language::ALL {
        language_select = language_select.item(language, language.display_name(), "");
    }
    let language: Language = language_select.interact()?;

    let mut database_select = cliclack::select("Choose a database");
    for database in Database::ALL {
        database_select = database_select.item(database, database.display_name(), "");
    }
    let database: Database = database_select.interact()?;

    let include_testing: bool = cliclack::confirm("Include Jest for testing?")
        .initial_value(true)
        .interact()?;

    let include_api_docs: bool = cliclack::confirm("Include Swagger for API documentation?")
        .initial_value(true)
        .interact()?;

    let options = ProjectOptions::new(
        project_name,
        language,
        database,
        include_testing,
        include_api_docs,
        base_dir,
    )?;
    Ok(options)
}

async fn select_package_manager<C: ProductConfig>(config: &C) -> Result<PackageManager> {
    let spinner = cliclack::spinner();
    spinner.start("Detecting package manager...");

    let override_env = config.package_manager_env();
    let info = tokio::task::spawn_blocking(move || runtime::detect_package_manager(override_env))
        .await
        .context("Package manager detection did not complete")?;
    if info.available {
        spinner.stop(format!(
            "Using {} ({})",
            info.manager,
            info.version.as_deref().unwrap_or("unknown")
        ));
    } else {
        spinner.stop(format!("Using {} (not found on PATH)", info.manager));
    }

    Ok(info.manager)
}

async fn create_structure(ctx: &RunContext, plan: &ProjectPlan) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project structure...");

    if let Err(e) = writer::create_skeleton(ctx.project_dir(), &plan.directories).await {
        spinner.stop("Failed to create project structure");
        return Err(e.into());
    }

    spinner.stop("Project structure created");
    Ok(())
}

async fn initialize_manifest(ctx: RunContext) -> Result<RunContext> {
    let preferred = ctx.package_manager();
    let spinner = cliclack::spinner();
    spinner.start("Initializing package.json...");

    let outcome = match runtime::init_manifest(ctx.project_dir(), preferred).await {
        Ok(outcome) => outcome,
        Err(e) => {
            spinner.stop("Failed to initialize package.json");
            return Err(e.into());
        }
    };

    spinner.stop(format!("package.json initialized with {}", outcome.manager));
    if outcome.fell_back {
        cliclack::log::warning(format!(
            "Failed to initialize with {}. Fell back to npm.",
            preferred
        ))?;
    }

    Ok(ctx.with_package_manager(outcome.manager))
}

async fn generate_files(ctx: &RunContext, plan: &ProjectPlan) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Generating project files...");

    let result = async {
        let written = writer::write_files(ctx.project_dir(), &plan.files).await?;
        manifest::amend_manifest_file(ctx.project_dir(), plan).await?;
        Ok::<_, crate::error::ScaffoldError>(written)
    }
    .await;

    match result {
        Ok(written) => {
            spinner.stop(format!("Generated {} project files", written.len()));
        }
        Err(e) => {
            spinner.stop("Failed to generate project files");
            return Err(e.into());
        }
    }

    if ctx.options().database() == Database::Prisma {
        cliclack::log::remark("Tip: Run \"npx prisma generate\" after defining your models")?;
    }

    Ok(())
}

async fn install_dependencies(ctx: &RunContext, plan: &ProjectPlan) -> Result<()> {
    let pm = ctx.package_manager();
    let spinner = cliclack::spinner();
    spinner.start(format!("Installing dependencies with {}...", pm));

    match runtime::install_all(ctx.project_dir(), &plan.dependencies, pm).await {
        Ok(moved) => {
            spinner.stop(format!(
                "Installed {} dependencies and {} dev dependencies",
                plan.dependencies.dependencies.len(),
                plan.dependencies.dev_dependencies.len()
            ));
            if !moved.is_empty() {
                cliclack::log::info(format!(
                    "Moved {} packages to devDependencies",
                    moved.len()
                ))?;
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop("Installation failed");
            Err(e.into())
        }
    }
}

fn print_summary<C: ProductConfig>(config: &C, ctx: &RunContext, plan: &ProjectPlan) -> Result<()> {
    let name = ctx.options().project_name();
    cliclack::log::success(format!(
        "Project \"{}\" created successfully in {} seconds!",
        name,
        ctx.elapsed_display()
    ))?;

    println!();
    println!("  {}", "Project structure".bold());
    println!();
    for line in report::structure_lines(name, plan) {
        println!("  {}", line.dimmed());
    }

    let steps = config.next_steps(ctx.options(), ctx.package_manager());

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }
    println!();

    cliclack::outro(format!("Happy coding! Docs: {}", config.docs_url()))?;

    Ok(())
}
