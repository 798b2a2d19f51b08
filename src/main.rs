//! Hotel HR - department seeding and job position catalog.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hotel_hr as app;
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use app::catalog::{COMMON_DEPARTMENTS, Category, PositionCatalog, PositionView, categorize};
use app::config::{AppConfig, ConfigLoadResult};
use app::db;
use app::models::Department;
use app::seed::{self, DepartmentSeeder, SeedOutcome};
use app::store::SeaOrmDepartmentStore;

/// Hotel HR backend: departments and job positions.
#[derive(Parser)]
#[command(name = "hotel-hr", version)]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long, global = true)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create any missing common departments
    Seed {
        /// Report what would be created without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// List stored departments
    Departments {
        /// Only active departments
        #[arg(long)]
        active: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List or search job positions
    Positions {
        /// Case-insensitive text matched against name and description
        query: Option<String>,
        /// Restrict to one category, e.g. "Front Office"
        #[arg(long, value_name = "LABEL")]
        category: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List position categories in rule order
    Categories,
    /// Show the category a position identifier resolves to
    Categorize { identifier: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let config_path = match cli.config {
        Some(path) => path,
        None if cli.dev => {
            info!("Dev mode: loading config from current directory");
            PathBuf::from("config.toml")
        }
        None => AppConfig::default_path(),
    };

    match cli.command {
        Command::Positions { query, category, json } => show_positions(query.as_deref(), category.as_deref(), json),
        Command::Categories => {
            for category in Category::ALL {
                println!("{category}");
            }
            Ok(())
        }
        Command::Categorize { identifier } => {
            println!("{}", categorize(identifier.trim()));
            Ok(())
        }
        Command::Seed { dry_run } => {
            let config = load_config(&config_path)?;
            let conn = open_database(&config, !dry_run).await?;
            run_seed(&conn, dry_run).await
        }
        Command::Departments { active, json } => {
            let config = load_config(&config_path)?;
            let conn = open_database(&config, true).await?;
            if config.seed.on_startup {
                seed_on_startup(&conn).await;
            }
            show_departments(&conn, active, json).await
        }
    }
}

/// Load config, falling back to defaults when the file is missing.
fn load_config(path: &Path) -> Result<AppConfig> {
    info!("Config path: {:?}", path);
    match AppConfig::try_load(path) {
        ConfigLoadResult::Loaded(config) => {
            info!("Config loaded successfully");
            Ok(config)
        }
        ConfigLoadResult::Missing => {
            warn!("Config missing, using defaults");
            Ok(AppConfig::default())
        }
        ConfigLoadResult::Invalid(e) => Err(e).with_context(|| format!("Invalid config {}", path.display())),
    }
}

/// Connect, creating the departments table when `prepare_schema` is set.
async fn open_database(config: &AppConfig, prepare_schema: bool) -> Result<DatabaseConnection> {
    let conn = db::connect(&config.database.connection_string())
        .await
        .context("Failed to connect to database")?;
    db::test_connection(&conn).await.context("Database is not responding")?;

    if let Ok(version) = db::get_version(&conn).await {
        info!("PostgreSQL: {}", version);
    }

    if prepare_schema {
        db::ensure_schema(&conn)
            .await
            .context("Failed to prepare departments table")?;
    }

    if let Ok(count) = db::count_departments(&conn).await {
        info!("Tables: {} departments", count);
    }

    Ok(conn)
}

/// Best-effort seeding before serving department data.
async fn seed_on_startup(conn: &DatabaseConnection) {
    let store = SeaOrmDepartmentStore::new(conn.clone());
    let outcome = DepartmentSeeder::new(&store).seed_all().await;
    if !outcome.is_seeded() {
        warn!("Continuing with existing departments");
    }
}

async fn run_seed(conn: &DatabaseConnection, dry_run: bool) -> Result<()> {
    let outcome = if dry_run {
        let existing: Vec<Department> = if db::departments_table_exists(conn).await? {
            db::department::list_all(conn)
                .await?
                .into_iter()
                .map(Department::from)
                .collect()
        } else {
            info!("Departments table not created yet, planning against an empty store");
            Vec::new()
        };
        let (outcome, planned) = seed::plan(&existing, COMMON_DEPARTMENTS).await;

        for department in &planned {
            println!("Would create {} ({})", department.name, department.code);
        }
        outcome
    } else {
        let store = SeaOrmDepartmentStore::new(conn.clone());
        DepartmentSeeder::new(&store).seed_all().await
    };

    println!("{}", outcome.summary());
    match outcome {
        SeedOutcome::Seeded(_) => Ok(()),
        SeedOutcome::Failed { reason } => bail!("department seeding failed: {reason}"),
    }
}

async fn show_departments(conn: &DatabaseConnection, active_only: bool, json: bool) -> Result<()> {
    let departments: Vec<Department> = if active_only {
        db::department::list_active(conn).await?
    } else {
        db::department::list_all(conn).await?
    }
    .into_iter()
    .map(Department::from)
    .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&departments)?);
        return Ok(());
    }

    println!("{:<8} {:<28} {:<8} DESCRIPTION", "CODE", "NAME", "ACTIVE");
    for department in &departments {
        println!(
            "{:<8} {:<28} {:<8} {}",
            department.code,
            department.name,
            if department.is_active { "yes" } else { "no" },
            department.description
        );
    }
    Ok(())
}

fn show_positions(query: Option<&str>, category: Option<&str>, json: bool) -> Result<()> {
    let catalog = PositionCatalog::default();

    let category = match category {
        Some(label) => match Category::from_label(label) {
            Some(category) => Some(category),
            None => {
                let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
                bail!("unknown category {label:?}, expected one of: {}", labels.join(", "));
            }
        },
        None => None,
    };

    let views: Vec<PositionView> = match (query, category) {
        (query, None) => catalog.search(query),
        (None, Some(category)) => catalog.by_category(category),
        (Some(query), Some(category)) => catalog
            .search(Some(query))
            .into_iter()
            .filter(|v| v.category == category)
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!("{:<34} {:<16} DESCRIPTION", "POSITION", "CATEGORY");
    for view in &views {
        println!("{:<34} {:<16} {}", view.name, view.category.label(), view.description);
    }
    Ok(())
}
