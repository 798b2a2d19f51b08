//! Database connection pool and utility functions.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Schema,
    Statement,
};
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::entities::prelude::*;

/// Create a new database connection with configured pool settings.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(5)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt).await
}

/// Test database connection by executing a simple query.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared("SELECT 1").await?;
    Ok(())
}

/// Get PostgreSQL version string.
pub async fn get_version(db: &DatabaseConnection) -> Result<String, DbErr> {
    let result = db
        .query_one(Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            "SELECT version()".to_owned(),
        ))
        .await?;

    match result {
        Some(row) => {
            let version: String = row.try_get("", "version")?;
            Ok(version)
        }
        None => Ok("Unknown".to_owned()),
    }
}

/// Create the departments table if it does not exist yet.
///
/// Code and name are deliberately left without unique constraints; the seeder
/// checks both before inserting.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut stmt = schema.create_table_from_entity(Departments);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

/// Check whether the departments table exists, without creating it.
pub async fn departments_table_exists(db: &DatabaseConnection) -> Result<bool, DbErr> {
    let result = db
        .query_one(Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            "SELECT to_regclass('departments') IS NOT NULL AS present".to_owned(),
        ))
        .await?;

    match result {
        Some(row) => row.try_get("", "present"),
        None => Ok(false),
    }
}

/// Count stored departments.
pub async fn count_departments(db: &DatabaseConnection) -> Result<u64, DbErr> {
    Departments::find().count(db).await
}
