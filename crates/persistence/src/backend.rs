// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite-specific backend utilities.
//!
//! This module is limited to:
//! - Connection initialization
//! - Migration execution
//! - SQLite-specific configuration (PRAGMA statements, SQL functions)
//! - Schema introspection used by startup checks and `xtask verify-schema`
//!
//! All domain queries and mutations use Diesel DSL and live in `queries/`
//! or `mutations/`.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Nullable, Text};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::error::PersistenceError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

diesel::define_sql_function! {
    /// Unicode lower-casing. `SQLite`'s `lower` and `LIKE` only fold ASCII.
    fn fold_case(text: Nullable<Text>) -> Nullable<Text>;
}

/// Registers the SQL functions job queries rely on.
///
/// # Errors
///
/// Returns an error if `SQLite` rejects the registration.
pub fn register_functions(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    fold_case_utils::register_impl(conn, |text: Option<String>| {
        text.map(|text| text.to_lowercase())
    })
    .map_err(|e| PersistenceError::InitializationError(e.to_string()))
}

/// Tables the service cannot run without.
pub const EXPECTED_TABLES: [&str; 13] = [
    "applications",
    "candidates",
    "companies",
    "job_events",
    "job_pre_screen_questions",
    "job_requirements",
    "jobs",
    "memberships",
    "organizations",
    "placements",
    "recruiter_companies",
    "recruiters",
    "users",
];

/// Helper row struct for PRAGMA queries.
///
/// Diesel has no PRAGMA DSL.
#[derive(QueryableByName)]
struct PragmaRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[derive(QueryableByName)]
struct TableNameRow {
    #[diesel(sql_type = Text)]
    name: String,
}

#[derive(QueryableByName)]
struct ForeignKeyViolationRow {
    #[diesel(sql_type = Text)]
    table: String,
    #[diesel(sql_type = BigInt)]
    rowid: i64,
}

/// Verifies that foreign key enforcement is enabled.
///
/// # Errors
///
/// Returns an error if foreign key enforcement is not enabled.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let foreign_keys_enabled: i32 = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<PragmaRow>(conn)?
        .foreign_keys;

    if foreign_keys_enabled == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    info!("SQLite foreign key enforcement is enabled");
    Ok(())
}

/// Runs pending migrations on the provided connection.
///
/// # Errors
///
/// Returns an error if migration execution fails.
pub fn run_migrations(
    conn: &mut SqliteConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Running SQLite database migrations");
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Initializes a `SQLite` database at the given URL and runs migrations.
///
/// # Errors
///
/// Returns an error if connection or migration fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, "Initializing SQLite database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    register_functions(&mut conn)?;

    run_migrations(&mut conn).map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Enables WAL mode for file-based `SQLite` databases.
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}

/// Lists the user tables present in the database, sorted by name.
///
/// # Errors
///
/// Returns an error if the catalog query fails.
pub fn list_tables(conn: &mut SqliteConnection) -> Result<Vec<String>, PersistenceError> {
    let rows: Vec<TableNameRow> = diesel::sql_query(
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
         AND name != '__diesel_schema_migrations' ORDER BY name",
    )
    .load(conn)?;
    Ok(rows.into_iter().map(|r| r.name).collect())
}

/// Checks the applied schema: every expected table exists and no row
/// violates a foreign key.
///
/// # Errors
///
/// Returns `PersistenceError::InitializationError` describing the first
/// problem found.
pub fn verify_schema(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let tables: Vec<String> = list_tables(conn)?;
    for expected in EXPECTED_TABLES {
        if !tables.iter().any(|t| t == expected) {
            return Err(PersistenceError::InitializationError(format!(
                "missing table {expected}"
            )));
        }
    }

    let violations: Vec<ForeignKeyViolationRow> =
        diesel::sql_query("PRAGMA foreign_key_check").load(conn)?;
    if let Some(first) = violations.first() {
        return Err(PersistenceError::InitializationError(format!(
            "{} foreign key violation(s), first in {} row {}",
            violations.len(),
            first.table,
            first.rowid
        )));
    }

    info!(tables = tables.len(), "Schema verified");
    Ok(())
}
