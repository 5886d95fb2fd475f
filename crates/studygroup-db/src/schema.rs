//! Schema definitions and migration runner for SurrealDB.
//!
//! All table definitions use SCHEMAFULL mode for data integrity.
//! Record ids are integers drawn from the `sequence` table. Enums are
//! stored as strings with ASSERT constraints for validation.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "initial_schema",
        sql: SCHEMA_V1,
    },
    Migration {
        version: 2,
        name: "study_group_create_date_index",
        sql: SCHEMA_V2,
    },
];

// -----------------------------------------------------------------------
// Schema v1 — study groups and id sequences
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
DEFINE TABLE study_group SCHEMAFULL;
DEFINE FIELD name ON TABLE study_group TYPE string \
    ASSERT string::len($value) >= 5 AND string::len($value) <= 30;
DEFINE FIELD subject ON TABLE study_group TYPE string \
    ASSERT $value IN ['Math', 'Physics', 'Chemistry'];
DEFINE FIELD create_date ON TABLE study_group TYPE datetime READONLY;
DEFINE FIELD members ON TABLE study_group TYPE array<int> DEFAULT [];
DEFINE INDEX idx_study_group_subject ON TABLE study_group \
    COLUMNS subject;

-- One record per table, keyed by table name.
DEFINE TABLE sequence SCHEMAFULL;
DEFINE FIELD value ON TABLE sequence TYPE int DEFAULT 0;
";

// -----------------------------------------------------------------------
// Schema v2 — search results are ordered by creation date
// -----------------------------------------------------------------------

const SCHEMA_V2: &str = "\
DEFINE INDEX idx_study_group_create_date ON TABLE study_group \
    COLUMNS create_date;
";

// -----------------------------------------------------------------------
// Public API
// -----------------------------------------------------------------------

/// Version of the newest known migration.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

/// Run all pending migrations against the given SurrealDB client.
///
/// Creates a `_migration` tracking table on first run, then applies
/// each migration whose version exceeds the highest recorded one.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    let current = current_version(db).await?;
    let pending = MIGRATIONS.iter().filter(|m| m.version > current);

    for migration in pending {
        apply(db, migration).await?;
    }

    Ok(())
}

async fn current_version<C: Connection>(db: &Surreal<C>) -> Result<u32, DbError> {
    let mut result = db
        .query("SELECT version FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    Ok(records.first().map(|m| m.version).unwrap_or(0))
}

async fn apply<C: Connection>(db: &Surreal<C>, migration: &Migration) -> Result<(), DbError> {
    info!(
        version = migration.version,
        name = migration.name,
        "Applying migration"
    );

    db.query(migration.sql).await?.check().map_err(|e| {
        DbError::Migration(format!(
            "v{} '{}' failed: {e}",
            migration.version, migration.name
        ))
    })?;

    db.query("CREATE _migration SET version = $version, name = $name")
        .bind(("version", migration.version))
        .bind(("name", migration.name))
        .await?
        .check()
        .map_err(|e| {
            DbError::Migration(format!("recording v{} failed: {e}", migration.version))
        })?;

    Ok(())
}
