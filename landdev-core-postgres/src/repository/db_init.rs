//! Agreement and user tables
//!
//! The schema ships as numbered SQL scripts beside this crate: `migrations/`
//! builds the `agreements` and `users` tables, `cleanup/` drops them. Every
//! migration uses `IF NOT EXISTS`, so the server applies them on each start.

use sqlx::PgPool;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Order in which a directory of numbered scripts is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptOrder {
    /// `001_…` first; used when building the schema
    Forward,
    /// Highest number first; tables are dropped before the ones they follow
    Reverse,
}

fn migrations_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

fn cleanup_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup")
}

/// Creates the `agreements` and `users` tables if they are missing.
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use landdev_core_postgres::init_database;
///
/// # async fn start(pool: &PgPool) -> Result<(), sqlx::Error> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let applied = apply_scripts(pool, &migrations_dir(), ScriptOrder::Forward).await?;
    tracing::info!(scripts = applied, "agreement schema ready");
    Ok(())
}

/// Drops every table `init_database` creates. Stored agreements and users are lost.
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let applied = apply_scripts(pool, &cleanup_dir(), ScriptOrder::Reverse).await?;
    tracing::warn!(scripts = applied, "agreement schema dropped");
    Ok(())
}

/// Lists the `.sql` files of `dir` in application order.
fn schema_scripts(dir: &Path, order: ScriptOrder) -> io::Result<Vec<PathBuf>> {
    let mut scripts = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "sql") {
            scripts.push(path);
        }
    }
    scripts.sort();
    if order == ScriptOrder::Reverse {
        scripts.reverse();
    }
    Ok(scripts)
}

async fn apply_scripts(
    pool: &PgPool,
    dir: &Path,
    order: ScriptOrder,
) -> Result<usize, sqlx::Error> {
    let scripts = schema_scripts(dir, order)?;
    for script in &scripts {
        let sql = fs::read_to_string(script)?;
        tracing::debug!(script = %script.display(), "applying schema script");
        sqlx::raw_sql(&sql).execute(pool).await?;
    }
    Ok(scripts.len())
}
