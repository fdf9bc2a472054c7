//! SQLite job store for AutoApply.
//!
//! Backs the database probes with a local `jobs` table.

mod backend;
mod record;
mod schema;

pub use backend::SqliteJobStore;
pub use record::JobRecord;
