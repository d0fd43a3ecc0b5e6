//! SQLite PRAGMA configuration.
//! Must be called on every connection immediately after opening.

use datamapper_core::config::DatabaseConfig;
use rusqlite::Connection;
use tracing::warn;

/// Apply busy timeout, foreign keys and (for file databases) journal mode.
pub fn apply_pragmas(conn: &Connection, config: &DatabaseConfig) -> rusqlite::Result<()> {
    conn.busy_timeout(config.effective_busy_timeout())?;

    let foreign_keys = if config.effective_foreign_keys() { "ON" } else { "OFF" };
    let mut batch = format!("PRAGMA foreign_keys = {foreign_keys};");
    let journal_mode = config.effective_journal_mode();
    if config.path.is_some() {
        if is_pragma_word(journal_mode) {
            batch.push_str(&format!(" PRAGMA journal_mode = {journal_mode};"));
        } else {
            warn!(journal_mode, "ignoring journal_mode that is not a plain word");
        }
    }
    conn.execute_batch(&batch)
}

fn is_pragma_word(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}
