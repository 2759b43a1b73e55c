//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `potion_core` linkage against the configured store.
//! - Print a short deterministic summary of persisted state.

use potion_core::db::open_db;
use potion_core::{core_version, init_logging, CoreConfig, MoodAlchemy, SqliteKvStore};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env();
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }

    let conn = open_db(&config.db_path)?;
    let app = MoodAlchemy::load(SqliteKvStore::new(&conn))?;

    println!("potion_core version={}", core_version());
    println!("store={}", config.db_path.display());
    println!(
        "language={} tasks={} completed={} potions={}",
        app.language().badge(),
        app.tasks().len(),
        app.completed_tasks().len(),
        app.potions().len()
    );
    if let Some(latest) = app.potions().first() {
        println!("latest: {}", app.story(latest));
    }
    for story in app.foreign_stories() {
        match story {
            Ok(story) => println!("foreign: {story}"),
            Err(err) => println!("foreign: skipped ({err})"),
        }
    }
    Ok(())
}
