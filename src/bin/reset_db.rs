use pragatix::infra::db::Database;
use rusqlite::Connection;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run()
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = Database::default_path();

    if !db_path.exists() {
        println!("Database does not exist at: {}", db_path.display());
        println!("No reset needed.");
        return Ok(());
    }

    println!("Connecting to database at: {}", db_path.display());

    let conn = Connection::open(&db_path)?;

    // Tables might not exist if the database was never initialized
    let tables_exist: i32 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='users'",
        [],
        |row| row.get(0),
    )?;

    if tables_exist == 0 {
        println!("Tables do not exist. No reset needed.");
        return Ok(());
    }

    let user_count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;

    println!("Current record counts:");
    println!("  Users: {}", user_count);

    conn.execute("DELETE FROM users", [])?;
    println!("Cleared users table");

    let user_count_after: i64 =
        conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;

    println!("\nAfter reset:");
    println!("  Users: {}", user_count_after);

    if user_count_after == 0 {
        println!("\nDatabase successfully reset! All records have been deleted.");
    } else {
        eprintln!("\nWarning: Some records still exist in the database.");
    }

    println!("Database location: {}", db_path.display());

    Ok(())
}
