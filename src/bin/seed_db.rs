use pragatix::domain::User;
use pragatix::infra::db::Database;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = Database::default_path();

    println!("Connecting to database at: {}", db_path.display());

    let db = Database::open_at(db_path.clone())?;
    let conn = db.connection();
    let conn = conn.lock().unwrap();

    // Sample accounts for exercising the registration endpoint, including
    // the duplicate-email rejection
    let users = vec![
        User {
            id: "5f2b9c1e-6f6d-4c5a-9b1a-3d9e8f7a6b5c".to_string(),
            name: "Alice Nguyen".to_string(),
            email: "alice@example.com".to_string(),
            password: "correct horse battery staple".to_string(),
            created_at: "2024-01-15T09:30:00+00:00".to_string(),
        },
        User {
            id: "8a4d2e7b-1c3f-4a9d-8e6b-5f0a9c8d7e6f".to_string(),
            name: "Bob Okafor".to_string(),
            email: "bob@example.com".to_string(),
            password: "hunter2".to_string(),
            created_at: "2024-01-16T14:05:00+00:00".to_string(),
        },
        User {
            id: "c1e0f9d8-7b6a-4e5d-9c8b-2a1f0e9d8c7b".to_string(),
            name: "Carol Ibrahim".to_string(),
            email: "carol@example.com".to_string(),
            password: "letmein".to_string(),
            created_at: "2024-01-17T08:45:00+00:00".to_string(),
        },
    ];

    for user in &users {
        conn.execute(
            "INSERT OR REPLACE INTO users (id, name, email, password, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            (
                &user.id,
                &user.name,
                &user.email,
                &user.password,
                &user.created_at,
            ),
        )?;
        println!("Inserted user: {} <{}>", user.name, user.email);
    }

    println!("\nSample data successfully added to database!");
    println!("Database location: {}", db_path.display());
    println!(
        "Run `pragatix serve` and POST to /api/auth/register to exercise the endpoint; \
         re-registering one of the seeded emails returns the duplicate error."
    );

    Ok(())
}
