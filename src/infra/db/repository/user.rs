use super::DbConn;
use crate::domain::User;
use anyhow::Result;

/// Repository for user operations.
pub struct UserRepository {
    conn: DbConn,
}

impl UserRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Inserts a new user. The unique index on email rejects duplicates.
    pub fn insert(&self, user: &User) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO users (id, name, email, password, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            (
                &user.id,
                &user.name,
                &user.email,
                &user.password,
                &user.created_at,
            ),
        )?;
        Ok(())
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, name, email, password, created_at FROM users WHERE email = ?1",
        )?;
        let mut rows = stmt.query_map([email], |row| {
            Ok(User {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                password: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;

        match rows.next() {
            Some(row) => row.map(Some).map_err(Into::into),
            None => Ok(None),
        }
    }

    pub fn list_all(&self) -> Result<Vec<User>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, name, email, password, created_at FROM users ORDER BY created_at",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(User {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                password: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn count(&self) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn delete_all(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM users", [])?;
        Ok(())
    }
}
