// src/db/users.rs
use crate::db::connection::Database;
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

#[derive(Debug, Clone)]
pub struct User {
    pub slack_name: String,
    pub steam_id: Option<String>,
    pub poe_account: Option<String>,
    pub lifting: LiftingStats,
}

#[derive(Debug, Clone, Copy)]
pub struct LiftingStats {
    pub bench: i64,
    pub squat: i64,
    pub deadlift: i64,
    pub health: i64,
}

impl LiftingStats {
    pub fn total(&self) -> i64 {
        self.bench + self.squat + self.deadlift
    }
}

/// Steam ids of everyone who registered one, for the status report.
pub fn list_steam_ids(db: &Database) -> Result<Vec<String>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare("SELECT steam_id FROM users WHERE steam_id IS NOT NULL ORDER BY slack_name")
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

/// PoE account names of everyone who registered one, for the ladder report.
pub fn list_poe_accounts(db: &Database) -> Result<Vec<String>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                "SELECT poe_account FROM users WHERE poe_account IS NOT NULL ORDER BY slack_name",
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

/// Loads the user's record, creating it with default lifting stats on
/// first contact (anyone in the Slack can start lifting).
pub fn get_or_create_user(db: &Database, slack_name: &str) -> Result<User, ServerError> {
    let now = Utc::now().naive_utc();

    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO users (slack_name, created_at) VALUES (?1, ?2)
             ON CONFLICT(slack_name) DO NOTHING",
            params![slack_name, now],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

        let user = conn
            .query_row(
                r#"
                SELECT slack_name, steam_id, poe_account,
                       bench, squat, deadlift, health
                FROM users
                WHERE slack_name = ?1
                "#,
                params![slack_name],
                |row| {
                    Ok(User {
                        slack_name: row.get(0)?,
                        steam_id: row.get(1)?,
                        poe_account: row.get(2)?,
                        lifting: LiftingStats {
                            bench: row.get(3)?,
                            squat: row.get(4)?,
                            deadlift: row.get(5)?,
                            health: row.get(6)?,
                        },
                    })
                },
            )
            .optional()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        user.ok_or_else(|| {
            ServerError::DbError(format!("user row missing after upsert: {slack_name}"))
        })
    })
}

pub fn update_lifting(
    db: &Database,
    slack_name: &str,
    stats: &LiftingStats,
) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            UPDATE users
            SET bench = ?1, squat = ?2, deadlift = ?3, health = ?4
            WHERE slack_name = ?5
            "#,
            params![
                stats.bench,
                stats.squat,
                stats.deadlift,
                stats.health,
                slack_name
            ],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
}
