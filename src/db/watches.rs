// src/db/watches.rs
use crate::db::connection::Database;
use crate::errors::ServerError;
use crate::trade::models::{Listing, WatchQuery};
use chrono::Utc;
use rusqlite::params;

/// All registered watches, with whatever the last cycle persisted.
pub fn list_watches(db: &Database) -> Result<Vec<WatchQuery>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                SELECT search_title, search_url, requester, rules_json, previous_json
                FROM watches
                ORDER BY created_at
                "#,
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, Option<String>>(4)?,
                ))
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            let (search_title, search_url, requester, rules_json, previous_json) =
                r.map_err(|e| ServerError::DbError(e.to_string()))?;

            let search_rules: Vec<(String, String)> = serde_json::from_str(&rules_json)
                .map_err(|e| {
                    ServerError::DbError(format!("bad rules_json for {search_title}: {e}"))
                })?;

            let previous_results: Vec<Listing> = match previous_json {
                Some(json) => serde_json::from_str(&json).map_err(|e| {
                    ServerError::DbError(format!("bad previous_json for {search_title}: {e}"))
                })?,
                None => Vec::new(),
            };

            out.push(WatchQuery {
                search_title,
                search_url,
                requester,
                search_rules,
                previous_results,
            });
        }
        Ok(out)
    })
}

/// Registers a watch. Returns false if the title is already taken.
pub fn insert_watch(db: &Database, watch: &WatchQuery) -> Result<bool, ServerError> {
    let now = Utc::now().naive_utc();
    let rules_json = serde_json::to_string(&watch.search_rules)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    db.with_conn(|conn| {
        let changed = conn
            .execute(
                r#"
                INSERT INTO watches (search_title, search_url, requester, rules_json, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ON CONFLICT(search_title) DO NOTHING
                "#,
                params![
                    watch.search_title,
                    watch.search_url,
                    watch.requester,
                    rules_json,
                    now
                ],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(changed == 1)
    })
}

/// Removes a watch. Returns false if no such title existed.
pub fn delete_watch(db: &Database, search_title: &str) -> Result<bool, ServerError> {
    db.with_conn(|conn| {
        let changed = conn
            .execute(
                "DELETE FROM watches WHERE search_title = ?1",
                params![search_title],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(changed == 1)
    })
}

/// Rewrites the stored listing set for a watch, wholesale, once per
/// cycle. Called unconditionally even when nothing changed.
pub fn save_previous_results(
    db: &Database,
    search_title: &str,
    results: &[Listing],
) -> Result<(), ServerError> {
    let json =
        serde_json::to_string(results).map_err(|e| ServerError::DbError(e.to_string()))?;

    db.with_conn(|conn| {
        conn.execute(
            "UPDATE watches SET previous_json = ?1 WHERE search_title = ?2",
            params![json, search_title],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
}
