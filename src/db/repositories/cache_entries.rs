use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use crate::{
    db::{connection::Database, helpers::parse_datetime, models::CacheEntry},
    fingerprint::Fingerprint,
};

fn row_to_cache_entry(row: &Row) -> Result<CacheEntry> {
    let created: String = row.get("created")?;

    Ok(CacheEntry {
        fingerprint: row.get("id")?,
        transcript: row.get("transcript")?,
        summary: row.get("summary")?,
        created_at: parse_datetime(&created, "created")?,
    })
}

impl Database {
    /// Look up a previously computed transcript/summary pair. No side
    /// effects; an unknown fingerprint is simply `None`.
    pub async fn get_cached(&self, fingerprint: &Fingerprint) -> Result<Option<CacheEntry>> {
        let id = fingerprint.as_str().to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, transcript, summary, created
                 FROM cache
                 WHERE id = ?1",
            )?;

            let entry = stmt
                .query_row(params![id], |row| Ok(row_to_cache_entry(row)))
                .optional()?;

            entry.transpose()
        })
        .await
    }

    /// Store a computed pair, replacing any entry already present for the
    /// fingerprint. The row is committed before this returns.
    pub async fn put_cached(
        &self,
        fingerprint: &Fingerprint,
        transcript: &str,
        summary: &str,
    ) -> Result<()> {
        let id = fingerprint.as_str().to_string();
        let transcript = transcript.to_string();
        let summary = summary.to_string();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO cache (id, transcript, summary, created)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                     transcript = excluded.transcript,
                     summary = excluded.summary,
                     created = excluded.created",
                params![id, transcript, summary, Utc::now().to_rfc3339()],
            )?;
            Ok(())
        })
        .await
    }
}
