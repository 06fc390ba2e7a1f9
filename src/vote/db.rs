use std::sync::{Mutex, MutexGuard, PoisonError};

use rusqlite::{params, Connection};

use super::{LeaderboardEntry, Period, VoteKind, VoteRecord, VoteStats};

/// Anonymous member votes, one row per (voter, target, guild).
pub struct VoteDb {
    conn: Mutex<Connection>,
}

impl VoteDb {
    pub fn new(path: &str) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS votes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                voter_id INTEGER NOT NULL,
                target_id INTEGER NOT NULL,
                guild_id INTEGER NOT NULL,
                kind TEXT NOT NULL,
                created_at TEXT DEFAULT (datetime('now')),
                UNIQUE(voter_id, target_id, guild_id)
            );
            CREATE INDEX IF NOT EXISTS idx_votes_guild_target
                ON votes(guild_id, target_id);",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a vote. A voter who already voted for the same target has the
    /// old vote replaced.
    pub fn cast(
        &self,
        voter_id: u64,
        target_id: u64,
        guild_id: u64,
        kind: VoteKind,
    ) -> Result<(), rusqlite::Error> {
        self.conn().execute(
            "INSERT OR REPLACE INTO votes (voter_id, target_id, guild_id, kind)
             VALUES (?1, ?2, ?3, ?4)",
            params![voter_id as i64, target_id as i64, guild_id as i64, kind.as_db()],
        )?;
        Ok(())
    }

    pub fn stats(
        &self,
        target_id: u64,
        guild_id: u64,
        period: Period,
    ) -> Result<VoteStats, rusqlite::Error> {
        self.conn().query_row(
            "SELECT
                COALESCE(SUM(CASE WHEN kind = 'good' THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN kind = 'bad' THEN 1 ELSE 0 END), 0)
             FROM votes
             WHERE target_id = ?1 AND guild_id = ?2
               AND (?3 IS NULL OR created_at >= datetime('now', ?3))",
            params![target_id as i64, guild_id as i64, period.sqlite_modifier()],
            |row| {
                Ok(VoteStats {
                    good: row.get(0)?,
                    bad: row.get(1)?,
                })
            },
        )
    }

    /// Targets ranked by good votes, ties broken by total votes.
    pub fn leaderboard(
        &self,
        guild_id: u64,
        period: Period,
        limit: u32,
    ) -> Result<Vec<LeaderboardEntry>, rusqlite::Error> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT target_id,
                    SUM(CASE WHEN kind = 'good' THEN 1 ELSE 0 END) AS good,
                    SUM(CASE WHEN kind = 'bad' THEN 1 ELSE 0 END) AS bad,
                    COUNT(*) AS total
             FROM votes
             WHERE guild_id = ?1
               AND (?2 IS NULL OR created_at >= datetime('now', ?2))
             GROUP BY target_id
             ORDER BY good DESC, total DESC, target_id ASC
             LIMIT ?3",
        )?;

        let rows = stmt.query_map(
            params![guild_id as i64, period.sqlite_modifier(), limit],
            |row| {
                Ok(LeaderboardEntry {
                    target_id: row.get::<_, i64>(0)? as u64,
                    stats: VoteStats {
                        good: row.get(1)?,
                        bad: row.get(2)?,
                    },
                })
            },
        )?;
        rows.collect()
    }

    /// The voter's own most recent votes, newest first.
    pub fn history(
        &self,
        voter_id: u64,
        guild_id: u64,
        limit: u32,
    ) -> Result<Vec<VoteRecord>, rusqlite::Error> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT target_id, kind, created_at FROM votes
             WHERE voter_id = ?1 AND guild_id = ?2
             ORDER BY created_at DESC, id DESC
             LIMIT ?3",
        )?;

        let rows = stmt.query_map(params![voter_id as i64, guild_id as i64, limit], |row| {
            let kind: String = row.get(1)?;
            Ok((row.get::<_, i64>(0)?, kind, row.get::<_, String>(2)?))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (target_id, kind, created_at) = row?;
            match VoteKind::from_db(&kind) {
                Some(kind) => records.push(VoteRecord {
                    target_id: target_id as u64,
                    kind,
                    created_at,
                }),
                None => tracing::warn!("알 수 없는 투표 종류 무시: {kind}"),
            }
        }
        Ok(records)
    }
}
