use std::path::Path;

use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use tracing::{debug, info};

use crate::data::{MatchResult, Player, StandingsRow};
use crate::error::{Error, Result};

/// Handle to the tournament database. Every component borrows one of these;
/// nothing holds a connection of its own.
pub struct Store {
	conn: Connection,
}

impl Store {
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let conn = Connection::open(path).map_err(|source| Error::Connection {
			path: path.to_path_buf(),
			source,
		})?;
		debug!(path = %path.display(), "opened database");

		Self::from_connection(conn)
	}

	pub fn open_in_memory() -> Result<Self> {
		let conn = Connection::open_in_memory().map_err(|source| Error::Connection {
			path: ":memory:".into(),
			source,
		})?;

		Self::from_connection(conn)
	}

	fn from_connection(mut conn: Connection) -> Result<Self> {
		conn.pragma_update(None, "foreign_keys", true)?;
		create_schema(&mut conn)?;

		Ok(Self { conn })
	}

	/// Starts a transaction on the shared connection. Store calls made while
	/// it is alive are part of it; dropping it without `commit` rolls back.
	pub fn begin(&self) -> Result<Transaction<'_>> {
		Ok(self.conn.unchecked_transaction()?)
	}

	pub fn create_player(&self, name: &str) -> Result<i64> {
		let mut stmt = self.conn.prepare(
			"INSERT INTO players (name, registered) 
			 VALUES (?1, ?2);",
		)?;
		stmt.execute(params![name, Utc::now().naive_utc()])?;

		Ok(self.conn.last_insert_rowid())
	}

	/// Removes every player, and with them every match.
	pub fn delete_all_players(&self) -> Result<()> {
		let tx = self.begin()?;
		let matches = tx.execute("DELETE FROM matches;", [])?;
		let players = tx.execute("DELETE FROM players;", [])?;
		tx.commit()?;

		info!(players, matches, "deleted all players");
		Ok(())
	}

	pub fn delete_all_matches(&self) -> Result<()> {
		let matches = self.conn.execute("DELETE FROM matches;", [])?;

		info!(matches, "deleted all matches");
		Ok(())
	}

	pub fn count_players(&self) -> Result<usize> {
		let count = self
			.conn
			.query_row("SELECT COUNT(*) FROM players;", [], |row| row.get(0))?;

		Ok(count)
	}

	pub fn player_exists(&self, id: i64) -> Result<bool> {
		let found = self
			.conn
			.query_row("SELECT 1 FROM players WHERE id = ?1;", [id], |_| Ok(()))
			.optional()?;

		Ok(found.is_some())
	}

	pub fn list_players(&self) -> Result<Vec<Player>> {
		let mut stmt = self
			.conn
			.prepare("SELECT id, name, registered FROM players ORDER BY id;")?;
		let players = stmt
			.query_map([], |row| {
				Ok(Player {
					id: row.get(0)?,
					name: row.get(1)?,
					registered: row.get(2)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(players)
	}

	/// Every registered player with their win and match counts, in id order.
	/// Players who have never played come back with zero counts.
	pub fn list_players_with_aggregates(&self) -> Result<Vec<StandingsRow>> {
		let mut stmt = self.conn.prepare(
			"SELECT p.id,
					p.name,
					(SELECT COUNT(*) FROM matches m WHERE m.winner = p.id),
					(SELECT COUNT(*) FROM matches m WHERE m.winner = p.id OR m.loser = p.id)
			 FROM players p
			 ORDER BY p.id;",
		)?;
		let rows = stmt
			.query_map([], |row| {
				Ok(StandingsRow {
					id: row.get(0)?,
					name: row.get(1)?,
					wins: row.get(2)?,
					matches: row.get(3)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(rows)
	}

	pub fn insert_match(&self, winner: i64, loser: i64, date: NaiveDateTime) -> Result<i64> {
		let mut stmt = self.conn.prepare(
			"INSERT INTO matches (winner, loser, date) 
			 VALUES (?1, ?2, ?3);",
		)?;
		stmt.execute(params![winner, loser, date])?;

		Ok(self.conn.last_insert_rowid())
	}

	pub fn list_matches(&self) -> Result<Vec<MatchResult>> {
		let mut stmt = self
			.conn
			.prepare("SELECT id, winner, loser, date FROM matches ORDER BY id;")?;
		let matches = stmt
			.query_map([], |row| {
				Ok(MatchResult {
					id: row.get(0)?,
					winner: row.get(1)?,
					loser: row.get(2)?,
					date: row.get(3)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(matches)
	}
}

pub fn create_schema(conn: &mut Connection) -> rusqlite::Result<()> {
	let tx = conn.transaction()?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS players (
			id         INTEGER PRIMARY KEY AUTOINCREMENT,
			name       TEXT    NOT NULL,
			registered TEXT    NOT NULL
		);",
		[],
	)?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS matches (
			id     INTEGER PRIMARY KEY AUTOINCREMENT,
			winner INTEGER NOT NULL
						   REFERENCES players (id) ON DELETE CASCADE,
			loser  INTEGER NOT NULL
						   REFERENCES players (id) ON DELETE CASCADE,
			date   TEXT    NOT NULL,
			CHECK (winner <> loser)
		);",
		[],
	)?;

	tx.commit()
}
