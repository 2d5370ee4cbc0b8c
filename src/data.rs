use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
	pub id: i64,
	pub name: String,
	pub registered: NaiveDateTime,
}

/// A single recorded outcome. Never updated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
	pub id: i64,
	pub winner: i64,
	pub loser: i64,
	pub date: NaiveDateTime,
}

/// Per-player aggregate derived from the recorded matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
	pub id: i64,
	pub name: String,
	pub wins: u32,
	pub matches: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
	pub id1: i64,
	pub name1: String,
	pub id2: i64,
	pub name2: String,
}

impl Pairing {
	pub fn new(first: &StandingsRow, second: &StandingsRow) -> Self {
		Self {
			id1: first.id,
			name1: first.name.clone(),
			id2: second.id,
			name2: second.name.clone(),
		}
	}

	pub fn contains(&self, id: i64) -> bool {
		self.id1 == id || self.id2 == id
	}
}

/// One line of a match import file: `winner,loser[,date]`.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRecord {
	pub winner: i64,
	pub loser: i64,
	#[serde(default)]
	pub date: Option<NaiveDateTime>,
}
