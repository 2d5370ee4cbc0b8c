use std::io::Write;

use serde::Serialize;

use crate::data::{MatchResult, Pairing, StandingsRow};
use crate::error::Result;

pub fn standings_string(rows: &[StandingsRow]) -> String {
	let mut string = String::from("# Standings\n```");

	for (rank, row) in rows.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) {}/{}",
			rank + 1,
			row.name,
			row.id,
			row.wins,
			row.matches
		));
	}

	string.push_str("\n```\n");
	string
}

pub fn pairings_string(pairings: &[Pairing]) -> String {
	let mut string = String::from("# Pairings\n```");

	for (table, p) in pairings.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) vs {} (#{})",
			table + 1,
			p.name1,
			p.id1,
			p.name2,
			p.id2
		));
	}

	string.push_str("\n```\n");
	string
}

pub fn matches_string(matches: &[MatchResult]) -> String {
	let mut string = String::from("# Matches\n```");

	for m in matches {
		string.push_str(&format!(
			"\n{}: #{} beat #{} on {}",
			m.id,
			m.winner,
			m.loser,
			m.date.format("%Y-%m-%d %H:%M")
		));
	}

	string.push_str("\n```\n");
	string
}

/// Writes any row type as CSV with a header line.
pub fn write_csv<W: Write, T: Serialize>(out: W, rows: &[T]) -> Result<()> {
	let mut wtr = csv::Writer::from_writer(out);
	for row in rows {
		wtr.serialize(row)?;
	}
	wtr.flush()?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rows() -> Vec<StandingsRow> {
		vec![
			StandingsRow { id: 3, name: "Lucy".into(), wins: 2, matches: 2 },
			StandingsRow { id: 1, name: "Reuben".into(), wins: 0, matches: 2 },
		]
	}

	#[test]
	fn standings_text() {
		assert_eq!(
			standings_string(&rows()),
			"# Standings\n```\n1: Lucy (#3) 2/2\n2: Reuben (#1) 0/2\n```\n"
		);
	}

	#[test]
	fn pairings_text() {
		let rows = rows();
		let pairings = vec![Pairing::new(&rows[0], &rows[1])];
		assert_eq!(
			pairings_string(&pairings),
			"# Pairings\n```\n1: Lucy (#3) vs Reuben (#1)\n```\n"
		);
	}

	#[test]
	fn standings_csv() {
		let mut out = Vec::new();
		write_csv(&mut out, &rows()).unwrap();

		assert_eq!(
			String::from_utf8(out).unwrap(),
			"id,name,wins,matches\n3,Lucy,2,2\n1,Reuben,0,2\n"
		);
	}

	#[test]
	fn empty_csv_has_no_header() {
		let mut out = Vec::new();
		write_csv::<_, Pairing>(&mut out, &[]).unwrap();
		assert!(out.is_empty());
	}
}
