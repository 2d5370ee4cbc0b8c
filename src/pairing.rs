use tracing::debug;

use crate::data::{Pairing, StandingsRow};
use crate::db::Store;
use crate::error::{Error, Result};
use crate::standings::StandingsCalculator;

pub struct PairingGenerator<'a> {
	standings: StandingsCalculator<'a>,
}

impl<'a> PairingGenerator<'a> {
	pub fn new(store: &'a Store) -> Self {
		Self {
			standings: StandingsCalculator::new(store),
		}
	}

	/// Pairs every player with their neighbour in the current standings.
	pub fn generate_pairings(&self) -> Result<Vec<Pairing>> {
		let rows = self.standings.compute_standings()?;
		let pairings = pair_adjacent(&rows)?;

		debug!(pairings = pairings.len(), "generated pairings");
		Ok(pairings)
	}
}

/// Walks ordered standings two at a time: `(0, 1), (2, 3), ...`.
pub fn pair_adjacent(rows: &[StandingsRow]) -> Result<Vec<Pairing>> {
	if rows.len() % 2 != 0 {
		debug!(players = rows.len(), "refusing to pair an odd number of players");
		return Err(Error::OddPlayerCount(rows.len()));
	}

	Ok(rows
		.chunks_exact(2)
		.map(|pair| Pairing::new(&pair[0], &pair[1]))
		.collect())
}
