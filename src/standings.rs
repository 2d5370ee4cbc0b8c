use tracing::debug;

use crate::data::StandingsRow;
use crate::db::Store;
use crate::error::Result;

/// Derives standings from the recorded matches. Holds no state of its own,
/// so every call reflects the store as it is right now.
pub struct StandingsCalculator<'a> {
	store: &'a Store,
}

impl<'a> StandingsCalculator<'a> {
	pub fn new(store: &'a Store) -> Self {
		Self { store }
	}

	/// One row per registered player, most wins first. Players on equal wins
	/// keep id order.
	pub fn compute_standings(&self) -> Result<Vec<StandingsRow>> {
		let mut rows = self.store.list_players_with_aggregates()?;
		sort_standings(&mut rows);

		debug!(players = rows.len(), "computed standings");
		Ok(rows)
	}
}

pub fn sort_standings(rows: &mut [StandingsRow]) {
	rows.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
}
