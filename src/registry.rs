use tracing::info;

use crate::data::Player;
use crate::db::Store;
use crate::error::Result;

pub struct PlayerRegistry<'a> {
	store: &'a Store,
}

impl<'a> PlayerRegistry<'a> {
	pub fn new(store: &'a Store) -> Self {
		Self { store }
	}

	pub fn register(&self, name: &str) -> Result<i64> {
		let id = self.store.create_player(name)?;

		info!(id, name, "registered player");
		Ok(id)
	}

	pub fn count(&self) -> Result<usize> {
		self.store.count_players()
	}

	pub fn list(&self) -> Result<Vec<Player>> {
		self.store.list_players()
	}

	/// Clears every player and every match.
	pub fn reset_all(&self) -> Result<()> {
		self.store.delete_all_players()
	}

	/// Clears match history only; registrations survive.
	pub fn reset_matches(&self) -> Result<()> {
		self.store.delete_all_matches()
	}
}
