use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("could not open database at {}", path.display())]
	Connection {
		path: PathBuf,
		#[source]
		source: rusqlite::Error,
	},

	#[error("no player with id {0} is registered")]
	Referential(i64),

	#[error("player {0} cannot be both winner and loser of a match")]
	SelfMatch(i64),

	#[error("cannot pair an odd number of players ({0})")]
	OddPlayerCount(usize),

	#[error(transparent)]
	Storage(#[from] rusqlite::Error),

	#[error(transparent)]
	Csv(#[from] csv::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}
