use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about = "Swiss-system tournament pairings", long_about = None)]
pub struct Cli {
	#[arg(
		short,
		long,
		value_name = "FILE",
		env = "SWISS_DATABASE",
		default_value = "tournament.db"
	)]
	pub database: PathBuf,

	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,

	#[arg(short, long, value_enum, default_value_t = Format::Text)]
	pub format: Format,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
	Text,
	Csv,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Register a new player and print their id
	Register { name: String },
	/// Print the number of registered players
	Count,
	/// Record a match result
	Report { winner: i64, loser: i64 },
	/// Import match results from a CSV file with `winner,loser[,date]` columns
	Load {
		#[arg(value_name = "FILE")]
		matches: PathBuf,
	},
	/// Print the current standings
	Standings,
	/// Print pairings for the next round
	Pairings,
	/// Print every recorded match
	Matches,
	/// Remove all match results
	DeleteMatches,
	/// Remove all players and their matches
	DeletePlayers,
}
