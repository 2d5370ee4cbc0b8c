//! Player registration, match results, standings and Swiss-system pairings
//! over a SQLite store.

pub mod data;
pub mod db;
pub mod error;
pub mod pairing;
pub mod recorder;
pub mod registry;
pub mod report;
pub mod standings;

pub use data::{MatchResult, Pairing, Player, StandingsRow};
pub use db::Store;
pub use error::{Error, Result};
pub use pairing::PairingGenerator;
pub use recorder::ResultRecorder;
pub use registry::PlayerRegistry;
pub use standings::StandingsCalculator;
