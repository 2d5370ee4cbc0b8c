use std::io::Read;

use chrono::{NaiveDateTime, Utc};
use tracing::{debug, info};

use crate::data::MatchRecord;
use crate::db::Store;
use crate::error::{Error, Result};

/// Appends match outcomes. Recording the same pair twice is two matches.
pub struct ResultRecorder<'a> {
	store: &'a Store,
}

impl<'a> ResultRecorder<'a> {
	pub fn new(store: &'a Store) -> Self {
		Self { store }
	}

	pub fn record_match(&self, winner: i64, loser: i64) -> Result<i64> {
		self.record_match_at(winner, loser, Utc::now().naive_utc())
	}

	pub fn record_match_at(&self, winner: i64, loser: i64, date: NaiveDateTime) -> Result<i64> {
		let tx = self.store.begin()?;
		let id = self.append(winner, loser, date)?;
		tx.commit()?;

		info!(id, winner, loser, "recorded match");
		Ok(id)
	}

	/// Imports `winner,loser[,date]` rows. Either every row is recorded or none is.
	pub fn import_csv<R: Read>(&self, reader: R) -> Result<usize> {
		let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
		let now = Utc::now().naive_utc();

		let tx = self.store.begin()?;
		let mut count = 0;
		for record in rdr.deserialize() {
			let record: MatchRecord = record?;
			self.append(record.winner, record.loser, record.date.unwrap_or(now))?;
			count += 1;
		}
		tx.commit()?;

		info!(count, "imported matches");
		Ok(count)
	}

	fn append(&self, winner: i64, loser: i64, date: NaiveDateTime) -> Result<i64> {
		if winner == loser {
			debug!(player = winner, "rejected match against self");
			return Err(Error::SelfMatch(winner));
		}
		for id in [winner, loser] {
			if !self.store.player_exists(id)? {
				debug!(player = id, "rejected match with unknown player");
				return Err(Error::Referential(id));
			}
		}

		self.store.insert_match(winner, loser, date)
	}
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;
	use crate::standings::StandingsCalculator;

	fn setup() -> (Store, i64, i64) {
		let store = Store::open_in_memory().unwrap();
		let a = store.create_player("Chandra Nalaar").unwrap();
		let b = store.create_player("Jace Beleren").unwrap();
		(store, a, b)
	}

	#[test]
	fn recording_updates_standings() {
		let (store, a, b) = setup();
		ResultRecorder::new(&store).record_match(a, b).unwrap();

		let rows = StandingsCalculator::new(&store).compute_standings().unwrap();
		assert_eq!((rows[0].id, rows[0].wins, rows[0].matches), (a, 1, 1));
		assert_eq!((rows[1].id, rows[1].wins, rows[1].matches), (b, 0, 1));
	}

	#[test]
	fn rematches_are_recorded_separately() {
		let (store, a, b) = setup();
		let recorder = ResultRecorder::new(&store);
		let first = recorder.record_match(a, b).unwrap();
		let second = recorder.record_match(a, b).unwrap();

		assert_ne!(first, second);
		assert_eq!(store.list_matches().unwrap().len(), 2);
	}

	#[test]
	fn unknown_player_is_referential_error() {
		let (store, a, _) = setup();
		let recorder = ResultRecorder::new(&store);

		assert!(matches!(recorder.record_match(a, 42), Err(Error::Referential(42))));
		assert!(matches!(recorder.record_match(7, a), Err(Error::Referential(7))));
		assert!(store.list_matches().unwrap().is_empty());
	}

	#[test]
	fn self_match_is_rejected() {
		let (store, a, _) = setup();
		let err = ResultRecorder::new(&store).record_match(a, a).unwrap_err();

		assert!(matches!(err, Error::SelfMatch(id) if id == a));
		assert!(store.list_matches().unwrap().is_empty());
	}

	#[test]
	fn keeps_given_date() {
		let (store, a, b) = setup();
		let date = NaiveDate::from_ymd_opt(2024, 2, 3)
			.unwrap()
			.and_hms_opt(18, 30, 0)
			.unwrap();
		ResultRecorder::new(&store).record_match_at(b, a, date).unwrap();

		let matches = store.list_matches().unwrap();
		assert_eq!(matches[0].date, date);
		assert_eq!((matches[0].winner, matches[0].loser), (b, a));
	}

	#[test]
	fn imports_csv() {
		let (store, a, b) = setup();
		let data = format!("winner,loser,date\n{a},{b},2024-02-03T18:30:00\n{b},{a},\n");

		let count = ResultRecorder::new(&store).import_csv(data.as_bytes()).unwrap();
		assert_eq!(count, 2);

		let matches = store.list_matches().unwrap();
		assert_eq!(matches.len(), 2);
		assert_eq!(matches[0].date.to_string(), "2024-02-03 18:30:00");
	}

	#[test]
	fn import_without_date_column() {
		let (store, a, b) = setup();
		let data = format!("winner,loser\n{a},{b}\n");

		let count = ResultRecorder::new(&store).import_csv(data.as_bytes()).unwrap();
		assert_eq!(count, 1);
	}

	#[test]
	fn failed_import_writes_nothing() {
		let (store, a, b) = setup();
		let data = format!("winner,loser\n{a},{b}\n{b},99\n");

		let err = ResultRecorder::new(&store).import_csv(data.as_bytes()).unwrap_err();
		assert!(matches!(err, Error::Referential(99)));
		assert!(store.list_matches().unwrap().is_empty());
	}

	#[test]
	fn malformed_import_is_csv_error() {
		let (store, _, _) = setup();
		let err = ResultRecorder::new(&store)
			.import_csv("winner,loser\nfoo,bar\n".as_bytes())
			.unwrap_err();
		assert!(matches!(err, Error::Csv(_)));
	}
}
