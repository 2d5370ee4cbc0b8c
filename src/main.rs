mod cli;

use std::{
	fs::File,
	io::{self, Write},
	process::ExitCode,
};

use clap::Parser;
use cli::{Cli, Commands, Format};
use swiss_pairings::{
	report, PairingGenerator, PlayerRegistry, Result, ResultRecorder, StandingsCalculator, Store,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(io::stderr)
		.init();

	match run(Cli::parse()) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("error: {e}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: Cli) -> Result<()> {
	let store = Store::open(&cli.database)?;
	let buf = execute(&store, cli.command, cli.format)?;

	// The output file is only touched once the command has succeeded.
	let mut out = match cli.output.as_deref() {
		Some(path) => Box::new(File::create(path)?) as Box<dyn Write>,
		None => Box::new(io::stdout()) as Box<dyn Write>,
	};
	out.write_all(&buf)?;
	out.flush()?;

	Ok(())
}

fn execute(store: &Store, command: Commands, format: Format) -> Result<Vec<u8>> {
	let mut out = Vec::new();

	match command {
		Commands::Register { name } => {
			let id = PlayerRegistry::new(store).register(&name)?;
			writeln!(out, "{id}")?;
		}
		Commands::Count => {
			let count = PlayerRegistry::new(store).count()?;
			writeln!(out, "{count}")?;
		}
		Commands::Report { winner, loser } => {
			let id = ResultRecorder::new(store).record_match(winner, loser)?;
			writeln!(out, "{id}")?;
		}
		Commands::Load { matches } => {
			let count = ResultRecorder::new(store).import_csv(File::open(matches)?)?;
			writeln!(out, "{count}")?;
		}
		Commands::Standings => {
			let rows = StandingsCalculator::new(store).compute_standings()?;
			match format {
				Format::Text => out.extend_from_slice(report::standings_string(&rows).as_bytes()),
				Format::Csv => report::write_csv(&mut out, &rows)?,
			}
		}
		Commands::Pairings => {
			let pairings = PairingGenerator::new(store).generate_pairings()?;
			match format {
				Format::Text => out.extend_from_slice(report::pairings_string(&pairings).as_bytes()),
				Format::Csv => report::write_csv(&mut out, &pairings)?,
			}
		}
		Commands::Matches => {
			let matches = store.list_matches()?;
			match format {
				Format::Text => out.extend_from_slice(report::matches_string(&matches).as_bytes()),
				Format::Csv => report::write_csv(&mut out, &matches)?,
			}
		}
		Commands::DeleteMatches => PlayerRegistry::new(store).reset_matches()?,
		Commands::DeletePlayers => PlayerRegistry::new(store).reset_all()?,
	}

	Ok(out)
}
