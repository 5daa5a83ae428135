//! Headless behavior simulator.
//!
//! Loads a character sheet (or the bundled platformer hero), feeds it a
//! scripted list of inputs and prints what the character does each tick.
//!
//! ```text
//! cargo run --example behavior_sim -- --ticks 24 --push 2:jump --walk 12:mirrored
//! cargo run --example behavior_sim -- --sheet hero.json --format json --cancel 6
//! ```

use std::{path::PathBuf, str::FromStr};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use spriteact_rs::prelude::*;

const BUILTIN_SHEET: &str = include_str!("platformer.json");

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	run(cli)
}

#[derive(Parser)]
#[command(name = "behavior_sim")]
#[command(author = "spriteact-rs project")]
#[command(version)]
#[command(about = "Run a character through a scripted sequence of inputs", long_about = None)]
struct Cli {
	/// Character sheet (JSON); the bundled platformer hero when omitted
	#[arg(short, long, value_name = "FILE")]
	sheet: Option<PathBuf>,

	/// Number of ticks to simulate
	#[arg(short, long, value_name = "COUNT", default_value_t = 32)]
	ticks: u64,

	/// Push an action on a tick, e.g. `3:jump` or `3:2`
	#[arg(short, long, value_name = "TICK:ACTION")]
	push: Vec<Scheduled<String>>,

	/// Start walking on a tick, e.g. `5:forward` or `9:mirrored`
	#[arg(short, long, value_name = "TICK:DIRECTION")]
	walk: Vec<Scheduled<String>>,

	/// Cancel every pending action on a tick
	#[arg(short, long, value_name = "TICK")]
	cancel: Vec<u64>,

	/// Output format
	#[arg(short, long, value_enum, default_value_t = Format::Text)]
	format: Format,

	/// Print the loaded sheet and exit
	#[arg(long, default_value_t = false)]
	dump_sheet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
	/// One human readable line per tick
	Text,
	/// One JSON object per tick
	Json,
}

/// A value applied on a given tick, parsed from `TICK:VALUE`.
#[derive(Clone)]
struct Scheduled<T> {
	tick: u64,
	value: T,
}

impl<T: FromStr> FromStr for Scheduled<T>
where
	T::Err: std::fmt::Display,
{
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (tick, value) =
			s.split_once(':').ok_or_else(|| format!("expected TICK:VALUE, got `{s}`"))?;
		let tick = tick.trim().parse().map_err(|err| format!("bad tick `{tick}`: {err}"))?;
		let value = value.trim().parse().map_err(|err| format!("bad value `{value}`: {err}"))?;
		Ok(Self {
			tick,
			value,
		})
	}
}

fn load_sheet(path: Option<&PathBuf>) -> Result<CharacterSheet> {
	match path {
		Some(path) => CharacterSheet::open(path)
			.with_context(|| format!("Failed to load sheet {}", path.display())),
		None => CharacterSheet::from_json_str(BUILTIN_SHEET).context("Bundled sheet is invalid"),
	}
}

fn resolve_action(sheet: &CharacterSheet, name: &str) -> Result<ActionId> {
	if let Some(id) = sheet.action_id(name) {
		return Ok(id);
	}
	name.parse::<i32>().map(ActionId::new).map_err(|_| anyhow!("Unknown action `{name}`"))
}

fn parse_direction(name: &str) -> Result<Direction> {
	match name.to_ascii_lowercase().as_str() {
		"forward" | "right" | "f" => Ok(Direction::Forward),
		"mirrored" | "left" | "m" => Ok(Direction::Mirrored),
		_ => bail!("Unknown direction `{name}`"),
	}
}

fn run(cli: Cli) -> Result<()> {
	let sheet = load_sheet(cli.sheet.as_ref())?;
	if cli.dump_sheet {
		println!("{}", sheet.to_json_string()?);
		return Ok(());
	}

	let pushes = cli
		.push
		.iter()
		.map(|s| -> Result<Scheduled<ActionId>> {
			Ok(Scheduled {
				tick: s.tick,
				value: resolve_action(&sheet, &s.value)?,
			})
		})
		.collect::<Result<Vec<_>>>()?;
	let walks = cli
		.walk
		.iter()
		.map(|s| -> Result<Scheduled<Direction>> {
			Ok(Scheduled {
				tick: s.tick,
				value: parse_direction(&s.value)?,
			})
		})
		.collect::<Result<Vec<_>>>()?;

	let mut hero = sheet.build().context("Sheet describes an invalid character")?;
	info!(
		"Simulating {} ticks with {} action(s), {} scripted input(s)",
		cli.ticks,
		hero.registry().len(),
		pushes.len() + walks.len() + cli.cancel.len()
	);

	for tick in 1..=cli.ticks {
		if cli.cancel.contains(&tick) {
			let cancelled = hero.pop_until_base();
			info!("tick {tick}: cancelled {cancelled} action(s)");
		}
		for walk in walks.iter().filter(|w| w.tick == tick) {
			hero.walk(walk.value);
			if let Some(id) = sheet.action_id("walk") {
				hero.push(id)?;
			}
		}
		for push in pushes.iter().filter(|p| p.tick == tick) {
			match hero.push(push.value) {
				Ok(outcome) => info!("tick {tick}: push {} -> {outcome:?}", push.value),
				Err(err) => warn!("tick {tick}: push {} rejected: {err}", push.value),
			}
		}

		let report = hero.update();
		match cli.format {
			Format::Text => print_tick(&report, &hero),
			Format::Json => println!("{}", serde_json::to_string(&report)?),
		}
	}

	Ok(())
}

fn print_tick(tick: &Tick, hero: &Character) {
	let frame = tick.frame.map_or_else(|| "-".to_string(), |f| f.to_string());
	let events = if tick.events.is_empty() {
		String::new()
	} else {
		let names: Vec<String> = tick
			.events
			.iter()
			.map(|event| match event {
				ActionEvent::Started(id) => format!("+{id}"),
				ActionEvent::Finished(id) => format!("={id}"),
				ActionEvent::Completed(id) => format!("-{id}"),
			})
			.collect();
		format!("  [{}]", names.join(" "))
	};

	println!(
		"{:>4}  {:<6} frame {:>3} (#{})  pos {:<12} vel {:<10} {}{}{}",
		tick.tick,
		tick.action.to_string(),
		frame,
		tick.frame_index,
		tick.position.to_string(),
		tick.velocity.to_string(),
		hero.direction(),
		if hero.is_mirrored() {
			"*"
		} else {
			""
		},
		events
	);
}
