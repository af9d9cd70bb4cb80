#![deny(
	absolute_paths_not_starting_with_crate,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	missing_copy_implementations,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms,
	unused_qualifications
)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::mpsc::SyncSender;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use planckview::config::{parse_temperature, FileConfig};
use planckview::plot::{render_svg, PlotStyle};
use planckview::{terminal, ColorTable, Frame, Scene, Temperature, WavelengthGrid};
use signal_hook::consts::signal;
use signal_hook::iterator::Signals;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "planckview")]
#[command(about = "Blackbody radiation curves with a temperature slider")]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Redraw on every slider move read from stdin or signals.
	///
	/// `+`/`-` move one notch, `++`/`--` move ten, a number jumps to that temperature,
	/// an empty line redraws and `q` quits. SIGUSR1 moves up one notch, SIGUSR2 down one.
	Interactive(RenderArgs),
	/// Render a single temperature and exit.
	Render(RenderArgs),
	/// Check that the color table has a row for every slider temperature.
	Check(DataArgs),
}

#[derive(Args)]
struct RenderArgs {
	/// Kelvins, 2100..=20000 in steps of 100 (default 3000).
	#[arg(short, long)]
	temperature: Option<u32>,
	/// SVG file rewritten on every redraw.
	#[arg(short, long)]
	output: Option<PathBuf>,
	#[command(flatten)]
	data: DataArgs,
}

#[derive(Args)]
struct DataArgs {
	/// TOML configuration file.
	#[arg(short, long)]
	config: Option<PathBuf>,
	/// CSV color table (`temperature,red,green,blue`) to use instead of the bundled one.
	#[arg(long)]
	color_table: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
	Step(i32),
	Set(Temperature),
	Redraw,
	Quit,
}

struct App {
	scene: Scene,
	style: PlotStyle,
	output: PathBuf,
}

impl App {
	fn redraw(&self, temperature: Temperature) -> anyhow::Result<()> {
		tracing::debug!(%temperature, "redrawing");
		let frame = Frame::compute(&self.scene, temperature)?;
		let svg = render_svg(&frame, &self.scene, &self.style)?;
		std::fs::write(&self.output, svg)
			.with_context(|| format!("writing plot to {}", self.output.display()))?;
		println!("{}", terminal::describe(&frame));
		Ok(())
	}
}

fn load_file_config(data: &DataArgs) -> anyhow::Result<FileConfig> {
	Ok(match &data.config {
		Some(path) => FileConfig::load(path)?,
		None => FileConfig::default(),
	})
}

/// Loads the table once and checks it against the whole slider range before any redraw.
fn load_color_table(data: &DataArgs, file_config: &FileConfig) -> anyhow::Result<ColorTable> {
	let path = data
		.color_table
		.as_deref()
		.or(file_config.data.color_table.as_deref());
	let table = match path {
		Some(path) => ColorTable::from_path(path)
			.with_context(|| format!("loading color table from {}", path.display()))?,
		None => ColorTable::embedded().context("loading bundled color table")?,
	};
	table
		.verify_coverage(Temperature::all())
		.context("color table does not cover the slider range")?;
	Ok(table)
}

fn setup(args: &RenderArgs) -> anyhow::Result<(App, Temperature)> {
	let file_config = load_file_config(&args.data)?;
	let colors = load_color_table(&args.data, &file_config)?;
	let style = file_config.plot.style()?;
	let output = args
		.output
		.clone()
		.unwrap_or_else(|| file_config.plot.output.clone());
	create_parent_dir(&output)?;
	let initial = match args.temperature.or(file_config.slider.initial) {
		Some(kelvin) => parse_temperature(kelvin)?,
		None => Temperature::DEFAULT,
	};
	tracing::debug!(?style, ?output, %initial, "configured");

	let app = App {
		scene: Scene::new(WavelengthGrid::default(), colors),
		style,
		output,
	};
	Ok((app, initial))
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent)
			.with_context(|| format!("creating output directory {}", parent.display()))?;
	}
	Ok(())
}

/// `None` for input that is not a command.
fn parse_input(line: &str) -> Option<Event> {
	match line.trim() {
		"" => Some(Event::Redraw),
		"+" => Some(Event::Step(1)),
		"-" => Some(Event::Step(-1)),
		"++" => Some(Event::Step(10)),
		"--" => Some(Event::Step(-10)),
		"q" | "quit" => Some(Event::Quit),
		other => {
			let kelvin = other.strip_suffix('K').unwrap_or(other).trim_end();
			kelvin.parse().ok().and_then(Temperature::new).map(Event::Set)
		}
	}
}

/// Forwards slider commands until input ends. End of input does not quit; signals still move
/// the slider after that.
fn read_input(input: impl BufRead, event_send: &SyncSender<Event>) {
	for line in input.lines() {
		let line = match line {
			Ok(line) => line,
			Err(error) => {
				tracing::warn!(%error, "reading input");
				break;
			}
		};
		let Some(event) = parse_input(&line) else {
			tracing::warn!(input = line.trim(), "ignoring input that is not a slider command");
			continue;
		};
		if event_send.send(event).is_err() {
			return;
		}
	}
	tracing::info!("input closed; send SIGUSR1/SIGUSR2 to move the slider");
}

fn signal_handler(mut signals: Signals, event_send: &SyncSender<Event>) {
	for signal in &mut signals {
		let event = match signal {
			signal::SIGUSR1 => Event::Step(1),
			signal::SIGUSR2 => Event::Step(-1),
			_ => continue,
		};
		tracing::trace!(signal, ?event, "got signal");
		if event_send.send(event).is_err() {
			break;
		}
	}
}

/// The slider position after `event`, or `None` when the session ends.
fn apply(temperature: Temperature, event: Event) -> Option<Temperature> {
	match event {
		Event::Step(steps) => Some(temperature.step_by(steps)),
		Event::Set(new) => Some(new),
		Event::Redraw => Some(temperature),
		Event::Quit => None,
	}
}

fn interactive(args: &RenderArgs) -> anyhow::Result<()> {
	let (app, mut temperature) = setup(args)?;
	let signals =
		Signals::new([signal::SIGUSR1, signal::SIGUSR2]).context("installing signal handlers")?;

	let (event_send, event_recv) = std::sync::mpsc::sync_channel::<Event>(4);

	std::thread::spawn({
		let event_send = event_send.clone();
		move || read_input(std::io::stdin().lock(), &event_send)
	});
	std::thread::spawn({
		let event_send = event_send.clone();
		move || signal_handler(signals, &event_send)
	});
	drop(event_send);

	eprintln!(
		"writing {}; enter +, -, ++, --, a temperature in K, or q",
		app.output.display()
	);
	app.redraw(temperature)?;

	// One event is fully handled before the next is received.
	while let Ok(event) = event_recv.recv() {
		let Some(next) = apply(temperature, event) else {
			break;
		};
		temperature = next;
		app.redraw(temperature)?;
	}

	Ok(())
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::builder()
				.with_default_directive(LevelFilter::INFO.into())
				.from_env_lossy(),
		)
		.with_writer(std::io::stderr)
		.init();
	let cli = Cli::parse();

	match cli.command {
		Command::Interactive(args) => interactive(&args),
		Command::Render(args) => {
			let (app, temperature) = setup(&args)?;
			app.redraw(temperature)?;
			eprintln!("wrote {}", app.output.display());
			Ok(())
		}
		Command::Check(data) => {
			let file_config = load_file_config(&data)?;
			let table = load_color_table(&data, &file_config)?;
			println!(
				"color table has {} rows and covers all {} slider temperatures ({}..={} K)",
				table.len(),
				Temperature::all().count(),
				Temperature::MIN,
				Temperature::MAX,
			);
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_slider_commands() {
		assert_eq!(parse_input("+"), Some(Event::Step(1)));
		assert_eq!(parse_input(" -- "), Some(Event::Step(-10)));
		assert_eq!(parse_input(""), Some(Event::Redraw));
		assert_eq!(parse_input("q"), Some(Event::Quit));
		assert_eq!(
			parse_input("5800"),
			Some(Event::Set(Temperature::new(5800).unwrap()))
		);
		assert_eq!(
			parse_input("5800 K"),
			Some(Event::Set(Temperature::new(5800).unwrap()))
		);
	}

	#[test]
	fn rejects_off_slider_input() {
		assert_eq!(parse_input("5850"), None);
		assert_eq!(parse_input("50000"), None);
		assert_eq!(parse_input("warm"), None);
		assert_eq!(parse_input("-3000"), None);
	}

	#[test]
	fn events_move_the_slider() {
		let start = Temperature::DEFAULT;
		assert_eq!(apply(start, Event::Step(1)).map(Temperature::kelvin), Some(3100));
		assert_eq!(apply(start, Event::Step(-10)).map(Temperature::kelvin), Some(2100));
		assert_eq!(apply(start, Event::Redraw), Some(start));
		let hot = Temperature::new(9900).unwrap();
		assert_eq!(apply(start, Event::Set(hot)), Some(hot));
		assert_eq!(apply(start, Event::Quit), None);
	}

	#[test]
	fn stepping_clamps_at_the_ends() {
		let max = Temperature::new(Temperature::MAX).unwrap();
		assert_eq!(apply(max, Event::Step(1)), Some(max));
		assert_eq!(apply(max, Event::Step(10)), Some(max));
		let min = Temperature::new(Temperature::MIN).unwrap();
		assert_eq!(apply(min, Event::Step(-1)), Some(min));
	}

	#[test]
	fn one_event_per_command_line() {
		let (event_send, event_recv) = std::sync::mpsc::sync_channel(16);
		read_input("+\n++\n5850\nwarm\n20000\n\n".as_bytes(), &event_send);
		let events: Vec<_> = event_recv.try_iter().collect();
		assert_eq!(
			events,
			[
				Event::Step(1),
				Event::Step(10),
				Event::Set(Temperature::new(20_000).unwrap()),
				Event::Redraw,
			]
		);
	}

	#[test]
	fn end_of_input_keeps_the_session_open() {
		let (event_send, event_recv) = std::sync::mpsc::sync_channel(4);
		read_input("-\n".as_bytes(), &event_send);
		let events: Vec<_> = event_recv.try_iter().collect();
		assert_eq!(events, [Event::Step(-1)]);
		assert!(!events.contains(&Event::Quit));
	}

	#[test]
	fn cli_parses() {
		use clap::CommandFactory;
		Cli::command().debug_assert();

		let cli = Cli::try_parse_from(["planckview", "render", "-t", "4500", "-o", "out.svg"]).unwrap();
		let Command::Render(args) = cli.command else {
			panic!("expected render");
		};
		assert_eq!(args.temperature, Some(4500));
		assert_eq!(args.output, Some(PathBuf::from("out.svg")));
	}
}
