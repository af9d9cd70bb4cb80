use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::temperature::Temperature;
use crate::util::f32_to_u8_full;

/// Apparent color of a blackbody. Components are in `0.0..=1.0` (invariant).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
	pub red: f32,
	pub green: f32,
	pub blue: f32,
}

impl Rgb {
	#[must_use]
	pub fn new(red: f32, green: f32, blue: f32) -> Option<Self> {
		let unit = 0.0..=1.0;
		if unit.contains(&red) && unit.contains(&green) && unit.contains(&blue) {
			Some(Self { red, green, blue })
		} else {
			None
		}
	}

	#[must_use]
	pub fn to_u8(self) -> [u8; 3] {
		[
			f32_to_u8_full(self.red),
			f32_to_u8_full(self.green),
			f32_to_u8_full(self.blue),
		]
	}

	/// `#rrggbb`.
	#[must_use]
	pub fn to_hex(self) -> String {
		let [r, g, b] = self.to_u8();
		format!("#{r:02x}{g:02x}{b:02x}")
	}
}

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_hex())
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ColorTableError {
	#[error("reading color table")]
	Io(#[from] std::io::Error),
	#[error("parsing color table")]
	Csv(#[from] csv::Error),
	#[error("color table row for {temperature} K has a component outside 0..=1")]
	ComponentOutOfRange { temperature: u32 },
	#[error("color table is not sorted: {temperature} K follows {previous} K")]
	Unsorted { previous: u32, temperature: u32 },
	#[error("color table has more than one row for {temperature} K")]
	Duplicate { temperature: u32 },
	#[error("color table is empty")]
	Empty,
	#[error("color table has no row for {temperature} K")]
	MissingTemperature { temperature: u32 },
}

/// Precomputed white points at 100K intervals from 1000K to 25_100K.
/// From gammastep's colorramp.c.
const EMBEDDED_TABLE: &[u8] = include_bytes!("../data/blackbody_rgb.csv");

/// Read-only mapping from temperature to apparent color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
	/// Invariant: non-empty and strictly ascending by temperature.
	rows: Box<[(u32, Rgb)]>,
}

impl ColorTable {
	/// The bundled dataset.
	pub fn embedded() -> Result<Self, ColorTableError> {
		Self::from_reader(EMBEDDED_TABLE)
	}

	pub fn from_path(path: &Path) -> Result<Self, ColorTableError> {
		tracing::debug!(?path, "loading color table");
		Self::from_reader(File::open(path)?)
	}

	/// Reads CSV with a `temperature,red,green,blue` header.
	pub fn from_reader(reader: impl Read) -> Result<Self, ColorTableError> {
		#[derive(Deserialize)]
		struct Row {
			temperature: u32,
			red: f32,
			green: f32,
			blue: f32,
		}

		let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
		let mut rows: Vec<(u32, Rgb)> = Vec::new();
		for row in reader.deserialize::<Row>() {
			let row = row?;
			let color = Rgb::new(row.red, row.green, row.blue).ok_or(
				ColorTableError::ComponentOutOfRange {
					temperature: row.temperature,
				},
			)?;
			if let Some(&(previous, _)) = rows.last() {
				if previous == row.temperature {
					return Err(ColorTableError::Duplicate {
						temperature: row.temperature,
					});
				}
				if previous > row.temperature {
					return Err(ColorTableError::Unsorted {
						previous,
						temperature: row.temperature,
					});
				}
			}
			rows.push((row.temperature, color));
		}

		if rows.is_empty() {
			return Err(ColorTableError::Empty);
		}
		tracing::debug!(rows = rows.len(), "loaded color table");

		Ok(Self { rows: rows.into() })
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Exact-match lookup. There is no interpolation between rows.
	pub fn lookup(&self, temperature: Temperature) -> Result<Rgb, ColorTableError> {
		self.lookup_kelvin(temperature.kelvin())
	}

	pub fn lookup_kelvin(&self, kelvin: u32) -> Result<Rgb, ColorTableError> {
		self.rows
			.binary_search_by_key(&kelvin, |&(temperature, _)| temperature)
			.map(|index| self.rows[index].1)
			.map_err(|_| ColorTableError::MissingTemperature {
				temperature: kelvin,
			})
	}

	/// Fails on the first temperature with no row.
	pub fn verify_coverage(
		&self,
		temperatures: impl IntoIterator<Item = Temperature>,
	) -> Result<(), ColorTableError> {
		for temperature in temperatures {
			self.lookup(temperature)?;
		}
		Ok(())
	}
}
