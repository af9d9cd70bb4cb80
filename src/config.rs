//! Optional TOML configuration. Command-line flags take precedence.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::plot::PlotStyle;
use crate::temperature::Temperature;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
	#[serde(default)]
	pub plot: PlotConfig,
	#[serde(default)]
	pub slider: SliderConfig,
	#[serde(default)]
	pub data: DataConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotConfig {
	#[serde(default = "default_width")]
	pub width: f64,
	#[serde(default = "default_height")]
	pub height: f64,
	/// Where each redraw is written (default: "blackbody.svg").
	#[serde(default = "default_output")]
	pub output: PathBuf,
}

impl Default for PlotConfig {
	fn default() -> Self {
		Self {
			width: default_width(),
			height: default_height(),
			output: default_output(),
		}
	}
}

fn default_width() -> f64 {
	PlotStyle::default().width
}
fn default_height() -> f64 {
	PlotStyle::default().height
}
fn default_output() -> PathBuf {
	"blackbody.svg".into()
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliderConfig {
	/// Kelvins. Falls back to the slider default when absent.
	pub initial: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
	/// CSV to load instead of the bundled table.
	pub color_table: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("reading config file {path:?}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("parsing config file {path:?}")]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
	#[error(
		"{kelvin} K is not a slider temperature ({}..={} K in steps of {} K)",
		Temperature::MIN,
		Temperature::MAX,
		Temperature::STEP
	)]
	OffSlider { kelvin: u32 },
	#[error("plot size {width}x{height} is too small")]
	PlotSize { width: f64, height: f64 },
}

impl FileConfig {
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_owned(),
			source,
		})?;
		toml::from_str(&content).map_err(|source| ConfigError::Parse {
			path: path.to_owned(),
			source,
		})
	}
}

impl PlotConfig {
	pub fn style(&self) -> Result<PlotStyle, ConfigError> {
		// Room for the margins and the swatch.
		if self.width < 240.0 || self.height < 200.0 || !self.width.is_finite() || !self.height.is_finite() {
			return Err(ConfigError::PlotSize {
				width: self.width,
				height: self.height,
			});
		}
		Ok(PlotStyle {
			width: self.width,
			height: self.height,
		})
	}
}

/// Validates a Kelvin value coming from the user.
pub fn parse_temperature(kelvin: u32) -> Result<Temperature, ConfigError> {
	Temperature::new(kelvin).ok_or(ConfigError::OffSlider { kelvin })
}
