//! Closed-form blackbody formulas.
//!
//! All quantities are SI: wavelengths in meters, temperatures in Kelvin,
//! spectral radiance in W·sr⁻¹·m⁻³.

use crate::spectrum::WavelengthGrid;
use crate::temperature::Temperature;

/// Planck constant, J·s.
pub const PLANCK: f64 = 6.626_070_15e-34;
/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Boltzmann constant, J/K.
pub const BOLTZMANN: f64 = 1.380_649e-23;
/// Wien's displacement constant, m·K.
pub const WIEN_DISPLACEMENT: f64 = 2.898e-3;

/// Spectral radiance of a blackbody per Planck's Law.
///
/// Both arguments must be positive. The exponent overflows for very short
/// wavelengths at low temperatures; 10 nm is safe across the slider range.
#[must_use]
pub fn spectral_radiance(wavelength: f64, temperature: f64) -> f64 {
	let numerator = 2.0 * PLANCK * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
	let exponent = PLANCK * SPEED_OF_LIGHT / (wavelength * BOLTZMANN * temperature);
	numerator / (wavelength.powi(5) * exponent.exp_m1())
}

/// Wavelength of peak spectral radiance per Wien's Law, in meters.
#[must_use]
pub fn peak_wavelength(temperature: f64) -> f64 {
	WIEN_DISPLACEMENT / temperature
}

/// Evaluates [`spectral_radiance`] at every sample of `grid`.
/// The result is parallel to the grid.
#[must_use]
pub fn radiance_curve(grid: &WavelengthGrid, temperature: Temperature) -> Vec<f64> {
	let kelvin = temperature.kelvin_f64();
	grid.iter_meters()
		.map(|wavelength| spectral_radiance(wavelength, kelvin))
		.collect()
}
