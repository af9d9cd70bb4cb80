use colored::{ColoredString, Colorize};

use crate::color::Rgb;
use crate::frame::Frame;
use crate::spectrum::NANOMETER;

const SLIDER_WIDTH: usize = 40;

/// One-line summary with a 24-bit color swatch, followed by a text slider.
#[must_use]
pub fn describe(frame: &Frame) -> String {
	format!(
		"{swatch} {kelvin:>5} K  peak {peak:7.1} nm  max {max:.3e} W/(sr·m³)  {hex}\n{slider}",
		swatch = swatch(frame.color),
		kelvin = frame.temperature.kelvin(),
		peak = frame.peak_wavelength / NANOMETER,
		max = frame.max_radiance,
		hex = frame.color.to_hex(),
		slider = slider(frame.temperature.position()),
	)
}

fn swatch(color: Rgb) -> ColoredString {
	let [r, g, b] = color.to_u8();
	"      ".on_truecolor(r, g, b)
}

/// `[-----o-----]`, with the knob at `position` in `0.0..=1.0`.
fn slider(position: f64) -> String {
	let knob = (position.clamp(0.0, 1.0) * (SLIDER_WIDTH - 1) as f64).round() as usize;
	let track: String = (0..SLIDER_WIDTH)
		.map(|i| if i == knob { 'o' } else { '-' })
		.collect();
	format!("[{track}]")
}
