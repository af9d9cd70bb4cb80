//! SVG rendering of a [`Frame`].

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::frame::{Frame, Scene};
use crate::spectrum::{NANOMETER, VISIBLE_BANDS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
	pub width: f64,
	pub height: f64,
}

impl Default for PlotStyle {
	fn default() -> Self {
		Self {
			width: 960.0,
			height: 540.0,
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
	#[error("drawing plot")]
	Draw(#[from] DrawingAreaErrorKind<std::io::Error>),
}

const FONT: &str = "sans-serif";
const MARKER: RGBColor = RGBColor(220, 20, 60);
const SWATCH_SIZE: i32 = 60;
const HEADROOM: f64 = 1.05;

/// Renders the whole document from scratch.
pub fn render_svg(frame: &Frame, scene: &Scene, style: &PlotStyle) -> Result<String, PlotError> {
	let mut svg = String::new();
	{
		let size = (style.width as u32, style.height as u32);
		let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
		draw(&root, frame, scene)?;
		draw_swatch(&root, frame, size)?;
		root.present()?;
	}
	Ok(svg)
}

fn draw(
	root: &DrawingArea<SVGBackend<'_>, Shift>,
	frame: &Frame,
	scene: &Scene,
) -> Result<(), PlotError> {
	let x_range = scene.grid.first() / NANOMETER..scene.grid.last() / NANOMETER;
	let y_max = frame.max_radiance * HEADROOM;

	root.fill(&WHITE)?;
	let mut chart = ChartBuilder::on(root)
		.caption(format!("Blackbody radiation at {}", frame.temperature), (FONT, 22))
		.margin(15)
		.x_label_area_size(45)
		.y_label_area_size(85)
		.build_cartesian_2d(x_range.clone(), 0.0..y_max)?;

	chart
		.configure_mesh()
		.disable_mesh()
		.x_desc("Wavelength (nm)")
		.y_desc("Spectral radiance (W·sr⁻¹·m⁻³)")
		.y_label_formatter(&|radiance: &f64| format!("{radiance:.1e}"))
		.draw()?;

	chart.draw_series(VISIBLE_BANDS.iter().map(|band| {
		let [r, g, b] = band.color;
		let start = band.start.clamp(x_range.start, x_range.end);
		let end = band.end.clamp(x_range.start, x_range.end);
		Rectangle::new([(start, 0.0), (end, y_max)], RGBColor(r, g, b).mix(0.25).filled())
	}))?;

	chart.draw_series(LineSeries::new(
		scene.grid.iter_nanometers().zip(frame.radiance.iter().copied()),
		BLACK.stroke_width(2),
	))?;

	let peak_nm = frame.peak_wavelength / NANOMETER;
	if x_range.contains(&peak_nm) {
		chart.draw_series(DashedLineSeries::new(
			vec![(peak_nm, 0.0), (peak_nm, y_max)],
			6,
			4,
			MARKER.stroke_width(2),
		))?;
		chart.draw_series(std::iter::once(
			EmptyElement::at((peak_nm, y_max))
				+ Text::new(
					format!("λmax = {peak_nm:.0} nm"),
					(6, 4),
					(FONT, 14).into_font().color(&MARKER),
				),
		))?;
	}

	Ok(())
}

/// The apparent color, drawn in pixel coordinates at the top right.
fn draw_swatch(
	root: &DrawingArea<SVGBackend<'_>, Shift>,
	frame: &Frame,
	(width, _): (u32, u32),
) -> Result<(), PlotError> {
	let [r, g, b] = frame.color.to_u8();
	let left = width as i32 - SWATCH_SIZE - 40;
	let top = 60;
	let corners = [(left, top), (left + SWATCH_SIZE, top + SWATCH_SIZE)];

	root.draw(&Rectangle::new(corners, RGBColor(r, g, b).filled()))?;
	root.draw(&Rectangle::new(corners, BLACK.stroke_width(1)))?;
	root.draw(&Text::new(
		frame.color.to_hex(),
		(left + 4, top + SWATCH_SIZE + 6),
		(FONT, 14).into_font(),
	))?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::color::ColorTable;
	use crate::spectrum::WavelengthGrid;
	use crate::temperature::Temperature;

	fn render(kelvin: u32) -> String {
		let scene = Scene::new(WavelengthGrid::default(), ColorTable::embedded().unwrap());
		let frame = Frame::compute(&scene, Temperature::new(kelvin).unwrap()).unwrap();
		render_svg(&frame, &scene, &PlotStyle::default()).unwrap()
	}

	fn hex([r, g, b]: [u8; 3]) -> String {
		format!("#{r:02x}{g:02x}{b:02x}")
	}

	#[test]
	fn document_is_complete() {
		let svg = render(3000);
		assert!(svg.contains("<svg"));
		assert!(svg.trim_end().ends_with("</svg>"));
		assert!(svg.contains("Blackbody radiation at 3000 K"));
		assert!(svg.contains("Wavelength (nm)"));
		assert!(svg.contains("Spectral radiance"));
	}

	#[test]
	fn draws_bands_marker_and_swatch() {
		let svg = render(3000).to_lowercase();
		for band in VISIBLE_BANDS {
			assert!(svg.contains(&hex(band.color)), "missing {} band", band.name);
		}
		assert!(svg.contains("λmax = 966 nm"));
		// Several dashes plus the label.
		assert!(svg.matches(&hex([220, 20, 60])).count() > 2);
		let color = ColorTable::embedded().unwrap().lookup(Temperature::DEFAULT).unwrap();
		assert!(svg.contains(&color.to_hex()));
	}

	#[test]
	fn swatch_follows_temperature() {
		let table = ColorTable::embedded().unwrap();
		let hot = table.lookup_kelvin(15_000).unwrap().to_hex();
		assert!(render(15_000).to_lowercase().contains(&hot));
		assert!(!render(3000).to_lowercase().contains(&hot));
	}

	#[test]
	fn redraw_is_identical() {
		assert_eq!(render(12_000), render(12_000));
	}
}
