use crate::color::{ColorTable, ColorTableError, Rgb};
use crate::physics::{peak_wavelength, radiance_curve};
use crate::spectrum::WavelengthGrid;
use crate::temperature::Temperature;

/// The immutable inputs shared by every frame. Built once at startup.
#[derive(Debug, Clone)]
pub struct Scene {
	pub grid: WavelengthGrid,
	pub colors: ColorTable,
}

impl Scene {
	#[must_use]
	pub fn new(grid: WavelengthGrid, colors: ColorTable) -> Self {
		Self { grid, colors }
	}
}

/// Everything needed to draw one temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
	pub temperature: Temperature,
	/// W·sr⁻¹·m⁻³, parallel to the scene's wavelength grid.
	pub radiance: Vec<f64>,
	/// Wien peak, meters.
	pub peak_wavelength: f64,
	/// Index of the largest sampled radiance.
	pub peak_index: usize,
	pub max_radiance: f64,
	pub color: Rgb,
}

impl Frame {
	/// Recomputes the whole frame from scratch. Pure: equal inputs give equal frames.
	pub fn compute(scene: &Scene, temperature: Temperature) -> Result<Self, ColorTableError> {
		let color = scene.colors.lookup(temperature)?;
		let radiance = radiance_curve(&scene.grid, temperature);
		let (peak_index, max_radiance) = radiance
			.iter()
			.copied()
			.enumerate()
			.fold((0, f64::NEG_INFINITY), |best, (index, value)| {
				if value > best.1 {
					(index, value)
				} else {
					best
				}
			});
		let peak_wavelength = peak_wavelength(temperature.kelvin_f64());

		tracing::trace!(
			%temperature,
			peak_wavelength,
			peak_index,
			max_radiance,
			?color,
			"computed frame"
		);

		Ok(Self {
			temperature,
			radiance,
			peak_wavelength,
			peak_index,
			max_radiance,
			color,
		})
	}
}

#[cfg(test)]
mod tests {
	use approx::assert_relative_eq;

	use super::*;

	fn scene() -> Scene {
		Scene::new(WavelengthGrid::default(), ColorTable::embedded().unwrap())
	}

	#[test]
	fn computes_default_frame() {
		let scene = scene();
		let frame = Frame::compute(&scene, Temperature::DEFAULT).unwrap();
		assert_eq!(frame.radiance.len(), scene.grid.len());
		assert_relative_eq!(frame.peak_wavelength, 9.66e-7, max_relative = 1e-12);
		assert_relative_eq!(frame.max_radiance, frame.radiance[frame.peak_index]);
	}

	#[test]
	fn sampled_peak_is_near_wien_peak() {
		let scene = scene();
		let frame = Frame::compute(&scene, Temperature::DEFAULT).unwrap();
		let sampled = scene.grid.meters()[frame.peak_index];
		assert!((sampled - frame.peak_wavelength).abs() <= scene.grid.step());
	}

	#[test]
	fn recomputing_is_idempotent() {
		let scene = scene();
		let temperature = Temperature::new(5800).unwrap();
		let first = Frame::compute(&scene, temperature).unwrap();
		let second = Frame::compute(&scene, temperature).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn missing_color_row_is_an_error() {
		let colors = ColorTable::from_reader("temperature,red,green,blue\n2100,1,0.5,0\n".as_bytes()).unwrap();
		let scene = Scene::new(WavelengthGrid::default(), colors);
		assert!(Frame::compute(&scene, Temperature::new(2100).unwrap()).is_ok());
		assert!(matches!(
			Frame::compute(&scene, Temperature::DEFAULT),
			Err(ColorTableError::MissingTemperature { temperature: 3000 })
		));
	}
}
