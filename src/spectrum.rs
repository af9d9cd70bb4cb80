/// Meters per nanometer.
pub const NANOMETER: f64 = 1e-9;

/// Ordered, fixed-step wavelength samples. Built once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct WavelengthGrid {
	/// Meters. Invariant: non-empty, strictly increasing, evenly spaced by `step`.
	samples: Box<[f64]>,
	step: f64,
}

impl WavelengthGrid {
	pub const START_NM: u32 = 10;
	pub const END_NM: u32 = 2000;
	pub const STEP_NM: u32 = 5;

	/// Samples `start_nm..=end_nm` every `step_nm`. Returns `None` for an empty or zero-step range.
	#[must_use]
	pub fn new(start_nm: u32, end_nm: u32, step_nm: u32) -> Option<Self> {
		if start_nm == 0 || step_nm == 0 || end_nm < start_nm {
			return None;
		}
		let count = (end_nm - start_nm) / step_nm + 1;
		// Computed from the index rather than accumulated to avoid drift.
		let samples = (0..count)
			.map(|i| f64::from(start_nm + i * step_nm) * NANOMETER)
			.collect();
		Some(Self {
			samples,
			step: f64::from(step_nm) * NANOMETER,
		})
	}

	#[inline]
	#[must_use]
	pub fn len(&self) -> usize {
		self.samples.len()
	}

	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.samples.is_empty()
	}

	/// Distance between neighbouring samples, in meters.
	#[inline]
	#[must_use]
	pub fn step(&self) -> f64 {
		self.step
	}

	#[must_use]
	pub fn meters(&self) -> &[f64] {
		&self.samples
	}

	pub fn iter_meters(&self) -> impl Iterator<Item = f64> + '_ {
		self.samples.iter().copied()
	}

	pub fn iter_nanometers(&self) -> impl Iterator<Item = f64> + '_ {
		self.iter_meters().map(|wavelength| wavelength / NANOMETER)
	}

	#[must_use]
	pub fn first(&self) -> f64 {
		self.samples[0]
	}

	#[must_use]
	pub fn last(&self) -> f64 {
		self.samples[self.samples.len() - 1]
	}
}

impl Default for WavelengthGrid {
	fn default() -> Self {
		Self::new(Self::START_NM, Self::END_NM, Self::STEP_NM)
			.expect("default wavelength range is valid")
	}
}

/// An approximate region of the visible spectrum, used for shaded overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleBand {
	pub name: &'static str,
	/// Nanometers.
	pub start: f64,
	/// Nanometers.
	pub end: f64,
	pub color: [u8; 3],
}

impl VisibleBand {
	#[must_use]
	pub fn contains(&self, wavelength_nm: f64) -> bool {
		(self.start..self.end).contains(&wavelength_nm)
	}
}

#[rustfmt::skip]
pub const VISIBLE_BANDS: &[VisibleBand] = &[
	VisibleBand { name: "violet", start: 380.0, end: 450.0, color: [0x8f, 0x00, 0xff] },
	VisibleBand { name: "blue",   start: 450.0, end: 495.0, color: [0x00, 0x50, 0xff] },
	VisibleBand { name: "green",  start: 495.0, end: 570.0, color: [0x00, 0xc0, 0x00] },
	VisibleBand { name: "yellow", start: 570.0, end: 590.0, color: [0xff, 0xe0, 0x00] },
	VisibleBand { name: "orange", start: 590.0, end: 620.0, color: [0xff, 0x80, 0x00] },
	VisibleBand { name: "red",    start: 620.0, end: 750.0, color: [0xff, 0x00, 0x00] },
];
