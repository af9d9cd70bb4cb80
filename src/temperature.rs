use std::fmt;
use std::num::NonZeroU32;

macro_rules! const_unwrap {
	($x:expr) => {
		match $x {
			Some(x) => x,
			None => panic!("const unwrap failed"),
		}
	};
}

/// A slider-reachable blackbody temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Temperature {
	/// Kelvins. Must be in `MIN..=MAX` and a multiple of `STEP` away from `MIN` (invariant).
	kelvin: NonZeroU32,
}

impl Temperature {
	pub const MIN: u32 = 2100;
	pub const MAX: u32 = 20_000;
	pub const STEP: u32 = 100;
	pub const DEFAULT: Self = Self {
		kelvin: const_unwrap!(NonZeroU32::new(3000)),
	};

	#[must_use]
	pub fn new(kelvin: u32) -> Option<Self> {
		if (Self::MIN..=Self::MAX).contains(&kelvin) && (kelvin - Self::MIN) % Self::STEP == 0 {
			Some(Self {
				kelvin: kelvin.try_into().ok()?,
			})
		} else {
			None
		}
	}

	#[inline]
	#[must_use]
	pub fn kelvin(self) -> u32 {
		self.kelvin.get()
	}

	#[inline]
	#[must_use]
	pub fn kelvin_f64(self) -> f64 {
		f64::from(self.kelvin())
	}

	/// Moves `steps` notches along the slider, stopping at either end.
	#[must_use]
	pub fn step_by(self, steps: i32) -> Self {
		let notch = i64::from(self.notch()) + i64::from(steps);
		let notch = notch.clamp(0, i64::from(Self::notches()));
		// In range after the clamp.
		Self::from_notch(notch as u32)
	}

	/// Fraction of the way from `MIN` to `MAX`, in `0.0..=1.0`.
	#[must_use]
	pub fn position(self) -> f64 {
		f64::from(self.notch()) / f64::from(Self::notches())
	}

	/// Every slider-reachable temperature, in ascending order.
	pub fn all() -> impl Iterator<Item = Self> + Clone {
		(0..=Self::notches()).map(Self::from_notch)
	}

	fn notch(self) -> u32 {
		(self.kelvin() - Self::MIN) / Self::STEP
	}

	const fn notches() -> u32 {
		(Self::MAX - Self::MIN) / Self::STEP
	}

	fn from_notch(notch: u32) -> Self {
		debug_assert!(notch <= Self::notches());
		Self {
			kelvin: const_unwrap!(NonZeroU32::new(Self::MIN + notch * Self::STEP)),
		}
	}
}

impl Default for Temperature {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl fmt::Display for Temperature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} K", self.kelvin())
	}
}
