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
// We do a lot of conversions between floats and integers and precision is not really important.
#![allow(
	clippy::cast_precision_loss,
	clippy::cast_sign_loss,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::missing_errors_doc,
	clippy::missing_panics_doc
)]
#![forbid(unsafe_code)]

//! Planck blackbody curves driven by a temperature slider.
//!
//! The library is the pure part: the radiance curve, the Wien peak and the
//! color lookup for a [`Temperature`]. Presentation lives in [`plot`] and
//! [`terminal`]; the binary wires them to input events.

pub mod color;
pub mod config;
pub mod frame;
pub mod physics;
pub mod plot;
pub mod spectrum;
pub mod temperature;
pub mod terminal;
mod util;

pub use color::{ColorTable, ColorTableError, Rgb};
pub use frame::{Frame, Scene};
pub use spectrum::WavelengthGrid;
pub use temperature::Temperature;
