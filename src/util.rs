/// Translates from the f32 range `0.0..=1.0` to the full range of `u8`.
#[must_use]
pub fn f32_to_u8_full(f: f32) -> u8 {
	let scaled = f * (f32::from(u8::MAX) + 1.0);
	// This cast is saturating.
	scaled as u8
}
