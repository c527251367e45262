/*!
# Argswitch: Value Conversion.

Field types decide both how raw strings are converted and how many of them a
switch may bind. Anything without a [`FromSwitch`] implementation simply
can't be registered, so unsupported types are caught at compile time.
*/

use crate::{
	Arity,
	ConversionError,
};
use std::path::PathBuf;



/// # Switch Field Type.
///
/// This trait is implemented for every type a schema field may hold:
/// * `bool` is a [flag](Arity::Flag);
/// * `Vec<T>` is [multi-valued](Arity::Multi) for any [`SwitchScalar`] `T`;
/// * Every [`SwitchScalar`] is [single-valued](Arity::Single);
///
/// Custom single-valued types should implement [`SwitchScalar`] and then
/// forward [`FromSwitch::from_switch`] to [`from_first`].
pub trait FromSwitch: Sized {
	/// # Arity.
	const ARITY: Arity;

	/// # From Raw Values.
	///
	/// Build the value from the raw strings collected for `switch`. The slice
	/// is never empty when called from a parser.
	///
	/// ## Errors
	///
	/// This will return an error if any of the values cannot be converted.
	fn from_switch(switch: &'static str, raw: &[String]) -> Result<Self, ConversionError>;
}

/// # Scalar Switch Value.
///
/// A type that can be built from a single raw string.
pub trait SwitchScalar: Sized {
	/// # Kind.
	///
	/// A short, human-friendly description used in error messages.
	const KIND: &'static str;

	/// # From Raw.
	fn from_raw(raw: &str) -> Option<Self>;
}



impl FromSwitch for bool {
	const ARITY: Arity = Arity::Flag;

	/// # From Raw Values.
	///
	/// Presence is the value.
	fn from_switch(_switch: &'static str, _raw: &[String]) -> Result<Self, ConversionError> {
		Ok(true)
	}
}

impl<T: SwitchScalar> FromSwitch for Vec<T> {
	const ARITY: Arity = Arity::Multi;

	fn from_switch(switch: &'static str, raw: &[String]) -> Result<Self, ConversionError> {
		raw.iter()
			.map(|v| T::from_raw(v).ok_or_else(|| ConversionError::new(switch, v.as_str(), T::KIND)))
			.collect()
	}
}

/// # Convert First Value.
///
/// Convert the first raw value of a single-valued switch. (Repeats are
/// rejected before binding ever happens.)
///
/// ## Errors
///
/// This will return an error if the value cannot be converted or is missing
/// altogether.
pub fn from_first<T: SwitchScalar>(switch: &'static str, raw: &[String])
-> Result<T, ConversionError> {
	let first = raw.first().map_or("", String::as_str);
	T::from_raw(first).ok_or_else(|| ConversionError::new(switch, first, T::KIND))
}



/// # Helper: Scalar Implementations.
macro_rules! scalar {
	($($ty:ty => $kind:literal),+ $(,)?) => ($(
		impl SwitchScalar for $ty {
			const KIND: &'static str = $kind;

			#[inline]
			fn from_raw(raw: &str) -> Option<Self> { raw.parse().ok() }
		}

		impl FromSwitch for $ty {
			const ARITY: Arity = Arity::Single;

			#[inline]
			fn from_switch(switch: &'static str, raw: &[String])
			-> Result<Self, ConversionError> {
				from_first(switch, raw)
			}
		}
	)+);
}

scalar!(
	String => "string",
	PathBuf => "path",
	char => "character",
	f32 => "number",
	f64 => "number",
	i8 => "integer",
	i16 => "integer",
	i32 => "integer",
	i64 => "integer",
	i128 => "integer",
	isize => "integer",
	u8 => "unsigned integer",
	u16 => "unsigned integer",
	u32 => "unsigned integer",
	u64 => "unsigned integer",
	u128 => "unsigned integer",
	usize => "unsigned integer",
);
