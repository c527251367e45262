/*!
# Argswitch: Errors.

Each stage of a parse has its own error type so callers can tell a broken
schema from a bad invocation. [`SwitchError`] wraps them all for `?`
convenience.
*/

use thiserror::Error;



#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
/// # Schema Error.
///
/// The schema itself is ill-formed. This is a programming mistake rather than
/// a user one; retrying with different arguments won't help.
pub enum SchemaError {
	/// # Duplicate Switch.
	///
	/// Two fields share a name (ignoring ASCII case).
	#[error("Duplicate switch: {0}")]
	DuplicateSwitch(&'static str),

	/// # Invalid Switch Name.
	#[error("Invalid switch name: {0:?}")]
	InvalidName(&'static str),

	/// # Empty Prefix.
	#[error("The switch prefix cannot be empty.")]
	EmptyPrefix,
}

impl SchemaError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::DuplicateSwitch(_) => "Duplicate switch.",
			Self::InvalidName(_) => "Invalid switch name.",
			Self::EmptyPrefix => "Empty prefix.",
		}
	}

	#[must_use]
	/// # Offending Switch.
	///
	/// Return the name of the switch at fault, if any.
	pub const fn switch(&self) -> Option<&'static str> {
		match *self {
			Self::DuplicateSwitch(s) | Self::InvalidName(s) => Some(s),
			Self::EmptyPrefix => None,
		}
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
/// # Constraint Error.
///
/// The arguments violate a presence or arity rule declared by the schema.
pub enum ConstraintError {
	/// # Missing Required Switch.
	#[error("The {0} switch is required.")]
	Missing(&'static str),

	/// # Single-Value Switch Repeated.
	#[error("The {0} switch can only be specified once.")]
	Repeated(&'static str),
}

impl ConstraintError {
	#[must_use]
	/// # Offending Switch.
	///
	/// Return the (declared) name of the switch that broke the rules.
	pub const fn switch(&self) -> &'static str {
		match *self { Self::Missing(s) | Self::Repeated(s) => s }
	}
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("Invalid value for the {switch} switch: {value:?} is not a valid {expected}.")]
/// # Conversion Error.
///
/// A raw value could not be converted into its field's type.
pub struct ConversionError {
	/// # Switch Name.
	switch: &'static str,

	/// # Raw Value.
	value: String,

	/// # Expected Kind.
	expected: &'static str,
}

impl ConversionError {
	#[must_use]
	/// # New.
	pub fn new<S: Into<String>>(switch: &'static str, value: S, expected: &'static str)
	-> Self {
		Self { switch, value: value.into(), expected }
	}

	#[must_use]
	/// # Switch Name.
	pub const fn switch(&self) -> &'static str { self.switch }

	#[must_use]
	/// # Raw Value.
	pub fn value(&self) -> &str { &self.value }

	#[must_use]
	/// # Expected Kind.
	///
	/// A short description of the type the value was meant to be, like
	/// "integer".
	pub const fn expected(&self) -> &'static str { self.expected }
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Parse Error.
///
/// This is the error returned by [`Parser::parse`](crate::Parser::parse) and
/// friends.
pub enum SwitchError {
	/// # Bad Schema.
	#[error(transparent)]
	Schema(#[from] SchemaError),

	/// # Bad Arguments.
	#[error(transparent)]
	Constraint(#[from] ConstraintError),

	/// # Bad Value.
	#[error(transparent)]
	Conversion(#[from] ConversionError),
}

impl SwitchError {
	#[must_use]
	/// # Switch Name.
	///
	/// Return the name of the switch the error concerns, if any.
	pub const fn switch(&self) -> Option<&'static str> {
		match self {
			Self::Schema(e) => e.switch(),
			Self::Constraint(e) => Some(e.switch()),
			Self::Conversion(e) => Some(e.switch()),
		}
	}
}
