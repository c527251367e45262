/*!
# Argswitch: Switch Descriptors.
*/

use crate::SchemaError;
use std::fmt;



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Presence Mode.
pub enum Mode {
	/// # Must Appear.
	Required,

	#[default]
	/// # May Appear.
	Optional,
}

impl Mode {
	#[must_use]
	/// # Is Required?
	pub const fn is_required(self) -> bool { matches!(self, Self::Required) }
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Arity.
///
/// How many raw values a switch binds. This is derived from the field's type
/// (see [`FromSwitch`](crate::FromSwitch)) rather than declared.
pub enum Arity {
	/// # Boolean Flag.
	///
	/// The switch takes no value; its presence alone sets the field.
	Flag,

	/// # One Value.
	Single,

	/// # Any Number of Values.
	///
	/// Each occurrence contributes one value, in order.
	Multi,
}

impl Arity {
	#[must_use]
	/// # Takes a Value?
	///
	/// Returns `true` if the switch consumes the token following it.
	pub const fn takes_value(self) -> bool { ! matches!(self, Self::Flag) }
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Switch Descriptor.
///
/// The metadata attached to a single schema field: its (prefix-less) name
/// and whether or not it must be present.
///
/// Names are matched against the command line without regard to ASCII case,
/// so `"stringSwitch"` answers to `--stringswitch`, `--STRINGSWITCH`, etc.
///
/// ## Examples
///
/// ```
/// use argswitch::{Mode, Switch};
///
/// let switch = Switch::required("output");
/// assert_eq!(switch.name(), "output");
/// assert_eq!(switch.mode(), Mode::Required);
///
/// // Optional is the default.
/// assert_eq!(Switch::optional("verbose"), Switch::new("verbose", Mode::default()));
/// ```
pub struct Switch {
	/// # Name.
	name: &'static str,

	/// # Mode.
	mode: Mode,
}

impl fmt::Display for Switch {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

impl Switch {
	#[must_use]
	/// # New.
	pub const fn new(name: &'static str, mode: Mode) -> Self {
		Self { name, mode }
	}

	#[must_use]
	/// # New Required Switch.
	pub const fn required(name: &'static str) -> Self {
		Self::new(name, Mode::Required)
	}

	#[must_use]
	/// # New Optional Switch.
	pub const fn optional(name: &'static str) -> Self {
		Self::new(name, Mode::Optional)
	}

	#[must_use]
	/// # Name.
	pub const fn name(&self) -> &'static str { self.name }

	#[must_use]
	/// # Mode.
	pub const fn mode(&self) -> Mode { self.mode }

	/// # Checked Name.
	///
	/// Names must begin with an ASCII alphanumeric character and may
	/// otherwise only contain ASCII alphanumerics, `-`, and `_`. Anything else
	/// could collide with the prefix or fail to case-fold consistently.
	///
	/// ## Errors
	///
	/// This will return an error if the name is empty or contains invalid
	/// characters.
	pub const fn checked_name(&self) -> Result<&'static str, SchemaError> {
		if valid_name(self.name.as_bytes()) { Ok(self.name) }
		else { Err(SchemaError::InvalidName(self.name)) }
	}
}



/// # Valid Name?
const fn valid_name(bytes: &[u8]) -> bool {
	match bytes {
		[b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', rest @ ..] => valid_suffix(rest),
		_ => false,
	}
}

/// # Valid Name Suffix?
const fn valid_suffix(mut bytes: &[u8]) -> bool {
	while let [b'-' | b'_' | b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', rest @ ..] = bytes {
		bytes = rest;
	}

	bytes.is_empty()
}



#[cfg(test)]
mod test {
	use super::*;
	use std::collections::BTreeSet;

	#[test]
	fn t_valid_name() {
		let first: BTreeSet<char> = ('0'..='9')
			.chain('a'..='z')
			.chain('A'..='Z')
			.collect();
		assert_eq!(first.len(), 26 * 2 + 10);

		let bad: BTreeSet<char> = ['!', '?', '.', '=', 'ö', ' ', '\n'].into_iter().collect();

		for a in first.iter().copied() {
			assert!(valid_name(format!("{a}").as_bytes()));
			assert!(valid_name(format!("{a}-{a}_{a}").as_bytes()));

			// Leading dashes/underscores are no good.
			assert!(! valid_name(format!("-{a}").as_bytes()));
			assert!(! valid_name(format!("_{a}").as_bytes()));

			for c in bad.iter().copied() {
				assert!(! valid_name(format!("{a}{c}").as_bytes()), "Bug: {a}{c:?} shouldn't be valid.");
				assert!(! valid_name(format!("{c}{a}").as_bytes()), "Bug: {c:?}{a} shouldn't be valid.");
			}
		}

		assert!(! valid_name(b""));
		assert!(valid_name(b"stringSwitch"));
	}

	#[test]
	fn t_checked_name() {
		assert_eq!(Switch::optional("arraySwitch").checked_name(), Ok("arraySwitch"));
		assert_eq!(
			Switch::required("--arraySwitch").checked_name(),
			Err(SchemaError::InvalidName("--arraySwitch")),
		);
		assert_eq!(Switch::optional("").checked_name(), Err(SchemaError::InvalidName("")));
	}

	#[test]
	fn t_arity() {
		assert!(! Arity::Flag.takes_value());
		assert!(Arity::Single.takes_value());
		assert!(Arity::Multi.takes_value());
		assert!(Mode::Required.is_required());
		assert!(! Mode::Optional.is_required());
	}
}
