/*!
# Argswitch: Token Scanning.
*/

use crate::{
	Arity,
	Table,
};
use std::collections::BTreeMap;



/// # Flag Value.
///
/// The value recorded for a flag that was present.
const FLAG_VALUE: &str = "true";



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Raw Values.
///
/// This holds the unconverted values collected for each switch during a
/// single scan, keyed by the switch's declared name.
///
/// Values are kept in the order they were encountered. Flags hold a single
/// `"true"` no matter how many times they appeared.
pub struct RawValues {
	/// # Values by Switch.
	values: BTreeMap<&'static str, Vec<String>>,
}

impl RawValues {
	#[must_use]
	/// # Get Values.
	///
	/// Return the values collected for the switch, if it was present at all.
	/// The name must be given as declared (not case-folded).
	pub fn get(&self, name: &str) -> Option<&[String]> {
		self.values.get(name).map(Vec::as_slice)
	}

	#[must_use]
	/// # Contains Switch?
	pub fn contains(&self, name: &str) -> bool { self.values.contains_key(name) }

	#[must_use]
	/// # Length.
	///
	/// Return the number of distinct switches present.
	pub fn len(&self) -> usize { self.values.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.values.is_empty() }

	/// # Iterate.
	///
	/// Iterate over the switches and their values, ordered by declared name.
	pub fn iter(&self) -> impl Iterator<Item=(&'static str, &[String])> + '_ {
		self.values.iter().map(|(k, v)| (*k, v.as_slice()))
	}

	/// # Record Flag.
	fn flag(&mut self, name: &'static str) {
		self.values.entry(name).or_insert_with(|| vec![FLAG_VALUE.to_owned()]);
	}

	/// # Record Value.
	fn push(&mut self, name: &'static str, value: String) {
		self.values.entry(name).or_default().push(value);
	}
}



impl<S> Table<S> {
	/// # Scan.
	///
	/// Walk the tokens left to right, collecting the raw values for each
	/// switch in the table.
	///
	/// A token is treated as a switch if it starts with `prefix`, has
	/// something after it, and that something names a switch in the table
	/// (ignoring ASCII case). Everything else is silently skipped.
	///
	/// Value-bearing switches always take the following token as their value,
	/// even if it looks like a switch. If the last token is a value-bearing
	/// switch, it is dropped and scanning stops.
	///
	/// ## Examples
	///
	/// ```
	/// use argswitch::{Fields, Schema, Table};
	///
	/// #[derive(Default)]
	/// struct Args { x: String, y: bool }
	///
	/// impl Schema for Args {
	///     fn describe(fields: &mut Fields<Self>) {
	///         fields.optional("x", |a| &mut a.x).optional("y", |a| &mut a.y);
	///     }
	/// }
	///
	/// let table = Table::<Args>::discover().unwrap();
	/// let raw = table.scan("--", ["stray", "--x", "--y", "--Y", "--z", "--x"]);
	///
	/// // The first --x took "--y" as its value; the second had nothing left.
	/// assert_eq!(raw.get("x"), Some(&["--y".to_owned()][..]));
	/// assert_eq!(raw.get("y"), Some(&["true".to_owned()][..]));
	/// assert_eq!(raw.len(), 2);
	/// ```
	pub fn scan<I>(&self, prefix: &str, tokens: I) -> RawValues
	where I: IntoIterator, I::Item: AsRef<str> {
		let mut out = RawValues::default();
		let mut iter = tokens.into_iter();

		while let Some(token) = iter.next() {
			let token = token.as_ref();

			// Not a switch.
			let Some(name) = token.strip_prefix(prefix).filter(|n| ! n.is_empty()) else {
				log::trace!("Skipping non-switch token {token:?}.");
				continue;
			};

			// Not one of ours.
			let Some(idx) = self.position(name) else {
				log::trace!("Skipping unknown switch {token:?}.");
				continue;
			};

			let (switch, arity) = self.at(idx);
			match arity {
				Arity::Flag => out.flag(switch.name()),
				Arity::Single | Arity::Multi => {
					let Some(value) = iter.next() else {
						log::debug!("Dropping trailing {token:?}; it has no value.");
						break;
					};
					out.push(switch.name(), value.as_ref().to_owned());
				},
			}
		}

		out
	}
}
