/*!
# Argswitch: Schemas.

A schema is any `Default` type that registers its switch-bearing fields via
[`Schema::describe`]. The registrations are compiled into a [`Table`], which
is then used to scan, validate, and bind arguments.
*/

use crate::{
	Arity,
	ConstraintError,
	ConversionError,
	FromSwitch,
	Mode,
	RawValues,
	SchemaError,
	Switch,
};
use std::{
	collections::BTreeMap,
	fmt,
};



/// # Field Binder.
///
/// Converts the raw values and writes them into the right field.
type Binder<S> = Box<dyn Fn(&mut S, &[String]) -> Result<(), ConversionError> + Send + Sync>;



/// # Schema.
///
/// Implement this trait for the struct you want populated from the command
/// line. Only the fields registered in [`Schema::describe`] are touched; the
/// rest keep whatever [`Default`] gives them.
///
/// The [`schema`](crate::schema!) macro can write this for you, but doing it
/// by hand is easy enough:
///
/// ```
/// use argswitch::{Fields, Schema};
///
/// #[derive(Debug, Default)]
/// struct Settings {
///     output: String,
///     threads: usize,
///     verbose: bool,
///     paths: Vec<String>,
///     internal: u8, // Not a switch.
/// }
///
/// impl Schema for Settings {
///     fn describe(fields: &mut Fields<Self>) {
///         fields
///             .required("output", |s| &mut s.output)
///             .optional("threads", |s| &mut s.threads)
///             .optional("verbose", |s| &mut s.verbose)
///             .optional("path", |s| &mut s.paths);
///     }
/// }
///
/// let settings: Settings = argswitch::parse([
///     "--output", "out.txt",
///     "--path", "a",
///     "--VERBOSE",
///     "--path", "b",
/// ]).unwrap();
///
/// assert_eq!(settings.output, "out.txt");
/// assert_eq!(settings.threads, 0);
/// assert!(settings.verbose);
/// assert_eq!(settings.paths, ["a", "b"]);
/// ```
pub trait Schema: Default + Sized + 'static {
	/// # Describe Fields.
	///
	/// Register each switch-bearing field with its [`Switch`] descriptor.
	fn describe(fields: &mut Fields<Self>);
}



/// # Field Registry.
///
/// This is handed to [`Schema::describe`] to collect the field registrations.
/// Each field's [`Arity`] is inferred from its type.
pub struct Fields<S> {
	/// # Registered Fields.
	fields: Vec<Field<S>>,
}

impl<S> fmt::Debug for Fields<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.fields.iter()).finish()
	}
}

impl<S: 'static> Fields<S> {
	/// # Register Field.
	///
	/// Associate `switch` with the field returned by `field`.
	pub fn switch<T: FromSwitch + 'static>(&mut self, switch: Switch, field: fn(&mut S) -> &mut T)
	-> &mut Self {
		let name = switch.name();
		self.fields.push(Field {
			switch,
			arity: T::ARITY,
			bind: Box::new(move |dst: &mut S, raw: &[String]|
				T::from_switch(name, raw).map(|v| { *field(dst) = v; })
			),
		});
		self
	}

	/// # Register Required Field.
	pub fn required<T: FromSwitch + 'static>(&mut self, name: &'static str, field: fn(&mut S) -> &mut T)
	-> &mut Self {
		self.switch(Switch::new(name, Mode::Required), field)
	}

	/// # Register Optional Field.
	pub fn optional<T: FromSwitch + 'static>(&mut self, name: &'static str, field: fn(&mut S) -> &mut T)
	-> &mut Self {
		self.switch(Switch::new(name, Mode::Optional), field)
	}
}



/// # Registered Field.
struct Field<S> {
	/// # Descriptor.
	switch: Switch,

	/// # Arity.
	arity: Arity,

	/// # Binder.
	bind: Binder<S>,
}

impl<S> fmt::Debug for Field<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Field")
			.field("switch", &self.switch)
			.field("arity", &self.arity)
			.finish_non_exhaustive()
	}
}



/// # Lookup Table.
///
/// The compiled form of a [`Schema`]: the registered fields in declaration
/// order, plus a case-insensitive name index.
///
/// Tables are immutable once built, and are normally built (once) and owned
/// by a [`Parser`](crate::Parser), but can be used directly if you'd like to
/// run the stages yourself.
///
/// ## Examples
///
/// ```
/// use argswitch::{Arity, Fields, Schema, Table};
///
/// #[derive(Default)]
/// struct Args { name: String, tags: Vec<String> }
///
/// impl Schema for Args {
///     fn describe(fields: &mut Fields<Self>) {
///         fields.required("name", |a| &mut a.name).optional("tag", |a| &mut a.tags);
///     }
/// }
///
/// let table = Table::<Args>::discover().unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get("NAME").map(|(s, _)| s.name()), Some("name"));
/// assert_eq!(table.get("tag").map(|(_, a)| a), Some(Arity::Multi));
///
/// let raw = table.scan("--", ["--name", "Björk", "--tag", "a", "--tag", "b"]);
/// table.validate(&raw).unwrap();
/// let args = table.bind(&raw).unwrap();
/// assert_eq!(args.name, "Björk");
/// assert_eq!(args.tags, ["a", "b"]);
/// ```
pub struct Table<S> {
	/// # Fields (Declaration Order).
	fields: Vec<Field<S>>,

	/// # Index (Lowercase Name, Position).
	index: BTreeMap<Box<str>, usize>,
}

impl<S> fmt::Debug for Table<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Table")
			.field("fields", &self.fields)
			.finish_non_exhaustive()
	}
}

impl<S: Schema> Table<S> {
	/// # Discover.
	///
	/// Collect the schema's registrations and build the lookup table.
	///
	/// ## Errors
	///
	/// This will return an error if a switch name is invalid, or if two
	/// fields share the same name (ignoring ASCII case).
	pub fn discover() -> Result<Self, SchemaError> {
		let mut fields = Fields { fields: Vec::new() };
		S::describe(&mut fields);
		let fields = fields.fields;

		let mut index = BTreeMap::new();
		for (idx, field) in fields.iter().enumerate() {
			let name = field.switch.checked_name()?;
			let key = name.to_ascii_lowercase().into_boxed_str();
			if index.insert(key, idx).is_some() {
				return Err(SchemaError::DuplicateSwitch(name));
			}
		}

		log::debug!(
			"Built switch table for {} with {} switch(es).",
			std::any::type_name::<S>(),
			fields.len(),
		);

		Ok(Self { fields, index })
	}

	/// # Bind.
	///
	/// Create a new default schema instance and populate it from the raw
	/// values. Fields whose switches never appeared keep their defaults.
	///
	/// This does not check constraints; call [`Table::validate`] first.
	///
	/// ## Errors
	///
	/// This will return an error if any raw value cannot be converted to its
	/// field's type.
	pub fn bind(&self, raw: &RawValues) -> Result<S, ConversionError> {
		let mut out = S::default();
		for field in &self.fields {
			if let Some(values) = raw.get(field.switch.name()) {
				(field.bind)(&mut out, values)?;
			}
		}
		Ok(out)
	}
}

impl<S> Table<S> {
	#[must_use]
	/// # Length.
	///
	/// Return the number of registered switches.
	pub fn len(&self) -> usize { self.fields.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.fields.is_empty() }

	#[must_use]
	/// # Get Switch.
	///
	/// Look up a switch by (prefix-less) name, ignoring ASCII case.
	pub fn get(&self, name: &str) -> Option<(Switch, Arity)> {
		self.position(name).map(|idx| {
			let field = &self.fields[idx];
			(field.switch, field.arity)
		})
	}

	/// # Switches.
	///
	/// Iterate over the registered switches in declaration order.
	pub fn switches(&self) -> impl Iterator<Item=(Switch, Arity)> + '_ {
		self.fields.iter().map(|f| (f.switch, f.arity))
	}

	/// # Position.
	pub(crate) fn position(&self, name: &str) -> Option<usize> {
		if name.bytes().any(|b| b.is_ascii_uppercase()) {
			self.index.get(name.to_ascii_lowercase().as_str()).copied()
		}
		else { self.index.get(name).copied() }
	}

	/// # Validate.
	///
	/// Check the raw values against each switch's presence and arity rules.
	/// Switches are checked in declaration order, and the first violation is
	/// returned.
	///
	/// ## Errors
	///
	/// This will return an error if a required switch is missing, or a
	/// single-valued switch was given more than once.
	pub fn validate(&self, raw: &RawValues) -> Result<(), ConstraintError> {
		for field in &self.fields {
			let name = field.switch.name();
			let values = raw.get(name);

			if field.switch.mode().is_required() && values.is_none() {
				return Err(ConstraintError::Missing(name));
			}

			if field.arity == Arity::Single && values.map_or(0, <[String]>::len) > 1 {
				return Err(ConstraintError::Repeated(name));
			}
		}

		Ok(())
	}

	/// # Field Descriptor by Position.
	pub(crate) fn at(&self, idx: usize) -> (Switch, Arity) {
		let field = &self.fields[idx];
		(field.switch, field.arity)
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[derive(Debug, Default, PartialEq)]
	struct Sample {
		string_switch: String,
		int_switch: i32,
		array_switch: Vec<String>,
		boolean_switch: bool,
		untouched: u8,
	}

	impl Schema for Sample {
		fn describe(fields: &mut Fields<Self>) {
			fields
				.required("stringSwitch", |s| &mut s.string_switch)
				.optional("intSwitch", |s| &mut s.int_switch)
				.optional("arraySwitch", |s| &mut s.array_switch)
				.optional("booleanSwitch", |s| &mut s.boolean_switch);
		}
	}

	#[derive(Debug, Default, PartialEq)]
	struct Demanding {
		on: bool,
		tags: Vec<String>,
	}

	impl Schema for Demanding {
		fn describe(fields: &mut Fields<Self>) {
			fields
				.required("on", |s| &mut s.on)
				.required("tag", |s| &mut s.tags);
		}
	}

	#[derive(Debug, Default)]
	struct Dupes {
		a: String,
		b: String,
	}

	impl Schema for Dupes {
		fn describe(fields: &mut Fields<Self>) {
			fields
				.optional("output", |s| &mut s.a)
				.optional("OUTPUT", |s| &mut s.b);
		}
	}

	#[derive(Debug, Default)]
	struct BadName {
		a: String,
	}

	impl Schema for BadName {
		fn describe(fields: &mut Fields<Self>) {
			fields.optional("bad name", |s| &mut s.a);
		}
	}

	/// # Owned Tokens.
	fn tokens(src: &[&str]) -> Vec<String> {
		src.iter().map(|s| (*s).to_owned()).collect()
	}

	#[test]
	fn t_discover() {
		let table = Table::<Sample>::discover().expect("Discovery failed.");
		assert_eq!(table.len(), 4);
		assert!(! table.is_empty());

		// Declaration order is maintained.
		let names: Vec<&str> = table.switches().map(|(s, _)| s.name()).collect();
		assert_eq!(names, ["stringSwitch", "intSwitch", "arraySwitch", "booleanSwitch"]);

		// Arity comes from the types.
		assert_eq!(table.get("stringSwitch").map(|(_, a)| a), Some(Arity::Single));
		assert_eq!(table.get("intSwitch").map(|(_, a)| a), Some(Arity::Single));
		assert_eq!(table.get("arraySwitch").map(|(_, a)| a), Some(Arity::Multi));
		assert_eq!(table.get("booleanSwitch").map(|(_, a)| a), Some(Arity::Flag));

		// Case doesn't matter.
		assert_eq!(
			table.get("STRINGSWITCH").map(|(s, _)| s),
			Some(Switch::required("stringSwitch")),
		);
		assert!(table.get("untouched").is_none());

		// Doing it again should give the same answer.
		let again = Table::<Sample>::discover().expect("Discovery failed.");
		assert!(table.switches().eq(again.switches()));
	}

	#[test]
	fn t_discover_bad() {
		assert_eq!(
			Table::<Dupes>::discover().unwrap_err(),
			SchemaError::DuplicateSwitch("OUTPUT"),
		);
		assert_eq!(
			Table::<BadName>::discover().unwrap_err(),
			SchemaError::InvalidName("bad name"),
		);
	}

	#[test]
	fn t_validate() {
		let table = Table::<Sample>::discover().expect("Discovery failed.");

		// Required is required.
		let raw = table.scan("--", tokens(&["--intSwitch", "1", "--booleanSwitch"]));
		assert_eq!(table.validate(&raw), Err(ConstraintError::Missing("stringSwitch")));

		// Singles are single, even when the values agree.
		let raw = table.scan("--", tokens(&["--stringSwitch", "a", "--stringSwitch", "a"]));
		assert_eq!(table.validate(&raw), Err(ConstraintError::Repeated("stringSwitch")));

		// Multis and flags can repeat all they like.
		let raw = table.scan("--", tokens(&[
			"--stringSwitch", "a",
			"--arraySwitch", "1",
			"--booleanSwitch",
			"--arraySwitch", "2",
			"--booleanSwitch",
		]));
		assert_eq!(table.validate(&raw), Ok(()));

		// Violations are reported in declaration order.
		let raw = table.scan("--", tokens(&["--intSwitch", "1", "--intSwitch", "2"]));
		assert_eq!(table.validate(&raw), Err(ConstraintError::Missing("stringSwitch")));
	}

	#[test]
	fn t_validate_required_multi() {
		let table = Table::<Demanding>::discover().expect("Discovery failed.");
		assert_eq!(table.get("on").map(|(_, a)| a), Some(Arity::Flag));
		assert_eq!(table.get("tag").map(|(_, a)| a), Some(Arity::Multi));

		// One of each is enough.
		let raw = table.scan("--", tokens(&["--on", "--tag", "a"]));
		assert_eq!(table.validate(&raw), Ok(()));
		assert_eq!(
			table.bind(&raw),
			Ok(Demanding { on: true, tags: tokens(&["a"]) }),
		);

		// More than one is fine too.
		let raw = table.scan("--", tokens(&["--tag", "a", "--on", "--tag", "b", "--on"]));
		assert_eq!(table.validate(&raw), Ok(()));
		assert_eq!(
			table.bind(&raw),
			Ok(Demanding { on: true, tags: tokens(&["a", "b"]) }),
		);

		// A required flag has to be there.
		let raw = table.scan("--", tokens(&["--tag", "a"]));
		assert_eq!(table.validate(&raw), Err(ConstraintError::Missing("on")));

		// A trailing multi with no value doesn't count.
		let raw = table.scan("--", tokens(&["--on", "--tag"]));
		assert_eq!(table.validate(&raw), Err(ConstraintError::Missing("tag")));

		// And a value is a value, even if it looks like a switch.
		let raw = table.scan("--", tokens(&["--tag", "--on"]));
		assert_eq!(raw.get("tag").map(<[String]>::to_vec), Some(tokens(&["--on"])));
		assert_eq!(table.validate(&raw), Err(ConstraintError::Missing("on")));
	}

	#[test]
	fn t_bind() {
		let table = Table::<Sample>::discover().expect("Discovery failed.");

		let raw = table.scan("--", tokens(&[
			"--stringSwitch", "v1",
			"--arraySwitch", "a",
			"--arraySwitch", "b",
		]));
		assert_eq!(
			table.bind(&raw),
			Ok(Sample {
				string_switch: "v1".to_owned(),
				array_switch: tokens(&["a", "b"]),
				..Sample::default()
			}),
		);

		// Bad conversions abort.
		let raw = table.scan("--", tokens(&["--stringSwitch", "v1", "--intSwitch", "x"]));
		let err = table.bind(&raw).unwrap_err();
		assert_eq!(err.switch(), "intSwitch");
		assert_eq!(err.value(), "x");
	}
}
