/*!
# Argswitch: Parser.
*/

use crate::{
	Schema,
	SchemaError,
	SwitchError,
	Table,
};
use std::{
	any::{
		Any,
		TypeId,
	},
	collections::BTreeMap,
	ffi::OsString,
	fmt,
	sync::{
		Mutex,
		OnceLock,
		PoisonError,
	},
};



/// # Default Switch Prefix.
pub const DEFAULT_PREFIX: &str = "--";

/// # Shared Parsers.
///
/// The default parsers used by [`parse`] and [`parse_env`], one per schema
/// type, leaked on first use.
static SHARED: Mutex<BTreeMap<TypeId, &'static (dyn Any + Send + Sync)>> = Mutex::new(BTreeMap::new());



/// # Switch Parser.
///
/// A `Parser` populates a [`Schema`] from command line arguments. It owns the
/// switch prefix and the schema's [`Table`], which is built the first time
/// it is needed and reused for every parse thereafter.
///
/// Parsing happens in three stages:
/// * Scan: collect raw values for each recognized switch;
/// * Validate: check required and single-value constraints;
/// * Bind: convert the raw values and populate a fresh default instance;
///
/// Unrecognized tokens are ignored, as is a value-bearing switch at the very
/// end with nothing after it. Any other problem aborts with an error; partial
/// results are never returned.
///
/// Parsers are `Send` and `Sync`, and can be created in `const` contexts, so
/// a single `static` instance can serve an entire program.
///
/// ## Examples
///
/// ```
/// use argswitch::{Fields, Parser, Schema, SwitchError};
///
/// #[derive(Debug, Default)]
/// struct Args { level: u8, quiet: bool }
///
/// impl Schema for Args {
///     fn describe(fields: &mut Fields<Self>) {
///         fields.required("level", |a| &mut a.level).optional("quiet", |a| &mut a.quiet);
///     }
/// }
///
/// static PARSER: Parser<Args> = Parser::new();
///
/// let args = PARSER.parse(["--level", "3", "--quiet"]).unwrap();
/// assert_eq!(args.level, 3);
/// assert!(args.quiet);
///
/// // Level is required.
/// assert!(matches!(PARSER.parse(["--quiet"]), Err(SwitchError::Constraint(_))));
///
/// // And has to be a number.
/// assert!(matches!(PARSER.parse(["--level", "max"]), Err(SwitchError::Conversion(_))));
/// ```
pub struct Parser<S> {
	/// # Switch Prefix.
	prefix: &'static str,

	/// # Lookup Table.
	table: OnceLock<Result<Table<S>, SchemaError>>,
}

impl<S> fmt::Debug for Parser<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Parser")
			.field("prefix", &self.prefix)
			.field("table", &self.table.get())
			.finish()
	}
}

impl<S> Default for Parser<S> {
	#[inline]
	fn default() -> Self { Self::new() }
}

impl<S> Parser<S> {
	#[must_use]
	/// # New.
	///
	/// Create a new parser using the default `--` prefix.
	pub const fn new() -> Self {
		Self {
			prefix: DEFAULT_PREFIX,
			table: OnceLock::new(),
		}
	}

	/// # With Prefix.
	///
	/// Swap out the default `--` switch prefix for something else.
	///
	/// ## Examples
	///
	/// ```
	/// use argswitch::{Fields, Parser, Schema};
	///
	/// #[derive(Default)]
	/// struct Args { out: String }
	///
	/// impl Schema for Args {
	///     fn describe(fields: &mut Fields<Self>) {
	///         fields.required("out", |a| &mut a.out);
	///     }
	/// }
	///
	/// let parser = Parser::<Args>::new().with_prefix("/").unwrap();
	/// assert_eq!(parser.prefix(), "/");
	/// assert_eq!(parser.parse(["/OUT", "file.txt"]).unwrap().out, "file.txt");
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if the prefix is empty.
	pub fn with_prefix(mut self, prefix: &'static str) -> Result<Self, SchemaError> {
		if prefix.is_empty() { Err(SchemaError::EmptyPrefix) }
		else {
			self.prefix = prefix;
			Ok(self)
		}
	}

	#[must_use]
	/// # Prefix.
	pub const fn prefix(&self) -> &'static str { self.prefix }
}

impl<S: Schema> Parser<S> {
	/// # Lookup Table.
	///
	/// Return the schema's lookup table, building it if this is the first
	/// time it has been asked for.
	///
	/// ## Errors
	///
	/// This will return an error if the schema is ill-formed. The result is
	/// cached, so subsequent calls will return the same error.
	pub fn table(&self) -> Result<&Table<S>, SchemaError> {
		self.table.get_or_init(Table::<S>::discover).as_ref().map_err(|e| *e)
	}

	/// # Parse.
	///
	/// Populate a new schema instance from the tokens. The tokens should not
	/// include the program name.
	///
	/// ## Errors
	///
	/// This will return an error if the schema is ill-formed, a required
	/// switch is missing, a single-valued switch is repeated, or a value
	/// cannot be converted to its field's type.
	pub fn parse<I>(&self, tokens: I) -> Result<S, SwitchError>
	where I: IntoIterator, I::Item: AsRef<str> {
		let table = self.table()?;
		let raw = table.scan(self.prefix, tokens);
		table.validate(&raw)?;
		Ok(table.bind(&raw)?)
	}

	/// # Parse (OS Strings).
	///
	/// Same as [`Parser::parse`], but for [`OsString`] tokens, like those
	/// returned by [`std::env::args_os`]. Tokens that aren't valid UTF-8 are
	/// converted lossily.
	///
	/// ## Errors
	///
	/// See [`Parser::parse`].
	pub fn parse_os<I>(&self, tokens: I) -> Result<S, SwitchError>
	where I: IntoIterator<Item=OsString> {
		self.parse(tokens.into_iter().map(os_to_string))
	}

	/// # Parse Environment.
	///
	/// Parse [`std::env::args_os`], skipping the first (program path) entry.
	///
	/// ## Errors
	///
	/// See [`Parser::parse`].
	pub fn parse_env(&self) -> Result<S, SwitchError> {
		self.parse_os(std::env::args_os().skip(1))
	}
}



/// # Parse.
///
/// Parse the tokens with the default-prefixed [`Parser`] for `S`.
///
/// The parser (and its lookup table) is created the first time a given
/// schema type comes through, then reused for every call after that. Callers
/// wanting a custom prefix should keep their own `static` [`Parser`] instead.
///
/// ## Errors
///
/// See [`Parser::parse`].
pub fn parse<S, I>(tokens: I) -> Result<S, SwitchError>
where S: Schema, I: IntoIterator, I::Item: AsRef<str> {
	match shared::<S>() {
		Some(parser) => parser.parse(tokens),
		None => Parser::<S>::new().parse(tokens),
	}
}

/// # Parse Environment.
///
/// Parse [`std::env::args_os`] (minus the program path) with the shared,
/// default-prefixed [`Parser`] for `S`. See [`parse`] for details.
///
/// ## Errors
///
/// See [`Parser::parse`].
pub fn parse_env<S: Schema>() -> Result<S, SwitchError> {
	match shared::<S>() {
		Some(parser) => parser.parse_env(),
		None => Parser::<S>::new().parse_env(),
	}
}



/// # Shared Parser.
///
/// Return the program-wide default parser for `S`, creating it if needed.
fn shared<S: Schema>() -> Option<&'static Parser<S>> {
	let parser = *SHARED.lock()
		.unwrap_or_else(PoisonError::into_inner)
		.entry(TypeId::of::<S>())
		.or_insert_with(|| {
			let leaked: &'static (dyn Any + Send + Sync) = Box::leak(Box::new(Parser::<S>::new()));
			leaked
		});
	parser.downcast_ref()
}



/// # OS String to String.
fn os_to_string(src: OsString) -> String {
	match src.into_string() {
		Ok(s) => s,
		Err(e) => {
			let s = e.to_string_lossy().into_owned();
			log::warn!("Argument {s:?} is not valid UTF-8.");
			s
		},
	}
}
