/*!
# Argswitch

This crate provides a small, declarative CLI switch parser. Describe your
arguments as a plain struct, tell it which fields answer to which switches,
and let [`Parser`] fill it in.

It is deliberately modest: there is no help-screen generation, subcommand
handling, short-key aliasing, or config/env layering. Switches look like
`--name` (the prefix is configurable), match without regard to ASCII case,
and take their value, if any, from the token immediately following.

What a field expects is decided by its type:
* `bool` fields are flags; if the switch is present, the field is `true`;
* `Vec<T>` fields take one value per occurrence, in order;
* Everything else (`String`, `PathBuf`, integers, etc.) takes exactly one value;

Required switches must be present, and single-value switches may only appear
once. Anything else (unrecognized switches, stray values, a trailing switch
missing its value) is quietly ignored.



## Example

```
use argswitch::{ConstraintError, SwitchError};

argswitch::schema! {
    #[derive(Debug, Default)]
    /// # Configuration.
    struct Settings {
        #[switch("output", Required)]
        output: String,

        #[switch("threads")]
        threads: usize,

        #[switch("verbose")]
        verbose: bool,

        #[switch("path")]
        paths: Vec<std::path::PathBuf>,
    }
}

let settings: Settings = argswitch::parse([
    "--output", "out.txt",
    "--threads", "4",
    "--Verbose",
    "--path", "/foo/bar",
    "--path", "/bar/baz",
    "--whatever",
]).unwrap();

assert_eq!(settings.output, "out.txt");
assert_eq!(settings.threads, 4);
assert!(settings.verbose);
assert_eq!(settings.paths.len(), 2);

// Forgetting --output is not OK.
let res = argswitch::parse::<Settings, _>(["--threads", "4"]);
assert_eq!(
    res.unwrap_err(),
    SwitchError::Constraint(ConstraintError::Missing("output")),
);

// For real programs, you'll want to parse the actual environment:
// let settings: Settings = argswitch::parse_env()?;
```

Prefer to avoid macros? Implement [`Schema`] by hand instead; it's only a
few lines.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod error;
mod macros;
mod parser;
mod scan;
mod schema;
mod switch;
mod value;

pub use error::{
	ConstraintError,
	ConversionError,
	SchemaError,
	SwitchError,
};
pub use parser::{
	DEFAULT_PREFIX,
	parse,
	parse_env,
	Parser,
};
pub use scan::RawValues;
pub use schema::{
	Fields,
	Schema,
	Table,
};
pub use switch::{
	Arity,
	Mode,
	Switch,
};
pub use value::{
	from_first,
	FromSwitch,
	SwitchScalar,
};
