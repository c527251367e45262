/*!
# Argswitch: Debug

This example parses whatever arguments it is given against a small schema and
prints the result. Set `RUST_LOG=trace` to see what gets skipped.

Try something like:
cargo run --example debug -- --name Björk --tag a --TAG b --loud stray --age
*/

use std::process::ExitCode;

argswitch::schema! {
	#[derive(Debug, Default)]
	/// # Arguments.
	struct Args {
		/// # Name.
		#[switch("name", Required)]
		name: String,

		/// # Age.
		#[switch("age")]
		age: u8,

		/// # Tags.
		#[switch("tag")]
		tags: Vec<String>,

		/// # Loud?
		#[switch("loud")]
		loud: bool,
	}
}

fn main() -> ExitCode {
	env_logger::Builder::from_default_env()
		.format_timestamp(None)
		.init();

	match argswitch::parse_env::<Args>() {
		Ok(args) => {
			println!("\x1b[2mPARSED:\x1b[0m");
			println!("{args:#?}");
			ExitCode::SUCCESS
		},
		Err(e) => {
			eprintln!("\x1b[1;91mError:\x1b[0m {e}");
			ExitCode::FAILURE
		},
	}
}
