/*!
# Argswitch: Macros.
*/

#[macro_export]
/// # Declare a Schema.
///
/// This macro declares a struct and implements [`Schema`](crate::Schema) for
/// it in one go. Fields annotated with `#[switch("name")]` become optional
/// switches; `#[switch("name", Required)]` makes them required. Fields without
/// a `#[switch]` annotation are left alone.
///
/// Doc comments are allowed on fields, but other field-level attributes are
/// not. The struct must still implement [`Default`], so don't forget to
/// derive or implement it!
///
/// ## Examples
///
/// ```
/// argswitch::schema! {
///     #[derive(Debug, Default, PartialEq)]
///     /// # App Arguments.
///     pub struct AppArguments {
///         /// # Some Text.
///         #[switch("stringSwitch", Required)]
///         pub string_switch: String,
///
///         #[switch("intSwitch")]
///         pub int_switch: i32,
///
///         #[switch("booleanSwitch", Optional)]
///         pub boolean_switch: bool,
///
///         #[switch("arraySwitch")]
///         pub array_switch: Vec<String>,
///
///         /// # Not a Switch.
///         pub other: u32,
///     }
/// }
///
/// let args: AppArguments = argswitch::parse([
///     "--stringSwitch", "v1",
///     "--intSwitch", "42",
///     "--booleanSwitch",
///     "--arraySwitch", "a",
///     "--arraySwitch", "b",
///     "--other", "5",
/// ]).unwrap();
///
/// assert_eq!(
///     args,
///     AppArguments {
///         string_switch: "v1".to_owned(),
///         int_switch: 42,
///         boolean_switch: true,
///         array_switch: vec!["a".to_owned(), "b".to_owned()],
///         other: 0,
///     },
/// );
/// ```
macro_rules! schema {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$($body:tt)*
		}
	) => {
		$crate::schema!(@field
			$name
			[ $(#[$meta])* $vis struct $name ]
			[]
			[]
			$($body)*
		);
	};

	// Switch field.
	(@field $name:ident $head:tt [$($fields:tt)*] [$($switches:tt)*]
		$(#[doc = $doc:literal])*
		#[switch($switch:literal $(, $mode:ident)?)]
		$(#[doc = $doc2:literal])*
		$fvis:vis $field:ident : $ty:ty
		$(, $($rest:tt)*)?
	) => {
		$crate::schema!(@field
			$name
			$head
			[ $($fields)* $(#[doc = $doc])* $(#[doc = $doc2])* $fvis $field: $ty, ]
			[ $($switches)* ($switch, [$($mode)?], $field) ]
			$($($rest)*)?
		);
	};

	// Regular field.
	(@field $name:ident $head:tt [$($fields:tt)*] [$($switches:tt)*]
		$(#[doc = $doc:literal])*
		$fvis:vis $field:ident : $ty:ty
		$(, $($rest:tt)*)?
	) => {
		$crate::schema!(@field
			$name
			$head
			[ $($fields)* $(#[doc = $doc])* $fvis $field: $ty, ]
			[ $($switches)* ]
			$($($rest)*)?
		);
	};

	// All done!
	(@field $name:ident [$($head:tt)*] [$($fields:tt)*]
		[ $(($switch:literal, [$($mode:ident)?], $field:ident))* ]
	) => {
		$($head)* { $($fields)* }

		impl $crate::Schema for $name {
			fn describe(fields: &mut $crate::Fields<Self>) {
				let _ = fields
					$(
						.switch(
							$crate::Switch::new($switch, $crate::schema!(@mode $($mode)?)),
							|s| &mut s.$field,
						)
					)*;
			}
		}
	};

	(@mode) => { $crate::Mode::Optional };
	(@mode $mode:ident) => { $crate::Mode::$mode };
}
