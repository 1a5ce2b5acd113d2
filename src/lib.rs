//! The Flexnum crate provides a variable-width integer whose arithmetic grows
//! the value instead of overflowing.
//!
//! A [`Number`] holds its value as little-endian bytes, read either as an
//! unsigned magnitude or as a two's-complement signed value. Results of
//! arithmetic are at least as wide as the widest operand, and gain bytes only
//! when the value needs them.



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::cast_lossless,
	clippy::cast_precision_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod errors;
mod number;
mod radix;



//		Packages

pub use errors::{ArithmeticError, ConversionError};
pub use number::Number;
pub use radix::Radix;


