//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		ArithmeticError															
/// Represents the arithmetic operations that have no result.
/// 
/// Overflow is not an error for a [`Number`](crate::Number), as results grow
/// instead, so the only arithmetic failure is dividing by zero.
/// 
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// The divisor is zero.
	#[error("Attempt to divide by zero")]
	DivisionByZero,
}

//		ConversionError															
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,
	
	/// The incoming value contains a character that is not a digit.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),
	
	/// The incoming value contains a digit that is not valid for the radix.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u8),
	
	/// The incoming floating-point value is NaN or infinite.
	#[error("Value is not finite")]
	NotFinite,
	
	/// The requested radix is not one of 2, 10, or 16.
	#[error("Unsupported radix: {0}")]
	UnsupportedRadix(u32),
	
	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,
	
	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}
