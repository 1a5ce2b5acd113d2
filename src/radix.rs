//! Numeral systems supported for text conversion.



//		Modules

#[cfg(test)]
#[path = "tests/radix.rs"]
mod tests;



//		Packages

use crate::errors::ConversionError;
use core::fmt::{Display, Formatter, self};



//		Enums

//		Radix
/// The base used when formatting or parsing a [`Number`](crate::Number).
///
/// Only binary, decimal, and hexadecimal are supported. Binary and hexadecimal
/// text describes the two's-complement bit pattern of the value, whereas
/// decimal text describes the value itself, with a leading `-` when negative.
///
/// Converting any other base from a [`u32`] fails with
/// [`ConversionError::UnsupportedRadix`], so an invalid radix can never reach
/// the formatting or parsing code.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Radix {
	/// Base 2.
	Binary      = 2,

	/// Base 10.
	Decimal     = 10,

	/// Base 16.
	Hexadecimal = 16,
}

//󰭅		Radix
impl Radix {
	//		bits_per_digit
	/// The number of bits each digit represents.
	///
	/// Returns [`None`] for [`Radix::Decimal`], as decimal digits do not map
	/// onto a whole number of bits.
	///
	#[must_use]
	pub const fn bits_per_digit(self) -> Option<u32> {
		match self {
			Self::Binary      => Some(1),
			Self::Decimal     => None,
			Self::Hexadecimal => Some(4),
		}
	}

	//		value
	/// The numeric base.
	#[must_use]
	pub const fn value(self) -> u32 {
		self as u32
	}
}

//󰭅		Display
impl Display for Radix {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.value())
	}
}

//󰭅		From: Radix -> u32
impl From<Radix> for u32 {
	//		from
	fn from(radix: Radix) -> Self {
		radix.value()
	}
}

//󰭅		TryFrom: u32 -> Radix
impl TryFrom<u32> for Radix {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: u32) -> Result<Self, Self::Error> {
		match v {
			2  => Ok(Self::Binary),
			10 => Ok(Self::Decimal),
			16 => Ok(Self::Hexadecimal),
			_  => Err(ConversionError::UnsupportedRadix(v)),
		}
	}
}
