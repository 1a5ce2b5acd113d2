//! Variable-width integer type.

//	These lint checks are unnecessary in this module because:
//	  1. All indexing is bounded by buffer lengths computed immediately before
//	     the access, usually by the loop that performs it.
//	  2. Using .get() would add unnecessary runtime checks and make the code
//	     more verbose with .unwrap()s.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Buffer lengths are always known"
)]

//	Byte arithmetic with explicit carries is the core of this module, and the
//	widths involved can never approach the limits of usize.
#![allow(clippy::arithmetic_side_effects, reason = "Carries are handled explicitly")]
#![allow(clippy::integer_division,        reason = "Bit positions split into byte and bit offsets")]



//		Modules

#[cfg(test)]
#[path = "tests/number.rs"]
mod tests;



//		Packages

use crate::{
	errors::{ArithmeticError, ConversionError},
	radix::Radix,
};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, UpperHex, self},
	hash::{Hash, Hasher},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Div, Index, Mul, MulAssign, Neg, Rem, Shl, Shr, Sub, SubAssign},
	str::FromStr,
};
use rust_decimal::Decimal;
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, SeqAccess, Visitor},
	ser::SerializeTuple,
};
use serde_json::Error as JsonError;
use smallvec::{SmallVec, smallvec};
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};
use tracing::{debug, trace};



//		Constants

/// Uppercase digits used for binary and hexadecimal output.
const DIGITS: &[u8; 16] = b"0123456789ABCDEF";



//		Macros

//		impl_binary_operator
/// Implements a binary operator for all owned and borrowed operand pairs.
macro_rules! impl_binary_operator {
	($trait:ident, $method:ident, $func:path) => {
		impl $trait for Number {
			type Output = Self;

			fn $method(self, rhs: Self) -> Self::Output {
				$func(&self, &rhs)
			}
		}

		impl $trait<&Number> for Number {
			type Output = Self;

			fn $method(self, rhs: &Number) -> Self::Output {
				$func(&self, rhs)
			}
		}

		impl $trait<Number> for &Number {
			type Output = Number;

			fn $method(self, rhs: Number) -> Self::Output {
				$func(self, &rhs)
			}
		}

		impl $trait for &Number {
			type Output = Number;

			fn $method(self, rhs: Self) -> Self::Output {
				$func(self, rhs)
			}
		}
	};
}

//		impl_assign_operator
/// Implements a compound assignment operator for owned and borrowed operands.
macro_rules! impl_assign_operator {
	($trait:ident, $method:ident, $func:path) => {
		impl $trait for Number {
			fn $method(&mut self, rhs: Self) {
				*self = $func(self, &rhs);
			}
		}

		impl $trait<&Number> for Number {
			fn $method(&mut self, rhs: &Number) {
				*self = $func(self, rhs);
			}
		}
	};
}

//		impl_primitive_conversions
/// Implements conversion and comparison between [`Number`] and the primitive
/// integer types.
///
/// Conversion into a [`Number`] keeps the native width and signedness.
/// Conversion back succeeds whenever the value fits, whatever the width of the
/// buffer.
///
macro_rules! impl_primitive_conversions {
	($($t:ty => $signed:literal),* $(,)?) => {$(
		impl From<$t> for Number {
			fn from(v: $t) -> Self {
				Self::new(v.to_le_bytes(), $signed)
			}
		}

		impl TryFrom<&Number> for $t {
			type Error = ConversionError;

			fn try_from(v: &Number) -> Result<Self, Self::Error> {
				if !$signed && v.is_negative() {
					return Err(ConversionError::ValueIsNegative);
				}
				if v.required_width($signed) > size_of::<$t>() {
					return Err(ConversionError::ValueTooLarge);
				}
				let mut bytes = [0_u8; size_of::<$t>()];
				bytes.copy_from_slice(&v.extended(size_of::<$t>()));
				Ok(<$t>::from_le_bytes(bytes))
			}
		}

		impl TryFrom<Number> for $t {
			type Error = ConversionError;

			fn try_from(v: Number) -> Result<Self, Self::Error> {
				Self::try_from(&v)
			}
		}

		impl PartialEq<$t> for Number {
			fn eq(&self, other: &$t) -> bool {
				Self::compare(self, &Self::from(*other)) == Ordering::Equal
			}
		}

		impl PartialOrd<$t> for Number {
			fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
				Some(Self::compare(self, &Self::from(*other)))
			}
		}
	)*};
}



//		Type aliases

/// Backing storage for a [`Number`]. Values of up to 128 bits, which covers
/// every primitive integer and [`Decimal`], are held inline.
type Buffer = SmallVec<[u8; 16]>;



//		Structs

//		Number
/// A variable-width integer.
///
/// The value is held as a sequence of bytes plus a flag that says how to read
/// them: as a plain unsigned magnitude, or as a two's-complement signed value
/// where the most-significant bit of the last byte is the sign bit. The width
/// of the buffer is decided at runtime and is not part of the type.
///
/// # Internal representation
///
/// Bytes are stored in little-endian order (least significant byte first),
/// matching the layout of Rust's primitive integers. For example, the 16-bit
/// value `0x1234` is stored as `[0x34, 0x12]`.
///
/// # Arithmetic
///
/// Arithmetic never overflows, wraps, or saturates. Every operation returns a
/// new [`Number`] whose buffer is as wide as the widest operand, or wider when
/// the true result needs more room. A result that needs more room than its
/// operands is extended by exactly as many bytes as are required, which for
/// addition, subtraction, and negation is never more than one.
///
/// The result is signed when the widest operand is signed (when both operands
/// are equally wide, when either is signed), and is always signed when the
/// result is negative. A result of zero is always the canonical zero, which
/// has an empty buffer and is unsigned.
///
/// Operands of different widths and signedness can be freely mixed.
///
/// Division by zero is reported by [`Number::divide()`] as an error, and the
/// `/` and `%` operators panic, as with the standard integer types.
///
/// # Comparison
///
/// Equality and ordering compare the numeric values, regardless of the width
/// of the buffers or the signedness flags. This means that a signed `-1`
/// stored as `[0xFF, 0xFF]` is *not* equal to an unsigned `65535` with the
/// same bytes, and is less than it.
///
/// # Conversion
///
/// All primitive integers convert into a [`Number`] losslessly, keeping their
/// native width, so [`From`] is implemented. Conversion back is fallible, so
/// [`TryFrom`] is implemented. Floating-point values and [`Decimal`] are also
/// accepted; see the respective conversions for details.
///
/// # Text
///
/// Values can be rendered and parsed in binary, decimal, and hexadecimal. See
/// [`to_string_radix_padded()`](Number::to_string_radix_padded()) and
/// [`from_str_radix()`](Number::from_str_radix()).
///
#[derive(Clone, Default)]
pub struct Number {
	/// The value, least significant byte first.
	bytes:  Buffer,

	/// Whether the bytes are a two's-complement signed value.
	signed: bool,
}

//󰭅		Number
impl Number {
	//		Constructors

	//		new
	/// Creates a new [`Number`] from bytes.
	///
	/// The bytes and flag are stored exactly as given; no trimming or other
	/// normalisation is applied, so [`byte_size()`](Number::byte_size())
	/// reports the length of `bytes`.
	///
	/// # Parameters
	///
	/// * `bytes`  - The value, least significant byte first.
	/// * `signed` - Whether to read the bytes as a two's-complement signed
	///              value.
	///
	#[must_use]
	pub fn new<B: AsRef<[u8]>>(bytes: B, signed: bool) -> Self {
		Self { bytes: Buffer::from_slice(bytes.as_ref()), signed }
	}

	//		minus_one
	/// The value of `-1`, as a signed single byte.
	#[must_use]
	pub fn minus_one() -> Self {
		Self { bytes: smallvec![0xFF], signed: true }
	}

	//		one
	/// The value of `1`, as a signed single byte.
	#[must_use]
	pub fn one() -> Self {
		Self { bytes: smallvec![0x01], signed: true }
	}

	//		zero
	/// The canonical zero, which has an empty buffer and is unsigned.
	#[must_use]
	pub fn zero() -> Self {
		Self::default()
	}

	//		Public methods

	//		abs
	/// The absolute value.
	///
	/// Negative values become positive and keep their signed flag, growing by
	/// a byte if necessary. Other values are returned unchanged.
	///
	#[must_use]
	pub fn abs(&self) -> Self {
		if self.is_negative() {
			Self::negate(self)
		} else {
			self.clone()
		}
	}

	//		add
	/// Adds two numbers.
	///
	/// Both operands are widened by one byte, which is always enough to hold
	/// the sum, and added byte by byte with carry propagation. The result is
	/// then narrowed back as far as the operands' width allows.
	///
	/// # Parameters
	///
	/// * `lhs` - The first value.
	/// * `rhs` - The value to add to `lhs`.
	///
	#[must_use]
	pub fn add(lhs: &Self, rhs: &Self) -> Self {
		let operand_width = lhs.byte_size().max(rhs.byte_size());
		let width         = operand_width + 1;
		let a             = lhs.extended(width);
		let b             = rhs.extended(width);
		let mut result    = Buffer::with_capacity(width);
		let mut carry     = 0_u8;

		//	Add bytes with carry
		for i in 0..width {
			let (sum1, c1) = a[i].overflowing_add(b[i]);
			let (sum2, c2) = sum1.overflowing_add(carry);
			result.push(sum2);
			carry          = u8::from(c1 || c2);
		}

		Self::from_twos_complement(&result, Self::result_signedness(lhs, rhs), operand_width)
	}

	//		as_slice
	/// Represents the internal value as a slice of bytes, least significant
	/// byte first.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		&self.bytes
	}

	//		byte_size
	/// The width of the buffer, in bytes.
	#[must_use]
	pub fn byte_size(&self) -> usize {
		self.bytes.len()
	}

	//		checked_div
	/// Checked division.
	///
	/// Computes `self / rhs`, returning [`None`] if `rhs` is zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
		Self::divide(self, rhs).ok().map(|(quotient, _)| quotient)
	}

	//		checked_rem
	/// Checked remainder.
	///
	/// Computes `self % rhs`, returning [`None`] if `rhs` is zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
		Self::divide(self, rhs).ok().map(|(_, remainder)| remainder)
	}

	//		compare
	/// Compares two numbers by value.
	///
	/// Negative values sort before non-negative ones. Values of the same sign
	/// are compared by magnitude, with shorter buffers implicitly extended, so
	/// neither width nor signedness flag affects the outcome.
	///
	/// # Parameters
	///
	/// * `lhs` - The first value.
	/// * `rhs` - The second value.
	///
	#[must_use]
	pub fn compare(lhs: &Self, rhs: &Self) -> Ordering {
		match (lhs.is_negative(), rhs.is_negative()) {
			(true,  false) => Ordering::Less,
			(false, true)  => Ordering::Greater,
			(false, false) => compare_magnitudes(&lhs.magnitude(), &rhs.magnitude()),
			(true,  true)  => compare_magnitudes(&rhs.magnitude(), &lhs.magnitude()),
		}
	}

	//		divide
	/// Divides two numbers, returning the quotient and the remainder.
	///
	/// The quotient is truncated toward zero, and the remainder takes the sign
	/// of the dividend, so that `quotient * divisor + remainder == dividend`
	/// and `|remainder| < |divisor|`.
	///
	/// # Parameters
	///
	/// * `dividend` - The value to divide.
	/// * `divisor`  - The value to divide by.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero. No
	/// other input fails.
	///
	pub fn divide(dividend: &Self, divisor: &Self) -> Result<(Self, Self), ArithmeticError> {
		if divisor.is_zero() {
			return Err(ArithmeticError::DivisionByZero);
		}

		let operand_width         = dividend.byte_size().max(divisor.byte_size());
		let signed                = Self::result_signedness(dividend, divisor);
		let (quotient, remainder) = divide_magnitudes(&dividend.magnitude(), &divisor.magnitude());
		let negative_dividend     = dividend.is_negative();

		Ok((
			Self::from_magnitude(negative_dividend != divisor.is_negative(), &quotient,  signed, operand_width),
			Self::from_magnitude(negative_dividend,                          &remainder, signed, operand_width),
		))
	}

	//		from_json
	/// Deserialises a JSON string into a [`Number`].
	///
	/// # Parameters
	///
	/// * `json` - The JSON string to deserialise.
	///
	/// # Errors
	///
	/// If the JSON string is invalid, or the number inside the JSON is invalid,
	/// then an error will be returned.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		from_str_radix
	/// Parses a number from text in the given radix.
	///
	/// For [`Radix::Decimal`], the text is an optional leading `-` followed by
	/// digits. Negative values are signed and other values unsigned, and the
	/// `signed` parameter is ignored.
	///
	/// For [`Radix::Binary`] and [`Radix::Hexadecimal`], the digits describe a
	/// bit pattern occupying as many whole bytes as needed, and `signed`
	/// decides whether to read that pattern as two's complement. For example,
	/// `"FF"` is `-1` when signed and `255` when unsigned. Upper and lower case
	/// hexadecimal digits are both accepted.
	///
	/// No whitespace, separators, or prefixes are accepted.
	///
	/// # Parameters
	///
	/// * `text`   - The text to parse.
	/// * `radix`  - The numeral system of the text.
	/// * `signed` - Whether binary or hexadecimal digits are two's complement.
	///
	/// # Errors
	///
	/// Returns [`ConversionError::EmptyValue`] if there are no digits,
	/// [`ConversionError::InvalidDigit`] for characters that are not digits at
	/// all, and [`ConversionError::InvalidRadix`] for digits beyond the radix.
	///
	pub fn from_str_radix(text: &str, radix: Radix, signed: bool) -> Result<Self, ConversionError> {
		if text.is_empty() {
			return Err(ConversionError::EmptyValue);
		}
		match radix.bits_per_digit() {
			None                 => Self::parse_decimal(text),
			Some(bits_per_digit) => Self::parse_bit_pattern(text, radix, bits_per_digit, signed),
		}
	}

	//		into_vec
	/// Consumes the number, returning its bytes as a [`Vec`].
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.bytes.into_vec()
	}

	//		is_negative
	/// Determines if the value is negative. Unsigned values never are.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.signed && !self.sign()
	}

	//		is_signed
	/// Determines if the bytes are read as a two's-complement signed value.
	#[must_use]
	pub const fn is_signed(&self) -> bool {
		self.signed
	}

	//		is_zero
	/// Determines if the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.bytes.iter().all(|&b| b == 0)
	}

	//		multiply
	/// Multiplies two numbers.
	///
	/// The product is computed in full on the magnitudes, so it is never
	/// truncated, and then given the sign implied by the operands.
	///
	/// # Parameters
	///
	/// * `lhs` - The first value.
	/// * `rhs` - The value to multiply `lhs` by.
	///
	#[must_use]
	pub fn multiply(lhs: &Self, rhs: &Self) -> Self {
		if lhs.is_zero() || rhs.is_zero() {
			return Self::zero();
		}

		let a           = lhs.magnitude();
		let b           = rhs.magnitude();
		let mut product: Buffer = smallvec![0_u8; a.len() + b.len()];

		//	For each byte of lhs, multiply by each byte of rhs
		for (i, &x) in a.iter().enumerate() {
			let mut carry = 0_u16;
			for (j, &y) in b.iter().enumerate() {
				//	255 * 255 + 255 + 255 still fits in a u16
				let prod = u16::from(x) * u16::from(y) + u16::from(product[i + j]) + carry;
				#[expect(clippy::cast_possible_truncation, reason = "Upper bits carried")]
				{ product[i + j] = prod as u8; }
				carry = prod >> 8_i32;
			}
			#[expect(clippy::cast_possible_truncation, reason = "Carry is at most 255")]
			{ product[i + b.len()] = carry as u8; }
		}

		Self::from_magnitude(
			lhs.is_negative() != rhs.is_negative(),
			&product,
			Self::result_signedness(lhs, rhs),
			lhs.byte_size().max(rhs.byte_size()),
		)
	}

	//		negate
	/// Negates a number.
	///
	/// The result is always signed. Negating an unsigned value whose top bit is
	/// set, or the most negative value of a signed width, needs one byte more
	/// than the input. Negating zero gives the canonical zero.
	///
	/// # Parameters
	///
	/// * `value` - The value to negate.
	///
	#[must_use]
	pub fn negate(value: &Self) -> Self {
		let width = value.byte_size() + 1;
		Self::from_twos_complement(&twos_complement(&value.extended(width)), true, value.byte_size())
	}

	//		pow
	/// Raises the number to a power.
	///
	/// Uses exponentiation by squaring. Any value to the power of zero is one.
	///
	/// # Parameters
	///
	/// * `exponent` - The power to raise `self` to.
	///
	#[must_use]
	pub fn pow(&self, exponent: u32) -> Self {
		let mut base   = self.clone();
		let mut exp    = exponent;
		let mut result = None;

		while exp > 0 {
			if exp & 1 == 1 {
				result = Some(match result {
					Some(acc) => Self::multiply(&acc, &base),
					None      => base.clone(),
				});
			}
			exp >>= 1_i32;
			if exp > 0 {
				base = Self::multiply(&base, &base);
			}
		}

		result.unwrap_or_else(Self::one)
	}

	//		power
	/// Raises a number to a power, with a zero exponent giving zero.
	///
	/// This differs from [`pow()`](Number::pow()) only for an exponent of
	/// zero, where it returns zero instead of one. Existing callers depend on
	/// that result, so it is kept here; new code should use
	/// [`pow()`](Number::pow()).
	///
	/// # Parameters
	///
	/// * `base`     - The value to raise.
	/// * `exponent` - The power to raise `base` to.
	///
	#[must_use]
	pub fn power(base: &Self, exponent: u32) -> Self {
		if exponent == 0 {
			return Self::zero();
		}
		base.pow(exponent)
	}

	//		shift_left
	/// Shifts a number left by a number of bits.
	///
	/// This multiplies the value by `2^shift`. The buffer grows to keep every
	/// set bit, so nothing is ever shifted out of the top. Negative values stay
	/// negative.
	///
	/// # Parameters
	///
	/// * `value` - The value to shift.
	/// * `shift` - The number of bits to shift by.
	///
	#[must_use]
	pub fn shift_left(value: &Self, shift: u32) -> Self {
		if shift == 0 {
			return value.clone();
		}
		if value.is_zero() {
			return Self::zero();
		}

		let byte_shift  = (shift / 8) as usize;
		let bit_shift   = shift % 8;
		let magnitude   = value.magnitude();
		let mut shifted: Buffer = smallvec![0_u8; byte_shift + magnitude.len() + 1];

		for (i, &byte) in magnitude.iter().enumerate() {
			//	Main bits stay in the target byte, the rest spill into the next
			shifted[i + byte_shift] |= byte << bit_shift;
			if bit_shift > 0 {
				shifted[i + byte_shift + 1] |= byte >> (8 - bit_shift);
			}
		}

		Self::from_magnitude(value.is_negative(), &shifted, value.signed, value.byte_size())
	}

	//		shift_right
	/// Shifts a number right by a number of bits.
	///
	/// This is a logical shift of the stored bit pattern: the low `shift` bits
	/// are dropped and zeroes enter at the top, so the result is never
	/// negative. Shifting by the full bit width of the buffer or more gives
	/// zero.
	///
	/// # Parameters
	///
	/// * `value` - The value to shift.
	/// * `shift` - The number of bits to shift by.
	///
	#[must_use]
	pub fn shift_right(value: &Self, shift: u32) -> Self {
		if shift == 0 {
			return value.clone();
		}

		let len   = value.byte_size();
		let shift = shift as usize;
		if shift >= len * 8 {
			return Self::zero();
		}

		let byte_shift  = shift / 8;
		let bit_shift   = shift % 8;
		let mut shifted: Buffer = smallvec![0_u8; len - byte_shift];

		for (i, byte) in shifted.iter_mut().enumerate() {
			//	Main bits from the source byte, remaining bits from the next one
			*byte = value.bytes[i + byte_shift] >> bit_shift;
			if bit_shift > 0 && i + byte_shift + 1 < len {
				*byte |= value.bytes[i + byte_shift + 1] << (8 - bit_shift);
			}
		}

		Self::from_magnitude(false, &shifted, value.signed, len)
	}

	//		sign
	/// Reads the sign bit: `true` if the most-significant bit of the last byte
	/// is clear.
	///
	/// This only describes the value when it is signed; see
	/// [`is_negative()`](Number::is_negative()) for a check that accounts for
	/// that. An empty buffer reports `true`.
	///
	#[must_use]
	pub fn sign(&self) -> bool {
		!self.bytes.last().is_some_and(|&b| b & 0x80 != 0)
	}

	//		subtract
	/// Subtracts one number from another.
	///
	/// Both operands are widened by one byte and subtracted byte by byte with
	/// borrow propagation. Subtracting a larger unsigned value from a smaller
	/// one produces a signed, negative result.
	///
	/// # Parameters
	///
	/// * `lhs` - The value to subtract from.
	/// * `rhs` - The value to subtract.
	///
	#[must_use]
	pub fn subtract(lhs: &Self, rhs: &Self) -> Self {
		let operand_width = lhs.byte_size().max(rhs.byte_size());
		let width         = operand_width + 1;
		let a             = lhs.extended(width);
		let b             = rhs.extended(width);
		let mut result    = Buffer::with_capacity(width);
		let mut borrow    = 0_u8;

		//	Subtract bytes with borrow
		for i in 0..width {
			let (diff1, b1) = a[i].overflowing_sub(b[i]);
			let (diff2, b2) = diff1.overflowing_sub(borrow);
			result.push(diff2);
			borrow          = u8::from(b1 || b2);
		}

		Self::from_twos_complement(&result, Self::result_signedness(lhs, rhs), operand_width)
	}

	//		to_json
	/// Serialises the number to a JSON string.
	///
	/// # Errors
	///
	/// If the number cannot be serialised, an error will be returned.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		to_string_radix
	/// Renders the number as text in the given radix, without padding.
	///
	/// # Parameters
	///
	/// * `radix` - The numeral system to use.
	///
	#[must_use]
	pub fn to_string_radix(&self, radix: Radix) -> String {
		self.to_string_radix_padded(radix, 0)
	}

	//		to_string_radix_padded
	/// Renders the number as text in the given radix, with a minimum length.
	///
	/// Decimal output is the value with a leading `-` if negative, padded with
	/// zeroes after the sign to at least `min_length` characters.
	///
	/// Binary and hexadecimal output is the uppercase two's-complement bit
	/// pattern in whole bytes. The value's own encoding is always shown in
	/// full. When `min_length` asks for more, it is first rounded up to whole
	/// bytes, and those bytes are taken from the stored value as far as the
	/// buffer reaches. Anything still missing is filled with `0` characters.
	///
	/// For example, `255` stored in four bytes renders as `"00FF"`, as
	/// `"0000FF"` for a `min_length` of 5, and as `"000000FF"` for 8.
	///
	/// # Parameters
	///
	/// * `radix`      - The numeral system to use.
	/// * `min_length` - The minimum number of characters to produce.
	///
	#[must_use]
	pub fn to_string_radix_padded(&self, radix: Radix, min_length: usize) -> String {
		match radix.bits_per_digit() {
			None                 => self.to_decimal_string(min_length),
			Some(bits_per_digit) => self.to_bit_pattern_string(bits_per_digit, min_length),
		}
	}

	//		to_vec
	/// Copies the bytes into a [`Vec`], least significant byte first.
	#[must_use]
	pub fn to_vec(&self) -> Vec<u8> {
		self.bytes.to_vec()
	}

	//		try_parse
	/// Parses a number from text, with the radix given as an integer.
	///
	/// This is a forgiving wrapper around
	/// [`from_str_radix()`](Number::from_str_radix()) that returns [`None`] for
	/// any failure, including an unsupported radix. Callers that want a zero on
	/// failure can use [`Option::unwrap_or_default()`].
	///
	/// # Parameters
	///
	/// * `text`   - The text to parse.
	/// * `radix`  - The numeral system of the text: 2, 10, or 16.
	/// * `signed` - Whether binary or hexadecimal digits are two's complement.
	///
	#[must_use]
	pub fn try_parse(text: &str, radix: u32, signed: bool) -> Option<Self> {
		match Radix::try_from(radix).and_then(|radix| Self::from_str_radix(text, radix, signed)) {
			Ok(number) => Some(number),
			Err(err)   => {
				debug!(%err, text, radix, "Rejected numeric text");
				None
			},
		}
	}

	//		Private methods

	//		extended
	/// The value as two's complement in exactly `width` bytes.
	///
	/// Signed negative values are extended with `0xFF`, everything else with
	/// zeroes. The caller must make sure the value fits in `width` bytes.
	///
	fn extended(&self, width: usize) -> Buffer {
		let fill        = if self.is_negative() { 0xFF } else { 0x00 };
		let mut result  = self.bytes.iter().copied().take(width).collect::<Buffer>();
		result.resize(width, fill);
		result
	}

	//		from_magnitude
	/// Builds an arithmetic result from a sign and a magnitude.
	///
	/// Applies the result rules: zero becomes the canonical zero, negative
	/// values are signed, and the width is the larger of `operand_width` and
	/// the smallest width that can hold the value.
	///
	/// # Parameters
	///
	/// * `negative`      - Whether the value is negative.
	/// * `magnitude`     - The absolute value, least significant byte first.
	/// * `signed`        - Whether a non-negative result should be signed.
	/// * `operand_width` - The width of the widest operand.
	///
	fn from_magnitude(negative: bool, magnitude: &[u8], signed: bool, operand_width: usize) -> Self {
		let trimmed = canonical_width(magnitude, false);
		if trimmed == 0 {
			return Self::zero();
		}

		let signed     = signed || negative;
		let top        = magnitude[trimmed - 1];
		//	The most negative value of a width needs no extra byte for the sign
		let sign_room  = negative && top == 0x80 && magnitude[..trimmed - 1].iter().all(|&b| b == 0);
		let needed     = if signed && top & 0x80 != 0 && !sign_room { trimmed + 1 } else { trimmed };
		let width      = needed.max(operand_width);
		if operand_width > 0 && width > operand_width {
			trace!(operand_width, width, "Number buffer grew");
		}

		let mut bytes  = magnitude[..trimmed].iter().copied().collect::<Buffer>();
		bytes.resize(width, 0);
		if negative {
			bytes = twos_complement(&bytes);
		}
		Self { bytes, signed }
	}

	//		from_twos_complement
	/// Builds an arithmetic result from a two's-complement buffer that is wide
	/// enough to hold the exact value.
	fn from_twos_complement(bytes: &[u8], signed: bool, operand_width: usize) -> Self {
		if bytes.last().is_some_and(|&b| b & 0x80 != 0) {
			Self::from_magnitude(true, &twos_complement(bytes), signed, operand_width)
		} else {
			Self::from_magnitude(false, bytes, signed, operand_width)
		}
	}

	//		magnitude
	/// The absolute value, least significant byte first, without leading zero
	/// bytes.
	fn magnitude(&self) -> Buffer {
		let mut magnitude = if self.is_negative() {
			twos_complement(&self.bytes)
		} else {
			self.bytes.clone()
		};
		magnitude.truncate(canonical_width(&magnitude, false));
		magnitude
	}

	//		parse_bit_pattern
	/// Parses binary or hexadecimal digits into a bit pattern.
	fn parse_bit_pattern(text: &str, radix: Radix, bits_per_digit: u32, signed: bool) -> Result<Self, ConversionError> {
		let digits     = text.chars().map(|c| parse_digit(c, radix)).collect::<Result<Vec<_>, _>>()?;
		let bits       = bits_per_digit as usize;
		let mut bytes  = smallvec![0_u8; (digits.len() * bits).div_ceil(8)];

		//	Place each digit at its bit offset, counting from the last digit
		for (position, &digit) in digits.iter().rev().enumerate() {
			let bit            = position * bits;
			bytes[bit / 8]    |= digit << (bit % 8);
		}

		Ok(Self { bytes, signed })
	}

	//		parse_decimal
	/// Parses decimal digits with an optional leading `-`.
	fn parse_decimal(text: &str) -> Result<Self, ConversionError> {
		let (digits, negative) = text.strip_prefix('-').map_or((text, false), |rest| (rest, true));
		if digits.is_empty() {
			return Err(ConversionError::EmptyValue);
		}

		let mut magnitude = Buffer::new();
		for c in digits.chars() {
			multiply_add_small(&mut magnitude, 10, parse_digit(c, Radix::Decimal)?);
		}

		Ok(Self::from_magnitude(negative, &magnitude, false, 0))
	}

	//		quotient
	/// The quotient of a division, panicking on a zero divisor.
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn quotient(lhs: &Self, rhs: &Self) -> Self {
		Self::divide(lhs, rhs).expect("Attempt to divide by zero").0
	}

	//		remainder
	/// The remainder of a division, panicking on a zero divisor.
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn remainder(lhs: &Self, rhs: &Self) -> Self {
		Self::divide(lhs, rhs).expect("Attempt to calculate the remainder with a divisor of zero").1
	}

	//		required_width
	/// The smallest width that holds the value under the given signedness.
	///
	/// A negative value always needs its signed width, whatever is requested.
	///
	fn required_width(&self, signed: bool) -> usize {
		if self.is_negative() {
			return canonical_width(&self.bytes, true);
		}
		let width = canonical_width(&self.bytes, false);
		if signed && width > 0 && self.bytes[width - 1] & 0x80 != 0 {
			width + 1
		} else {
			width
		}
	}

	//		result_signedness
	/// Whether a non-negative result of a binary operation is signed.
	///
	/// The widest operand decides; when both are equally wide, the result is
	/// signed if either operand is.
	///
	fn result_signedness(lhs: &Self, rhs: &Self) -> bool {
		match lhs.byte_size().cmp(&rhs.byte_size()) {
			Ordering::Greater => lhs.signed,
			Ordering::Less    => rhs.signed,
			Ordering::Equal   => lhs.signed || rhs.signed,
		}
	}

	//		to_bit_pattern_string
	/// Renders the two's-complement bit pattern in binary or hexadecimal.
	fn to_bit_pattern_string(&self, bits_per_digit: u32, min_length: usize) -> String {
		let digits_per_byte = (8 / bits_per_digit) as usize;
		let natural         = canonical_width(&self.bytes, self.signed).max(1);
		let requested       = min_length.div_ceil(digits_per_byte);
		let byte_count      = requested.max(natural).min(natural.max(self.byte_size()));
		let padding         = requested.saturating_sub(byte_count) * digits_per_byte;
		let mask            = (1_u8 << bits_per_digit) - 1;
		let mut output      = String::with_capacity(padding + byte_count * digits_per_byte);

		output.push_str(&"0".repeat(padding));
		for &byte in self.extended(byte_count).iter().rev() {
			for shift in (0..8_u32).step_by(bits_per_digit as usize).rev() {
				output.push(char::from(DIGITS[usize::from((byte >> shift) & mask)]));
			}
		}
		output
	}

	//		to_decimal_string
	/// Renders the value in decimal, zero-padded after any sign.
	fn to_decimal_string(&self, min_length: usize) -> String {
		let digits     = decimal_digits(self.magnitude());
		let sign       = if self.is_negative() { "-" } else { "" };
		let width      = min_length.saturating_sub(sign.len()).max(digits.len());
		let mut output = String::with_capacity(sign.len() + width);

		output.push_str(sign);
		output.push_str(&"0".repeat(width - digits.len()));
		output.push_str(&digits);
		output
	}
}

//󰭅		Add
impl_binary_operator!(Add, add, Number::add);

//󰭅		AddAssign
impl_assign_operator!(AddAssign, add_assign, Number::add);

//󰭅		Binary
impl Binary for Number {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0b", &self.to_string_radix(Radix::Binary))
	}
}

//󰭅		Debug
impl Debug for Number {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Standard format - Number::<width, signed>(value)
		write!(f, "Number::<{}, {}>({})", self.byte_size(), self.signed, self)?;

		//	For alternate formatting (#), show the byte array
		if f.alternate() {
			write!(f, " [")?;
			for (i, byte) in self.bytes.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{byte:02x}")?;
			}
			write!(f, "]")?;
		}

		Ok(())
	}
}

//󰭅		Deserialize
impl<'de> Deserialize<'de> for Number {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(NumberVisitor)
		} else {
			//	For binary formats, expect the flag and the raw bytes
			deserializer.deserialize_tuple(2, BytesVisitor)
		}
	}
}

//󰭅		Display
impl Display for Number {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "", &decimal_digits(self.magnitude()))
	}
}

//󰭅		Div
impl_binary_operator!(Div, div, Number::quotient);

//󰭅		Eq
impl Eq for Number {}

//󰭅		FromSql
impl<'a> FromSql<'a> for Number {
	//		from_sql
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => Ok(Self::from(i16::from_sql(ty, raw)?)),
			&Type::INT4 => Ok(Self::from(i32::from_sql(ty, raw)?)),
			&Type::INT8 => Ok(Self::from(i64::from_sql(ty, raw)?)),
			&Type::TEXT => Ok(<&str>::from_sql(ty, raw)?.parse::<Self>()?),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for Number: {unknown}"),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
}

//󰭅		FromStr
impl FromStr for Number {
	type Err = ConversionError;

	//		from_str
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_str_radix(s, Radix::Decimal, false)
	}
}

//󰭅		Hash
impl Hash for Number {
	//		hash
	fn hash<H: Hasher>(&self, state: &mut H) {
		//	Must agree with PartialEq, so only the value takes part
		self.is_negative().hash(state);
		self.magnitude().as_slice().hash(state);
	}
}

//󰭅		Index
impl Index<usize> for Number {
	type Output = u8;

	//		index
	fn index(&self, index: usize) -> &Self::Output {
		&self.bytes[index]
	}
}

//󰭅		LowerHex
impl LowerHex for Number {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &self.to_string_radix(Radix::Hexadecimal).to_ascii_lowercase())
	}
}

//󰭅		Mul
impl_binary_operator!(Mul, mul, Number::multiply);

//󰭅		MulAssign
impl_assign_operator!(MulAssign, mul_assign, Number::multiply);

//󰭅		Neg
impl Neg for Number {
	type Output = Self;

	//		neg
	fn neg(self) -> Self::Output {
		Self::negate(&self)
	}
}

//󰭅		Neg<&>
impl Neg for &Number {
	type Output = Number;

	//		neg
	fn neg(self) -> Self::Output {
		Number::negate(self)
	}
}

//󰭅		Ord
impl Ord for Number {
	//		cmp
	fn cmp(&self, other: &Self) -> Ordering {
		Self::compare(self, other)
	}
}

//󰭅		PartialEq
impl PartialEq for Number {
	//		eq
	fn eq(&self, other: &Self) -> bool {
		Self::compare(self, other) == Ordering::Equal
	}
}

//󰭅		PartialOrd
impl PartialOrd for Number {
	//		partial_cmp
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Product
impl Product for Number {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::one(), |acc, x| Self::multiply(&acc, &x))
	}
}

//󰭅		Product<&>
impl<'a> Product<&'a Self> for Number {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::one(), |acc, x| Self::multiply(&acc, x))
	}
}

//󰭅		Rem
impl_binary_operator!(Rem, rem, Number::remainder);

//󰭅		Serialize
impl Serialize for Number {
	//		serialize
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as number if it fits in i64/u64
			if let Ok(v) = i64::try_from(self) {
				return serializer.serialize_i64(v);
			}
			if let Ok(v) = u64::try_from(self) {
				return serializer.serialize_u64(v);
			}
			//	Fall back to string for larger numbers
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, serialise the flag and raw bytes
			let mut tuple = serializer.serialize_tuple(2)?;
			tuple.serialize_element(&self.signed)?;
			tuple.serialize_element(self.bytes.as_slice())?;
			tuple.end()
		}
	}
}

//󰭅		Shl
impl Shl<u32> for Number {
	type Output = Self;

	//		shl
	fn shl(self, rhs: u32) -> Self::Output {
		Self::shift_left(&self, rhs)
	}
}

//󰭅		Shl<&>
impl Shl<u32> for &Number {
	type Output = Number;

	//		shl
	fn shl(self, rhs: u32) -> Self::Output {
		Number::shift_left(self, rhs)
	}
}

//󰭅		Shr
impl Shr<u32> for Number {
	type Output = Self;

	//		shr
	fn shr(self, rhs: u32) -> Self::Output {
		Self::shift_right(&self, rhs)
	}
}

//󰭅		Shr<&>
impl Shr<u32> for &Number {
	type Output = Number;

	//		shr
	fn shr(self, rhs: u32) -> Self::Output {
		Number::shift_right(self, rhs)
	}
}

//󰭅		Sub
impl_binary_operator!(Sub, sub, Number::subtract);

//󰭅		SubAssign
impl_assign_operator!(SubAssign, sub_assign, Number::subtract);

//󰭅		Sum
impl Sum for Number {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::zero(), |acc, x| Self::add(&acc, &x))
	}
}

//󰭅		Sum<&>
impl<'a> Sum<&'a Self> for Number {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::zero(), |acc, x| Self::add(&acc, x))
	}
}

//󰭅		ToSql
impl ToSql for Number {
	//		to_sql
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => i16::try_from(self)?.to_sql(ty, out),
			&Type::INT4 => i32::try_from(self)?.to_sql(ty, out),
			&Type::INT8 => i64::try_from(self)?.to_sql(ty, out),
			&Type::TEXT => self.to_string().to_sql(ty, out),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for Number: {unknown}"),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}

	to_sql_checked!();
}

//󰭅		UpperHex
impl UpperHex for Number {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &self.to_string_radix(Radix::Hexadecimal))
	}
}

//󰭅		From: Decimal -> Number
impl From<Decimal> for Number {
	//		from
	/// Stores the integral part, truncated toward zero, as a signed 16-byte
	/// value.
	fn from(v: Decimal) -> Self {
		let integral = v.trunc();
		let value    = integral.mantissa() / 10_i128.pow(integral.scale());
		Self::new(value.to_le_bytes(), true)
	}
}

//󰭅		TryFrom: f32 -> Number
impl TryFrom<f32> for Number {
	type Error = ConversionError;

	//		try_from
	/// Stores the value as a signed 4-byte integer, truncated toward zero.
	///
	/// The bytes hold the integer itself in two's complement, not the IEEE
	/// bit pattern, so `1.0` is stored as `[1, 0, 0, 0]`.
	///
	fn try_from(v: f32) -> Result<Self, Self::Error> {
		if !v.is_finite() {
			return Err(ConversionError::NotFinite);
		}
		let truncated = v.trunc();
		#[expect(clippy::cast_precision_loss, reason = "Powers of two are exact")]
		if truncated < i32::MIN as f32 || truncated >= -(i32::MIN as f32) {
			return Err(ConversionError::ValueTooLarge);
		}
		#[expect(clippy::cast_possible_truncation, reason = "Range checked above")]
		Ok(Self::new((truncated as i32).to_le_bytes(), true))
	}
}

//󰭅		TryFrom: f64 -> Number
impl TryFrom<f64> for Number {
	type Error = ConversionError;

	//		try_from
	/// Stores the value as a signed 8-byte integer, truncated toward zero.
	///
	/// The bytes hold the integer itself in two's complement, not the IEEE
	/// bit pattern, so `-1.0` is stored as eight `0xFF` bytes.
	///
	fn try_from(v: f64) -> Result<Self, Self::Error> {
		if !v.is_finite() {
			return Err(ConversionError::NotFinite);
		}
		let truncated = v.trunc();
		#[expect(clippy::cast_precision_loss, reason = "Powers of two are exact")]
		if truncated < i64::MIN as f64 || truncated >= -(i64::MIN as f64) {
			return Err(ConversionError::ValueTooLarge);
		}
		#[expect(clippy::cast_possible_truncation, reason = "Range checked above")]
		Ok(Self::new((truncated as i64).to_le_bytes(), true))
	}
}

//󰭅		TryFrom: Number -> Decimal
impl TryFrom<&Number> for Decimal {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: &Number) -> Result<Self, Self::Error> {
		Self::try_from_i128_with_scale(i128::try_from(v)?, 0).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom: Number -> Decimal (owned)
impl TryFrom<Number> for Decimal {
	type Error = ConversionError;

	//		try_from
	fn try_from(v: Number) -> Result<Self, Self::Error> {
		Self::try_from(&v)
	}
}

impl_primitive_conversions!(
	i8    => true,
	i16   => true,
	i32   => true,
	i64   => true,
	i128  => true,
	isize => true,
	u8    => false,
	u16   => false,
	u32   => false,
	u64   => false,
	u128  => false,
	usize => false,
);



//		Visitors

//		BytesVisitor
/// A visitor for reading a number from its flag and raw bytes.
struct BytesVisitor;

//󰭅		Visitor
impl<'de> Visitor<'de> for BytesVisitor {
	type Value = Number;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a signedness flag followed by little-endian bytes")
	}

	//		visit_seq
	fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let signed: bool     = seq.next_element()?.ok_or_else(|| SerdeError::invalid_length(0, &self))?;
		let bytes:  Vec<u8>  = seq.next_element()?.ok_or_else(|| SerdeError::invalid_length(1, &self))?;
		Ok(Number::new(bytes, signed))
	}
}

//		NumberVisitor
/// A visitor for reading a number from an integer or a decimal string.
struct NumberVisitor;

//󰭅		Visitor
impl Visitor<'_> for NumberVisitor {
	type Value = Number;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer")
	}

	//		visit_i64
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Number::from(v))
	}

	//		visit_i128
	fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Number::from(v))
	}

	//		visit_u64
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Number::from(v))
	}

	//		visit_u128
	fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Number::from(v))
	}

	//		visit_str
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
}



//		Functions

//		canonical_width
/// The smallest width that holds the value of `bytes` under the given
/// signedness.
///
/// Unsigned values drop leading zero bytes. Signed values drop leading `0x00`
/// and `0xFF` bytes as long as the sign bit of the next byte still agrees. A
/// zero value has a width of zero either way.
///
fn canonical_width(bytes: &[u8], signed: bool) -> usize {
	let mut width = bytes.len();
	if !signed {
		while width > 0 && bytes[width - 1] == 0 {
			width -= 1;
		}
		return width;
	}
	if bytes.iter().all(|&b| b == 0) {
		return 0;
	}
	while width > 1 {
		let top       = bytes[width - 1];
		let next_sign = bytes[width - 2] & 0x80 != 0;
		if (top == 0x00 && !next_sign) || (top == 0xFF && next_sign) {
			width -= 1;
		} else {
			break;
		}
	}
	width
}

//		compare_magnitudes
/// Compares two unsigned magnitudes, ignoring leading zero bytes.
fn compare_magnitudes(a: &[u8], b: &[u8]) -> Ordering {
	let a = &a[..canonical_width(a, false)];
	let b = &b[..canonical_width(b, false)];
	a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

//		decimal_digits
/// Renders an unsigned magnitude as decimal digits.
fn decimal_digits(mut magnitude: Buffer) -> String {
	let mut digits = Vec::new();
	while !magnitude.is_empty() {
		digits.push(char::from(b'0' + divide_magnitude_small(&mut magnitude, 10)));
	}
	if digits.is_empty() {
		digits.push('0');
	}
	digits.iter().rev().collect()
}

//		divide_magnitude_small
/// Divides a magnitude in place by a single-byte divisor, returning the
/// remainder. Leading zero bytes are trimmed from the quotient.
fn divide_magnitude_small(magnitude: &mut Buffer, divisor: u8) -> u8 {
	let divisor       = u16::from(divisor);
	let mut remainder = 0_u16;

	//	Short division, from the most significant byte down
	for byte in magnitude.iter_mut().rev() {
		let current = (remainder << 8_i32) | u16::from(*byte);
		#[expect(clippy::cast_possible_truncation, reason = "Quotient digit is below 256")]
		{ *byte     = (current / divisor) as u8; }
		remainder   = current % divisor;
	}

	magnitude.truncate(canonical_width(magnitude, false));
	#[expect(clippy::cast_possible_truncation, reason = "Remainder is below the divisor")]
	{ remainder as u8 }
}

//		divide_magnitudes
/// Long division of two unsigned magnitudes, one bit at a time.
///
/// The divisor must not be zero.
///
fn divide_magnitudes(dividend: &[u8], divisor: &[u8]) -> (Buffer, Buffer) {
	let mut quotient  = smallvec![0_u8; dividend.len()];
	let mut remainder = Buffer::new();

	//	Process one bit at a time, from the most significant
	for i in (0..dividend.len() * 8).rev() {
		//	Shift remainder left by 1 and bring down the next bit of the dividend
		let mut carry = (dividend[i / 8] >> (i % 8)) & 1;
		for byte in &mut remainder {
			let next = *byte >> 7_i32;
			*byte    = (*byte << 1_i32) | carry;
			carry    = next;
		}
		if carry != 0 {
			remainder.push(carry);
		}

		//	If remainder >= divisor, subtract and set the quotient bit
		if compare_magnitudes(&remainder, divisor) != Ordering::Less {
			subtract_magnitude(&mut remainder, divisor);
			quotient[i / 8] |= 1 << (i % 8);
		}
	}

	(quotient, remainder)
}

//		multiply_add_small
/// Multiplies a magnitude in place by a small factor and adds a small value.
fn multiply_add_small(magnitude: &mut Buffer, factor: u8, addend: u8) {
	let mut carry = u16::from(addend);
	for byte in magnitude.iter_mut() {
		let value = u16::from(*byte) * u16::from(factor) + carry;
		#[expect(clippy::cast_possible_truncation, reason = "Upper bits carried")]
		{ *byte   = value as u8; }
		carry     = value >> 8_i32;
	}
	if carry != 0 {
		#[expect(clippy::cast_possible_truncation, reason = "Carry is below 256")]
		magnitude.push(carry as u8);
	}
}

//		parse_digit
/// Reads a single digit, checking it against the radix.
fn parse_digit(c: char, radix: Radix) -> Result<u8, ConversionError> {
	let digit = c.to_digit(16).ok_or(ConversionError::InvalidDigit(c))?;
	if digit >= radix.value() {
		#[expect(clippy::cast_possible_truncation, reason = "Radix is at most 16")]
		return Err(ConversionError::InvalidRadix(c, radix.value() as u8));
	}
	#[expect(clippy::cast_possible_truncation, reason = "Digit is below 16")]
	Ok(digit as u8)
}

//		subtract_magnitude
/// Subtracts `rhs` from `lhs` in place. `lhs` must not be smaller than `rhs`.
fn subtract_magnitude(lhs: &mut Buffer, rhs: &[u8]) {
	let mut borrow = 0_u8;
	for (i, byte) in lhs.iter_mut().enumerate() {
		let (diff1, b1) = byte.overflowing_sub(rhs.get(i).copied().unwrap_or(0));
		let (diff2, b2) = diff1.overflowing_sub(borrow);
		*byte           = diff2;
		borrow          = u8::from(b1 || b2);
	}
	lhs.truncate(canonical_width(lhs, false));
}

//		twos_complement
/// Inverts all bits and adds one, at the same width.
fn twos_complement(bytes: &[u8]) -> Buffer {
	let mut result = Buffer::with_capacity(bytes.len());
	let mut carry  = 1_u8;
	for &byte in bytes {
		let (sum, c) = (!byte).overflowing_add(carry);
		result.push(sum);
		carry        = u8::from(c);
	}
	result
}
