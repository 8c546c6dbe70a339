//! # BigUint
//! Arbitrary-precision unsigned integers stored as little-endian base `2^32` blocks.
//! Block `0` holds the least significant 32 bits.
//!
//! Text import and export use little-endian binary digit strings: character `i`
//! is bit `i` of the value.
//! # Example
//! ```
//! use big_uint::BigUint;
//!
//! let a: BigUint = "11".parse().unwrap();
//! let b = BigUint::from(1u32);
//! assert_eq!(&a + &b, BigUint::from(4u32));
//! assert_eq!((&a << 2).to_digit_string(), "0011");
//! assert!(BigUint::from(3u32).try_sub(&BigUint::from(5u32)).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
};
use std::str::FromStr;

use crate::big_uint_cache::*;
use crate::big_uint_constants::*;
use crate::error::{ArithmeticError, Result};

pub const ZERO: BigUint = BigUint { blocks: Vec::new(), len: 0 };

macro_rules! bit_length_u32 {
    ($n: expr) => {
        (u32::BITS - $n.leading_zeros()) as usize
    };
}

/// An arbitrary-precision unsigned integer.
///
/// `blocks` always holds `capacity()` initialized blocks. Only the first `len`
/// are significant, every block past `len` is zero and the block at `len - 1`
/// is never zero.
#[derive(Debug, Clone, Default)]
pub struct BigUint {
    blocks: Vec<u32>,
    len: usize,
}

fn split_double_block(val: u64) -> (u32, u32) {
    (val as u32, (val >> u32::BITS) as u32)
}

fn block_offset_bits(block_offset: usize) -> Result<usize> {
    block_offset
        .checked_mul(BLOCK_BITS)
        .ok_or(ArithmeticError::CapacityOverflow)
}

// 存储管理
impl BigUint {
    pub const fn zero() -> Self {
        ZERO
    }
    /// Number of allocated blocks.
    pub fn capacity(&self) -> usize {
        self.blocks.len()
    }
    /// Number of significant blocks.
    pub fn length(&self) -> usize {
        self.len
    }
    pub fn is_zero(&self) -> bool {
        self.len == 0
    }
    /// The significant blocks, least significant first.
    pub fn blocks(&self) -> &[u32] {
        &self.blocks[..self.len]
    }
    pub fn bit_len(&self) -> u64 {
        match self.blocks().last() {
            Some(&top) => {
                (self.len as u64 - 1) * BLOCK_BITS as u64 + bit_length_u32!(top) as u64
            }
            None => 0,
        }
    }
    /// Reads block `index`, treating every block past the significant ones as zero.
    fn block(&self, index: usize) -> u32 {
        self.blocks().get(index).copied().unwrap_or(0)
    }

    /// Reallocates the block buffer to hold exactly `n` blocks.
    ///
    /// Shrinking below [`length`](Self::length) drops the high blocks, so the
    /// value changes. Newly available blocks are zero.
    pub fn resize(&mut self, n: usize) -> Result<()> {
        let capacity = self.capacity();
        if n == capacity {
            return Ok(());
        }
        if n == 0 {
            self.clear();
            return Ok(());
        }
        if n > capacity {
            if let Err(err) = self.blocks.try_reserve_exact(n - capacity) {
                tracing::warn!(requested = n, capacity, "failed to grow block storage");
                return Err(err.into());
            }
            self.blocks.resize(n, 0);
        } else {
            self.blocks.truncate(n);
            self.blocks.shrink_to_fit();
            if self.len > n {
                self.len = n;
                self.normalize();
            }
        }
        let len = self.len;
        self.blocks[len..].fill(0);
        Ok(())
    }
    /// Grows the buffer to at least `n` blocks. Never shrinks.
    pub fn reserve(&mut self, n: usize) -> Result<()> {
        if n > self.capacity() {
            self.resize(n)?;
        }
        Ok(())
    }
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        self.normalize();
        self.resize(self.len)
    }
    fn normalize(&mut self) {
        while self.len > 0 && self.blocks[self.len - 1] == 0 {
            self.len -= 1;
        }
    }
    pub fn swap(&mut self, other: &mut BigUint) {
        std::mem::swap(self, other);
    }
    /// Moves the value out, leaving zero with no allocation behind.
    pub fn take(&mut self) -> BigUint {
        std::mem::take(self)
    }
    fn clear(&mut self) {
        *self = ZERO;
    }
}

// 实现构造
impl BigUint {
    pub(crate) fn from_single_block(block: u32) -> Self {
        if block == 0 {
            ZERO
        } else {
            BigUint { blocks: vec![block], len: 1 }
        }
    }
    fn value_of(block: u32) -> Self {
        if block as usize <= MAX_CONSTANT {
            SMALL_CACHE[block as usize].clone()
        } else {
            BigUint::from_single_block(block)
        }
    }
    fn from_double_block(val: u64) -> Self {
        if val == 0 {
            return ZERO;
        }
        let (low, high) = split_double_block(val);
        let mut value = BigUint { blocks: vec![low, high], len: 2 };
        value.normalize();
        value
    }
    /// Builds a value from little-endian blocks. High zero blocks are allowed.
    pub fn from_blocks(blocks: Vec<u32>) -> Self {
        let len = blocks.len();
        let mut value = BigUint { blocks, len };
        value.normalize();
        value
    }
    pub fn to_u64(&self) -> Option<u64> {
        match self.len {
            0 => Some(0),
            1 => Some(self.blocks[0] as u64),
            2 => Some(((self.blocks[1] as u64) << u32::BITS) | self.blocks[0] as u64),
            _ => None,
        }
    }
}

macro_rules! impl_single_block_to_big_uint {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigUint {
        fn from(val: $u) -> Self {
            BigUint::value_of(val as u32)
        }
    }
    )*
    };
}

macro_rules! impl_double_block_to_big_uint {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigUint {
        fn from(val: $u) -> Self {
            BigUint::from_double_block(val as u64)
        }
    }
    )*
    };
}
impl_single_block_to_big_uint!(u8, u16, u32);
impl_double_block_to_big_uint!(u64, usize);

// 实现解析
impl BigUint {
    /// Parses a little-endian binary digit string, where character `i` is bit `i`.
    ///
    /// The empty string is zero.
    pub fn from_digits(digits: &str) -> Result<Self> {
        let mut value = ZERO;
        value.assign_digits(digits)?;
        Ok(value)
    }
    /// Replaces the value with the parsed digit string. On failure the
    /// receiver is left as zero.
    pub fn assign_digits(&mut self, digits: &str) -> Result<&mut Self> {
        let invalid = digits
            .char_indices()
            .find(|&(_, c)| c != ZERO_DIGIT as char && c != ONE_DIGIT as char);
        if let Some((position, found)) = invalid {
            self.clear();
            return Err(ArithmeticError::InvalidDigitString { position, found });
        }

        let digits = digits.as_bytes();
        let block_count = digits.len().div_ceil(BLOCK_BITS);
        if block_count == 0 {
            self.clear();
            return Ok(self);
        }
        if let Err(err) = self.resize(block_count) {
            self.clear();
            return Err(err);
        }
        for (block_number, chunk) in digits.chunks(BLOCK_BITS).enumerate() {
            let mut block = 0u32;
            for (bit, &digit) in chunk.iter().enumerate() {
                if digit == ONE_DIGIT {
                    block |= 1 << bit;
                }
            }
            self.blocks[block_number] = block;
        }
        self.len = block_count;
        self.normalize();
        Ok(self)
    }
}

impl FromStr for BigUint {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self> {
        BigUint::from_digits(s)
    }
}

impl TryFrom<&str> for BigUint {
    type Error = ArithmeticError;

    fn try_from(s: &str) -> Result<Self> {
        BigUint::from_digits(s)
    }
}

// 实现打印
impl BigUint {
    /// Renders the little-endian binary digit string, `"0"` for zero.
    ///
    /// High zero bits of the top block are omitted.
    pub fn to_digit_string(&self) -> String {
        let Some((&top, rest)) = self.blocks().split_last() else {
            return String::from("0");
        };
        let mut render = String::with_capacity(self.len.saturating_mul(BLOCK_BITS));
        for &block in rest {
            for bit in 0..BLOCK_BITS {
                render.push(BigUint::digit_of(block, bit));
            }
        }
        for bit in 0..bit_length_u32!(top) {
            render.push(BigUint::digit_of(top, bit));
        }
        render
    }
    fn digit_of(block: u32, bit: usize) -> char {
        if (block >> bit) & 1 == 1 {
            ONE_DIGIT as char
        } else {
            ZERO_DIGIT as char
        }
    }
}

impl Display for BigUint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_digit_string())
    }
}

// 实现大小比较
impl BigUint {
    fn compare_blocks(&self, other: &BigUint) -> Ordering {
        if self.len < other.len {
            return Ordering::Less;
        }
        if self.len > other.len {
            return Ordering::Greater;
        }

        let mut pos = self.len;
        while pos > 0 {
            pos -= 1;
            let a = self.blocks[pos];
            let b = other.blocks[pos];
            if a != b {
                return a.cmp(&b);
            }
        }

        Ordering::Equal
    }
}

impl PartialEq for BigUint {
    fn eq(&self, other: &Self) -> bool {
        self.blocks() == other.blocks()
    }
}
impl Eq for BigUint {}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_blocks(other)
    }
}

impl Hash for BigUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.blocks().hash(state);
    }
}

// 实现加法
impl BigUint {
    pub fn try_add_assign(&mut self, other: &BigUint) -> Result<&mut Self> {
        if self.is_zero() {
            self.clone_from(other);
            return Ok(self);
        }
        let new_len = self
            .len
            .max(other.len)
            .checked_add(1)
            .ok_or(ArithmeticError::CapacityOverflow)?;
        self.reserve(new_len)?;

        let mut carry = false;
        for i in 0..new_len {
            if i >= other.len && !carry {
                break;
            }
            let (sum, overflow) = self.blocks[i].overflowing_add(other.block(i));
            let (sum, carry_out) = sum.overflowing_add(carry as u32);
            self.blocks[i] = sum;
            carry = overflow || carry_out;
        }
        self.len = new_len;
        self.normalize();
        Ok(self)
    }
}

// 实现减法
impl BigUint {
    /// Subtracts `other` in place. Fails with [`ArithmeticError::NegativeResult`]
    /// without touching `self` when `other > self`.
    pub fn try_sub_assign(&mut self, other: &BigUint) -> Result<&mut Self> {
        if *other > *self {
            return Err(ArithmeticError::NegativeResult);
        }

        let mut borrow = false;
        for i in 0..self.len {
            if i >= other.len && !borrow {
                break;
            }
            let (diff, underflow) = self.blocks[i].overflowing_sub(other.block(i));
            let (diff, borrow_out) = diff.overflowing_sub(borrow as u32);
            self.blocks[i] = diff;
            borrow = underflow || borrow_out;
        }
        self.normalize();
        Ok(self)
    }
}

// 实现乘法
impl BigUint {
    /// Schoolbook multiplication: every pair of blocks contributes its 64-bit
    /// product shifted to the pair's combined block position.
    pub fn try_mul_assign(&mut self, other: &BigUint) -> Result<&mut Self> {
        if self.is_zero() {
            return Ok(self);
        }
        if other.is_zero() {
            self.clear();
            return Ok(self);
        }

        let _span = tracing::trace_span!(
            "schoolbook multiply",
            lhs_blocks = self.len,
            rhs_blocks = other.len,
        )
        .entered();

        let mut result = ZERO;
        result.reserve(
            self.len
                .checked_add(other.len)
                .ok_or(ArithmeticError::CapacityOverflow)?,
        )?;
        for (other_index, &other_block) in other.blocks().iter().enumerate() {
            for (own_index, &own_block) in self.blocks().iter().enumerate() {
                let mut product = BigUint::from(own_block as u64 * other_block as u64);
                product.try_shl_assign(block_offset_bits(own_index + other_index)?)?;
                result.try_add_assign(&product)?;
            }
        }
        *self = result;
        Ok(self)
    }
}

// 实现除法与求余
impl BigUint {
    /// Returns `(self / divisor, self % divisor)`.
    pub fn div_rem(&self, divisor: &BigUint) -> Result<(BigUint, BigUint)> {
        self.long_division(divisor, true)
    }
    pub fn try_div_assign(&mut self, other: &BigUint) -> Result<&mut Self> {
        let (quotient, _) = self.long_division(other, true)?;
        *self = quotient;
        Ok(self)
    }
    pub fn try_rem_assign(&mut self, other: &BigUint) -> Result<&mut Self> {
        let (_, remainder) = self.long_division(other, false)?;
        *self = remainder;
        Ok(self)
    }

    /// Restoring shift-subtract division.
    ///
    /// The divisor is shifted up to the bit length of the dividend, then walked
    /// back down one bit at a time, subtracting wherever it fits. The quotient
    /// is only accumulated when `with_quotient` is set.
    fn long_division(&self, divisor: &BigUint, with_quotient: bool) -> Result<(BigUint, BigUint)> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if *self < *divisor {
            return Ok((ZERO, self.clone()));
        }

        let _span = tracing::trace_span!(
            "long division",
            dividend_blocks = self.len,
            divisor_blocks = divisor.len,
        )
        .entered();

        let shift = usize::try_from(self.bit_len() - divisor.bit_len())
            .map_err(|_| ArithmeticError::CapacityOverflow)?;
        let mut remainder = self.clone();
        let mut quotient = ZERO;
        let mut shifted_divisor = divisor.try_shl(shift)?;
        let mut quotient_bit = if with_quotient {
            BigUint::from(1u32).try_shl(shift)?
        } else {
            ZERO
        };

        while remainder >= *divisor {
            if remainder >= shifted_divisor {
                remainder.try_sub_assign(&shifted_divisor)?;
                if with_quotient {
                    quotient.try_add_assign(&quotient_bit)?;
                }
            } else {
                shifted_divisor >>= 1;
                quotient_bit >>= 1;
            }
        }
        Ok((quotient, remainder))
    }
}

// 实现左移
impl BigUint {
    pub fn try_shl_assign(&mut self, offset: usize) -> Result<&mut Self> {
        if self.is_zero() || offset == 0 {
            return Ok(self);
        }
        let block_offset = offset / BLOCK_BITS;
        let bit_shift = (offset % BLOCK_BITS) as u32;
        let new_len = self
            .len
            .checked_add(offset.div_ceil(BLOCK_BITS))
            .ok_or(ArithmeticError::CapacityOverflow)?;
        self.reserve(new_len)?;

        for i in (0..self.len).rev() {
            let block = self.blocks[i];
            let low = block << bit_shift;
            let high = if bit_shift == 0 {
                0
            } else {
                block >> (u32::BITS - bit_shift)
            };
            self.blocks[i] = 0;
            self.blocks[i + block_offset] = low;
            if high != 0 {
                self.blocks[i + block_offset + 1] |= high;
            }
        }
        self.len = new_len;
        self.normalize();
        Ok(self)
    }
}

// 实现右移
impl ShrAssign<usize> for BigUint {
    fn shr_assign(&mut self, offset: usize) {
        if self.is_zero() || offset == 0 {
            return;
        }
        let block_offset = offset / BLOCK_BITS;
        if block_offset >= self.len {
            self.clear();
            return;
        }
        let bit_shift = (offset % BLOCK_BITS) as u32;

        for i in 0..self.len {
            let block = self.blocks[i];
            let low = if bit_shift == 0 {
                0
            } else {
                block << (u32::BITS - bit_shift)
            };
            let high = block >> bit_shift;
            self.blocks[i] = 0;
            if i > block_offset {
                self.blocks[i - block_offset - 1] |= low;
            }
            if i >= block_offset {
                self.blocks[i - block_offset] = high;
            }
        }
        self.len -= block_offset;
        self.normalize();
    }
}

impl Shr<usize> for BigUint {
    type Output = BigUint;

    fn shr(mut self, offset: usize) -> Self::Output {
        self >>= offset;
        self
    }
}

impl Shr<usize> for &BigUint {
    type Output = BigUint;

    fn shr(self, offset: usize) -> Self::Output {
        self.clone() >> offset
    }
}

// 非原地运算
macro_rules! impl_try_binary_op {
    ($($name: ident => $assign: ident),*) => {
    $(
    impl BigUint {
        pub fn $name(&self, other: &BigUint) -> Result<BigUint> {
            let mut res = self.clone();
            res.$assign(other)?;
            Ok(res)
        }
    }
    )*
    };
}
impl_try_binary_op!(
    try_add => try_add_assign,
    try_sub => try_sub_assign,
    try_mul => try_mul_assign,
    try_div => try_div_assign,
    try_rem => try_rem_assign
);

impl BigUint {
    pub fn try_shl(&self, offset: usize) -> Result<BigUint> {
        let mut res = self.clone();
        res.try_shl_assign(offset)?;
        Ok(res)
    }
}

fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(val) => val,
        Err(err) => panic!("{}", err),
    }
}

// 运算符重载, 出错时 panic
macro_rules! impl_binary_operator {
    ($($op: ident :: $method: ident, $op_assign: ident :: $method_assign: ident => $try_assign: ident);*) => {
    $(
    impl $op_assign<&BigUint> for BigUint {
        fn $method_assign(&mut self, rhs: &BigUint) {
            or_panic(self.$try_assign(rhs));
        }
    }

    impl $op_assign for BigUint {
        fn $method_assign(&mut self, rhs: BigUint) {
            or_panic(self.$try_assign(&rhs));
        }
    }

    impl $op<&BigUint> for &BigUint {
        type Output = BigUint;

        fn $method(self, rhs: &BigUint) -> Self::Output {
            let mut res = self.clone();
            or_panic(res.$try_assign(rhs));
            res
        }
    }

    impl $op<BigUint> for &BigUint {
        type Output = BigUint;

        fn $method(self, rhs: BigUint) -> Self::Output {
            <&BigUint as $op<&BigUint>>::$method(self, &rhs)
        }
    }

    impl $op<&BigUint> for BigUint {
        type Output = BigUint;

        fn $method(mut self, rhs: &BigUint) -> Self::Output {
            or_panic(self.$try_assign(rhs));
            self
        }
    }

    impl $op for BigUint {
        type Output = BigUint;

        fn $method(mut self, rhs: BigUint) -> Self::Output {
            or_panic(self.$try_assign(&rhs));
            self
        }
    }
    )*
    };
}
impl_binary_operator!(
    Add::add, AddAssign::add_assign => try_add_assign;
    Sub::sub, SubAssign::sub_assign => try_sub_assign;
    Mul::mul, MulAssign::mul_assign => try_mul_assign;
    Div::div, DivAssign::div_assign => try_div_assign;
    Rem::rem, RemAssign::rem_assign => try_rem_assign
);

impl ShlAssign<usize> for BigUint {
    fn shl_assign(&mut self, offset: usize) {
        or_panic(self.try_shl_assign(offset));
    }
}

impl Shl<usize> for BigUint {
    type Output = BigUint;

    fn shl(mut self, offset: usize) -> Self::Output {
        self <<= offset;
        self
    }
}

impl Shl<usize> for &BigUint {
    type Output = BigUint;

    fn shl(self, offset: usize) -> Self::Output {
        self.clone() << offset
    }
}

/// Digit string of `len` characters with ones at `positions`.
#[cfg(test)]
fn digits_with_ones(len: usize, positions: &[usize]) -> String {
    (0..len)
        .map(|i| if positions.contains(&i) { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
fn parse(digits: &str) -> BigUint {
    BigUint::from_digits(digits).unwrap()
}

#[cfg(test)]
fn blocks_of(val: u128) -> Vec<u32> {
    let mut blocks: Vec<u32> = (0..4).map(|i| (val >> (32 * i)) as u32).collect();
    while blocks.last() == Some(&0) {
        blocks.pop();
    }
    blocks
}

#[cfg(test)]
fn assert_normalized(val: &BigUint) {
    assert!(val.length() <= val.capacity());
    if let Some(&top) = val.blocks().last() {
        assert_ne!(top, 0);
    }
    assert!(val.blocks[val.length()..].iter().all(|&b| b == 0));
}

#[test]
fn test_default_is_zero() {
    let a = BigUint::default();
    assert!(a.is_zero());
    assert_eq!(a.length(), 0);
    assert_eq!(a.capacity(), 0);
    assert_eq!(a, BigUint::zero());
}

#[test]
fn test_from_single_block() {
    let a = BigUint::from(1u32);
    assert_eq!(a.length(), 1);
    assert_eq!(a.blocks(), &[1]);

    let b = BigUint::from(0u32);
    assert!(b.is_zero());
    assert_eq!(b.length(), 0);

    let c = BigUint::from(0xdead_beef_u32);
    assert_eq!(c.blocks(), &[0xdead_beef]);
    assert_eq!(c.capacity(), 1);

    assert_eq!(BigUint::from(7u8), BigUint::from(7u32));
    assert_eq!(BigUint::from(300u16).blocks(), &[300]);
}

#[test]
fn test_from_double_block() {
    let a = BigUint::from(0x1_0000_0002_u64);
    assert_eq!(a.length(), 2);
    assert_eq!(a.blocks(), &[2, 1]);

    let b = BigUint::from(5u64);
    assert_eq!(b.length(), 1);
    assert_eq!(b, BigUint::from(5u32));

    assert!(BigUint::from(0u64).is_zero());
    assert_eq!(BigUint::from(42usize), BigUint::from(42u32));
}

#[test]
fn test_from_blocks_normalizes() {
    let a = BigUint::from_blocks(vec![3, 0, 0]);
    assert_eq!(a.length(), 1);
    assert_eq!(a.capacity(), 3);
    assert_normalized(&a);
    assert!(BigUint::from_blocks(vec![0, 0]).is_zero());
}

#[test]
fn test_from_digits() {
    let a = parse("");
    assert!(a.is_zero());

    let b = parse("0");
    assert!(b.is_zero());
    assert_eq!(b.length(), 0);

    let c = parse("1");
    assert_eq!(c.length(), 1);
    assert_eq!(c.blocks(), &[1]);

    let d = parse(&digits_with_ones(96, &[32, 65]));
    assert_eq!(d.length(), 3);
    assert_eq!(d.blocks(), &[0, 1, 2]);

    let e = parse("0000000000000000000000000000000000000000");
    assert!(e.is_zero());
    assert_normalized(&e);
}

#[test]
fn test_from_digits_rejects_other_characters() {
    let err = BigUint::from_digits("0a").unwrap_err();
    assert_eq!(err, ArithmeticError::InvalidDigitString { position: 1, found: 'a' });

    assert!(matches!(
        "012".parse::<BigUint>(),
        Err(ArithmeticError::InvalidDigitString { position: 2, found: '2' })
    ));
    assert!(BigUint::try_from(" 1").is_err());
}

#[test]
fn test_assign_digits_resets_on_failure() {
    let mut a = BigUint::zero();
    assert!(a.assign_digits("0a").is_err());
    assert!(a.is_zero());

    let mut b = BigUint::from(u64::MAX);
    assert!(b.assign_digits("1111x").is_err());
    assert!(b.is_zero());
    assert_eq!(b.capacity(), 0);

    let mut c = BigUint::from(u64::MAX);
    c.assign_digits("101").unwrap();
    assert_eq!(c, BigUint::from(5u32));
    assert_normalized(&c);
}

#[test]
fn test_to_digit_string() {
    assert_eq!(BigUint::zero().to_digit_string(), "0");
    assert_eq!(BigUint::from(1u32).to_digit_string(), "1");
    assert_eq!(BigUint::from(6u32).to_digit_string(), "011");
    assert_eq!(BigUint::from(1u64 << 32).to_digit_string(), digits_with_ones(33, &[32]));
    assert_eq!(format!("{}", BigUint::from(u32::MAX)), "1".repeat(32));

    let digits = digits_with_ones(70, &[0, 31, 40, 69]);
    assert_eq!(parse(&digits).to_digit_string(), digits);
}

#[test]
fn test_to_u64() {
    assert_eq!(BigUint::zero().to_u64(), Some(0));
    assert_eq!(BigUint::from(123456789110u64).to_u64(), Some(123456789110));
    assert_eq!(BigUint::from_blocks(vec![1, 2, 3]).to_u64(), None);
}

#[test]
fn test_bit_len() {
    assert_eq!(BigUint::zero().bit_len(), 0);
    assert_eq!(BigUint::from(1u32).bit_len(), 1);
    assert_eq!(BigUint::from(u32::MAX).bit_len(), 32);
    assert_eq!(BigUint::from(1u64 << 32).bit_len(), 33);
}

#[test]
fn test_copy() {
    let a = BigUint::from(2u32);
    let b = a.clone();
    assert_eq!(a.blocks(), &[2]);
    assert_eq!(b.length(), 1);
    assert_eq!(b.blocks(), &[2]);
}

#[test]
fn test_take() {
    let mut a = BigUint::from(2u32);
    let b = a.take();
    assert_eq!(b.length(), 1);
    assert_eq!(b.blocks(), &[2]);
    assert!(a.is_zero());
    assert_eq!(a.capacity(), 0);
}

#[test]
fn test_memory_management() {
    let mut a = BigUint::from(1u32);
    assert_eq!(a.length(), 1);
    assert_eq!(a.capacity(), 1);
    a.reserve(5).unwrap();
    assert_eq!(a.length(), 1);
    assert_eq!(a.capacity(), 5);
    assert_normalized(&a);
    a.reserve(2).unwrap();
    assert_eq!(a.capacity(), 5);
    a.resize(0).unwrap();
    assert_eq!(a.length(), 0);
    assert_eq!(a.capacity(), 0);

    a = BigUint::from(1u32);
    a.reserve(5).unwrap();
    a.shrink_to_fit().unwrap();
    assert_eq!(a.capacity(), 1);

    let mut b = BigUint::from(2u32);
    a.swap(&mut b);
    assert_eq!(a.blocks(), &[2]);
    assert_eq!(b.blocks(), &[1]);
}

#[test]
fn test_resize_truncates() {
    let mut a = BigUint::from_blocks(vec![7, 0, 9]);
    a.resize(2).unwrap();
    assert_eq!(a.capacity(), 2);
    assert_eq!(a, BigUint::from(7u32));
    assert_normalized(&a);
}

#[test]
fn test_comparison_one_block() {
    let a = BigUint::from(1u32);
    let b = BigUint::from(2u32);
    let c = BigUint::from(1u32);
    assert!(a < b);
    assert!(b > a);
    assert!(a <= c);
    assert!(a >= c);
    assert!(a <= b);
    assert!(b >= a);
    assert_eq!(a, c);
    assert_ne!(a, b);
}

#[test]
fn test_comparison_multi_block() {
    let a = parse(&digits_with_ones(64, &[0, 63]));
    let b = parse(&digits_with_ones(64, &[1, 63]));
    let c = parse(&digits_with_ones(64, &[0, 63]));
    let d = parse(&digits_with_ones(65, &[0, 63, 64]));
    assert!(a < b);
    assert!(b > a);
    assert!(a <= c);
    assert!(a >= c);
    assert_eq!(a, c);
    assert_ne!(a, b);
    assert!(a < d);
    assert!(d > a);
    assert_ne!(a, d);
}

#[test]
fn test_eq_ignores_capacity() {
    let mut a = BigUint::from(9u32);
    a.reserve(8).unwrap();
    assert_eq!(a, BigUint::from(9u32));
    assert_eq!(a.cmp(&BigUint::from(9u32)), Ordering::Equal);
}

#[test]
fn test_hash_ignores_capacity() {
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(val: &BigUint) -> u64 {
        let mut hasher = DefaultHasher::new();
        val.hash(&mut hasher);
        hasher.finish()
    }

    let mut a = BigUint::from(0x1_0000_0009_u64);
    a.reserve(8).unwrap();
    let b = BigUint::from(0x1_0000_0009_u64);
    assert_ne!(a.capacity(), b.capacity());
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let mut c = BigUint::from_blocks(vec![9, 1, 0, 0]);
    c.shrink_to_fit().unwrap();
    assert_eq!(hash_of(&c), hash_of(&b));
}

#[test]
fn test_add() {
    let c = parse("11") + parse("1");
    assert_eq!(c, parse("001"));
    assert_eq!(c, BigUint::from(4u32));

    let c = parse(&"1".repeat(32)) + parse("1");
    assert_eq!(c.length(), 2);
    assert_eq!(c, BigUint::from(1u64 << 32));
    assert_eq!(c, parse(&digits_with_ones(33, &[32])));

    let mut d = BigUint::zero();
    d += &BigUint::from(5u32);
    assert_eq!(d, BigUint::from(5u32));

    let e = BigUint::from(u64::MAX) + BigUint::from(u64::MAX);
    assert_eq!(e.blocks(), blocks_of(u64::MAX as u128 * 2).as_slice());
    assert_normalized(&e);
}

#[test]
fn test_sub() {
    let c = parse("11") - parse("1");
    assert_eq!(c, parse("01"));

    let c = parse(&digits_with_ones(33, &[32])) - parse("1");
    assert_eq!(c, parse(&"1".repeat(32)));
    assert_eq!(c.length(), 1);
    assert_normalized(&c);

    let d = BigUint::from(u64::MAX) - BigUint::from(u64::MAX);
    assert!(d.is_zero());
}

#[test]
fn test_sub_negative_result() {
    let mut a = BigUint::from(3u32);
    let err = a.try_sub_assign(&BigUint::from(5u32)).unwrap_err();
    assert_eq!(err, ArithmeticError::NegativeResult);
    assert_eq!(a, BigUint::from(3u32));
}

#[test]
#[should_panic(expected = "subtraction would produce a negative value")]
fn test_sub_operator_panics() {
    let _ = BigUint::from(3u32) - BigUint::from(5u32);
}

#[test]
fn test_mul() {
    let a = BigUint::from(u32::MAX);
    let c = &a * &a;
    assert_eq!(c.blocks(), blocks_of(u32::MAX as u128 * u32::MAX as u128).as_slice());

    let x = 0xfedc_ba98_7654_3210_u64;
    let y = 0x0123_4567_89ab_cdef_u64;
    let c = BigUint::from(x) * BigUint::from(y);
    assert_eq!(c.blocks(), blocks_of(x as u128 * y as u128).as_slice());
    assert_normalized(&c);

    assert!((BigUint::zero() * BigUint::from(x)).is_zero());
    assert!((BigUint::from(x) * BigUint::zero()).is_zero());
}

#[test]
fn test_div() {
    assert_eq!(BigUint::from(120u32) / BigUint::from(13u32), BigUint::from(9u32));

    let x = 0xfedc_ba98_7654_3210_u64;
    let q = BigUint::from(x) / BigUint::from(1000u32);
    assert_eq!(q, BigUint::from(x / 1000));

    let q = BigUint::from(5u32) / BigUint::from(7u32);
    assert!(q.is_zero());

    let q = BigUint::zero() / BigUint::from(7u32);
    assert!(q.is_zero());
}

#[test]
fn test_div_by_zero() {
    let mut a = BigUint::from(1u32);
    let err = a.try_div_assign(&BigUint::zero()).unwrap_err();
    assert_eq!(err, ArithmeticError::DivisionByZero);
    assert_eq!(a, BigUint::from(1u32));
    assert_eq!(
        BigUint::from(1u32).try_rem(&BigUint::zero()),
        Err(ArithmeticError::DivisionByZero)
    );
}

#[test]
fn test_rem() {
    assert_eq!(BigUint::from(12u32) % BigUint::from(8u32), BigUint::from(4u32));
    assert!((BigUint::from(10_000_000_000_000_000u64) % BigUint::from(10u32)).is_zero());
    assert_eq!(BigUint::from(5u32) % BigUint::from(7u32), BigUint::from(5u32));
    assert!((BigUint::zero() % BigUint::from(7u32)).is_zero());

    let x = 0xfedc_ba98_7654_3210_u64;
    let y = 0x1_0000_0007_u64;
    assert_eq!(BigUint::from(x) % BigUint::from(y), BigUint::from(x % y));
}

#[test]
fn test_div_rem() {
    let x = u64::MAX;
    let y = 0xffff_u64;
    let (q, r) = BigUint::from(x).div_rem(&BigUint::from(y)).unwrap();
    assert_eq!(q, BigUint::from(x / y));
    assert_eq!(r, BigUint::from(x % y));
}

#[test]
fn test_shl() {
    let a = parse(&digits_with_ones(34, &[0, 1, 2, 32, 33]));
    let b = &a << 2;
    assert_eq!(b, parse(&digits_with_ones(36, &[2, 3, 4, 34, 35])));
    let b = &a << 34;
    assert_eq!(b, parse(&digits_with_ones(68, &[34, 35, 36, 66, 67])));
    let b = &a << 64;
    assert_eq!(b.blocks(), &[0, 0, 7, 3]);

    assert!((BigUint::zero() << 100).is_zero());
    assert_eq!(&a << 0, a);
}

#[test]
fn test_shr() {
    let a = parse(&digits_with_ones(35, &[0, 1, 2, 32, 33, 34]));
    let b = &a >> 2;
    assert_eq!(b, parse(&digits_with_ones(33, &[0, 30, 31, 32])));
    let b = &a >> 34;
    assert_eq!(b, parse("1"));
    let b = &a >> 32;
    assert_eq!(b, BigUint::from(7u32));
    let b = &a >> 35;
    assert!(b.is_zero());
    let b = &a >> 1000;
    assert!(b.is_zero());
    assert_eq!(&a >> 0, a);
}

#[test]
fn test_shift_round_trip() {
    let a = parse("1");
    let b = (&a << 34) >> 34;
    assert_eq!(b, a);
    assert_normalized(&b);
}
