use crate::error::Error;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

/// Arbitrary-precision unsigned integer.
///
/// Stored as a sequence of decimal digits in little-endian order (least
/// significant digit first). The representation is always normalized: no
/// high-order zero digits, and the value zero is the single digit `[0]`.
/// All arithmetic returns new values; nothing is mutated in place.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BigInt {
    // Each entry is a digit 0..=9, least significant first
    digits: Vec<u8>,
}

impl BigInt {
    /// Create zero
    pub fn zero() -> Self {
        BigInt { digits: vec![0] }
    }

    /// Create one
    pub fn one() -> Self {
        BigInt { digits: vec![1] }
    }

    /// Create from a u64 value
    pub fn from_u64(value: u64) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let mut digits = Vec::new();
        let mut v = value;
        while v > 0 {
            digits.push((v % 10) as u8);
            v /= 10;
        }
        BigInt { digits }
    }

    /// Parse the maximal leading run of ASCII decimal digits from `s`.
    ///
    /// A non-digit suffix is silently ignored and an empty digit run yields
    /// zero, so this never fails. Leading zeros are trimmed to canonical form.
    pub fn from_decimal(s: &str) -> Self {
        let mut digits: Vec<u8> = s
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .map(|b| b - b'0')
            .collect();
        if digits.is_empty() {
            return Self::zero();
        }
        digits.reverse();
        let mut result = BigInt { digits };
        result.normalize();
        result
    }

    /// Convert to u64, or `Error::DoesNotFit` if the value exceeds `u64::MAX`.
    pub fn to_u64(&self) -> Result<u64, Error> {
        let mut acc: u64 = 0;
        for &d in self.digits.iter().rev() {
            acc = acc
                .checked_mul(10)
                .and_then(|v| v.checked_add(d as u64))
                .ok_or(Error::DoesNotFit)?;
        }
        Ok(acc)
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    /// Check if one
    pub fn is_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 1
    }

    /// Number of decimal digits in the canonical representation
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Remove high-order zero digits
    fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits[self.digits.len() - 1] == 0 {
            self.digits.pop();
        }
    }

    /// Shift one decimal position and append a digit: `self * 10 + digit`
    pub(crate) fn push_digit(&self, digit: u8) -> BigInt {
        debug_assert!(digit < 10);
        if self.is_zero() {
            return BigInt {
                digits: vec![digit],
            };
        }
        let mut digits = Vec::with_capacity(self.digits.len() + 1);
        digits.push(digit);
        digits.extend_from_slice(&self.digits);
        BigInt { digits }
    }

    /// Subtraction that returns `None` on underflow
    pub fn checked_sub(&self, other: &BigInt) -> Option<BigInt> {
        if self < other {
            return None;
        }
        let mut digits = Vec::with_capacity(self.digits.len());
        let mut borrow = 0i8;
        for i in 0..self.digits.len() {
            let a = self.digits[i] as i8;
            let b = if i < other.digits.len() {
                other.digits[i] as i8
            } else {
                0
            };
            let mut d = a - b - borrow;
            if d < 0 {
                d += 10;
                borrow = 1;
            } else {
                borrow = 0;
            }
            digits.push(d as u8);
        }
        let mut result = BigInt { digits };
        result.normalize();
        Some(result)
    }

    /// Long division producing quotient and remainder.
    ///
    /// Processes the dividend's digits from most significant to least,
    /// maintaining `r = r * 10 + d` and extracting one quotient digit per
    /// position by trial subtraction. Satisfies `self == divisor * q + r`
    /// with `0 <= r < divisor`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self < divisor {
            return Ok((BigInt::zero(), self.clone()));
        }
        if divisor.is_one() {
            return Ok((self.clone(), BigInt::zero()));
        }

        let mut quotient_ms = Vec::with_capacity(self.digits.len());
        let mut remainder = BigInt::zero();
        for &d in self.digits.iter().rev() {
            remainder = remainder.push_digit(d);
            // remainder < divisor * 10, so at most nine subtractions
            let mut q = 0u8;
            while let Some(next) = remainder.checked_sub(divisor) {
                remainder = next;
                q += 1;
            }
            quotient_ms.push(q);
        }

        quotient_ms.reverse();
        let mut quotient = BigInt {
            digits: quotient_ms,
        };
        quotient.normalize();
        Ok((quotient, remainder))
    }

    /// Halve the value, returning `(self / 2, self % 2)`
    fn half(&self) -> (BigInt, u8) {
        let mut digits_ms = Vec::with_capacity(self.digits.len());
        let mut carry = 0u8;
        for &d in self.digits.iter().rev() {
            let cur = carry * 10 + d;
            digits_ms.push(cur / 2);
            carry = cur % 2;
        }
        digits_ms.reverse();
        let mut result = BigInt { digits: digits_ms };
        result.normalize();
        (result, carry)
    }

    /// Binary expansion, least significant bit first. Zero yields an empty vec.
    pub fn bits_le(&self) -> Vec<bool> {
        let mut bits = Vec::new();
        let mut v = self.clone();
        while !v.is_zero() {
            let (next, bit) = v.half();
            bits.push(bit == 1);
            v = next;
        }
        bits
    }

    /// Modular exponentiation: `self^exponent mod modulus` by square-and-multiply.
    ///
    /// Reduces through `div_rem` at every step, so a zero modulus yields
    /// `Error::DivisionByZero`.
    pub fn modpow(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt, Error> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if modulus.is_one() {
            return Ok(BigInt::zero());
        }

        let mut result = BigInt::one();
        let (_, mut base) = self.div_rem(modulus)?;
        let mut e = exponent.clone();
        while !e.is_zero() {
            let (next, bit) = e.half();
            if bit == 1 {
                result = (&result * &base).div_rem(modulus)?.1;
            }
            base = (&base * &base).div_rem(modulus)?.1;
            e = next;
        }
        Ok(result)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical form makes length the dominant criterion
        if self.digits.len() != other.digits.len() {
            return self.digits.len().cmp(&other.digits.len());
        }
        for i in (0..self.digits.len()).rev() {
            match self.digits[i].cmp(&other.digits[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

// Addition
impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        let max_len = self.digits.len().max(other.digits.len());
        let mut digits = Vec::with_capacity(max_len + 1);
        let mut carry = 0u8;
        for i in 0..max_len {
            let a = if i < self.digits.len() {
                self.digits[i]
            } else {
                0
            };
            let b = if i < other.digits.len() {
                other.digits[i]
            } else {
                0
            };
            let sum = a + b + carry;
            digits.push(sum % 10);
            carry = sum / 10;
        }
        if carry > 0 {
            digits.push(carry);
        }
        BigInt { digits }
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, other: BigInt) -> BigInt {
        &self + &other
    }
}

// Subtraction
impl Sub for &BigInt {
    type Output = BigInt;

    /// # Panics
    ///
    /// Panics on underflow. Use [`BigInt::checked_sub`] when the ordering of
    /// the operands is not already established.
    fn sub(self, other: &BigInt) -> BigInt {
        match self.checked_sub(other) {
            Some(diff) => diff,
            None => panic!("attempt to subtract with underflow"),
        }
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, other: BigInt) -> BigInt {
        &self - &other
    }
}

// Multiplication
impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }

        // Schoolbook long multiplication: one positionally shifted partial
        // product per multiplier digit, accumulated through addition
        let mut acc = BigInt::zero();
        for (i, &m) in other.digits.iter().enumerate() {
            if m == 0 {
                continue;
            }
            let mut partial = Vec::with_capacity(self.digits.len() + i + 1);
            partial.resize(i, 0);
            let mut carry = 0u8;
            for &d in &self.digits {
                let prod = d * m + carry;
                partial.push(prod % 10);
                carry = prod / 10;
            }
            if carry > 0 {
                partial.push(carry);
            }
            acc = &acc + &BigInt { digits: partial };
        }
        acc
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, other: BigInt) -> BigInt {
        &self * &other
    }
}

// Division and Remainder
impl Div for &BigInt {
    type Output = BigInt;

    /// # Panics
    ///
    /// Panics when `other` is zero. Use [`BigInt::div_rem`] to handle a zero
    /// divisor as an error.
    fn div(self, other: &BigInt) -> BigInt {
        match self.div_rem(other) {
            Ok((quotient, _)) => quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl Div for BigInt {
    type Output = BigInt;

    fn div(self, other: BigInt) -> BigInt {
        &self / &other
    }
}

impl Rem for &BigInt {
    type Output = BigInt;

    /// # Panics
    ///
    /// Panics when `other` is zero. Use [`BigInt::div_rem`] to handle a zero
    /// divisor as an error.
    fn rem(self, other: &BigInt) -> BigInt {
        match self.div_rem(other) {
            Ok((_, remainder)) => remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    fn rem(self, other: BigInt) -> BigInt {
        &self % &other
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self
            .digits
            .iter()
            .rev()
            .map(|&d| (d + b'0') as char)
            .collect();
        write!(f, "{}", s)
    }
}
