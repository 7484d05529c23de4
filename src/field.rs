use crate::bigint::BigInt;
use crate::error::Error;
use crate::modular;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Element of the prime field F_p.
///
/// The value is reduced modulo `modulus` at construction and stays in
/// `[0, modulus)` through every operation. Subtraction is implemented as
/// addition of the negation, so intermediate values never go negative.
#[derive(Clone, Debug)]
pub struct FieldElement {
    value: BigInt,
    modulus: BigInt,
}

fn reduce(value: BigInt, modulus: &BigInt) -> BigInt {
    match value.div_rem(modulus) {
        Ok((_, remainder)) => remainder,
        Err(_) => panic!("field modulus must be nonzero"),
    }
}

impl FieldElement {
    /// Create a new field element, reducing `value` modulo `modulus`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    pub fn new(value: BigInt, modulus: BigInt) -> Self {
        let value = reduce(value, &modulus);
        FieldElement { value, modulus }
    }

    /// Create from u64
    pub fn from_u64(value: u64, modulus: BigInt) -> Self {
        Self::new(BigInt::from_u64(value), modulus)
    }

    /// Get the reduced value
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Get the modulus
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// The zero element of F_modulus
    pub fn zero_with_modulus(modulus: BigInt) -> Self {
        FieldElement {
            value: BigInt::zero(),
            modulus,
        }
    }

    /// The one element of F_modulus
    pub fn one_with_modulus(modulus: BigInt) -> Self {
        FieldElement {
            value: BigInt::one(),
            modulus,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn check_same_modulus(&self, other: &Self, op: &str) {
        if self.modulus != other.modulus {
            panic!("cannot {} field elements with different moduli", op);
        }
    }

    /// Field addition
    pub fn add(&self, other: &Self) -> Self {
        self.check_same_modulus(other, "add");
        FieldElement {
            value: reduce(&self.value + &other.value, &self.modulus),
            modulus: self.modulus.clone(),
        }
    }

    /// Additive inverse: `modulus - value` for nonzero values
    pub fn neg(&self) -> Self {
        if self.value.is_zero() {
            return self.clone();
        }
        FieldElement {
            value: &self.modulus - &self.value,
            modulus: self.modulus.clone(),
        }
    }

    /// Field subtraction, as addition of the negation
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Field multiplication
    pub fn mul(&self, other: &Self) -> Self {
        self.check_same_modulus(other, "multiply");
        FieldElement {
            value: reduce(&self.value * &other.value, &self.modulus),
            modulus: self.modulus.clone(),
        }
    }

    /// Exponentiation by square-and-multiply
    pub fn pow(&self, exp: &BigInt) -> Self {
        match self.value.modpow(exp, &self.modulus) {
            Ok(value) => FieldElement {
                value,
                modulus: self.modulus.clone(),
            },
            Err(_) => panic!("field modulus must be nonzero"),
        }
    }

    /// Multiplicative inverse via the extended Euclidean algorithm
    pub fn inv(&self) -> Result<Self, Error> {
        let value = modular::mod_inverse(&self.value, &self.modulus)?;
        Ok(FieldElement {
            value,
            modulus: self.modulus.clone(),
        })
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.check_same_modulus(other, "compare");
        self.value == other.value
    }
}

impl Eq for FieldElement {}

// Operator sugar delegating to the inherent methods
impl Add for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement::add(self, other)
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, other: FieldElement) -> FieldElement {
        FieldElement::add(&self, &other)
    }
}

impl Sub for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement::sub(self, other)
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: FieldElement) -> FieldElement {
        FieldElement::sub(&self, &other)
    }
}

impl Mul for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement::mul(self, other)
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: FieldElement) -> FieldElement {
        FieldElement::mul(&self, &other)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(self)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(&self)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_arithmetic() {
        // Work in F_7
        let p = BigInt::from_u64(7);

        let a = FieldElement::from_u64(3, p.clone());
        let b = FieldElement::from_u64(5, p.clone());

        // 3 + 5 = 8 ≡ 1 (mod 7)
        assert_eq!((&a + &b).value(), &BigInt::one());

        // 3 - 5 = -2 ≡ 5 (mod 7)
        assert_eq!((&a - &b).value(), &BigInt::from_u64(5));

        // 3 * 5 = 15 ≡ 1 (mod 7)
        assert_eq!((&a * &b).value(), &BigInt::one());

        // 3^(-1) ≡ 5 (mod 7)
        let inv = a.inv().unwrap();
        assert_eq!(inv.value(), &BigInt::from_u64(5));
        assert_eq!((&a * &inv).value(), &BigInt::one());
    }

    #[test]
    fn test_negation() {
        let p = BigInt::from_u64(17);
        let a = FieldElement::from_u64(11, p.clone());
        assert_eq!((-&a).value(), &BigInt::from_u64(6));
        assert_eq!((&a + &(-&a)).value(), &BigInt::zero());

        let zero = FieldElement::zero_with_modulus(p);
        assert_eq!((-&zero).value(), &BigInt::zero());
    }

    #[test]
    fn test_exponentiation() {
        // 2^10 ≡ 1 (mod 11) by Fermat's Little Theorem
        let p = BigInt::from_u64(11);
        let a = FieldElement::from_u64(2, p.clone());
        assert_eq!(a.pow(&BigInt::from_u64(10)).value(), &BigInt::one());
        assert_eq!(a.pow(&BigInt::from_u64(5)).value(), &BigInt::from_u64(10));
    }

    #[test]
    fn test_reduction_at_construction() {
        let p = BigInt::from_u64(17);
        let a = FieldElement::from_u64(100, p);
        assert_eq!(a.value(), &BigInt::from_u64(15));
    }

    #[test]
    fn test_zero_has_no_inverse() {
        let p = BigInt::from_u64(17);
        let zero = FieldElement::zero_with_modulus(p);
        assert_eq!(zero.inv(), Err(Error::NoModularInverse));
    }

    #[test]
    #[should_panic(expected = "different moduli")]
    fn test_mixed_modulus_panics() {
        let a = FieldElement::from_u64(1, BigInt::from_u64(7));
        let b = FieldElement::from_u64(1, BigInt::from_u64(11));
        let _ = &a + &b;
    }
}
