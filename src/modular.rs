//! Modular inverse over [`BigInt`](crate::bigint::BigInt).
//!
//! The primary routine is an iterative extended Euclidean algorithm that
//! stays entirely in non-negative residues by biasing with the modulus
//! whenever a coefficient update would go negative. A Fermat fast path for
//! prime moduli is kept alongside it.

use crate::bigint::BigInt;
use crate::error::Error;

/// Multiplicative inverse of `a` modulo `modulus` by the extended Euclidean
/// algorithm.
///
/// Returns `x` with `a * x ≡ 1 (mod modulus)` and `0 <= x < modulus`, or
/// `Error::NoModularInverse` when `gcd(a, modulus) != 1`. For a prime modulus
/// the error branch is only reachable with `a ≡ 0`, but it is always checked.
pub fn mod_inverse(a: &BigInt, modulus: &BigInt) -> Result<BigInt, Error> {
    let (_, mut newr) = a.div_rem(modulus)?;
    if newr.is_zero() {
        return Err(Error::NoModularInverse);
    }

    // Bezout coefficient for `a`, tracked as a residue in [0, modulus)
    let mut t = BigInt::zero();
    let mut newt = BigInt::one();
    let mut r = modulus.clone();

    while !newr.is_zero() {
        let (quotient, rem) = r.div_rem(&newr)?;
        r = std::mem::replace(&mut newr, rem);

        let qt = (&quotient * &newt).div_rem(modulus)?.1;
        // Bias by the modulus instead of going negative
        let next_t = if t >= qt {
            &t - &qt
        } else {
            modulus - &(&qt - &t)
        };
        t = std::mem::replace(&mut newt, next_t);
    }

    if !r.is_one() {
        return Err(Error::NoModularInverse);
    }
    Ok(t)
}

/// Fermat's-little-theorem inverse: `a^(modulus - 2) mod modulus`.
///
/// Valid only for a prime modulus; agreement with [`mod_inverse`] is pinned
/// by tests.
pub fn fermat_inverse(a: &BigInt, modulus: &BigInt) -> Result<BigInt, Error> {
    let (_, residue) = a.div_rem(modulus)?;
    if residue.is_zero() {
        return Err(Error::NoModularInverse);
    }
    let exponent = modulus
        .checked_sub(&BigInt::from_u64(2))
        .ok_or_else(|| Error::InvalidParameter("prime modulus must be at least 2".to_string()))?;
    residue.modpow(&exponent, modulus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_law_small_prime() {
        let p = BigInt::from_u64(17);
        for a in 1..17u64 {
            let a = BigInt::from_u64(a);
            let inv = mod_inverse(&a, &p).unwrap();
            let product = (&a * &inv).div_rem(&p).unwrap().1;
            assert_eq!(product, BigInt::one());
            assert!(inv < p);
        }
    }

    #[test]
    fn test_known_inverse() {
        // 5 * 7 = 35 ≡ 1 (mod 17)
        let inv = mod_inverse(&BigInt::from_u64(5), &BigInt::from_u64(17)).unwrap();
        assert_eq!(inv, BigInt::from_u64(7));
    }

    #[test]
    fn test_unreduced_input() {
        // 22 ≡ 5 (mod 17)
        let inv = mod_inverse(&BigInt::from_u64(22), &BigInt::from_u64(17)).unwrap();
        assert_eq!(inv, BigInt::from_u64(7));
    }

    #[test]
    fn test_no_inverse() {
        // gcd(6, 9) = 3
        assert_eq!(
            mod_inverse(&BigInt::from_u64(6), &BigInt::from_u64(9)),
            Err(Error::NoModularInverse)
        );
        // zero has no inverse
        assert_eq!(
            mod_inverse(&BigInt::zero(), &BigInt::from_u64(17)),
            Err(Error::NoModularInverse)
        );
    }

    #[test]
    fn test_euclid_fermat_agreement() {
        let p = BigInt::from_u64(17);
        for a in 1..17u64 {
            let a = BigInt::from_u64(a);
            assert_eq!(mod_inverse(&a, &p), fermat_inverse(&a, &p));
        }
    }

    #[test]
    fn test_euclid_fermat_agreement_large_prime() {
        // 2^31 - 1, a Mersenne prime
        let p = BigInt::from_decimal("2147483647");
        for a in [2u64, 65537, 1000000007] {
            let a = BigInt::from_u64(a);
            assert_eq!(mod_inverse(&a, &p), fermat_inverse(&a, &p));
        }
    }
}
