//! Elliptic-curve Diffie-Hellman key agreement.
//!
//! Both parties share a set of [`DomainParameters`]. Each
//! [`KeyExchangeParty`] draws a private scalar, publishes
//! `public_point = [private]G`, and derives the shared secret as
//! `[private]peer_public`. Scalar multiplication commutes in the abelian
//! point group, so both parties obtain the same point.

use crate::bigint::BigInt;
use crate::elliptic_curve::{EllipticCurve, Point};
use crate::error::Error;
use log::{debug, warn};
use rand::Rng;

/// Shared curve configuration for an exchange: the curve, an affine
/// generator on it, and optionally the group order.
#[derive(Clone, Debug)]
pub struct DomainParameters {
    curve: EllipticCurve,
    generator: Point,
    order: Option<BigInt>,
}

impl DomainParameters {
    /// Validate and bundle domain parameters.
    ///
    /// The generator must be an affine point on the curve, and the order,
    /// when given, must be at least 2.
    pub fn new(
        curve: EllipticCurve,
        generator: Point,
        order: Option<BigInt>,
    ) -> Result<Self, Error> {
        if generator.is_identity() {
            return Err(Error::InvalidParameter(
                "generator must be an affine point".to_string(),
            ));
        }
        if !curve.is_on_curve(&generator) {
            return Err(Error::PointNotOnCurve);
        }
        if let Some(n) = &order {
            if *n < BigInt::from_u64(2) {
                return Err(Error::InvalidParameter(
                    "group order must be at least 2".to_string(),
                ));
            }
        }
        Ok(Self {
            curve,
            generator,
            order,
        })
    }

    pub fn curve(&self) -> &EllipticCurve {
        &self.curve
    }

    pub fn generator(&self) -> &Point {
        &self.generator
    }

    pub fn order(&self) -> Option<&BigInt> {
        self.order.as_ref()
    }

    /// Exclusive upper bound for private scalars: the group order when known,
    /// the field modulus otherwise.
    pub fn scalar_bound(&self) -> &BigInt {
        match &self.order {
            Some(n) => n,
            None => self.curve.modulus(),
        }
    }
}

/// Draw a scalar uniformly from `[1, bound - 1]` by rejection sampling.
///
/// Candidates are built digit by digit to the width of `bound` and rejected
/// until one lands in range, so the distribution stays uniform.
///
/// # Panics
///
/// Panics if `bound` is less than 2 (the range would be empty).
pub fn random_scalar<R: Rng>(bound: &BigInt, rng: &mut R) -> BigInt {
    assert!(
        *bound > BigInt::one(),
        "scalar bound must be greater than 1"
    );
    loop {
        let mut candidate = BigInt::zero();
        for _ in 0..bound.digit_count() {
            candidate = candidate.push_digit(rng.random_range(0..10u8));
        }
        if !candidate.is_zero() && candidate < *bound {
            return candidate;
        }
    }
}

/// One side of a Diffie-Hellman exchange.
///
/// The private scalar is fixed at construction and never exposed; the public
/// point is derived once from the generator.
#[derive(Clone, Debug)]
pub struct KeyExchangeParty {
    label: String,
    params: DomainParameters,
    private_scalar: BigInt,
    public_point: Point,
    shared_secret: Option<Point>,
}

impl KeyExchangeParty {
    /// Create a party with a private scalar drawn from the supplied
    /// randomness source, uniform over the full scalar range `[1, n - 1]`.
    pub fn new<R: Rng>(
        params: DomainParameters,
        label: &str,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if *params.scalar_bound() < BigInt::from_u64(2) {
            return Err(Error::InvalidParameter(
                "scalar bound must be at least 2".to_string(),
            ));
        }
        let private_scalar = random_scalar(params.scalar_bound(), rng);
        Self::with_private_scalar(params, label, private_scalar)
    }

    /// Create a party with a fixed private scalar. Used by tests and
    /// known-answer demos; rejects scalars outside `[1, bound - 1]`.
    pub fn with_private_scalar(
        params: DomainParameters,
        label: &str,
        private_scalar: BigInt,
    ) -> Result<Self, Error> {
        if private_scalar.is_zero() || private_scalar >= *params.scalar_bound() {
            return Err(Error::InvalidParameter(format!(
                "private scalar for {} is out of range",
                label
            )));
        }
        let public_point = params.curve().scalar_mul(params.generator(), &private_scalar)?;
        debug!("{}: derived public point {}", label, public_point);
        Ok(Self {
            label: label.to_string(),
            params,
            private_scalar,
            public_point,
            shared_secret: None,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn params(&self) -> &DomainParameters {
        &self.params
    }

    pub fn public_point(&self) -> &Point {
        &self.public_point
    }

    pub fn shared_secret(&self) -> Option<&Point> {
        self.shared_secret.as_ref()
    }

    /// Derive and store the shared secret from the peer's public point.
    ///
    /// The peer point is checked against the curve equation first. An
    /// identity peer point is mathematically accepted (the secret becomes the
    /// identity) but logged, since it yields a degenerate exchange.
    pub fn derive_shared_secret(&mut self, peer: &Point) -> Result<&Point, Error> {
        if !self.params.curve().is_on_curve(peer) {
            return Err(Error::PointNotOnCurve);
        }
        if peer.is_identity() {
            warn!("{}: peer public key is the identity point", self.label);
        }
        let secret = self.params.curve().scalar_mul(peer, &self.private_scalar)?;
        debug!("{}: derived shared secret {}", self.label, secret);
        Ok(self.shared_secret.insert(secret))
    }

    /// The demo output line, in the literal form
    /// `sharedKey of <label> : (<x>, <y>)`. `None` before any exchange.
    pub fn shared_key_line(&self) -> Option<String> {
        self.shared_secret
            .as_ref()
            .map(|secret| format!("sharedKey of {} : {}", self.label, secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldElement;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fe(v: u64) -> FieldElement {
        FieldElement::from_u64(v, BigInt::from_u64(17))
    }

    /// y² = x³ + 7 over F_17, generator (6, 11) of order 18
    fn f17_params() -> DomainParameters {
        let curve = EllipticCurve::new(fe(0), fe(7)).unwrap();
        let generator = curve.point(fe(6), fe(11)).unwrap();
        DomainParameters::new(curve, generator, Some(BigInt::from_u64(18))).unwrap()
    }

    #[test]
    fn test_domain_parameter_validation() {
        let curve = EllipticCurve::new(fe(0), fe(7)).unwrap();
        assert!(matches!(
            DomainParameters::new(curve.clone(), Point::Infinity, None),
            Err(Error::InvalidParameter(_))
        ));
        let off_curve = Point::Affine { x: fe(6), y: fe(12) };
        assert_eq!(
            DomainParameters::new(curve.clone(), off_curve, None).unwrap_err(),
            Error::PointNotOnCurve
        );
        let generator = curve.point(fe(6), fe(11)).unwrap();
        assert!(matches!(
            DomainParameters::new(curve, generator, Some(BigInt::one())),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_scalar_bound_fallback() {
        let params = f17_params();
        assert_eq!(params.scalar_bound(), &BigInt::from_u64(18));

        let curve = params.curve().clone();
        let generator = params.generator().clone();
        let without_order = DomainParameters::new(curve, generator, None).unwrap();
        assert_eq!(without_order.scalar_bound(), &BigInt::from_u64(17));
    }

    #[test]
    fn test_random_scalar_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let bound = BigInt::from_u64(18);
        for _ in 0..100 {
            let k = random_scalar(&bound, &mut rng);
            assert!(!k.is_zero());
            assert!(k < bound);
        }
    }

    #[test]
    fn test_private_scalar_range_enforced() {
        assert!(matches!(
            KeyExchangeParty::with_private_scalar(f17_params(), "Alice", BigInt::zero()),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            KeyExchangeParty::with_private_scalar(f17_params(), "Alice", BigInt::from_u64(18)),
            Err(Error::InvalidParameter(_))
        ));
        assert!(
            KeyExchangeParty::with_private_scalar(f17_params(), "Alice", BigInt::from_u64(17))
                .is_ok()
        );
    }

    #[test]
    fn test_public_point_of_unit_scalar_is_generator() {
        let params = f17_params();
        let generator = params.generator().clone();
        let party = KeyExchangeParty::with_private_scalar(params, "Alice", BigInt::one()).unwrap();
        assert_eq!(party.public_point(), &generator);
    }

    #[test]
    fn test_known_answer_exchange() {
        let mut alice =
            KeyExchangeParty::with_private_scalar(f17_params(), "Alice", BigInt::from_u64(3))
                .unwrap();
        let mut bob =
            KeyExchangeParty::with_private_scalar(f17_params(), "Bob", BigInt::from_u64(5))
                .unwrap();

        let alice_public = alice.public_point().clone();
        let bob_public = bob.public_point().clone();

        // [3][5]G = [15]G = (8, 14)
        let expected = Point::Affine { x: fe(8), y: fe(14) };
        assert_eq!(alice.derive_shared_secret(&bob_public).unwrap(), &expected);
        assert_eq!(bob.derive_shared_secret(&alice_public).unwrap(), &expected);

        assert_eq!(
            alice.shared_key_line().unwrap(),
            "sharedKey of Alice : (8, 14)"
        );
        assert_eq!(bob.shared_key_line().unwrap(), "sharedKey of Bob : (8, 14)");
    }

    #[test]
    fn test_exchange_with_rng_drawn_scalars() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut alice = KeyExchangeParty::new(f17_params(), "Alice", &mut rng).unwrap();
        let mut bob = KeyExchangeParty::new(f17_params(), "Bob", &mut rng).unwrap();

        let alice_public = alice.public_point().clone();
        let bob_public = bob.public_point().clone();

        let a = alice.derive_shared_secret(&bob_public).unwrap().clone();
        let b = bob.derive_shared_secret(&alice_public).unwrap().clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_off_curve_peer_rejected() {
        let mut alice =
            KeyExchangeParty::with_private_scalar(f17_params(), "Alice", BigInt::from_u64(3))
                .unwrap();
        let bogus = Point::Affine { x: fe(6), y: fe(12) };
        assert_eq!(
            alice.derive_shared_secret(&bogus).unwrap_err(),
            Error::PointNotOnCurve
        );
        assert!(alice.shared_secret().is_none());
        assert!(alice.shared_key_line().is_none());
    }

    #[test]
    fn test_identity_peer_accepted() {
        let mut alice =
            KeyExchangeParty::with_private_scalar(f17_params(), "Alice", BigInt::from_u64(3))
                .unwrap();
        let secret = alice.derive_shared_secret(&Point::Infinity).unwrap();
        assert!(secret.is_identity());
        assert_eq!(
            alice.shared_key_line().unwrap(),
            "sharedKey of Alice : infinity"
        );
    }
}
