//! # ECDH - Elliptic-Curve Diffie-Hellman over Prime Fields
//!
//! A from-scratch implementation of Diffie-Hellman key agreement on elliptic
//! curves over large prime fields, built on an arbitrary-precision decimal
//! integer type.
//!
//! ## Features
//!
//! - **Big Integer Arithmetic**: schoolbook decimal arithmetic with full
//!   long division, the foundation of every other component
//! - **Modular Inverse**: iterative extended Euclid plus a Fermat fast path
//! - **Prime Fields (𝔽_p)**: reduced-value field elements with operator sugar
//! - **Elliptic Curves**: short Weierstrass point groups with a tagged
//!   identity and double-and-add scalar multiplication
//! - **Key Exchange**: two-party shared-secret derivation with injected
//!   randomness
//! - **Serialization**: decimal-string curve definitions in JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use ecdh::{curves, BigInt, KeyExchangeParty};
//!
//! let params = curves::f17();
//! let mut alice =
//!     KeyExchangeParty::with_private_scalar(params.clone(), "Alice", BigInt::from_u64(3)).unwrap();
//! let mut bob =
//!     KeyExchangeParty::with_private_scalar(params, "Bob", BigInt::from_u64(5)).unwrap();
//!
//! let alice_public = alice.public_point().clone();
//! let bob_public = bob.public_point().clone();
//! assert_eq!(
//!     alice.derive_shared_secret(&bob_public).unwrap(),
//!     bob.derive_shared_secret(&alice_public).unwrap(),
//! );
//! ```
//!
//! ## Module Overview
//!
//! - [`bigint`] - Arbitrary precision unsigned decimal integers
//! - [`modular`] - Modular inverse routines
//! - [`field`] - Prime field arithmetic (𝔽_p)
//! - [`elliptic_curve`] - Curve point groups over prime fields
//! - [`crypto`] - Diffie-Hellman key exchange
//! - [`curves`] - Named domain parameters (NIST P-192, F17 demo curve)
//! - [`serialization`] - Decimal-string curve definitions

// Public modules
pub mod bigint;
pub mod crypto;
pub mod curves;
pub mod elliptic_curve;
pub mod error;
pub mod field;
pub mod modular;
pub mod serialization;

// Re-export commonly used types for convenience
pub use bigint::BigInt;
pub use crypto::diffie_hellman::{self, DomainParameters, KeyExchangeParty};
pub use elliptic_curve::{EllipticCurve, Point};
pub use error::Error;
pub use field::FieldElement;
pub use serialization::{CurveDefinition, PointDefinition};
