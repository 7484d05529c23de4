//! Decimal-string curve definitions for interchange.
//!
//! Domain parameters enter and leave the system as decimal digit strings,
//! carried in JSON. Parsing is permissive at the string level (see
//! [`BigInt::from_decimal`]); numeric validation happens when a definition
//! is converted into [`DomainParameters`].

use crate::bigint::BigInt;
use crate::crypto::diffie_hellman::DomainParameters;
use crate::elliptic_curve::{EllipticCurve, Point};
use crate::error::Error;
use crate::field::FieldElement;
use serde::{Deserialize, Serialize};

/// A curve point as a pair of decimal strings
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PointDefinition {
    pub x: String,
    pub y: String,
}

/// A full curve definition with decimal-string numerals
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CurveDefinition {
    pub name: String,
    pub p: String,
    pub a: String,
    pub b: String,
    pub generator: PointDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl CurveDefinition {
    /// Parse and validate into domain parameters.
    pub fn to_params(&self) -> Result<DomainParameters, Error> {
        let p = BigInt::from_decimal(&self.p);
        if p < BigInt::from_u64(2) {
            return Err(Error::InvalidParameter(
                "field modulus must be at least 2".to_string(),
            ));
        }
        let a = FieldElement::new(BigInt::from_decimal(&self.a), p.clone());
        let b = FieldElement::new(BigInt::from_decimal(&self.b), p.clone());
        let curve = EllipticCurve::new(a, b)?;
        let gx = FieldElement::new(BigInt::from_decimal(&self.generator.x), p.clone());
        let gy = FieldElement::new(BigInt::from_decimal(&self.generator.y), p);
        let generator = curve.point(gx, gy)?;
        let order = self.order.as_ref().map(|s| BigInt::from_decimal(s));
        DomainParameters::new(curve, generator, order)
    }

    /// Render domain parameters back into a definition.
    pub fn from_params(name: &str, params: &DomainParameters) -> Self {
        let (gx, gy) = match params.generator() {
            Point::Affine { x, y } => (x.value().to_string(), y.value().to_string()),
            Point::Infinity => unreachable!("domain parameters always carry an affine generator"),
        };
        CurveDefinition {
            name: name.to_string(),
            p: params.curve().modulus().to_string(),
            a: params.curve().a().value().to_string(),
            b: params.curve().b().value().to_string(),
            generator: PointDefinition { x: gx, y: gy },
            order: params.order().map(|n| n.to_string()),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f17_definition() -> CurveDefinition {
        CurveDefinition {
            name: "F17".to_string(),
            p: "17".to_string(),
            a: "0".to_string(),
            b: "7".to_string(),
            generator: PointDefinition {
                x: "6".to_string(),
                y: "11".to_string(),
            },
            order: Some("18".to_string()),
        }
    }

    #[test]
    fn test_to_params() {
        let params = f17_definition().to_params().unwrap();
        assert_eq!(params.curve().modulus(), &BigInt::from_u64(17));
        assert_eq!(params.order(), Some(&BigInt::from_u64(18)));
        assert!(params.curve().is_on_curve(params.generator()));
    }

    #[test]
    fn test_round_trip_through_params() {
        let params = f17_definition().to_params().unwrap();
        let def = CurveDefinition::from_params("F17", &params);
        assert_eq!(def.p, "17");
        assert_eq!(def.a, "0");
        assert_eq!(def.b, "7");
        assert_eq!(def.generator.x, "6");
        assert_eq!(def.generator.y, "11");
        assert_eq!(def.order.as_deref(), Some("18"));
    }

    #[test]
    fn test_json_round_trip() {
        let def = f17_definition();
        let json = def.to_json().unwrap();
        let back = CurveDefinition::from_json(&json).unwrap();
        assert_eq!(back.name, def.name);
        assert_eq!(back.p, def.p);
        assert_eq!(back.generator.x, def.generator.x);
        assert_eq!(back.order, def.order);
    }

    #[test]
    fn test_bad_generator_rejected() {
        let mut def = f17_definition();
        def.generator.y = "12".to_string();
        assert_eq!(def.to_params().unwrap_err(), Error::PointNotOnCurve);
    }

    #[test]
    fn test_tiny_modulus_rejected() {
        let mut def = f17_definition();
        def.p = "1".to_string();
        assert!(matches!(def.to_params(), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_singular_definition_rejected() {
        let mut def = f17_definition();
        def.a = "0".to_string();
        def.b = "0".to_string();
        assert_eq!(def.to_params().unwrap_err(), Error::SingularCurve);
    }
}
