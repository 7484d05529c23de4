//! Named domain parameters.

use crate::crypto::diffie_hellman::DomainParameters;
use crate::serialization::{CurveDefinition, PointDefinition};
use once_cell::sync::OnceCell;

static P192: OnceCell<DomainParameters> = OnceCell::new();

/// NIST P-192 domain parameters, parsed and validated once.
pub fn p192() -> &'static DomainParameters {
    P192.get_or_init(|| {
        CurveDefinition {
            name: "P-192".to_string(),
            p: "6277101735386680763835789423207666416083908700390324961279".to_string(),
            a: "6277101735386680763835789423207666416083908700390324961276".to_string(),
            b: "2455155546008943817740293915197451784769108058161191238065".to_string(),
            generator: PointDefinition {
                x: "602046282375688656758213480587526111916698976636884684818".to_string(),
                y: "174050332293622031404857552280219410364023488927386650641".to_string(),
            },
            order: Some(
                "6277101735386680763835789423176059013767194773182842284081".to_string(),
            ),
        }
        .to_params()
        .expect("NIST P-192 parameters are valid")
    })
}

/// The small demonstration curve y² = x³ + 7 over F_17 with generator
/// (6, 11) of order 18. Small enough for exhaustive point enumeration.
pub fn f17() -> DomainParameters {
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
    .to_params()
    .expect("F17 demo parameters are valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::BigInt;

    #[test]
    fn test_p192_generator_is_on_curve() {
        let params = p192();
        assert!(params.curve().is_on_curve(params.generator()));
        assert_eq!(params.curve().modulus().digit_count(), 58);
    }

    #[test]
    fn test_p192_is_cached() {
        assert!(std::ptr::eq(p192(), p192()));
    }

    #[test]
    fn test_f17_parameters() {
        let params = f17();
        assert_eq!(params.curve().modulus(), &BigInt::from_u64(17));
        assert_eq!(params.order(), Some(&BigInt::from_u64(18)));
        assert!(params.curve().is_on_curve(params.generator()));
    }
}
