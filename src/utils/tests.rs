use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::expression::ValueStack;
use crate::generator::ExpressionGenerator;
use crate::utils::{UtilsError, epsilon_for_precision, parse_target, write_samples};

#[test]
fn test_parse_target_named() {
    assert!(matches!(parse_target("pi"), Ok(v) if v == std::f64::consts::PI));
    assert!(matches!(parse_target("PI"), Ok(v) if v == std::f64::consts::PI));
    assert!(matches!(parse_target("e"), Ok(v) if v == std::f64::consts::E));
    assert!(matches!(parse_target("phi"), Ok(v) if (v - (1.0 + 5_f64.sqrt()) / 2.0).abs() < 1e-15));
}

#[test]
fn test_parse_target_numeric() {
    assert!(matches!(parse_target("42.5"), Ok(v) if v == 42.5));
    assert!(matches!(parse_target("-0.125"), Ok(v) if v == -0.125));
}

#[test]
fn test_parse_target_invalid() {
    assert!(matches!(
        parse_target("golden"),
        Err(UtilsError::UnknownTarget(name)) if name == "golden"
    ));
}

#[test]
fn test_epsilon_for_precision() {
    assert_eq!(epsilon_for_precision(0), 1.0);
    assert!((epsilon_for_precision(3) - 0.001).abs() < 1e-18);
    assert_eq!(epsilon_for_precision(-2), 100.0);
}

#[test]
fn test_write_samples_csv() {
    let mut generator = ExpressionGenerator::with_default_range(ChaCha20Rng::seed_from_u64(11));
    let mut out = Vec::new();

    let result = write_samples(&mut out, &mut generator, 25, 5);
    assert!(result.is_ok());

    let text = String::from_utf8(out).unwrap_or_default();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("num,expression"));

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 25);
    for row in rows {
        let Some((num, expression)) = row.split_once(',') else {
            panic!("malformed row {:?}", row);
        };
        let parsed = ValueStack::parse(expression);
        assert!(parsed.is_ok(), "unparseable expression {:?}", expression);
        if let Ok(parsed) = parsed {
            assert!(parsed.is_valid());
            assert_eq!(parsed.evaluate().to_string(), num);
        }
    }
}
