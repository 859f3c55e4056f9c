#![cfg(feature = "serde")]

use bigratio::Rational;
use num_bigint::BigInt;

fn pair_json(numer: i64, denom: i64) -> String {
    serde_json::to_string(&(BigInt::from(numer), BigInt::from(denom))).unwrap()
}

#[test]
fn serializes_as_pair() {
    let ratio = Rational::of(-6, 8).unwrap();
    assert_eq!(serde_json::to_string(&ratio).unwrap(), pair_json(-3, 4));
}

#[test]
fn deserializes_through_factory() {
    let ratio: Rational = serde_json::from_str(&pair_json(6, -8)).unwrap();
    assert_eq!(ratio, Rational::of(-3, 4).unwrap());

    let zero: Rational = serde_json::from_str(&pair_json(0, -5)).unwrap();
    assert_eq!(zero.to_string(), "0/-5");
}

#[test]
fn rejects_zero_denominator() {
    let err = serde_json::from_str::<Rational>(&pair_json(1, 0)).unwrap_err();
    assert!(err.to_string().contains("zero value denominator"));
}
