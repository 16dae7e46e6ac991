use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

/// Kilometres.
pub type Distance = Decimal;
pub type Money = Decimal;

pub const DISTANCE_SCALE: u32 = 3;
pub const MONEY_SCALE: u32 = 2;
pub const SURCHARGE_SCALE: u32 = 4;

/// Rounds to `scale` fractional digits with banker's rounding. The result always
/// carries exactly `scale` digits, so `54.3` rounded to 2 becomes `54.30`.
pub fn round_half_even(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(scale);
    rounded
}

/// Decodes a JSON number through its shortest textual form, so `6.062` becomes
/// exactly `6.062` instead of the nearest binary float.
pub fn deserialize_number<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    let text = number.to_string();

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(serde::de::Error::custom)
}

/// Writes the decimal as a raw JSON number token, keeping its scale (`54.30`).
pub fn serialize_number<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let raw = RawValue::from_string(value.to_string()).map_err(serde::ser::Error::custom)?;
    raw.serialize(serializer)
}

pub fn serialize_optional_number<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serialize_number(value, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[test]
    fn test_round_half_even_rounds_midpoints_to_even() {
        assert_eq!(round_half_even(dec!(0.125), 2), dec!(0.12));
        assert_eq!(round_half_even(dec!(0.175), 2), dec!(0.18));
        assert_eq!(round_half_even(dec!(1.0005), 3), dec!(1.000));
        assert_eq!(round_half_even(dec!(1.0015), 3), dec!(1.002));
        assert_eq!(round_half_even(dec!(3.5155), 2), dec!(3.52));
    }

    #[test]
    fn test_round_half_even_pads_scale() {
        assert_eq!(round_half_even(dec!(54.3), 2).to_string(), "54.30");
        assert_eq!(round_half_even(dec!(0), 3).to_string(), "0.000");
        assert_eq!(round_half_even(dec!(109.2149), 3).to_string(), "109.215");
    }

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "deserialize_number")]
        value: Decimal,
    }

    #[test]
    fn test_deserialize_number_keeps_decimal_text() {
        let wrapper: Wrapper = serde_json::from_str(r#"{ "value": 6.062 }"#).unwrap();
        assert_eq!(wrapper.value.to_string(), "6.062");

        let wrapper: Wrapper = serde_json::from_str(r#"{ "value": 4 }"#).unwrap();
        assert_eq!(wrapper.value, dec!(4));

        let wrapper: Wrapper = serde_json::from_str(r#"{ "value": 1e-3 }"#).unwrap();
        assert_eq!(wrapper.value, dec!(0.001));
    }

    #[test]
    fn test_deserialize_number_rejects_strings() {
        let result = serde_json::from_str::<Wrapper>(r#"{ "value": "6.062" }"#);
        assert!(result.is_err());
    }

    #[derive(Serialize)]
    struct Output {
        #[serde(serialize_with = "serialize_number")]
        amount: Decimal,
        #[serde(
            skip_serializing_if = "Option::is_none",
            serialize_with = "serialize_optional_number"
        )]
        extra: Option<Decimal>,
    }

    #[test]
    fn test_serialize_number_keeps_scale() {
        let output = Output {
            amount: round_half_even(dec!(54.3), 2),
            extra: None,
        };
        assert_eq!(serde_json::to_string(&output).unwrap(), r#"{"amount":54.30}"#);

        let output = Output {
            amount: dec!(1.5),
            extra: Some(dec!(0.250)),
        };
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"amount":1.5,"extra":0.250}"#
        );
    }
}
