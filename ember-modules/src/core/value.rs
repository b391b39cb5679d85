// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/ember/blob/main/licenses/COPYRIGHT.md

//! Scalar values carried by module parameters and constructor arguments.

use std::fmt;

use alloy_primitives::U256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A base-unit integer amount or an opaque identifier such as an address.
///
/// Amounts are 256-bit, wide enough for 10^18-scaled token and coin
/// quantities. Strings pass through untouched; checksum or format validation
/// of addresses belongs to the execution engine.
///
/// On the wire, a plain integer or a string of only decimal digits is an
/// amount (the digit-string form is how anything past the 64-bit range of
/// TOML and JSON integers is written); every other string stays opaque, so
/// `0x…` addresses survive verbatim. Amounts serialize back as decimal
/// strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Uint(U256),
    String(String),
}

impl Value {
    pub fn uint<T>(value: T) -> Self
    where
        U256: alloy_primitives::ruint::UintTryFrom<T>,
    {
        Self::Uint(U256::from(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn as_uint(&self) -> Option<U256> {
        match self {
            Self::Uint(amount) => Some(*amount),
            Self::String(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Uint(amount) => amount.fmt(f),
            Self::String(text) => text.fmt(f),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Uint(amount) => serializer.serialize_str(&amount.to_string()),
            Self::String(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl de::Visitor<'_> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an unsigned integer or a string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Uint(U256::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        u64::try_from(v)
            .map(|v| Value::Uint(U256::from(v)))
            .map_err(|_| E::custom("amounts must not be negative"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        if !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()) {
            U256::from_str_radix(v, 10)
                .map(Value::Uint)
                .map_err(|_| E::custom(format!("amount does not fit in 256 bits: {v}")))
        } else {
            Ok(Value::String(v.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Holder {
        value: Value,
    }

    #[test]
    fn integers_deserialize_as_amounts() {
        let holder: Holder = toml::from_str("value = 1000000").unwrap();
        assert_eq!(holder.value, Value::uint(1_000_000u64));
    }

    #[test]
    fn digit_strings_deserialize_as_amounts() {
        // 1,000,000 tokens at 18 decimals, past the range of a TOML integer.
        let holder: Holder = toml::from_str(r#"value = "1000000000000000000000000""#).unwrap();
        let expected = U256::from(10).pow(U256::from(18)) * U256::from(1_000_000u64);
        assert_eq!(holder.value, Value::Uint(expected));
    }

    #[test]
    fn addresses_stay_opaque_strings() {
        let holder: Holder =
            toml::from_str(r#"value = "0xEC824d6122f5D63A41Cb6AB8839362f342e2b35F""#).unwrap();
        assert_eq!(
            holder.value,
            Value::string("0xEC824d6122f5D63A41Cb6AB8839362f342e2b35F"),
        );
    }

    #[test]
    fn negative_integers_are_rejected() {
        toml::from_str::<Holder>("value = -5").unwrap_err();
    }

    #[test]
    fn oversized_digit_strings_are_rejected() {
        // 79 digits, one past what 256 bits can hold.
        let overflowing = "9".repeat(79);
        toml::from_str::<Holder>(&format!(r#"value = "{overflowing}""#)).unwrap_err();
    }

    #[test]
    fn amounts_serialize_as_decimal_strings() {
        let json = serde_json::to_string(&Value::uint(42u64)).unwrap();
        assert_eq!(json, r#""42""#);
        let json = serde_json::to_string(&Value::string("0xabc")).unwrap();
        assert_eq!(json, r#""0xabc""#);
    }
}
