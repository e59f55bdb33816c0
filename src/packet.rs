use std::fmt;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Tree value, any JSON integer
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreeValue(#[serde(with = "json_bigint")] pub BigInt);

impl fmt::Display for TreeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for TreeValue {
    fn from(value: i64) -> Self {
        TreeValue(BigInt::from(value))
    }
}

#[derive(Debug, Serialize)]
pub struct HelloRes {
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct EncodeReq {
    #[serde(with = "json_bigint")]
    pub decimal: BigInt,
}

#[derive(Debug, Serialize)]
pub struct EncodeRes {
    #[serde(with = "json_bigint")]
    pub decimal: BigInt,
    pub encoded: String,
}

#[derive(Debug, Deserialize)]
pub struct DecodeReq {
    pub encoded: String,
}

#[derive(Debug, Serialize)]
pub struct DecodeRes {
    pub encoded: String,
    #[serde(with = "json_bigint")]
    pub decimal: BigInt,
}

#[derive(Debug, Deserialize)]
pub struct TreeReq {
    pub values: Vec<Option<TreeValue>>,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TreeRes {
    pub inorder: Vec<TreeValue>,
    pub ascii_tree: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorRes {
    pub detail: String,
}

/// Integers of any size as plain JSON numbers.
///
/// Relies on serde_json's `arbitrary_precision` feature so that a `Number`
/// keeps every digit it was given.
mod json_bigint {
    use num_bigint::BigInt;
    use serde::{de::Error as _, ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Number;

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        let number: Number = value.to_string().parse().map_err(S::Error::custom)?;
        number.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let number = Number::deserialize(deserializer)?;
        number
            .to_string()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected an integer, got {number}")))
    }
}
