//! Deserialisation helpers for upstream APIs which tag success with a bool.

use serde::de::{Deserialize, Deserializer, Error};

/// Accept only `true`, so that an untagged enum can fall through to its error
/// variant on `"ok": false`.
pub fn only_true<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    expect_bool(deserializer, true)
}

/// Accept only `false`. The mirror image of [only_true].
pub fn only_false<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    expect_bool(deserializer, false)
}

fn expect_bool<'a, D>(deserializer: D, expected: bool) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    let b = bool::deserialize(deserializer)?;

    if b == expected {
        Ok(b)
    } else {
        Err(Error::custom(format!("invalid bool: {}", b)))
    }
}
