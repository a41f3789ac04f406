use serde::Serialize;
use std::fmt;

/// Because channel names can change, we address channels by their underlying
/// ID. This can be found in the UI by copying a link to the channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelId(pub String);

/// Format without the surrounding newtype wrapper.
impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_serialise_bare() {
        let x = ChannelId("C0123ABC".into());

        assert_eq!(format!("{}", x), "C0123ABC");
        assert_eq!(serde_json::to_string(&x).unwrap(), r#""C0123ABC""#);
    }
}
