//! Classification of lookup targets.

use std::net::IpAddr;

/// A single lookup target, classified by shape.
///
/// An IP literal gets a direct host lookup; anything else is treated as a
/// hostname and goes through a `hostname:` search. This is a dispatch
/// decision, not a validator: malformed strings classify as hostnames and
/// the API decides what to do with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A valid IPv4 or IPv6 address literal
    Ip(String),
    /// Anything that does not parse as an IP address
    Hostname(String),
}

impl Target {
    /// Classify a raw target string.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        if raw.parse::<IpAddr>().is_ok() {
            Self::Ip(raw.to_string())
        } else {
            Self::Hostname(raw.to_string())
        }
    }

    /// The raw target string, as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ip(s) | Self::Hostname(s) => s,
        }
    }

    /// Returns true if this target is an IP address literal.
    #[must_use]
    pub const fn is_ip(&self) -> bool {
        matches!(self, Self::Ip(_))
    }
}
