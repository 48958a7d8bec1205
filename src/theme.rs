use serde::de::{value, IntoDeserializer};
use serde::Deserialize;

/// Theme reported by the host device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Interpret the raw `colorScheme` value read from the host.
    ///
    /// Older hosts may not report a value at all, and nothing stops a host
    /// from sending something new. Both fall back to [`ColorScheme::Light`].
    pub fn from_host(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            tracing::warn!("host did not report a color scheme, assuming light");
            return Self::default();
        };

        let parsed: Result<Self, value::Error> = Self::deserialize(raw.into_deserializer());
        parsed.unwrap_or_else(|e| {
            tracing::warn!(raw, error = %e, "unknown host color scheme, assuming light");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_schemes() {
        assert_eq!(ColorScheme::from_host(Some("light")), ColorScheme::Light);
        assert_eq!(ColorScheme::from_host(Some("dark")), ColorScheme::Dark);
    }

    #[test]
    fn test_missing_scheme_defaults_to_light() {
        assert_eq!(ColorScheme::from_host(None), ColorScheme::Light);
    }

    #[test]
    fn test_unknown_scheme_defaults_to_light() {
        assert_eq!(ColorScheme::from_host(Some("sepia")), ColorScheme::Light);
        // Wire names are lowercase only
        assert_eq!(ColorScheme::from_host(Some("Dark")), ColorScheme::Light);
        assert_eq!(ColorScheme::from_host(Some("")), ColorScheme::Light);
    }
}
