//! GLSL Version Resolution
//!
//! Turns the raw `GL_SHADING_LANGUAGE_VERSION` string reported by a driver
//! into a `#version` directive, clamped to the newest language revision the
//! generated shaders rely on.

use crate::errors::{Result, ShaderGenError};

/// Highest desktop GLSL revision emitted (4.30).
pub const DESKTOP_CEILING: GlslVersion = GlslVersion::new(4, 30, false);

/// Highest GLSL ES revision emitted (3.20).
pub const ES_CEILING: GlslVersion = GlslVersion::new(3, 20, true);

/// Version used when the desktop driver string is unparsable (1.30).
pub const DESKTOP_FALLBACK: GlslVersion = GlslVersion::new(1, 30, false);

/// Version used when the ES driver string is unparsable (3.00).
pub const ES_FALLBACK: GlslVersion = GlslVersion::new(3, 0, true);

/// A shading-language revision, e.g. `4.30` or `3.00 es`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlslVersion {
    pub major: u32,
    pub minor: u32,
    pub es: bool,
}

impl GlslVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32, es: bool) -> Self {
        Self { major, minor, es }
    }

    /// Parses a driver version string.
    ///
    /// Leading non-digit characters are skipped (drivers commonly report
    /// `"OpenGL ES GLSL ES 3.20"`), then `major.minor` is read. Anything
    /// after the minor number is ignored.
    pub fn parse(raw: &str, es: bool) -> Result<Self> {
        let start = raw.find(|c: char| c.is_ascii_digit()).unwrap_or(raw.len());
        let rest = &raw[start..];

        let invalid = || ShaderGenError::InvalidVersionString {
            raw: raw.to_string(),
        };

        let (major_text, rest) = split_leading_digits(rest);
        let rest = rest.strip_prefix('.').ok_or_else(invalid)?;
        let (minor_text, _) = split_leading_digits(rest);

        let major = major_text.parse().map_err(|_| invalid())?;
        let minor = minor_text.parse().map_err(|_| invalid())?;

        Ok(Self::new(major, minor, es))
    }

    /// Clamps to `ceiling` when this version is newer.
    #[must_use]
    pub fn clamped_to(self, ceiling: Self) -> Self {
        if (self.major, self.minor) > (ceiling.major, ceiling.minor) {
            Self::new(ceiling.major, ceiling.minor, self.es)
        } else {
            self
        }
    }

    /// Resolves the directive version for a raw driver string.
    ///
    /// Never fails: an unparsable string is logged and replaced by the
    /// dialect's fallback version.
    #[must_use]
    pub fn resolve(raw: Option<&str>, es: bool) -> Self {
        let (ceiling, fallback) = if es {
            (ES_CEILING, ES_FALLBACK)
        } else {
            (DESKTOP_CEILING, DESKTOP_FALLBACK)
        };

        match Self::parse(raw.unwrap_or_default(), es) {
            Ok(version) => version.clamped_to(ceiling),
            Err(err) => {
                log::error!("{err}, falling back to {}", fallback.directive());
                fallback
            }
        }
    }

    /// Formats the `#version` line, e.g. `#version 330` or `#version 320 es`.
    ///
    /// The `es` suffix only exists from GLSL ES 3.00 onwards.
    #[must_use]
    pub fn directive(&self) -> String {
        let suffix = if self.es && self.major >= 3 { " es" } else { "" };
        format!("#version {}{:02}{}", self.major, self.minor, suffix)
    }
}

fn split_leading_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_vendor_prefix() {
        let v = GlslVersion::parse("OpenGL ES GLSL ES 3.10", true).unwrap();
        assert_eq!(v, GlslVersion::new(3, 10, true));
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        let v = GlslVersion::parse("4.60 NVIDIA", false).unwrap();
        assert_eq!((v.major, v.minor), (4, 60));
    }

    #[test]
    fn test_parse_rejects_missing_minor() {
        assert!(GlslVersion::parse("4", false).is_err());
        assert!(GlslVersion::parse("4.", false).is_err());
        assert!(GlslVersion::parse("", false).is_err());
    }

    #[test]
    fn test_clamp() {
        let v = GlslVersion::new(4, 60, false).clamped_to(DESKTOP_CEILING);
        assert_eq!(v.directive(), "#version 430");

        let v = GlslVersion::new(3, 30, false).clamped_to(DESKTOP_CEILING);
        assert_eq!(v.directive(), "#version 330");
    }

    #[test]
    fn test_directive_es_suffix() {
        assert_eq!(GlslVersion::new(3, 20, true).directive(), "#version 320 es");
        assert_eq!(GlslVersion::new(1, 0, true).directive(), "#version 100");
    }

    #[test]
    fn test_resolve_fallback() {
        assert_eq!(GlslVersion::resolve(Some("garbage"), false).directive(), "#version 130");
        assert_eq!(GlslVersion::resolve(None, true).directive(), "#version 300 es");
    }
}
