use crate::error::{BumpError, Result};
use std::fmt;

/// Index of the patch component in a normalized version.
const PATCH_INDEX: usize = 2;

/// A single non-negative version component.
///
/// Stored as its minimal decimal digits so components of any magnitude
/// survive a bump without overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component(String);

impl Component {
    pub fn zero() -> Self {
        Component("0".to_string())
    }

    /// Parse a token of ASCII digits, dropping leading zeros.
    fn parse(token: &str) -> Option<Self> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = token.trim_start_matches('0');
        if trimmed.is_empty() {
            Some(Component::zero())
        } else {
            Some(Component(trimmed.to_string()))
        }
    }

    /// Add one, carrying through the digits.
    fn increment(&self) -> Self {
        let mut digits = self.0.clone().into_bytes();
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                return Component(String::from_utf8_lossy(&digits).into_owned());
            }
        }
        // every digit was a 9
        digits.insert(0, b'1');
        Component(String::from_utf8_lossy(&digits).into_owned())
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dotted numeric version, normalized to at least major.minor.patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    components: Vec<Component>,
}

impl Version {
    /// Parse a dotted version string.
    ///
    /// Empty segments (stray dots) are skipped rather than read as zero, and
    /// the result is right-padded with zeros up to three components.
    /// Components past the third are kept as-is.
    pub fn parse(input: &str) -> Result<Self> {
        let mut components = input
            .trim()
            .split('.')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let token = part.trim();
                Component::parse(token).ok_or_else(|| BumpError::parse(token, input))
            })
            .collect::<Result<Vec<_>>>()?;

        while components.len() <= PATCH_INDEX {
            components.push(Component::zero());
        }

        Ok(Version { components })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Increment the patch component, leaving every other component alone.
    pub fn bump_patch(&self) -> Self {
        let mut components = self.components.clone();
        components[PATCH_INDEX] = components[PATCH_INDEX].increment();
        Version { components }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

/// Bumps the patch component of a version string.
///
/// # Example
/// ```ignore
/// assert_eq!(bump_patch("1.2.3").unwrap(), "1.2.4");
/// assert_eq!(bump_patch("1.2").unwrap(), "1.2.1");
/// assert_eq!(bump_patch("5").unwrap(), "5.0.1");
/// ```
pub fn bump_patch(version: &str) -> Result<String> {
    Ok(Version::parse(version)?.bump_patch().to_string())
}
