use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Encode;
use crate::ops::EncodeRef;

const MASK: &str = "**********";

fn mask(is_empty: bool) -> &'static str {
    if is_empty { "" } else { MASK }
}

// -----------------------------------------------------------------------------
// SecretStr

/// Text that is never shown.
///
/// `Display`, `Debug` and the JSON output all use a fixed ten asterisk
/// mask, or an empty string when the secret is empty. The value itself is
/// only reachable through [`expose_secret`](Self::expose_secret).
///
/// # Examples
///
/// ```
/// use vc_encode::types::SecretStr;
///
/// let password = SecretStr::new("hunter2");
/// assert_eq!(password.to_string(), "**********");
/// assert_eq!(format!("{password:?}"), "SecretStr('**********')");
/// assert_eq!(password.expose_secret(), "hunter2");
/// assert_eq!(SecretStr::new("").to_string(), "");
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SecretStr(String);

impl SecretStr {
    #[inline]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    #[inline]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The masked form written in place of the secret.
    #[inline]
    pub fn masked(&self) -> &'static str {
        mask(self.is_empty())
    }
}

impl fmt::Display for SecretStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.masked())
    }
}

impl fmt::Debug for SecretStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretStr('{}')", self.masked())
    }
}

impl From<String> for SecretStr {
    #[inline]
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretStr {
    #[inline]
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl Encode for SecretStr {
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        EncodeRef::Opaque
    }
}

// -----------------------------------------------------------------------------
// SecretBytes

/// A byte string that is never shown. See [`SecretStr`].
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SecretBytes(Vec<u8>);

impl SecretBytes {
    #[inline]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    #[inline]
    pub fn expose_secret(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn masked(&self) -> &'static str {
        mask(self.is_empty())
    }
}

impl fmt::Display for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.masked())
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes(b'{}')", self.masked())
    }
}

impl From<Vec<u8>> for SecretBytes {
    #[inline]
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for SecretBytes {
    #[inline]
    fn from(value: &[u8]) -> Self {
        Self(value.into())
    }
}

impl Encode for SecretBytes {
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        EncodeRef::Opaque
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;

    use super::{SecretBytes, SecretStr};

    #[test]
    fn mask_does_not_depend_on_length() {
        assert_eq!(SecretStr::new("a").masked(), "**********");
        assert_eq!(SecretStr::new("a".repeat(64)).masked(), "**********");
        assert_eq!(SecretStr::default().masked(), "");
    }

    #[test]
    fn bytes_are_masked() {
        let secret = SecretBytes::new(b"xyz".to_vec());
        assert_eq!(secret.to_string(), "**********");
        assert_eq!(format!("{secret:?}"), "SecretBytes(b'**********')");
        assert_eq!(secret.expose_secret(), b"xyz");
        assert_eq!(SecretBytes::from(&b""[..]).to_string(), "");
    }
}
