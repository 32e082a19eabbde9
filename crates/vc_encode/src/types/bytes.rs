use alloc::vec::Vec;
use core::ops::Deref;

use crate::Encode;
use crate::ops::EncodeRef;

/// A byte string, encoded as UTF-8 text.
///
/// Bytes that are not valid UTF-8 fail to encode.
///
/// ```
/// use vc_encode::types::Bytes;
///
/// assert_eq!(vc_encode::to_string(&Bytes::from("this is bytes")).unwrap(), r#""this is bytes""#);
/// assert!(vc_encode::to_string(&Bytes::from(vec![0xff, 0xfe])).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    #[inline]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for Bytes {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    #[inline]
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for Bytes {
    #[inline]
    fn from(value: &[u8]) -> Self {
        Self(value.into())
    }
}

impl From<&str> for Bytes {
    #[inline]
    fn from(value: &str) -> Self {
        Self(value.as_bytes().into())
    }
}

impl Encode for Bytes {
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        EncodeRef::Opaque
    }
}
