use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;

use crate::Encode;
use crate::ops::EncodeRef;

macro_rules! impl_encode_int {
    ($variant:ident => $($ty:ty),+) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn encode_ref(&self) -> EncodeRef<'_> {
                    EncodeRef::$variant((*self).into())
                }
            }
        )+
    };
}

impl_encode_int!(I64 => i8, i16, i32, i64);
impl_encode_int!(U64 => u8, u16, u32, u64);
impl_encode_int!(F64 => f32, f64);

impl Encode for isize {
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        EncodeRef::I64(*self as i64)
    }
}

impl Encode for usize {
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        EncodeRef::U64(*self as u64)
    }
}

impl Encode for bool {
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        EncodeRef::Bool(*self)
    }
}

impl Encode for () {
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        EncodeRef::Null
    }
}

macro_rules! impl_encode_serde {
    ($($ty:ty),+) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn encode_ref(&self) -> EncodeRef<'_> {
                    EncodeRef::Serde(self)
                }
            }
        )+
    };
}

impl_encode_serde!(char, i128, u128);

impl Encode for &'static str {
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        EncodeRef::Str(self)
    }
}

impl Encode for String {
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        EncodeRef::Str(self)
    }
}

impl Encode for Cow<'static, str> {
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        EncodeRef::Str(self)
    }
}

impl Encode for serde_json::Value {
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        EncodeRef::Json(self)
    }
}

impl<T: Encode> Encode for Option<T> {
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        match self {
            Some(value) => EncodeRef::Transparent(value),
            None => EncodeRef::Null,
        }
    }
}

macro_rules! impl_encode_pointer {
    ($($ptr:ident),+) => {
        $(
            impl<T: ?Sized + Encode> Encode for $ptr<T> {
                #[inline]
                fn encode_ref(&self) -> EncodeRef<'_> {
                    EncodeRef::Transparent((**self).as_encode())
                }

                #[inline]
                fn type_path(&self) -> &'static str {
                    (**self).type_path()
                }
            }
        )+
    };
}

impl_encode_pointer!(Box, Rc, Arc);

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Encode;
    use crate::ops::{EncodeKind, EncodeRef};

    #[test]
    fn natives() {
        assert!(matches!(7_u8.encode_ref(), EncodeRef::U64(7)));
        assert!(matches!((-7_i16).encode_ref(), EncodeRef::I64(-7)));
        assert!(matches!(1.5_f32.encode_ref(), EncodeRef::F64(v) if v == 1.5));
        assert!(matches!(String::from("a").encode_ref(), EncodeRef::Str("a")));
        assert!(matches!(().encode_ref(), EncodeRef::Null));
        assert_eq!('x'.encode_ref().kind(), EncodeKind::Serde);
    }

    #[test]
    fn wrappers() {
        assert_eq!(None::<u8>.encode_ref().kind(), EncodeKind::Null);
        assert_eq!(Some(1_u8).encode_ref().kind(), EncodeKind::Transparent);

        let boxed: Box<dyn Encode> = Box::new(3_u8);
        let EncodeRef::Transparent(inner) = boxed.encode_ref() else {
            panic!("expected a transparent box");
        };
        assert!(inner.is::<u8>());
        assert_eq!(boxed.type_path(), "u8");
    }
}
