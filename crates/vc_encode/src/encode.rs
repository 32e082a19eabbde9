use alloc::string::String;
use core::any::{Any, TypeId};

use crate::ops::EncodeRef;

// -----------------------------------------------------------------------------
// Encode

/// A value the dispatcher knows how to turn into JSON.
///
/// Implementors only describe their shape through [`encode_ref`]. The
/// dispatcher decides what to emit: registered encoders are consulted by
/// exact [`TypeId`] before the shape is looked at, so a type can report
/// [`EncodeRef::Opaque`] and still be encodable as long as some registry
/// knows about it.
///
/// # Recommendations
///
/// Use [the derive macro](crate::derive::Encode) for records, models and
/// unit enums. Foreign leaf types can be declared with
/// [`impl_encode_opaque`](crate::impl_encode_opaque).
///
/// # Type Identification
///
/// [`Any::type_id`] on a `Box<dyn Encode>` returns the id of the box.
/// Use [`ty_id`](Self::ty_id) on `dyn Encode` instead:
///
/// ```
/// use core::any::TypeId;
/// use vc_encode::Encode;
///
/// let x: Box<dyn Encode> = Box::new(32_i32);
/// assert_eq!(x.ty_id(), TypeId::of::<i32>());
/// ```
///
/// [`encode_ref`]: Encode::encode_ref
pub trait Encode: Any + AsEncode {
    /// Returns the shape of this value.
    fn encode_ref(&self) -> EncodeRef<'_>;

    /// Returns the full path of the concrete type.
    #[inline]
    fn type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Upcasts any sized [`Encode`] type to `&dyn Encode`.
///
/// Implemented for every sized `Encode` type, so wrappers such as
/// `Box<dyn Encode>` can reach the inner value.
pub trait AsEncode {
    fn as_encode(&self) -> &dyn Encode;
}

impl<T: Encode> AsEncode for T {
    #[inline(always)]
    fn as_encode(&self) -> &dyn Encode {
        self
    }
}

impl dyn Encode {
    /// Returns the [`TypeId`] of the underlying value.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        (self as &dyn Any).type_id()
    }

    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts to the concrete type.
    ///
    /// ```
    /// use vc_encode::Encode;
    ///
    /// let x: &dyn Encode = &10_u8;
    /// assert_eq!(x.downcast_ref::<u8>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u16>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// Returns the type name without module paths, as used in error
    /// messages.
    ///
    /// ```
    /// use vc_encode::Encode;
    ///
    /// let x: &dyn Encode = &vec![String::new()];
    /// assert_eq!(x.type_name(), "Vec<String>");
    /// ```
    #[inline]
    pub fn type_name(&self) -> String {
        short_type_name(self.type_path())
    }
}

/// Strips module paths from every segment of a type path, keeping
/// generic arguments.
pub fn short_type_name(full: &str) -> String {
    fn last_segment(path: &str) -> &str {
        path.rsplit("::").next().unwrap_or(path)
    }

    let mut out = String::with_capacity(full.len());
    let mut start = 0;
    for (index, c) in full.char_indices() {
        if matches!(c, '<' | '>' | '(' | ')' | '[' | ']' | ',' | ';' | ' ' | '&' | '*') {
            out.push_str(last_segment(&full[start..index]));
            out.push(c);
            start = index + c.len_utf8();
        }
    }
    out.push_str(last_segment(&full[start..]));
    out
}
