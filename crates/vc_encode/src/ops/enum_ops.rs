use crate::Encode;

/// An enum member that stands for an associated value.
///
/// Encoded as its value, which is dispatched like any other value.
///
/// Implemented by `#[derive(Encode)]` on enums with unit variants.
pub trait EnumMember: Encode {
    /// Returns the variant name.
    fn member_name(&self) -> &str;

    /// Returns the associated value.
    fn member_value(&self) -> &dyn Encode;
}
