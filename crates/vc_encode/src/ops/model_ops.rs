use crate::Encode;
use crate::ops::Record;
use crate::registry::ModelConfig;

/// A [`Record`] meant for external representation.
///
/// On top of the record behavior, a model carries a [`ModelConfig`]:
/// while the dispatcher walks the inside of a model, the model's
/// type-declared encoders take precedence over the built-in ones.
///
/// A model with a custom root stands for a single value. It is encoded as
/// that value rather than as an object.
///
/// Implemented by `#[derive(Encode)]` with `#[encode(model)]`.
pub trait Model: Record {
    /// Returns the configuration shared by all instances of the type.
    fn model_config(&self) -> &ModelConfig {
        ModelConfig::empty()
    }

    /// Returns the root value of a custom-root model.
    fn custom_root(&self) -> Option<&dyn Encode> {
        None
    }
}
