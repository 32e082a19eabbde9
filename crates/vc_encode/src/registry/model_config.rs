use serde_json::Value;

use crate::registry::Encoders;
use crate::{Encode, EncodeError};

/// The configuration of a model type.
///
/// Its `json_encoders` apply to every value found while encoding the
/// inside of the model, nested models included, unless a call-scoped or a
/// closer model's encoder claims the type first. A universal override set
/// on the call replaces them.
///
/// Configurations are not inherited. A derived configuration starts from
/// a clone of its parent:
///
/// ```
/// use core::time::Duration;
/// use serde_json::Value;
/// use vc_encode::registry::ModelConfig;
///
/// fn base() -> ModelConfig {
///     ModelConfig::new().json_encoder::<Duration>(|d| Ok(Value::from(d.as_millis() as u64)))
/// }
///
/// let child = base().json_encoder::<bool>(|b| Ok(Value::from(u8::from(*b))));
/// assert_eq!(child.json_encoders().len(), 2);
/// ```
#[derive(Clone, Default, Debug)]
pub struct ModelConfig {
    json_encoders: Encoders,
}

impl ModelConfig {
    /// Creates a configuration without encoders.
    #[inline]
    pub const fn new() -> Self {
        Self {
            json_encoders: Encoders::new(),
        }
    }

    /// A shared empty configuration.
    #[inline]
    pub fn empty() -> &'static ModelConfig {
        static EMPTY: ModelConfig = ModelConfig::new();
        &EMPTY
    }

    /// Adds every encoder of `encoders`, replacing existing ones for the
    /// same types.
    #[inline]
    pub fn with_json_encoders(mut self, encoders: Encoders) -> Self {
        self.json_encoders.extend(&encoders);
        self
    }

    /// Adds an encoder for `T`.
    #[inline]
    pub fn json_encoder<T: Encode>(
        mut self,
        func: impl Fn(&T) -> Result<Value, EncodeError> + Send + Sync + 'static,
    ) -> Self {
        self.json_encoders.insert::<T>(func);
        self
    }

    /// The type-declared encoders.
    #[inline]
    pub fn json_encoders(&self) -> &Encoders {
        &self.json_encoders
    }

    /// The type-declared encoders, for in-place changes.
    #[inline]
    pub fn json_encoders_mut(&mut self) -> &mut Encoders {
        &mut self.json_encoders
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use serde_json::{Value, json};

    use super::ModelConfig;

    #[test]
    fn derived_configs_do_not_touch_the_parent() {
        let parent = ModelConfig::new().json_encoder::<Duration>(|d| Ok(Value::from(d.as_secs())));

        let mut child = parent.clone();
        child
            .json_encoders_mut()
            .insert::<Duration>(|_| Ok(Value::from("child")))
            .insert::<bool>(|_| Ok(Value::from("flag")));

        let value = Duration::from_secs(7);
        assert_eq!(child.json_encoders().encode(&value).unwrap().unwrap(), json!("child"));
        assert_eq!(parent.json_encoders().encode(&value).unwrap().unwrap(), json!(7));
        assert_eq!((parent.json_encoders().len(), child.json_encoders().len()), (1, 2));
        assert!(ModelConfig::empty().json_encoders().is_empty());
    }
}
