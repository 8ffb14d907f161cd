//! Deep merge of configuration trees

use serde_yaml::{Mapping, Value};

/// Recursively merge `update` into `base`.
///
/// Keys present as mappings on both sides are merged key by key; any other
/// value from `update` replaces the one in `base` wholesale, so an override
/// can swap out a whole list or turn a scalar into a subtree.
pub fn merge(base: &mut Mapping, update: Mapping) {
    for (key, value) in update {
        match value {
            Value::Mapping(incoming) => {
                if let Some(Value::Mapping(existing)) = base.get_mut(&key) {
                    merge(existing, incoming);
                    continue;
                }
                base.insert(key, Value::Mapping(incoming));
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}
