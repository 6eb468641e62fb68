//! Shared primitive types

use serde::{Deserialize, Serialize};

/// Semantic type tag for a value flowing through a ticket
///
/// Closed set; the catalog uses these as both the incoming and the target
/// type. The core never branches on them, they are typing metadata for
/// display and for catalog sanity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Int,
    Bool,
    #[serde(rename = "string")]
    Str,
    Float,
    /// Untyped / could be anything (null included)
    Mixed,
    Array,
    Object,
}

/// The two moves available on every ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Cast the value straight through. Cheap, unchecked.
    Hammer,
    /// Validate before converting. Slow, safe.
    Measure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_tags_match_catalog_format() {
        let tag: ValueType = serde_json::from_str("\"string\"").unwrap();
        assert_eq!(tag, ValueType::Str);
        let tag: ValueType = serde_json::from_str("\"mixed\"").unwrap();
        assert_eq!(tag, ValueType::Mixed);
        assert_eq!(serde_json::to_string(&ValueType::Int).unwrap(), "\"int\"");
    }
}
