//! Product category tags.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed set of category tags products can carry.
///
/// The catalog filter matches on exact tag equality; an unselected
/// category at the UI edge is represented as `None`, not as a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Phone,
    Laptop,
    Audio,
    Wearable,
    Tablet,
    Gaming,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::Phone,
        Self::Laptop,
        Self::Audio,
        Self::Wearable,
        Self::Tablet,
        Self::Gaming,
    ];

    /// The lowercase tag used in URLs, forms, and persisted data.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Laptop => "laptop",
            Self::Audio => "audio",
            Self::Wearable => "wearable",
            Self::Tablet => "tablet",
            Self::Gaming => "gaming",
        }
    }

    /// Human-readable label for select options.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Phone => "Phones",
            Self::Laptop => "Laptops",
            Self::Audio => "Audio",
            Self::Wearable => "Wearables",
            Self::Tablet => "Tablets",
            Self::Gaming => "Gaming",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category tag.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid category: {0}")]
pub struct ParseCategoryError(pub String);

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phone" => Ok(Self::Phone),
            "laptop" => Ok(Self::Laptop),
            "audio" => Ok(Self::Audio),
            "wearable" => Ok(Self::Wearable),
            "tablet" => Ok(Self::Tablet),
            "gaming" => Ok(Self::Gaming),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_all_tags() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().expect("parse tag");
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_unknown_tag_is_error() {
        let err = "appliance".parse::<Category>().unwrap_err();
        assert_eq!(err, ParseCategoryError("appliance".to_string()));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Wearable).expect("serialize");
        assert_eq!(json, "\"wearable\"");
    }
}
