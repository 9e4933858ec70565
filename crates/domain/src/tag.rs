use serde::{Deserialize, Serialize};

use kitrelay_core::{AppError, AppResult, NonEmptyString};

/// Opaque identifier for a Provider tag.
///
/// Supplied by the caller, typically obtained from a prior tag listing. The
/// only invariant enforced here is non-emptiness; the Provider owns the rest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(NonEmptyString);

impl TagId {
    /// Creates a validated tag identifier.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = NonEmptyString::new(value)
            .map_err(|_| AppError::Validation("tag id must not be empty".to_owned()))?;

        Ok(Self(value))
    }

    /// Returns the underlying identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A tag as listed by the Provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Provider-assigned tag identifier.
    pub id: String,
    /// Human-readable tag name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::TagId;

    #[test]
    fn empty_tag_id_is_rejected() {
        assert!(TagId::new("").is_err());
        assert!(TagId::new("   ").is_err());
    }

    #[test]
    fn rejected_tag_id_is_a_validation_error() {
        let result = TagId::new("  ");
        assert!(matches!(
            result,
            Err(kitrelay_core::AppError::Validation(_))
        ));
    }

    #[test]
    fn tag_id_preserves_value() {
        let tag_id = TagId::new("8412");
        assert!(tag_id.is_ok());
        assert_eq!(
            tag_id.unwrap_or_else(|_| panic!("test")).as_str(),
            "8412"
        );
    }
}
