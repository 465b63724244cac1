use crate::error::ModelError;

/// Server-assigned identifier of a stored book.
///
/// The server owns the format (UUIDs today, integers on older stores), so the
/// client keeps the textual form and never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ModelError::InvalidId(
                "Book ID cannot be empty".to_string(),
            ));
        }
        Ok(BookId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        BookId(id.to_string())
    }
}

impl AsRef<str> for BookId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for BookId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookId::new(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BookId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BookId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(text) => {
                BookId::new(text).map_err(serde::de::Error::custom)
            }
            RawId::Number(number) => Ok(BookId::from(number)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_rejected() {
        assert!(BookId::new("").is_err());
        assert!(BookId::new("   ").is_err());
    }

    #[test]
    fn numeric_ids_keep_their_textual_form() {
        assert_eq!(BookId::from(42).as_str(), "42");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_from_string_or_integer() {
        let from_text: BookId =
            serde_json::from_str("\"0b6f0c5e-1d8b-4b43-9a59-8c0f3b9f1d2a\"")
                .unwrap();
        assert_eq!(from_text.as_str(), "0b6f0c5e-1d8b-4b43-9a59-8c0f3b9f1d2a");

        let from_number: BookId = serde_json::from_str("17").unwrap();
        assert_eq!(from_number.as_str(), "17");

        assert!(serde_json::from_str::<BookId>("\"\"").is_err());
    }
}
