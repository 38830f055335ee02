//! File kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a file document represents.
///
/// Kinds this service does not know about are carried through as
/// [`FileKind::Other`] with their stored spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileKind {
    /// A container for other documents.
    Folder,
    /// A regular file.
    File,
    /// An image file.
    Image,
    /// Any other stored kind, verbatim.
    Other(String),
}

impl FileKind {
    /// Return the stored string form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
            Self::Image => "image",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FileKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "folder" => Self::Folder,
            "file" => Self::File,
            "image" => Self::Image,
            _ => Self::Other(raw),
        }
    }
}

impl From<FileKind> for String {
    fn from(kind: FileKind) -> Self {
        match kind {
            FileKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for FileKind {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for FileKind {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for FileKind {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <String as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(Self::from(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds_parse() {
        assert_eq!(FileKind::from("folder".to_string()), FileKind::Folder);
        assert_eq!(FileKind::from("image".to_string()), FileKind::Image);
    }

    #[test]
    fn test_unknown_kind_is_kept_verbatim() {
        let kind: FileKind = serde_json::from_str("\"Video\"").expect("any string");
        assert_eq!(kind, FileKind::Other("Video".to_string()));
        assert_eq!(serde_json::to_string(&kind).expect("serialize"), "\"Video\"");
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&FileKind::Image).expect("serialize");
        assert_eq!(json, "\"image\"");
    }
}
