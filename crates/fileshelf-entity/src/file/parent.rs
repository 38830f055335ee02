//! Parent reference of a file document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use fileshelf_core::error::AppError;
use fileshelf_core::types::FileId;

/// Reserved parent value meaning "top level".
pub const ROOT_SENTINEL: &str = "0";

/// Message for a `parentId` that is neither the root nor a valid id.
pub const INVALID_PARENT_MESSAGE: &str = "Invalid parentId";

/// Where a document sits in the hierarchy.
///
/// This is a soft reference: a `Folder` parent is never checked against
/// the stored documents, so it may name a folder that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParentRef {
    /// Top level, stored and transmitted as `"0"`.
    #[default]
    Root,
    /// Child of the document with this id.
    Folder(FileId),
}

impl ParentRef {
    /// Parse a `parentId` query value.
    ///
    /// An absent or empty value means the root. Anything else must be the
    /// root sentinel or a valid identifier.
    pub fn from_query(raw: Option<&str>) -> Result<Self, AppError> {
        match raw {
            None | Some("") => Ok(Self::Root),
            Some(value) => value.parse(),
        }
    }

    /// Stored text form: the sentinel or the parent's hex id.
    pub fn as_stored(&self) -> String {
        match self {
            Self::Root => ROOT_SENTINEL.to_string(),
            Self::Folder(id) => id.to_string(),
        }
    }
}

impl From<FileId> for ParentRef {
    fn from(id: FileId) -> Self {
        Self::Folder(id)
    }
}

impl fmt::Display for ParentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str(ROOT_SENTINEL),
            Self::Folder(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for ParentRef {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ROOT_SENTINEL {
            return Ok(Self::Root);
        }
        FileId::parse_str(s)
            .map(Self::Folder)
            .map_err(|_| AppError::invalid_argument(INVALID_PARENT_MESSAGE))
    }
}

impl Serialize for ParentRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_stored())
    }
}

impl<'de> Deserialize<'de> for ParentRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl sqlx::Type<sqlx::Postgres> for ParentRef {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for ParentRef {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.as_stored(), buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ParentRef {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(raw.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOLDER: &str = "5f1e7d6c5b4a39281706f5e4";

    #[test]
    fn test_absent_or_empty_means_root() {
        assert_eq!(ParentRef::from_query(None).expect("root"), ParentRef::Root);
        assert_eq!(ParentRef::from_query(Some("")).expect("root"), ParentRef::Root);
        assert_eq!(ParentRef::from_query(Some("0")).expect("root"), ParentRef::Root);
    }

    #[test]
    fn test_valid_id_is_folder() {
        let parent = ParentRef::from_query(Some(FOLDER)).expect("valid");
        assert_eq!(parent.to_string(), FOLDER);
        assert!(matches!(parent, ParentRef::Folder(_)));
    }

    #[test]
    fn test_malformed_parent_is_invalid_argument() {
        let err = ParentRef::from_query(Some("nope")).expect_err("invalid");
        assert_eq!(err.kind, fileshelf_core::error::ErrorKind::InvalidArgument);
        assert_eq!(err.message, INVALID_PARENT_MESSAGE);
        assert!(ParentRef::from_query(Some("00")).is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        assert_eq!(serde_json::to_string(&ParentRef::Root).expect("ok"), "\"0\"");
        let parsed: ParentRef = serde_json::from_str(&format!("\"{FOLDER}\"")).expect("ok");
        assert_eq!(parsed.as_stored(), FOLDER);
    }
}
