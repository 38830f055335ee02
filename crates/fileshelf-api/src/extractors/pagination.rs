//! Listing query parameters.

/// Query parameters for `GET /files`.
///
/// Both values are kept raw; the listing service interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilesQuery {
    /// Parent folder id, or `"0"` for the root.
    pub parent_id: Option<String>,
    /// Zero-based page number.
    pub page: Option<String>,
}

impl ListFilesQuery {
    /// Pick the listing parameters out of decoded query pairs.
    ///
    /// A repeated key keeps all of its values joined with commas, so a
    /// doubled `parentId` never names a valid folder and a doubled `page`
    /// counts as its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "parentId" => &mut query.parent_id,
                "page" => &mut query.page,
                _ => continue,
            };
            match slot {
                Some(existing) => {
                    existing.push(',');
                    existing.push_str(&value);
                }
                None => *slot = Some(value),
            }
        }
        query
    }
}
