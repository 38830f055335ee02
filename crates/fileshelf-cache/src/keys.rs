//! Cache key builders for every FileShelf cache entry.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application reads.

/// Cache key holding the user id bound to a session token.
pub fn session_token(prefix: &str, token: &str) -> String {
    format!("{prefix}{token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_key() {
        assert_eq!(session_token("auth_", "0d4c3b2a"), "auth_0d4c3b2a");
        assert_eq!(session_token("sess:", "abc"), "sess:abc");
    }
}
