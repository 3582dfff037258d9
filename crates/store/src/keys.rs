//! Composite key layout for the user data store.
//!
//! Every record lives under a `{kind}:{identifier}` key. The review prefix
//! is the one the engine enumerates system-wide, so it gets a helper for
//! recovering the movie title from a raw key.

/// Key holding the username of the logged-in user
pub const CURRENT_USER_KEY: &str = "session:current";

/// Prefix for per-user collection lists
pub const COLLECTION_PREFIX: &str = "collection:";

/// Prefix for per-movie review lists
pub const REVIEWS_PREFIX: &str = "reviews:";

/// Prefix for account records
pub const USER_PREFIX: &str = "user:";

pub fn collection_key(username: &str) -> String {
    format!("{COLLECTION_PREFIX}{username}")
}

pub fn reviews_key(title: &str) -> String {
    format!("{REVIEWS_PREFIX}{title}")
}

pub fn user_key(username: &str) -> String {
    format!("{USER_PREFIX}{username}")
}

/// Recover the movie title from a `reviews:` key, if it is one.
pub fn title_from_reviews_key(key: &str) -> Option<&str> {
    key.strip_prefix(REVIEWS_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_reviews_key() {
        let key = reviews_key("The Game");
        assert_eq!(key, "reviews:The Game");
        assert_eq!(title_from_reviews_key(&key), Some("The Game"));
    }

    #[test]
    fn test_non_review_key() {
        assert_eq!(title_from_reviews_key("collection:ada"), None);
    }
}
