//! Photo fixtures for creating in-memory test data.

use entity::photo;

use crate::fixture::member::default_created_at;

/// Default test photo URL.
pub const DEFAULT_URL: &str = "https://example.com/photos/churrasco.jpg";

/// Creates a photo entity model with default values and no tags.
pub fn entity() -> photo::Model {
    entity_with_tags(&[])
}

/// Creates a photo entity model tagging `member_ids`.
pub fn entity_with_tags(member_ids: &[i32]) -> photo::Model {
    photo::Model {
        id: 1,
        url: DEFAULT_URL.to_string(),
        caption: Some("Churrasco de fim de ano".to_string()),
        member_ids: serde_json::to_string(member_ids).unwrap_or_else(|_| "[]".to_string()),
        timestamp: default_created_at(),
    }
}
