//! Member fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::member;

/// Default test member name.
pub const DEFAULT_NAME: &str = "Pedro Henrique";

/// Default test member nickname.
pub const DEFAULT_NICKNAME: &str = "Pedrão";

/// Default test member classification.
pub const DEFAULT_CLASSIFICATION: &str = "O Estrategista";

/// Fixed creation time so fixtures compare equal across calls.
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a member entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Pedro Henrique"`
/// - nickname: `"Pedrão"`
/// - characteristics: `[]`
/// - photo_url: `None`
///
/// # Returns
/// - `member::Model` - In-memory member entity
pub fn entity() -> member::Model {
    entity_builder().build()
}

/// Creates a member entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let member = fixture::member::entity_builder()
///     .id(3)
///     .characteristics(&["Dormiu na escola", "Fã da DC"])
///     .build();
/// ```
pub fn entity_builder() -> MemberEntityBuilder {
    MemberEntityBuilder::default()
}

/// Builder for creating customized member entity models.
pub struct MemberEntityBuilder {
    id: i32,
    name: String,
    nickname: String,
    characteristics: Vec<String>,
    photo_url: Option<String>,
}

impl Default for MemberEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            nickname: DEFAULT_NICKNAME.to_string(),
            characteristics: Vec::new(),
            photo_url: None,
        }
    }
}

impl MemberEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Sets the characteristics, stored as a JSON array like the real column.
    pub fn characteristics(mut self, characteristics: &[&str]) -> Self {
        self.characteristics = characteristics.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn photo_url(mut self, photo_url: Option<&str>) -> Self {
        self.photo_url = photo_url.map(str::to_string);
        self
    }

    /// Builds and returns the member entity model.
    pub fn build(self) -> member::Model {
        member::Model {
            id: self.id,
            name: self.name,
            nickname: self.nickname,
            classification: DEFAULT_CLASSIFICATION.to_string(),
            description: "Planeja tudo e nada sai como planejado".to_string(),
            characteristics: serde_json::to_string(&self.characteristics)
                .unwrap_or_else(|_| "[]".to_string()),
            current_status: "Estudando".to_string(),
            role: "Motorista".to_string(),
            photo_url: self.photo_url,
            created_at: default_created_at(),
        }
    }
}
