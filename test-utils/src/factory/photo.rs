//! Photo factory for creating test photo entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test photos without tags by default.
pub struct PhotoFactory<'a> {
    db: &'a DatabaseConnection,
    url: String,
    caption: Option<String>,
    member_ids: Vec<i32>,
}

impl<'a> PhotoFactory<'a> {
    /// Creates a new PhotoFactory.
    ///
    /// Defaults:
    /// - url: `"https://example.com/photos/{id}.jpg"`
    /// - caption: `None`
    /// - member_ids: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            url: format!("https://example.com/photos/{}.jpg", id),
            caption: None,
            member_ids: Vec::new(),
        }
    }

    pub fn caption(mut self, caption: Option<&str>) -> Self {
        self.caption = caption.map(str::to_string);
        self
    }

    pub fn member_ids(mut self, member_ids: &[i32]) -> Self {
        self.member_ids = member_ids.to_vec();
        self
    }

    pub async fn build(self) -> Result<entity::photo::Model, DbErr> {
        let member_ids =
            serde_json::to_string(&self.member_ids).map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::photo::ActiveModel {
            id: ActiveValue::NotSet,
            url: ActiveValue::Set(self.url),
            caption: ActiveValue::Set(self.caption),
            member_ids: ActiveValue::Set(member_ids),
            timestamp: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a photo with default values.
pub async fn create_photo(db: &DatabaseConnection) -> Result<entity::photo::Model, DbErr> {
    PhotoFactory::new(db).build().await
}
