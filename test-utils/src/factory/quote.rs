//! Quote factory for creating test quote entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test quotes, unattributed by default.
pub struct QuoteFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: Option<i32>,
    text: String,
    context: Option<String>,
}

impl<'a> QuoteFactory<'a> {
    /// Creates a new QuoteFactory.
    ///
    /// Defaults:
    /// - member_id: `None`
    /// - text: `"Quote {id}"`
    /// - context: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            member_id: None,
            text: format!("Quote {}", id),
            context: None,
        }
    }

    pub fn member_id(mut self, member_id: Option<i32>) -> Self {
        self.member_id = member_id;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn context(mut self, context: Option<&str>) -> Self {
        self.context = context.map(str::to_string);
        self
    }

    pub async fn build(self) -> Result<entity::quote::Model, DbErr> {
        entity::quote::ActiveModel {
            id: ActiveValue::NotSet,
            member_id: ActiveValue::Set(self.member_id),
            text: ActiveValue::Set(self.text),
            context: ActiveValue::Set(self.context),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unattributed quote with default values.
pub async fn create_quote(db: &DatabaseConnection) -> Result<entity::quote::Model, DbErr> {
    QuoteFactory::new(db).build().await
}
