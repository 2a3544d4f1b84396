//! Member factory for creating test member entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member::MemberFactory;
///
/// let member = MemberFactory::new(&db)
///     .name("Pedro")
///     .characteristics(&["Zagueiro", "Botafoguense"])
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    nickname: String,
    characteristics: Vec<String>,
    photo_url: Option<String>,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Member {id}"` where id is auto-incremented
    /// - nickname: `"Nick {id}"`
    /// - characteristics: empty
    /// - photo_url: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Member {}", id),
            nickname: format!("Nick {}", id),
            characteristics: Vec::new(),
            photo_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn characteristics(mut self, characteristics: &[&str]) -> Self {
        self.characteristics = characteristics.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn photo_url(mut self, photo_url: Option<&str>) -> Self {
        self.photo_url = photo_url.map(str::to_string);
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        let characteristics = serde_json::to_string(&self.characteristics)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::member::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            nickname: ActiveValue::Set(self.nickname),
            classification: ActiveValue::Set("O Testador".to_string()),
            description: ActiveValue::Set("Membro criado para testes".to_string()),
            characteristics: ActiveValue::Set(characteristics),
            current_status: ActiveValue::Set("Ativo".to_string()),
            role: ActiveValue::Set("QA".to_string()),
            photo_url: ActiveValue::Set(self.photo_url),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_member_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Member).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let member = create_member(db).await?;

        assert!(member.id > 0);
        assert!(member.name.starts_with("Member "));
        assert_eq!(member.characteristics, "[]");

        Ok(())
    }

    #[tokio::test]
    async fn creates_member_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Member).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let member = MemberFactory::new(db)
            .name("Pedro")
            .characteristics(&["Zagueiro"])
            .photo_url(Some("https://example.com/p.jpg"))
            .build()
            .await?;

        assert_eq!(member.name, "Pedro");
        assert_eq!(member.characteristics, r#"["Zagueiro"]"#);
        assert_eq!(member.photo_url.as_deref(), Some("https://example.com/p.jpg"));

        Ok(())
    }
}
