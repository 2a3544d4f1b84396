use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{member::MemberRepository, quote::QuoteRepository},
    error::AppError,
    model::quote::{CreateQuoteParams, Quote, QuoteWithAuthor, ANONYMOUS_AUTHOR},
};

pub struct QuoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a quote, checking the member when one is given
    pub async fn create(&self, params: CreateQuoteParams) -> Result<QuoteWithAuthor, AppError> {
        let member_id = params.member_id;

        if let Some(id) = member_id {
            if !MemberRepository::new(self.db).exists(id).await? {
                return Err(AppError::InvalidReference {
                    field: "member_id".to_string(),
                    id,
                });
            }
        }

        let quote = QuoteRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| match member_id {
                Some(id) => AppError::from_reference_insert(e, "member_id", id),
                None => e.into(),
            })?;

        let author = self.author_name(&quote).await?;

        Ok(QuoteWithAuthor { quote, author })
    }

    /// Gets all quotes in creation order
    pub async fn get_all(&self) -> Result<Vec<Quote>, AppError> {
        let quotes = QuoteRepository::new(self.db).get_all().await?;

        Ok(quotes)
    }

    /// Gets all quotes in creation order with their author names resolved
    pub async fn get_all_with_authors(&self) -> Result<Vec<QuoteWithAuthor>, AppError> {
        let quotes = self.get_all().await?;

        let names: HashMap<i32, String> = MemberRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|m| (m.id, m.name))
            .collect();

        Ok(quotes
            .into_iter()
            .map(|quote| {
                let author = quote
                    .member_id
                    .and_then(|id| names.get(&id).cloned())
                    .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());
                QuoteWithAuthor { quote, author }
            })
            .collect())
    }

    /// Resolves the display name of a quote's author.
    ///
    /// Unattributed quotes, and quotes whose member no longer resolves, read as
    /// "Anônimo".
    pub async fn author_name(&self, quote: &Quote) -> Result<String, AppError> {
        let Some(member_id) = quote.member_id else {
            return Ok(ANONYMOUS_AUTHOR.to_string());
        };

        let member = MemberRepository::new(self.db).get_by_id(member_id).await?;

        Ok(member
            .map(|m| m.name)
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string()))
    }

    /// Deletes a quote
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !QuoteRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Quote {} not found", id)));
        }

        Ok(())
    }
}
