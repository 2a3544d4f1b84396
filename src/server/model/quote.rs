//! Quote domain model and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::quote::{CreateQuoteDto, QuoteDto},
    server::{
        error::AppError,
        util::validate::{optional_text, Validator},
    },
};

/// Display label for quotes without a member.
pub const ANONYMOUS_AUTHOR: &str = "Anônimo";

/// A saying, optionally attributed to a member.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub id: i32,
    /// Quoted member; `None` when unattributed.
    pub member_id: Option<i32>,
    pub text: String,
    /// Where or when it was said.
    pub context: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    pub fn from_entity(entity: entity::quote::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            text: entity.text,
            context: entity.context,
            created_at: entity.created_at,
        }
    }

    /// Converts the quote to a DTO with its resolved author label.
    pub fn into_dto(self, author: String) -> QuoteDto {
        QuoteDto {
            id: self.id,
            text: self.text,
            context: self.context,
            member_id: self.member_id,
            author,
            created_at: self.created_at,
        }
    }
}

/// A quote paired with the display name of its author.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteWithAuthor {
    pub quote: Quote,
    pub author: String,
}

impl QuoteWithAuthor {
    pub fn into_dto(self) -> QuoteDto {
        self.quote.into_dto(self.author)
    }
}

/// Normalized parameters for creating a quote.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateQuoteParams {
    pub member_id: Option<i32>,
    pub text: String,
    pub context: Option<String>,
}

impl CreateQuoteParams {
    pub fn from_dto(dto: CreateQuoteDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let params = Self {
            member_id: v.member_id("member_id", dto.member_id),
            text: v.required("text", dto.text),
            context: optional_text(dto.context),
        };

        v.finish()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::api::MemberIdDto;

    #[test]
    fn empty_strings_mean_no_value() {
        let params = CreateQuoteParams::from_dto(CreateQuoteDto {
            text: Some("Bora pro rolê".to_string()),
            context: Some("".to_string()),
            member_id: Some(MemberIdDto::Text("".to_string())),
        })
        .unwrap();

        assert_eq!(params.member_id, None);
        assert_eq!(params.context, None);
    }

    #[test]
    fn rejects_blank_text() {
        let result = CreateQuoteParams::from_dto(CreateQuoteDto {
            text: Some("  ".to_string()),
            ..Default::default()
        });

        assert!(matches!(result, Err(AppError::ValidationFailed(_))));
    }
}
