use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::quote::{CreateQuoteParams, Quote};

#[cfg(test)]
mod test;

pub struct QuoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QuoteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new quote
    pub async fn create(&self, params: CreateQuoteParams) -> Result<Quote, DbErr> {
        let entity = entity::quote::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            text: ActiveValue::Set(params.text),
            context: ActiveValue::Set(params.context),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Quote::from_entity(entity))
    }

    /// Gets all quotes in creation order
    pub async fn get_all(&self) -> Result<Vec<Quote>, DbErr> {
        let quotes = entity::prelude::Quote::find()
            .order_by_asc(entity::quote::Column::Id)
            .all(self.db)
            .await?;

        Ok(quotes.into_iter().map(Quote::from_entity).collect())
    }

    /// Deletes a quote, returning false when no row matched
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Quote::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Detaches every quote from a member so they read as anonymous
    pub async fn clear_member(&self, member_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Quote::update_many()
            .col_expr(
                entity::quote::Column::MemberId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::quote::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
