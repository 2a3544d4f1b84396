use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    json_list,
    member::{CreateMemberParams, Member, UpdateMemberParams},
};

#[cfg(test)]
mod test;

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new member
    pub async fn create(&self, params: CreateMemberParams) -> Result<Member, DbErr> {
        let entity = entity::member::ActiveModel {
            name: ActiveValue::Set(params.name),
            nickname: ActiveValue::Set(params.nickname),
            classification: ActiveValue::Set(params.classification),
            description: ActiveValue::Set(params.description),
            characteristics: ActiveValue::Set(json_list::encode(&params.characteristics)?),
            current_status: ActiveValue::Set(params.current_status),
            role: ActiveValue::Set(params.role),
            photo_url: ActiveValue::Set(params.photo_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Member::from_entity(entity)
    }

    /// Gets all members in creation order
    pub async fn get_all(&self) -> Result<Vec<Member>, DbErr> {
        entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect()
    }

    /// Gets a member by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        entity::prelude::Member::find_by_id(id)
            .one(self.db)
            .await?
            .map(Member::from_entity)
            .transpose()
    }

    /// Checks if a member exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Member::find()
            .filter(entity::member::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies the provided fields to a member.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - The member after the update
    /// - `Ok(None)` - No member with that id
    pub async fn update(&self, params: UpdateMemberParams) -> Result<Option<Member>, DbErr> {
        let Some(member) = entity::prelude::Member::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::member::ActiveModel = member.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(nickname) = params.nickname {
            active_model.nickname = ActiveValue::Set(nickname);
        }
        if let Some(classification) = params.classification {
            active_model.classification = ActiveValue::Set(classification);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(characteristics) = params.characteristics {
            active_model.characteristics = ActiveValue::Set(json_list::encode(&characteristics)?);
        }
        if let Some(current_status) = params.current_status {
            active_model.current_status = ActiveValue::Set(current_status);
        }
        if let Some(role) = params.role {
            active_model.role = ActiveValue::Set(role);
        }
        if let Some(photo_url) = params.photo_url {
            active_model.photo_url = ActiveValue::Set(photo_url);
        }

        let updated = active_model.update(self.db).await?;

        Member::from_entity(updated).map(Some)
    }

    /// Deletes a member, returning false when no row matched
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
