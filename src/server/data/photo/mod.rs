use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::{
    json_list,
    photo::{CreatePhotoParams, Photo},
};

#[cfg(test)]
mod test;

pub struct PhotoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PhotoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new photo
    pub async fn create(&self, params: CreatePhotoParams) -> Result<Photo, DbErr> {
        let entity = entity::photo::ActiveModel {
            url: ActiveValue::Set(params.url),
            caption: ActiveValue::Set(params.caption),
            member_ids: ActiveValue::Set(json_list::encode(&params.member_ids)?),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Photo::from_entity(entity)
    }

    /// Gets all photos in creation order
    pub async fn get_all(&self) -> Result<Vec<Photo>, DbErr> {
        entity::prelude::Photo::find()
            .order_by_asc(entity::photo::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Photo::from_entity)
            .collect()
    }

    /// Deletes a photo, returning false when no row matched
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Photo::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes a member from every photo that tags them.
    ///
    /// Tags live in a JSON column, so each photo is decoded and rewritten individually.
    /// Returns the number of photos changed.
    pub async fn remove_member_tag(&self, member_id: i32) -> Result<u64, DbErr> {
        let photos = entity::prelude::Photo::find().all(self.db).await?;

        let mut changed = 0;
        for photo in photos {
            let tags: Vec<i32> = json_list::decode("member_ids", &photo.member_ids)?;
            if !tags.contains(&member_id) {
                continue;
            }

            let remaining: Vec<i32> = tags.into_iter().filter(|id| *id != member_id).collect();

            let mut active_model: entity::photo::ActiveModel = photo.into();
            active_model.member_ids = ActiveValue::Set(json_list::encode(&remaining)?);
            active_model.update(self.db).await?;

            changed += 1;
        }

        Ok(changed)
    }
}
