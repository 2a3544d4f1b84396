//! Photo domain model and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::photo::{CreatePhotoDto, PhotoDto},
    server::{
        error::AppError,
        model::json_list,
        util::validate::{optional_text, Validator},
    },
};

/// A gallery entry. The URL is stored as given and never fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: i32,
    pub url: String,
    pub caption: Option<String>,
    /// Members tagged in the photo, in the order they were tagged.
    pub member_ids: Vec<i32>,
    pub timestamp: DateTime<Utc>,
}

impl Photo {
    /// Converts an entity model to a photo domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Photo)` - The converted photo
    /// - `Err(DbErr::Custom)` - Stored member ids are not a JSON integer array
    pub fn from_entity(entity: entity::photo::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            url: entity.url,
            caption: entity.caption,
            member_ids: json_list::decode("member_ids", &entity.member_ids)?,
            timestamp: entity.timestamp,
        })
    }

    pub fn into_dto(self) -> PhotoDto {
        PhotoDto {
            id: self.id,
            url: self.url,
            caption: self.caption,
            member_ids: self.member_ids,
            timestamp: self.timestamp,
        }
    }
}

/// Normalized parameters for creating a photo.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePhotoParams {
    pub url: String,
    pub caption: Option<String>,
    pub member_ids: Vec<i32>,
}

impl CreatePhotoParams {
    pub fn from_dto(dto: CreatePhotoDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let params = Self {
            url: v.required("url", dto.url),
            caption: optional_text(dto.caption),
            member_ids: v.member_ids("member_ids", dto.member_ids),
        };

        v.finish()?;
        Ok(params)
    }
}
