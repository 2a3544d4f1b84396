use sea_orm::DatabaseConnection;

use crate::server::{
    data::{member::MemberRepository, photo::PhotoRepository},
    error::AppError,
    model::photo::{CreatePhotoParams, Photo},
};

pub struct PhotoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhotoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a photo after checking that every tagged member exists
    pub async fn create(&self, params: CreatePhotoParams) -> Result<Photo, AppError> {
        let member_repo = MemberRepository::new(self.db);
        for &id in &params.member_ids {
            if !member_repo.exists(id).await? {
                return Err(AppError::InvalidReference {
                    field: "member_ids".to_string(),
                    id,
                });
            }
        }

        let photo = PhotoRepository::new(self.db).create(params).await?;

        Ok(photo)
    }

    /// Gets all photos in creation order
    pub async fn get_all(&self) -> Result<Vec<Photo>, AppError> {
        let photos = PhotoRepository::new(self.db).get_all().await?;

        Ok(photos)
    }

    /// Deletes a photo
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PhotoRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Photo {} not found", id)));
        }

        Ok(())
    }
}
