//! Member domain model and parameters.
//!
//! Members are the central entity of the site; comments, quotes and photo tags all
//! point at them. Request DTOs are validated into the parameter types here before
//! reaching the service layer.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::member::{CreateMemberDto, MemberDto, UpdateMemberDto},
    server::{
        error::AppError,
        model::json_list,
        util::validate::{normalize_characteristics, Validator},
    },
};

/// A member of the group as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Unique identifier for the member.
    pub id: i32,
    /// Full name.
    pub name: String,
    /// Nickname the group uses.
    pub nickname: String,
    /// Short label, e.g. "O Estrategista".
    pub classification: String,
    /// Free text description.
    pub description: String,
    /// Characteristics in display order.
    pub characteristics: Vec<String>,
    /// What the member is up to these days.
    pub current_status: String,
    /// Role within the group.
    pub role: String,
    /// Optional profile picture URL.
    pub photo_url: Option<String>,
    /// Timestamp when the member was created.
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Member)` - The converted member
    /// - `Err(DbErr::Custom)` - Stored characteristics are not a JSON string array
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            nickname: entity.nickname,
            classification: entity.classification,
            description: entity.description,
            characteristics: json_list::decode("characteristics", &entity.characteristics)?,
            current_status: entity.current_status,
            role: entity.role,
            photo_url: entity.photo_url,
            created_at: entity.created_at,
        })
    }

    /// Converts the member to a DTO for API responses.
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            name: self.name,
            nickname: self.nickname,
            classification: self.classification,
            description: self.description,
            characteristics: self.characteristics,
            current_status: self.current_status,
            role: self.role,
            photo_url: self.photo_url,
            created_at: self.created_at,
        }
    }
}

/// Normalized parameters for creating a member.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMemberParams {
    pub name: String,
    pub nickname: String,
    pub classification: String,
    pub description: String,
    pub characteristics: Vec<String>,
    pub current_status: String,
    pub role: String,
    pub photo_url: Option<String>,
}

impl CreateMemberParams {
    /// Validates and normalizes a create request.
    ///
    /// # Returns
    /// - `Ok(CreateMemberParams)` - Trimmed values, characteristics split into a list
    /// - `Err(AppError::ValidationFailed)` - Every missing or malformed field
    pub fn from_dto(dto: CreateMemberDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let params = Self {
            name: v.required("name", dto.name),
            nickname: v.required("nickname", dto.nickname),
            classification: v.required("classification", dto.classification),
            description: v.required("description", dto.description),
            characteristics: dto
                .characteristics
                .map(normalize_characteristics)
                .unwrap_or_default(),
            current_status: v.required("current_status", dto.current_status),
            role: v.required("role", dto.role),
            photo_url: v.optional_url("photo_url", dto.photo_url),
        };

        v.finish()?;
        Ok(params)
    }
}

/// Normalized partial update of a member. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateMemberParams {
    pub id: i32,
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub classification: Option<String>,
    pub description: Option<String>,
    pub characteristics: Option<Vec<String>>,
    pub current_status: Option<String>,
    pub role: Option<String>,
    /// `Some(None)` clears the photo.
    pub photo_url: Option<Option<String>>,
}

impl UpdateMemberParams {
    /// Validates and normalizes an update request for member `id`.
    ///
    /// # Returns
    /// - `Ok(UpdateMemberParams)` - Only the provided fields are set
    /// - `Err(AppError::ValidationFailed)` - A provided field is blank or malformed,
    ///   or the payload contains no fields at all
    pub fn from_dto(id: i32, dto: UpdateMemberDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let photo_url = match dto.photo_url {
            None => None,
            Some(url) if url.trim().is_empty() => Some(None),
            Some(url) => v.optional_url("photo_url", Some(url)).map(Some),
        };

        let params = Self {
            id,
            name: v.replacement("name", dto.name),
            nickname: v.replacement("nickname", dto.nickname),
            classification: v.replacement("classification", dto.classification),
            description: v.replacement("description", dto.description),
            characteristics: dto.characteristics.map(normalize_characteristics),
            current_status: v.replacement("current_status", dto.current_status),
            role: v.replacement("role", dto.role),
            photo_url,
        };

        v.finish()?;

        if params.is_empty() {
            return Err(AppError::invalid_field("body", "No fields to update"));
        }

        Ok(params)
    }

    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.nickname.is_none()
            && self.classification.is_none()
            && self.description.is_none()
            && self.characteristics.is_none()
            && self.current_status.is_none()
            && self.role.is_none()
            && self.photo_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::member::CharacteristicsDto;
    use test_utils::fixture;

    fn create_dto() -> CreateMemberDto {
        CreateMemberDto {
            name: Some("Pedro Henrique".to_string()),
            nickname: Some("Pedrão".to_string()),
            classification: Some("O Estrategista".to_string()),
            description: Some("Planeja tudo e nada sai como planejado".to_string()),
            characteristics: Some(CharacteristicsDto::Text(
                "Dormiu na escola, Botafoguense sofredor,  Fã da DC ".to_string(),
            )),
            current_status: Some("Estudando".to_string()),
            role: Some("Motorista".to_string()),
            photo_url: Some("".to_string()),
        }
    }

    #[test]
    fn create_params_normalize_input() {
        let params = CreateMemberParams::from_dto(create_dto()).unwrap();

        assert_eq!(
            params.characteristics,
            vec!["Dormiu na escola", "Botafoguense sofredor", "Fã da DC"]
        );
        assert_eq!(params.photo_url, None);
        assert_eq!(params.nickname, "Pedrão");
    }

    #[test]
    fn create_params_report_all_missing_fields() {
        let result = CreateMemberParams::from_dto(CreateMemberDto::default());

        match result {
            Err(AppError::ValidationFailed(errors)) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(
                    fields,
                    vec![
                        "name",
                        "nickname",
                        "classification",
                        "description",
                        "current_status",
                        "role"
                    ]
                );
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn update_params_with_only_nickname() {
        let params = UpdateMemberParams::from_dto(
            7,
            UpdateMemberDto {
                nickname: Some("Novo".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(
            params,
            UpdateMemberParams {
                id: 7,
                nickname: Some("Novo".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn update_params_empty_photo_url_clears() {
        let params = UpdateMemberParams::from_dto(
            1,
            UpdateMemberDto {
                photo_url: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(params.photo_url, Some(None));
    }

    #[test]
    fn update_params_reject_empty_payload() {
        let result = UpdateMemberParams::from_dto(1, UpdateMemberDto::default());
        assert!(matches!(result, Err(AppError::ValidationFailed(_))));
    }

    #[test]
    fn from_entity_decodes_characteristics() {
        let entity = fixture::member::entity_builder()
            .characteristics(&["Zagueiro", "Goleiro reserva"])
            .build();

        let member = Member::from_entity(entity).unwrap();
        assert_eq!(member.characteristics, vec!["Zagueiro", "Goleiro reserva"]);
    }

    #[test]
    fn from_entity_rejects_corrupt_characteristics() {
        let mut entity = fixture::member::entity();
        entity.characteristics = "Zagueiro".to_string();

        assert!(Member::from_entity(entity).is_err());
    }
}
