use super::*;
use crate::server::model::member::{CreateMemberParams, UpdateMemberParams};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn create_params(name: &str) -> CreateMemberParams {
    CreateMemberParams {
        name: name.to_string(),
        nickname: "Pedrão".to_string(),
        classification: "O Estrategista".to_string(),
        description: "Planeja tudo".to_string(),
        characteristics: vec!["Dormiu na escola".to_string(), "Fã da DC".to_string()],
        current_status: "Estudando".to_string(),
        role: "Motorista".to_string(),
        photo_url: None,
    }
}
