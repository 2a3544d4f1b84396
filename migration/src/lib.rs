pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_member_table;
mod m20260110_000002_create_comment_table;
mod m20260110_000003_create_quote_table;
mod m20260110_000004_create_photo_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_member_table::Migration),
            Box::new(m20260110_000002_create_comment_table::Migration),
            Box::new(m20260110_000003_create_quote_table::Migration),
            Box::new(m20260110_000004_create_photo_table::Migration),
        ]
    }
}
