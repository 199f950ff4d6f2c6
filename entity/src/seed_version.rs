use sea_orm::entity::prelude::*;

/// Single-row record of the seed dataset version a database holds.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "SeedVersion")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "Versao")]
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
