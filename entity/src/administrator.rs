use sea_orm::entity::prelude::*;

/// An administrator account.
///
/// `password` holds an Argon2 PHC string, never the plaintext password.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Administradores")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "Email")]
    pub email: String,
    #[sea_orm(column_name = "Senha")]
    pub password: String,
    /// Free-text role label, e.g. `Adm` or `Editor`
    #[sea_orm(column_name = "Perfil")]
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
