use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Administradores::Table)
                    .if_not_exists()
                    .col(pk_auto(Administradores::Id))
                    .col(string_len(Administradores::Email, 255))
                    .col(string_len(Administradores::Senha, 255))
                    .col(string_len(Administradores::Perfil, 50))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Administradores::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Administradores {
    #[sea_orm(iden = "Administradores")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "Email")]
    Email,
    // Argon2 PHC string
    #[sea_orm(iden = "Senha")]
    Senha,
    #[sea_orm(iden = "Perfil")]
    Perfil,
}
