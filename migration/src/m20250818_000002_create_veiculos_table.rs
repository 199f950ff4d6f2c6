use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Veiculos::Table)
                    .if_not_exists()
                    .col(pk_auto(Veiculos::Id))
                    .col(string_len(Veiculos::Nome, 150))
                    .col(string_len(Veiculos::Marca, 100))
                    .col(integer(Veiculos::Ano))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Veiculos::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Veiculos {
    #[sea_orm(iden = "Veiculos")]
    Table,
    #[sea_orm(iden = "Id")]
    Id,
    #[sea_orm(iden = "Nome")]
    Nome,
    #[sea_orm(iden = "Marca")]
    Marca,
    #[sea_orm(iden = "Ano")]
    Ano,
}
