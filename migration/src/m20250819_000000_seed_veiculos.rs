use sea_orm_migration::prelude::*;

use crate::m20250818_000002_create_veiculos_table::Veiculos;

/// Primary keys of the rows inserted by [`Migration::up`], removed again by [`Migration::down`].
static SEEDED_IDS: [i32; 3] = [1, 2, 3];

/// Inserts the three fixed vehicle rows.
///
/// Applying this twice without reverting fails on the primary key; the migrator
/// records applied migrations so that never happens in normal use.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(Veiculos::Table)
            .columns([Veiculos::Id, Veiculos::Nome, Veiculos::Marca, Veiculos::Ano])
            .values_panic([1.into(), "Fusca".into(), "Volkswagen".into(), 1980.into()])
            .values_panic([2.into(), "Gol".into(), "Volkswagen".into(), 2005.into()])
            .values_panic([3.into(), "Uno".into(), "Fiat".into(), 1998.into()])
            .to_owned();

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for id in SEEDED_IDS {
            let delete = Query::delete()
                .from_table(Veiculos::Table)
                .and_where(Expr::col(Veiculos::Id).eq(id))
                .to_owned();

            manager.exec_stmt(delete).await?;
        }

        Ok(())
    }
}
