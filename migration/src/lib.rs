pub use sea_orm_migration::prelude::*;

mod m20250818_000001_create_administradores_table;
mod m20250818_000002_create_veiculos_table;
mod m20250819_000000_seed_veiculos;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250818_000001_create_administradores_table::Migration),
            Box::new(m20250818_000002_create_veiculos_table::Migration),
            Box::new(m20250819_000000_seed_veiculos::Migration),
        ]
    }
}
