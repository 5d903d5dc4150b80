//! Create `ship` table.
//! One row per catalogued ship; `rating` is derived and stored alongside its inputs.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ship::Table)
                    .if_not_exists()
                    .col(big_integer(Ship::Id).primary_key().auto_increment())
                    .col(string_len(Ship::Name, 50).not_null())
                    .col(string_len(Ship::Planet, 50).not_null())
                    .col(string_len(Ship::ShipType, 16).not_null())
                    .col(timestamp_with_time_zone(Ship::ProdDate).not_null())
                    .col(boolean(Ship::IsUsed).not_null().default(false))
                    .col(double(Ship::Speed).not_null())
                    .col(integer(Ship::CrewSize).not_null())
                    .col(double(Ship::Rating).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Ship::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Ship {
    Table,
    Id,
    Name,
    Planet,
    ShipType,
    ProdDate,
    IsUsed,
    Speed,
    CrewSize,
    Rating,
}
