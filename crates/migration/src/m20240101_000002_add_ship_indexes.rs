use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_ship::Ship;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Sort keys besides the primary key
        manager
            .create_index(
                Index::create()
                    .name("idx_ship_prod_date")
                    .table(Ship::Table)
                    .col(Ship::ProdDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ship_rating")
                    .table(Ship::Table)
                    .col(Ship::Rating)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_ship_rating").table(Ship::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_ship_prod_date").table(Ship::Table).to_owned())
            .await
    }
}
