use sea_orm_migration::{prelude::*, schema::*};

static IDX_AUTOMOBILES_MAKE: &str = "idx_automobiles_make";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Automobiles::Table)
                    .if_not_exists()
                    .col(pk_auto(Automobiles::Id))
                    .col(integer(Automobiles::ModelYear))
                    .col(string(Automobiles::Make))
                    .col(string(Automobiles::Model))
                    .col(string_null(Automobiles::Color))
                    .col(string_null(Automobiles::OwnerName))
                    .col(date_null(Automobiles::PurchaseDate))
                    .col(string_uniq(Automobiles::Vin))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUTOMOBILES_MAKE)
                    .table(Automobiles::Table)
                    .col(Automobiles::Make)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AUTOMOBILES_MAKE)
                    .table(Automobiles::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Automobiles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Automobiles {
    Table,
    Id,
    ModelYear,
    Make,
    Model,
    Color,
    OwnerName,
    PurchaseDate,
    Vin,
}
