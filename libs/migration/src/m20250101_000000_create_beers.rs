use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

const BEER_TYPES: [BeerType; 7] = [
    BeerType::Lager,
    BeerType::Malzbier,
    BeerType::Witbier,
    BeerType::Weiss,
    BeerType::Ale,
    BeerType::Ipa,
    BeerType::Stout,
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(BeerType::Enum)
                    .values(BEER_TYPES)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Beers::Table)
                    .if_not_exists()
                    .col(pk_uuid(Beers::Id))
                    .col(string_len(Beers::Name, 200))
                    .col(string_len(Beers::Brand, 200))
                    .col(integer(Beers::Max))
                    .col(integer(Beers::Quantity).default(0))
                    .col(
                        ColumnDef::new(Beers::BeerType)
                            .enumeration(BeerType::Enum, BEER_TYPES)
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Beers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Beers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_beers_name_unique")
                    .table(Beers::Table)
                    .col(Beers::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_beers_created_at")
                    .table(Beers::Table)
                    .col(Beers::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Stock bounds hold even when two adjustments race
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE beers
                    ADD CONSTRAINT beers_max_range CHECK (max > 0 AND max <= 500),
                    ADD CONSTRAINT beers_quantity_within_max CHECK (quantity >= 0 AND quantity <= max)
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Beers::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(BeerType::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Beers {
    Table,
    Id,
    Name,
    Brand,
    Max,
    Quantity,
    BeerType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum BeerType {
    #[sea_orm(iden = "beer_type")]
    Enum,
    #[sea_orm(iden = "LAGER")]
    Lager,
    #[sea_orm(iden = "MALZBIER")]
    Malzbier,
    #[sea_orm(iden = "WITBIER")]
    Witbier,
    #[sea_orm(iden = "WEISS")]
    Weiss,
    #[sea_orm(iden = "ALE")]
    Ale,
    #[sea_orm(iden = "IPA")]
    Ipa,
    #[sea_orm(iden = "STOUT")]
    Stout,
}
