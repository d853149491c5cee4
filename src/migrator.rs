use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_inspections_table::Migration)]
    }
}

mod m20240101_000001_create_inspections_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_inspections_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // Columns aligned with entities::inspection::Model
            manager
                .create_table(
                    Table::create()
                        .table(Inspections::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Inspections::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Inspections::Date).string().not_null())
                        .col(ColumnDef::new(Inspections::Location).string().not_null())
                        .col(ColumnDef::new(Inspections::UnitNo).string().not_null())
                        .col(ColumnDef::new(Inspections::SerialNo).string().not_null())
                        .col(
                            ColumnDef::new(Inspections::ManufactureDate)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Inspections::Condition).string().not_null())
                        .col(ColumnDef::new(Inspections::Inspector).string().not_null())
                        .col(
                            ColumnDef::new(Inspections::Weight)
                                .decimal_len(16, 4)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Inspections::Notes).string().not_null())
                        .col(ColumnDef::new(Inspections::Type).string().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Inspections::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Inspections {
        Table,
        Id,
        Date,
        Location,
        UnitNo,
        SerialNo,
        ManufactureDate,
        Condition,
        Inspector,
        Weight,
        Notes,
        Type,
    }
}
