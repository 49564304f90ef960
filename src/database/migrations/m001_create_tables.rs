use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Grafikon::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grafikon::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grafikon::Region).string())
                    .col(ColumnDef::new(Grafikon::Promet).integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tabela::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tabela::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tabela::Region).string())
                    .col(ColumnDef::new(Tabela::Promet).integer())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tabela::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grafikon::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Grafikon {
    Table,
    Id,
    Region,
    Promet,
}

#[derive(Iden)]
enum Tabela {
    Table,
    Id,
    Region,
    Promet,
}
