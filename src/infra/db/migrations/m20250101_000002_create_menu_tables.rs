//! Migration: platform menus, portfolio menu instances, menu blocks.

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_identity_tables::Portfolios;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlatformMenus::Table)
                    .col(
                        ColumnDef::new(PlatformMenus::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PlatformMenus::Key)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PlatformMenus::Label).string().not_null())
                    .col(ColumnDef::new(PlatformMenus::SectionType).string().null())
                    .col(
                        ColumnDef::new(PlatformMenus::ComponentKeys)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PlatformMenus::SortOrder).integer().not_null())
                    .col(
                        ColumnDef::new(PlatformMenus::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PlatformMenus::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlatformMenus::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PortfolioMenus::Table)
                    .col(
                        ColumnDef::new(PortfolioMenus::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PortfolioMenus::PortfolioId).uuid().not_null())
                    .col(
                        ColumnDef::new(PortfolioMenus::PlatformMenuId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioMenus::Visible)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(PortfolioMenus::SortOrder).integer().not_null())
                    .col(
                        ColumnDef::new(PortfolioMenus::PublishedVisible)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PortfolioMenus::PublishedSortOrder)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_menus_portfolio")
                            .from(PortfolioMenus::Table, PortfolioMenus::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_menus_platform_menu")
                            .from(PortfolioMenus::Table, PortfolioMenus::PlatformMenuId)
                            .to(PlatformMenus::Table, PlatformMenus::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_portfolio_menus_portfolio_platform")
                    .table(PortfolioMenus::Table)
                    .col(PortfolioMenus::PortfolioId)
                    .col(PortfolioMenus::PlatformMenuId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MenuBlocks::Table)
                    .col(
                        ColumnDef::new(MenuBlocks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MenuBlocks::PortfolioMenuId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MenuBlocks::ComponentKey).string().not_null())
                    .col(ColumnDef::new(MenuBlocks::SortOrder).integer().not_null())
                    .col(ColumnDef::new(MenuBlocks::Data).json_binary().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_blocks_portfolio_menu")
                            .from(MenuBlocks::Table, MenuBlocks::PortfolioMenuId)
                            .to(PortfolioMenus::Table, PortfolioMenus::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Order reassignment relies on this constraint; the two-phase
        // offset technique keeps intermediate states valid.
        manager
            .create_index(
                Index::create()
                    .name("idx_menu_blocks_menu_order")
                    .table(MenuBlocks::Table)
                    .col(MenuBlocks::PortfolioMenuId)
                    .col(MenuBlocks::SortOrder)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuBlocks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PortfolioMenus::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlatformMenus::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PlatformMenus {
    Table,
    Id,
    Key,
    Label,
    SectionType,
    ComponentKeys,
    SortOrder,
    Enabled,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub enum PortfolioMenus {
    Table,
    Id,
    PortfolioId,
    PlatformMenuId,
    Visible,
    SortOrder,
    PublishedVisible,
    PublishedSortOrder,
}

#[derive(Iden)]
pub enum MenuBlocks {
    Table,
    Id,
    PortfolioMenuId,
    ComponentKey,
    SortOrder,
    Data,
}
