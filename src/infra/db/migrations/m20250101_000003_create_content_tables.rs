//! Migration: content entity tables.
//!
//! Every table cascades from its owning portfolio (directly, or through
//! its parent rows) so `deletePortfolio` removes the full content tree.

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_identity_tables::Portfolios;
use super::m20250101_000002_create_menu_tables::PlatformMenus;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn portfolio_scoped_fk<T: Iden + 'static>(table: T, column: impl Iden + 'static, name: &str) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(Portfolios::Table, Portfolios::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SkillGroups::Table)
                    .col(ColumnDef::new(SkillGroups::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(SkillGroups::PortfolioId).uuid().not_null())
                    .col(ColumnDef::new(SkillGroups::PlatformMenuId).uuid().not_null())
                    .col(ColumnDef::new(SkillGroups::Title).string().not_null())
                    .col(ColumnDef::new(SkillGroups::SortOrder).integer().not_null())
                    .col(ColumnDef::new(SkillGroups::Visible).boolean().not_null().default(true))
                    .foreign_key(&mut portfolio_scoped_fk(
                        SkillGroups::Table,
                        SkillGroups::PortfolioId,
                        "fk_skill_groups_portfolio",
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skill_groups_platform_menu")
                            .from(SkillGroups::Table, SkillGroups::PlatformMenuId)
                            .to(PlatformMenus::Table, PlatformMenus::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .col(ColumnDef::new(Skills::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Skills::SkillGroupId).uuid().not_null())
                    .col(ColumnDef::new(Skills::Name).string().not_null())
                    .col(ColumnDef::new(Skills::Level).integer().null())
                    .col(ColumnDef::new(Skills::SortOrder).integer().not_null())
                    .col(ColumnDef::new(Skills::Visible).boolean().not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skills_skill_group")
                            .from(Skills::Table, Skills::SkillGroupId)
                            .to(SkillGroups::Table, SkillGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .col(ColumnDef::new(Projects::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Projects::PortfolioId).uuid().not_null())
                    .col(ColumnDef::new(Projects::PlatformMenuId).uuid().not_null())
                    .col(ColumnDef::new(Projects::Title).string().not_null())
                    .col(ColumnDef::new(Projects::Summary).text().null())
                    .col(ColumnDef::new(Projects::RepoUrl).string().null())
                    .col(ColumnDef::new(Projects::LiveUrl).string().null())
                    .col(ColumnDef::new(Projects::Highlights).json_binary().not_null())
                    .col(ColumnDef::new(Projects::Tags).json_binary().not_null())
                    .col(ColumnDef::new(Projects::SortOrder).integer().not_null())
                    .col(ColumnDef::new(Projects::Visible).boolean().not_null().default(true))
                    .foreign_key(&mut portfolio_scoped_fk(
                        Projects::Table,
                        Projects::PortfolioId,
                        "fk_projects_portfolio",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .col(ColumnDef::new(Experiences::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Experiences::PortfolioId).uuid().not_null())
                    .col(ColumnDef::new(Experiences::PlatformMenuId).uuid().not_null())
                    .col(ColumnDef::new(Experiences::Company).string().not_null())
                    .col(ColumnDef::new(Experiences::Position).string().not_null())
                    .col(ColumnDef::new(Experiences::Summary).text().null())
                    .col(ColumnDef::new(Experiences::StartDate).date().null())
                    .col(ColumnDef::new(Experiences::EndDate).date().null())
                    .col(ColumnDef::new(Experiences::Highlights).json_binary().not_null())
                    .col(ColumnDef::new(Experiences::SortOrder).integer().not_null())
                    .col(ColumnDef::new(Experiences::Visible).boolean().not_null().default(true))
                    .foreign_key(&mut portfolio_scoped_fk(
                        Experiences::Table,
                        Experiences::PortfolioId,
                        "fk_experiences_portfolio",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AboutContents::Table)
                    .col(ColumnDef::new(AboutContents::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(AboutContents::PortfolioId).uuid().not_null())
                    .col(ColumnDef::new(AboutContents::PlatformMenuId).uuid().not_null())
                    .col(ColumnDef::new(AboutContents::Heading).string().not_null())
                    .col(ColumnDef::new(AboutContents::Paragraphs).json_binary().not_null())
                    .col(ColumnDef::new(AboutContents::Visible).boolean().not_null().default(true))
                    .foreign_key(&mut portfolio_scoped_fk(
                        AboutContents::Table,
                        AboutContents::PortfolioId,
                        "fk_about_contents_portfolio",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Principles::Table)
                    .col(ColumnDef::new(Principles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Principles::AboutContentId).uuid().not_null())
                    .col(ColumnDef::new(Principles::Title).string().not_null())
                    .col(ColumnDef::new(Principles::Body).text().not_null())
                    .col(ColumnDef::new(Principles::SortOrder).integer().not_null())
                    .col(ColumnDef::new(Principles::Visible).boolean().not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_principles_about_content")
                            .from(Principles::Table, Principles::AboutContentId)
                            .to(AboutContents::Table, AboutContents::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArchitectureContents::Table)
                    .col(ColumnDef::new(ArchitectureContents::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(ArchitectureContents::PortfolioId).uuid().not_null())
                    .col(ColumnDef::new(ArchitectureContents::PlatformMenuId).uuid().not_null())
                    .col(ColumnDef::new(ArchitectureContents::Heading).string().not_null())
                    .col(ColumnDef::new(ArchitectureContents::Summary).text().null())
                    .col(ColumnDef::new(ArchitectureContents::Visible).boolean().not_null().default(true))
                    .foreign_key(&mut portfolio_scoped_fk(
                        ArchitectureContents::Table,
                        ArchitectureContents::PortfolioId,
                        "fk_architecture_contents_portfolio",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Pillars::Table)
                    .col(ColumnDef::new(Pillars::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Pillars::ArchitectureContentId).uuid().not_null())
                    .col(ColumnDef::new(Pillars::Title).string().not_null())
                    .col(ColumnDef::new(Pillars::SortOrder).integer().not_null())
                    .col(ColumnDef::new(Pillars::Visible).boolean().not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pillars_architecture_content")
                            .from(Pillars::Table, Pillars::ArchitectureContentId)
                            .to(ArchitectureContents::Table, ArchitectureContents::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PillarPoints::Table)
                    .col(ColumnDef::new(PillarPoints::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(PillarPoints::PillarId).uuid().not_null())
                    .col(ColumnDef::new(PillarPoints::Text).text().not_null())
                    .col(ColumnDef::new(PillarPoints::SortOrder).integer().not_null())
                    .col(ColumnDef::new(PillarPoints::Visible).boolean().not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pillar_points_pillar")
                            .from(PillarPoints::Table, PillarPoints::PillarId)
                            .to(Pillars::Table, Pillars::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PersonInfos::Table)
                    .col(ColumnDef::new(PersonInfos::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(PersonInfos::PortfolioId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(PersonInfos::FullName).string().not_null())
                    .col(ColumnDef::new(PersonInfos::Headline).string().null())
                    .col(ColumnDef::new(PersonInfos::Email).string().null())
                    .col(ColumnDef::new(PersonInfos::Location).string().null())
                    .col(ColumnDef::new(PersonInfos::AvatarUrl).string().null())
                    .col(ColumnDef::new(PersonInfos::CvUrl).string().null())
                    .col(ColumnDef::new(PersonInfos::Visible).boolean().not_null().default(true))
                    .foreign_key(&mut portfolio_scoped_fk(
                        PersonInfos::Table,
                        PersonInfos::PortfolioId,
                        "fk_person_infos_portfolio",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HeroContents::Table)
                    .col(ColumnDef::new(HeroContents::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(HeroContents::PortfolioId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(HeroContents::Heading).string().not_null())
                    .col(ColumnDef::new(HeroContents::Subheading).text().null())
                    .col(ColumnDef::new(HeroContents::CtaLabel).string().null())
                    .col(ColumnDef::new(HeroContents::CtaUrl).string().null())
                    .col(ColumnDef::new(HeroContents::Visible).boolean().not_null().default(true))
                    .foreign_key(&mut portfolio_scoped_fk(
                        HeroContents::Table,
                        HeroContents::PortfolioId,
                        "fk_hero_contents_portfolio",
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HeroContents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PersonInfos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PillarPoints::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pillars::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ArchitectureContents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Principles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AboutContents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SkillGroups::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum SkillGroups {
    Table,
    Id,
    PortfolioId,
    PlatformMenuId,
    Title,
    SortOrder,
    Visible,
}

#[derive(Iden)]
pub enum Skills {
    Table,
    Id,
    SkillGroupId,
    Name,
    Level,
    SortOrder,
    Visible,
}

#[derive(Iden)]
pub enum Projects {
    Table,
    Id,
    PortfolioId,
    PlatformMenuId,
    Title,
    Summary,
    RepoUrl,
    LiveUrl,
    Highlights,
    Tags,
    SortOrder,
    Visible,
}

#[derive(Iden)]
pub enum Experiences {
    Table,
    Id,
    PortfolioId,
    PlatformMenuId,
    Company,
    Position,
    Summary,
    StartDate,
    EndDate,
    Highlights,
    SortOrder,
    Visible,
}

#[derive(Iden)]
pub enum AboutContents {
    Table,
    Id,
    PortfolioId,
    PlatformMenuId,
    Heading,
    Paragraphs,
    Visible,
}

#[derive(Iden)]
pub enum Principles {
    Table,
    Id,
    AboutContentId,
    Title,
    Body,
    SortOrder,
    Visible,
}

#[derive(Iden)]
pub enum ArchitectureContents {
    Table,
    Id,
    PortfolioId,
    PlatformMenuId,
    Heading,
    Summary,
    Visible,
}

#[derive(Iden)]
pub enum Pillars {
    Table,
    Id,
    ArchitectureContentId,
    Title,
    SortOrder,
    Visible,
}

#[derive(Iden)]
pub enum PillarPoints {
    Table,
    Id,
    PillarId,
    Text,
    SortOrder,
    Visible,
}

#[derive(Iden)]
pub enum PersonInfos {
    Table,
    Id,
    PortfolioId,
    FullName,
    Headline,
    Email,
    Location,
    AvatarUrl,
    CvUrl,
    Visible,
}

#[derive(Iden)]
pub enum HeroContents {
    Table,
    Id,
    PortfolioId,
    Heading,
    Subheading,
    CtaLabel,
    CtaUrl,
    Visible,
}
