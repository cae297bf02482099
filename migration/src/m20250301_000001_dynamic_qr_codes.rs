//! 动态二维码表迁移
//!
//! 创建 dynamic_qr_codes 表：短码唯一，按所有者和创建时间建索引。

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DynamicQrCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DynamicQrCodes::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DynamicQrCodes::ShortCode)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DynamicQrCodes::TargetUrl).text().not_null())
                    .col(
                        ColumnDef::new(DynamicQrCodes::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(DynamicQrCodes::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DynamicQrCodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DynamicQrCodes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DynamicQrCodes::UserId)
                            .string_len(64)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 短码唯一索引（重定向查询走这里）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_dynamic_qr_codes_short_code")
                    .table(DynamicQrCodes::Table)
                    .col(DynamicQrCodes::ShortCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_dynamic_qr_codes_user_created")
                    .table(DynamicQrCodes::Table)
                    .col(DynamicQrCodes::UserId)
                    .col(DynamicQrCodes::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_dynamic_qr_codes_user_created")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_dynamic_qr_codes_short_code")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DynamicQrCodes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum DynamicQrCodes {
    #[sea_orm(iden = "dynamic_qr_codes")]
    Table,
    Id,
    ShortCode,
    TargetUrl,
    Active,
    Name,
    CreatedAt,
    UpdatedAt,
    UserId,
}
