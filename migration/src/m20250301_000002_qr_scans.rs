//! 扫码日志表迁移
//!
//! 创建 qr_scans 表，每次成功解析动态码写入一行：
//! - 时间戳
//! - 来源 (referrer)、用户代理、IP
//! - 地理位置列（由外部流程回填，重定向处理器不写）

use sea_orm_migration::prelude::*;

use crate::m20250301_000001_dynamic_qr_codes::DynamicQrCodes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QrScans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QrScans::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(QrScans::DynamicCodeId)
                            .string_len(36)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QrScans::ScannedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(QrScans::UserAgent).text().null())
                    .col(ColumnDef::new(QrScans::Referrer).text().null())
                    .col(ColumnDef::new(QrScans::IpAddress).string_len(45).null())
                    .col(ColumnDef::new(QrScans::Country).string_len(2).null())
                    .col(ColumnDef::new(QrScans::City).string_len(100).null())
                    .col(ColumnDef::new(QrScans::Latitude).double().null())
                    .col(ColumnDef::new(QrScans::Longitude).double().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_qr_scans_dynamic_code_id")
                            .from(QrScans::Table, QrScans::DynamicCodeId)
                            .to(DynamicQrCodes::Table, DynamicQrCodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 单码时间序列查询
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_qr_scans_code_time")
                    .table(QrScans::Table)
                    .col(QrScans::DynamicCodeId)
                    .col(QrScans::ScannedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_qr_scans_code_time").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(QrScans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum QrScans {
    #[sea_orm(iden = "qr_scans")]
    Table,
    Id,
    DynamicCodeId,
    ScannedAt,
    UserAgent,
    Referrer,
    IpAddress,
    Country,
    City,
    Latitude,
    Longitude,
}
