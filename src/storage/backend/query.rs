//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::trace;

use super::SeaOrmStorage;
use super::converters::{model_to_dynamic_code, model_to_scan_event};
use crate::errors::Result;
use crate::storage::{DynamicCode, QrStore, ScanEvent};

use migration::entities::{dynamic_qr_code, qr_scan};

impl SeaOrmStorage {
    /// 按短码查询，不过滤 active
    pub async fn get_by_short_code(&self, short_code: &str) -> Result<Option<DynamicCode>> {
        trace!("Looking up dynamic code: {}", short_code);
        let model = dynamic_qr_code::Entity::find()
            .filter(dynamic_qr_code::Column::ShortCode.eq(short_code))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_dynamic_code))
    }

    pub async fn short_code_exists(&self, short_code: &str) -> Result<bool> {
        let count = dynamic_qr_code::Entity::find()
            .filter(dynamic_qr_code::Column::ShortCode.eq(short_code))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    /// 按创建时间倒序列出，可按所有者过滤
    pub async fn list_codes(&self, user_id: Option<&str>) -> Result<Vec<DynamicCode>> {
        let mut query = dynamic_qr_code::Entity::find();
        if let Some(user_id) = user_id {
            query = query.filter(dynamic_qr_code::Column::UserId.eq(user_id));
        }

        let models = query
            .order_by_desc(dynamic_qr_code::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_dynamic_code).collect())
    }

    pub async fn count_codes(&self) -> Result<u64> {
        Ok(dynamic_qr_code::Entity::find().count(&self.db).await?)
    }

    pub async fn count_scans(&self, dynamic_code_id: &str) -> Result<u64> {
        let count = qr_scan::Entity::find()
            .filter(qr_scan::Column::DynamicCodeId.eq(dynamic_code_id))
            .count(&self.db)
            .await?;
        Ok(count)
    }

    /// 最近的扫码记录（新的在前）
    pub async fn recent_scans(&self, dynamic_code_id: &str, limit: u64) -> Result<Vec<ScanEvent>> {
        let models = qr_scan::Entity::find()
            .filter(qr_scan::Column::DynamicCodeId.eq(dynamic_code_id))
            .order_by_desc(qr_scan::Column::ScannedAt)
            .order_by_desc(qr_scan::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_scan_event).collect())
    }
}

#[async_trait]
impl QrStore for SeaOrmStorage {
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<DynamicCode>> {
        self.get_by_short_code(short_code).await
    }
}
