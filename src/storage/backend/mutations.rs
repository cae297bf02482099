//! Mutation operations for SeaOrmStorage

use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use tracing::debug;

use super::SeaOrmStorage;
use super::converters::dynamic_code_to_active_model;
use crate::errors::Result;
use crate::storage::{CodeUpdate, DynamicCode};

use migration::entities::dynamic_qr_code;

impl SeaOrmStorage {
    pub async fn insert_code(&self, code: &DynamicCode) -> Result<()> {
        dynamic_code_to_active_model(code).insert(&self.db).await?;
        debug!("Inserted dynamic code: {} ({})", code.short_code, code.id);
        Ok(())
    }

    /// 只更新一列并刷新 updated_at，返回是否命中
    pub async fn update_code(
        &self,
        short_code: &str,
        update: CodeUpdate,
        updated_at: DateTime<Utc>,
    ) -> Result<bool> {
        let query = dynamic_qr_code::Entity::update_many();
        let query = match &update {
            CodeUpdate::Name(name) => {
                query.col_expr(dynamic_qr_code::Column::Name, Expr::value(name.clone()))
            }
            CodeUpdate::TargetUrl(url) => {
                query.col_expr(dynamic_qr_code::Column::TargetUrl, Expr::value(url.clone()))
            }
            CodeUpdate::Active(active) => {
                query.col_expr(dynamic_qr_code::Column::Active, Expr::value(*active))
            }
        };

        let result = query
            .col_expr(dynamic_qr_code::Column::UpdatedAt, Expr::value(updated_at))
            .filter(dynamic_qr_code::Column::ShortCode.eq(short_code))
            .exec(&self.db)
            .await?;

        debug!(
            "Updated dynamic code {} ({:?}): {} rows",
            short_code, update, result.rows_affected
        );
        Ok(result.rows_affected > 0)
    }

    /// 删除动态码，扫码记录由外键级联删除
    pub async fn delete_code(&self, id: &str) -> Result<bool> {
        let result = dynamic_qr_code::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
