use std::sync::Arc;

use async_trait::async_trait;

use crate::analytics::ScanSink;
use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::SeaOrmStorage;
pub use models::{CodeUpdate, DynamicCode, ScanEvent, StorageConfig};

/// Store seam used by the redirect handler
///
/// One lookup returns the whole row; the caller decides between
/// "active", "paused" and "missing" from the `active` flag. Scan inserts
/// come from the `ScanSink` supertrait.
#[async_trait]
pub trait QrStore: ScanSink {
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<DynamicCode>>;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<SeaOrmStorage>> {
        let database_url = &config.database_url;

        // 从 URL 自动推断数据库类型
        let backend_type = backend::infer_backend_from_url(database_url)?;

        let storage = SeaOrmStorage::new(database_url, &backend_type, config).await?;
        Ok(Arc::new(storage))
    }
}
