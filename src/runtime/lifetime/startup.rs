use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::storage::{QrStore, SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    /// Concrete storage, used by the health check and shutdown
    pub storage: Arc<SeaOrmStorage>,
    /// Same storage behind the handler seam
    pub store: Arc<dyn QrStore>,
}

/// 准备服务器启动的上下文
///
/// 缺少数据库连接串时直接失败，不会进入监听状态。
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    config
        .validate()
        .context("Invalid configuration")?;

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    info!(
        "Using storage backend: {}",
        storage.get_backend_config().storage_type
    );

    let store: Arc<dyn QrStore> = storage.clone();

    info!("Pre-startup completed in {:?}", start_time.elapsed());
    Ok(StartupContext { storage, store })
}
