//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use dynqr::config::{CodesConfig, DatabaseConfig};
use dynqr::services::{CodeService, CreateCodeRequest};
use dynqr::storage::{DynamicCode, SeaOrmStorage, StorageFactory};
use tempfile::TempDir;

/// Temporary SQLite database with migrations applied
pub struct TestEnv {
    // 持有目录，drop 时清理数据库文件
    _dir: TempDir,
    pub storage: Arc<SeaOrmStorage>,
    pub service: CodeService,
}

pub async fn setup() -> TestEnv {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("dynqr_test.db");
    let config = DatabaseConfig {
        database_url: format!("sqlite://{}", db_path.display()),
        ..Default::default()
    };

    let storage = StorageFactory::create(&config)
        .await
        .expect("Failed to create storage");
    let service = CodeService::new(storage.clone(), &CodesConfig::default());

    TestEnv {
        _dir: dir,
        storage,
        service,
    }
}

impl TestEnv {
    pub async fn create(&self, name: &str, target_url: &str) -> DynamicCode {
        self.service
            .create(CreateCodeRequest {
                user_id: "user-1".to_string(),
                name: name.to_string(),
                target_url: target_url.to_string(),
            })
            .await
            .expect("Failed to create code")
    }

    pub async fn create_paused(&self, name: &str, target_url: &str) -> DynamicCode {
        let code = self.create(name, target_url).await;
        self.service
            .set_active(&code.short_code, false)
            .await
            .expect("Failed to pause code")
    }

    pub async fn scans_of(&self, code: &DynamicCode) -> u64 {
        self.storage
            .count_scans(&code.id)
            .await
            .expect("Failed to count scans")
    }
}
