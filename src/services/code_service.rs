//! Dynamic code management service
//!
//! Business logic behind the management CLI: creating codes with a unique
//! random short code, renaming, retargeting, pausing/resuming, deleting and
//! summarising scans. The redirect handler never goes through here.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::CodesConfig;
use crate::errors::{DynQrError, Result};
use crate::storage::{CodeUpdate, DynamicCode, ScanEvent, SeaOrmStorage};
use crate::utils::generate_random_code;
use crate::utils::url_validator::validate_target_url;

/// Request to create a new dynamic code
#[derive(Debug, Clone)]
pub struct CreateCodeRequest {
    pub user_id: String,
    pub name: String,
    pub target_url: String,
}

/// Scan totals plus the newest scans of one code
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub code: DynamicCode,
    pub total_scans: u64,
    pub recent: Vec<ScanEvent>,
}

pub struct CodeService {
    storage: Arc<SeaOrmStorage>,
    code_length: usize,
    max_generate_attempts: u32,
}

impl CodeService {
    pub fn new(storage: Arc<SeaOrmStorage>, config: &CodesConfig) -> Self {
        Self {
            storage,
            code_length: config.code_length.max(1),
            max_generate_attempts: config.max_generate_attempts.max(1),
        }
    }

    fn check_target(target_url: &str) -> Result<String> {
        validate_target_url(target_url).map_err(|e| DynQrError::validation(e.to_string()))
    }

    fn check_name(name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DynQrError::validation("Name cannot be empty"));
        }
        Ok(name.to_string())
    }

    /// 生成未被占用的短码
    async fn generate_unique_code(&self) -> Result<String> {
        for attempt in 1..=self.max_generate_attempts {
            let candidate = generate_random_code(self.code_length);
            if !self.storage.short_code_exists(&candidate).await? {
                return Ok(candidate);
            }
            warn!(
                "Short code collision on attempt {}: {}",
                attempt, candidate
            );
        }
        Err(DynQrError::code_generation(format!(
            "No free short code of length {} after {} attempts",
            self.code_length, self.max_generate_attempts
        )))
    }

    pub async fn create(&self, req: CreateCodeRequest) -> Result<DynamicCode> {
        let user_id = req.user_id.trim();
        if user_id.is_empty() {
            return Err(DynQrError::validation("User id cannot be empty"));
        }
        let name = Self::check_name(&req.name)?;
        let target_url = Self::check_target(&req.target_url)?;
        let short_code = self.generate_unique_code().await?;

        let now = Utc::now();
        let code = DynamicCode {
            id: Uuid::new_v4().to_string(),
            short_code,
            target_url,
            active: true,
            name,
            created_at: now,
            updated_at: now,
            user_id: user_id.to_string(),
        };

        self.storage.insert_code(&code).await?;
        info!(
            "Created dynamic code {} -> {} for user {}",
            code.short_code, code.target_url, code.user_id
        );
        Ok(code)
    }

    pub async fn get(&self, short_code: &str) -> Result<DynamicCode> {
        self.storage
            .get_by_short_code(short_code)
            .await?
            .ok_or_else(|| DynQrError::not_found(format!("Dynamic code not found: {}", short_code)))
    }

    pub async fn list(&self, user_id: Option<&str>) -> Result<Vec<DynamicCode>> {
        self.storage.list_codes(user_id).await
    }

    /// 单列更新后重新读取
    async fn modify(&self, short_code: &str, update: CodeUpdate) -> Result<DynamicCode> {
        if !self
            .storage
            .update_code(short_code, update, Utc::now())
            .await?
        {
            return Err(DynQrError::not_found(format!(
                "Dynamic code not found: {}",
                short_code
            )));
        }
        self.get(short_code).await
    }

    pub async fn rename(&self, short_code: &str, name: &str) -> Result<DynamicCode> {
        let name = Self::check_name(name)?;
        let code = self.modify(short_code, CodeUpdate::Name(name)).await?;
        info!("Renamed dynamic code {} to '{}'", code.short_code, code.name);
        Ok(code)
    }

    pub async fn retarget(&self, short_code: &str, target_url: &str) -> Result<DynamicCode> {
        let target_url = Self::check_target(target_url)?;
        let code = self
            .modify(short_code, CodeUpdate::TargetUrl(target_url))
            .await?;
        info!(
            "Retargeted dynamic code {} -> {}",
            code.short_code, code.target_url
        );
        Ok(code)
    }

    pub async fn set_active(&self, short_code: &str, active: bool) -> Result<DynamicCode> {
        let code = self.modify(short_code, CodeUpdate::Active(active)).await?;
        info!(
            "Dynamic code {} is now {}",
            code.short_code,
            if active { "active" } else { "paused" }
        );
        Ok(code)
    }

    pub async fn delete(&self, short_code: &str) -> Result<DynamicCode> {
        let code = self.get(short_code).await?;
        if !self.storage.delete_code(&code.id).await? {
            return Err(DynQrError::not_found(format!(
                "Dynamic code not found: {}",
                short_code
            )));
        }
        info!("Deleted dynamic code {}", code.short_code);
        Ok(code)
    }

    pub async fn scan_summary(&self, short_code: &str, limit: u64) -> Result<ScanSummary> {
        let code = self.get(short_code).await?;
        let total_scans = self.storage.count_scans(&code.id).await?;
        let recent = self.storage.recent_scans(&code.id, limit).await?;
        Ok(ScanSummary {
            code,
            total_scans,
            recent,
        })
    }
}
