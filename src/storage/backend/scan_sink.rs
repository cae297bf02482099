//! ScanSink implementation for SeaOrmStorage

use async_trait::async_trait;
use sea_orm::ActiveModelTrait;
use tracing::trace;

use super::SeaOrmStorage;
use super::converters::{model_to_scan_event, scan_record_to_active_model};
use crate::analytics::{ScanRecord, ScanSink};
use crate::errors::Result;
use crate::storage::ScanEvent;

#[async_trait]
impl ScanSink for SeaOrmStorage {
    async fn log_scan(&self, record: ScanRecord) -> Result<ScanEvent> {
        let model = scan_record_to_active_model(record).insert(&self.db).await?;
        trace!(
            "Scan {} recorded for code {}",
            model.id, model.dynamic_code_id
        );
        Ok(model_to_scan_event(model))
    }
}
