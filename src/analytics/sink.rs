use super::ScanRecord;
use crate::errors::Result;
use crate::storage::ScanEvent;

/// 扫码日志 Sink
///
/// 写入失败以 `Err` 返回；重定向路径只记录日志后丢弃，不影响响应。
#[async_trait::async_trait]
pub trait ScanSink: Send + Sync {
    async fn log_scan(&self, record: ScanRecord) -> Result<ScanEvent>;
}
