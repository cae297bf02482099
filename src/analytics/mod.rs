pub mod sink;

pub use sink::ScanSink;

use actix_web::http::header::{HeaderMap, REFERER, USER_AGENT};
use chrono::{DateTime, Utc};

use crate::utils::ip::{extract_forwarded_ip_from_headers, header_str};

/// 待写入的扫码信息
///
/// 可选字段只在请求带有对应（非空）header 时填充。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    /// 动态码内部 id
    pub dynamic_code_id: String,
    /// 服务端生成的扫码时间
    pub scanned_at: DateTime<Utc>,
    /// User-Agent header
    pub user_agent: Option<String>,
    /// Referer header，其次 Referrer
    pub referrer: Option<String>,
    /// X-Forwarded-For 第一跳，其次 X-Real-IP
    pub ip_address: Option<String>,
}

impl ScanRecord {
    pub fn new(dynamic_code_id: impl Into<String>) -> Self {
        Self {
            dynamic_code_id: dynamic_code_id.into(),
            scanned_at: Utc::now(),
            user_agent: None,
            referrer: None,
            ip_address: None,
        }
    }

    /// 从请求头提取扫码元数据
    pub fn from_headers(dynamic_code_id: impl Into<String>, headers: &HeaderMap) -> Self {
        let mut record = Self::new(dynamic_code_id);
        record.user_agent = header_str(headers, USER_AGENT.as_str());
        record.referrer =
            header_str(headers, REFERER.as_str()).or_else(|| header_str(headers, "referrer"));
        record.ip_address = extract_forwarded_ip_from_headers(headers);
        record
    }
}
