//! API 模块常量定义
//!
//! 重定向接口的 CORS header、查询参数名与固定错误消息。

/// 短码查询参数名
pub const CODE_QUERY_PARAM: &str = "code";

/// Access-Control-Allow-Origin
pub const CORS_ALLOW_ORIGIN: &str = "*";

/// Access-Control-Allow-Headers
pub const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// 缺少短码参数
pub const MSG_NO_SHORT_CODE: &str = "No short code provided";

/// 短码不存在
pub const MSG_NOT_FOUND: &str = "QR code not found or inactive";

/// 短码存在但已暂停
pub const MSG_PAUSED: &str = "QR code is paused";

/// 未预期错误
pub const MSG_INTERNAL: &str = "Internal server error";
