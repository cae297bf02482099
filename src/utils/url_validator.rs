//! 目标 URL 校验
//!
//! 动态码只允许跳转到 http/https 地址，且必须带主机名。

use url::Url;

/// 目标 URL 校验错误
#[derive(Debug, PartialEq, Eq)]
pub enum TargetUrlError {
    Empty,
    UnsupportedScheme(String),
    MissingHost,
    Malformed(String),
}

impl std::fmt::Display for TargetUrlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Target URL cannot be empty"),
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "Unsupported scheme '{}': only http:// and https:// targets are allowed",
                scheme
            ),
            Self::MissingHost => write!(f, "Target URL must include a host"),
            Self::Malformed(msg) => write!(f, "Invalid target URL: {}", msg),
        }
    }
}

impl std::error::Error for TargetUrlError {}

/// 校验并返回去除首尾空白后的目标 URL
///
/// `javascript:`、`data:`、`file:` 等协议都落在 `UnsupportedScheme`。
pub fn validate_target_url(raw: &str) -> Result<String, TargetUrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TargetUrlError::Empty);
    }

    let parsed = Url::parse(trimmed).map_err(|e| TargetUrlError::Malformed(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(TargetUrlError::UnsupportedScheme(other.to_string())),
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(TargetUrlError::MissingHost);
    }

    Ok(trimmed.to_string())
}
