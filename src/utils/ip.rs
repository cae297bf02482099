//! 请求头中的客户端 IP 提取
//!
//! 只读取代理写入的 header，不做可信代理校验；结果仅用于扫码统计。

use actix_web::http::header::HeaderMap;

/// 读取 header 字符串值，空值视为不存在
///
/// 非 ASCII 字节按 UTF-8 解码，无效序列替换为 U+FFFD。
pub fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|h| String::from_utf8_lossy(h.as_bytes()))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// 从请求头提取客户端 IP（X-Forwarded-For 第一跳，其次 X-Real-IP）
pub fn extract_forwarded_ip_from_headers(headers: &HeaderMap) -> Option<String> {
    header_str(headers, "x-forwarded-for")
        .and_then(|s| s.split(',').next().map(|hop| hop.trim().to_string()))
        .filter(|s| !s.is_empty())
        .or_else(|| header_str(headers, "x-real-ip"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::{HeaderName, HeaderValue};

    fn map(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (k, v) in pairs {
            headers.insert(HeaderName::from_static(k), HeaderValue::from_static(v));
        }
        headers
    }

    #[test]
    fn test_forwarded_for_first_hop() {
        let headers = map(&[("x-forwarded-for", " 198.51.100.4 , 10.0.0.2")]);
        assert_eq!(
            extract_forwarded_ip_from_headers(&headers).as_deref(),
            Some("198.51.100.4")
        );
    }

    #[test]
    fn test_forwarded_for_wins_over_real_ip() {
        let headers = map(&[("x-forwarded-for", "198.51.100.4"), ("x-real-ip", "192.0.2.1")]);
        assert_eq!(
            extract_forwarded_ip_from_headers(&headers).as_deref(),
            Some("198.51.100.4")
        );
    }

    #[test]
    fn test_real_ip_fallback() {
        let headers = map(&[("x-real-ip", "192.0.2.1")]);
        assert_eq!(
            extract_forwarded_ip_from_headers(&headers).as_deref(),
            Some("192.0.2.1")
        );

        let headers = map(&[("x-forwarded-for", ""), ("x-real-ip", "192.0.2.1")]);
        assert_eq!(
            extract_forwarded_ip_from_headers(&headers).as_deref(),
            Some("192.0.2.1")
        );
    }

    #[test]
    fn test_header_str_keeps_non_ascii() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("user-agent"),
            HeaderValue::from_bytes("Mozilla/5.0 Café".as_bytes()).unwrap(),
        );
        headers.insert(
            HeaderName::from_static("referer"),
            HeaderValue::from_bytes(b"https://caf\xe9.example").unwrap(),
        );

        assert_eq!(
            header_str(&headers, "user-agent").as_deref(),
            Some("Mozilla/5.0 Café")
        );
        assert_eq!(
            header_str(&headers, "referer").as_deref(),
            Some("https://caf\u{FFFD}.example")
        );
    }

    #[test]
    fn test_header_str_blank_is_absent() {
        let headers = map(&[("user-agent", "   ")]);
        assert_eq!(header_str(&headers, "user-agent"), None);
    }

    #[test]
    fn test_no_ip_headers() {
        assert_eq!(extract_forwarded_ip_from_headers(&HeaderMap::new()), None);
    }
}
