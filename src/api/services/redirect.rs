use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, LOCATION,
};
use actix_web::http::{Method, StatusCode};
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, web};
use futures_util::FutureExt;
use serde::Serialize;
use tracing::{debug, error, trace, warn};

use crate::analytics::ScanRecord;
use crate::api::constants::{
    CODE_QUERY_PARAM, CORS_ALLOW_HEADERS, CORS_ALLOW_ORIGIN, MSG_INTERNAL, MSG_NO_SHORT_CODE,
    MSG_NOT_FOUND, MSG_PAUSED,
};
use crate::errors::{DynQrError, Result};
use crate::storage::{DynamicCode, QrStore};

/// 短码解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Active(DynamicCode),
    Paused,
    Missing,
}

impl Resolution {
    pub fn from_lookup(found: Option<DynamicCode>) -> Self {
        match found {
            Some(code) if code.active => Resolution::Active(code),
            Some(_) => Resolution::Paused,
            None => Resolution::Missing,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

pub struct RedirectService;

impl RedirectService {
    /// 重定向入口：任意方法、任意路径，短码来自 `?code=`
    ///
    /// OPTIONS 预检最先处理；其余失败统一转成 500。
    pub async fn handle_redirect(
        req: HttpRequest,
        store: web::Data<Arc<dyn QrStore>>,
    ) -> HttpResponse {
        if req.method() == Method::OPTIONS {
            trace!("Preflight request for {}", req.path());
            return Self::preflight_response();
        }

        let store = Arc::clone(store.get_ref());
        let outcome = AssertUnwindSafe(Self::process_redirect(&req, store.as_ref()))
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                error!("Redirect failed: {}", e);
                Self::internal_error_response(e.message())
            }
            Err(payload) => {
                let err = DynQrError::internal(panic_message(payload.as_ref()));
                error!("Redirect handler panicked: {}", err.message());
                Self::internal_error_response(err.message())
            }
        }
    }

    async fn process_redirect(req: &HttpRequest, store: &dyn QrStore) -> Result<HttpResponse> {
        let Some(short_code) = Self::extract_short_code(req.query_string()) else {
            debug!("Redirect request without short code");
            return Ok(Self::json_error(StatusCode::BAD_REQUEST, MSG_NO_SHORT_CODE));
        };

        let found = store.find_by_short_code(&short_code).await?;

        match Resolution::from_lookup(found) {
            Resolution::Missing => {
                debug!("Dynamic code not found: {}", short_code);
                Ok(Self::json_error(StatusCode::NOT_FOUND, MSG_NOT_FOUND))
            }
            Resolution::Paused => {
                debug!("Dynamic code is paused: {}", short_code);
                Ok(Self::json_error(StatusCode::NOT_FOUND, MSG_PAUSED))
            }
            Resolution::Active(code) => {
                let record = ScanRecord::from_headers(code.id.clone(), req.headers());
                Self::record_scan(store, &short_code, record).await;
                Ok(Self::redirect_response(&code.target_url))
            }
        }
    }

    /// 取第一个 `code` 参数，空值视为缺失
    pub fn extract_short_code(query: &str) -> Option<String> {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == CODE_QUERY_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    }

    /// 写入扫码日志，错误和 panic 都只记录，不影响重定向
    async fn record_scan(store: &dyn QrStore, short_code: &str, record: ScanRecord) {
        match AssertUnwindSafe(store.log_scan(record)).catch_unwind().await {
            Ok(Ok(event)) => trace!("Scan {} logged for {}", event.id, short_code),
            Ok(Err(e)) => warn!("Failed to log scan for {}: {}", short_code, e),
            Err(payload) => warn!(
                "Scan logging panicked for {}: {}",
                short_code,
                panic_message(payload.as_ref())
            ),
        }
    }

    fn with_cors(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
        builder
            .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, CORS_ALLOW_ORIGIN))
            .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, CORS_ALLOW_HEADERS))
    }

    #[inline]
    fn preflight_response() -> HttpResponse {
        Self::with_cors(&mut HttpResponse::Ok()).finish()
    }

    #[inline]
    fn redirect_response(target_url: &str) -> HttpResponse {
        Self::with_cors(&mut HttpResponse::Found())
            .insert_header((LOCATION, target_url))
            .finish()
    }

    fn json_error(status: StatusCode, message: &str) -> HttpResponse {
        Self::json_body(
            status,
            &ErrorBody {
                error: message,
                details: None,
            },
        )
    }

    fn internal_error_response(details: &str) -> HttpResponse {
        Self::json_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            &ErrorBody {
                error: MSG_INTERNAL,
                details: Some(details),
            },
        )
    }

    fn json_body(status: StatusCode, body: &ErrorBody<'_>) -> HttpResponse {
        Self::with_cors(&mut HttpResponse::build(status))
            .insert_header((CONTENT_TYPE, "application/json"))
            .json(body)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "redirect handler panicked".to_string()
    }
}

/// 重定向作为 App 的 default service，匹配其余所有路径和方法
pub fn redirect_default_service() -> actix_web::Route {
    web::to(RedirectService::handle_redirect)
}
