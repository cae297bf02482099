//! CodeService tests
//!
//! Management operations against a temporary SQLite database.

mod common;

use dynqr::analytics::{ScanRecord, ScanSink};
use dynqr::config::CodesConfig;
use dynqr::errors::DynQrError;
use dynqr::services::{CodeService, CreateCodeRequest};

use common::setup;

fn request(name: &str, target_url: &str) -> CreateCodeRequest {
    CreateCodeRequest {
        user_id: "user-1".to_string(),
        name: name.to_string(),
        target_url: target_url.to_string(),
    }
}

#[tokio::test]
async fn test_create_generates_active_alphanumeric_code() {
    let env = setup().await;
    let code = env.create("  Menu  ", "https://example.com/menu").await;

    assert_eq!(code.short_code.len(), 8);
    assert!(code.short_code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(code.active);
    assert_eq!(code.name, "Menu");
    assert_eq!(code.created_at, code.updated_at);

    let stored = env.service.get(&code.short_code).await.unwrap();
    assert_eq!(stored.id, code.id);
    assert_eq!(stored.target_url, "https://example.com/menu");
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
    let env = setup().await;

    for target in ["", "ftp://example.com", "javascript:alert(1)", "not a url"] {
        let err = env.service.create(request("Menu", target)).await.unwrap_err();
        assert!(
            matches!(err, DynQrError::Validation(_)),
            "target {:?} gave {:?}",
            target,
            err
        );
    }

    let err = env
        .service
        .create(request("   ", "https://example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, DynQrError::Validation(_)));

    let err = env
        .service
        .create(CreateCodeRequest {
            user_id: String::new(),
            name: "Menu".to_string(),
            target_url: "https://example.com".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DynQrError::Validation(_)));

    assert!(env.service.list(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_code_generation_exhausted() {
    let env = setup().await;
    // 长度 1 只有 62 种组合，占满后必然失败
    let service = CodeService::new(
        env.storage.clone(),
        &CodesConfig {
            code_length: 1,
            max_generate_attempts: 200,
        },
    );
    let mut created = 0;
    let mut last_err = None;
    for i in 0..70 {
        match service
            .create(request(&format!("code {}", i), "https://example.com"))
            .await
        {
            Ok(_) => created += 1,
            Err(e) => {
                last_err = Some(e);
                break;
            }
        }
    }
    assert!(created <= 62);
    assert!(matches!(last_err, Some(DynQrError::CodeGeneration(_))));
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let env = setup().await;
    let err = env.service.get("Missing1").await.unwrap_err();
    assert!(matches!(err, DynQrError::NotFound(_)));
}

#[tokio::test]
async fn test_list_filters_by_owner() {
    let env = setup().await;
    env.create("A", "https://example.com/a").await;
    env.create("B", "https://example.com/b").await;
    env.service
        .create(CreateCodeRequest {
            user_id: "user-2".to_string(),
            name: "C".to_string(),
            target_url: "https://example.com/c".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(env.service.list(None).await.unwrap().len(), 3);

    let mine = env.service.list(Some("user-1")).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|c| c.user_id == "user-1"));
    assert!(mine[0].created_at >= mine[1].created_at);

    assert!(env.service.list(Some("nobody")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rename_retarget_and_toggle() {
    let env = setup().await;
    let code = env.create("Menu", "https://example.com/menu").await;

    let renamed = env.service.rename(&code.short_code, "Lunch menu").await.unwrap();
    assert_eq!(renamed.name, "Lunch menu");
    assert!(renamed.updated_at >= code.updated_at);

    let retargeted = env
        .service
        .retarget(&code.short_code, "https://example.com/lunch")
        .await
        .unwrap();
    assert_eq!(retargeted.target_url, "https://example.com/lunch");

    let paused = env.service.set_active(&code.short_code, false).await.unwrap();
    assert!(!paused.active);

    let stored = env.service.get(&code.short_code).await.unwrap();
    assert_eq!(stored.name, "Lunch menu");
    assert_eq!(stored.target_url, "https://example.com/lunch");
    assert!(!stored.active);
    assert_eq!(stored.short_code, code.short_code);

    let resumed = env.service.set_active(&code.short_code, true).await.unwrap();
    assert!(resumed.active);
}

#[tokio::test]
async fn test_rename_after_pause_keeps_both_changes() {
    let env = setup().await;
    let code = env.create("Menu", "https://example.com/menu").await;

    // 先取快照，再暂停，再改名：改名不能把 active 写回旧值
    let snapshot = env.service.get(&code.short_code).await.unwrap();
    assert!(snapshot.active);
    env.service.set_active(&code.short_code, false).await.unwrap();
    env.service.rename(&code.short_code, "Dinner menu").await.unwrap();

    let stored = env.service.get(&code.short_code).await.unwrap();
    assert!(!stored.active);
    assert_eq!(stored.name, "Dinner menu");
    assert_eq!(stored.target_url, "https://example.com/menu");
}

#[tokio::test]
async fn test_concurrent_updates_do_not_overwrite() {
    let env = setup().await;
    let code = env.create("Menu", "https://example.com/menu").await;

    let (paused, retargeted) = tokio::join!(
        env.service.set_active(&code.short_code, false),
        env.service.retarget(&code.short_code, "https://example.com/new")
    );
    paused.unwrap();
    retargeted.unwrap();

    let stored = env.service.get(&code.short_code).await.unwrap();
    assert!(!stored.active);
    assert_eq!(stored.target_url, "https://example.com/new");
}

#[tokio::test]
async fn test_update_missing_code_is_not_found() {
    let env = setup().await;
    let code = env.create("Menu", "https://example.com/menu").await;
    env.service.delete(&code.short_code).await.unwrap();

    assert!(matches!(
        env.service.set_active(&code.short_code, false).await,
        Err(DynQrError::NotFound(_))
    ));
    assert!(matches!(
        env.service
            .retarget(&code.short_code, "https://example.com/x")
            .await,
        Err(DynQrError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_updates_validate_input() {
    let env = setup().await;
    let code = env.create("Menu", "https://example.com/menu").await;

    assert!(matches!(
        env.service.rename(&code.short_code, "").await,
        Err(DynQrError::Validation(_))
    ));
    assert!(matches!(
        env.service.retarget(&code.short_code, "data:text/html,hi").await,
        Err(DynQrError::Validation(_))
    ));
    assert!(matches!(
        env.service.rename("Missing1", "x").await,
        Err(DynQrError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_cascades_scans() {
    let env = setup().await;
    let code = env.create("Menu", "https://example.com/menu").await;
    env.storage
        .log_scan(ScanRecord::new(code.id.clone()))
        .await
        .unwrap();
    assert_eq!(env.scans_of(&code).await, 1);

    let deleted = env.service.delete(&code.short_code).await.unwrap();
    assert_eq!(deleted.id, code.id);
    assert_eq!(env.scans_of(&code).await, 0);

    assert!(matches!(
        env.service.delete(&code.short_code).await,
        Err(DynQrError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_scan_summary_newest_first() {
    let env = setup().await;
    let code = env.create("Menu", "https://example.com/menu").await;

    for ua in ["first", "second", "third"] {
        let mut record = ScanRecord::new(code.id.clone());
        record.user_agent = Some(ua.to_string());
        env.storage.log_scan(record).await.unwrap();
    }

    let summary = env.service.scan_summary(&code.short_code, 2).await.unwrap();
    assert_eq!(summary.total_scans, 3);
    assert_eq!(summary.recent.len(), 2);
    assert_eq!(summary.recent[0].user_agent.as_deref(), Some("third"));
    assert_eq!(summary.recent[1].user_agent.as_deref(), Some("second"));
    assert_eq!(summary.code.id, code.id);
}
