//! Conversions between SeaORM models and domain types

use sea_orm::ActiveValue::{NotSet, Set};

use crate::analytics::ScanRecord;
use crate::storage::{DynamicCode, ScanEvent};

use migration::entities::{dynamic_qr_code, qr_scan};

pub fn model_to_dynamic_code(model: dynamic_qr_code::Model) -> DynamicCode {
    DynamicCode {
        id: model.id,
        short_code: model.short_code,
        target_url: model.target_url,
        active: model.active,
        name: model.name,
        created_at: model.created_at,
        updated_at: model.updated_at,
        user_id: model.user_id,
    }
}

pub fn dynamic_code_to_active_model(code: &DynamicCode) -> dynamic_qr_code::ActiveModel {
    dynamic_qr_code::ActiveModel {
        id: Set(code.id.clone()),
        short_code: Set(code.short_code.clone()),
        target_url: Set(code.target_url.clone()),
        active: Set(code.active),
        name: Set(code.name.clone()),
        created_at: Set(code.created_at),
        updated_at: Set(code.updated_at),
        user_id: Set(code.user_id.clone()),
    }
}

pub fn model_to_scan_event(model: qr_scan::Model) -> ScanEvent {
    ScanEvent {
        id: model.id,
        dynamic_code_id: model.dynamic_code_id,
        scanned_at: model.scanned_at,
        user_agent: model.user_agent,
        referrer: model.referrer,
        ip_address: model.ip_address,
        country: model.country,
        city: model.city,
        latitude: model.latitude,
        longitude: model.longitude,
    }
}

/// 地理位置列留空，由外部流程回填
pub fn scan_record_to_active_model(record: ScanRecord) -> qr_scan::ActiveModel {
    qr_scan::ActiveModel {
        id: NotSet,
        dynamic_code_id: Set(record.dynamic_code_id),
        scanned_at: Set(record.scanned_at),
        user_agent: Set(record.user_agent),
        referrer: Set(record.referrer),
        ip_address: Set(record.ip_address),
        country: Set(None),
        city: Set(None),
        latitude: Set(None),
        longitude: Set(None),
    }
}
