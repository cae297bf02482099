pub mod dynamic_qr_code;
pub mod qr_scan;

pub use dynamic_qr_code::Entity as DynamicQrCodeEntity;
pub use qr_scan::Entity as QrScanEntity;
