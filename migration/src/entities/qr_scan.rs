//! Scan log entity, one row per resolved scan

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "qr_scans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub dynamic_code_id: String,
    pub scanned_at: DateTimeUtc,
    #[sea_orm(column_type = "Text", nullable)]
    pub user_agent: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub referrer: Option<String>,
    pub ip_address: Option<String>,
    /// ISO 3166-1 alpha-2, filled in by an external geo process
    pub country: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dynamic_qr_code::Entity",
        from = "Column::DynamicCodeId",
        to = "super::dynamic_qr_code::Column::Id",
        on_delete = "Cascade"
    )]
    DynamicQrCode,
}

impl Related<super::dynamic_qr_code::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DynamicQrCode.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
