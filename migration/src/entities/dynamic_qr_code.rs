//! Dynamic QR code entity: a short code that redirects to a changeable target

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "dynamic_qr_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub short_code: String,
    #[sea_orm(column_type = "Text")]
    pub target_url: String,
    pub active: bool,
    pub name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::qr_scan::Entity")]
    QrScan,
}

impl Related<super::qr_scan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QrScan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
