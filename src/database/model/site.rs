use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::geometry::Polygon;

use super::enums::MonitoringType;

/// A geographically bounded area under monitoring.
///
/// The polygon outlines the site in EPSG:4326. Deleting a client removes its
/// sites and everything downstream of them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = Site)]
#[sea_orm(table_name = "site")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    pub client_id: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub geometry: Polygon,
    pub monitoring_type: MonitoringType,
    pub monitoring_frequency_id: i32,
    pub relative_orbit: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::monitoring_frequency::Entity",
        from = "Column::MonitoringFrequencyId",
        to = "super::monitoring_frequency::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    MonitoringFrequency,
    #[sea_orm(has_many = "super::model_run::Entity")]
    ModelRun,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::monitoring_frequency::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonitoringFrequency.def()
    }
}

impl Related<super::model_run::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModelRun.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
