use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One time-series observation (date, value) for a monitoring point.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = MonitoringSample)]
#[sea_orm(table_name = "monitoring_sample")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    pub monitoring_point_id: i32,
    pub date: Date,
    pub value: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::monitoring_point::Entity",
        from = "Column::MonitoringPointId",
        to = "super::monitoring_point::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    MonitoringPoint,
}

impl Related<super::monitoring_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonitoringPoint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
