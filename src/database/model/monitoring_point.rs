use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::geometry::Point;

/// A single measured location from one model run.
///
/// Heights and velocities are in millimetres / millimetres per year as
/// produced by the InSAR processing chain; coherence is dimensionless.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = MonitoringPoint)]
#[sea_orm(table_name = "monitoring_point")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub code: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub geometry: Option<Point>,
    pub height: Option<f64>,
    pub h_stdev: Option<f64>,
    pub vel: Option<f64>,
    pub v_stdev: Option<f64>,
    pub coherence: Option<f64>,
    pub eff_area: Option<f64>,
    pub model_run_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::model_run::Entity",
        from = "Column::ModelRunId",
        to = "super::model_run::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ModelRun,
    #[sea_orm(has_many = "super::monitoring_sample::Entity")]
    MonitoringSample,
}

impl Related<super::model_run::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModelRun.def()
    }
}

impl Related<super::monitoring_sample::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonitoringSample.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
