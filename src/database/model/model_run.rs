use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One processing batch producing measurement points for a site.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = ModelRun)]
#[sea_orm(table_name = "model_run")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    pub site_id: i32,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    #[schema(value_type = String, format = DateTime)]
    pub date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::site::Entity",
        from = "Column::SiteId",
        to = "super::site::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Site,
    #[sea_orm(has_many = "super::monitoring_point::Entity")]
    MonitoringPoint,
}

impl Related<super::site::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Site.def()
    }
}

impl Related<super::monitoring_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonitoringPoint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
