use actix_web::{get, post, web, HttpResponse};
use log::error;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::geometry::Point;
use crate::database::model::monitoring_point::{self, Entity as MonitoringPoint};
use crate::database::TailingsDb;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewMonitoringPoint {
    pub code: Option<String>,
    /// Point location in EPSG:4326
    pub geometry: Option<Point>,
    pub height: Option<f64>,
    pub h_stdev: Option<f64>,
    pub vel: Option<f64>,
    pub v_stdev: Option<f64>,
    pub coherence: Option<f64>,
    pub eff_area: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PointBatch {
    pub model_run_id: i32,
    pub points: Vec<NewMonitoringPoint>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PointQueryParams {
    #[serde(rename = "modelRunId")]
    pub model_run_id: i32,
}

#[utoipa::path(
    post,
    path = "/api/points",
    tag = "Points",
    request_body = PointBatch,
    responses(
        (status = 200, description = "Points stored"),
        (status = 400, description = "Invalid point geometry"),
        (status = 500, description = "Server error")
    )
)]
#[post("")]
pub async fn push_points(db: web::Data<TailingsDb>, req: web::Json<PointBatch>) -> HttpResponse {
    let batch = req.into_inner();
    if batch
        .points
        .iter()
        .any(|p| p.geometry.as_ref().is_some_and(|g| !g.is_valid()))
    {
        return HttpResponse::BadRequest().body("point geometry out of EPSG:4326 bounds");
    }

    for point in batch.points {
        let new_point = monitoring_point::ActiveModel {
            code: Set(point.code),
            geometry: Set(point.geometry),
            height: Set(point.height),
            h_stdev: Set(point.h_stdev),
            vel: Set(point.vel),
            v_stdev: Set(point.v_stdev),
            coherence: Set(point.coherence),
            eff_area: Set(point.eff_area),
            model_run_id: Set(Some(batch.model_run_id)),
            ..Default::default()
        };

        if let Err(e) = new_point.insert(db.conn()).await {
            error!("Failed to insert monitoring point: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    }

    HttpResponse::Ok().finish()
}

#[utoipa::path(
    get,
    path = "/api/points",
    tag = "Points",
    params(("modelRunId" = i32, Query, description = "Model run the points belong to")),
    responses(
        (status = 200, description = "Points of the run, ordered by code", body = Vec<monitoring_point::Model>),
        (status = 500, description = "Server error")
    )
)]
#[get("")]
pub async fn list_points(
    db: web::Data<TailingsDb>,
    qp: web::Query<PointQueryParams>,
) -> HttpResponse {
    match MonitoringPoint::find()
        .filter(monitoring_point::Column::ModelRunId.eq(qp.model_run_id))
        .order_by_asc(monitoring_point::Column::Code)
        .all(db.conn())
        .await
    {
        Ok(points) => HttpResponse::Ok().json(points),
        Err(e) => {
            error!("Point list query failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/points")
            .service(push_points)
            .service(list_points),
    );
}
