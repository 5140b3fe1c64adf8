use actix_web::{get, post, web, HttpResponse};
use chrono::NaiveDate;
use log::error;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::model::enums::SortOrder;
use crate::database::model::monitoring_sample::{self, Entity as MonitoringSample};
use crate::database::TailingsDb;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewSample {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SampleBatch {
    pub monitoring_point_id: i32,
    pub samples: Vec<NewSample>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SampleQueryParams {
    #[serde(rename = "pointId")]
    pub point_id: i32,
    /// Start of the date range (inclusive). Optional
    #[serde(rename = "dateStart")]
    pub date_start: Option<NaiveDate>,
    /// End of the date range (inclusive). Optional
    #[serde(rename = "dateEnd")]
    pub date_end: Option<NaiveDate>,
    /// Series order, `asc` when omitted
    pub order: Option<SortOrder>,
}

#[utoipa::path(
    post,
    path = "/api/samples",
    tag = "Samples",
    request_body = SampleBatch,
    responses(
        (status = 200, description = "Samples stored"),
        (status = 500, description = "Server error")
    )
)]
#[post("")]
pub async fn push_samples(db: web::Data<TailingsDb>, req: web::Json<SampleBatch>) -> HttpResponse {
    let batch = req.into_inner();

    for sample in batch.samples {
        let new_sample = monitoring_sample::ActiveModel {
            monitoring_point_id: Set(batch.monitoring_point_id),
            date: Set(sample.date),
            value: Set(sample.value),
            ..Default::default()
        };

        if let Err(e) = new_sample.insert(db.conn()).await {
            error!("Failed to insert monitoring sample: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    }

    HttpResponse::Ok().finish()
}

#[utoipa::path(
    get,
    path = "/api/samples",
    tag = "Samples",
    params(
        ("pointId" = i32, Query, description = "Monitoring point the series belongs to"),
        ("dateStart" = Option<NaiveDate>, Query, description = "Start of the date range (inclusive). Optional"),
        ("dateEnd" = Option<NaiveDate>, Query, description = "End of the date range (inclusive). Optional"),
        ("order" = Option<SortOrder>, Query, description = "Series order, asc when omitted"),
    ),
    responses(
        (status = 200, description = "Sample series for the point", body = Vec<monitoring_sample::Model>),
        (status = 500, description = "Server error")
    )
)]
#[get("")]
pub async fn list_samples(
    db: web::Data<TailingsDb>,
    qp: web::Query<SampleQueryParams>,
) -> HttpResponse {
    let mut query = MonitoringSample::find()
        .filter(monitoring_sample::Column::MonitoringPointId.eq(qp.point_id));

    if let Some(start) = qp.date_start {
        query = query.filter(monitoring_sample::Column::Date.gte(start));
    }
    if let Some(end) = qp.date_end {
        query = query.filter(monitoring_sample::Column::Date.lte(end));
    }

    query = match qp.order.unwrap_or_default() {
        SortOrder::Ascending => query.order_by_asc(monitoring_sample::Column::Date),
        SortOrder::Descending => query.order_by_desc(monitoring_sample::Column::Date),
    };

    match query.all(db.conn()).await {
        Ok(samples) => HttpResponse::Ok().json(samples),
        Err(e) => {
            error!("Sample series query failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/samples")
            .service(push_samples)
            .service(list_samples),
    );
}
