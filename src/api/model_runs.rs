use actix_web::{get, post, web, HttpResponse};
use chrono::{DateTime, Utc};
use log::error;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::model::model_run::{self, Entity as ModelRun};
use crate::database::TailingsDb;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewModelRun {
    pub site_id: i32,
    /// Defaults to the current moment when omitted
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ModelRunQueryParams {
    /// Restrict to runs of this site
    #[serde(rename = "siteId")]
    pub site_id: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/api/model-runs",
    tag = "Model runs",
    request_body = NewModelRun,
    responses(
        (status = 201, description = "Model run created", body = model_run::Model),
        (status = 500, description = "Server error")
    )
)]
#[post("")]
pub async fn create_model_run(
    db: web::Data<TailingsDb>,
    req: web::Json<NewModelRun>,
) -> HttpResponse {
    let req = req.into_inner();
    let run = model_run::ActiveModel {
        site_id: Set(req.site_id),
        // Leave unset so the column default stamps the current moment
        date: req.date.map_or(NotSet, |date| Set(date.fixed_offset())),
        ..Default::default()
    };
    match run.insert(db.conn()).await {
        Ok(model) => HttpResponse::Created().json(model),
        Err(e) => {
            error!("Failed to create model run: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/model-runs",
    tag = "Model runs",
    params(("siteId" = Option<i32>, Query, description = "Restrict to runs of this site")),
    responses(
        (status = 200, description = "Model runs, newest first", body = Vec<model_run::Model>),
        (status = 500, description = "Server error")
    )
)]
#[get("")]
pub async fn list_model_runs(
    db: web::Data<TailingsDb>,
    qp: web::Query<ModelRunQueryParams>,
) -> HttpResponse {
    let mut query = ModelRun::find();
    if let Some(site_id) = qp.site_id {
        query = query.filter(model_run::Column::SiteId.eq(site_id));
    }

    match query
        .order_by_desc(model_run::Column::Date)
        .all(db.conn())
        .await
    {
        Ok(runs) => HttpResponse::Ok().json(runs),
        Err(e) => {
            error!("Model run list query failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/model-runs")
            .service(create_model_run)
            .service(list_model_runs),
    );
}
