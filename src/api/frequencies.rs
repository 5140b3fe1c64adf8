use actix_web::{get, post, web, HttpResponse};
use log::error;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::model::enums::SortOrder;
use crate::database::model::monitoring_frequency::{self, Entity as MonitoringFrequency};
use crate::database::TailingsDb;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewFrequency {
    pub name: String,
    /// Defaults to `asc` when omitted
    pub sort_order: Option<SortOrder>,
}

#[utoipa::path(
    post,
    path = "/api/frequencies",
    tag = "Frequencies",
    request_body = NewFrequency,
    responses(
        (status = 201, description = "Monitoring frequency created", body = monitoring_frequency::Model),
        (status = 400, description = "Empty name"),
        (status = 500, description = "Server error")
    )
)]
#[post("")]
pub async fn create_frequency(
    db: web::Data<TailingsDb>,
    req: web::Json<NewFrequency>,
) -> HttpResponse {
    let req = req.into_inner();
    if req.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("name must not be empty");
    }

    let frequency = monitoring_frequency::ActiveModel {
        name: Set(req.name),
        // Leave unset so the column default applies
        sort_order: req.sort_order.map_or(NotSet, |order| Set(Some(order))),
        ..Default::default()
    };
    match frequency.insert(db.conn()).await {
        Ok(model) => HttpResponse::Created().json(model),
        Err(e) => {
            error!("Failed to create monitoring frequency: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/frequencies",
    tag = "Frequencies",
    responses(
        (status = 200, description = "All monitoring frequencies, ordered by name", body = Vec<monitoring_frequency::Model>),
        (status = 500, description = "Server error")
    )
)]
#[get("")]
pub async fn list_frequencies(db: web::Data<TailingsDb>) -> HttpResponse {
    match MonitoringFrequency::find()
        .order_by_asc(monitoring_frequency::Column::Name)
        .all(db.conn())
        .await
    {
        Ok(frequencies) => HttpResponse::Ok().json(frequencies),
        Err(e) => {
            error!("Monitoring frequency list query failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/frequencies")
            .service(create_frequency)
            .service(list_frequencies),
    );
}
