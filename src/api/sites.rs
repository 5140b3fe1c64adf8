use actix_web::{delete, get, post, web, HttpResponse};
use log::error;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::geometry::Polygon;
use crate::database::model::enums::MonitoringType;
use crate::database::model::site::{self, Entity as Site};
use crate::database::TailingsDb;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewSite {
    pub name: String,
    pub client_id: i32,
    /// Site outline in EPSG:4326
    pub geometry: Polygon,
    /// Defaults to `sentinel` when omitted
    pub monitoring_type: Option<MonitoringType>,
    pub monitoring_frequency_id: i32,
    pub relative_orbit: Option<i32>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SiteQueryParams {
    /// Restrict to sites owned by this client
    #[serde(rename = "clientId")]
    pub client_id: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/api/sites",
    tag = "Sites",
    request_body = NewSite,
    responses(
        (status = 201, description = "Site created", body = site::Model),
        (status = 400, description = "Empty name or invalid polygon"),
        (status = 500, description = "Server error")
    )
)]
#[post("")]
pub async fn create_site(db: web::Data<TailingsDb>, req: web::Json<NewSite>) -> HttpResponse {
    let req = req.into_inner();
    if req.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("name must not be empty");
    }
    if !req.geometry.is_valid() {
        return HttpResponse::BadRequest().body("geometry must be a closed EPSG:4326 polygon");
    }

    let site = site::ActiveModel {
        name: Set(req.name),
        client_id: Set(req.client_id),
        geometry: Set(req.geometry),
        // Leave unset so the column default applies
        monitoring_type: req.monitoring_type.map_or(NotSet, Set),
        monitoring_frequency_id: Set(req.monitoring_frequency_id),
        relative_orbit: Set(req.relative_orbit),
        ..Default::default()
    };
    match site.insert(db.conn()).await {
        Ok(model) => HttpResponse::Created().json(model),
        Err(e) => {
            error!("Failed to create site: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/sites",
    tag = "Sites",
    params(("clientId" = Option<i32>, Query, description = "Restrict to sites owned by this client")),
    responses(
        (status = 200, description = "Sites, ordered by name", body = Vec<site::Model>),
        (status = 500, description = "Server error")
    )
)]
#[get("")]
pub async fn list_sites(
    db: web::Data<TailingsDb>,
    qp: web::Query<SiteQueryParams>,
) -> HttpResponse {
    let mut query = Site::find();
    if let Some(client_id) = qp.client_id {
        query = query.filter(site::Column::ClientId.eq(client_id));
    }

    match query.order_by_asc(site::Column::Name).all(db.conn()).await {
        Ok(sites) => HttpResponse::Ok().json(sites),
        Err(e) => {
            error!("Site list query failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/sites/{id}",
    tag = "Sites",
    params(("id" = i32, Path, description = "Site id")),
    responses(
        (status = 200, description = "The site", body = site::Model),
        (status = 404, description = "No such site"),
        (status = 500, description = "Server error")
    )
)]
#[get("/{id}")]
pub async fn get_site(db: web::Data<TailingsDb>, id: web::Path<i32>) -> HttpResponse {
    match Site::find_by_id(id.into_inner()).one(db.conn()).await {
        Ok(Some(model)) => HttpResponse::Ok().json(model),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => {
            error!("Site lookup failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/sites/{id}",
    tag = "Sites",
    params(("id" = i32, Path, description = "Site id")),
    responses(
        (status = 204, description = "Site and all dependent records deleted"),
        (status = 404, description = "No such site"),
        (status = 500, description = "Server error")
    )
)]
#[delete("/{id}")]
pub async fn delete_site(db: web::Data<TailingsDb>, id: web::Path<i32>) -> HttpResponse {
    match Site::delete_by_id(id.into_inner()).exec(db.conn()).await {
        Ok(res) if res.rows_affected == 0 => HttpResponse::NotFound().finish(),
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => {
            error!("Failed to delete site: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sites")
            .service(create_site)
            .service(list_sites)
            .service(get_site)
            .service(delete_site),
    );
}
