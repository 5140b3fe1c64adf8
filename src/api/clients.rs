use actix_web::{delete, get, post, web, HttpResponse};
use log::error;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::model::client::{self, Entity as Client};
use crate::database::TailingsDb;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewClient {
    pub name: String,
    /// Identifier in the external user-identity system
    pub user: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Clients",
    request_body = NewClient,
    responses(
        (status = 201, description = "Client created", body = client::Model),
        (status = 400, description = "Empty name"),
        (status = 500, description = "Server error")
    )
)]
#[post("")]
pub async fn create_client(
    db: web::Data<TailingsDb>,
    req: web::Json<NewClient>,
) -> HttpResponse {
    let req = req.into_inner();
    if req.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("name must not be empty");
    }

    let client = client::ActiveModel {
        name: Set(req.name),
        user: Set(req.user),
        ..Default::default()
    };
    match client.insert(db.conn()).await {
        Ok(model) => HttpResponse::Created().json(model),
        Err(e) => {
            error!("Failed to create client: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "Clients",
    responses(
        (status = 200, description = "All clients, ordered by name", body = Vec<client::Model>),
        (status = 500, description = "Server error")
    )
)]
#[get("")]
pub async fn list_clients(db: web::Data<TailingsDb>) -> HttpResponse {
    match Client::find()
        .order_by_asc(client::Column::Name)
        .all(db.conn())
        .await
    {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(e) => {
            error!("Client list query failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = "Clients",
    params(("id" = i32, Path, description = "Client id")),
    responses(
        (status = 204, description = "Client and all dependent records deleted"),
        (status = 404, description = "No such client"),
        (status = 500, description = "Server error")
    )
)]
#[delete("/{id}")]
pub async fn delete_client(db: web::Data<TailingsDb>, id: web::Path<i32>) -> HttpResponse {
    match Client::delete_by_id(id.into_inner()).exec(db.conn()).await {
        Ok(res) if res.rows_affected == 0 => HttpResponse::NotFound().finish(),
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => {
            error!("Failed to delete client: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/clients")
            .service(create_client)
            .service(list_clients)
            .service(delete_client),
    );
}
