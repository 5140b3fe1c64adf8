mod support;

use actix_web::{middleware, test, web, App};
use serde_json::json;
use tailings_monitor::api;
use tailings_monitor::database::model::{client, model_run, monitoring_point, monitoring_sample, site};

macro_rules! test_app {
    ($db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($db.clone()))
                .service(
                    web::scope("/api")
                        .wrap(middleware::NormalizePath::trim())
                        .configure(api::init_routes),
                ),
        )
        .await
    };
}

fn outline() -> serde_json::Value {
    json!({
        "type": "Polygon",
        "coordinates": [[
            [151.20, -33.85],
            [151.25, -33.85],
            [151.25, -33.90],
            [151.20, -33.90],
            [151.20, -33.85]
        ]]
    })
}

// Seeds a client, a frequency and a site through the API, returning the site.
macro_rules! create_site {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/clients")
            .set_json(json!({ "name": "Acme Mining", "user": 42 }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 201);
        let client: client::Model = test::read_body_json(resp).await;

        let req = test::TestRequest::post()
            .uri("/api/frequencies")
            .set_json(json!({ "name": "monthly" }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 201);
        let frequency: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(frequency["sort_order"], "asc");

        let req = test::TestRequest::post()
            .uri("/api/sites")
            .set_json(json!({
                "name": "North dam",
                "client_id": client.id,
                "geometry": outline(),
                "monitoring_frequency_id": frequency["id"],
                "relative_orbit": 131
            }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 201);
        let site: site::Model = test::read_body_json(resp).await;
        site
    }};
}

#[tokio::test]
async fn site_creation_applies_schema_defaults() {
    let db = support::tailings_db().await;
    let app = test_app!(db);

    let site = create_site!(app);
    // monitoring_type was omitted in the request
    assert_eq!(
        serde_json::to_value(&site.monitoring_type).unwrap(),
        "sentinel"
    );

    let req = test::TestRequest::get()
        .uri(&format!("/api/sites/{}", site.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let reloaded: site::Model = test::read_body_json(resp).await;
    assert_eq!(reloaded, site);
}

#[tokio::test]
async fn invalid_polygon_is_rejected() {
    let db = support::tailings_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/sites")
        .set_json(json!({
            "name": "Broken",
            "client_id": 1,
            "geometry": {
                "type": "Polygon",
                // Ring is not closed
                "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]
            },
            "monitoring_frequency_id": 1
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn empty_names_are_rejected() {
    let db = support::tailings_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/clients")
        .set_json(json!({ "name": "  " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn deleting_a_client_over_http_removes_its_sites() {
    let db = support::tailings_db().await;
    let app = test_app!(db);

    let site = create_site!(app);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/clients/{}", site.client_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/api/sites/{}", site.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    // Deleting again reports the client as gone
    let req = test::TestRequest::delete()
        .uri(&format!("/api/clients/{}", site.client_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn points_and_samples_round_trip_over_http() {
    let db = support::tailings_db().await;
    let app = test_app!(db);

    let site = create_site!(app);

    let req = test::TestRequest::post()
        .uri("/api/model-runs")
        .set_json(json!({ "site_id": site.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let run: model_run::Model = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/api/points")
        .set_json(json!({
            "model_run_id": run.id,
            "points": [
                {
                    "code": "P0002",
                    "geometry": { "type": "Point", "coordinates": [151.23, -33.88] },
                    "vel": -1.1
                },
                {
                    "code": "P0001",
                    "geometry": { "type": "Point", "coordinates": [151.22, -33.87] },
                    "height": 412.5,
                    "vel": -4.2,
                    "coherence": 0.93
                }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get()
        .uri(&format!("/api/points?modelRunId={}", run.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let points: Vec<monitoring_point::Model> = test::read_body_json(resp).await;
    assert_eq!(points.len(), 2);
    // Ordered by code
    assert_eq!(points[0].code.as_deref(), Some("P0001"));
    assert_eq!(points[0].vel, Some(-4.2));
    assert_eq!(points[1].code.as_deref(), Some("P0002"));

    let point_id = points[0].id;
    let req = test::TestRequest::post()
        .uri("/api/samples")
        .set_json(json!({
            "monitoring_point_id": point_id,
            "samples": [
                { "date": "2026-06-01", "value": -1.0 },
                { "date": "2026-07-01", "value": -2.4 },
                { "date": "2026-08-01" }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get()
        .uri(&format!("/api/samples?pointId={}&order=desc", point_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let series: Vec<monitoring_sample::Model> = test::read_body_json(resp).await;
    assert_eq!(series.len(), 3);
    assert_eq!(series[0].date.to_string(), "2026-08-01");
    assert_eq!(series[0].value, None);
    assert_eq!(series[2].date.to_string(), "2026-06-01");

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/samples?pointId={}&dateStart=2026-06-15&dateEnd=2026-07-15",
            point_id
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let series: Vec<monitoring_sample::Model> = test::read_body_json(resp).await;
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].value, Some(-2.4));
}

#[tokio::test]
async fn out_of_bounds_point_geometry_is_rejected() {
    let db = support::tailings_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/points")
        .set_json(json!({
            "model_run_id": 1,
            "points": [
                { "geometry": { "type": "Point", "coordinates": [511.0, -33.88] } }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
