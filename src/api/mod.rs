pub mod clients;
pub mod frequencies;
pub mod model_runs;
pub mod points;
pub mod samples;
pub mod sites;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    clients::init_routes(cfg);
    frequencies::init_routes(cfg);
    sites::init_routes(cfg);
    model_runs::init_routes(cfg);
    points::init_routes(cfg);
    samples::init_routes(cfg);
}
