// Route exports
pub mod records;
pub mod scores;

pub use scores::AppState;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(scores::configure)
            .configure(records::configure),
    );
}
