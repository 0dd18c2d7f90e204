#[macro_use]
extern crate rocket;

use std::sync::Arc;

use rocket::fs::FileServer;
use rocket::response::content::RawHtml;
use rocket::Request;

mod boot;
mod config;
mod content;
mod designs;
mod models;
mod render;
mod routes;
mod tasks;
mod viewer;

use config::SiteConfig;
use content::ContentState;

#[catch(404)]
fn not_found(req: &Request<'_>) -> RawHtml<String> {
    if let (Some(state), Some(config)) = (
        req.rocket().state::<Arc<ContentState>>(),
        req.rocket().state::<SiteConfig>(),
    ) {
        let doc = state.snapshot();
        return RawHtml(designs::holo::render_not_found(&doc, &config.site_url));
    }
    RawHtml("<html><body style='font-family:monospace;text-align:center;padding:80px'><h1>404</h1><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:monospace;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let config = SiteConfig::load();

    // Boot check — verify/create directories, warn about missing files
    boot::run(&config);

    // Initial load is fatal when both sources fail; no partial document.
    let doc = content::load(&config).expect("Failed to load content document");
    let state = Arc::new(ContentState::new(doc));

    rocket::build()
        .manage(config)
        .manage(state)
        .attach(tasks::ContentRefresh)
        .mount("/static", FileServer::from("website/static"))
        .mount("/", routes::public::routes())
        .register("/", catchers![not_found, server_error])
}
