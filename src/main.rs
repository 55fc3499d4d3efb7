use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};
use std::sync::RwLock;

use podium::handlers::{deck_handlers, export_handlers, import_handlers, media_handlers, slide_handlers};
use podium::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let state = web::Data::new(RwLock::new(AppState::seeded()));

    // Session encryption key — load from SESSION_KEY env var so flash
    // messages survive restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+) — generating random key", val.len());
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Viewer / editor page and navigation
            .route("/", web::get().to(deck_handlers::index))
            .route("/next", web::post().to(deck_handlers::next))
            .route("/prev", web::post().to(deck_handlers::prev))
            .route("/edit-mode", web::post().to(deck_handlers::toggle_edit))
            // Slide content and structure
            .route("/slides/{i}/text", web::post().to(slide_handlers::update_text))
            .route("/slides/{i}/style", web::post().to(slide_handlers::update_style))
            .route("/slides/{i}/duplicate", web::post().to(slide_handlers::duplicate))
            .route("/slides/{i}/delete", web::post().to(slide_handlers::delete))
            .route("/slides/{i}/points/add", web::post().to(slide_handlers::add_point))
            .route("/slides/{i}/points/{p}/duplicate", web::post().to(slide_handlers::duplicate_point))
            .route("/slides/{i}/points/{p}/delete", web::post().to(slide_handlers::delete_point))
            // Media binding
            .route("/slides/{i}/image-upload", web::post().to(media_handlers::upload_image))
            .route("/slides/{i}/image-url", web::post().to(media_handlers::set_image_url))
            .route("/slides/{i}/video", web::post().to(media_handlers::set_video))
            // Export
            .route("/export", web::get().to(export_handlers::export_page))
            .route("/export", web::post().to(export_handlers::export_download))
            // Import
            .route("/import", web::get().to(import_handlers::import_page))
            .route("/import/upload", web::post().to(import_handlers::upload))
            .route("/import/apply", web::post().to(import_handlers::apply))
            .route("/import/cancel", web::post().to(import_handlers::cancel))
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
