pub mod deck_handlers;
pub mod export_handlers;
pub mod import_handlers;
pub mod media_handlers;
pub mod slide_handlers;

use actix_web::HttpResponse;

/// Redirect helper for the post/redirect/get flow every mutation uses.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}
