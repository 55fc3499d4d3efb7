use actix_session::Session;
use actix_web::{HttpResponse, web};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;

use crate::errors::AppError;
use crate::flash::set_flash;
use crate::handlers::see_other;
use crate::state::{SharedState, write_state};
use crate::validate;

#[derive(Debug, Deserialize)]
pub struct UploadImageForm {
    pub mime_type: String,
    /// Raw base64 payload as produced by the file reader, without the
    /// `data:` prefix.
    pub data: String,
}

/// POST /slides/{i}/image-upload — embed an uploaded image as a
/// self-contained data URL, clearing any bound video.
pub async fn upload_image(
    state: web::Data<SharedState>,
    session: Session,
    path: web::Path<usize>,
    form: web::Form<UploadImageForm>,
) -> Result<HttpResponse, AppError> {
    let index = path.into_inner();
    let form = form.into_inner();

    if let Some(message) = validate::validate_image_mime(&form.mime_type) {
        set_flash(&session, &message);
        return Ok(see_other("/"));
    }
    let payload = form.data.trim();
    if payload.is_empty() || BASE64.decode(payload).is_err() {
        set_flash(&session, "Error reading file: content was not valid image data.");
        return Ok(see_other("/"));
    }

    let data_url = format!("data:{};base64,{}", form.mime_type.trim(), payload);
    let mut st = write_state(&state)?;
    match st.deck.with_image(index, data_url) {
        Ok(deck) => {
            let current = st.current;
            st.replace_deck(deck, current);
        }
        Err(e) => set_flash(&session, &e.to_string()),
    }
    Ok(see_other("/"))
}

#[derive(Debug, Deserialize)]
pub struct UrlForm {
    pub url: String,
}

/// POST /slides/{i}/image-url — point the slide at an external image.
pub async fn set_image_url(
    state: web::Data<SharedState>,
    session: Session,
    path: web::Path<usize>,
    form: web::Form<UrlForm>,
) -> Result<HttpResponse, AppError> {
    let index = path.into_inner();
    let url = form.into_inner().url;

    if let Some(message) = validate::validate_url(&url) {
        set_flash(&session, &message);
        return Ok(see_other("/"));
    }

    let mut st = write_state(&state)?;
    match st.deck.with_image(index, url.trim().to_string()) {
        Ok(deck) => {
            let current = st.current;
            st.replace_deck(deck, current);
        }
        Err(e) => set_flash(&session, &e.to_string()),
    }
    Ok(see_other("/"))
}

/// POST /slides/{i}/video — bind a video by URL, or clear it with empty
/// input. A successful bind stores the embed URL and overwrites the image
/// with the thumbnail so it doubles as a poster; clearing leaves the image
/// untouched.
pub async fn set_video(
    state: web::Data<SharedState>,
    session: Session,
    path: web::Path<usize>,
    form: web::Form<UrlForm>,
) -> Result<HttpResponse, AppError> {
    let index = path.into_inner();
    let url = form.into_inner().url;

    let mut st = write_state(&state)?;
    if url.trim().is_empty() {
        match st.deck.with_video_cleared(index) {
            Ok(deck) => {
                let current = st.current;
                st.replace_deck(deck, current);
            }
            Err(e) => set_flash(&session, &e.to_string()),
        }
        return Ok(see_other("/"));
    }

    let Some(id) = validate::extract_video_id(&url) else {
        set_flash(
            &session,
            "Could not extract a valid YouTube video ID from the URL. Please try again.",
        );
        return Ok(see_other("/"));
    };

    let embed = validate::video_embed_url(&id);
    let poster = validate::video_thumbnail_url(&id);
    match st.deck.with_video(index, embed, poster) {
        Ok(deck) => {
            let current = st.current;
            st.replace_deck(deck, current);
        }
        Err(e) => set_flash(&session, &e.to_string()),
    }
    Ok(see_other("/"))
}
