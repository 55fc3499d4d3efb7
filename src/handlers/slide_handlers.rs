use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::AppError;
use crate::flash::set_flash;
use crate::handlers::see_other;
use crate::models::slide::{SlidePatch, TextStyle};
use crate::state::{SharedState, write_state};

#[derive(Debug, Deserialize)]
pub struct TextForm {
    /// "title", "subtitle", or "point" (with `point` set).
    pub field: String,
    pub value: String,
    pub point: Option<usize>,
}

/// POST /slides/{i}/text — inline text edit of title, subtitle, or one point.
pub async fn update_text(
    state: web::Data<SharedState>,
    session: Session,
    path: web::Path<usize>,
    form: web::Form<TextForm>,
) -> Result<HttpResponse, AppError> {
    let index = path.into_inner();
    let form = form.into_inner();

    let mut st = write_state(&state)?;
    let patch = match form.field.as_str() {
        "title" => SlidePatch { title: Some(form.value), ..SlidePatch::default() },
        "subtitle" => SlidePatch { subtitle: Some(form.value), ..SlidePatch::default() },
        "point" => {
            let slide = st.deck.get(index)?;
            let point = form.point.filter(|p| *p < slide.points.len());
            let Some(point) = point else {
                set_flash(&session, "That point no longer exists");
                return Ok(see_other("/"));
            };
            let mut points = slide.points.clone();
            points[point] = form.value;
            SlidePatch { points: Some(points), ..SlidePatch::default() }
        }
        _ => {
            set_flash(&session, "Unknown text field");
            return Ok(see_other("/"));
        }
    };

    match st.deck.with_update(index, patch) {
        Ok(deck) => {
            let current = st.current;
            st.replace_deck(deck, current);
        }
        Err(e) => set_flash(&session, &e.to_string()),
    }
    Ok(see_other("/"))
}

#[derive(Debug, Deserialize)]
pub struct StyleForm {
    /// "title", "subtitle", or "points".
    pub target: String,
    pub color: String,
    pub font_size: String,
}

/// POST /slides/{i}/style — replace one element's style wholesale. The
/// panel always submits the full style object, so partial merging of
/// nested style fields never happens.
pub async fn update_style(
    state: web::Data<SharedState>,
    session: Session,
    path: web::Path<usize>,
    form: web::Form<StyleForm>,
) -> Result<HttpResponse, AppError> {
    let index = path.into_inner();
    let form = form.into_inner();

    let style = TextStyle {
        color: Some(form.color.trim().to_string()).filter(|c| !c.is_empty()),
        font_size: form.font_size.trim().parse::<u32>().ok(),
    };

    let patch = match form.target.as_str() {
        "title" => SlidePatch { title_style: Some(style), ..SlidePatch::default() },
        "subtitle" => SlidePatch { subtitle_style: Some(style), ..SlidePatch::default() },
        "points" => SlidePatch { points_style: Some(style), ..SlidePatch::default() },
        _ => {
            set_flash(&session, "Unknown style target");
            return Ok(see_other("/"));
        }
    };

    let mut st = write_state(&state)?;
    match st.deck.with_update(index, patch) {
        Ok(deck) => {
            let current = st.current;
            st.replace_deck(deck, current);
        }
        Err(e) => set_flash(&session, &e.to_string()),
    }
    Ok(see_other("/"))
}

/// POST /slides/{i}/duplicate — deep copy inserted after the source;
/// selection moves to the copy.
pub async fn duplicate(
    state: web::Data<SharedState>,
    session: Session,
    path: web::Path<usize>,
) -> Result<HttpResponse, AppError> {
    let index = path.into_inner();
    let mut st = write_state(&state)?;
    match st.deck.with_duplicate(index) {
        Ok((deck, selection)) => {
            st.direction = 1;
            st.replace_deck(deck, selection);
        }
        Err(e) => set_flash(&session, &e.to_string()),
    }
    Ok(see_other("/"))
}

/// POST /slides/{i}/delete — rejected when it would empty the deck.
pub async fn delete(
    state: web::Data<SharedState>,
    session: Session,
    path: web::Path<usize>,
) -> Result<HttpResponse, AppError> {
    let index = path.into_inner();
    let mut st = write_state(&state)?;
    match st.deck.with_delete(index) {
        Ok((deck, selection)) => st.replace_deck(deck, selection),
        Err(e) => set_flash(&session, &e.to_string()),
    }
    Ok(see_other("/"))
}

/// POST /slides/{i}/points/add
pub async fn add_point(
    state: web::Data<SharedState>,
    session: Session,
    path: web::Path<usize>,
) -> Result<HttpResponse, AppError> {
    let index = path.into_inner();
    let mut st = write_state(&state)?;
    match st.deck.with_point_added(index) {
        Ok(deck) => {
            let current = st.current;
            st.replace_deck(deck, current);
        }
        Err(e) => set_flash(&session, &e.to_string()),
    }
    Ok(see_other("/"))
}

/// POST /slides/{i}/points/{p}/duplicate
pub async fn duplicate_point(
    state: web::Data<SharedState>,
    session: Session,
    path: web::Path<(usize, usize)>,
) -> Result<HttpResponse, AppError> {
    let (index, point) = path.into_inner();
    let mut st = write_state(&state)?;
    match st.deck.with_point_duplicated(index, point) {
        Ok(deck) => {
            let current = st.current;
            st.replace_deck(deck, current);
        }
        Err(e) => set_flash(&session, &e.to_string()),
    }
    Ok(see_other("/"))
}

/// POST /slides/{i}/points/{p}/delete — rejected for the last point.
pub async fn delete_point(
    state: web::Data<SharedState>,
    session: Session,
    path: web::Path<(usize, usize)>,
) -> Result<HttpResponse, AppError> {
    let (index, point) = path.into_inner();
    let mut st = write_state(&state)?;
    match st.deck.with_point_deleted(index, point) {
        Ok(deck) => {
            let current = st.current;
            st.replace_deck(deck, current);
        }
        Err(e) => set_flash(&session, &e.to_string()),
    }
    Ok(see_other("/"))
}
