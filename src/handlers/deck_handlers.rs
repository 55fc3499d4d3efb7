use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::errors::{AppError, render};
use crate::handlers::see_other;
use crate::state::{SharedState, read_state, write_state};
use crate::templates_structs::{IndexTemplate, PageContext, SlideView};

/// GET / — the editor/viewer page showing the current slide.
pub async fn index(
    state: web::Data<SharedState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let st = read_state(&state)?;
    let slide = st.deck.get(st.current)?;

    let tmpl = IndexTemplate {
        ctx: PageContext::build(&session),
        slide: SlideView::build(slide, st.current, st.deck.len()),
        edit_mode: st.edit_mode,
        anim_class: if st.direction >= 0 { "from-right" } else { "from-left" },
    };
    render(tmpl)
}

/// POST /next — advance one slide, wrapping at the end.
pub async fn next(state: web::Data<SharedState>) -> Result<HttpResponse, AppError> {
    write_state(&state)?.advance();
    Ok(see_other("/"))
}

/// POST /prev — go back one slide, wrapping at the start.
pub async fn prev(state: web::Data<SharedState>) -> Result<HttpResponse, AppError> {
    write_state(&state)?.retreat();
    Ok(see_other("/"))
}

/// POST /edit-mode — toggle the editing affordances.
pub async fn toggle_edit(state: web::Data<SharedState>) -> Result<HttpResponse, AppError> {
    let mut st = write_state(&state)?;
    st.edit_mode = !st.edit_mode;
    Ok(see_other("/"))
}
