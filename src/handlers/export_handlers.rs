use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::export::{download_filename, export_document};
use crate::flash::set_flash;
use crate::handlers::see_other;
use crate::state::{SharedState, read_state};
use crate::templates_structs::{ExportTemplate, PageContext};

/// GET /export — range picker.
pub async fn export_page(
    state: web::Data<SharedState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let st = read_state(&state)?;
    let tmpl = ExportTemplate {
        ctx: PageContext::build(&session),
        count: st.deck.len(),
    };
    render(tmpl)
}

#[derive(Debug, Deserialize)]
pub struct ExportForm {
    /// "all" or "range".
    pub scope: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// POST /export — build the standalone HTML artifact and serve it as a
/// download. `from`/`to` come in 1-based as shown to the user.
pub async fn export_download(
    state: web::Data<SharedState>,
    session: Session,
    form: web::Form<ExportForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let st = read_state(&state)?;

    let (start, end) = if form.scope == "all" {
        (0, st.deck.len() - 1)
    } else {
        let from = form.from.as_deref().unwrap_or("").trim().parse::<usize>();
        let to = form.to.as_deref().unwrap_or("").trim().parse::<usize>();
        match (from, to) {
            (Ok(f), Ok(t)) if f >= 1 && t >= 1 => (f - 1, t - 1),
            _ => {
                set_flash(&session, "Invalid slide range selected.");
                return Ok(see_other("/export"));
            }
        }
    };

    match export_document(&st.deck, start, end) {
        Ok(document) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", download_filename()),
            ))
            .body(document)),
        Err(e) => {
            set_flash(&session, &e.to_string());
            Ok(see_other("/export"))
        }
    }
}
