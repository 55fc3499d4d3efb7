use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::flash::set_flash;
use crate::forms::{get_all, get_field, parse_form_body};
use crate::handlers::see_other;
use crate::import::{parse_document, validate_import_content_type};
use crate::state::{SharedState, read_state, write_state};
use crate::templates_structs::{ImportTemplate, PageContext, StagedItem};

/// GET /import — selection page for staged slides. With nothing staged it
/// still renders, offering only the file picker.
pub async fn import_page(
    state: web::Data<SharedState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let st = read_state(&state)?;
    let staged = st
        .staged
        .iter()
        .enumerate()
        .map(|(i, s)| StagedItem {
            index: i,
            number: i + 1,
            title: s.title.clone(),
        })
        .collect();
    let tmpl = ImportTemplate {
        ctx: PageContext::build(&session),
        staged,
        deck_len: st.deck.len(),
    };
    render(tmpl)
}

#[derive(Debug, Deserialize)]
pub struct UploadForm {
    pub content_type: String,
    /// Full text of the selected file, read client-side.
    pub content: String,
}

/// POST /import/upload — parse an exported document and stage its slides.
pub async fn upload(
    state: web::Data<SharedState>,
    session: Session,
    form: web::Form<UploadForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    if let Err(e) = validate_import_content_type(&form.content_type) {
        set_flash(&session, &e.to_string());
        return Ok(see_other("/import"));
    }

    match parse_document(&form.content) {
        Ok(slides) => {
            log::info!("Staged {} slides from uploaded file", slides.len());
            write_state(&state)?.staged = slides;
        }
        Err(e) => set_flash(&session, &e.to_string()),
    }
    Ok(see_other("/import"))
}

/// POST /import/apply — merge the checked staged slides into the deck.
///
/// The body is parsed by hand because the `slide` checkbox repeats. Modes:
/// `append` adds at the end and keeps the current selection; `replace`
/// splices the subset over one 1-based position and selects the first
/// spliced slide. Staging is cleared only on success, so a bad replace
/// position keeps the selection list intact for another try.
pub async fn apply(
    state: web::Data<SharedState>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let params = parse_form_body(&body);
    let mode = get_field(&params, "mode").to_string();

    let mut picked: Vec<usize> = Vec::new();
    for value in get_all(&params, "slide") {
        if let Ok(i) = value.parse::<usize>() {
            if !picked.contains(&i) {
                picked.push(i);
            }
        }
    }

    let mut st = write_state(&state)?;
    let chosen: Vec<_> = picked
        .iter()
        .filter_map(|&i| st.staged.get(i).cloned())
        .collect();
    if chosen.is_empty() {
        set_flash(&session, "No slides selected to import");
        return Ok(see_other("/import"));
    }

    match mode.as_str() {
        "append" => {
            let count = chosen.len();
            let deck = st.deck.with_appended(chosen);
            let current = st.current;
            st.replace_deck(deck, current);
            st.staged.clear();
            set_flash(&session, &format!("Imported {count} slides"));
            Ok(see_other("/"))
        }
        "replace" => {
            let position = get_field(&params, "position").trim().parse::<usize>();
            let Ok(position) = position else {
                set_flash(
                    &session,
                    &format!(
                        "Invalid slide number to replace. Please enter a number between 1 and {}.",
                        st.deck.len()
                    ),
                );
                return Ok(see_other("/import"));
            };
            let count = chosen.len();
            match st.deck.with_replaced_at(position, chosen) {
                Ok((deck, selection)) => {
                    st.replace_deck(deck, selection);
                    st.staged.clear();
                    set_flash(&session, &format!("Imported {count} slides"));
                    Ok(see_other("/"))
                }
                Err(e) => {
                    set_flash(&session, &e.to_string());
                    Ok(see_other("/import"))
                }
            }
        }
        _ => {
            set_flash(&session, "Unknown import mode");
            Ok(see_other("/import"))
        }
    }
}

/// POST /import/cancel — discard the staged slides.
pub async fn cancel(
    state: web::Data<SharedState>,
    _session: Session,
) -> Result<HttpResponse, AppError> {
    write_state(&state)?.staged.clear();
    Ok(see_other("/"))
}
