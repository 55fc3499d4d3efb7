use actix_session::Session;

/// One-shot flash message helpers. Every user-facing notice — validation
/// failures, structural rejections, confirmations — travels through the
/// session and is consumed on the next page render.

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}
