//! Server-rendered slide presentation editor.
//!
//! All state lives in memory behind one `RwLock`; every mutation is a pure
//! deck operation followed by a redirect back to the page. The export
//! pipeline serializes a slide range into a standalone HTML file, and the
//! import pipeline reads such a file back.

pub mod charts;
pub mod errors;
pub mod export;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod import;
pub mod models;
pub mod state;
pub mod templates_structs;
pub mod validate;
