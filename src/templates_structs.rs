use actix_session::Session;
use askama::Template;

use crate::flash::take_flash;
use crate::models::slide::{Layout, Slide, TextStyle, Visual};
use crate::state::DECK_TITLE;

/// Common context shared by all pages: the deck title and the one-shot
/// flash message, consumed on render.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
}

impl PageContext {
    pub fn build(session: &Session) -> PageContext {
        PageContext {
            app_name: DECK_TITLE.to_string(),
            flash: take_flash(session),
        }
    }
}

/// Everything the editor page needs about the current slide, precomputed
/// so the template stays declarative.
pub struct SlideView {
    pub index: usize,
    pub number: usize,
    pub count: usize,
    pub title: String,
    pub subtitle: Option<String>,
    pub points: Vec<String>,
    pub title_css: String,
    pub subtitle_css: String,
    pub points_css: String,
    pub chart_name: Option<String>,
    pub video_url: Option<String>,
    pub image: String,
    pub layout_class: &'static str,
    pub presenter: Option<u8>,
    // Style panel prefill, one (color, size) pair per target element.
    pub title_color: String,
    pub title_size: String,
    pub subtitle_color: String,
    pub subtitle_size: String,
    pub points_color: String,
    pub points_size: String,
}

fn style_css(style: &Option<TextStyle>) -> String {
    style.as_ref().map(|s| s.css()).unwrap_or_default()
}

fn style_color(style: &Option<TextStyle>) -> String {
    style.as_ref().and_then(|s| s.color.clone()).unwrap_or_default()
}

fn style_size(style: &Option<TextStyle>) -> String {
    style
        .as_ref()
        .and_then(|s| s.font_size)
        .map(|n| n.to_string())
        .unwrap_or_default()
}

impl SlideView {
    pub fn build(slide: &Slide, index: usize, count: usize) -> SlideView {
        let (chart_name, video_url) = match slide.visual() {
            Visual::Chart(kind) => (Some(kind.name().to_string()), None),
            Visual::Video { embed_url, .. } => (None, Some(embed_url.to_string())),
            Visual::Image(_) => (None, None),
        };

        SlideView {
            index,
            number: index + 1,
            count,
            title: slide.title.clone(),
            subtitle: slide.subtitle.clone(),
            points: slide.points.clone(),
            title_css: style_css(&slide.title_style),
            subtitle_css: style_css(&slide.subtitle_style),
            points_css: style_css(&slide.points_style),
            chart_name,
            video_url,
            image: slide.image.clone(),
            layout_class: match slide.layout {
                Layout::Left => "text-left",
                Layout::Right => "text-right",
                Layout::Only => "text-only",
            },
            presenter: slide.presenter,
            title_color: style_color(&slide.title_style),
            title_size: style_size(&slide.title_style),
            subtitle_color: style_color(&slide.subtitle_style),
            subtitle_size: style_size(&slide.subtitle_style),
            points_color: style_color(&slide.points_style),
            points_size: style_size(&slide.points_style),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub ctx: PageContext,
    pub slide: SlideView,
    pub edit_mode: bool,
    pub anim_class: &'static str,
}

#[derive(Template)]
#[template(path = "export.html")]
pub struct ExportTemplate {
    pub ctx: PageContext,
    pub count: usize,
}

/// One row in the import selection list.
pub struct StagedItem {
    pub index: usize,
    pub number: usize,
    pub title: String,
}

#[derive(Template)]
#[template(path = "import.html")]
pub struct ImportTemplate {
    pub ctx: PageContext,
    pub staged: Vec<StagedItem>,
    pub deck_len: usize,
}
