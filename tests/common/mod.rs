//! Shared test fixtures: slide and deck builders.

#![allow(dead_code)]

use podium::charts::ChartKind;
use podium::models::deck::Deck;
use podium::models::slide::{Layout, Slide, TextStyle};

/// A minimal text-left slide with one point.
pub fn slide(title: &str) -> Slide {
    Slide {
        title: title.to_string(),
        subtitle: None,
        points: vec!["First point".to_string()],
        image: format!("https://example.com/{title}.jpg"),
        video_url: None,
        chart: None,
        layout: Layout::Left,
        presenter: None,
        title_style: None,
        subtitle_style: None,
        points_style: None,
    }
}

/// A chart slide for the given variant.
pub fn chart_slide(title: &str, chart: ChartKind) -> Slide {
    let mut s = slide(title);
    s.chart = Some(chart);
    s
}

/// A styled slide, for exercising the wire format's optional fields.
pub fn styled_slide(title: &str) -> Slide {
    let mut s = slide(title);
    s.subtitle = Some("Subtitle".to_string());
    s.presenter = Some(2);
    s.title_style = Some(TextStyle {
        color: Some("#112233".to_string()),
        font_size: Some(44),
    });
    s
}

/// A deck of minimal slides, one per title.
pub fn deck_of(titles: &[&str]) -> Deck {
    Deck::new(titles.iter().map(|t| slide(t)).collect()).expect("non-empty deck")
}
