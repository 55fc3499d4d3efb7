use serde::{Deserialize, Serialize};

use crate::charts::ChartKind;

/// Styling overrides for one text element (title, subtitle, or points).
/// The style panel always submits the whole object, so these are replaced
/// wholesale on update, never merged per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

impl TextStyle {
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.font_size.is_none()
    }

    /// Inline CSS for template rendering, e.g. `color:#112233;font-size:40px`.
    pub fn css(&self) -> String {
        let mut parts = Vec::new();
        if let Some(color) = &self.color {
            parts.push(format!("color:{color}"));
        }
        if let Some(size) = self.font_size {
            parts.push(format!("font-size:{size}px"));
        }
        parts.join(";")
    }
}

/// Where the text block sits relative to the visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Layout {
    #[default]
    #[serde(rename = "text-left")]
    Left,
    #[serde(rename = "text-right")]
    Right,
    #[serde(rename = "text-only")]
    Only,
}

/// One navigable unit of the presentation.
///
/// `image`, `video_url` and `chart` are kept as independent fields because
/// the original data model allows a stale `image` to survive a chart or
/// video binding (it doubles as a fallback poster). [`Slide::visual`]
/// collapses them into the single rendered source with fixed priority.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub title: String,
    pub subtitle: Option<String>,
    pub points: Vec<String>,
    pub image: String,
    pub video_url: Option<String>,
    pub chart: Option<ChartKind>,
    pub layout: Layout,
    pub presenter: Option<u8>,
    pub title_style: Option<TextStyle>,
    pub subtitle_style: Option<TextStyle>,
    pub points_style: Option<TextStyle>,
}

/// The single visual a slide renders, priority chart > video > image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual<'a> {
    Chart(ChartKind),
    Video { embed_url: &'a str, poster: &'a str },
    Image(&'a str),
}

impl Slide {
    pub fn visual(&self) -> Visual<'_> {
        if let Some(chart) = self.chart {
            Visual::Chart(chart)
        } else if let Some(url) = &self.video_url {
            Visual::Video { embed_url: url, poster: &self.image }
        } else {
            Visual::Image(&self.image)
        }
    }

    /// Serialize-ready record: chart reference becomes its symbolic name.
    pub fn to_record(&self) -> SlideRecord {
        SlideRecord {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            points: self.points.clone(),
            image: self.image.clone(),
            video_url: self.video_url.clone(),
            chart_name: self.chart.map(|c| c.name().to_string()),
            layout: self.layout,
            presenter: self.presenter,
            title_style: self.title_style.clone(),
            subtitle_style: self.subtitle_style.clone(),
            points_style: self.points_style.clone(),
        }
    }
}

/// Partial update for [`Deck::with_update`](crate::models::deck::Deck).
///
/// Only the fields that are `Some` are written; everything else on the
/// slide is left untouched. This is a shallow merge: a style object given
/// here replaces the slide's style object wholesale.
#[derive(Debug, Clone, Default)]
pub struct SlidePatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub points: Option<Vec<String>>,
    pub title_style: Option<TextStyle>,
    pub subtitle_style: Option<TextStyle>,
    pub points_style: Option<TextStyle>,
}

impl SlidePatch {
    pub fn apply_to(self, slide: &Slide) -> Slide {
        let mut updated = slide.clone();
        if let Some(title) = self.title {
            updated.title = title;
        }
        if let Some(subtitle) = self.subtitle {
            updated.subtitle = Some(subtitle);
        }
        if let Some(points) = self.points {
            updated.points = points;
        }
        if let Some(style) = self.title_style {
            updated.title_style = Some(style);
        }
        if let Some(style) = self.subtitle_style {
            updated.subtitle_style = Some(style);
        }
        if let Some(style) = self.points_style {
            updated.points_style = Some(style);
        }
        updated
    }
}

/// Wire form of a slide: what the export literal, the import parser and
/// the seed file all speak. The live chart reference is replaced by its
/// symbolic name — the only representation that survives serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub points: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_name: Option<String>,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presenter: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_style: Option<TextStyle>,
}

impl SlideRecord {
    /// Re-hydrate a record: a known symbolic chart name becomes a live
    /// variant, anything else means no chart. A record with no points gains
    /// the placeholder point, so a hydrated slide always satisfies the
    /// at-least-one-point invariant the editor relies on.
    pub fn into_slide(self) -> Slide {
        let chart = self.chart_name.as_deref().and_then(ChartKind::from_name);
        let points = if self.points.is_empty() {
            vec![crate::models::deck::NEW_POINT_TEXT.to_string()]
        } else {
            self.points
        };
        Slide {
            title: self.title,
            subtitle: self.subtitle,
            points,
            image: self.image,
            video_url: self.video_url,
            chart,
            layout: self.layout,
            presenter: self.presenter,
            title_style: self.title_style,
            subtitle_style: self.subtitle_style,
            points_style: self.points_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_slide() -> Slide {
        Slide {
            title: "Title".into(),
            subtitle: None,
            points: vec!["one".into()],
            image: "https://example.com/a.jpg".into(),
            video_url: None,
            chart: None,
            layout: Layout::Left,
            presenter: None,
            title_style: None,
            subtitle_style: None,
            points_style: None,
        }
    }

    #[test]
    fn visual_priority_chart_wins() {
        let mut slide = base_slide();
        slide.video_url = Some("https://www.youtube.com/embed/abc".into());
        slide.chart = Some(ChartKind::TimeSpent);
        assert_eq!(slide.visual(), Visual::Chart(ChartKind::TimeSpent));
    }

    #[test]
    fn visual_priority_video_over_image() {
        let mut slide = base_slide();
        slide.video_url = Some("https://www.youtube.com/embed/abc".into());
        assert!(matches!(slide.visual(), Visual::Video { .. }));
        slide.video_url = None;
        assert_eq!(slide.visual(), Visual::Image("https://example.com/a.jpg"));
    }

    #[test]
    fn record_round_trip_resolves_chart() {
        let mut slide = base_slide();
        slide.chart = Some(ChartKind::GlobalUsage);
        let record = slide.to_record();
        assert_eq!(record.chart_name.as_deref(), Some("GlobalUsageChart"));
        assert_eq!(record.into_slide(), slide);
    }

    #[test]
    fn unknown_chart_name_hydrates_without_chart() {
        let mut record = base_slide().to_record();
        record.chart_name = Some("NopeChart".into());
        assert_eq!(record.into_slide().chart, None);
    }

    #[test]
    fn pointless_record_hydrates_with_placeholder() {
        let mut record = base_slide().to_record();
        record.points = Vec::new();
        let slide = record.into_slide();
        assert_eq!(slide.points, vec![crate::models::deck::NEW_POINT_TEXT]);
    }

    #[test]
    fn patch_is_shallow_styles_replace_wholesale() {
        let mut slide = base_slide();
        slide.title_style = Some(TextStyle { color: Some("#111111".into()), font_size: Some(30) });
        let patch = SlidePatch {
            title_style: Some(TextStyle { color: Some("#222222".into()), font_size: None }),
            ..SlidePatch::default()
        };
        let updated = patch.apply_to(&slide);
        // the old font_size does not survive: the style object is replaced
        assert_eq!(
            updated.title_style,
            Some(TextStyle { color: Some("#222222".into()), font_size: None })
        );
        assert_eq!(updated.title, slide.title);
    }

    #[test]
    fn style_css_rendering() {
        let style = TextStyle { color: Some("#ff0000".into()), font_size: Some(40) };
        assert_eq!(style.css(), "color:#ff0000;font-size:40px");
        assert_eq!(TextStyle::default().css(), "");
    }
}
