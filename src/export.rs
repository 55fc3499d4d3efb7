//! Export serializer: turns a slide range into a single standalone HTML
//! document that re-renders itself without this application.
//!
//! The document embeds three things: the slide records as a JSON array
//! literal behind a fixed marker (the import parser's contract), a verbatim
//! copy of the chart renderers, and a reduced read-only viewer. Everything
//! is inline, so the file renders when opened directly from disk.

use crate::errors::AppError;
use crate::models::deck::Deck;
use crate::models::slide::SlideRecord;

/// Declaration prefix of the embedded data literal. The import parser
/// locates slide data by this exact text, so it must never change shape.
pub const DATA_MARKER: &str = "const PRESENTATION_DATA = ";

/// Filename offered for the download.
pub fn download_filename() -> String {
    format!("presentation-{}.html", chrono::Local::now().format("%Y-%m-%d"))
}

/// Records for the inclusive 0-based range `[start, end]`. Live chart
/// references are replaced by their symbolic names; nothing else changes.
pub fn export_records(deck: &Deck, start: usize, end: usize) -> Result<Vec<SlideRecord>, AppError> {
    if start > end || end >= deck.len() {
        return Err(AppError::Validation("Invalid slide range selected.".to_string()));
    }
    Ok(deck.slides()[start..=end].iter().map(|s| s.to_record()).collect())
}

/// The complete export artifact for the given range.
pub fn export_document(deck: &Deck, start: usize, end: usize) -> Result<String, AppError> {
    let records = export_records(deck, start, end)?;
    let json = serde_json::to_string_pretty(&records)
        .map_err(|e| AppError::Io(format!("Failed to serialize slides: {e}")))?;
    Ok(format!(
        "{head}<script>\n{charts}</script>\n<script>\n{marker}{json};\n{viewer}</script>\n</body>\n</html>\n",
        head = EXPORT_HEAD,
        charts = CHART_SCRIPT,
        marker = DATA_MARKER,
        viewer = VIEWER_SCRIPT,
    ))
}

/// Chart renderers, duplicated into the artifact so it has zero dependency
/// on the authoring tool. Same file the live editor page loads.
const CHART_SCRIPT: &str = include_str!("../static/charts.js");

const EXPORT_HEAD: &str = concat!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>"#,
    "The Evolution of Social Media",
    r#"</title>
<style>
  * { margin: 0; padding: 0; box-sizing: border-box; }
  body {
    font-family: -apple-system, system-ui, 'Segoe UI', Roboto, sans-serif;
    background: #f3f4f6; color: #1e293b;
    min-height: 100vh; display: flex; align-items: center; justify-content: center;
    padding: 1rem; overflow: hidden;
  }
  .stage {
    width: 100%; max-width: 72rem; aspect-ratio: 16 / 9; background: #fff;
    border-radius: 1rem; border: 1px solid #e5e7eb; position: relative;
    overflow: hidden; box-shadow: 0 20px 25px -5px rgb(0 0 0 / 0.08);
    display: flex; flex-direction: column;
  }
  .stage > header { position: absolute; top: 0; left: 0; width: 100%; padding: 1.5rem; z-index: 20; }
  .stage > header h1 { font-size: 1.5rem; font-weight: 700; color: #0f172a; }
  .slide {
    position: absolute; inset: 0; display: flex; align-items: center;
    justify-content: center; background: #fff;
  }
  .slide.from-right { animation: slide-in-right 0.5s ease-out; }
  .slide.from-left { animation: slide-in-left 0.5s ease-out; }
  @keyframes slide-in-right { from { transform: translateX(100%); opacity: 0; } to { transform: translateX(0); opacity: 1; } }
  @keyframes slide-in-left { from { transform: translateX(-100%); opacity: 0; } to { transform: translateX(0); opacity: 1; } }
  .slide-body { width: 100%; height: 100%; display: flex; align-items: center; justify-content: center; }
  .slide-body.reverse { flex-direction: row-reverse; }
  .text-half { width: 50%; padding: 3rem; display: flex; flex-direction: column; justify-content: center; }
  .visual-half { width: 50%; padding: 3rem; display: flex; align-items: center; justify-content: center; position: relative; }
  .text-full { width: 100%; max-width: 56rem; margin: 0 auto; padding: 3rem; text-align: center; }
  .slide h2 { font-size: 2.6rem; font-weight: 800; color: #0f172a; line-height: 1.15; }
  .text-full h2 { font-size: 3.6rem; }
  .slide h3.subtitle { margin-top: 1rem; font-size: 1.4rem; color: #2563eb; font-weight: 500; }
  ul.points { margin-top: 1.5rem; list-style: none; }
  ul.points li { display: flex; align-items: flex-start; margin-bottom: 1rem; color: #334155; font-size: 1.1rem; }
  ul.points li::before { content: '\2713'; color: #3b82f6; font-weight: 700; margin-right: 0.75rem; }
  .text-full ul.points li { justify-content: center; }
  .visual-half img { width: 100%; height: 100%; object-fit: cover; border-radius: 0.5rem; box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.2); }
  .video-frame { aspect-ratio: 16 / 9; width: 100%; }
  .video-frame iframe { width: 100%; height: 100%; border: 0; border-radius: 0.5rem; }
  .chart-box { width: 100%; text-align: center; }
  .chart-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 1rem; color: #1e293b; }
  .chart-box svg { width: 100%; height: auto; }
  .chart-label { font-size: 12px; fill: #6b7280; }
  .chart-value { font-size: 12px; fill: #334155; font-weight: 600; }
  .stage > footer {
    position: absolute; bottom: 0; left: 0; width: 100%; padding: 1.5rem;
    display: flex; justify-content: space-between; align-items: center; z-index: 10;
  }
  .counter { font-size: 0.875rem; color: #64748b; font-weight: 500; }
  .badge {
    margin-left: 1rem; padding: 0.25rem 0.75rem; font-size: 0.75rem; font-weight: 600;
    border-radius: 9999px; border: 1px solid transparent;
  }
  .badge.p1 { background: #dbeafe; border-color: #bfdbfe; color: #1e40af; }
  .badge.p2 { background: #dcfce7; border-color: #bbf7d0; color: #166534; }
  .badge.p3 { background: #e0e7ff; border-color: #c7d2fe; color: #3730a3; }
  .nav button {
    padding: 0.75rem 1rem; margin-left: 1rem; border-radius: 9999px; background: #fff;
    border: 1px solid #cbd5e1; color: #475569; cursor: pointer; font-size: 1rem;
    transition: background 0.3s, color 0.3s;
  }
  .nav button:hover { background: #3b82f6; color: #fff; }
</style>
</head>
<body>
<div class="stage">
  <header><h1>The Evolution of Social Media</h1></header>
  <div id="slide-root"></div>
  <footer>
    <div><span class="counter" id="counter"></span><span id="badge"></span></div>
    <div class="nav">
      <button id="prev" aria-label="Previous Slide">&#8592;</button>
      <button id="next" aria-label="Next Slide">&#8594;</button>
    </div>
  </footer>
</div>
"#
);

/// Read-only viewer: navigation only, no editing affordances. Driven
/// entirely by the embedded data and the chart-name lookup above.
const VIEWER_SCRIPT: &str = r#"
(function () {
  'use strict';
  var slides = PRESENTATION_DATA;
  var current = 0;
  var direction = 1;

  function esc(s) {
    return String(s).replace(/&/g, '&amp;').replace(/</g, '&lt;')
      .replace(/>/g, '&gt;').replace(/"/g, '&quot;');
  }

  function styleAttr(style) {
    if (!style) return '';
    var parts = [];
    if (style.color) parts.push('color:' + style.color);
    if (style.fontSize) parts.push('font-size:' + style.fontSize + 'px');
    return parts.length ? ' style="' + esc(parts.join(';')) + '"' : '';
  }

  function textBlock(slide, full) {
    var html = '<h2' + styleAttr(slide.titleStyle) + '>' + esc(slide.title) + '</h2>';
    if (slide.subtitle) {
      html += '<h3 class="subtitle"' + styleAttr(slide.subtitleStyle) + '>' + esc(slide.subtitle) + '</h3>';
    }
    html += '<ul class="points">';
    for (var i = 0; i < slide.points.length; i++) {
      html += '<li><span' + styleAttr(slide.pointsStyle) + '>' + esc(slide.points[i]) + '</span></li>';
    }
    html += '</ul>';
    return full
      ? '<div class="text-full">' + html + '</div>'
      : '<div class="text-half">' + html + '</div>';
  }

  function visualBlock(slide) {
    if (slide.chartName && Charts.names.indexOf(slide.chartName) !== -1) {
      return '<div class="visual-half" data-chart="' + esc(slide.chartName) + '"></div>';
    }
    if (slide.videoUrl) {
      return '<div class="visual-half"><div class="video-frame"><iframe src="' +
        esc(slide.videoUrl) + '" title="Video player" allowfullscreen></iframe></div></div>';
    }
    return '<div class="visual-half"><img src="' + esc(slide.image) +
      '" alt="' + esc(slide.title) + '"></div>';
  }

  function render() {
    var slide = slides[current];
    var layout = slide.layout || 'text-left';
    var inner;
    if (layout === 'text-only') {
      inner = textBlock(slide, true);
    } else {
      var reverse = layout === 'text-right' ? ' reverse' : '';
      inner = '<div class="slide-body' + reverse + '">' + textBlock(slide, false) +
        visualBlock(slide) + '</div>';
    }
    var animation = direction > 0 ? 'from-right' : 'from-left';
    var root = document.getElementById('slide-root');
    root.innerHTML = '<div class="slide ' + animation + '">' + inner + '</div>';

    var mount = root.querySelector('[data-chart]');
    if (mount) Charts.render(mount.getAttribute('data-chart'), mount);

    document.getElementById('counter').textContent =
      'Slide ' + (current + 1) + ' of ' + slides.length;
    var badge = document.getElementById('badge');
    badge.innerHTML = slide.presenter
      ? '<span class="badge p' + slide.presenter + '">Presenter ' + slide.presenter + '</span>'
      : '';
  }

  function next() { direction = 1; current = (current + 1) % slides.length; render(); }
  function prev() { direction = -1; current = (current + slides.length - 1) % slides.length; render(); }

  document.getElementById('next').addEventListener('click', next);
  document.getElementById('prev').addEventListener('click', prev);
  document.addEventListener('keydown', function (e) {
    if (e.key === 'ArrowRight') next();
    if (e.key === 'ArrowLeft') prev();
  });

  render();
})();
"#;
