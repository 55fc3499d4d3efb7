//! Deck operation tests — navigation, slide and point structure edits,
//! media bindings, and the merge operations used by import.
//!
//! Every operation is pure: it either returns a new deck or an error, and
//! the source deck must be unchanged either way.

mod common;

use common::*;
use podium::models::deck::{Deck, NEW_POINT_TEXT};
use podium::models::slide::SlidePatch;

#[test]
fn deck_rejects_empty() {
    assert!(Deck::new(Vec::new()).is_err());
}

#[test]
fn navigation_wraps_both_ways() {
    let deck = deck_of(&["a", "b", "c"]);
    assert_eq!(deck.next_index(0), 1);
    assert_eq!(deck.next_index(2), 0);
    assert_eq!(deck.prev_index(0), 2);
    assert_eq!(deck.prev_index(1), 0);
}

#[test]
fn full_loop_returns_to_start() {
    let deck = deck_of(&["a", "b", "c", "d"]);
    let mut i = 0;
    for _ in 0..deck.len() {
        i = deck.next_index(i);
    }
    assert_eq!(i, 0);
    for _ in 0..deck.len() {
        i = deck.prev_index(i);
    }
    assert_eq!(i, 0);
}

#[test]
fn update_patches_only_given_fields() {
    let deck = deck_of(&["a", "b"]);
    let patch = SlidePatch {
        title: Some("New title".to_string()),
        ..SlidePatch::default()
    };
    let updated = deck.with_update(1, patch).unwrap();
    assert_eq!(updated.get(1).unwrap().title, "New title");
    assert_eq!(updated.get(1).unwrap().points, deck.get(1).unwrap().points);
    assert_eq!(updated.get(0).unwrap(), deck.get(0).unwrap());
    // source deck untouched
    assert_eq!(deck.get(1).unwrap().title, "b");
}

#[test]
fn update_out_of_range_is_error() {
    let deck = deck_of(&["a"]);
    assert!(deck.with_update(5, SlidePatch::default()).is_err());
}

#[test]
fn duplicate_inserts_copy_after_source() {
    let deck = deck_of(&["a", "b", "c"]);
    let (dup, selection) = deck.with_duplicate(1).unwrap();
    assert_eq!(dup.len(), 4);
    assert_eq!(selection, 2);
    assert_eq!(dup.get(1).unwrap().title, "b");
    assert_eq!(dup.get(2).unwrap().title, "b");
    assert_eq!(dup.get(3).unwrap().title, "c");
}

#[test]
fn duplicate_is_a_deep_copy() {
    let deck = deck_of(&["a"]);
    let (dup, copy_index) = deck.with_duplicate(0).unwrap();
    let patch = SlidePatch {
        title: Some("edited copy".to_string()),
        ..SlidePatch::default()
    };
    let edited = dup.with_update(copy_index, patch).unwrap();
    // editing the copy leaves the source slide alone
    assert_eq!(edited.get(0).unwrap().title, "a");
    assert_eq!(edited.get(1).unwrap().title, "edited copy");
}

#[test]
fn delete_clamps_selection_to_new_end() {
    let deck = deck_of(&["a", "b", "c"]);
    let (after, selection) = deck.with_delete(2).unwrap();
    assert_eq!(after.len(), 2);
    assert_eq!(selection, 1);

    let (after, selection) = deck.with_delete(0).unwrap();
    assert_eq!(after.get(0).unwrap().title, "b");
    assert_eq!(selection, 0);
}

#[test]
fn delete_last_slide_is_rejected() {
    let deck = deck_of(&["only"]);
    let err = deck.with_delete(0).unwrap_err();
    assert_eq!(err.to_string(), "Cannot delete the last slide.");
    assert_eq!(deck.len(), 1);
}

#[test]
fn point_add_appends_placeholder() {
    let deck = deck_of(&["a"]);
    let after = deck.with_point_added(0).unwrap();
    let points = &after.get(0).unwrap().points;
    assert_eq!(points.len(), 2);
    assert_eq!(points[1], NEW_POINT_TEXT);
}

#[test]
fn point_duplicate_inserts_after_source() {
    let mut s = slide("a");
    s.points = vec!["one".to_string(), "two".to_string()];
    let deck = Deck::new(vec![s]).unwrap();
    let after = deck.with_point_duplicated(0, 0).unwrap();
    assert_eq!(after.get(0).unwrap().points, vec!["one", "one", "two"]);
}

#[test]
fn point_delete_rejects_last_point() {
    let deck = deck_of(&["a"]);
    let err = deck.with_point_deleted(0, 0).unwrap_err();
    assert_eq!(err.to_string(), "Cannot delete the last point.");

    let after = deck.with_point_added(0).unwrap();
    let after = after.with_point_deleted(0, 0).unwrap();
    assert_eq!(after.get(0).unwrap().points, vec![NEW_POINT_TEXT]);
}

#[test]
fn point_index_out_of_range_is_error() {
    let deck = deck_of(&["a"]);
    assert!(deck.with_point_duplicated(0, 7).is_err());
    assert!(deck.with_point_deleted(0, 7).is_err());
}

#[test]
fn image_binding_clears_video() {
    let deck = deck_of(&["a"]);
    let deck = deck
        .with_video(
            0,
            "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string(),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg".to_string(),
        )
        .unwrap();
    assert!(deck.get(0).unwrap().video_url.is_some());

    let deck = deck.with_image(0, "https://example.com/new.png".to_string()).unwrap();
    let slide = deck.get(0).unwrap();
    assert_eq!(slide.image, "https://example.com/new.png");
    assert_eq!(slide.video_url, None);
}

#[test]
fn video_binding_overwrites_image_with_poster() {
    let deck = deck_of(&["a"]);
    let deck = deck
        .with_video(0, "embed".to_string(), "poster".to_string())
        .unwrap();
    let slide = deck.get(0).unwrap();
    assert_eq!(slide.video_url.as_deref(), Some("embed"));
    assert_eq!(slide.image, "poster");
}

#[test]
fn clearing_video_keeps_the_poster_image() {
    let deck = deck_of(&["a"]);
    let deck = deck
        .with_video(0, "embed".to_string(), "poster".to_string())
        .unwrap();
    let deck = deck.with_video_cleared(0).unwrap();
    let slide = deck.get(0).unwrap();
    assert_eq!(slide.video_url, None);
    assert_eq!(slide.image, "poster");
}

#[test]
fn append_preserves_order() {
    let deck = deck_of(&["a", "b"]);
    let merged = deck.with_appended(vec![slide("x"), slide("y")]);
    assert_eq!(merged.len(), 4);
    assert_eq!(merged.get(2).unwrap().title, "x");
    assert_eq!(merged.get(3).unwrap().title, "y");
}

#[test]
fn replace_splices_over_one_position() {
    let deck = deck_of(&["a", "b", "c", "d"]);
    let imported = vec![slide("x"), slide("y"), slide("z")];
    let (merged, selection) = deck.with_replaced_at(2, imported).unwrap();
    // slide "b" is gone, three slides stand in its place
    assert_eq!(merged.len(), 6);
    assert_eq!(selection, 1);
    let titles: Vec<_> = merged.slides().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "x", "y", "z", "c", "d"]);
}

#[test]
fn replace_position_is_validated() {
    let deck = deck_of(&["a", "b"]);
    let err = deck.with_replaced_at(0, vec![slide("x")]).unwrap_err();
    assert!(err.to_string().contains("between 1 and 2"));
    let err = deck.with_replaced_at(3, vec![slide("x")]).unwrap_err();
    assert!(err.to_string().contains("between 1 and 2"));
    assert!(deck.with_replaced_at(1, Vec::new()).is_err());
}
