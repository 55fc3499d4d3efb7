use crate::errors::AppError;
use crate::models::slide::{Slide, SlidePatch};

/// Placeholder text for a freshly added bullet point.
pub const NEW_POINT_TEXT: &str = "New point. Click to edit.";

/// The ordered, never-empty collection of slides.
///
/// Every mutation is a pure old-state → new-state function: it validates
/// first, then builds a fresh `Deck` (copy-on-write), so a rejected
/// operation can never leave a partially applied update behind. Operations
/// that move the selection return the new index alongside the new deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Build a deck from slides. At least one slide is required.
    pub fn new(slides: Vec<Slide>) -> Result<Deck, AppError> {
        if slides.is_empty() {
            return Err(AppError::Structural(
                "A presentation must contain at least one slide".to_string(),
            ));
        }
        Ok(Deck { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Result<&Slide, AppError> {
        self.slides.get(index).ok_or(AppError::NotFound)
    }

    /// Next index, wrapping modulo deck length.
    pub fn next_index(&self, current: usize) -> usize {
        (current + 1) % self.slides.len()
    }

    /// Previous index, wrapping modulo deck length.
    pub fn prev_index(&self, current: usize) -> usize {
        (current + self.slides.len() - 1) % self.slides.len()
    }

    /// Shallow-merge the patch into the slide at `index`. Nested style
    /// objects are replaced wholesale, not merged per sub-field.
    pub fn with_update(&self, index: usize, patch: SlidePatch) -> Result<Deck, AppError> {
        let current = self.get(index)?;
        let updated = patch.apply_to(current);
        Ok(self.replaced(index, updated))
    }

    /// Set an image source, clearing any bound video.
    pub fn with_image(&self, index: usize, image: String) -> Result<Deck, AppError> {
        let mut slide = self.get(index)?.clone();
        slide.image = image;
        slide.video_url = None;
        Ok(self.replaced(index, slide))
    }

    /// Bind a video: the embed URL plus its thumbnail, which overwrites
    /// `image` so it doubles as a fallback poster.
    pub fn with_video(
        &self,
        index: usize,
        embed_url: String,
        poster: String,
    ) -> Result<Deck, AppError> {
        let mut slide = self.get(index)?.clone();
        slide.video_url = Some(embed_url);
        slide.image = poster;
        Ok(self.replaced(index, slide))
    }

    /// Unset the video without touching the image field.
    pub fn with_video_cleared(&self, index: usize) -> Result<Deck, AppError> {
        let mut slide = self.get(index)?.clone();
        slide.video_url = None;
        Ok(self.replaced(index, slide))
    }

    /// Deep-clone the slide at `index` and insert the copy right after it.
    /// Returns the new deck and the clone's index (the new selection).
    pub fn with_duplicate(&self, index: usize) -> Result<(Deck, usize), AppError> {
        let copy = self.get(index)?.clone();
        let mut slides = self.slides.clone();
        slides.insert(index + 1, copy);
        Ok((Deck { slides }, index + 1))
    }

    /// Delete the slide at `index`. Rejected if it is the last one.
    /// Returns the new deck and the clamped selection.
    pub fn with_delete(&self, index: usize) -> Result<(Deck, usize), AppError> {
        self.get(index)?;
        if self.slides.len() <= 1 {
            return Err(AppError::Structural("Cannot delete the last slide.".to_string()));
        }
        let mut slides = self.slides.clone();
        slides.remove(index);
        let selection = index.min(slides.len() - 1);
        Ok((Deck { slides }, selection))
    }

    /// Append a placeholder point to the slide at `index`.
    pub fn with_point_added(&self, index: usize) -> Result<Deck, AppError> {
        let mut slide = self.get(index)?.clone();
        slide.points.push(NEW_POINT_TEXT.to_string());
        Ok(self.replaced(index, slide))
    }

    /// Insert a copy of point `point` right after it.
    pub fn with_point_duplicated(&self, index: usize, point: usize) -> Result<Deck, AppError> {
        let mut slide = self.get(index)?.clone();
        if point >= slide.points.len() {
            return Err(AppError::NotFound);
        }
        let copy = slide.points[point].clone();
        slide.points.insert(point + 1, copy);
        Ok(self.replaced(index, slide))
    }

    /// Delete point `point`. Rejected if it is the only point left.
    pub fn with_point_deleted(&self, index: usize, point: usize) -> Result<Deck, AppError> {
        let mut slide = self.get(index)?.clone();
        if point >= slide.points.len() {
            return Err(AppError::NotFound);
        }
        if slide.points.len() <= 1 {
            return Err(AppError::Structural("Cannot delete the last point.".to_string()));
        }
        slide.points.remove(point);
        Ok(self.replaced(index, slide))
    }

    /// Append imported slides at the end, order preserved.
    pub fn with_appended(&self, imported: Vec<Slide>) -> Deck {
        let mut slides = self.slides.clone();
        slides.extend(imported);
        Deck { slides }
    }

    /// Splice `imported` in place of exactly one slide at 1-based
    /// `position`. Deck length changes by `imported.len() - 1`. Returns the
    /// new deck and the 0-based index of the first spliced slide.
    pub fn with_replaced_at(
        &self,
        position: usize,
        imported: Vec<Slide>,
    ) -> Result<(Deck, usize), AppError> {
        if position < 1 || position > self.slides.len() {
            return Err(AppError::Validation(format!(
                "Invalid slide number to replace. Please enter a number between 1 and {}.",
                self.slides.len()
            )));
        }
        if imported.is_empty() {
            return Err(AppError::Validation("No slides selected to import".to_string()));
        }
        let target = position - 1;
        let mut slides = self.slides.clone();
        slides.splice(target..=target, imported);
        Ok((Deck { slides }, target))
    }

    fn replaced(&self, index: usize, slide: Slide) -> Deck {
        let mut slides = self.slides.clone();
        slides[index] = slide;
        Deck { slides }
    }
}
