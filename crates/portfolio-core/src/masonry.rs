//! Waterfall placement and the full-screen slide viewer.

use crate::types::GalleryItem;

pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 4.0;
pub const ZOOM_STEP: f32 = 0.5;

/// Column count for a viewport width.
pub fn columns_for_width(width_px: u32) -> usize {
    match width_px {
        w if w >= 1280 => 4,
        w if w >= 768 => 3,
        _ => 2,
    }
}

/// Height of an item at unit width, from the dimensions in its asset id.
/// Square when the id carries no usable dimensions.
pub fn relative_height(item: &GalleryItem) -> f64 {
    item.image
        .parts()
        .map(|p| f64::from(p.height) / f64::from(p.width))
        .unwrap_or(1.0)
}

/// Append each item to the currently shortest column, leftmost on ties.
///
/// Document order is preserved inside every column.
pub fn masonry_columns<T: Clone>(
    items: &[T],
    column_count: usize,
    height_of: impl Fn(&T) -> f64,
) -> Vec<Vec<T>> {
    let column_count = column_count.max(1);
    let mut columns: Vec<Vec<T>> = vec![Vec::new(); column_count];
    let mut heights = vec![0.0_f64; column_count];

    for item in items {
        let mut shortest = 0;
        for (idx, h) in heights.iter().enumerate().skip(1) {
            if *h < heights[shortest] {
                shortest = idx;
            }
        }
        heights[shortest] += height_of(item).max(0.0);
        columns[shortest].push(item.clone());
    }

    columns
}

/// Lightbox state over the currently filtered list.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    open: Option<usize>,
    len: usize,
    zoom: f32,
    fullscreen: bool,
}

impl ViewerState {
    pub fn new(len: usize) -> Self {
        Self {
            open: None,
            len,
            zoom: MIN_ZOOM,
            fullscreen: false,
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Open at `index`; out of range is ignored.
    pub fn open_at(&mut self, index: usize) {
        if index < self.len {
            self.open = Some(index);
            self.zoom = MIN_ZOOM;
        }
    }

    pub fn has_next(&self) -> bool {
        matches!(self.open, Some(i) if i + 1 < self.len)
    }

    pub fn has_prev(&self) -> bool {
        matches!(self.open, Some(i) if i > 0)
    }

    /// Advance one slide. Stays on the last slide.
    pub fn next(&mut self) {
        if self.has_next() {
            self.open = self.open.map(|i| i + 1);
            self.zoom = MIN_ZOOM;
        }
    }

    /// Back one slide. Stays on the first slide.
    pub fn prev(&mut self) {
        if self.has_prev() {
            self.open = self.open.map(|i| i - 1);
            self.zoom = MIN_ZOOM;
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    pub fn close(&mut self) {
        self.open = None;
        self.zoom = MIN_ZOOM;
        self.fullscreen = false;
    }

    /// The list changed underneath (new filter); close if the slide is gone.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if matches!(self.open, Some(i) if i >= len) {
            self.close();
        }
    }
}
