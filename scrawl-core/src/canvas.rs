//! # Canvas
//!
//! The ordered stroke list. Index order is paint (z-) order, oldest first.
//! At most one stroke is "active" - the most recently begun one, which keeps
//! receiving samples until the next gesture begins or an erase removes it.

use crate::color::Color;
use crate::config::Settings;
use crate::outline::Outline;
use crate::stroke::Stroke;

#[derive(Debug, Default)]
pub struct Canvas {
    settings: Settings,
    strokes: Vec<Stroke>,
    /// Index into `strokes` of the stroke still receiving samples, if any.
    active: Option<usize>,
}

impl Canvas {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            strokes: Vec::new(),
            active: None,
        }
    }
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Start a new gesture: append an empty stroke and mark it active.
    pub fn begin_stroke(&mut self) {
        self.strokes.push(Stroke::new());
        self.active = Some(self.strokes.len() - 1);
    }

    /// Feed a sample to the active stroke. Silently ignored when no stroke is
    /// active - hosts deliver events out of order more often than one would
    /// hope, and a stray move must not fault.
    pub fn extend_active(&mut self, x: f32, y: f32, pressure: f32) {
        match self.active {
            Some(index) => self.strokes[index].add(x, y, pressure),
            None => log::debug!("dropping extend at ({x}, {y}): no active stroke"),
        }
    }

    /// Remove every stroke hit-testing true at `(x, y)`, preserving the
    /// relative order of the survivors. One stable filter pass - no index
    /// bookkeeping while removing.
    pub fn erase(&mut self, x: f32, y: f32) {
        let settings = self.settings;
        let active = self.active;
        let before = self.strokes.len();

        let mut index = 0;
        let mut kept = 0;
        let mut remapped_active = None;
        self.strokes.retain(|stroke| {
            let keep = !stroke.collides_with(x, y, &settings);
            if keep {
                if active == Some(index) {
                    remapped_active = Some(kept);
                }
                kept += 1;
            }
            index += 1;
            keep
        });
        self.active = remapped_active;

        let removed = before - self.strokes.len();
        if removed > 0 {
            log::debug!("erase at ({x}, {y}) removed {removed} of {before} strokes");
        }
    }

    /// One render pass: `(outline, fill color)` per surviving stroke, in
    /// insertion order. Outlines come from each stroke's cache and are only
    /// rebuilt for strokes that mutated since the last pass; fill with the
    /// outline's own (nonzero) rule.
    pub fn frame(&mut self) -> impl Iterator<Item = (&Outline, Color)> {
        let settings = self.settings;
        let ink = settings.ink();
        self.strokes
            .iter_mut()
            .map(move |stroke| (stroke.outline(&settings), ink))
    }
}
