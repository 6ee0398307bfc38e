//! # Outline
//!
//! The host-facing path description. A [`Stroke`](crate::stroke::Stroke)
//! renders to exactly one [`Outline`]: a closed contour of line and cubic
//! segments which the host fills as-is. The engine promises nothing about
//! self-intersection - sharp turns *will* produce crossing offset edges, and
//! the [`FillRule::NonZero`] rule is what keeps those regions solid instead of
//! punching holes.

use ultraviolet::Vec2;

/// One path command. Coordinates are absolute, in the host's input space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Verb {
    MoveTo(Vec2),
    LineTo(Vec2),
    CubicTo { ctrl0: Vec2, ctrl1: Vec2, end: Vec2 },
    Close,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum FillRule {
    /// Winding fill. Required for stroke outlines, which may self-intersect.
    #[default]
    NonZero,
    EvenOdd,
}

/// A finished path. Obtained from [`OutlineBuilder::build`]; an outline with
/// no verbs paints nothing.
// Inline capacity covers the degenerate outlines (empty, or the six-verb
// single-sample circle) without touching the heap.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Outline {
    verbs: smallvec::SmallVec<[Verb; 8]>,
    fill_rule: FillRule,
}

impl Outline {
    /// An outline that paints nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
    #[must_use]
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }
    #[must_use]
    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }
    /// Whether every subpath is explicitly closed. Stroke outlines always
    /// are; hosts may debug-assert this.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let mut open = false;
        for verb in &self.verbs {
            match verb {
                Verb::MoveTo(_) if open => return false,
                Verb::MoveTo(_) => open = true,
                Verb::Close => open = false,
                _ => {}
            }
        }
        !open
    }
}

/// Incremental [`Outline`] construction, mirroring the move/line/cubic/close
/// surface of the paint APIs this crate targets.
#[derive(Debug, Default)]
pub struct OutlineBuilder {
    verbs: smallvec::SmallVec<[Verb; 8]>,
}

impl OutlineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    pub fn move_to(&mut self, to: Vec2) {
        self.verbs.push(Verb::MoveTo(to));
    }
    pub fn line_to(&mut self, to: Vec2) {
        self.verbs.push(Verb::LineTo(to));
    }
    pub fn cubic_to(&mut self, ctrl0: Vec2, ctrl1: Vec2, end: Vec2) {
        self.verbs.push(Verb::CubicTo { ctrl0, ctrl1, end });
    }
    pub fn close(&mut self) {
        self.verbs.push(Verb::Close);
    }
    #[must_use]
    pub fn build(self, fill_rule: FillRule) -> Outline {
        Outline {
            verbs: self.verbs,
            fill_rule,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_paints_nothing() {
        let outline = Outline::empty();
        assert!(outline.is_empty());
        assert!(outline.verbs().is_empty());
        assert!(outline.is_closed());
        assert_eq!(outline.fill_rule(), FillRule::NonZero);
    }

    #[test]
    fn builder_records_verbs_in_order() {
        let mut builder = OutlineBuilder::new();
        builder.move_to(Vec2::new(0.0, 0.0));
        builder.line_to(Vec2::new(1.0, 0.0));
        builder.cubic_to(
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
        );
        builder.close();
        let outline = builder.build(FillRule::NonZero);

        assert_eq!(outline.verbs().len(), 4);
        assert!(matches!(outline.verbs()[0], Verb::MoveTo(_)));
        assert!(matches!(outline.verbs()[3], Verb::Close));
        assert!(outline.is_closed());
    }

    #[test]
    fn unclosed_contour_is_detected() {
        let mut builder = OutlineBuilder::new();
        builder.move_to(Vec2::new(0.0, 0.0));
        builder.line_to(Vec2::new(1.0, 0.0));
        let outline = builder.build(FillRule::NonZero);
        assert!(!outline.is_closed());
    }
}
