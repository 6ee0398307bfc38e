//! # Stroke
//!
//! One continuous pen gesture: an ordered run of pressure samples plus a
//! cached fill outline. Ingestion drops coincident repeats, endpoint
//! simplification drops samples whose ink disc another sample's disc already
//! swallows, and the outline is rebuilt lazily behind a dirty bit so a stroke
//! that didn't change between frames costs nothing to repaint.

use ultraviolet::Vec2;

use crate::config::Settings;
use crate::outline::{FillRule, Outline, OutlineBuilder};

/// One pointer observation. Plain-old-data so hosts can pass sample runs
/// around as raw buffers.
///
/// Pressure is conceptually `0..=1` but is not clamped anywhere; any finite
/// non-negative value flows straight into the ink radius.
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

impl Sample {
    #[must_use]
    pub fn new(x: f32, y: f32, pressure: f32) -> Self {
        Self { x, y, pressure }
    }
    #[must_use]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// An ordered, deduplicated sample sequence with a lazily recomputed closed
/// outline.
#[derive(Clone, Debug, Default)]
pub struct Stroke {
    /// Insertion order is temporal order; never reordered.
    samples: Vec<Sample>,
    /// Cache of the last computed outline, reused while `outline_valid`.
    outline: Outline,
    outline_valid: bool,
}

impl Stroke {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Ingest one raw sample.
    ///
    /// A sample whose position exactly matches the previous one is dropped
    /// whole - the stored pressure is *not* updated in place. Everything else
    /// is appended and invalidates the outline cache.
    pub fn add(&mut self, x: f32, y: f32, pressure: f32) {
        if let Some(last) = self.samples.last() {
            if last.x == x && last.y == y {
                return;
            }
        }
        self.samples.push(Sample::new(x, y, pressure));
        self.outline_valid = false;
    }
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop leading and trailing samples whose ink disc lies entirely inside
    /// another sample's disc. Brief pressure spikes at pen-down/up otherwise
    /// leave fat blobs and degenerate caps at the stroke's extremities.
    ///
    /// Only a prefix and a suffix are ever removed, never interior samples,
    /// and a non-empty stroke stays non-empty. Quadratic in stroke length -
    /// strokes are short-lived, bounded sequences, and this reruns on every
    /// outline rebuild because later samples can newly cover an endpoint.
    pub fn trim(&mut self, settings: &Settings) {
        let lead = Self::covering_index(&self.samples, settings);
        if lead > 0 {
            self.samples.drain(..lead);
            self.outline_valid = false;
        }
        // Same scan from the other end.
        self.samples.reverse();
        let tail = Self::covering_index(&self.samples, settings);
        if tail > 0 {
            self.samples.drain(..tail);
            self.outline_valid = false;
        }
        self.samples.reverse();
    }
    /// Index of the last sample whose disc contains every earlier sample's
    /// disc, or 0 when no sample does. Everything before it is redundant.
    fn covering_index(samples: &[Sample], settings: &Settings) -> usize {
        let mut covering = 0;
        for (i, big) in samples.iter().enumerate() {
            let r_big = settings.radius_for(big.pressure);
            let covers_all = samples[..i].iter().all(|small| {
                let distance = (big.pos() - small.pos()).mag();
                distance + settings.radius_for(small.pressure) <= r_big
            });
            if covers_all {
                covering = i;
            }
        }
        covering
    }

    /// True when any sample sits inside the axis-aligned square of half-width
    /// [`Settings::erase_hit_half_width`] around `(x, y)`.
    ///
    /// Intentionally a square test against sample *centers*, not a true
    /// disc-aware intersection - cheap, and plenty for an eraser nib.
    #[must_use]
    pub fn collides_with(&self, x: f32, y: f32, settings: &Settings) -> bool {
        let half_width = settings.erase_hit_half_width();
        self.samples
            .iter()
            .any(|sample| (sample.x - x).abs() <= half_width && (sample.y - y).abs() <= half_width)
    }

    /// The closed fill outline for this stroke, recomputed only when samples
    /// changed since the last call. Simplification runs first, against the
    /// current sample set.
    pub fn outline(&mut self, settings: &Settings) -> &Outline {
        if !self.outline_valid {
            self.trim(settings);
            self.outline = Self::build_outline(&self.samples, settings);
            self.outline_valid = true;
        }
        &self.outline
    }

    fn build_outline(samples: &[Sample], settings: &Settings) -> Outline {
        match samples {
            [] => Outline::empty(),
            [only] => circle(only.pos(), settings.radius_for(only.pressure)),
            _ => ribbon(samples, settings),
        }
    }
}

/// Normalize, or return zero rather than NaN for a zero-length vector.
/// Ingestion dedup keeps adjacent samples distinct, so the cap directions
/// below never actually hit the zero branch - but NaN must not be reachable.
fn normalize_or_zero(v: Vec2) -> Vec2 {
    let mag = v.mag();
    if mag > 0.0 {
        v / mag
    } else {
        Vec2::zero()
    }
}

/// Cubic-segment approximation constant for a quarter circle.
const QUARTER_ARC: f32 = 0.552_284_8;

/// A clockwise circle, for the single-sample stroke.
fn circle(center: Vec2, r: f32) -> Outline {
    let k = r * QUARTER_ARC;
    let mut builder = OutlineBuilder::new();
    builder.move_to(center + Vec2::new(r, 0.0));
    builder.cubic_to(
        center + Vec2::new(r, k),
        center + Vec2::new(k, r),
        center + Vec2::new(0.0, r),
    );
    builder.cubic_to(
        center + Vec2::new(-k, r),
        center + Vec2::new(-r, k),
        center + Vec2::new(-r, 0.0),
    );
    builder.cubic_to(
        center + Vec2::new(-r, -k),
        center + Vec2::new(-k, -r),
        center + Vec2::new(0.0, -r),
    );
    builder.cubic_to(
        center + Vec2::new(k, -r),
        center + Vec2::new(r, -k),
        center + Vec2::new(r, 0.0),
    );
    builder.close();
    builder.build(FillRule::NonZero)
}

/// A rounded cap at `tip`: two tangent points perpendicular to `dir` (the
/// direction *into* the stroke), bridged by a cubic bulging away from it.
fn cap(builder: &mut OutlineBuilder, tip: Vec2, dir: Vec2, radius: f32, start: bool) {
    let perp = Vec2::new(dir.y, -dir.x);
    let cw = tip + perp * radius;
    let ccw = tip - perp * radius;
    let reach = dir * (2.0 * radius);
    if start {
        builder.move_to(cw);
    } else {
        builder.line_to(cw);
    }
    builder.cubic_to(cw - reach, ccw - reach, ccw);
}

/// The variable-width ribbon for two or more samples: start cap, forward
/// offset side, end cap, then the opposite side walked back to the start.
fn ribbon(samples: &[Sample], settings: &Settings) -> Outline {
    let mut builder = OutlineBuilder::new();

    let first = &samples[0];
    let start_dir = normalize_or_zero(samples[1].pos() - first.pos());
    cap(
        &mut builder,
        first.pos(),
        start_dir,
        settings.radius_for(first.pressure),
        true,
    );

    // Offset each interior sample along the bisector of its two edge
    // directions; the opposite-side twin is held for the return walk.
    let mut return_side = Vec::with_capacity(samples.len().saturating_sub(2));
    for window in samples.windows(3) {
        let (prev, cur, next) = (&window[0], &window[1], &window[2]);
        let to_prev = prev.pos() - cur.pos();
        let to_next = next.pos() - cur.pos();
        let mut angle_prev = to_prev.y.atan2(to_prev.x);
        let angle_next = to_next.y.atan2(to_next.x);
        // Unwrap so the bisector lands on a consistent side regardless of
        // which way the stroke turns.
        if angle_next > angle_prev {
            angle_prev += 2.0 * std::f32::consts::PI;
        }
        let bisector = (angle_prev + angle_next) / 2.0;
        let offset = Vec2::new(bisector.cos(), bisector.sin()) * settings.radius_for(cur.pressure);
        builder.line_to(cur.pos() + offset);
        // The other side is the bisector rotated a half turn.
        return_side.push(cur.pos() - offset);
    }

    let last = &samples[samples.len() - 1];
    let end_dir = normalize_or_zero(samples[samples.len() - 2].pos() - last.pos());
    cap(
        &mut builder,
        last.pos(),
        end_dir,
        settings.radius_for(last.pressure),
        false,
    );

    for point in return_side.iter().rev() {
        builder.line_to(*point);
    }
    builder.close();
    builder.build(FillRule::NonZero)
}
