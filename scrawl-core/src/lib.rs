//! # scrawl-core
//!
//! The stroke-geometry engine behind a freehand ink surface. The host feeds
//! discrete stylus samples (position + pressure, pre-classified by tool and
//! action) into a [`events::Classifier`], which drives a [`canvas::Canvas`] of
//! pressure-width [`stroke::Stroke`]s. Once per frame the host walks
//! [`canvas::Canvas::frame`] and fills each returned outline with the
//! nonzero-winding rule.
//!
//! Windowing, paint backends, and event sources are the host's problem - this
//! crate never touches them.

pub mod canvas;
pub mod color;
pub mod config;
pub mod events;
pub mod outline;
pub mod stroke;

pub use canvas::Canvas;
pub use config::Settings;
pub use events::{Classifier, PenEvent};
