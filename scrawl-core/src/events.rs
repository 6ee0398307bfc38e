//! # Events
//!
//! Maps the host's pointer stream onto canvas operations. The host classifies
//! each event by tool and action (vendor button codes included) and hands it
//! to [`Classifier::process`]; anything the table below doesn't recognize is
//! left unconsumed so the host can route it elsewhere.
//!
//! | state    | event                        | effect                          | next     |
//! |----------|------------------------------|---------------------------------|----------|
//! | any      | pen tip down                 | `begin_stroke` + `extend_active`| Stroking |
//! | Stroking | pen tip move                 | `extend_active`                 | Stroking |
//! | any      | pen button down/move         | `erase`                         | same     |
//! | any      | eraser tool down/move        | `erase`                         | same     |
//! | any      | anything else                | unconsumed                      | same     |
//!
//! Tip-up is deliberately absent: a stroke ends by simply not receiving
//! further samples, and the next tip-down begins a fresh one.

use crate::canvas::Canvas;

/// Vendor action codes for the stylus side button, as delivered by the host's
/// input stack. Button-up (212) is recognized but unhandled.
pub const PEN_BUTTON_DOWN: i32 = 211;
pub const PEN_BUTTON_UP: i32 = 212;
pub const PEN_BUTTON_MOVE: i32 = 213;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Tool {
    /// Stylus tip.
    Pen,
    /// Dedicated eraser end of the stylus.
    Eraser,
    /// Finger, mouse, unknown hardware - never consumed here.
    Other,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Action {
    Down,
    Up,
    Move,
    PenButtonDown,
    PenButtonUp,
    PenButtonMove,
    Other,
}

impl Action {
    /// Classify a raw host action code, vendor button codes included.
    #[must_use]
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => Self::Down,
            1 => Self::Up,
            2 => Self::Move,
            PEN_BUTTON_DOWN => Self::PenButtonDown,
            PEN_BUTTON_UP => Self::PenButtonUp,
            PEN_BUTTON_MOVE => Self::PenButtonMove,
            _ => Self::Other,
        }
    }
}

/// One classified pointer observation from the host.
#[derive(Copy, Clone, Debug)]
pub struct PenEvent {
    pub tool: Tool,
    pub action: Action,
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
enum State {
    #[default]
    Idle,
    Stroking,
}

/// The input state machine. Owns nothing but its state; the canvas is passed
/// per event so one classifier can drive any canvas.
#[derive(Debug, Default)]
pub struct Classifier {
    state: State,
}

impl Classifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn is_stroking(&self) -> bool {
        self.state == State::Stroking
    }

    /// Feed one event. Returns whether it was consumed; every consumed event
    /// means the canvas may have changed and the host should repaint.
    pub fn process(&mut self, canvas: &mut Canvas, event: PenEvent) -> bool {
        match (event.tool, event.action) {
            (Tool::Pen, Action::Down) => {
                canvas.begin_stroke();
                canvas.extend_active(event.x, event.y, event.pressure);
                self.state = State::Stroking;
                true
            }
            (Tool::Pen, Action::Move) if self.state == State::Stroking => {
                canvas.extend_active(event.x, event.y, event.pressure);
                true
            }
            // The stylus side button erases regardless of stroking state, as
            // does the dedicated eraser tool.
            (Tool::Pen, Action::PenButtonDown | Action::PenButtonMove)
            | (Tool::Eraser, Action::Down | Action::Move) => {
                canvas.erase(event.x, event.y);
                true
            }
            (tool, action) => {
                log::trace!("unconsumed event: {tool:?} {action:?}");
                false
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Settings;
    use strum::IntoEnumIterator;

    fn event(tool: Tool, action: Action, x: f32, y: f32) -> PenEvent {
        PenEvent {
            tool,
            action,
            x,
            y,
            pressure: 1.0,
        }
    }

    #[test]
    fn raw_action_codes() {
        assert_eq!(Action::from_raw(0), Action::Down);
        assert_eq!(Action::from_raw(1), Action::Up);
        assert_eq!(Action::from_raw(2), Action::Move);
        assert_eq!(Action::from_raw(211), Action::PenButtonDown);
        assert_eq!(Action::from_raw(212), Action::PenButtonUp);
        assert_eq!(Action::from_raw(213), Action::PenButtonMove);
        assert_eq!(Action::from_raw(4), Action::Other);
        assert_eq!(Action::from_raw(-1), Action::Other);
    }

    #[test]
    fn pen_down_begins_a_stroke() {
        let mut canvas = Canvas::new(Settings::default());
        let mut classifier = Classifier::new();

        assert!(classifier.process(&mut canvas, event(Tool::Pen, Action::Down, 0.0, 0.0)));
        assert!(classifier.is_stroking());
        assert_eq!(canvas.stroke_count(), 1);
        // The down position itself landed in the stroke.
        assert_eq!(canvas.strokes()[0].len(), 1);

        assert!(classifier.process(&mut canvas, event(Tool::Pen, Action::Move, 5.0, 0.0)));
        assert_eq!(canvas.strokes()[0].len(), 2);
    }

    #[test]
    fn pen_move_while_idle_is_unconsumed() {
        let mut canvas = Canvas::new(Settings::default());
        let mut classifier = Classifier::new();

        assert!(!classifier.process(&mut canvas, event(Tool::Pen, Action::Move, 5.0, 0.0)));
        assert!(!classifier.is_stroking());
        assert_eq!(canvas.stroke_count(), 0);
    }

    #[test]
    fn every_pen_down_starts_a_fresh_stroke() {
        let mut canvas = Canvas::new(Settings::default());
        let mut classifier = Classifier::new();

        classifier.process(&mut canvas, event(Tool::Pen, Action::Down, 0.0, 0.0));
        classifier.process(&mut canvas, event(Tool::Pen, Action::Move, 5.0, 0.0));
        classifier.process(&mut canvas, event(Tool::Pen, Action::Down, 100.0, 0.0));
        classifier.process(&mut canvas, event(Tool::Pen, Action::Move, 105.0, 0.0));

        assert_eq!(canvas.stroke_count(), 2);
        assert_eq!(canvas.strokes()[0].len(), 2);
        assert_eq!(canvas.strokes()[1].len(), 2);
    }

    #[test]
    fn pen_button_erases_without_leaving_stroking() {
        let mut canvas = Canvas::new(Settings::default());
        let mut classifier = Classifier::new();

        classifier.process(&mut canvas, event(Tool::Pen, Action::Down, 500.0, 500.0));
        classifier.process(&mut canvas, event(Tool::Pen, Action::Move, 510.0, 500.0));
        // A second, distant stroke to erase.
        classifier.process(&mut canvas, event(Tool::Pen, Action::Down, 0.0, 0.0));
        assert_eq!(canvas.stroke_count(), 2);

        assert!(classifier.process(
            &mut canvas,
            event(Tool::Pen, Action::PenButtonDown, 500.0, 500.0)
        ));
        assert!(classifier.is_stroking());
        assert_eq!(canvas.stroke_count(), 1);

        assert!(classifier.process(
            &mut canvas,
            event(Tool::Pen, Action::PenButtonMove, 0.0, 0.0)
        ));
        assert_eq!(canvas.stroke_count(), 0);
    }

    #[test]
    fn eraser_tool_erases_on_down_and_move() {
        let mut canvas = Canvas::new(Settings::default());
        let mut classifier = Classifier::new();

        classifier.process(&mut canvas, event(Tool::Pen, Action::Down, 0.0, 0.0));
        assert!(classifier.process(&mut canvas, event(Tool::Eraser, Action::Down, 0.0, 0.0)));
        assert_eq!(canvas.stroke_count(), 0);

        classifier.process(&mut canvas, event(Tool::Pen, Action::Down, 0.0, 0.0));
        assert!(classifier.process(&mut canvas, event(Tool::Eraser, Action::Move, 0.0, 0.0)));
        assert_eq!(canvas.stroke_count(), 0);
    }

    #[test]
    fn unhandled_events_leave_the_canvas_untouched() {
        let mut canvas = Canvas::new(Settings::default());
        let mut classifier = Classifier::new();
        classifier.process(&mut canvas, event(Tool::Pen, Action::Down, 0.0, 0.0));

        // Exhaustively: everything outside the table rows is unconsumed,
        // including pen-button-up (vendor code 212) and the whole non-stylus
        // tool space.
        for tool in Tool::iter() {
            for action in Action::iter() {
                let consumed_by_table = match (tool, action) {
                    (Tool::Pen, Action::Down | Action::Move)
                    | (Tool::Pen, Action::PenButtonDown | Action::PenButtonMove)
                    | (Tool::Eraser, Action::Down | Action::Move) => true,
                    _ => false,
                };
                if consumed_by_table {
                    continue;
                }
                let strokes_before = canvas.stroke_count();
                let samples_before = canvas.strokes()[0].len();
                assert!(!classifier.process(&mut canvas, event(tool, action, 1.0, 1.0)));
                assert_eq!(canvas.stroke_count(), strokes_before);
                assert_eq!(canvas.strokes()[0].len(), samples_before);
            }
        }
        // Still stroking through all of it.
        assert!(classifier.is_stroking());
    }
}
