//! Fakes for the drawing surface and the frame host.

use std::time::Duration;

use crate::scheduler::{FrameHost, Interrupted};
use crate::surface::{Color, StrokeCap, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(Color),
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    Scale(f32, f32),
    StrokeColor(Color),
    StrokeWidth(f32),
    StrokeCap(StrokeCap),
    Line(f32, f32, f32, f32),
}

pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub ops: Vec<Op>,
    depth: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        RecordingSurface {
            width,
            height,
            ops: Vec::new(),
            depth: 0,
        }
    }

    /// Open `save`s without a matching `restore`.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn lines(&self) -> Vec<Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Line(..)))
            .cloned()
            .collect()
    }

    pub fn rotations(&self) -> Vec<f32> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rotate(deg) => Some(*deg),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(Op::Clear(color));
    }

    fn save(&mut self) {
        self.depth += 1;
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        assert!(self.depth > 0, "restore without save");
        self.depth -= 1;
        self.ops.push(Op::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(Op::Translate(dx, dy));
    }

    fn rotate(&mut self, degrees: f32) {
        self.ops.push(Op::Rotate(degrees));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.ops.push(Op::Scale(sx, sy));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(Op::StrokeColor(color));
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.ops.push(Op::StrokeWidth(width));
    }

    fn set_stroke_cap(&mut self, cap: StrokeCap) {
        self.ops.push(Op::StrokeCap(cap));
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(Op::Line(x1, y1, x2, y2));
    }
}

/// Counts redraw requests and pauses; can be told to interrupt every pause.
#[derive(Debug, Default)]
pub struct TestHost {
    pub redraws: usize,
    pub pauses: Vec<Duration>,
    pub idles: usize,
    pub interrupt: bool,
}

impl FrameHost for TestHost {
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn pause(&mut self, delay: Duration) -> Result<(), Interrupted> {
        self.pauses.push(delay);
        if self.interrupt {
            Err(Interrupted)
        } else {
            Ok(())
        }
    }

    fn on_idle(&mut self) {
        self.idles += 1;
    }
}
