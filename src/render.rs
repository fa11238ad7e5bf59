use std::time::Duration;

use nannou::prelude::*;

use crate::model::Model;
use crate::scheduler::{FrameHost, Interrupted};
use crate::surface::{Color, StrokeCap, Surface};

pub fn view(app: &App, m: &Model, frame: Frame) {
    let root = app.draw();
    let mut surface = NannouSurface::new(&root, app.window_rect());
    let mut host = WindowHost::new(app);
    m.sequencer.borrow_mut().render(&mut surface, &mut host);

    if let Err(e) = root.to_frame(app, &frame) {
        log::error!("failed to draw frame: {:?}", e);
    }
}

/// Drives redraws through the app's loop mode: continuous while the chain
/// is moving, waiting for events otherwise.
pub struct WindowHost<'a> {
    app: &'a App,
}

impl<'a> WindowHost<'a> {
    pub fn new(app: &'a App) -> Self {
        WindowHost { app }
    }
}

impl FrameHost for WindowHost<'_> {
    fn request_redraw(&mut self) {
        self.app.set_loop_mode(LoopMode::RefreshSync);
    }

    fn pause(&mut self, delay: Duration) -> Result<(), Interrupted> {
        std::thread::sleep(delay);
        Ok(())
    }

    fn on_idle(&mut self) {
        self.app.set_loop_mode(LoopMode::Wait);
    }
}

/// `Surface` over a nannou `Draw`.
///
/// nannou is centred with y up, so the base transform moves the origin to
/// the top left corner and flips y. `save` keeps a copy of the transformed
/// `Draw`.
pub struct NannouSurface {
    draw: Draw,
    saved: Vec<Draw>,
    width: f32,
    height: f32,
    stroke_color: Color,
    stroke_width: f32,
    stroke_cap: StrokeCap,
}

impl NannouSurface {
    pub fn new(root: &Draw, rect: Rect) -> Self {
        let draw = root
            .translate(vec3(rect.left(), rect.top(), 0.0))
            .scale_axes(vec3(1.0, -1.0, 1.0));
        NannouSurface {
            draw,
            saved: Vec::new(),
            width: rect.w(),
            height: rect.h(),
            stroke_color: Color::new(0, 0, 0),
            stroke_width: 1.0,
            stroke_cap: StrokeCap::default(),
        }
    }
}

fn rgb(color: Color) -> Rgb8 {
    rgb8(color.r, color.g, color.b)
}

impl Surface for NannouSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.draw.background().color(rgb(color));
    }

    fn save(&mut self) {
        self.saved.push(self.draw.clone());
    }

    fn restore(&mut self) {
        if let Some(draw) = self.saved.pop() {
            self.draw = draw;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.draw = self.draw.translate(vec3(dx, dy, 0.0));
    }

    fn rotate(&mut self, degrees: f32) {
        self.draw = self.draw.rotate(degrees.to_radians());
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.draw = self.draw.scale_axes(vec3(sx, sy, 1.0));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    fn set_stroke_cap(&mut self, cap: StrokeCap) {
        self.stroke_cap = cap;
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let line = self
            .draw
            .line()
            .start(pt2(x1, y1))
            .end(pt2(x2, y2))
            .weight(self.stroke_width)
            .color(rgb(self.stroke_color));
        match self.stroke_cap {
            StrokeCap::Butt => line.caps_butt(),
            StrokeCap::Round => line.caps_round(),
            StrokeCap::Square => line.caps_square(),
        };
    }
}
