use nannou::event::{TouchEvent, TouchPhase};
use nannou::prelude::*;

use crate::model::Model;
use crate::render::WindowHost;

/// Left clicks and touch starts count as taps; everything else is ignored.
pub fn event(app: &App, m: &mut Model, event: WindowEvent) {
    match event {
        WindowEvent::MousePressed(MouseButton::Left)
        | WindowEvent::Touch(TouchEvent {
            phase: TouchPhase::Started,
            ..
        }) => {
            let mut host = WindowHost::new(app);
            let sequencer = m.sequencer.get_mut();
            if sequencer.on_activate(&mut host) {
                log::debug!("tap started node {}", sequencer.chain().current());
            }
        }
        _ => (),
    }
}
