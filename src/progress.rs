/// Animation progress of a single ornament.
///
/// A node rests at one of the two boundaries (`anchor` 0 or 1) and, once
/// started, moves `scale` towards the other one a tick at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressState {
    scale: f64,
    direction: f64,
    anchor: f64,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn direction(&self) -> f64 {
        self.direction
    }

    pub fn anchor(&self) -> f64 {
        self.anchor
    }

    pub fn is_idle(&self) -> bool {
        self.direction == 0.0
    }

    /// Advances by `tick` in the current direction.
    ///
    /// Returns the new boundary once the node has crossed a full unit away
    /// from its anchor and settled there.
    pub fn step(&mut self, tick: f64) -> Option<f64> {
        if self.is_idle() {
            return None;
        }

        self.scale += self.direction * tick;
        if (self.scale - self.anchor).abs() > 1.0 {
            self.scale = self.anchor + self.direction;
            self.direction = 0.0;
            self.anchor = self.scale;
            return Some(self.anchor);
        }

        None
    }

    /// Starts moving away from the current boundary. A node that is already
    /// moving keeps going and `false` is returned.
    pub fn begin_advancing(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }

        // anchor is always exactly 0 or 1
        self.direction = 1.0 - 2.0 * self.anchor;
        true
    }
}
