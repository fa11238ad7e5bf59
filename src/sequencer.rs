use crate::chain::Chain;
use crate::config::Config;
use crate::ornament::OrnamentStyle;
use crate::scheduler::{FrameHost, FrameScheduler};
use crate::surface::{Color, Surface};

/// Ties the chain to its frame loop. The host calls `render` for every frame
/// and `on_activate` for every tap.
pub struct Sequencer {
    chain: Chain,
    scheduler: FrameScheduler,
    tick: f64,
    style: OrnamentStyle,
    background: Color,
}

impl Sequencer {
    pub fn new(config: &Config) -> Self {
        Sequencer {
            chain: Chain::new(config.nodes),
            scheduler: FrameScheduler::new(config.frame_delay()),
            tick: config.tick,
            style: config.style(),
            background: config.background,
        }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn render<S: Surface, H: FrameHost>(&mut self, surface: &mut S, host: &mut H) {
        surface.clear(self.background);
        self.chain.draw_all(surface, &self.style);

        let chain = &mut self.chain;
        let tick = self.tick;
        self.scheduler.tick(host, || chain.step_current(tick).is_finished());
    }

    /// Starts the current ornament. Returns `false` when the tap was ignored
    /// because an ornament is still moving.
    pub fn on_activate<H: FrameHost>(&mut self, host: &mut H) -> bool {
        if !self.chain.activate() {
            log::trace!("tap ignored, node {} still moving", self.chain.current());
            return false;
        }

        self.scheduler.start(host);
        true
    }
}
