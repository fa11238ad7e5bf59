use std::cell::RefCell;

use crate::config::Config;
use crate::sequencer::Sequencer;

pub struct Model {
    /// Behind a `RefCell` because nannou only lends the view a shared model
    /// while rendering advances the chain.
    pub sequencer: RefCell<Sequencer>,
}

impl Model {
    pub fn new(config: &Config) -> Self {
        Model {
            sequencer: RefCell::new(Sequencer::new(config)),
        }
    }
}
