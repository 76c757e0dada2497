extern crate rand;
extern crate serde;

pub mod car;
pub mod common;
pub mod config;
pub mod env;
pub mod error;
pub mod mdps;
pub mod rewards;
pub mod session;
pub mod table;

pub use car::{CarAction, CarState};
pub use config::{EnvConfig, ProbabilityPolicy, RewardSpec};
pub use env::CarEnvironment;
pub use error::MdpError;
pub use session::{Session, SessionEvent, SessionObserver, SessionStep, TracingObserver};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type Reward = i64;
pub type Probability = f64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub next_state: CarState,
    pub probability: Probability,
}

impl Transition {
    pub fn new(next_state: CarState, probability: Probability) -> Self {
        Self {
            next_state,
            probability,
        }
    }
}

pub type Transitions = HashMap<(CarState, CarAction), Vec<Transition>>;

/// Why a step ended up where it did. The two no-op kinds return the current
/// state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    Moved,
    InvalidAction,
    AlreadyTerminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    pub observation: CarState,
    pub reward: Reward,
    pub done: bool,
    pub kind: StepKind,
}

impl StepInfo {
    pub fn as_tuple(&self) -> (CarState, Reward, bool) {
        (self.observation, self.reward, self.done)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeEvent {
    pub s: CarState,
    pub r: Reward,
}
