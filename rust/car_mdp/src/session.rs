use crate::*;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SessionEvent {
    Stepped {
        step: usize,
        action: CarAction,
        state: CarState,
        reward: Reward,
        score: Reward,
        kind: StepKind,
    },
    EpisodeEnded {
        final_state: CarState,
        score: Reward,
        steps: usize,
    },
    Reset {
        state: CarState,
    },
}

pub trait SessionObserver {
    fn notify(&mut self, event: &SessionEvent);
}

/// Logs every session event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SessionObserver for TracingObserver {
    fn notify(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::Stepped {
                step,
                action,
                state,
                reward,
                score,
                kind,
            } => debug!(step, %action, %state, reward, score, ?kind, "stepped"),
            SessionEvent::EpisodeEnded {
                final_state,
                score,
                steps,
            } => info!(%final_state, score, steps, "episode ended"),
            SessionEvent::Reset { state } => info!(%state, "session reset"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStep {
    pub info: StepInfo,
    pub score: Reward,
}

/// One play-through at a time over a long-lived [`CarEnvironment`]: the
/// running score, the score after every step, and whoever is listening.
pub struct Session {
    env: CarEnvironment,
    score: Reward,
    history: Vec<Reward>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Session {
    pub fn new(env: CarEnvironment) -> Self {
        Self {
            env,
            score: 0,
            history: vec![],
            observers: vec![],
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn act(&mut self, action: CarAction) -> SessionStep {
        let info = self.env.step(action);
        self.score += info.reward;
        self.history.push(self.score);

        self.emit(SessionEvent::Stepped {
            step: self.history.len(),
            action,
            state: info.observation,
            reward: info.reward,
            score: self.score,
            kind: info.kind,
        });

        if info.done {
            self.emit(SessionEvent::EpisodeEnded {
                final_state: info.observation,
                score: self.score,
                steps: self.history.len(),
            });
        }

        SessionStep {
            info,
            score: self.score,
        }
    }

    pub fn reset(&mut self) -> CarState {
        let state = self.env.reset();
        self.score = 0;
        self.history.clear();
        self.emit(SessionEvent::Reset { state });

        state
    }

    fn emit(&mut self, event: SessionEvent) {
        for observer in self.observers.iter_mut() {
            observer.notify(&event);
        }
    }

    pub fn score(&self) -> Reward {
        self.score
    }

    pub fn history(&self) -> &[Reward] {
        &self.history
    }

    pub fn state(&self) -> CarState {
        self.env.state()
    }

    pub fn is_over(&self) -> bool {
        self.env.is_terminal(self.env.state())
    }

    pub fn env(&self) -> &CarEnvironment {
        &self.env
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.env.state())
            .field("score", &self.score)
            .field("steps", &self.history.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    #[derive(Clone, Default)]
    struct LogCount(Arc<AtomicUsize>);

    impl LogCount {
        fn get(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl<S: Subscriber> Layer<S> for LogCount {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Recorder(Rc<RefCell<Vec<SessionEvent>>>);

    impl SessionObserver for Recorder {
        fn notify(&mut self, event: &SessionEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    fn session() -> (Session, Rc<RefCell<Vec<SessionEvent>>>) {
        let env = CarEnvironment::new(EnvConfig::seeded(11)).unwrap();
        let events = Rc::new(RefCell::new(vec![]));
        let mut session = Session::new(env);
        session.subscribe(Box::new(Recorder(Rc::clone(&events))));
        session.subscribe(Box::new(TracingObserver));
        (session, events)
    }

    #[test]
    fn invalid_actions_still_score() {
        let (mut session, events) = session();
        let off = session.env().reward(CarState::Off);

        let step = session.act(CarAction::SwapBattery);
        assert_eq!(step.info.kind, StepKind::InvalidAction);
        assert_eq!(step.score, off);
        assert_eq!(session.history(), &[off]);
        assert_eq!(
            events.borrow().as_slice(),
            &[SessionEvent::Stepped {
                step: 1,
                action: CarAction::SwapBattery,
                state: CarState::Off,
                reward: off,
                score: off,
                kind: StepKind::InvalidAction,
            }]
        );
    }

    #[test]
    fn history_is_running_total() {
        let (mut session, _) = session();
        let mut rewards = vec![];
        while !session.is_over() {
            let action = session.env().valid_actions(session.state())[0];
            rewards.push(session.act(action).info.reward);
        }

        let totals = rewards
            .iter()
            .scan(0, |acc, r| {
                *acc += r;
                Some(*acc)
            })
            .collect::<Vec<_>>();
        assert_eq!(session.history(), totals.as_slice());
        assert_eq!(session.score(), rewards.iter().sum::<Reward>());
    }

    #[test]
    fn episode_end_then_reset() {
        let (mut session, events) = session();
        while !session.is_over() {
            let action = session.env().valid_actions(session.state())[0];
            session.act(action);
        }

        let steps = session.history().len();
        let score = session.score();
        assert!(events.borrow().contains(&SessionEvent::EpisodeEnded {
            final_state: CarState::NewEnergySystem,
            score,
            steps,
        }));

        assert_eq!(session.reset(), CarState::Off);
        assert_eq!(session.score(), 0);
        assert!(session.history().is_empty());
        assert_eq!(
            events.borrow().last(),
            Some(&SessionEvent::Reset {
                state: CarState::Off
            })
        );
    }

    #[test]
    fn one_log_line_per_act_and_reset() {
        let count = LogCount::default();
        let subscriber = tracing_subscriber::registry().with(count.clone());

        tracing::subscriber::with_default(subscriber, || {
            let (mut session, _) = session();

            let before = count.get();
            session.act(CarAction::TurnOn);
            assert_eq!(count.get() - before, 1);

            let before = count.get();
            session.act(CarAction::ShutDownAndCool);
            assert_eq!(count.get() - before, 1);

            let before = count.get();
            session.reset();
            assert_eq!(count.get() - before, 1);
        });
    }
}
