use crate::common::utils::*;
use crate::*;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone)]
struct Outcomes {
    transitions: Vec<Transition>,
    dist: WeightedIndex<Probability>,
}

/// Checked, ready-to-sample form of [`Transitions`].
///
/// Lists that cannot be sampled at all (empty, negative, non-finite or all
/// zero weights) are rejected under every [`ProbabilityPolicy`].
#[derive(Debug, Clone)]
pub struct TransitionTable {
    entries: HashMap<(CarState, CarAction), Outcomes>,
}

impl TransitionTable {
    pub fn new(transitions: Transitions, policy: ProbabilityPolicy) -> Result<Self, MdpError> {
        let mut entries = HashMap::with_capacity(transitions.len());

        for ((s, a), mut ts) in transitions {
            if let Some(t) = ts.iter().find(|t| !t.probability.is_finite()) {
                return Err(MdpError::InvalidWeights {
                    state: s,
                    action: a,
                    reason: format!("non-finite weight {}", t.probability),
                });
            }

            weighted_index(&ts).map_err(|e| MdpError::InvalidWeights {
                state: s,
                action: a,
                reason: e.to_string(),
            })?;

            let sum = probability_sum(&ts);
            if !sums_to_one(sum) {
                match policy {
                    ProbabilityPolicy::Tolerant => {
                        warn!(state = %s, action = %a, sum, "probabilities do not sum to 1")
                    }
                    ProbabilityPolicy::Normalize => ts
                        .iter_mut()
                        .for_each(|t| t.probability /= sum),
                    ProbabilityPolicy::Validate => {
                        return Err(MdpError::ProbabilitySum {
                            state: s,
                            action: a,
                            sum,
                        })
                    }
                }
            }

            let dist = weighted_index(&ts).map_err(|e| MdpError::InvalidWeights {
                state: s,
                action: a,
                reason: e.to_string(),
            })?;

            entries.insert(
                (s, a),
                Outcomes {
                    transitions: ts,
                    dist,
                },
            );
        }

        Ok(Self { entries })
    }

    pub fn authored(policy: ProbabilityPolicy) -> Result<Self, MdpError> {
        Self::new(car::authored_transitions(), policy)
    }

    pub fn outcomes(&self, s: CarState, a: CarAction) -> Option<&[Transition]> {
        self.entries.get(&(s, a)).map(|o| o.transitions.as_slice())
    }

    pub fn sample(&self, rng: &mut StdRng, s: CarState, a: CarAction) -> Option<CarState> {
        self.entries
            .get(&(s, a))
            .map(|o| pick_next(rng, &o.transitions, &o.dist))
    }

    /// Actions with an entry for `s`, in action index order.
    pub fn valid_actions(&self, s: CarState) -> Vec<CarAction> {
        CarAction::ALL
            .into_iter()
            .filter(|a| self.entries.contains_key(&(s, *a)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
