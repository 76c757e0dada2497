use super::defs::Weighted;
use crate::Probability;
use rand::distributions::{WeightedError, WeightedIndex};
use rand::prelude::*;

pub const SUM_TOLERANCE: Probability = 1e-9;

pub fn weighted_index<T, S>(ts: &[T]) -> Result<WeightedIndex<Probability>, WeightedError>
where
    T: Weighted<S>,
{
    WeightedIndex::new(ts.iter().map(|item| item.p()))
}

pub fn pick_next<T, S>(rng: &mut StdRng, ts: &[T], dist: &WeightedIndex<Probability>) -> S
where
    T: Weighted<S>,
{
    ts[dist.sample(rng)].s()
}

pub fn probability_sum<T, S>(ts: &[T]) -> Probability
where
    T: Weighted<S>,
{
    ts.iter().map(|item| item.p()).sum()
}

pub fn sums_to_one(sum: Probability) -> bool {
    (sum - 1.).abs() <= SUM_TOLERANCE
}
