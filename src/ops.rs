//! Mamdani operators: min for premises and truncation, max for aggregation,
//! and a discrete centre of gravity for defuzzification.

use num::Float;

/// And operator for combining the propositions of a fuzzy rule premise.
#[inline]
pub fn and_min<F: Float>(u: F, v: F) -> F {
    F::min(u, v)
}

/// Production link for aggregating the consequences of the fuzzy rules.
#[inline]
pub fn or_max<F: Float>(u: F, v: F) -> F {
    F::max(u, v)
}

/// Firing strength of a conjunction. An empty premise does not constrain,
/// so the fold starts at one.
pub fn firing_strength<F: Float>(degrees: impl IntoIterator<Item = F>) -> F {
    degrees.into_iter().fold(F::one(), and_min)
}

/// Truncates a membership curve at an activation level.
pub fn clip<F: Float>(membership: impl IntoIterator<Item = F>, level: F) -> impl Iterator<Item = F> {
    membership.into_iter().map(move |m| and_min(m, level))
}

/// Unions `v` into `acc` point by point.
pub fn union_into<F: Float>(acc: &mut [F], v: impl IntoIterator<Item = F>) {
    for (a, v) in acc.iter_mut().zip(v) {
        *a = or_max(*a, v);
    }
}

/// Discrete centre of gravity: `sum(m * u) / sum(m)`.
///
/// Returns `None` when the membership carries no mass at all.
pub fn centroid<F: Float>(universe: &[F], membership: &[F]) -> Option<F> {
    let (num, den) = universe
        .iter()
        .zip(membership)
        .fold((F::zero(), F::zero()), |(num, den), (&u, &m)| (num + m * u, den + m));

    if den == F::zero() {
        None
    } else {
        Some(num / den)
    }
}
