//! Read-side operations over route collections.
//!
//! Pure helpers for routes already retrieved from the store. Nothing here
//! touches persistence.

use rayon::prelude::*;

use crate::model::OptimizedRoute;
use crate::score::{optimization_score, ScoreWeights};

/// Routes sorted by optimization score, best first.
///
/// The sort is stable: ties keep their retrieval order.
pub fn sorted_by_score(mut routes: Vec<OptimizedRoute>) -> Vec<OptimizedRoute> {
    routes.sort_by(|a, b| b.optimization_score.cmp(&a.optimization_score));
    routes
}

/// Routes created within `[start, end]`, inclusive on both bounds.
pub fn filter_by_created_range(
    routes: &[OptimizedRoute],
    start: i64,
    end: i64,
) -> Vec<OptimizedRoute> {
    routes
        .iter()
        .filter(|route| route.created_at >= start && route.created_at <= end)
        .cloned()
        .collect()
}

/// Recompute scores for a retrieved collection, in parallel.
///
/// Useful after changing weights: compares stored scores against what the
/// current weights would produce. Returns `(route id, score)` pairs in the
/// input order.
pub fn rescore(routes: &[OptimizedRoute], weights: &ScoreWeights) -> Vec<(String, u8)> {
    routes
        .par_iter()
        .map(|route| {
            let score = optimization_score(&route.metrics(), &route.job_sites, weights);
            (route.id.clone(), score)
        })
        .collect()
}
