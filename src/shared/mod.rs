pub(crate) mod fuzzy;
pub mod geo;

pub use geo::*;

use rayon::prelude::*;
use std::cmp::Ordering;

pub trait Searchable {
    fn normalized_name(&self) -> &str;
}

/// Generic fuzzy search function built for multithreaded searching.
pub fn search<'a, T>(needle: &str, haystack: &'a [T]) -> Vec<&'a T>
where
    T: Send + Sync + Searchable,
{
    let normalized_needle = fuzzy::normalize(needle);
    let mut results: Vec<(&T, f64)> = haystack
        .par_iter()
        .filter_map(|hay| {
            let score = fuzzy::score(&normalized_needle, hay.normalized_name());
            if score > fuzzy::MATCH_THRESHOLD {
                Some((hay, score))
            } else {
                None
            }
        })
        .collect();

    // Stable so equal scores keep directory order.
    results.par_sort_by(|(_, a): &(_, f64), (_, b): &(_, f64)| {
        b.partial_cmp(a).unwrap_or(Ordering::Equal)
    });
    results.into_iter().map(|(entity, _)| entity).collect()
}
