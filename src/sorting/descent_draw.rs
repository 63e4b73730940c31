//! Descent-draw coin sorting strategy
//!
//! Orders coins largest magnitude first. Favors fewer inputs and a lower
//! absolute fee, at the cost of leaving small dust coins unconsolidated.

use crate::sorting::SortingStrategy;
use crate::types::UnspentOutput;

/// Strategy that draws the largest coins first
pub struct DescentDrawSorting;

impl SortingStrategy for DescentDrawSorting {
    fn name(&self) -> &'static str {
        "DescentDraw"
    }

    fn sort(&self, coins: &[UnspentOutput]) -> Vec<UnspentOutput> {
        let mut sorted = coins.to_vec();
        sorted.sort_unstable_by(|a, b| b.magnitude.cmp(&a.magnitude));
        sorted
    }
}
