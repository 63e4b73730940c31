//! Ascent-draw coin sorting strategy
//!
//! Orders coins smallest magnitude first. Favors consolidating many small
//! coins, reducing wallet dust, at the cost of a larger transaction (more
//! inputs) and a higher absolute fee.

use crate::sorting::SortingStrategy;
use crate::types::UnspentOutput;

/// Strategy that draws the smallest coins first
pub struct AscentDrawSorting;

impl SortingStrategy for AscentDrawSorting {
    fn name(&self) -> &'static str {
        "AscentDraw"
    }

    fn sort(&self, coins: &[UnspentOutput]) -> Vec<UnspentOutput> {
        let mut sorted = coins.to_vec();
        sorted.sort_unstable_by(|a, b| a.magnitude.cmp(&b.magnitude));
        sorted
    }
}
