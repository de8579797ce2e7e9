//! Parallel lowering of independent compilation units.
//!
//! Trees share no state, so each one is lowered by its own pass on the
//! rayon thread pool.

use crate::ast::SyntaxTree;
use crate::config::LowerConfig;
use crate::error::LowerResult;
use crate::passes::{lower_tree, LowerStats};
use rayon::prelude::*;

/// Lower every tree in `trees` concurrently.
///
/// Results are returned in the same order as the input. A malformed tree
/// only fails its own entry.
pub fn lower_batch(trees: &mut [SyntaxTree], config: &LowerConfig) -> Vec<LowerResult<LowerStats>> {
    trees
        .par_iter_mut()
        .map(|tree| lower_tree(tree, config))
        .collect()
}
