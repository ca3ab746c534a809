//! Pluggable exact-synthesis oracle.
//!
//! Exact synthesis is performed by an external combinatorial solver; the
//! core only fixes the call contract. An implementation receives the input
//! count, a gate budget and a path to a specification file whose internal
//! format is the implementation's own business, and either produces a
//! fully-formed graph or reports that no solution exists within the budget.

use std::path::Path;

use crate::error::Result;
use crate::xmg::Xmg;

/// An external exact-synthesis engine.
pub trait ExactSynthesis {
    /// Attempts to synthesize an XMG with `num_inputs` inputs and at most
    /// `gate_budget` gates for the specification in `spec_path`.
    ///
    /// Returns `Ok(None)` when no solution exists within the budget.
    fn synthesize(
        &mut self,
        num_inputs: u32,
        gate_budget: u32,
        spec_path: &Path,
    ) -> Result<Option<Xmg>>;
}
