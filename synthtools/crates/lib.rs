//! # Synthtools
//!
//! Building blocks for synthesizing small, syntactically valid method bodies to be used as
//! synthetic test or training data:
//!
//! 1) conditions whose truth value is fixed by construction
//! 2) loops and if-blocks that host pending method calls
//! 3) method bodies and method chains assembled from both
//!
//! ## Modules
//!
//! - [`snippets`] - Variables, condition grammar, control-block composer and body assembler.
//! - [`utils`] - Random helpers shared by the generators.

pub mod snippets;
pub mod utils;
