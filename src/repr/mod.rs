/*!
# Graph Representations

Currently there is exactly one storage backend, the dense [`WeightMatrix`]: an `n x n` matrix
of optional edge weights. All algorithms are written against the traits in [`crate::ops`],
so further representations only need to implement those.
*/

use crate::{ops::*, *};

mod matrix;

pub use matrix::*;
