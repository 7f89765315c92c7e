pub mod float_cmp;
mod scalar;

pub use float_cmp::{absolute_within, close_enough, relative_within, Tolerance};
pub use scalar::{ApproxScalar, Promote, Scalar};
