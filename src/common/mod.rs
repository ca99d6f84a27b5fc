//! Numeric helpers shared by the varint codec and the cursor types.
pub mod bits;
pub mod zigzag;

pub use bits::*;
pub use zigzag::*;
