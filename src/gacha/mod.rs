//! Draw simulation core: seed sequencing and draw resolution.
//!
//! Both halves are pure functions of their inputs. No wall-clock time,
//! no I/O, no hidden state; running two simulations concurrently is safe
//! because nothing here is shared or mutable.

pub mod resolve;
pub mod sequence;
pub mod types;

pub use resolve::*;
pub use sequence::*;
pub use types::*;
