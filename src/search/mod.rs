//! Search algorithms over sorted, randomly indexable sequences.
//!
//! All functions here share one contract: the input slice must be sorted in
//! non-decreasing order under the element type's ordering. On unsorted input
//! the returned index is unspecified, but the functions never panic, read out
//! of bounds, or loop forever.
//!
//! The algorithms are stateless and only borrow their input, so concurrent
//! calls over the same slice need no synchronization.

mod binary;
mod exponential;
mod interpolation;
mod window;

pub use binary::{binary_search, binary_search_between};
pub use exponential::exponential_search;
pub use interpolation::{InterpolationKey, interpolation_search};
pub use window::WindowError;
