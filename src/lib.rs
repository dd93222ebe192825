pub mod search;

pub use search::{
    InterpolationKey, WindowError, binary_search, binary_search_between, exponential_search,
    interpolation_search,
};
