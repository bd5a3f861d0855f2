mod split;

pub use split::{Pathname, Segments, split_pathname};
