pub mod analytics;
pub mod model;
pub mod options;

pub use analytics::decode::{StrideIndices, decode, select_words};
pub use analytics::sort::{PairSorter, SortOutcome, split_pair};
pub use model::Pair;
pub use options::InvalidKeyPolicy;
