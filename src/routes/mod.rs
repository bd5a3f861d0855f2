mod lookup;
mod namespace;

pub use lookup::{
    CheminTree, FirstExactMatch, FirstMatch, NestedMatches, match_all, match_all_nested,
    match_first, match_first_exact, partial_match,
};
pub use namespace::{namespace, namespace_with, prefix};
