use hashbrown::HashMap as FastHashMap;
use std::hash::Hash;

use crate::chemin::{Chemin, CheminMatch};
use crate::param::Params;
use crate::path::Pathname;

/// Nested record of Chemins, e.g. routes grouped by section.
#[derive(Debug, Clone)]
pub enum CheminTree {
    Leaf(Chemin),
    Branch(FastHashMap<String, CheminTree>),
}

/// Shape-preserving result of [`match_all_nested`].
#[derive(Debug, Clone, PartialEq)]
pub enum NestedMatches {
    Leaf(Option<CheminMatch>),
    Branch(FastHashMap<String, NestedMatches>),
}

impl NestedMatches {
    pub fn get(&self, key: &str) -> Option<&NestedMatches> {
        match self {
            NestedMatches::Branch(children) => children.get(key),
            NestedMatches::Leaf(_) => None,
        }
    }

    pub fn as_match(&self) -> Option<&CheminMatch> {
        match self {
            NestedMatches::Leaf(found) => found.as_ref(),
            NestedMatches::Branch(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FirstMatch {
    pub chemin: Chemin,
    pub matched: CheminMatch,
}

#[derive(Debug, Clone)]
pub struct FirstExactMatch {
    pub chemin: Chemin,
    pub params: Params,
}

/// Matches `path` against every Chemin of the map. The path is split once.
pub fn match_all<'p, K>(
    chemins: &FastHashMap<K, Chemin>,
    path: impl Into<Pathname<'p>>,
) -> FastHashMap<K, Option<CheminMatch>>
where
    K: Clone + Eq + Hash,
{
    let segments = path.into().segments();
    chemins
        .iter()
        .map(|(key, chemin)| (key.clone(), chemin.match_segments(&segments)))
        .collect()
}

/// Same as [`match_all`] over a nested record.
pub fn match_all_nested<'p>(
    chemins: &FastHashMap<String, CheminTree>,
    path: impl Into<Pathname<'p>>,
) -> FastHashMap<String, NestedMatches> {
    let segments = path.into().segments();
    match_branch(chemins, &segments)
}

fn match_branch(
    chemins: &FastHashMap<String, CheminTree>,
    segments: &[&str],
) -> FastHashMap<String, NestedMatches> {
    chemins
        .iter()
        .map(|(key, tree)| {
            let result = match tree {
                CheminTree::Leaf(chemin) => NestedMatches::Leaf(chemin.match_segments(segments)),
                CheminTree::Branch(children) => {
                    NestedMatches::Branch(match_branch(children, segments))
                }
            };
            (key.clone(), result)
        })
        .collect()
}

/// First Chemin of the list that matches, in list order.
#[tracing::instrument(level = "trace", skip(chemins, path), fields(candidates = chemins.len() as u64))]
pub fn match_first<'p>(chemins: &[Chemin], path: impl Into<Pathname<'p>>) -> Option<FirstMatch> {
    let segments = path.into().segments();
    chemins.iter().find_map(|chemin| {
        chemin.match_segments(&segments).map(|matched| FirstMatch {
            chemin: chemin.clone(),
            matched,
        })
    })
}

/// First Chemin of the list that matches every segment, in list order.
pub fn match_first_exact<'p>(
    chemins: &[Chemin],
    path: impl Into<Pathname<'p>>,
) -> Option<FirstExactMatch> {
    let segments = path.into().segments();
    chemins.iter().find_map(|chemin| {
        chemin
            .match_segments(&segments)
            .filter(|matched| matched.exact)
            .map(|matched| FirstExactMatch {
                chemin: chemin.clone(),
                params: matched.params,
            })
    })
}

/// Returns the params of `matched` when `part` is embedded in `chemin`.
///
/// Nothing is matched again: this only checks that the params of `part`
/// are guaranteed to be present.
pub fn partial_match<'m>(
    chemin: &Chemin,
    matched: Option<&'m CheminMatch>,
    part: &Chemin,
) -> Option<&'m Params> {
    let matched = matched?;
    chemin.contains(part).then_some(&matched.params)
}
