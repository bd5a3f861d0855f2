use serde::Serialize;

use super::{Chemin, Part};
use crate::param::{Params, checked_match};
use crate::path::Pathname;

/// Result of matching a Chemin against a path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheminMatch {
    pub params: Params,
    /// Segments left after the last part matched.
    pub rest: Vec<String>,
    /// `true` when `rest` is empty.
    pub exact: bool,
}

struct PartsMatch<'a> {
    params: Params,
    rest: &'a [&'a str],
}

impl Chemin {
    /// Matches the start of `path`. Unconsumed segments are left in `rest`.
    #[tracing::instrument(level = "trace", skip(self, path), fields(parts = self.parts().len() as u64))]
    pub fn match_path<'p>(&self, path: impl Into<Pathname<'p>>) -> Option<CheminMatch> {
        let segments = path.into().segments();
        self.match_segments(&segments)
    }

    pub fn match_segments(&self, segments: &[&str]) -> Option<CheminMatch> {
        let found = match_parts(self.parts(), segments)?;
        Some(CheminMatch {
            params: found.params,
            rest: found.rest.iter().map(|seg| seg.to_string()).collect(),
            exact: found.rest.is_empty(),
        })
    }

    /// Params of a match that consumed every segment.
    pub fn match_exact<'p>(&self, path: impl Into<Pathname<'p>>) -> Option<Params> {
        self.match_path(path)
            .filter(|found| found.exact)
            .map(|found| found.params)
    }
}

fn match_parts<'a>(parts: &[Part], segments: &'a [&'a str]) -> Option<PartsMatch<'a>> {
    let Some((head, tail)) = parts.split_first() else {
        return Some(PartsMatch {
            params: Params::new(),
            rest: segments,
        });
    };

    let head_match = match_part(head, segments)?;
    let tail_match = match_parts(tail, head_match.rest)?;

    // later parts win on name collisions
    let mut params = head_match.params;
    params.extend(tail_match.params);

    Some(PartsMatch {
        params,
        rest: tail_match.rest,
    })
}

fn match_part<'a>(part: &Part, segments: &'a [&'a str]) -> Option<PartsMatch<'a>> {
    match part {
        Part::Chemin(chemin) => match_parts(chemin.parts(), segments),
        Part::Param(param) => {
            let found = checked_match(param.as_ref(), segments)?;
            let mut params = Params::new();
            if param.produces_value() {
                params.insert(param.name().to_string(), found.value);
            }
            Some(PartsMatch {
                params,
                rest: &segments[found.consumed..],
            })
        }
    }
}
