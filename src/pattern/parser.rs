use crate::chemin::{Chemin, CheminFactory, Part};
use crate::param::{constant, optional, optional_const, string};
use crate::path::split_pathname;

use super::{PatternError, PatternResult};

/// Builds the parts described by a shorthand pattern such as
/// `/admin/:id/delete?`.
///
/// | segment  | part                           |
/// |----------|--------------------------------|
/// | `name`   | `constant("name")`             |
/// | `name?`  | `optional_const("name")`       |
/// | `:name`  | `string("name")`               |
/// | `:name?` | `optional(string("name"))`     |
#[tracing::instrument(level = "trace", skip(pattern), fields(pattern = %pattern))]
pub fn parse_parts(pattern: &str) -> PatternResult<Vec<Part>> {
    split_pathname(pattern)
        .iter()
        .map(|segment| parse_segment(pattern, segment))
        .collect()
}

fn parse_segment(pattern: &str, segment: &str) -> PatternResult<Part> {
    let is_param = segment.starts_with(':');
    let is_optional = segment.ends_with('?');

    let start = usize::from(is_param);
    let end = if is_optional {
        segment.len() - 1
    } else {
        segment.len()
    };
    let name = if start <= end { &segment[start..end] } else { "" };

    if is_param && name.is_empty() {
        return Err(PatternError::ParameterMissingName {
            pattern: pattern.to_string(),
            segment: segment.to_string(),
        });
    }

    let part = match (is_param, is_optional) {
        (true, true) => Part::from(optional(string(name))),
        (true, false) => Part::from(string(name)),
        (false, true) => {
            if name.is_empty() {
                return Err(PatternError::OptionalMissingLiteral {
                    pattern: pattern.to_string(),
                    segment: segment.to_string(),
                });
            }
            Part::from(optional_const(name))
        }
        (false, false) => Part::from(constant(name)),
    };
    Ok(part)
}

impl Chemin {
    /// Parses a shorthand pattern, see [`parse_parts`].
    pub fn parse(pattern: &str) -> PatternResult<Chemin> {
        Ok(Chemin::new(parse_parts(pattern)?))
    }
}

impl CheminFactory {
    pub fn parse(&self, pattern: &str) -> PatternResult<Chemin> {
        Ok(self.create(parse_parts(pattern)?))
    }
}
