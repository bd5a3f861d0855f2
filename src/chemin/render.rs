use super::{Chemin, Part, SlashOptions};
use crate::param::{Params, SerializeResult};

impl Chemin {
    /// Builds a path from `params` using this Chemin's default slash options.
    pub fn serialize(&self, params: &Params) -> SerializeResult<String> {
        self.serialize_with(params, self.options())
    }

    pub fn serialize_with(&self, params: &Params, options: SlashOptions) -> SerializeResult<String> {
        let mut segments = Vec::with_capacity(self.parts().len());
        collect_serialized(self, params, &mut segments)?;
        Ok(apply_slashes(&segments.join("/"), options))
    }

    /// Canonical description of the pattern, e.g. `/post/:postId(number)/edit`.
    pub fn stringify(&self) -> String {
        self.stringify_with(self.options())
    }

    pub fn stringify_with(&self, options: SlashOptions) -> String {
        let mut segments = Vec::with_capacity(self.parts().len());
        collect_stringified(self, &mut segments);
        apply_slashes(&segments.join("/"), options)
    }
}

// Nested Chemins share the parent's params map.
fn collect_serialized(chemin: &Chemin, params: &Params, out: &mut Vec<String>) -> SerializeResult<()> {
    for part in chemin.parts() {
        match part {
            Part::Chemin(nested) => collect_serialized(nested, params, out)?,
            Part::Param(param) => {
                if let Some(seg) = param.serialize(params.get(param.name()))?
                    && !seg.is_empty()
                {
                    out.push(seg);
                }
            }
        }
    }
    Ok(())
}

fn collect_stringified(chemin: &Chemin, out: &mut Vec<String>) {
    for part in chemin.parts() {
        match part {
            Part::Chemin(nested) => collect_stringified(nested, out),
            Part::Param(param) => {
                let seg = param.stringify();
                if !seg.is_empty() {
                    out.push(seg);
                }
            }
        }
    }
}

fn apply_slashes(joined: &str, options: SlashOptions) -> String {
    if joined.is_empty() && (options.leading_slash || options.trailing_slash) {
        return "/".to_string();
    }
    let mut out = String::with_capacity(joined.len() + 2);
    if options.leading_slash {
        out.push('/');
    }
    out.push_str(joined);
    if options.trailing_slash {
        out.push('/');
    }
    out
}
