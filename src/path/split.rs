use memchr::memchr_iter;
use smallvec::SmallVec;

pub type Segments<'a> = SmallVec<[&'a str; 8]>;

/// Splits a pathname on `/`.
///
/// One leading and one trailing empty segment are dropped, so `"/a/b/"`,
/// `"a/b"` and `"/a/b"` all yield `["a", "b"]`. Empty segments produced by
/// `//` inside the path are kept.
#[tracing::instrument(level = "trace", fields(path_len = path.len() as u64))]
pub fn split_pathname(path: &str) -> Segments<'_> {
    let mut out: Segments<'_> = SmallVec::new();
    let mut start = 0usize;

    for idx in memchr_iter(b'/', path.as_bytes()) {
        out.push(&path[start..idx]);
        start = idx + 1;
    }
    out.push(&path[start..]);

    if out.first().is_some_and(|seg| seg.is_empty()) {
        out.remove(0);
    }
    if out.last().is_some_and(|seg| seg.is_empty()) {
        out.pop();
    }

    out
}

/// A path given either as a raw string or as already split segments.
#[derive(Debug, Clone)]
pub enum Pathname<'a> {
    Raw(&'a str),
    Segments(Segments<'a>),
}

impl<'a> Pathname<'a> {
    pub fn segments(&self) -> Segments<'a> {
        match self {
            Pathname::Raw(raw) => split_pathname(raw),
            Pathname::Segments(segments) => segments.clone(),
        }
    }
}

impl<'a> From<&'a str> for Pathname<'a> {
    fn from(value: &'a str) -> Self {
        Pathname::Raw(value)
    }
}

impl<'a> From<&'a String> for Pathname<'a> {
    fn from(value: &'a String) -> Self {
        Pathname::Raw(value.as_str())
    }
}

impl<'a> From<&'a [&'a str]> for Pathname<'a> {
    fn from(value: &'a [&'a str]) -> Self {
        Pathname::Segments(value.iter().copied().collect())
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Pathname<'a> {
    fn from(value: &'a [&'a str; N]) -> Self {
        Pathname::Segments(value.iter().copied().collect())
    }
}

impl<'a> From<&'a [String]> for Pathname<'a> {
    fn from(value: &'a [String]) -> Self {
        Pathname::Segments(value.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for Pathname<'a> {
    fn from(value: &'a Vec<String>) -> Self {
        Pathname::from(value.as_slice())
    }
}

impl<'a> From<Segments<'a>> for Pathname<'a> {
    fn from(value: Segments<'a>) -> Self {
        Pathname::Segments(value)
    }
}
