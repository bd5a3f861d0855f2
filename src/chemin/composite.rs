use hashbrown::HashSet;
use std::fmt;
use std::sync::{Arc, OnceLock};

use super::{Part, SlashOptions};
use crate::param::{Param, params_equal};

#[derive(Debug)]
struct CheminInner {
    parts: Vec<Part>,
    options: SlashOptions,
    flattened: OnceLock<Vec<Arc<dyn Param>>>,
    nested: OnceLock<Vec<Chemin>>,
}

/// An immutable, ordered sequence of [`Part`]s.
///
/// Cloning is cheap and keeps reference identity: clones of one Chemin
/// are the same pattern as far as [`Chemin::extract`] and
/// [`Chemin::contains`] are concerned.
#[derive(Clone)]
pub struct Chemin {
    inner: Arc<CheminInner>,
}

impl Chemin {
    pub fn new(parts: Vec<Part>) -> Self {
        Self::with_options(parts, SlashOptions::default())
    }

    /// Creates a Chemin whose `serialize`/`stringify` default to `options`.
    pub fn with_options(parts: Vec<Part>, options: SlashOptions) -> Self {
        Self {
            inner: Arc::new(CheminInner {
                parts,
                options,
                flattened: OnceLock::new(),
                nested: OnceLock::new(),
            }),
        }
    }

    pub fn parts(&self) -> &[Part] {
        &self.inner.parts
    }

    pub fn options(&self) -> SlashOptions {
        self.inner.options
    }

    pub fn is_empty(&self) -> bool {
        self.inner.parts.is_empty()
    }

    /// Reference identity.
    pub fn ptr_eq(&self, other: &Chemin) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Every param reachable from this Chemin, nested Chemins expanded in place.
    pub fn flatten(&self) -> &[Arc<dyn Param>] {
        self.inner.flattened.get_or_init(|| {
            let mut out = Vec::with_capacity(self.inner.parts.len());
            for part in &self.inner.parts {
                match part {
                    Part::Param(param) => out.push(param.clone()),
                    Part::Chemin(chemin) => out.extend(chemin.flatten().iter().cloned()),
                }
            }
            out
        })
    }

    /// This Chemin followed by every distinct nested Chemin, in depth-first
    /// order of first appearance.
    pub fn extract(&self) -> Vec<Chemin> {
        let nested = self.nested();
        let mut out = Vec::with_capacity(nested.len() + 1);
        out.push(self.clone());
        out.extend(nested.iter().cloned());
        out
    }

    /// Whether `other` is this Chemin or is embedded somewhere inside it.
    pub fn contains(&self, other: &Chemin) -> bool {
        self.ptr_eq(other) || self.nested().iter().any(|chemin| chemin.ptr_eq(other))
    }

    /// Structural equality over the flattened params.
    pub fn equal(&self, other: &Chemin) -> bool {
        chemins_equal(self, other)
    }

    fn nested(&self) -> &[Chemin] {
        self.inner.nested.get_or_init(|| {
            let mut seen: HashSet<*const CheminInner> = HashSet::new();
            seen.insert(Arc::as_ptr(&self.inner));
            let mut out = Vec::new();
            collect_nested(&self.inner.parts, &mut seen, &mut out);
            out
        })
    }
}

fn collect_nested(parts: &[Part], seen: &mut HashSet<*const CheminInner>, out: &mut Vec<Chemin>) {
    for part in parts {
        if let Part::Chemin(chemin) = part
            && seen.insert(Arc::as_ptr(&chemin.inner))
        {
            out.push(chemin.clone());
            collect_nested(chemin.parts(), seen, out);
        }
    }
}

/// Two Chemins are equal when their flattened params are pairwise equal,
/// regardless of how they are nested.
pub fn chemins_equal(left: &Chemin, right: &Chemin) -> bool {
    if left.ptr_eq(right) {
        return true;
    }
    let left_flat = left.flatten();
    let right_flat = right.flatten();
    if left_flat.len() != right_flat.len() {
        return false;
    }
    left_flat
        .iter()
        .zip(right_flat.iter())
        .all(|(a, b)| params_equal(a.as_ref(), b.as_ref()))
}

impl PartialEq for Chemin {
    fn eq(&self, other: &Self) -> bool {
        chemins_equal(self, other)
    }
}

impl fmt::Debug for Chemin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chemin")
            .field("parts", &self.inner.parts)
            .finish()
    }
}

impl fmt::Display for Chemin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

impl Default for Chemin {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
