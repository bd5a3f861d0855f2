use hashbrown::HashMap as FastHashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::chemin::{Chemin, CheminFactory, Part};

/// Prepends `base` to every Chemin of the map.
pub fn namespace<K>(base: impl Into<Part>, chemins: &FastHashMap<K, Chemin>) -> FastHashMap<K, Chemin>
where
    K: Clone + Eq + Hash,
{
    namespace_with(&CheminFactory::default(), base, chemins)
}

/// Like [`namespace`], creating the new Chemins through `factory`.
pub fn namespace_with<K>(
    factory: &CheminFactory,
    base: impl Into<Part>,
    chemins: &FastHashMap<K, Chemin>,
) -> FastHashMap<K, Chemin>
where
    K: Clone + Eq + Hash,
{
    let base = base.into();
    chemins
        .iter()
        .map(|(key, chemin)| {
            let parts = vec![base.clone(), Part::from(chemin)];
            (key.clone(), factory.create(parts))
        })
        .collect()
}

/// Renames every key to `"{prefix}.{key}"`.
pub fn prefix<K, V, I>(prefix: &str, children: I) -> FastHashMap<String, V>
where
    K: Display,
    I: IntoIterator<Item = (K, V)>,
{
    children
        .into_iter()
        .map(|(key, value)| (format!("{prefix}.{key}"), value))
        .collect()
}
