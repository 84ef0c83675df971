use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

/// Returns sorted duplicates.
pub fn get_duplicates<T>(items: impl Iterator<Item = T>) -> Option<Vec<T>>
where
    T: Clone + Eq + Hash + Ord,
{
    let mut ids = HashSet::<T>::default();
    let duplicates =
        items.filter_map(move |id| if ids.insert(id.clone()) { None } else { Some(id) }).collect::<HashSet<_>>();

    if duplicates.is_empty() {
        None
    } else {
        let mut duplicates = duplicates.into_iter().collect::<Vec<_>>();
        duplicates.sort();
        Some(duplicates)
    }
}

/// Joins items into comma separated list.
pub fn join<T: Display>(items: &[T]) -> String {
    items.iter().map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}
