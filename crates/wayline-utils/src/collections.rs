//! Collection helpers.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Keeps the first item for each key, preserving order.
///
/// ```
/// use wayline_utils::collections::unique_by;
///
/// let deduped = unique_by(vec![1, 2, 2, 3, 3, 3], |x| *x);
/// assert_eq!(deduped, vec![1, 2, 3]);
/// ```
pub fn unique_by<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
	K: Eq + Hash,
	F: FnMut(&T) -> K,
{
	let mut seen = HashSet::new();
	items
		.into_iter()
		.filter(|item| seen.insert(key(item)))
		.collect()
}

/// Groups items by key. Order within a group follows input order.
pub fn group_by<T, K, F>(items: Vec<T>, mut key: F) -> HashMap<K, Vec<T>>
where
	K: Eq + Hash,
	F: FnMut(&T) -> K,
{
	let mut groups: HashMap<K, Vec<T>> = HashMap::new();
	for item in items {
		groups.entry(key(&item)).or_default().push(item);
	}
	groups
}

/// Splits a slice into chunks of at most `size` items. An empty input
/// or a zero size yields no chunks.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
	if size == 0 {
		return Vec::new();
	}
	items.chunks(size).map(<[T]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, Clone, PartialEq)]
	struct User {
		id: u32,
		name: &'static str,
	}

	#[test]
	fn test_unique_by_keeps_first_occurrence() {
		let users = vec![
			User { id: 1, name: "John" },
			User { id: 2, name: "Jane" },
			User {
				id: 1,
				name: "John Doe",
			},
		];
		let deduped = unique_by(users, |u| u.id);
		assert_eq!(deduped.len(), 2);
		assert_eq!(deduped[0].name, "John");
	}

	#[test]
	fn test_group_by_category() {
		let items = vec![("apple", "fruit"), ("carrot", "vegetable"), ("banana", "fruit")];
		let groups = group_by(items, |(_, category)| *category);
		assert_eq!(groups["fruit"].len(), 2);
		assert_eq!(groups["vegetable"], vec![("carrot", "vegetable")]);
	}

	#[test]
	fn test_chunk_splits_with_remainder() {
		assert_eq!(
			chunk(&[1, 2, 3, 4, 5], 2),
			vec![vec![1, 2], vec![3, 4], vec![5]]
		);
	}

	#[test]
	fn test_chunk_zero_size_is_empty() {
		assert!(chunk(&[1, 2, 3], 0).is_empty());
	}
}
