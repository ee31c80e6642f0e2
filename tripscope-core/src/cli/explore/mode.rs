use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Most frequent value in `values`, with its count.
///
/// Ties resolve to the value encountered first. None on empty input.
pub(crate) fn mode_with_count<T, I>(values: I) -> Option<(T, usize)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    // value -> (count, index of first occurrence)
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();

    for (idx, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, idx));
        entry.0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, (count, _))| (value, count))
}

/// Count occurrences per distinct value, keeping first-encounter order.
pub(crate) fn counts_in_order<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();

    for value in values {
        match counts.entry(value.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(1);
                order.push(value);
            }
            Entry::Occupied(mut slot) => *slot.get_mut() += 1,
        }
    }

    order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect()
}
