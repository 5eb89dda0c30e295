use crate::record::Record;

/// Filter records whose `name` contains `query` as a case-insensitive
/// substring, preserving the input order.
///
/// An empty query returns the full set; no match returns an empty sequence
/// (rendering the empty state is the consumer's concern). Linear scan —
/// the roster is small enough that no index is warranted.
pub fn filter_by_name<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    let q = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&q))
        .collect()
}
