use crate::storage::{KvStore, RECORDS_PREFIX};
use chrono::{Local, NaiveDate};

/// Storage key for one day's completed tasks. Dates are local calendar
/// dates, so the key follows the user's day boundary rather than UTC.
pub fn key_for(date: NaiveDate) -> String {
    format!("{RECORDS_PREFIX}{}", date.format("%Y-%m-%d"))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn load(store: &KvStore, date: NaiveDate) -> Vec<String> {
    store.get(&key_for(date), Vec::new())
}

pub fn append(store: &mut KvStore, date: NaiveDate, text: &str) -> Vec<String> {
    let mut records = load(store, date);
    records.push(text.to_string());
    store.set(&key_for(date), &records);
    records
}

/// Drops the first record matching `text` and re-stores the remainder.
/// Removing a text that is not present leaves the list unchanged.
pub fn remove(store: &mut KvStore, date: NaiveDate, text: &str) -> Vec<String> {
    let mut records = load(store, date);
    if let Some(index) = records.iter().position(|record| record == text) {
        records.remove(index);
        store.set(&key_for(date), &records);
    }
    records
}

/// Total completed count across every stored date. Always a full rescan of
/// the record keys, never an incrementally maintained counter, so the total
/// stays correct after any edit to the underlying entries.
pub fn count_all(store: &KvStore) -> usize {
    store
        .keys_with_prefix(RECORDS_PREFIX)
        .map(|key| store.get::<Vec<String>>(key, Vec::new()).len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn key_uses_iso_local_date() {
        assert_eq!(key_for(date(2024, 3, 5)), "todo-items-records-2024-03-05");
    }

    #[test]
    fn append_grows_only_that_date() {
        let mut store = KvStore::default();
        append(&mut store, date(2026, 8, 6), "write journal");
        append(&mut store, date(2026, 8, 6), "stretch");
        append(&mut store, date(2026, 8, 7), "read");

        assert_eq!(
            load(&store, date(2026, 8, 6)),
            vec!["write journal".to_string(), "stretch".to_string()]
        );
        assert_eq!(load(&store, date(2026, 8, 7)), vec!["read".to_string()]);
        assert!(load(&store, date(2026, 8, 8)).is_empty());
    }

    #[test]
    fn remove_drops_first_match_only() {
        let mut store = KvStore::default();
        let day = date(2026, 8, 6);
        append(&mut store, day, "stretch");
        append(&mut store, day, "read");
        append(&mut store, day, "stretch");

        let remaining = remove(&mut store, day, "stretch");
        assert_eq!(remaining, vec!["read".to_string(), "stretch".to_string()]);

        // Unknown text is a no-op.
        let remaining = remove(&mut store, day, "absent");
        assert_eq!(remaining.len(), 2);
    }

    #[test]
    fn count_all_sums_every_date_and_is_idempotent() {
        let mut store = KvStore::default();
        append(&mut store, date(2026, 8, 1), "a");
        append(&mut store, date(2026, 8, 2), "b");
        append(&mut store, date(2026, 8, 2), "c");
        store.set("todo-items-chores", &vec!["pending".to_string()]);

        assert_eq!(count_all(&store), 3);
        assert_eq!(count_all(&store), 3);

        remove(&mut store, date(2026, 8, 2), "b");
        assert_eq!(count_all(&store), 2);
    }
}
