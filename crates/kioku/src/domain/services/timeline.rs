//! Timeline ordering - newest first

use crate::domain::entities::Memory;

/// Stable sort by `date`, descending. Equal dates keep their input order.
pub fn timeline<M: AsRef<Memory>>(mut memories: Vec<M>) -> Vec<M> {
    memories.sort_by(|a, b| b.as_ref().date.cmp(&a.as_ref().date));
    memories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{MemoryDetails, MemoryDraft};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn at(millis: i64, title: &str) -> Memory {
        let mut m = Memory::new(
            Uuid::new_v4(),
            MemoryDraft::new(title, "c", 5, MemoryDetails::Event),
        );
        m.date = Utc.timestamp_millis_opt(millis).unwrap();
        m
    }

    #[test]
    fn test_descending_by_date() {
        let sorted = timeline(vec![at(10, "a"), at(30, "b"), at(20, "c")]);
        let millis: Vec<i64> = sorted.iter().map(|m| m.date.timestamp_millis()).collect();
        assert_eq!(millis, vec![30, 20, 10]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let sorted = timeline(vec![at(10, "first"), at(10, "second"), at(5, "old")]);
        let titles: Vec<&str> = sorted.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "old"]);
    }

    #[test]
    fn test_empty() {
        assert!(timeline::<Memory>(Vec::new()).is_empty());
    }
}
