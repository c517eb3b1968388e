// fcra-core/src/domain/reporting/workload.rs

use crate::domain::record::Record;

/// Open tasks (Incomplete or Unsolved) assigned to `assignee`. The assignee
/// is matched exactly.
pub fn open_task_count(records: &[Record], assignee: &str) -> u64 {
    records
        .iter()
        .filter(|r| r.assigned_to == assignee)
        .filter(|r| r.status().is_some_and(|s| s.is_open()))
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::model::fixtures::record;

    fn assigned(id: i64, status: &str, assignee: &str) -> Record {
        let mut rec = record(id, "Credit Cards", status, "");
        rec.assigned_to = assignee.to_string();
        rec
    }

    #[test]
    fn test_counts_incomplete_and_unsolved_only() {
        let records = vec![
            assigned(1, "Incomplete", "Rob"),
            assigned(2, "Unsolved", "Rob"),
            assigned(3, "Resolved", "Rob"),
            assigned(4, "Incomplete", "Anoop"),
            assigned(5, "Incomplete", "rob"),
        ];
        assert_eq!(open_task_count(&records, "Rob"), 2);
        assert_eq!(open_task_count(&records, "Anoop"), 1);
        assert_eq!(open_task_count(&records, "Juanita"), 0);
    }
}
