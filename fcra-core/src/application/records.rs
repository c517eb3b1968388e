// fcra-core/src/application/records.rs

use chrono::{Local, NaiveDate};
use tracing::{info, instrument};

use crate::domain::record::{FieldUpdate, RecordField};
use crate::error::FcraError;
use crate::ports::RecordStore;

/// Writes one field of one record, stamping today's date when the field is
/// `action_notes`.
///
/// `field_name` must be a stored column name other than `id`. An unknown id
/// is not an error: it returns 0.
pub async fn update_record(
    store: &dyn RecordStore,
    id: i64,
    field_name: &str,
    value: &str,
) -> Result<usize, FcraError> {
    update_record_at(store, id, field_name, value, Local::now().date_naive()).await
}

/// [`update_record`] with an explicit calendar date for the stamp.
#[instrument(skip(store, value))]
pub async fn update_record_at(
    store: &dyn RecordStore,
    id: i64,
    field_name: &str,
    value: &str,
    today: NaiveDate,
) -> Result<usize, FcraError> {
    let field: RecordField = field_name.parse()?;
    let update = FieldUpdate::new(field, value, today)?;

    let affected = store.update_field(id, &update).await?;
    if affected == 0 {
        info!(id, field = %field, "No record with this id, nothing updated");
    } else {
        info!(id, field = %field, stamped = update.action_date.is_some(), "Record updated");
    }
    Ok(affected)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::application::testing::MemoryStore;
    use crate::domain::error::DomainError;
    use crate::domain::record::model::fixtures::record;
    use anyhow::Result;

    fn store() -> MemoryStore {
        let mut rec = record(1, "TDAF", "Incomplete", "Internal");
        rec.action_date = "2025/01/02".to_string();
        MemoryStore::with_records(vec![rec])
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    #[tokio::test]
    async fn test_action_notes_stamps_action_date() -> Result<()> {
        let store = store();
        let affected = update_record_at(&store, 1, "action_notes", "Called LOB", day()).await?;
        assert_eq!(affected, 1);

        let rec = store.find_by_id(1).await?.unwrap();
        assert_eq!(rec.action_notes, "Called LOB");
        assert_eq!(rec.action_date, "2025/03/07");
        Ok(())
    }

    #[tokio::test]
    async fn test_other_fields_leave_action_date_alone() -> Result<()> {
        let store = store();
        update_record_at(&store, 1, "remediation_status", "Resolved", day()).await?;

        let rec = store.find_by_id(1).await?.unwrap();
        assert_eq!(rec.remediation_status, "Resolved");
        assert_eq!(rec.action_date, "2025/01/02");
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_id_is_a_silent_no_op() -> Result<()> {
        let store = store();
        assert_eq!(update_record(&store, 99, "assigned_to", "Rob").await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_rejects_fields_outside_allowlist() -> Result<()> {
        let store = store();
        let err = update_record(&store, 1, "id", "5").await.unwrap_err();
        assert!(matches!(err, FcraError::Domain(DomainError::UnknownField(_))));
        assert!(err.is_client_error());

        let err = update_record(&store, 1, "aging", "ninety").await.unwrap_err();
        assert!(matches!(
            err,
            FcraError::Domain(DomainError::InvalidFieldValue { .. })
        ));

        let untouched = store.find_by_id(1).await?.unwrap();
        assert_eq!(untouched.id, 1);
        assert_eq!(untouched.aging, 0);
        Ok(())
    }
}
