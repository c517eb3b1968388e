// fcra-core/src/application/seed.rs

use tracing::{info, instrument};

use crate::domain::record::NewRecord;
use crate::error::FcraError;
use crate::ports::RecordStore;

#[allow(clippy::too_many_arguments)]
fn demo(
    acct_number: i64,
    portfolio: &str,
    rule: (&str, &str),
    severity: &str,
    dqs_status: &str,
    date_of_info: &str,
    aging: i64,
    process_date: &str,
    status: &str,
    owner: &str,
    notes: &str,
    category: &str,
) -> NewRecord {
    // Worked records carry the owner as actor and the process date as action date.
    let action_date = if owner.is_empty() { "" } else { process_date };
    NewRecord {
        acct_number,
        portfolio: portfolio.to_string(),
        rule_id: rule.0.to_string(),
        rule_category: rule.1.to_string(),
        severity: severity.to_string(),
        dqs_status: dqs_status.to_string(),
        date_of_info: date_of_info.to_string(),
        aging,
        process_date: process_date.to_string(),
        remediation_status: status.to_string(),
        action_taken_by: owner.to_string(),
        action_notes: notes.to_string(),
        action_date: action_date.to_string(),
        assigned_to: owner.to_string(),
        remediation_category: category.to_string(),
    }
}

/// Sample rows spread over five months of `date_of_info` and several
/// process dates, so the trend and as-of views have something to show.
pub fn demo_records() -> Vec<NewRecord> {
    vec![
        demo(300001, "Credit Cards", ("119x", "CCcardRule"), "Medium", "New", "2025/5/31", 120,
            "2025/10/15", "Incomplete", "Rob", "Need more", "LOB engagement"),
        demo(300002, "TDAF", ("118x", "TDAF rule"), "High", "Existing", "2025/6/30", 90,
            "2025/10/10", "Resolved", "Anoop", "Fixed", "Internal"),
        demo(300003, "Consumers", ("120x", "ConsumerRule"), "Low", "New", "2025/7/31", 60,
            "2025/10/05", "Unsolved", "Juanita", "Pending", "Technology"),
        demo(300004, "Credit Cards", ("119y", "CCcardRule"), "High", "New", "2025/8/31", 30,
            "2025/09/15", "Nonexceptions", "", "", ""),
        demo(300005, "TDAF", ("118y", "TDAF rule"), "Medium", "New", "2025/9/30", 10,
            "2025/10/18", "Incomplete", "Rob", "Need LOB", "LOB engagement"),
    ]
}

/// Appends [`demo_records`] to whatever the store already holds.
#[instrument(skip(store), fields(engine = store.engine_name()))]
pub async fn seed_demo_records(store: &dyn RecordStore) -> Result<usize, FcraError> {
    let inserted = store.append(demo_records()).await?;
    info!(inserted, "Demo records added");
    Ok(inserted)
}
