// fcra/src/commands/update.rs

use fcra_core::application::update_record;

use super::AppContext;

pub async fn execute(ctx: &AppContext, id: i64, field: &str, value: &str) -> anyhow::Result<()> {
    let affected = update_record(ctx.store(), id, field, value).await?;
    if affected == 0 {
        println!("⚠️  No record with id {}", id);
    } else {
        println!("✅ Record {} updated ({})", id, field);
    }
    Ok(())
}
