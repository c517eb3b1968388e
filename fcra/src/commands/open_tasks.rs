// fcra/src/commands/open_tasks.rs

use super::AppContext;

pub async fn execute(ctx: &AppContext, assignee: &str) -> anyhow::Result<()> {
    let count = ctx.service.open_task_count(assignee).await?;
    println!("{}", count);
    Ok(())
}
