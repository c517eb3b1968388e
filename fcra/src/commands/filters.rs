// fcra/src/commands/filters.rs

use super::{AppContext, render};

pub async fn execute(ctx: &AppContext, name: &str, json: bool) -> anyhow::Result<()> {
    let options = ctx.service.filter_options(name).await?;
    if json {
        println!("{}", render::json(&options)?);
        return Ok(());
    }

    println!("Remediation statuses: {}", options.remediation_statuses.join(", "));
    println!(
        "Remediation categories: {}",
        options.remediation_categories.join(", ")
    );
    Ok(())
}
