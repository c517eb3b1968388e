// fcra/src/commands/as_of.rs

use super::AppContext;

pub async fn execute(ctx: &AppContext) -> anyhow::Result<()> {
    let as_of = ctx.service.as_of_date().await?;
    if as_of.is_empty() {
        eprintln!("No parseable process date in the store.");
    } else {
        println!("{}", as_of);
    }
    Ok(())
}
