// fcra/src/commands/portfolio.rs
//
// USE CASE: Statistics of one portfolio page.

use fcra_core::domain::record::RemediationCategory;
use fcra_core::domain::reporting::PortfolioStats;

use super::{AppContext, render};

pub async fn execute(ctx: &AppContext, name: &str, json: bool) -> anyhow::Result<()> {
    let stats = ctx.service.portfolio_stats(name).await?;
    if json {
        println!("{}", render::json(&stats)?);
    } else {
        println!("🗂️  {}", name);
        println!("{}", render::key_values(stat_lines(&stats)));
    }
    Ok(())
}

fn stat_lines(stats: &PortfolioStats) -> Vec<(&'static str, String)> {
    let mut lines = vec![
        ("total_instances", stats.total_instances.to_string()),
        ("total_exceptions", stats.total_exceptions.to_string()),
        ("remediation_incomplete", stats.remediation_incomplete.to_string()),
    ];
    for category in RemediationCategory::ALL {
        lines.push((
            category.as_str(),
            stats.category_incomplete.get(category).to_string(),
        ));
    }
    let counts = &stats.status_counts;
    lines.extend([
        ("Resolved", counts.resolved.to_string()),
        ("Incomplete", counts.incomplete.to_string()),
        ("Unsolved", counts.unsolved.to_string()),
        ("Nonexceptions", counts.nonexceptions.to_string()),
    ]);
    lines
}
