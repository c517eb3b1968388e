// fcra/src/commands/trend.rs
//
// USE CASE: Monthly series per portfolio for one metric.

use fcra_core::domain::record::Portfolio;
use fcra_core::domain::reporting::{TrendMetric, TrendSeries};
use fcra_core::domain::table::{Cell, Table};

use super::{AppContext, render};

pub async fn execute(ctx: &AppContext, metric: &str, json: bool) -> anyhow::Result<()> {
    let metric: TrendMetric = metric.parse()?;
    let series = ctx.service.trend(metric).await?;

    if json {
        println!("{}", render::json(&series)?);
    } else {
        println!("📈 Trend: {}", metric);
        println!("{}", render::table(&trend_sheet(&series)));
    }
    Ok(())
}

/// One row per month, one column per portfolio.
pub fn trend_sheet(series: &TrendSeries) -> Table {
    let mut table = Table::new(
        std::iter::once("month").chain(Portfolio::ALL.iter().map(|p| p.display_name())),
    );
    for (i, month) in series.labels.iter().enumerate() {
        let mut row = vec![Cell::from(month.as_str())];
        for portfolio in Portfolio::ALL {
            let count = series.series.get(portfolio).get(i).copied().unwrap_or(0);
            row.push(Cell::from(count));
        }
        table.push_row(row);
    }
    table
}
