// fcra-core/src/application/export.rs

use std::fmt;
use std::str::FromStr;
use tracing::{info, instrument};

use crate::application::ReportingService;
use crate::application::ports::SpreadsheetWriter;
use crate::domain::error::DomainError;
use crate::domain::record::Portfolio;
use crate::domain::table::{Table, records_sheet, summary_table_sheet};
use crate::error::FcraError;

const SUMMARY_TARGET: &str = "summary";

/// What an export covers: the summary table or one portfolio's records.
///
/// A portfolio target keeps the label it was requested under, so
/// `Consumers` and `Consumer` name their downloads differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    Summary,
    Portfolio {
        portfolio: Portfolio,
        label: &'static str,
    },
}

impl ExportTarget {
    /// Target for `portfolio` under its display name.
    pub fn portfolio(portfolio: Portfolio) -> Self {
        Self::Portfolio {
            portfolio,
            label: portfolio.display_name(),
        }
    }

    /// Used in the download name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Summary => SUMMARY_TARGET,
            Self::Portfolio { label, .. } => *label,
        }
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExportTarget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == SUMMARY_TARGET {
            return Ok(Self::Summary);
        }
        let portfolio = Portfolio::from_label(s)
            .ok_or_else(|| DomainError::UnknownExportTarget(s.to_string()))?;
        let label = if s == portfolio.storage_name() {
            portfolio.storage_name()
        } else {
            portfolio.display_name()
        };
        Ok(Self::Portfolio { portfolio, label })
    }
}

/// A rendered document ready to be saved or sent.
#[derive(Debug, Clone)]
pub struct ExportDocument {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Builds the sheet for `target` from the current store contents.
pub async fn export_table(service: &ReportingService, target: ExportTarget) -> Result<Table, FcraError> {
    match target {
        ExportTarget::Summary => Ok(summary_table_sheet(&service.summary_table().await?)),
        ExportTarget::Portfolio { portfolio, .. } => {
            let records = service
                .portfolio_records(portfolio.storage_name(), None, None)
                .await?;
            Ok(records_sheet(&records))
        }
    }
}

#[instrument(skip(service, writer), fields(target = %target))]
pub async fn export(
    service: &ReportingService,
    writer: &dyn SpreadsheetWriter,
    target: ExportTarget,
) -> Result<ExportDocument, FcraError> {
    let table = export_table(service, target).await?;
    let bytes = writer.write(&table)?;
    let file_name = format!("{}_export.{}", target.label(), writer.extension());

    info!(file = %file_name, rows = table.rows.len(), "Export rendered");
    Ok(ExportDocument {
        file_name,
        content_type: writer.content_type(),
        bytes,
    })
}
