// fcra/src/server/state.rs

use std::sync::Arc;

use fcra_core::application::ReportingService;
use fcra_core::application::ports::SpreadsheetWriter;
use fcra_core::infrastructure::export::XlsxWriter;

/// Shared by every handler. Cloning is cheap: both members are `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub service: ReportingService,
    pub writer: Arc<dyn SpreadsheetWriter>,
}

impl AppState {
    pub fn new(service: ReportingService) -> Self {
        Self {
            service,
            writer: Arc::new(XlsxWriter::new()),
        }
    }
}
