// fcra/src/commands/serve.rs

use anyhow::Context;

use crate::server::{self, AppState};

use super::AppContext;

pub async fn execute(ctx: AppContext, bind: Option<String>) -> anyhow::Result<()> {
    let bind = bind.unwrap_or(ctx.config.bind);
    println!("🌐 Serving on http://{}", bind);

    server::serve(AppState::new(ctx.service), &bind)
        .await
        .with_context(|| format!("Server on {} failed", bind))
}
