#[path = "bpm/app/mod.rs"]
mod app;
#[path = "bpm/args.rs"]
mod args;
#[path = "bpm/config/mod.rs"]
mod config;
#[path = "bpm/logging.rs"]
mod logging;
#[path = "bpm/runtime/mod.rs"]
mod runtime;
#[path = "bpm/ui/mod.rs"]
mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
