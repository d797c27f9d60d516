use std::sync::Arc;

use bedrock_profiles::{AwsConsole, ConsoleApi, Credentials, Result};

use crate::config::AppConfig;
use crate::runtime::controller::AppController;
use crate::runtime::{init_terminal, restore_terminal, run_app, AppState};

const EVENT_BUFFER: usize = 128;

/// Runs the interactive console.
///
/// A credential failure still opens the console, on a blocking screen that
/// explains the problem; no API call is made in that case.
pub async fn run_tui(
    config: &AppConfig,
    credentials: Result<Credentials>,
    region: String,
) -> anyhow::Result<()> {
    let (api, fatal) = match credentials {
        Ok(credentials) => {
            let console: Arc<dyn ConsoleApi> =
                Arc::new(AwsConsole::new(credentials, region.clone()));
            (Some(console), None)
        }
        Err(err) => {
            log::error!("startup failed: {err}");
            (None, Some(err.to_string()))
        }
    };
    let state = AppState::new(region, config.ui.theme.clone(), fatal);
    let (tx, rx) = tokio::sync::mpsc::channel(EVENT_BUFFER);
    let controller = AppController::new(state, api, tx.clone());

    let mut terminal = init_terminal()?;
    let result = run_app(controller, &mut terminal, rx, tx).await;
    restore_terminal()?;
    result
}
