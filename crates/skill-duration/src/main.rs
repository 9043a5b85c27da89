mod bootstrap;

use std::process::ExitCode;

use anyhow::Result;
use skill_core::settings::Settings;
use skill_runtime::handler::RequestHandler;
use skill_runtime::io::{render, write_output, InputSource};

fn main() -> Result<ExitCode> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("skill-duration v{} starting", env!("CARGO_PKG_VERSION"));

    let policy = settings.overlap_policy()?;
    let source = InputSource::from(&settings);
    tracing::info!("Input: {}, overlap policy: {}", source.describe(), policy);

    let response = RequestHandler::new(policy).handle_source(&source)?;

    match &response.body {
        Some(body) => {
            let text = render(body, settings.pretty)?;
            write_output(&text, settings.output.as_deref())?;
        }
        None => {
            tracing::error!("Request failed with status {}", response.status);
        }
    }

    Ok(ExitCode::from(response.exit_code()))
}
