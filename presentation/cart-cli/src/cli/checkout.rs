use super::Session;
use crate::output;

pub(crate) async fn run(session: &Session) -> anyhow::Result<()> {
    if let Err(err) = session.controller.refresh().await {
        tracing::debug!("Checking out against the last known cart: {}", err);
    }
    output::print(&output::summary_lines(&session.controller.summary()));

    session
        .controller
        .checkout()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    Ok(())
}
