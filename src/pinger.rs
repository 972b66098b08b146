use tracing::{info, warn};

use crate::clients::TableClient;
use crate::models::{Credentials, CredentialsError, PingOutcome, SelectQuery};

/// Runs one keep-alive attempt.
///
/// `connect` is only called when credentials are present, and the resulting
/// client is asked for [`SelectQuery::keep_alive`] exactly once. Every failure
/// is folded into [`PingOutcome::Failed`]; nothing is returned as an error.
pub async fn keep_alive<C, F>(
    credentials: Result<Credentials, CredentialsError>,
    connect: F,
) -> PingOutcome
where
    C: TableClient,
    F: FnOnce(&Credentials) -> anyhow::Result<C>,
{
    let creds = match credentials {
        Ok(creds) => creds,
        Err(err) => {
            warn!(error = %err, "Skipping keep-alive request");
            return PingOutcome::MissingCredentials;
        }
    };

    let query = SelectQuery::keep_alive();
    let result = match connect(&creds) {
        Ok(client) => client.select(&query).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => {
            info!(
                endpoint = creds.endpoint.as_str(),
                table = query.table.as_str(),
                "Project pinged"
            );
            PingOutcome::Active
        }
        Err(err) => {
            // {:#} keeps the whole context chain, e.g. "request failed: timed out"
            let reason = one_line(&format!("{err:#}"));
            warn!(
                endpoint = creds.endpoint.as_str(),
                error = reason.as_str(),
                "Keep-alive request failed"
            );
            PingOutcome::Failed(reason)
        }
    }
}

fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
