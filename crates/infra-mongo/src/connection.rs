// MongoDB Client Setup

use crate::error_map::map_mongo_error;
use crate::scope::scoped;
use jobboard_core::{AppError, Result, StoreConfig};
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ReadPreference, SelectionCriteria};
use mongodb::Client;

/// Create a client for `config.uri` and confirm the primary answers a ping.
///
/// Client setup and the ping run under a single connect timeout. Any failure
/// other than an invalid config is a connection error.
pub async fn connect(config: &StoreConfig) -> Result<Client> {
    config.validate()?;
    let timeout = config.connect_timeout();

    let connected = scoped("connect", timeout, async {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::Connection(e.to_string()))?;
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client =
            Client::with_options(options).map_err(|e| AppError::Connection(e.to_string()))?;
        ping(&client).await?;
        Ok(client)
    })
    .await;

    match connected {
        Ok(client) => {
            tracing::info!(database = %config.database, "Connected to store");
            Ok(client)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to store");
            match e {
                AppError::Connection(_) => Err(e),
                other => Err(AppError::Connection(other.to_string())),
            }
        }
    }
}

/// Health check against the primary
pub async fn ping(client: &Client) -> Result<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .selection_criteria(SelectionCriteria::ReadPreference(ReadPreference::Primary))
        .await
        .map_err(map_mongo_error)?;
    Ok(())
}
