mod config;
mod error;
mod event;
mod handler;
mod model;
mod service;
#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use aws_lambda_events::sns::SnsEvent;
use handler::handler;
use ingest_entrypoint::Entrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    Entrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = config::DbConfig::from_env()?;

    tracing::trace!(config=?config, "initialized config");

    // connections are opened per invocation, the client only carries the config
    let shared_db = Arc::new(service::db::DB::new(config));

    let func = service_fn(move |event: LambdaEvent<SnsEvent>| {
        let db = shared_db.clone();
        async move { handler(db, event).await }
    });

    run(func).await
}
