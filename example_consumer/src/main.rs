//! Example consumer: a separate Rust project that uses endpoint-sdk as a dependency.
//!
//! Run from repo root: `cargo run -p example-consumer -- users get 1`
//! Reads `ENDPOINT_SDK_*` from the environment (or `.env`) and the services file from
//! `SERVICES_PATH` (default `example_consumer/services.json`).

use endpoint_sdk::{load_services_from_path, Callbacks, ClientConfig, EndpointFactory, ServiceRegistry};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("endpoint_sdk=info")),
        )
        .init();

    let client = ClientConfig::from_env()?;
    let services_path =
        std::env::var("SERVICES_PATH").unwrap_or_else(|_| "example_consumer/services.json".into());
    let services = load_services_from_path(&services_path).await?;

    let factory = EndpointFactory::from_config(&client)?;
    factory.register_global_error_handler(|e| tracing::error!("request failed: {}", e));
    let registry = ServiceRegistry::build(&factory, &client, &services);

    let mut args = std::env::args().skip(1);
    let (Some(service), Some(action)) = (args.next(), args.next()) else {
        for (name, resource) in registry.iter() {
            for (action, endpoint) in resource.iter() {
                tracing::info!("{}.{} -> {} {:?}", name, action, endpoint.route(), endpoint.arg_names());
            }
        }
        return Ok(());
    };
    // Arguments that parse as JSON are sent as such, the rest as strings.
    let values: Vec<Value> = args
        .map(|a| serde_json::from_str(&a).unwrap_or(Value::String(a)))
        .collect();

    let endpoint = registry.service(&service)?.endpoint(&action)?;
    let request = endpoint.call(&values);
    let response = request.get(Callbacks::new()).await?;
    tracing::info!(status = response.status, url = %request.url(), "done");
    println!("{}", response.body);
    Ok(())
}
