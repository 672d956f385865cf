//! Runs both suites against a real gateway instance.
//!
//! Needs `config.json` in the crate directory (or a path in `GREENAPI_CONFIG`)
//! and network access:
//!
//! ```sh
//! cargo test -p greenapi-harness --test live_gateway -- --ignored
//! ```
use greenapi_harness::prelude::*;
use greenapi_harness::telemetry;

#[tokio::test(flavor = "current_thread")]
#[ignore] // Requires instance credentials and network access
async fn test_gateway_api_functions() {
    telemetry::init().unwrap();

    let config = GatewayConfig::load().unwrap_or_else(|e| panic!("Failed to load config: {e}"));
    let gateway = Gateway::new(config).unwrap();

    let report = run_all(&gateway, &RunOptions::default()).await.unwrap();

    assert!(report.passed(), "{report}");
}
