//! Performer load test: simulated users list performers and, ten times as
//! often, fetch a random performer by id.
//!
//! Run with:
//! ```
//! cargo run -p load-test --bin performers -- --host http://localhost:8080 -u10 -r2 -t1m
//! ```

use load_test::logging::init_tracing;
use load_test::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let profile = UserProfile::from_env()?;
    run_attack(&PerformerScenario, &profile).await?;

    Ok(())
}
