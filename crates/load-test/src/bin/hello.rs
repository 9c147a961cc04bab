//! Hello load test: every simulated user repeatedly calls `GET /hello`.
//!
//! Run with:
//! ```
//! cargo run -p load-test --bin hello -- --host http://localhost:8080 -u10 -r2 -t1m
//! ```
//!
//! `LOAD_TEST_HOST`, `LOAD_TEST_MIN_WAIT_MS` and `LOAD_TEST_MAX_WAIT_MS`
//! override the default profile.

use load_test::logging::init_tracing;
use load_test::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let profile = UserProfile::from_env()?;
    run_attack(&HelloScenario, &profile).await?;

    Ok(())
}
