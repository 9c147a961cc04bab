//! Launching a scenario on the goose engine.

use goose::GooseError;
use goose::config::GooseConfiguration;
use goose::metrics::GooseMetrics;
use goose::prelude::*;
use gumdrop::Options;
use thiserror::Error;
use tracing::{info, warn};

use crate::client::HttpClient;
use crate::config::{ProfileError, UserProfile};
use crate::scenarios::{ScenarioDefinition, ScenarioError};

#[derive(Debug, Error)]
pub enum AttackError {
    #[error("Invalid profile: {0}")]
    Profile(#[from] ProfileError),
    #[error("Invalid scenario: {0}")]
    Scenario(#[from] ScenarioError),
    #[error("Load test failed: {0}")]
    Engine(#[from] GooseError),
}

/// Runs `definition` until the engine stops.
///
/// The engine's usual flags (`--users`, `--run-time`, `--host`, report
/// options) are read from the process arguments. The profile host is only used
/// when `--host` is absent.
pub async fn run_attack(
    definition: &dyn ScenarioDefinition,
    profile: &UserProfile,
) -> Result<GooseMetrics, AttackError> {
    let config = GooseConfiguration::parse_args_default_or_exit();
    let metrics = prepare_attack(definition, profile, config)
        .await?
        .execute()
        .await?;

    info!("Load test {} finished", definition.name());
    Ok(metrics)
}

/// Validates the profile, probes the resolved host and registers the scenario
/// on an engine built from `config`. The returned attack has not started.
pub async fn prepare_attack(
    definition: &dyn ScenarioDefinition,
    profile: &UserProfile,
    mut config: GooseConfiguration,
) -> Result<GooseAttack, AttackError> {
    profile.validate()?;

    config.host = resolve_host(&config, profile);
    log_plan(definition, profile, &config.host)?;

    match HttpClient::for_probe(&config.host) {
        Ok(client) => {
            if let Err(e) = client.check_reachable().await {
                warn!("{e}; requests will be counted as failures");
            }
        }
        Err(e) => warn!("Skipping reachability check: {e}"),
    }

    let scenario = definition.build(profile)?;
    Ok(GooseAttack::initialize_with_config(config)?.register_scenario(scenario))
}

/// Host the attack will target: `--host` when given, otherwise the profile's.
pub fn resolve_host(config: &GooseConfiguration, profile: &UserProfile) -> String {
    if config.host.is_empty() {
        profile.host.clone()
    } else {
        config.host.clone()
    }
}

fn log_plan(
    definition: &dyn ScenarioDefinition,
    profile: &UserProfile,
    host: &str,
) -> Result<(), ScenarioError> {
    info!(
        "Scenario {} against {} (wait {}..={}ms)",
        definition.name(),
        host,
        profile.min_wait_ms,
        profile.max_wait_ms
    );

    let weights = definition.task_weights()?;
    for (action, weight) in weights.iter() {
        if weight == 0 {
            info!("  {action}: disabled");
        } else {
            info!("  {action}: weight {weight}/{}", weights.total());
        }
    }
    Ok(())
}
