//! Scenario definitions.
//!
//! A scenario is a weighted set of actions plus a setup hook that runs once
//! per simulated user. Actions are written against [`UserContext`] so they
//! can run under the engine or on a plain HTTP client; each scenario then
//! wraps them as goose transactions.

mod hello;
mod performer;

pub use hello::{HELLO, HelloScenario, hello};
pub use performer::{
    PERFORMER, PERFORMER_IDS, PERFORMERS, PerformerScenario, performer, performer_id,
    performer_path, performers,
};

use goose::GooseError;
use goose::prelude::*;
use thiserror::Error;

use crate::config::UserProfile;
use crate::context::UserContext;
use crate::weights::{TaskWeights, WeightsError};

/// Transaction name of the setup hook.
pub const LOGIN: &str = "login";

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Engine rejected scenario: {0}")]
    Engine(#[from] GooseError),
    #[error("Invalid task weights: {0}")]
    Weights(#[from] WeightsError),
    #[error("Action {0:?} is weighted but has no transaction")]
    UnknownAction(&'static str),
}

/// One simulated user behaviour.
pub trait ScenarioDefinition: Send + Sync {
    /// Scenario name as shown in the engine's reports.
    fn name(&self) -> &'static str;

    /// Relative weight of each action.
    fn task_weights(&self) -> Result<TaskWeights, WeightsError>;

    /// Engine transaction running the named action.
    fn transaction(&self, action: &str) -> Option<Transaction>;

    /// Builds the engine scenario for `profile`.
    ///
    /// The setup hook is registered as an on-start transaction. Every action
    /// with a non-zero weight is registered with that weight; zero-weight
    /// actions are left out.
    fn build(&self, profile: &UserProfile) -> Result<Scenario, ScenarioError> {
        let mut scenario = Scenario::new(self.name())
            .set_wait_time(profile.min_wait(), profile.max_wait())?
            .register_transaction(
                transaction!(login_transaction)
                    .set_name(LOGIN)
                    .set_on_start(),
            );

        for (action, weight) in self.task_weights()?.enabled() {
            let transaction = self
                .transaction(action)
                .ok_or(ScenarioError::UnknownAction(action))?;
            scenario = scenario
                .register_transaction(transaction.set_name(action).set_weight(weight as usize)?);
        }

        Ok(scenario)
    }
}

/// Setup hook, run once per simulated user before its first action.
///
/// Intentionally empty; reserved for authentication.
pub async fn login<C: UserContext + ?Sized>(_ctx: &mut C) {}

async fn login_transaction(user: &mut GooseUser) -> TransactionResult {
    login(user).await;
    Ok(())
}
