//! Load-test scenarios for the hello and performer endpoints.
//!
//! Each scenario declares a set of weighted actions and a setup hook. The
//! [`goose`] engine owns everything else: spawning users, picking the next
//! action, waiting between actions and reporting.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use load_test::prelude::*;
//!
//! let profile = UserProfile::from_env()?;
//! run_attack(&PerformerScenario, &profile).await?;
//! ```

pub mod attack;
pub mod client;
pub mod config;
pub mod context;
pub mod logging;
pub mod scenarios;
pub mod weights;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::attack::{AttackError, prepare_attack, resolve_host, run_attack};
    pub use crate::client::{ClientError, HttpClient};
    pub use crate::config::{ProfileError, UserProfile};
    pub use crate::context::UserContext;
    pub use crate::scenarios::{
        HelloScenario, PerformerScenario, ScenarioDefinition, ScenarioError, login,
    };
    pub use crate::weights::{TaskWeights, WeightsError};
}
