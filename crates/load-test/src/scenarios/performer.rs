//! The performer scenario: browse the performer list, mostly open one.

use std::ops::RangeInclusive;

use goose::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ScenarioDefinition;
use crate::context::UserContext;
use crate::weights::{TaskWeights, WeightsError};

pub const PERFORMERS: &str = "performers";
pub const PERFORMER: &str = "performer";

/// Ids requested by [`performer`], inclusive on both ends.
pub const PERFORMER_IDS: RangeInclusive<u32> = 1..=10;

/// Users that look up individual performers ten times as often as the list.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformerScenario;

impl ScenarioDefinition for PerformerScenario {
    fn name(&self) -> &'static str {
        "PerformerBehavior"
    }

    fn task_weights(&self) -> Result<TaskWeights, WeightsError> {
        TaskWeights::new([(PERFORMERS, 1), (PERFORMER, 10)])
    }

    fn transaction(&self, action: &str) -> Option<Transaction> {
        match action {
            PERFORMERS => Some(transaction!(performers_transaction)),
            PERFORMER => Some(transaction!(performer_transaction)),
            _ => None,
        }
    }
}

/// Picks a performer id uniformly from [`PERFORMER_IDS`].
pub fn performer_id<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(PERFORMER_IDS)
}

/// Path of a single performer, e.g. `/performer/7`.
pub fn performer_path(id: u32) -> String {
    format!("/performer/{id}")
}

/// `GET /performers`, response discarded.
pub async fn performers<C: UserContext + ?Sized>(ctx: &mut C) -> Result<(), C::Error> {
    ctx.get("/performers").await.map(drop)
}

/// `GET /performer/{id}` for a fresh random id, response discarded.
pub async fn performer<C, R>(ctx: &mut C, rng: &mut R) -> Result<(), C::Error>
where
    C: UserContext + ?Sized,
    R: Rng + ?Sized,
{
    let path = performer_path(performer_id(rng));
    ctx.get(&path).await.map(drop)
}

async fn performers_transaction(user: &mut GooseUser) -> TransactionResult {
    performers(user).await
}

async fn performer_transaction(user: &mut GooseUser) -> TransactionResult {
    // Owned per call; the thread-local generator cannot cross an await.
    let mut rng = StdRng::from_entropy();
    performer(user, &mut rng).await
}
