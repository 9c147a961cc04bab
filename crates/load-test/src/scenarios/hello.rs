//! The hello scenario: a single `GET /hello`.

use goose::prelude::*;

use super::ScenarioDefinition;
use crate::context::UserContext;
use crate::weights::{TaskWeights, WeightsError};

pub const HELLO: &str = "hello";

/// Users that only ever say hello.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloScenario;

impl ScenarioDefinition for HelloScenario {
    fn name(&self) -> &'static str {
        "HelloBehavior"
    }

    fn task_weights(&self) -> Result<TaskWeights, WeightsError> {
        // Only action, so the weight itself never matters.
        TaskWeights::new([(HELLO, 2)])
    }

    fn transaction(&self, action: &str) -> Option<Transaction> {
        match action {
            HELLO => Some(transaction!(hello_transaction)),
            _ => None,
        }
    }
}

/// `GET /hello`, response discarded.
pub async fn hello<C: UserContext + ?Sized>(ctx: &mut C) -> Result<(), C::Error> {
    ctx.get("/hello").await.map(drop)
}

async fn hello_transaction(user: &mut GooseUser) -> TransactionResult {
    hello(user).await
}
