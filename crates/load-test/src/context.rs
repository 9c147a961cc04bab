//! The capability a simulated user hands to every action.

use async_trait::async_trait;
use goose::goose::{GooseResponse, GooseUser, TransactionError};

/// Something that can issue an HTTP GET on behalf of one simulated user.
///
/// Actions only ever need this one operation. The engine's [`GooseUser`]
/// implements it, and so does the standalone [`crate::client::HttpClient`].
#[async_trait]
pub trait UserContext: Send {
    type Response: Send;
    type Error: Send;

    /// Issues a GET for `path`, relative to the context's host.
    async fn get(&mut self, path: &str) -> Result<Self::Response, Self::Error>;
}

#[async_trait]
impl UserContext for GooseUser {
    type Response = GooseResponse;
    type Error = Box<TransactionError>;

    async fn get(&mut self, path: &str) -> Result<GooseResponse, Box<TransactionError>> {
        // Inherent method, so the request lands in goose's metrics.
        GooseUser::get(self, path).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::convert::Infallible;

    use super::*;

    /// Records every requested path instead of sending it.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingContext {
        pub requests: Vec<String>,
    }

    #[async_trait]
    impl UserContext for RecordingContext {
        type Response = ();
        type Error = Infallible;

        async fn get(&mut self, path: &str) -> Result<(), Infallible> {
            self.requests.push(path.to_string());
            Ok(())
        }
    }
}
