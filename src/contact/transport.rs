use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use super::validation::Inquiry;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Inquiry was rejected: {0}")]
    Rejected(String),
    #[error("Inquiry could not be delivered: {0}")]
    Unreachable(String),
}

/// Where a validated inquiry goes. Implementations resolve once the
/// exchange is over, successfully or not.
pub trait InquiryTransport {
    fn send(&self, inquiry: Inquiry) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Stand-in used until the site has a backend: waits for a fixed delay and
/// reports success.
pub struct SimulatedTransport {
    delay_ms: u32,
}

impl SimulatedTransport {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl InquiryTransport for SimulatedTransport {
    fn send(&self, inquiry: Inquiry) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let delay_ms = self.delay_ms;
        async move {
            log::info!(
                "Simulating inquiry from {} about {:?}",
                inquiry.email,
                inquiry.service
            );
            TimeoutFuture::new(delay_ms).await;
            Ok(())
        }
        .boxed_local()
    }
}
