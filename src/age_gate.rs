//! Age confirmation gate.
//!
//! Age-restricted products are rendered with a blurred placeholder image
//! ([`AGE_RESTRICTED_URL`]). The first time extraction meets one, it suspends
//! on an [`AgeConfirmation`] hook and only continues once the hook resolves.
//! The gate then stays confirmed for the rest of the session.

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;
use crate::patterns::AGE_RESTRICTED_URL;

/// Hook awaited when an age-restricted product is first encountered.
#[async_trait]
pub trait AgeConfirmation: Send + Sync {
    /// Resolve once the user has confirmed their age.
    ///
    /// Returning [`Error::AgeConfirmationDeclined`](crate::Error::AgeConfirmationDeclined)
    /// leaves the gate unconfirmed and fails the extraction in progress.
    async fn confirm(&self) -> Result<()>;
}

/// Confirms immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

#[async_trait]
impl AgeConfirmation for AutoConfirm {
    async fn confirm(&self) -> Result<()> {
        Ok(())
    }
}

/// One-way `Unconfirmed -> Confirmed` gate, reset only by [`AgeGate::reset`].
pub struct AgeGate {
    confirmed: bool,
    suspensions: usize,
    confirmation: Box<dyn AgeConfirmation>,
}

impl AgeGate {
    /// Gate that confirms automatically.
    #[must_use]
    pub fn new() -> Self {
        Self::with_confirmation(AutoConfirm)
    }

    /// Gate that awaits `confirmation` when triggered.
    #[must_use]
    pub fn with_confirmation(confirmation: impl AgeConfirmation + 'static) -> Self {
        Self {
            confirmed: false,
            suspensions: 0,
            confirmation: Box::new(confirmation),
        }
    }

    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Number of times extraction suspended on the hook.
    #[must_use]
    pub fn suspensions(&self) -> usize {
        self.suspensions
    }

    /// Suspend on the hook if `image_url` is the age-restriction placeholder
    /// and the gate is still unconfirmed. No-op otherwise.
    pub async fn intercept(&mut self, image_url: &str) -> Result<()> {
        if self.confirmed || image_url != AGE_RESTRICTED_URL {
            return Ok(());
        }

        info!("Products needing age verification, confirming age");
        self.suspensions += 1;
        self.confirmation.confirm().await?;
        self.confirmed = true;
        info!("Age confirmed for this session");
        Ok(())
    }

    /// Back to unconfirmed. Only the session's clear action calls this.
    pub fn reset(&mut self) {
        self.confirmed = false;
        self.suspensions = 0;
    }
}

impl Default for AgeGate {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AgeGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgeGate")
            .field("confirmed", &self.confirmed)
            .field("suspensions", &self.suspensions)
            .finish_non_exhaustive()
    }
}
