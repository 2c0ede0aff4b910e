//! The sign-up form: validation, submission and outcome handling.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, instrument, warn};

use crate::client::RegistrationClient;
use crate::error::RegistrationError;
use crate::models::{RegisteredUser, RegistrationInput, RegistrationOutcome};
use crate::navigation::{Navigator, Page};
use crate::notification::NotificationSink;
use crate::validation::validate;

/// What a call to [`RegistrationForm::submit`] ended with
#[derive(Debug)]
pub enum SubmitResult {
    /// The backend accepted the registration; the user was sent to the login page
    Registered(RegisteredUser),
    /// Local validation failed; nothing was sent
    Invalid(RegistrationError),
    /// The backend (or the network) refused; carries the message shown to the user
    Failed(String),
    /// Another submission from this form is still in flight; the call was ignored
    AlreadySubmitting,
}

impl SubmitResult {
    pub fn is_registered(&self) -> bool {
        matches!(self, SubmitResult::Registered(_))
    }
}

/// Holds the submitting flag for as long as a request is in flight
struct SubmittingGuard<'a>(&'a AtomicBool);

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct RegistrationForm<C, N, V> {
    client: C,
    notifier: N,
    navigator: V,
    submitting: AtomicBool,
}

impl<C, N, V> RegistrationForm<C, N, V>
where
    C: RegistrationClient,
    N: NotificationSink,
    V: Navigator,
{
    pub fn new(client: C, notifier: N, navigator: V) -> Self {
        Self {
            client,
            notifier,
            navigator,
            submitting: AtomicBool::new(false),
        }
    }

    /// True while a request is in flight; drives loading indicators
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Validate `input`, send it, and report the outcome to the user.
    ///
    /// Every path except [`SubmitResult::AlreadySubmitting`] produces exactly
    /// one notification. Only a successful registration navigates.
    #[instrument(skip_all, fields(email = %input.email))]
    pub async fn submit(&self, input: &RegistrationInput) -> SubmitResult {
        if self.is_submitting() {
            return self.ignore_duplicate();
        }

        let request = match validate(input) {
            Ok(request) => request,
            Err(err) => {
                debug!(error = %err, "Registration input rejected");
                self.notifier.notify(&err.user_message());
                return SubmitResult::Invalid(err);
            }
        };

        let Some(guard) = SubmittingGuard::acquire(&self.submitting) else {
            return self.ignore_duplicate();
        };

        let outcome = RegistrationOutcome::from(self.client.register(&request).await);
        drop(guard);

        match outcome {
            RegistrationOutcome::Success { message, user } => {
                info!(user_id = user.id, "User registered");
                self.notifier.notify(&message);
                self.navigator.navigate(Page::LogIn);
                SubmitResult::Registered(user)
            }
            RegistrationOutcome::Failure { message } => {
                warn!(%message, "Registration failed");
                self.notifier.notify(&message);
                SubmitResult::Failed(message)
            }
        }
    }

    fn ignore_duplicate(&self) -> SubmitResult {
        warn!("Submission already in progress, ignoring");
        SubmitResult::AlreadySubmitting
    }
}
