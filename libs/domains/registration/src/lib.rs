//! Registration Domain
//!
//! Client side of the portal's sign-up flow: a form validates what the user
//! typed, sends a single registration request to the backend and turns the
//! outcome into a notification and, on success, a move to the login page.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   notify    ┌──────────────────┐
//! │ RegistrationForm │───────────▶ │ NotificationSink │
//! └───┬──────────┬───┘             └──────────────────┘
//!     │          │ navigate        ┌──────────────────┐
//!     │          └───────────────▶ │    Navigator     │
//!     │ register                   └──────────────────┘
//! ┌───▼──────────────────┐
//! │  RegistrationClient  │  ← POST {base_url}/api/registrar
//! └──────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_registration::{
//!     HttpRegistrationClient, RecordingNotifier, RegistrationForm, RegistrationInput, Router,
//! };
//!
//! # async fn run() -> Result<(), domain_registration::RegistrationError> {
//! let client = HttpRegistrationClient::new("http://localhost:3000", None)?;
//! let form = RegistrationForm::new(client, RecordingNotifier::new(), Router::default());
//!
//! let input = RegistrationInput::new("1", "ana@example.com", "s3cret", "s3cret");
//! let result = form.submit(&input).await;
//! # let _ = result;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod form;
pub mod models;
pub mod navigation;
pub mod notification;
pub mod validation;

pub use client::{HttpRegistrationClient, REGISTER_PATH, RegistrationClient};
pub use error::{FALLBACK_MESSAGE, RegistrationError, RegistrationResult};
pub use form::{RegistrationForm, SubmitResult};
pub use models::{
    ApiResponse, RegisteredUser, RegistrationInput, RegistrationOutcome, RegistrationRequest, Role,
};
pub use navigation::{Navigator, Page, Router};
pub use notification::{NotificationSink, RecordingNotifier, TerminalNotifier, WriterNotifier};
