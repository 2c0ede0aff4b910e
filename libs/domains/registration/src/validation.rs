//! Local checks run before anything is sent to the backend.

use validator::Validate;

use crate::error::{RegistrationError, RegistrationResult};
use crate::models::{RegistrationInput, RegistrationRequest};

/// Validate a form snapshot and turn it into the request body.
///
/// Missing fields (including an unselected role) win over a password
/// mismatch, so the user always fixes omissions first.
pub fn validate(input: &RegistrationInput) -> RegistrationResult<RegistrationRequest> {
    if let Err(errors) = input.validate() {
        let incomplete = errors
            .field_errors()
            .values()
            .flat_map(|field| field.iter())
            .any(|error| error.code != "must_match");

        return Err(if incomplete {
            RegistrationError::IncompleteFields
        } else {
            RegistrationError::PasswordMismatch
        });
    }

    let role = input.role.ok_or(RegistrationError::IncompleteFields)?;

    Ok(RegistrationRequest {
        email: input.email.clone(),
        password: input.password.clone(),
        role,
    })
}
