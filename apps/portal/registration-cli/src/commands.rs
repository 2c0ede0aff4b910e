use std::io::Write;

use core_config::api::ApiConfig;
use domain_registration::{
    HttpRegistrationClient, Page, RegistrationForm, RegistrationInput, Router, SubmitResult,
    TerminalNotifier,
};
use eyre::{Result, WrapErr};
use strum::IntoEnumIterator;
use tracing::info;

/// Run one registration attempt, returning whether the account was created
pub async fn register(config: &ApiConfig, input: &RegistrationInput) -> Result<bool> {
    let client = HttpRegistrationClient::from_config(config)
        .wrap_err("Failed to create registration client")?;
    info!(endpoint = %client.endpoint(), "Using registration endpoint");

    let router = Router::new(Page::SignIn);
    let form = RegistrationForm::new(client, TerminalNotifier::stdout(), router.clone());

    let registered = match form.submit(input).await {
        SubmitResult::Registered(user) => {
            info!(user_id = user.id, page = %router.current(), "Redirected after registration");
            println!("-> {}", router.current().path());
            true
        }
        SubmitResult::Invalid(_) | SubmitResult::Failed(_) | SubmitResult::AlreadySubmitting => {
            false
        }
    };

    Ok(registered)
}

/// Print the page `path` resolves to, or every page when no path is given
pub fn route(path: Option<&str>, out: &mut impl Write) -> Result<()> {
    match path {
        Some(path) => writeln!(out, "{} -> {}", path, Page::resolve(path))?,
        None => {
            for page in Page::iter() {
                writeln!(out, "{:<12} {}", page.to_string(), page.path())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_output(path: Option<&str>) -> String {
        let mut out = Vec::new();
        route(path, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_route_known_page() {
        assert_eq!(route_output(Some("/dashboard")), "/dashboard -> dashboard\n");
    }

    #[test]
    fn test_route_unknown_page() {
        assert_eq!(route_output(Some("/nowhere")), "/nowhere -> errorPage\n");
    }

    #[test]
    fn test_route_lists_all_pages() {
        let listing = route_output(None);
        assert_eq!(listing.lines().count(), 5);
        assert!(listing.lines().next().unwrap().starts_with("logIn"));
        assert!(listing.contains("/maintenance"));
    }

    #[tokio::test]
    async fn test_register_invalid_input_fails_without_backend() {
        let config = ApiConfig::new("http://127.0.0.1:1", None);
        let input = RegistrationInput::new("", "x@y.com", "pw1", "pw1");

        let registered = register(&config, &input).await.unwrap();

        assert!(!registered);
    }

    #[tokio::test]
    async fn test_register_rejects_bad_base_url() {
        let config = ApiConfig::new("::not a url::", None);
        let input = RegistrationInput::new("1", "x@y.com", "pw1", "pw1");

        assert!(register(&config, &input).await.is_err());
    }
}
