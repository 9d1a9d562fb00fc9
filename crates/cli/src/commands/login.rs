//! Mock login: resolve an email against the user directory.

use print_pro_core::Email;
use print_pro_store::{MockStore, OrderStore};
use print_pro_storefront::Session;

use super::CliError;

/// Look up `email` in the directory and report the resolved user.
///
/// # Errors
///
/// [`CliError::InvalidEmail`] for malformed input, [`CliError::UnknownUser`]
/// when the directory has no entry for it.
pub async fn run(store: &MockStore, email: &str) -> Result<(), CliError> {
    let email = Email::parse(email)?;
    let user = store
        .lookup_user(&email)
        .await
        .ok_or_else(|| CliError::UnknownUser(email.to_string()))?;

    let mut session = Session::new();
    session.login(user.clone());

    print_user(&user, session.page().to_string().as_str());
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_user(user: &print_pro_core::User, landing: &str) {
    println!("Logged in as {} ({})", user.email, user.id);
    println!("  mobile: {}", user.mobile);
    println!("  admin:  {}", user.is_admin);
    println!("  landing page: {landing}");
}
