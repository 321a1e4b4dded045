//! Contact form checks owned by the front end.
//!
//! Storage only requires non-empty fields; the form additionally insists on
//! a confirmed password of at least `MIN_PASSWORD_CHARS` characters.

use clap::Args;
use portfolio_core::NewContact;

const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, Clone, Default, Args)]
pub struct ContactForm {
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub password: String,
    #[arg(long, default_value = "")]
    pub confirm_password: String,
}

impl ContactForm {
    /// Returns the validated submission or the message to show the user.
    pub fn check(&self) -> Result<NewContact, String> {
        let contact = NewContact::new(
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
        )
        .map_err(|err| err.to_string())?;

        // Checks run on the trimmed value because that is what gets stored.
        let stored = contact.password().as_stored();
        if stored != self.confirm_password.trim() {
            return Err("Passwords do not match.".to_string());
        }
        if stored.chars().count() < MIN_PASSWORD_CHARS {
            return Err(format!(
                "Password must be at least {MIN_PASSWORD_CHARS} characters."
            ));
        }
        Ok(contact)
    }
}
