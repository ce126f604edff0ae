use std::fmt;

use thiserror::Error;

/// How long the success message stays up before the form comes back.
pub const SUCCESS_DISPLAY_MS: f64 = 3000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn all() -> [Field; 3] {
        [Field::Name, Field::Email, Field::Message]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("please fill in your {0}")]
    MissingField(Field),
    #[error("please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Sent,
}

/// Contact form state. Submission is simulated: a valid submit shows the
/// success message, and [`ContactForm::reset`] brings back an empty form
/// once [`SUCCESS_DISPLAY_MS`] has passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    phase: Phase,
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !s.chars().any(char::is_whitespace)
}

impl ContactForm {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_sent(&self) -> bool {
        self.phase == Phase::Sent
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Field edits are ignored while the success message is showing.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if self.is_sent() {
            return;
        }
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Same rules as the browser's `required` and `type=email` checks. Only
    /// the email value has surrounding whitespace stripped.
    pub fn validate(&self) -> Result<(), FormError> {
        for field in Field::all() {
            if self.value(field).is_empty() {
                return Err(FormError::MissingField(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate and switch to the success message. A second submit while
    /// already sent is a no-op.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if self.is_sent() {
            return Ok(());
        }
        self.validate()?;
        self.phase = Phase::Sent;
        Ok(())
    }

    /// Back to an empty, editable form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "John Doe");
        form.set(Field::Email, "john@example.com");
        form.set(Field::Message, "Hello there");
        form
    }

    #[test]
    fn test_submit_then_reset() {
        let mut form = filled();
        assert_eq!(form.phase(), Phase::Editing);

        form.submit().unwrap();
        assert!(form.is_sent());

        // edits while the success message shows are dropped
        form.set(Field::Name, "Someone Else");
        assert_eq!(form.name, "John Doe");

        form.reset();
        assert_eq!(form, ContactForm::default());
        assert_eq!(form.phase(), Phase::Editing);
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.set(Field::Message, "");
        assert_eq!(form.submit(), Err(FormError::MissingField(Field::Message)));
        assert!(!form.is_sent());

        // whitespace still counts as filled in
        form.set(Field::Message, "   ");
        form.set(Field::Name, " ");
        assert!(form.submit().is_ok());

        let mut form = ContactForm::default();
        assert_eq!(form.submit(), Err(FormError::MissingField(Field::Name)));
    }

    #[test]
    fn test_email_shape() {
        let mut form = filled();
        for bad in [
            "john",
            "john@",
            "@example.com",
            "jo hn@example.com",
            "john@.com",
            "a@b@c",
        ] {
            form.set(Field::Email, bad);
            assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{bad}");
        }
        form.set(Field::Email, "john@localhost");
        assert!(form.validate().is_ok());
        form.set(Field::Email, " john@example.com ");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormError::MissingField(Field::Email).to_string(),
            "please fill in your email"
        );
    }
}
