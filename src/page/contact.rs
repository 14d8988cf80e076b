// Contact form wiring.
// Turns a subject and message into a mailto link when the email is public.

pub const DEFAULT_SUBJECT: &str = "Portfolio Inquiry";
pub const EMAIL_NOT_PUBLIC_NOTE: &str = "Email is not public. Please reach out via GitHub.";

/// Contact form target. Disabled until a public email is known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    email: Option<String>,
}

impl ContactForm {
    pub fn enable(&mut self, email: &str) {
        self.email = Some(email.to_string());
    }

    pub fn disable(&mut self) {
        self.email = None;
    }

    pub fn is_enabled(&self) -> bool {
        self.email.is_some()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Build the submission link, or `None` while the form is disabled.
    pub fn mailto(&self, subject: &str, message: &str) -> Option<String> {
        let email = self.email.as_deref()?;
        let subject = if subject.is_empty() {
            DEFAULT_SUBJECT
        } else {
            subject
        };
        Some(format!(
            "mailto:{}?subject={}&body={}",
            email,
            urlencoding::encode(subject),
            urlencoding::encode(message)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_form_has_no_link() {
        let form = ContactForm::default();
        assert!(!form.is_enabled());
        assert_eq!(form.mailto("Hi", "there"), None);
    }

    #[test]
    fn test_mailto_encodes_fields() {
        let mut form = ContactForm::default();
        form.enable("octo@example.com");
        assert_eq!(
            form.mailto("Hello there", "Line one\nA&B").unwrap(),
            "mailto:octo@example.com?subject=Hello%20there&body=Line%20one%0AA%26B"
        );
    }

    #[test]
    fn test_empty_subject_uses_default() {
        let mut form = ContactForm::default();
        form.enable("octo@example.com");
        assert_eq!(
            form.mailto("", "").unwrap(),
            "mailto:octo@example.com?subject=Portfolio%20Inquiry&body="
        );
        assert_eq!(
            form.mailto("  ", "").unwrap(),
            "mailto:octo@example.com?subject=%20%20&body="
        );

        form.disable();
        assert!(form.mailto("x", "y").is_none());
    }
}
