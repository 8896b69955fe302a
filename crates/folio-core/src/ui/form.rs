//! Contact form state and the mailto hand-off.
//!
//! The only mutable entity on the page. Submission performs no network
//! request: it composes a `mailto:` deep link and the web layer navigates to
//! it, delegating delivery to the user's mail client. Fields are never
//! cleared on submit, so the user can keep editing after the hand-off.

/// Fixed recipient for the mail hand-off.
pub const CONTACT_EMAIL: &str = "animadiksingh904@gmail.com";

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose the mail-client deep link.
    ///
    /// Wire contract: `subject` and `body` query parameters are
    /// percent-encoded; the body is exactly
    /// `Name: {name}\nEmail: {email}\n\n{message}`.
    pub fn mailto_link(&self) -> String {
        let body = format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        );
        format!(
            "mailto:{}?subject={}&body={}",
            CONTACT_EMAIL,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&body),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let form = ContactForm::new();
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.subject.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn mailto_wire_format() {
        let form = ContactForm {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        };
        assert_eq!(
            form.mailto_link(),
            "mailto:animadiksingh904@gmail.com?subject=Hi&body=Name%3A%20Jane%0AEmail%3A%20jane%40x.com%0A%0AHello%20there"
        );
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let form = ContactForm {
            name: "A & B".into(),
            email: "a+b@x.com".into(),
            subject: "Q?&#".into(),
            message: "50% done".into(),
        };
        let link = form.mailto_link();
        let query = link.split_once('?').unwrap().1;
        // Nothing that could split the query string survives un-encoded.
        for param in query.split('&') {
            let value = param.split_once('=').unwrap().1;
            assert!(!value.contains('?'));
            assert!(!value.contains('#'));
            assert!(!value.contains('&'));
            assert!(!value.contains(' '));
        }
        assert!(link.contains("subject=Q%3F%26%23"));
        assert!(link.contains("50%25%20done"));
    }

    #[test]
    fn empty_fields_still_compose() {
        // HTML `required` guards this path in the browser; the composer
        // itself never fails.
        let link = ContactForm::new().mailto_link();
        assert_eq!(
            link,
            "mailto:animadiksingh904@gmail.com?subject=&body=Name%3A%20%0AEmail%3A%20%0A%0A"
        );
    }
}
