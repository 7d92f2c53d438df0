use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// A validated message, ready to hand to a [`SubmissionSink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Where validated submissions go. The page does not prescribe a protocol;
/// a mail relay or HTTP endpoint would implement this.
pub trait SubmissionSink {
    fn deliver(&mut self, submission: &Submission) -> Result<(), ContactError>;
}

/// Sink that only records the submission in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn deliver(&mut self, submission: &Submission) -> Result<(), ContactError> {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            message_len = submission.message.len(),
            "contact form submitted"
        );
        Ok(())
    }
}

/// Collects submissions in memory.
impl SubmissionSink for Vec<Submission> {
    fn deliver(&mut self, submission: &Submission) -> Result<(), ContactError> {
        self.push(submission.clone());
        Ok(())
    }
}

/// Editable contact form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Required-field check. Fields are checked in form order and the first
    /// empty one is reported. Values are forwarded as typed.
    pub fn validate(&self) -> Result<Submission, ContactError> {
        if let Some(missing) = Field::ALL
            .into_iter()
            .find(|f| self.get(*f).is_empty())
        {
            return Err(ContactError::MissingField(missing));
        }
        Ok(Submission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Validate, deliver, and clear the form on success. A rejected form is
    /// never passed to the sink and keeps its contents.
    pub fn submit<S: SubmissionSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<Submission, ContactError> {
        let submission = self.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "contact form rejected");
        })?;
        sink.deliver(&submission)?;
        *self = Self::default();
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "Hello there");
        form
    }

    #[test]
    fn empty_name_never_reaches_sink() {
        let mut form = filled();
        form.set(Field::Name, "");
        let mut sink: Vec<Submission> = Vec::new();
        assert_eq!(
            form.submit(&mut sink),
            Err(ContactError::MissingField(Field::Name))
        );
        assert!(sink.is_empty());
        assert_eq!(form.email, "ada@example.com");
    }

    #[test]
    fn whitespace_only_is_present_and_forwarded_verbatim() {
        let mut form = filled();
        form.set(Field::Name, "   ");
        form.set(Field::Message, "  hello\n");
        let sub = form.validate().expect("non-empty fields");
        assert_eq!(sub.name, "   ");
        assert_eq!(sub.message, "  hello\n");
    }

    #[test]
    fn first_missing_field_reported() {
        let form = ContactForm::new();
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(Field::Name))
        );
    }

    #[test]
    fn successful_submit_delivers_and_clears() {
        let mut form = filled();
        let mut sink: Vec<Submission> = Vec::new();
        let sent = form.submit(&mut sink).expect("valid form");
        assert_eq!(sent.name, "Ada");
        assert_eq!(sink.len(), 1);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn log_sink_accepts() {
        let mut form = filled();
        assert!(form.submit(&mut LogSink).is_ok());
    }

    struct Refusing;

    impl SubmissionSink for Refusing {
        fn deliver(&mut self, _: &Submission) -> Result<(), ContactError> {
            Err(ContactError::Delivery("offline".into()))
        }
    }

    #[test]
    fn failed_delivery_keeps_input() {
        let mut form = filled();
        let err = form.submit(&mut Refusing);
        assert_eq!(err, Err(ContactError::Delivery("offline".into())));
        assert_eq!(form, filled());
    }

    #[test]
    fn field_names_parse() {
        assert_eq!(Field::parse("email"), Some(Field::Email));
        assert_eq!(Field::parse("phone"), None);
    }
}
