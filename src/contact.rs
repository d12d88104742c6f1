use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long a success or error message stays up before the form resets.
pub const STATUS_RESET_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("captcha is not available")]
    CaptchaUnavailable,
    #[error("captcha challenge failed: {0}")]
    Captcha(String),
    #[error("could not reach the relay: {0}")]
    Transport(String),
    #[error("relay answered with status {0}")]
    Status(u16),
    #[error("relay rejected the submission: {0}")]
    Rejected(String),
    #[error("relay is not configured")]
    NotConfigured,
}

/// Ways a CAPTCHA challenge can end without producing a token. Each one must
/// settle a pending submission, or the form stays in `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeEnd {
    Failed,
    TokenExpired,
    Closed,
    TimedOut,
}

impl ChallengeEnd {
    pub const ALL: [Self; 4] = [Self::Failed, Self::TokenExpired, Self::Closed, Self::TimedOut];

    /// Widget render parameter the handler is registered under.
    pub fn callback_name(&self) -> &'static str {
        match self {
            Self::Failed => "error-callback",
            Self::TokenExpired => "expired-callback",
            Self::Closed => "close-callback",
            Self::TimedOut => "chalexpired-callback",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Failed => "challenge failed",
            Self::TokenExpired => "token expired",
            Self::Closed => "challenge closed",
            Self::TimedOut => "challenge timed out",
        }
    }

    /// `detail` is whatever the widget passed along, if anything.
    pub fn into_error(self, detail: Option<String>) -> ContactError {
        match detail.filter(|d| !d.is_empty()) {
            Some(d) => ContactError::Captcha(format!("{}: {d}", self.describe())),
            None => ContactError::Captcha(self.describe().to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        [Field::Name, Field::Email, Field::Message]
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
            .map_or(Ok(()), |f| Err(ContactError::MissingField(f)))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSession {
    form: ContactForm,
    status: FormStatus,
}

impl ContactSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    /// Gate in front of the network call.
    ///
    /// An invalid form never reaches `Loading`. A missing CAPTCHA fails straight
    /// into `Error` so the relay is never contacted.
    pub fn begin_submit(&mut self, captcha_ready: bool) -> Result<(), ContactError> {
        if self.status == FormStatus::Loading {
            return Err(ContactError::InFlight);
        }
        self.form.validate()?;
        if !captcha_ready {
            self.status = FormStatus::Error;
            return Err(ContactError::CaptchaUnavailable);
        }
        self.status = FormStatus::Loading;
        Ok(())
    }

    /// Fields are only cleared on success so a failed attempt can be retried.
    pub fn finish(&mut self, outcome: Result<(), ContactError>) {
        if self.status != FormStatus::Loading {
            return;
        }
        match outcome {
            Ok(()) => {
                self.form.clear();
                self.status = FormStatus::Success;
            }
            Err(_) => self.status = FormStatus::Error,
        }
    }

    pub fn expire(&mut self) {
        if matches!(self.status, FormStatus::Success | FormStatus::Error) {
            self.status = FormStatus::Idle;
        }
    }

    pub fn submission(&self, captcha_token: String) -> ContactSubmission {
        ContactSubmission {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            message: self.form.message.clone(),
            captcha_token,
        }
    }
}

/// What the browser hands to the server function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub captcha_token: String,
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), ContactError> {
        ContactForm {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
        .validate()?;
        if self.captcha_token.is_empty() {
            return Err(ContactError::CaptchaUnavailable);
        }
        Ok(())
    }
}

/// JSON body for the form relay.
#[derive(Debug, Serialize)]
pub struct RelayRequest<'a> {
    pub access_key: &'a str,
    pub subject: &'a str,
    pub from_name: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    #[serde(rename = "h-captcha-response")]
    pub captcha_response: &'a str,
}

impl<'a> RelayRequest<'a> {
    pub fn new(access_key: &'a str, submission: &'a ContactSubmission) -> Self {
        Self {
            access_key,
            subject: "New message from the portfolio contact form",
            from_name: "Portfolio Contact Form",
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
            captcha_response: &submission.captcha_token,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Maps the relay's answer onto a single pass/fail outcome.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<(), ContactError> {
    let parsed = serde_json::from_str::<RelayResponse>(body);
    if !status.is_success() {
        return Err(match parsed {
            Ok(r) if !r.message.is_empty() => ContactError::Rejected(r.message),
            _ => ContactError::Status(status.as_u16()),
        });
    }
    match parsed {
        Ok(RelayResponse { success: true, .. }) => Ok(()),
        Ok(RelayResponse { message, .. }) => Err(ContactError::Rejected(message)),
        Err(e) => Err(ContactError::Rejected(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactSession {
        let mut s = ContactSession::new();
        s.set_field(Field::Name, "Ada".to_string());
        s.set_field(Field::Email, "ada@example.com".to_string());
        s.set_field(Field::Message, "Hello there".to_string());
        s
    }

    #[test]
    fn test_empty_field_never_reaches_loading() {
        for missing in [Field::Name, Field::Email, Field::Message] {
            let mut s = filled();
            s.set_field(missing, "   ".to_string());
            assert_eq!(
                s.begin_submit(true),
                Err(ContactError::MissingField(missing))
            );
            assert_eq!(s.status(), FormStatus::Idle);
        }
    }

    #[test]
    fn test_missing_captcha_fails_without_loading() {
        let mut s = filled();
        assert_eq!(s.begin_submit(false), Err(ContactError::CaptchaUnavailable));
        assert_eq!(s.status(), FormStatus::Error);
        assert_eq!(s.form().name, "Ada");
    }

    #[test]
    fn test_success_clears_fields() {
        let mut s = filled();
        s.begin_submit(true).unwrap();
        assert_eq!(s.status(), FormStatus::Loading);
        s.finish(Ok(()));
        assert_eq!(s.status(), FormStatus::Success);
        assert_eq!(s.form(), &ContactForm::default());
    }

    #[test]
    fn test_failure_keeps_fields() {
        let failures = [
            ContactError::Transport("connection reset".to_string()),
            ContactError::Status(500),
            ContactError::Rejected("invalid access key".to_string()),
        ];
        for err in failures {
            let mut s = filled();
            s.begin_submit(true).unwrap();
            s.finish(Err(err));
            assert_eq!(s.status(), FormStatus::Error);
            assert_eq!(s.form(), filled().form());
        }
    }

    #[test]
    fn test_no_second_submit_while_loading() {
        let mut s = filled();
        s.begin_submit(true).unwrap();
        assert_eq!(s.begin_submit(true), Err(ContactError::InFlight));
        assert_eq!(s.status(), FormStatus::Loading);
    }

    #[test]
    fn test_expire_returns_to_idle() {
        let mut s = filled();
        s.expire();
        assert_eq!(s.status(), FormStatus::Idle);
        s.begin_submit(true).unwrap();
        s.expire();
        assert_eq!(s.status(), FormStatus::Loading);
        s.finish(Err(ContactError::Status(502)));
        s.expire();
        assert_eq!(s.status(), FormStatus::Idle);
        // retry straight from error works too
        s.begin_submit(true).unwrap();
        s.finish(Ok(()));
        assert_eq!(s.status(), FormStatus::Success);
    }

    #[test]
    fn test_finish_ignored_unless_loading() {
        let mut s = filled();
        s.finish(Ok(()));
        assert_eq!(s.status(), FormStatus::Idle);
        assert_eq!(s.form().email, "ada@example.com");
    }

    #[test]
    fn test_every_challenge_end_settles_loading() {
        for end in ChallengeEnd::ALL {
            let mut s = filled();
            s.begin_submit(true).unwrap();
            s.finish(Err(end.into_error(None)));
            assert_eq!(s.status(), FormStatus::Error, "{end:?}");
            assert_eq!(s.form(), filled().form());
            s.begin_submit(true).unwrap();
            assert_eq!(s.status(), FormStatus::Loading);
        }
    }

    #[test]
    fn test_challenge_end_callbacks() {
        let names: Vec<_> = ChallengeEnd::ALL.iter().map(|e| e.callback_name()).collect();
        assert!(names.contains(&"close-callback"));
        assert!(names.contains(&"chalexpired-callback"));
        assert!(!names.contains(&"callback"));
        assert_eq!(
            ChallengeEnd::Closed.into_error(None),
            ContactError::Captcha("challenge closed".to_string())
        );
        assert_eq!(
            ChallengeEnd::Failed.into_error(Some("rate-limited".to_string())),
            ContactError::Captcha("challenge failed: rate-limited".to_string())
        );
    }

    #[test]
    fn test_relay_request_body() {
        let s = filled().submission("tok-123".to_string());
        let body = serde_json::to_value(RelayRequest::new("key", &s)).unwrap();
        assert_eq!(body["access_key"], "key");
        assert_eq!(body["name"], "Ada");
        assert_eq!(body["h-captcha-response"], "tok-123");
    }

    #[test]
    fn test_submission_validate() {
        let s = filled().submission(String::new());
        assert_eq!(s.validate(), Err(ContactError::CaptchaUnavailable));
        assert!(filled().submission("t".to_string()).validate().is_ok());
    }

    #[test]
    fn test_interpret_response() {
        assert!(interpret_response(StatusCode::OK, r#"{"success":true,"message":"ok"}"#).is_ok());
        assert_eq!(
            interpret_response(StatusCode::OK, r#"{"success":false,"message":"spam"}"#),
            Err(ContactError::Rejected("spam".to_string()))
        );
        assert_eq!(
            interpret_response(StatusCode::BAD_GATEWAY, "<html>"),
            Err(ContactError::Status(502))
        );
        assert_eq!(
            interpret_response(
                StatusCode::BAD_REQUEST,
                r#"{"success":false,"message":"bad key"}"#
            ),
            Err(ContactError::Rejected("bad key".to_string()))
        );
        assert!(interpret_response(StatusCode::OK, "not json").is_err());
    }
}
