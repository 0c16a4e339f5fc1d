use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;

/// How long the success banner stays up before the form reverts to idle.
pub const SUCCESS_BANNER: Duration = Duration::from_secs(5);

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_MESSAGE_LEN: usize = 5000;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Message,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// A validated message, ready to hand to a [`MessageSender`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("{0} is required")]
    Empty(FieldName),
    #[error("email address doesn't look right")]
    MalformedEmail,
    #[error("{field} must be at most {max} characters")]
    TooLong { field: FieldName, max: usize },
}

/// Per-field validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldName, ValidationError>);

impl ValidationErrors {
    pub fn get(&self, field: FieldName) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: FieldName, err: ValidationError) {
        self.0.entry(field).or_insert(err);
    }

    fn remove(&mut self, field: FieldName) {
        self.0.remove(&field);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs = self.0.values().map(|e| e.to_string()).collect::<Vec<_>>();
        f.write_str(&msgs.join(", "))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendError {
    #[error("message was rejected: {0}")]
    Rejected(String),
    #[error("couldn't reach the server: {0}")]
    Transport(String),
    #[error("sending timed out")]
    TimedOut,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("invalid form: {0}")]
    Invalid(ValidationErrors),
    #[error("a message is already being sent")]
    InFlight,
}

/// Checks every field and returns the trimmed message, or all field errors.
pub fn validate(fields: &FormFields) -> Result<ContactMessage, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let name = fields.name.trim();
    let email = fields.email.trim();
    let message = fields.message.trim();

    for (field, value) in [
        (FieldName::Name, name),
        (FieldName::Email, email),
        (FieldName::Message, message),
    ] {
        if value.is_empty() {
            errors.insert(field, ValidationError::Empty(field));
        }
    }
    if !email.is_empty() && !EMAIL_RE.is_match(email) {
        errors.insert(FieldName::Email, ValidationError::MalformedEmail);
    }
    if name.chars().count() > MAX_NAME_LEN {
        errors.insert(
            FieldName::Name,
            ValidationError::TooLong {
                field: FieldName::Name,
                max: MAX_NAME_LEN,
            },
        );
    }
    if message.chars().count() > MAX_MESSAGE_LEN {
        errors.insert(
            FieldName::Message,
            ValidationError::TooLong {
                field: FieldName::Message,
                max: MAX_MESSAGE_LEN,
            },
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

/// Delivers contact messages somewhere.
pub trait MessageSender {
    fn send(&self, message: ContactMessage) -> impl Future<Output = Result<(), SendError>>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(SendError),
}

/// Ties a completion or timer to the submission that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// The contact form lifecycle.
///
/// `Idle -> Submitting -> Succeeded -> Idle`, with `Submitting -> Failed`
/// and `Failed -> Submitting` for retries. Every new submission issues a
/// fresh [`Ticket`]; completions and reverts carrying an older ticket are
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: FormFields,
    status: FormStatus,
    errors: ValidationErrors,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn error(&self, field: FieldName) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn succeeded(&self) -> bool {
        self.status == FormStatus::Succeeded
    }

    /// Edits a field. Ignored while a send is in flight, since a successful
    /// send clears the fields it was sent with.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        self.fields.set(field, value);
        self.errors.remove(field);
    }

    pub fn begin_submit(&mut self) -> Result<(Ticket, ContactMessage), FormError> {
        if self.is_submitting() {
            return Err(FormError::InFlight);
        }
        let message = validate(&self.fields).map_err(|errors| {
            self.errors = errors.clone();
            FormError::Invalid(errors)
        })?;
        self.errors = ValidationErrors::default();
        self.generation += 1;
        self.status = FormStatus::Submitting;
        Ok((Ticket(self.generation), message))
    }

    /// Applies the outcome of a send. Returns whether it was applied.
    pub fn complete(&mut self, ticket: Ticket, result: Result<(), SendError>) -> bool {
        if !self.is_current(ticket) || !self.is_submitting() {
            return false;
        }
        match result {
            Ok(()) => {
                self.status = FormStatus::Succeeded;
                self.fields = FormFields::default();
            }
            Err(e) => self.status = FormStatus::Failed(e),
        }
        true
    }

    /// Hides the success banner, unless a newer submission took over.
    pub fn auto_revert(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) || !self.succeeded() {
            return false;
        }
        self.status = FormStatus::Idle;
        true
    }

    /// Closes the success or failure banner.
    pub fn dismiss(&mut self) {
        if matches!(self.status, FormStatus::Succeeded | FormStatus::Failed(_)) {
            self.status = FormStatus::Idle;
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}

/// Shared handle to a [`ContactForm`] owned elsewhere, e.g. by a signal.
pub trait FormCell: Clone + 'static {
    /// Applies `f`, or returns `None` once the form has been torn down.
    fn try_update<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

/// One-shot timer that hides the success banner.
pub trait BannerTimer: Clone + 'static {
    /// Runs `f` after `delay`, replacing any timer still pending.
    fn schedule(&self, delay: Duration, f: impl FnOnce() + 'static);
    fn cancel(&self);
}

/// Starts a submission and returns the future that finishes it: send,
/// record the outcome, and on success schedule the revert to idle after
/// [`SUCCESS_BANNER`]. Returns `None` when the form can't be submitted.
///
/// A new submission cancels the previous banner timer. Every write goes
/// through [`FormCell::try_update`], so nothing happens after teardown.
pub fn submit<C, T, S>(form: C, timer: T, sender: S) -> Option<impl Future<Output = ()>>
where
    C: FormCell,
    T: BannerTimer,
    S: MessageSender,
{
    let (ticket, message) = match form.try_update(ContactForm::begin_submit)? {
        Ok(started) => started,
        Err(FormError::Invalid(errors)) => {
            log::debug!("contact form invalid: {errors}");
            return None;
        }
        Err(FormError::InFlight) => return None,
    };
    timer.cancel();

    Some(async move {
        let res = sender.send(message).await;
        if let Err(e) = &res {
            log::warn!("contact message failed: {e}");
        }
        let succeeded = form
            .try_update(|f| f.complete(ticket, res) && f.succeeded())
            .unwrap_or(false);
        if succeeded {
            let form = form.clone();
            timer.schedule(SUCCESS_BANNER, move || {
                form.try_update(|f| f.auto_revert(ticket));
            });
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use tokio::task::{JoinHandle, LocalSet};

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(FieldName::Name, "A");
        form.set_field(FieldName::Email, "a@b.com");
        form.set_field(FieldName::Message, "hi");
        form
    }

    struct FakeSender {
        outcomes: RefCell<Vec<Result<(), SendError>>>,
        sent: RefCell<Vec<ContactMessage>>,
    }

    impl FakeSender {
        fn new(outcomes: Vec<Result<(), SendError>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl MessageSender for FakeSender {
        async fn send(&self, message: ContactMessage) -> Result<(), SendError> {
            tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
            self.sent.borrow_mut().push(message);
            self.outcomes.borrow_mut().remove(0)
        }
    }

    #[derive(Clone, Default)]
    struct SharedForm(Rc<RefCell<ContactForm>>);

    impl FormCell for SharedForm {
        fn try_update<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
            Some(f(&mut self.0.borrow_mut()))
        }
    }

    impl SharedForm {
        fn status(&self) -> FormStatus {
            self.0.borrow().status().clone()
        }

        fn fill(&self, name: &str) {
            let mut form = self.0.borrow_mut();
            form.set_field(FieldName::Name, name);
            form.set_field(FieldName::Email, "a@b.com");
            form.set_field(FieldName::Message, "hi");
        }
    }

    /// Banner timer backed by tokio tasks on a `LocalSet`.
    #[derive(Clone, Default)]
    struct TaskTimer {
        pending: Rc<RefCell<Option<JoinHandle<()>>>>,
        fired: Rc<Cell<u32>>,
    }

    impl BannerTimer for TaskTimer {
        fn schedule(&self, delay: Duration, f: impl FnOnce() + 'static) {
            self.cancel();
            let fired = self.fired.clone();
            let handle = tokio::task::spawn_local(async move {
                tokio::time::sleep(delay).await;
                fired.set(fired.get() + 1);
                f();
            });
            *self.pending.borrow_mut() = Some(handle);
        }

        fn cancel(&self) {
            if let Some(handle) = self.pending.borrow_mut().take() {
                handle.abort();
            }
        }
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_banner_reverts_after_five_seconds() {
        LocalSet::new()
            .run_until(async {
                let form = SharedForm::default();
                let timer = TaskTimer::default();
                form.fill("A");

                let send = submit(form.clone(), timer.clone(), FakeSender::new(vec![Ok(())]))
                    .expect("form should be valid");
                assert_eq!(form.status(), FormStatus::Submitting);
                send.await;
                assert_eq!(form.status(), FormStatus::Succeeded);

                sleep_ms(4900).await;
                assert_eq!(form.status(), FormStatus::Succeeded);
                assert_eq!(timer.fired.get(), 0);

                sleep_ms(200).await;
                assert_eq!(form.status(), FormStatus::Idle);
                assert_eq!(timer.fired.get(), 1);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmit_clears_pending_banner_timer() {
        LocalSet::new()
            .run_until(async {
                let form = SharedForm::default();
                let timer = TaskTimer::default();

                form.fill("A");
                submit(form.clone(), timer.clone(), FakeSender::new(vec![Ok(())]))
                    .unwrap()
                    .await;
                assert_eq!(form.status(), FormStatus::Succeeded);

                // resubmit 3s into the first banner; the send takes 1.5s
                sleep_ms(3000).await;
                form.fill("B");
                submit(form.clone(), timer.clone(), FakeSender::new(vec![Ok(())]))
                    .unwrap()
                    .await;

                // past where the first banner would have ended
                sleep_ms(1000).await;
                assert_eq!(form.status(), FormStatus::Succeeded);
                assert_eq!(timer.fired.get(), 0);

                sleep_ms(4100).await;
                assert_eq!(form.status(), FormStatus::Idle);
                assert_eq!(timer.fired.get(), 1);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_submit_schedules_nothing() {
        LocalSet::new()
            .run_until(async {
                let form = SharedForm::default();
                let timer = TaskTimer::default();
                form.fill("A");

                let sender = FakeSender::new(vec![Err(SendError::TimedOut)]);
                submit(form.clone(), timer.clone(), sender).unwrap().await;
                assert_eq!(form.status(), FormStatus::Failed(SendError::TimedOut));
                assert!(timer.pending.borrow().is_none());

                sleep_ms(10_000).await;
                assert_eq!(form.status(), FormStatus::Failed(SendError::TimedOut));
            })
            .await;
    }

    #[test]
    fn test_submit_rejects_invalid_and_in_flight() {
        let form = SharedForm::default();
        let timer = TaskTimer::default();
        assert!(submit(form.clone(), timer.clone(), FakeSender::new(vec![])).is_none());
        assert!(form.0.borrow().error(FieldName::Name).is_some());

        form.fill("A");
        let first = submit(form.clone(), timer.clone(), FakeSender::new(vec![Ok(())]));
        assert!(first.is_some());
        assert!(submit(form.clone(), timer, FakeSender::new(vec![Ok(())])).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_success_clears_fields() {
        let sender = FakeSender::new(vec![Ok(())]);
        let mut form = filled();

        let (ticket, message) = form.begin_submit().expect("form should be valid");
        assert!(form.is_submitting());
        assert!(!form.succeeded());

        let res = sender.send(message).await;
        assert!(form.complete(ticket, res));

        assert!(form.succeeded());
        assert!(!form.is_submitting());
        assert_eq!(form.fields(), &FormFields::default());
        assert_eq!(
            sender.sent.borrow()[0],
            ContactMessage {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                message: "hi".to_string(),
            }
        );

        // success banner timer fires
        assert!(form.auto_revert(ticket));
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_send_allows_retry() {
        let sender = FakeSender::new(vec![Err(SendError::TimedOut), Ok(())]);
        let mut form = filled();

        let (ticket, message) = form.begin_submit().unwrap();
        let res = sender.send(message).await;
        assert!(form.complete(ticket, res));
        assert_eq!(form.status(), &FormStatus::Failed(SendError::TimedOut));
        assert_eq!(form.fields().name, "A");

        let (retry, message) = form.begin_submit().expect("retry should be allowed");
        assert_ne!(retry, ticket);
        let res = sender.send(message).await;
        assert!(form.complete(retry, res));
        assert!(form.succeeded());
        assert_eq!(sender.sent.borrow().len(), 2);
    }

    #[test]
    fn test_empty_field_stays_idle() {
        let mut form = filled();
        form.set_field(FieldName::Message, "   ");
        let err = form.begin_submit().unwrap_err();
        match err {
            FormError::Invalid(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(
                    errors.get(FieldName::Message),
                    Some(&ValidationError::Empty(FieldName::Message))
                );
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(form.status(), &FormStatus::Idle);
        assert!(form.error(FieldName::Message).is_some());

        // editing the field clears its inline error
        form.set_field(FieldName::Message, "hello");
        assert!(form.error(FieldName::Message).is_none());
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_fields_locked_while_sending() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit().unwrap();
        form.set_field(FieldName::Message, "typed while sending");
        assert_eq!(form.fields().message, "hi");

        form.complete(ticket, Err(SendError::TimedOut));
        form.set_field(FieldName::Message, "edited after failure");
        assert_eq!(form.fields().message, "edited after failure");
    }

    #[test]
    fn test_no_double_submit() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit().unwrap_err(), FormError::InFlight);
    }

    #[test]
    fn test_resubmit_cancels_pending_revert() {
        let mut form = filled();
        let (first, _) = form.begin_submit().unwrap();
        form.complete(first, Ok(()));
        assert!(form.succeeded());

        form.set_field(FieldName::Name, "B");
        form.set_field(FieldName::Email, "b@c.org");
        form.set_field(FieldName::Message, "again");
        let (second, _) = form.begin_submit().unwrap();
        form.complete(second, Ok(()));

        // the first success's timer fires late
        assert!(!form.auto_revert(first));
        assert!(form.succeeded());
        assert!(form.auto_revert(second));
        assert!(!form.succeeded());
    }

    #[test]
    fn test_stale_completion_ignored() {
        let mut form = filled();
        let (first, _) = form.begin_submit().unwrap();
        form.complete(first, Err(SendError::Transport("offline".to_string())));
        let (second, _) = form.begin_submit().unwrap();

        assert!(!form.complete(first, Ok(())));
        assert!(form.is_submitting());
        assert!(form.complete(second, Ok(())));
    }

    #[test]
    fn test_submitting_and_succeeded_exclusive() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit().unwrap();
        assert!(form.is_submitting() && !form.succeeded());
        form.complete(ticket, Ok(()));
        assert!(!form.is_submitting() && form.succeeded());
    }

    #[test]
    fn test_dismiss() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit().unwrap();
        form.dismiss();
        assert!(form.is_submitting());
        form.complete(ticket, Err(SendError::Rejected("spam".to_string())));
        form.dismiss();
        assert_eq!(form.status(), &FormStatus::Idle);
        assert_eq!(form.fields().message, "hi");
    }

    #[test]
    fn test_validate_trims_and_checks_email() {
        let fields = FormFields {
            name: "  Ada ".to_string(),
            email: " ada@example.com ".to_string(),
            message: "\nhello\n".to_string(),
        };
        let msg = validate(&fields).unwrap();
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.message, "hello");

        for bad in ["ada", "ada@", "@example.com", "ada@example", "a da@example.com"] {
            let fields = FormFields {
                email: bad.to_string(),
                ..fields.clone()
            };
            let errors = validate(&fields).unwrap_err();
            assert_eq!(
                errors.get(FieldName::Email),
                Some(&ValidationError::MalformedEmail),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_lengths() {
        let fields = FormFields {
            name: "x".repeat(MAX_NAME_LEN + 1),
            email: "a@b.co".to_string(),
            message: "y".repeat(MAX_MESSAGE_LEN + 1),
        };
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors.get(FieldName::Name),
            Some(ValidationError::TooLong { max: MAX_NAME_LEN, .. })
        ));
    }

    #[test]
    fn test_all_empty() {
        let errors = validate(&FormFields::default()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.to_string(), "name is required, email is required, message is required");
    }
}
