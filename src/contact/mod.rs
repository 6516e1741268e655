//! Contact form state and its submission lifecycle.
//!
//! `idle → sending → success | error → idle`. The return to idle happens
//! automatically after `STATUS_DISPLAY`, unless the visitor resets the form
//! or submits again first. Each submission runs on its own thread and
//! reports back over a channel that the form polls every frame.

pub mod gateway;

use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use crate::view::timer::Deadline;
use gateway::{ContactMessage, EmailGateway, GatewayError};

/// How long the success or error banner stays up.
pub const STATUS_DISPLAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// Submission timestamp in the visitor's local time.
pub fn submission_time() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[derive(Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: FormStatus,
    auto_reset: Deadline,
    in_flight: Option<mpsc::Receiver<Result<(), GatewayError>>>,
    last_error: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    /// Diagnostic text of the most recent failure.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.is_empty())
    }

    /// Start one delivery attempt on a background thread.
    ///
    /// Returns `false` without touching any state when a field is empty or a
    /// submission is already in flight. `notify` runs on the worker thread
    /// once the attempt finishes, typically to request a repaint.
    pub fn submit<F>(&mut self, gateway: Arc<dyn EmailGateway>, notify: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        if !self.is_complete() || self.is_sending() {
            return false;
        }

        self.status = FormStatus::Sending;
        self.auto_reset.cancel();
        self.last_error = None;

        let message = ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            time: submission_time(),
        };
        log::info!("sending contact message from {}", message.email);

        // Replacing the receiver drops any earlier one, so a stale attempt
        // can no longer report into this form.
        let (tx, rx) = mpsc::channel();
        self.in_flight = Some(rx);

        std::thread::spawn(move || {
            let result = gateway.send(&message);
            let _ = tx.send(result);
            notify();
        });
        true
    }

    /// Apply a finished attempt and fire a due auto-reset. Returns whether
    /// the status changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let before = self.status;

        if let Some(rx) = &self.in_flight {
            let outcome = match rx.try_recv() {
                Ok(result) => Some(result),
                Err(mpsc::TryRecvError::Empty) => None,
                Err(mpsc::TryRecvError::Disconnected) => Some(Err(GatewayError::Transport(
                    "submission worker exited without a result".to_string(),
                ))),
            };
            if let Some(result) = outcome {
                self.in_flight = None;
                self.finish(result, now);
            }
        }

        if self.auto_reset.fire_if_due(now) {
            self.status = FormStatus::Idle;
        }

        self.status != before
    }

    fn finish(&mut self, result: Result<(), GatewayError>, now: Instant) {
        match result {
            Ok(()) => {
                log::info!("contact message delivered");
                self.status = FormStatus::Success;
                self.name.clear();
                self.email.clear();
                self.message.clear();
            }
            Err(e) => {
                log::error!("contact message failed: {}", e);
                self.status = FormStatus::Error;
                self.last_error = Some(e.to_string());
            }
        }
        self.auto_reset.schedule(now, STATUS_DISPLAY);
    }

    /// "Send another message": back to idle right away.
    pub fn send_another(&mut self) {
        self.status = FormStatus::Idle;
        self.auto_reset.cancel();
    }

    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.auto_reset.remaining(now)
    }

    /// Abandon any in-flight attempt and cancel the auto-reset.
    pub fn shutdown(&mut self) {
        self.in_flight = None;
        self.auto_reset.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::thread::sleep;

    struct MockGateway {
        fail: bool,
        calls: AtomicUsize,
        sent: Mutex<Vec<ContactMessage>>,
    }

    impl MockGateway {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fail,
                calls: AtomicUsize::new(0),
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    impl EmailGateway for MockGateway {
        fn send(&self, message: &ContactMessage) -> Result<(), GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.sent.lock().unwrap().push(message.clone());
            if self.fail {
                Err(GatewayError::Rejected {
                    status: 400,
                    body: "bad request".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    /// Blocks each send until the test releases it.
    struct GatedGateway {
        gate: Mutex<mpsc::Receiver<Result<(), GatewayError>>>,
    }

    impl EmailGateway for GatedGateway {
        fn send(&self, _message: &ContactMessage) -> Result<(), GatewayError> {
            self.gate
                .lock()
                .unwrap()
                .recv()
                .unwrap_or(Err(GatewayError::Timeout))
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.name = "Jane".into();
        form.email = "jane@x.com".into();
        form.message = "Hi".into();
        form
    }

    fn settle(form: &mut ContactForm, now: Instant) {
        for _ in 0..500 {
            form.poll(now);
            if !form.is_sending() {
                return;
            }
            sleep(Duration::from_millis(2));
        }
        panic!("submission did not settle");
    }

    #[test]
    fn empty_field_is_silent_noop() {
        let gateway = MockGateway::new(false);
        for blank in 0..3 {
            let mut form = filled();
            match blank {
                0 => form.name.clear(),
                1 => form.email.clear(),
                _ => form.message.clear(),
            }
            assert!(!form.submit(gateway.clone(), || {}));
            assert_eq!(form.status(), FormStatus::Idle);
        }
        sleep(Duration::from_millis(10));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn whitespace_message_is_sent() {
        let t0 = Instant::now();
        let gateway = MockGateway::new(false);
        let mut form = filled();
        form.message = " ".into();
        assert!(form.is_complete());

        assert!(form.submit(gateway.clone(), || {}));
        settle(&mut form, t0);
        assert_eq!(form.status(), FormStatus::Success);
        let sent = gateway.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].message, " ");
    }

    #[test]
    fn success_scenario() {
        let t0 = Instant::now();
        let gateway = MockGateway::new(false);
        let mut form = filled();
        assert_eq!(form.status(), FormStatus::Idle);

        assert!(form.submit(gateway.clone(), || {}));
        assert_eq!(form.status(), FormStatus::Sending);

        settle(&mut form, t0);
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");

        let sent = gateway.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Jane");
        assert_eq!(sent[0].email, "jane@x.com");
        assert_eq!(sent[0].message, "Hi");
        assert!(!sent[0].time.is_empty());
        drop(sent);

        form.poll(t0 + Duration::from_millis(4999));
        assert_eq!(form.status(), FormStatus::Success);
        assert!(form.poll(t0 + STATUS_DISPLAY));
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn failure_scenario_keeps_fields() {
        let t0 = Instant::now();
        let gateway = MockGateway::new(true);
        let mut form = filled();

        assert!(form.submit(gateway.clone(), || {}));
        settle(&mut form, t0);
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.name, "Jane");
        assert_eq!(form.email, "jane@x.com");
        assert_eq!(form.message, "Hi");
        assert!(form.last_error().unwrap().contains("400"));

        form.poll(t0 + Duration::from_millis(4999));
        assert_eq!(form.status(), FormStatus::Error);
        assert!(form.poll(t0 + STATUS_DISPLAY));
        assert_eq!(form.status(), FormStatus::Idle);
        // no automatic retry
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn manual_reset_cancels_auto_reset() {
        let t0 = Instant::now();
        let gateway = MockGateway::new(false);
        let mut form = filled();
        form.submit(gateway, || {});
        settle(&mut form, t0);
        assert_eq!(form.status(), FormStatus::Success);

        form.send_another();
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.next_wakeup(t0), None);
        assert!(!form.poll(t0 + STATUS_DISPLAY));
    }

    #[test]
    fn resubmit_supersedes_pending_reset() {
        let t0 = Instant::now();
        let failing = MockGateway::new(true);
        let mut form = filled();
        form.submit(failing, || {});
        settle(&mut form, t0);
        assert_eq!(form.status(), FormStatus::Error);

        let (release, gate) = mpsc::channel();
        let gated = Arc::new(GatedGateway {
            gate: Mutex::new(gate),
        });
        assert!(form.submit(gated, || {}));
        assert_eq!(form.status(), FormStatus::Sending);

        // the error's auto-reset would have fired here
        form.poll(t0 + STATUS_DISPLAY);
        assert_eq!(form.status(), FormStatus::Sending);

        release.send(Ok(())).unwrap();
        let t1 = t0 + Duration::from_secs(6);
        settle(&mut form, t1);
        assert_eq!(form.status(), FormStatus::Success);
        form.poll(t1 + STATUS_DISPLAY);
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn no_double_submit_while_sending() {
        let (release, gate) = mpsc::channel();
        let gated = Arc::new(GatedGateway {
            gate: Mutex::new(gate),
        });
        let mut form = filled();
        assert!(form.submit(gated.clone(), || {}));
        assert!(!form.submit(gated, || {}));
        release.send(Ok(())).unwrap();
        settle(&mut form, Instant::now());
        assert_eq!(form.status(), FormStatus::Success);
    }

    #[test]
    fn notify_runs_after_attempt() {
        let gateway = MockGateway::new(false);
        let (tx, rx) = mpsc::channel();
        let mut form = filled();
        form.submit(gateway, move || {
            let _ = tx.send(());
        });
        assert!(rx.recv_timeout(Duration::from_secs(2)).is_ok());
    }

    #[test]
    fn shutdown_abandons_attempt() {
        let (_release, gate) = mpsc::channel();
        let gated = Arc::new(GatedGateway {
            gate: Mutex::new(gate),
        });
        let mut form = filled();
        form.submit(gated, || {});
        form.shutdown();
        assert_eq!(form.next_wakeup(Instant::now()), None);
    }
}
