//! Sequences one form submission at a time: `Idle → Submitting → Success | Failed`.

mod navigator;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use futures_signals::map_ref;
use futures_signals::signal::Mutable;
use futures_signals::signal::Signal;
use tracing::debug;
use tracing::info;
use tracing::warn;

pub use navigator::LoggingNavigator;
pub use navigator::Navigator;

use crate::error::ValidationError;
use crate::form::Flow;
use crate::form::FollowUp;
use crate::form::FormFields;
use crate::model::FormMessage;
use crate::model::ServerOutcome;
use crate::model::SubmissionState;
use crate::transport::TransportAdapter;

/// What a call to [`SubmissionController::submit`] ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another attempt was in flight, or the form is gone. Nothing was sent.
    Ignored,
    /// Local validation failed. Nothing was sent.
    Invalid(ValidationError),
    Succeeded,
    /// The server rejected the request or could not be reached.
    Failed(String),
    /// The form was reset, closed or detached before the response arrived.
    Discarded,
}

pub struct SubmissionController<F: FormFields> {
    fields: F,
    transport: TransportAdapter,
    navigator: Arc<dyn Navigator>,
    state: Mutable<SubmissionState>,
    message: Mutable<Option<FormMessage>>,
    open: Mutable<bool>,
    // True from send until the response settles, even if the form was reset meanwhile
    in_flight: Mutable<bool>,
    // Bumped by reset/close/detach so late responses are dropped
    generation: AtomicU64,
    detached: AtomicBool,
}

impl<F: FormFields> SubmissionController<F> {
    pub fn new(fields: F, transport: TransportAdapter, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            fields,
            transport,
            navigator,
            state: Mutable::new(SubmissionState::Idle),
            message: Mutable::new(None),
            open: Mutable::new(true),
            in_flight: Mutable::new(false),
            generation: AtomicU64::new(0),
            detached: AtomicBool::new(false),
        }
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn flow(&self) -> Flow {
        F::FLOW
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get_cloned()
    }

    pub fn message(&self) -> Option<FormMessage> {
        self.message.get_cloned()
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn form_visible(&self) -> bool {
        Self::shows_form(&self.state.lock_ref())
    }

    pub fn state_signal(&self) -> impl Signal<Item = SubmissionState> + use<F> {
        self.state.signal_cloned()
    }

    pub fn message_signal(&self) -> impl Signal<Item = Option<FormMessage>> + use<F> {
        self.message.signal_cloned()
    }

    pub fn open_signal(&self) -> impl Signal<Item = bool> + use<F> {
        self.open.signal()
    }

    /// True while a request is in flight. Every button of the form binds to this.
    pub fn controls_disabled_signal(&self) -> impl Signal<Item = bool> + use<F> {
        map_ref! {
            let submitting = self.state.signal_ref(SubmissionState::is_submitting),
            let in_flight = self.in_flight.signal() =>
            *submitting || *in_flight
        }
    }

    pub fn controls_disabled(&self) -> bool {
        self.state.lock_ref().is_submitting() || self.in_flight.get()
    }

    /// False once a [`FollowUp::ReplaceForm`] flow has succeeded.
    pub fn form_visible_signal(&self) -> impl Signal<Item = bool> + use<F> {
        self.state.signal_ref(Self::shows_form)
    }

    fn shows_form(state: &SubmissionState) -> bool {
        !(state.is_success() && F::FLOW.follow_up == FollowUp::ReplaceForm)
    }

    /// Runs one attempt. The previous message stays visible until this attempt resolves.
    pub async fn submit(&self) -> SubmitOutcome {
        let flow = F::FLOW;
        if self.detached.load(Ordering::SeqCst) {
            return SubmitOutcome::Ignored;
        }

        let (generation, body) = {
            let mut state = self.state.lock_mut();
            if state.is_submitting() || self.in_flight.get() {
                debug!("{}::submit::ignored::already_submitting", flow.name);
                return SubmitOutcome::Ignored;
            }

            if let Err(error) = self.fields.validate() {
                debug!("{}::submit::invalid::{:?}", flow.name, error);
                let text = error.to_string();
                *state = SubmissionState::Failed(text.clone());
                self.message.set(Some(FormMessage::Error(text)));
                return SubmitOutcome::Invalid(error);
            }

            *state = SubmissionState::Submitting;
            self.in_flight.set(true);
            (self.generation.load(Ordering::SeqCst), self.fields.request_body())
        };

        info!("{}::submit::sending", flow.name);
        let outcome = {
            let _in_flight = InFlight(&self.in_flight);
            self.transport.post(flow.endpoint, &body).await
        };

        if self.detached.load(Ordering::SeqCst) || self.generation.load(Ordering::SeqCst) != generation {
            debug!("{}::submit::discarded", flow.name);
            return SubmitOutcome::Discarded;
        }

        match outcome {
            ServerOutcome::Accepted { .. } => {
                info!("{}::submit::accepted", flow.name);
                self.state.set(SubmissionState::Success);
                self.message.set(Some(FormMessage::Success(flow.success_message.to_string())));
                if let FollowUp::Redirect { target, delay } = flow.follow_up {
                    self.navigator.navigate_after(target, delay);
                }
                SubmitOutcome::Succeeded
            },
            ServerOutcome::Rejected { message, .. } | ServerOutcome::Unreachable { message } => {
                warn!("{}::submit::failed::{}", flow.name, message);
                self.state.set(SubmissionState::Failed(message.clone()));
                self.message.set(Some(FormMessage::Error(message.clone())));
                SubmitOutcome::Failed(message)
            },
        }
    }

    /// Empty fields, `Idle`, no message. Any attempt still in flight is dropped on arrival.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.fields.clear();
        self.state.set(SubmissionState::Idle);
        self.message.set(None);
        debug!("{}::reset", F::FLOW.name);
    }

    /// Reopening always starts from a clean form, whatever the last session ended in.
    pub fn set_open(&self, open: bool) {
        let was_open = self.open.replace(open);
        if open && !was_open {
            self.reset();
        } else if !open && was_open {
            self.generation.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// The owning view is gone. Later submits are ignored and late responses dropped.
    pub fn detach(&self) {
        self.detached.store(true, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

// Clears the in-flight flag when the request settles or the submit future is dropped
struct InFlight<'a>(&'a Mutable<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set_neq(false);
    }
}
