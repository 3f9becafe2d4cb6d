//! Kata view controller.
//!
//! Owns every piece of UI state (selected kata, editor buffer, displayed
//! result, submit button) and routes user [`Intent`]s to handlers. Network
//! work is never performed here: handlers queue [`BackendCommand`]s and the
//! outcomes come back through [`KataController::apply`].

use crossbeam_channel::Sender;
use shared::{
    domain::KataId,
    error::SubmissionError,
    protocol::{Kata, KataSummary, Submission, SubmissionResult},
};
use tracing::{debug, info, warn};

use crate::backend_bridge::commands::{BackendCommand, RequestId};
use crate::controller::events::{err_label, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

pub const SUBMIT_LABEL: &str = "Submit";
pub const RUNNING_LABEL: &str = "Running...";
pub const LOAD_KATA_FAILED_MESSAGE: &str = "Failed to load kata. Please try again.";
pub const LOAD_KATAS_FAILED_MESSAGE: &str = "Failed to load katas. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KataListState {
    Loading,
    Loaded(Vec<KataSummary>),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitButton {
    Idle,
    Running(RequestId),
}

impl SubmitButton {
    pub fn label(self) -> &'static str {
        match self {
            SubmitButton::Idle => SUBMIT_LABEL,
            SubmitButton::Running(_) => RUNNING_LABEL,
        }
    }

    pub fn enabled(self) -> bool {
        matches!(self, SubmitButton::Idle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    ResetCode,
}

impl Confirmation {
    pub fn prompt(self) -> &'static str {
        match self {
            Confirmation::ResetCode => "Are you sure you want to reset your code?",
        }
    }
}

/// User actions the surface can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Initialize,
    RefreshList,
    SelectKata(KataId),
    ReturnToList,
    Submit,
    ResetCode,
    ConfirmReset,
    CancelReset,
    DismissAlert,
}

pub struct KataController {
    cmd_tx: Sender<BackendCommand>,
    view: View,
    katas: KataListState,
    current_kata: Option<Kata>,
    code: String,
    result: Option<SubmissionResult>,
    scroll_to_result: bool,
    submit: SubmitButton,
    pending_detail: Option<RequestId>,
    alert: Option<String>,
    confirmation: Option<Confirmation>,
    status: String,
    next_request: u64,
}

impl KataController {
    pub fn new(cmd_tx: Sender<BackendCommand>) -> Self {
        Self {
            cmd_tx,
            view: View::List,
            katas: KataListState::Loading,
            current_kata: None,
            code: String::new(),
            result: None,
            scroll_to_result: false,
            submit: SubmitButton::Idle,
            pending_detail: None,
            alert: None,
            confirmation: None,
            status: "Starting".to_string(),
            next_request: 0,
        }
    }

    pub fn handle(&mut self, intent: Intent) {
        debug!(?intent, "handling intent");
        match intent {
            Intent::Initialize => self.initialize(),
            Intent::RefreshList => self.refresh_list(),
            Intent::SelectKata(kata_id) => self.select_kata(kata_id),
            Intent::ReturnToList => self.return_to_list(),
            Intent::Submit => self.submit(),
            Intent::ResetCode => self.reset_code(),
            Intent::ConfirmReset => self.resolve_confirmation(true),
            Intent::CancelReset => self.resolve_confirmation(false),
            Intent::DismissAlert => self.dismiss_alert(),
        }
    }

    pub fn initialize(&mut self) {
        self.view = View::List;
        self.refresh_list();
    }

    pub fn refresh_list(&mut self) {
        self.katas = KataListState::Loading;
        if !self.queue(BackendCommand::ListKatas) {
            self.katas = KataListState::Failed(LOAD_KATAS_FAILED_MESSAGE.to_string());
        }
    }

    pub fn select_kata(&mut self, kata_id: KataId) {
        if kata_id.is_blank() {
            warn!("ignoring selection of blank kata id");
            return;
        }

        let request = self.next_request_id();
        self.pending_detail = Some(request);
        self.status = format!("Loading kata {kata_id}");
        if !self.queue(BackendCommand::FetchKata { request, kata_id }) {
            self.pending_detail = None;
            self.alert = Some(LOAD_KATA_FAILED_MESSAGE.to_string());
        }
    }

    pub fn return_to_list(&mut self) {
        if let SubmitButton::Running(request) = self.submit {
            info!(%request, "cancelling in-flight submission");
            self.queue(BackendCommand::CancelSubmission { request });
            self.submit = SubmitButton::Idle;
        }
        self.current_kata = None;
        self.confirmation = None;
        self.result = None;
        self.scroll_to_result = false;
        self.view = View::List;
    }

    pub fn submit(&mut self) {
        if !self.submit.enabled() {
            debug!("submission already running");
            return;
        }

        let submission = match &self.current_kata {
            None => Err(SubmissionError::MissingKata),
            Some(kata) => Submission::new(kata.id.clone(), &self.code),
        };
        let submission = match submission {
            Ok(submission) => submission,
            Err(err) => {
                info!(%err, "submission rejected before sending");
                self.alert = Some(err.to_string());
                return;
            }
        };

        let request = self.next_request_id();
        self.submit = SubmitButton::Running(request);
        self.status = format!("Running {}", submission.kata_id);
        if !self.queue(BackendCommand::Submit {
            request,
            submission,
        }) {
            self.submit = SubmitButton::Idle;
            self.show_result(SubmissionResult::submit_failed());
        }
    }

    pub fn reset_code(&mut self) {
        if self.current_kata.is_some() {
            self.confirmation = Some(Confirmation::ResetCode);
        }
    }

    pub fn resolve_confirmation(&mut self, accepted: bool) {
        let Some(Confirmation::ResetCode) = self.confirmation.take() else {
            return;
        };
        if !accepted {
            return;
        }
        if let Some(kata) = &self.current_kata {
            self.code = kata.starter_code.clone();
            self.result = None;
            self.scroll_to_result = false;
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Folds one backend outcome into the UI state.
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::Error(err) => {
                self.status = format!("{} error: {}", err_label(err.category()), err.message());
                if err.context() == UiErrorContext::BackendStartup
                    && self.katas == KataListState::Loading
                {
                    self.katas = KataListState::Failed(LOAD_KATAS_FAILED_MESSAGE.to_string());
                }
            }
            UiEvent::KatasLoaded(katas) => {
                self.status = format!("{} katas available", katas.len());
                self.katas = KataListState::Loaded(katas);
            }
            UiEvent::KataListFailed(err) => {
                warn!(error = err.message(), "kata list failed to load");
                self.status = format!("{} error: {}", err_label(err.category()), err.message());
                self.katas = KataListState::Failed(LOAD_KATAS_FAILED_MESSAGE.to_string());
            }
            UiEvent::KataLoaded { request, kata } => {
                if self.pending_detail != Some(request) {
                    debug!(%request, kata_id = %kata.id, "dropping stale kata detail");
                    return;
                }
                self.pending_detail = None;
                self.status = format!("Loaded kata: {}", kata.title);
                self.code = kata.starter_code.clone();
                self.current_kata = Some(kata);
                self.result = None;
                self.scroll_to_result = false;
                self.confirmation = None;
                self.view = View::Detail;
            }
            UiEvent::KataLoadFailed { request, error } => {
                if self.pending_detail != Some(request) {
                    debug!(%request, "dropping stale kata detail failure");
                    return;
                }
                self.pending_detail = None;
                warn!(%request, error = error.message(), "failed to load kata");
                self.status = format!("{} error: {}", err_label(error.category()), error.message());
                self.alert = Some(LOAD_KATA_FAILED_MESSAGE.to_string());
            }
            UiEvent::SubmissionEvaluated { request, result } => {
                if self.submit != SubmitButton::Running(request) {
                    debug!(%request, "dropping stale submission result");
                    return;
                }
                self.submit = SubmitButton::Idle;
                self.status = format!("Evaluation finished: {}", result.status);
                self.show_result(result);
            }
            UiEvent::SubmissionFailed { request, error } => {
                if self.submit != SubmitButton::Running(request) {
                    debug!(%request, "dropping stale submission failure");
                    return;
                }
                warn!(%request, error = error.message(), "submission failed");
                self.submit = SubmitButton::Idle;
                self.status = format!("{} error: {}", err_label(error.category()), error.message());
                self.show_result(SubmissionResult::submit_failed());
            }
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn katas(&self) -> &KataListState {
        &self.katas
    }

    pub fn current_kata(&self) -> Option<&Kata> {
        self.current_kata.as_ref()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn code_mut(&mut self) -> &mut String {
        &mut self.code
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    /// True once after a new result was shown; the surface scrolls it into view.
    pub fn take_scroll_to_result(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_result)
    }

    pub fn submit_button(&self) -> SubmitButton {
        self.submit
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn confirmation(&self) -> Option<Confirmation> {
        self.confirmation
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    fn show_result(&mut self, result: SubmissionResult) {
        self.result = Some(result);
        self.scroll_to_result = true;
    }

    fn next_request_id(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }

    fn queue(&mut self, cmd: BackendCommand) -> bool {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status)
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
