use super::*;

use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use client_core::{ClientError, ClientResult};
use crossbeam_channel::bounded;
use shared::{
    domain::{KataId, ResultStatus},
    protocol::{Kata, KataSummary, Submission, SubmissionResult},
};

use crate::controller::events::UiErrorCategory;

const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

struct ScriptedApi {
    kata: Kata,
    submit_delay: Duration,
    submit_completed: Arc<AtomicBool>,
    fail_submissions: bool,
}

impl ScriptedApi {
    fn new() -> Self {
        Self {
            kata: Kata {
                id: KataId::from("add-numbers"),
                title: "Add Two Numbers".to_string(),
                description: "Write a function `add(a, b)`".to_string(),
                starter_code: "def add(a, b):\n    pass".to_string(),
            },
            submit_delay: Duration::ZERO,
            submit_completed: Arc::new(AtomicBool::new(false)),
            fail_submissions: false,
        }
    }
}

#[async_trait]
impl KataApi for ScriptedApi {
    async fn list_katas(&self) -> ClientResult<Vec<KataSummary>> {
        Ok(vec![self.kata.summary()])
    }

    async fn fetch_kata(&self, kata_id: &KataId) -> ClientResult<Kata> {
        if kata_id == &self.kata.id {
            Ok(self.kata.clone())
        } else {
            Err(ClientError::NotFound {
                kata_id: kata_id.clone(),
                status: 404,
            })
        }
    }

    async fn submit_solution(&self, _submission: &Submission) -> ClientResult<SubmissionResult> {
        tokio::time::sleep(self.submit_delay).await;
        self.submit_completed.store(true, Ordering::SeqCst);
        if self.fail_submissions {
            return Err(ClientError::Timeout);
        }
        Ok(SubmissionResult::new(
            ResultStatus::Pass,
            "All tests passed! Great job!",
        ))
    }
}

struct Harness {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
}

impl Harness {
    fn start(api: ScriptedApi) -> Self {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(64);
        launch_with_api(Arc::new(api), cmd_rx, ui_tx);
        Self { cmd_tx, ui_rx }
    }

    fn send(&self, cmd: BackendCommand) {
        self.cmd_tx.send(cmd).expect("worker alive");
    }

    /// Next event other than the worker's informational status updates.
    fn next_event(&self) -> UiEvent {
        loop {
            match self.ui_rx.recv_timeout(EVENT_TIMEOUT).expect("event") {
                UiEvent::Info(_) => continue,
                event => return event,
            }
        }
    }
}

fn submission() -> Submission {
    Submission::new(KataId::from("add-numbers"), "def add(a, b):\n    return a + b")
        .expect("submission")
}

#[test]
fn list_command_reports_loaded_katas() {
    let harness = Harness::start(ScriptedApi::new());
    harness.send(BackendCommand::ListKatas);

    match harness.next_event() {
        UiEvent::KatasLoaded(katas) => {
            assert_eq!(katas.len(), 1);
            assert_eq!(katas[0].title, "Add Two Numbers");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn unknown_kata_is_reported_as_not_found_for_its_request() {
    let harness = Harness::start(ScriptedApi::new());
    harness.send(BackendCommand::FetchKata {
        request: RequestId(7),
        kata_id: KataId::from("nope"),
    });

    match harness.next_event() {
        UiEvent::KataLoadFailed { request, error } => {
            assert_eq!(request, RequestId(7));
            assert_eq!(error.category(), UiErrorCategory::NotFound);
            assert_eq!(error.context(), UiErrorContext::LoadKata);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn submission_result_is_tagged_with_request() {
    let harness = Harness::start(ScriptedApi::new());
    harness.send(BackendCommand::Submit {
        request: RequestId(3),
        submission: submission(),
    });

    match harness.next_event() {
        UiEvent::SubmissionEvaluated { request, result } => {
            assert_eq!(request, RequestId(3));
            assert!(result.status.is_pass());
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn submission_timeout_is_reported_as_transport_failure() {
    let mut api = ScriptedApi::new();
    api.fail_submissions = true;
    let harness = Harness::start(api);
    harness.send(BackendCommand::Submit {
        request: RequestId(4),
        submission: submission(),
    });

    match harness.next_event() {
        UiEvent::SubmissionFailed { request, error } => {
            assert_eq!(request, RequestId(4));
            assert_eq!(error.category(), UiErrorCategory::Transport);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn cancelled_submission_never_reports_back() {
    let mut api = ScriptedApi::new();
    api.submit_delay = Duration::from_millis(500);
    let completed = Arc::clone(&api.submit_completed);
    let harness = Harness::start(api);

    harness.send(BackendCommand::Submit {
        request: RequestId(9),
        submission: submission(),
    });
    harness.send(BackendCommand::CancelSubmission {
        request: RequestId(9),
    });
    harness.send(BackendCommand::ListKatas);

    assert!(matches!(harness.next_event(), UiEvent::KatasLoaded(_)));
    std::thread::sleep(Duration::from_millis(800));
    let leftover: Vec<UiEvent> = harness
        .ui_rx
        .try_iter()
        .filter(|event| !matches!(event, UiEvent::Info(_)))
        .collect();
    assert!(leftover.is_empty(), "unexpected events: {leftover:?}");
    assert!(!completed.load(Ordering::SeqCst));
}
