//! Runtime bridge between UI command queue and backend event intake.
//!
//! The worker owns a tokio runtime on a dedicated thread. Each network call
//! runs as its own task so a slow evaluation never blocks list or detail
//! requests; in-flight submissions can be aborted by request id.

use std::{collections::HashMap, sync::Arc, thread};

use client_core::{ClientSettings, HttpKataClient, KataApi};
use crossbeam_channel::{Receiver, Sender};
use tokio::task::JoinHandle;

use crate::backend_bridge::commands::{BackendCommand, RequestId};
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the worker against the HTTP transport described by `settings`.
pub fn launch(
    settings: ClientSettings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let api: Arc<dyn KataApi> = match HttpKataClient::from_settings(&settings) {
            Ok(client) => Arc::new(client),
            Err(err) => {
                tracing::error!("failed to build kata client: {err}");
                emit(
                    &ui_tx,
                    UiEvent::Error(UiError::from_client_error(
                        UiErrorContext::BackendStartup,
                        &err,
                    )),
                );
                return;
            }
        };
        run(api, cmd_rx, ui_tx);
    })
}

/// Starts the worker against an arbitrary transport.
pub fn launch_with_api(
    api: Arc<dyn KataApi>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || run(api, cmd_rx, ui_tx))
}

fn run(api: Arc<dyn KataApi>, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    emit(&ui_tx, UiEvent::Info("Backend worker starting...".to_string()));
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("failed to build backend runtime: {err}");
            emit(
                &ui_tx,
                UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )),
            );
            return;
        }
    };

    runtime.block_on(async move {
        emit(&ui_tx, UiEvent::Info("Backend worker ready".to_string()));
        let mut submissions: HashMap<RequestId, JoinHandle<()>> = HashMap::new();

        while let Ok(cmd) = cmd_rx.recv() {
            submissions.retain(|_, task| !task.is_finished());
            tracing::debug!(command = cmd.name(), "backend received command");

            match cmd {
                BackendCommand::ListKatas => {
                    let api = Arc::clone(&api);
                    let ui_tx = ui_tx.clone();
                    tokio::spawn(async move {
                        let event = match api.list_katas().await {
                            Ok(katas) => UiEvent::KatasLoaded(katas),
                            Err(err) => UiEvent::KataListFailed(UiError::from_client_error(
                                UiErrorContext::LoadKatas,
                                &err,
                            )),
                        };
                        emit(&ui_tx, event);
                    });
                }
                BackendCommand::FetchKata { request, kata_id } => {
                    let api = Arc::clone(&api);
                    let ui_tx = ui_tx.clone();
                    tokio::spawn(async move {
                        let event = match api.fetch_kata(&kata_id).await {
                            Ok(kata) => UiEvent::KataLoaded { request, kata },
                            Err(err) => UiEvent::KataLoadFailed {
                                request,
                                error: UiError::from_client_error(UiErrorContext::LoadKata, &err),
                            },
                        };
                        emit(&ui_tx, event);
                    });
                }
                BackendCommand::Submit {
                    request,
                    submission,
                } => {
                    let api = Arc::clone(&api);
                    let ui_tx = ui_tx.clone();
                    let task = tokio::spawn(async move {
                        let event = match api.submit_solution(&submission).await {
                            Ok(result) => UiEvent::SubmissionEvaluated { request, result },
                            Err(err) => UiEvent::SubmissionFailed {
                                request,
                                error: UiError::from_client_error(UiErrorContext::Submit, &err),
                            },
                        };
                        emit(&ui_tx, event);
                    });
                    submissions.insert(request, task);
                }
                BackendCommand::CancelSubmission { request } => {
                    match submissions.remove(&request) {
                        Some(task) => {
                            task.abort();
                            tracing::info!(%request, "submission aborted");
                        }
                        None => tracing::debug!(%request, "no in-flight submission to cancel"),
                    }
                }
            }
        }

        for (_, task) in submissions.drain() {
            task.abort();
        }
        tracing::info!("backend command channel closed; worker stopping");
    });
}

fn emit(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    if let Err(err) = ui_tx.try_send(event) {
        tracing::warn!("dropping backend->ui event: {err}");
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
