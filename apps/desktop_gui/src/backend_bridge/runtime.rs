//! Backend worker: owns the tokio runtime and the classification client.

use std::thread;

use client_core::ClassifierClient;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Spawns the worker thread that drives classification calls off the UI
/// thread. The worker exits when the command channel disconnects.
pub fn spawn(endpoint: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || run_worker(endpoint, cmd_rx, ui_tx));
}

fn run_worker(endpoint: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                format!("backend worker startup failure: failed to build runtime: {err}"),
            )));
            tracing::error!("failed to build backend runtime: {err}");
            return;
        }
    };

    runtime.block_on(async move {
        let client = ClassifierClient::new(endpoint);
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::Classify { raw_input } => {
                    tracing::info!(bytes = raw_input.len(), "backend: classify");
                    match client.classify(&raw_input).await {
                        Ok(response) => {
                            let _ = ui_tx.try_send(UiEvent::ClassifyOk(response));
                        }
                        Err(err) => {
                            tracing::error!("backend: classify failed: {err}");
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                UiErrorContext::Classify,
                                format!("API call failed: {err}"),
                            )));
                        }
                    }
                }
            }
        }
    });
}
