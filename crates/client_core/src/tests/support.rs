use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use shared::{domain::ActionKind, protocol::EventPayload};
use tokio::sync::{mpsc, oneshot};

use crate::{error::TransportError, transport::EventTransport};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Reply {
    Status(StatusCode),
    Disconnect,
}

/// Answers every submission the same way and remembers what it was sent.
pub(crate) struct FixedTransport {
    reply: Reply,
    pub(crate) sent: Arc<Mutex<Vec<(ActionKind, EventPayload)>>>,
}

impl FixedTransport {
    pub(crate) fn new(reply: Reply) -> Self {
        Self {
            reply,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl EventTransport for FixedTransport {
    async fn submit(
        &self,
        kind: ActionKind,
        payload: &EventPayload,
    ) -> Result<StatusCode, TransportError> {
        self.sent
            .lock()
            .expect("sent lock")
            .push((kind, payload.clone()));
        match self.reply {
            Reply::Status(status) => Ok(status),
            Reply::Disconnect => Err(TransportError::Disconnected("scripted".into())),
        }
    }
}

pub(crate) struct PendingSubmission {
    pub(crate) kind: ActionKind,
    pub(crate) payload: EventPayload,
    reply: oneshot::Sender<Reply>,
}

impl PendingSubmission {
    pub(crate) fn answer(self, reply: Reply) {
        let _ = self.reply.send(reply);
    }
}

/// Parks every submission until the test answers it. Dropping a pending
/// submission unanswered reads as a lost connection.
pub(crate) struct GatedTransport {
    pending: mpsc::UnboundedSender<PendingSubmission>,
}

impl GatedTransport {
    pub(crate) fn new() -> (Self, mpsc::UnboundedReceiver<PendingSubmission>) {
        let (pending, rx) = mpsc::unbounded_channel();
        (Self { pending }, rx)
    }
}

#[async_trait]
impl EventTransport for GatedTransport {
    async fn submit(
        &self,
        kind: ActionKind,
        payload: &EventPayload,
    ) -> Result<StatusCode, TransportError> {
        let (reply, answer) = oneshot::channel();
        self.pending
            .send(PendingSubmission {
                kind,
                payload: payload.clone(),
                reply,
            })
            .map_err(|_| TransportError::Disconnected("test harness gone".into()))?;
        match answer.await {
            Ok(Reply::Status(status)) => Ok(status),
            Ok(Reply::Disconnect) | Err(_) => {
                Err(TransportError::Disconnected("no response".into()))
            }
        }
    }
}
