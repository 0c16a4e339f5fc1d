use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
#[cfg(any(feature = "ssr", test))]
use std::time::Duration;
#[cfg(any(feature = "ssr", test))]
use thiserror::Error;
#[cfg(any(feature = "ssr", test))]
use tokio::sync::{mpsc, oneshot};

use crate::contact::ContactMessage;

/// Deliveries waiting for the inbox worker before senders start to block.
#[cfg(any(feature = "ssr", test))]
pub const DELIVERY_QUEUE: usize = 64;

/// Result of handing a message to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Delivered { id: u64 },
    Rejected { reason: String },
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub id: u64,
    pub received: DateTime<Utc>,
    pub message: ContactMessage,
}

/// In-memory, bounded store of received contact messages.
///
/// Ids are handed out in increasing order, so the smallest id is always the
/// oldest message and is the one evicted when the inbox is full.
#[derive(Debug)]
pub struct Inbox {
    messages: DashMap<u64, ReceivedMessage>,
    next_id: AtomicU64,
    capacity: usize,
}

impl Inbox {
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: DashMap::new(),
            next_id: AtomicU64::new(1),
            capacity: capacity.max(1),
        }
    }

    pub fn deliver(&self, message: ContactMessage) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        while self.messages.len() >= self.capacity {
            let oldest = self.messages.iter().map(|e| *e.key()).min();
            match oldest {
                Some(oldest) => {
                    self.messages.remove(&oldest);
                    log::debug!("inbox full, dropped message {oldest}");
                }
                None => break,
            }
        }
        log::info!(
            "contact message {id} from {} <{}> ({} chars)",
            message.name,
            message.email,
            message.message.chars().count()
        );
        self.messages.insert(
            id,
            ReceivedMessage {
                id,
                received: Utc::now(),
                message,
            },
        );
        id
    }

    #[cfg(test)]
    pub fn get(&self, id: u64) -> Option<ReceivedMessage> {
        self.messages.get(&id).map(|m| m.clone())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All messages, oldest first.
    #[cfg(test)]
    pub fn messages(&self) -> Vec<ReceivedMessage> {
        let mut all = self
            .messages
            .iter()
            .map(|e| e.value().clone())
            .collect::<Vec<_>>();
        all.sort_by_key(|m| m.id);
        all
    }
}

#[cfg(any(feature = "ssr", test))]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InboxError {
    #[error("inbox worker has stopped")]
    Closed,
}

#[cfg(any(feature = "ssr", test))]
struct Delivery {
    message: ContactMessage,
    ack: oneshot::Sender<u64>,
}

/// Hands messages to a background task that owns the [`Inbox`].
///
/// A delivery counts as timed out when the worker hasn't stored it within
/// `timeout`, including time spent waiting for room in the queue.
#[cfg(any(feature = "ssr", test))]
#[derive(Debug, Clone)]
pub struct InboxService {
    tx: mpsc::Sender<Delivery>,
    timeout: Duration,
}

#[cfg(any(feature = "ssr", test))]
impl InboxService {
    /// Spawns the worker on the current tokio runtime.
    pub fn spawn(inbox: Inbox, timeout: Duration) -> Self {
        let (tx, mut rx) = mpsc::channel::<Delivery>(DELIVERY_QUEUE);
        tokio::spawn(async move {
            while let Some(Delivery { message, ack }) = rx.recv().await {
                let id = inbox.deliver(message);
                if ack.send(id).is_err() {
                    log::warn!("sender of contact message {id} went away before the ack");
                }
            }
            log::debug!("inbox worker stopped");
        });
        Self { tx, timeout }
    }

    pub async fn deliver(&self, message: ContactMessage) -> Result<DeliveryStatus, InboxError> {
        let (ack, stored) = oneshot::channel();
        let round_trip = async {
            self.tx
                .send(Delivery { message, ack })
                .await
                .map_err(|_| InboxError::Closed)?;
            stored.await.map_err(|_| InboxError::Closed)
        };
        match tokio::time::timeout(self.timeout, round_trip).await {
            Ok(Ok(id)) => Ok(DeliveryStatus::Delivered { id }),
            Ok(Err(e)) => Err(e),
            Err(_) => Ok(DeliveryStatus::TimedOut),
        }
    }
}
