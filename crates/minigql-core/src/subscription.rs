//! Event streams that bridge a subscription producer to a single consumer.
//!
//! A subscription resolver calls [`event_channel`], hands the
//! [`EventSender`] to a producer task and returns the [`EventSource`] as a
//! [`Value::Stream`]. The executor takes the [`SubscriptionStream`] out of
//! the source and gives it to the consumer.
//!
//! The channel is bounded, so a slow consumer applies backpressure to the
//! producer. Dropping or [cancelling](SubscriptionStream::cancel) the
//! consumer's stream cancels the subscription: the producer's pending and
//! future sends fail with [`SendError::Cancelled`] and
//! [`EventSender::cancelled`] resolves.
//!
//! ```
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use minigql_core::Value;
//! use minigql_core::event_channel;
//!
//! let (sender, source) = event_channel(4);
//! tokio::spawn(async move {
//!     for i in 0..3 {
//!         if sender.send(i).await.is_err() {
//!             break;
//!         }
//!     }
//! });
//!
//! let mut stream = source.take().expect("first take");
//! let mut events = vec![];
//! while let Some(event) = stream.next_event().await {
//!     events.push(event);
//! }
//! assert_eq!(events, vec![Value::Int(0), Value::Int(1), Value::Int(2)]);
//! # }
//! ```

use crate::value::Value;
use parking_lot::Mutex;
use std::fmt;
use std::pin::Pin;
use std::sync::Arc;
use std::task::Context;
use std::task::Poll;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Channel capacity used when a producer has no better estimate.
pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 16;

/// Creates a bounded subscription channel holding up to `capacity`
/// undelivered events. A capacity of `0` is treated as `1`.
pub fn event_channel(capacity: usize) -> (EventSender, EventSource) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    let cancellation = CancellationToken::new();
    log::trace!("opened subscription channel with capacity {}", capacity.max(1));

    let sender = EventSender {
        tx,
        cancellation: cancellation.clone(),
    };
    let source = EventSource {
        stream: Arc::new(Mutex::new(Some(SubscriptionStream { rx, cancellation }))),
    };
    (sender, source)
}

/// Why an event could not be delivered.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SendError {
    #[error("subscription was cancelled by its consumer")]
    Cancelled,

    #[error("subscription channel is full")]
    Full,
}

// =============================================================================
// Producer side
// =============================================================================

/// The producer's half of a subscription channel.
///
/// Clones share the same channel. The stream closes once every sender has
/// been dropped and the buffered events have been drained.
#[derive(Clone, Debug)]
pub struct EventSender {
    tx: mpsc::Sender<Value>,
    cancellation: CancellationToken,
}

impl EventSender {
    /// Sends one event, waiting for buffer space if the channel is full.
    ///
    /// Fails with [`SendError::Cancelled`] as soon as the consumer cancels,
    /// including while waiting for space.
    pub async fn send(&self, event: impl Into<Value>) -> Result<(), SendError> {
        let event = event.into();
        tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => Err(SendError::Cancelled),
            result = self.tx.send(event) => result.map_err(|_| SendError::Cancelled),
        }
    }

    /// Sends one event without waiting.
    pub fn try_send(&self, event: impl Into<Value>) -> Result<(), SendError> {
        if self.cancellation.is_cancelled() {
            return Err(SendError::Cancelled);
        }
        self.tx.try_send(event.into()).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => SendError::Full,
            mpsc::error::TrySendError::Closed(_) => SendError::Cancelled,
        })
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled() || self.tx.is_closed()
    }

    /// Resolves once the consumer has cancelled or dropped its stream.
    pub async fn cancelled(&self) {
        self.cancellation.cancelled().await;
    }
}

// =============================================================================
// Consumer side
// =============================================================================

/// A take-once handle to the consumer's half of a subscription channel.
///
/// This is what a subscription resolver returns (as [`Value::Stream`]).
/// Clones share the same underlying stream, which can be taken out exactly
/// once. Dropping every handle without taking the stream cancels the
/// subscription.
#[derive(Clone)]
pub struct EventSource {
    stream: Arc<Mutex<Option<SubscriptionStream>>>,
}

impl EventSource {
    /// Takes the stream out of this source. Returns `None` if it has already
    /// been taken through this handle or any of its clones.
    pub fn take(&self) -> Option<SubscriptionStream> {
        self.stream.lock().take()
    }

    pub fn is_taken(&self) -> bool {
        self.stream.lock().is_none()
    }

    /// Returns `true` if both handles refer to the same channel.
    pub fn ptr_eq(&self, other: &EventSource) -> bool {
        Arc::ptr_eq(&self.stream, &other.stream)
    }
}

impl fmt::Debug for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource")
            .field("taken", &self.is_taken())
            .finish()
    }
}

/// The consumer's stream of subscription events.
///
/// Events arrive in the order they were sent. Once [`next_event`]
/// returns `None` the stream is closed for good.
///
/// [`next_event`]: SubscriptionStream::next_event
#[derive(Debug)]
pub struct SubscriptionStream {
    rx: mpsc::Receiver<Value>,
    cancellation: CancellationToken,
}

impl SubscriptionStream {
    /// Waits for the next event. Returns `None` once every sender is gone
    /// (or the stream was cancelled) and no buffered events remain.
    pub async fn next_event(&mut self) -> Option<Value> {
        self.rx.recv().await
    }

    /// Cancels the subscription. Events already buffered can still be
    /// drained; nothing new will be accepted.
    pub fn cancel(&mut self) {
        if !self.cancellation.is_cancelled() {
            log::debug!("subscription stream cancelled by consumer");
        }
        self.cancellation.cancel();
        self.rx.close();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}

impl futures_util::Stream for SubscriptionStream {
    type Item = Value;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Value>> {
        self.rx.poll_recv(cx)
    }
}

impl Drop for SubscriptionStream {
    fn drop(&mut self) {
        self.cancellation.cancel();
    }
}
