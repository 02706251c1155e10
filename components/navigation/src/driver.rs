//! Message passing between a running navigation item and the code around it.
//!
//! ```text
//! content.values() ──forward_values──┐
//!                                    ├──▶ NavigationMailbox ──▶ NavigationItem::run ──▶ observer
//! destination (pop) ──handle─────────┘
//! ```
//!
//! The item processes messages strictly in arrival order and stops once
//! every [`NavigationHandle`] has been dropped.

use async_channel::{Receiver, Sender};
use futures::{Stream, StreamExt, future, pin_mut};

use crate::item::{NavigationContent, NavigationItem};
use crate::state::{Cancelled, NavigationError, NavigationMessage, NavigationState};

/// Sending side: clone it into anything that needs to talk to the item.
#[derive(Debug)]
pub struct NavigationHandle<V> {
    sender: Sender<NavigationMessage<V>>,
}

impl<V> Clone for NavigationHandle<V> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

/// Receiving side, consumed by [`NavigationItem::run`].
#[derive(Debug)]
pub struct NavigationMailbox<V> {
    receiver: Receiver<NavigationMessage<V>>,
}

/// Creates a connected handle and mailbox.
#[must_use]
pub fn channel<V>() -> (NavigationHandle<V>, NavigationMailbox<V>) {
    let (sender, receiver) = async_channel::unbounded();
    (NavigationHandle { sender }, NavigationMailbox { receiver })
}

impl<V> NavigationHandle<V> {
    /// Sends a message to the item.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Closed`] if the item stopped running.
    pub async fn send(&self, message: NavigationMessage<V>) -> Result<(), NavigationError> {
        self.sender
            .send(message)
            .await
            .map_err(|_| NavigationError::Closed)
    }

    /// Delivers a value as if the content's stream had produced it.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Closed`] if the item stopped running.
    pub fn send_value(&self, value: V) -> Result<(), NavigationError> {
        self.post(NavigationMessage::Value(value))
    }

    /// Signals that the value stream was cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Closed`] if the item stopped running.
    pub fn cancel(&self) -> Result<(), NavigationError> {
        self.post(NavigationMessage::Cancelled)
    }

    /// Deactivates the item's link, popping its destination.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Closed`] if the item stopped running.
    pub fn deactivate_link(&self) -> Result<(), NavigationError> {
        self.post(NavigationMessage::Deactivate)
    }

    /// Pops the navigation flow back to the item behind this handle.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Closed`] if the item stopped running.
    pub fn pop_to_self(&self) -> Result<(), NavigationError> {
        self.deactivate_link()
    }

    // The channel is unbounded, so only a closed mailbox can refuse a message.
    fn post(&self, message: NavigationMessage<V>) -> Result<(), NavigationError> {
        self.sender
            .try_send(message)
            .map_err(|_| NavigationError::Closed)
    }
}

/// Forwards a value stream into the item's mailbox.
///
/// Stops after forwarding `Err(Cancelled)`, when the stream ends, or when the
/// item is no longer running.
///
/// # Errors
///
/// Returns [`NavigationError::Closed`] if the mailbox was dropped.
pub async fn forward_values<V, S>(values: S, handle: &NavigationHandle<V>) -> Result<(), NavigationError>
where
    S: Stream<Item = Result<V, Cancelled>>,
{
    pin_mut!(values);
    while let Some(next) = values.next().await {
        match next {
            Ok(value) => handle.send(NavigationMessage::Value(value)).await?,
            Err(Cancelled) => {
                handle.send(NavigationMessage::Cancelled).await?;
                break;
            }
        }
    }
    Ok(())
}

impl<C: NavigationContent> NavigationItem<C> {
    /// Processes messages until every handle is dropped, then returns the item.
    ///
    /// `observer` sees the state after each applied transition.
    pub async fn run(
        mut self,
        mailbox: NavigationMailbox<C::Value>,
        mut observer: impl FnMut(&NavigationState<C::Value>),
    ) -> Self {
        while let Ok(message) = mailbox.receiver.recv().await {
            if self.apply(message).is_some() {
                observer(self.state());
            }
        }
        tracing::debug!("navigation mailbox closed");
        self
    }

    /// Runs the item against its own content's value stream.
    ///
    /// `handle` must belong to `mailbox`; it is dropped once the stream is
    /// exhausted, so the item stops when every other clone is gone too.
    pub async fn drive(
        self,
        handle: NavigationHandle<C::Value>,
        mailbox: NavigationMailbox<C::Value>,
        observer: impl FnMut(&NavigationState<C::Value>),
    ) -> Self {
        let values = self.content().values();
        let forward = async move {
            if let Err(error) = forward_values(values, &handle).await {
                tracing::debug!(%error, "stopped forwarding navigation values");
            }
        };
        let ((), item) = future::join(forward, self.run(mailbox, observer)).await;
        item
    }
}
