//! Resting place for [ShutdownSignal] & [ShutdownTrigger]: a cooperative cancellation token.
//!
//! The signal is a channel on which nothing is ever sent: dropping the [ShutdownTrigger]
//! disconnects it, which wakes up anyone blocked in a `select!` on [ShutdownSignal::receiver()].

use crossbeam_channel::{Receiver, Sender, TryRecvError};


/// Creates a connected pair of [ShutdownTrigger] & [ShutdownSignal]
pub fn shutdown_channel() -> (ShutdownTrigger, ShutdownSignal) {
    let (sender, receiver) = crossbeam_channel::bounded(0);
    (ShutdownTrigger { sender }, ShutdownSignal { receiver })
}

/// The owning side: consuming it (or dropping it) signals the shutdown
#[derive(Debug)]
pub struct ShutdownTrigger {
    sender: Sender<()>,
}

impl ShutdownTrigger {

    /// Signals all the [ShutdownSignal]s created with this trigger
    pub fn trigger(self) {
        drop(self.sender)
    }

}

/// The observing side. Cheap to clone
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    receiver: Receiver<()>,
}

impl ShutdownSignal {

    /// A signal that is never triggered
    pub fn never() -> Self {
        let (trigger, signal) = shutdown_channel();
        std::mem::forget(trigger);
        signal
    }

    pub fn is_triggered(&self) -> bool {
        matches!(self.receiver.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// To be used in `crossbeam_channel::select!` -- a `recv()` on it only returns
    /// (with an error) after the shutdown was triggered
    pub fn receiver(&self) -> &Receiver<()> {
        &self.receiver
    }

}
