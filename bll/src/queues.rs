//! The outbound queues: a bounded one for [Event]s and another for [Command]s.
//!
//! Pushing is the only blocking operation of the log processing: when consumers lag behind, the
//! [Emitter] waits for room -- unless the [ShutdownSignal] is (or gets) triggered, in which case the
//! pending item is dropped and [QueueError::Interrupted] is reported. Nothing is retried.

use common::shutdown::ShutdownSignal;
use crossbeam_channel::{select, Receiver, Sender};
use model::{command::Command, events::Event};


/// What a line handler produces
#[derive(Debug, Clone, PartialEq)]
pub enum Emission {
    Event(Event),
    Command(Command),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("push interrupted by the shutdown signal")]
    Interrupted,
    #[error("the queue has no consumers left")]
    Disconnected,
}

/// The consuming side of the queues
#[derive(Debug)]
pub struct Queues {
    pub events: Receiver<Event>,
    pub commands: Receiver<Command>,
}

/// The producing side of the queues
#[derive(Debug, Clone)]
pub struct Emitter {
    events: Sender<Event>,
    commands: Sender<Command>,
    shutdown: ShutdownSignal,
}

/// Creates the queues, each holding up to `capacity` items
pub fn channels(capacity: usize, shutdown: ShutdownSignal) -> (Emitter, Queues) {
    let (events_sender, events_receiver) = crossbeam_channel::bounded(capacity);
    let (commands_sender, commands_receiver) = crossbeam_channel::bounded(capacity);
    (Emitter { events: events_sender, commands: commands_sender, shutdown },
     Queues { events: events_receiver, commands: commands_receiver })
}

impl Emitter {

    /// Routes `emission` to its queue, blocking while it is full
    pub fn emit(&self, emission: Emission) -> Result<(), QueueError> {
        match emission {
            Emission::Event(event) => push(&self.events, event, &self.shutdown),
            Emission::Command(command) => push(&self.commands, command, &self.shutdown),
        }
    }

}

fn push<T>(sender: &Sender<T>, item: T, shutdown: &ShutdownSignal) -> Result<(), QueueError> {
    // `select!` picks randomly among ready operations: an already triggered signal must win over a queue with room
    if shutdown.is_triggered() {
        return Err(QueueError::Interrupted)
    }
    select! {
        send(sender, item) -> result => result.map_err(|_| QueueError::Disconnected),
        recv(shutdown.receiver()) -> _ => Err(QueueError::Interrupted),
    }
}
