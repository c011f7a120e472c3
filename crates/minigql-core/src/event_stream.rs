use crate::Value;
use tokio::sync::mpsc;

/// The receiving end of a subscription: a stream of [`Value`] events.
///
/// A subscription resolver creates a channel with [`EventStream::channel`]
/// (or [`EventStream::unbounded`]), keeps the sender (typically moving it
/// into a spawned task) and returns the stream. The executor hands the
/// stream to its caller untouched.
///
/// The stream ends once every sender has been dropped and all buffered
/// events have been received. A caller that is no longer interested should
/// [`close()`](EventStream::close) the stream, or simply drop it; senders then
/// observe a send error and can stop producing.
pub struct EventStream {
    receiver: EventReceiver,
}

enum EventReceiver {
    Bounded(mpsc::Receiver<Value>),
    Unbounded(mpsc::UnboundedReceiver<Value>),
}

impl EventStream {
    /// Creates a bounded channel buffering up to `capacity` events. A
    /// capacity of zero is treated as one.
    pub fn channel(capacity: usize) -> (mpsc::Sender<Value>, Self) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (sender, Self::from(receiver))
    }

    /// Creates an unbounded channel.
    pub fn unbounded() -> (mpsc::UnboundedSender<Value>, Self) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (sender, Self::from(receiver))
    }

    /// Receives the next event, or `None` once the stream has ended.
    pub async fn recv(&mut self) -> Option<Value> {
        match &mut self.receiver {
            EventReceiver::Bounded(receiver) => receiver.recv().await,
            EventReceiver::Unbounded(receiver) => receiver.recv().await,
        }
    }

    /// Blocking variant of [`recv()`](EventStream::recv) for synchronous
    /// callers.
    ///
    /// # Panics
    ///
    /// Panics when called from within an asynchronous execution context, as
    /// tokio's `blocking_recv` does.
    pub fn blocking_recv(&mut self) -> Option<Value> {
        match &mut self.receiver {
            EventReceiver::Bounded(receiver) => receiver.blocking_recv(),
            EventReceiver::Unbounded(receiver) => receiver.blocking_recv(),
        }
    }

    /// Receives an event if one is immediately available.
    pub fn try_recv(&mut self) -> Option<Value> {
        match &mut self.receiver {
            EventReceiver::Bounded(receiver) => receiver.try_recv().ok(),
            EventReceiver::Unbounded(receiver) => receiver.try_recv().ok(),
        }
    }

    /// Closes the stream without dropping it. Buffered events can still be
    /// received; new sends fail.
    pub fn close(&mut self) {
        match &mut self.receiver {
            EventReceiver::Bounded(receiver) => receiver.close(),
            EventReceiver::Unbounded(receiver) => receiver.close(),
        }
    }
}

impl std::fmt::Debug for EventStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.receiver {
            EventReceiver::Bounded(_) => "bounded",
            EventReceiver::Unbounded(_) => "unbounded",
        };
        f.debug_struct("EventStream").field("kind", &kind).finish_non_exhaustive()
    }
}

impl From<mpsc::Receiver<Value>> for EventStream {
    fn from(receiver: mpsc::Receiver<Value>) -> Self {
        Self {
            receiver: EventReceiver::Bounded(receiver),
        }
    }
}

impl From<mpsc::UnboundedReceiver<Value>> for EventStream {
    fn from(receiver: mpsc::UnboundedReceiver<Value>) -> Self {
        Self {
            receiver: EventReceiver::Unbounded(receiver),
        }
    }
}
