use iced::futures::StreamExt;
use iced::Task;
use iced_runtime::{task::into_stream, Action};

/// A state machine driven by messages, with tasks producing follow-up
/// messages.
pub trait Updateable {
    type Message: Clone + Send + 'static;
    fn update(&mut self, message: Self::Message) -> Task<Self::Message>;
}

/// Drives a state's update loop outside of the iced runtime, feeding the
/// messages produced by tasks back into the state.
pub struct Sandbox<S: Updateable> {
    state: S,
    /// Every message that went through the update loop, in order.
    pub seen: Vec<S::Message>,
}

impl<S: Updateable> Sandbox<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            seen: Vec::new(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub async fn update(&mut self, message: S::Message) {
        self.seen.push(message.clone());
        let task = self.state.update(message);
        if let Some(mut stream) = into_stream(task) {
            while let Some(action) = stream.next().await {
                if let Action::Output(msg) = action {
                    Box::pin(self.update(msg)).await;
                }
            }
        }
    }
}
