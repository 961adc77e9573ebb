use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::event_msg::Msg;

/// Runs effects off the synchronous update path. Each spawned task resolves
/// to exactly one `Msg`, delivered back through an unbounded channel the
/// event loop drains between updates.
///
/// There is deliberately no cancellation: a superseding action races its
/// predecessor and the last completion to arrive wins by overwriting state.
pub struct AsyncTaskManager {
    handles: Vec<JoinHandle<()>>,
    receiver: mpsc::UnboundedReceiver<Msg>,
    sender: mpsc::UnboundedSender<Msg>,
}

impl AsyncTaskManager {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            handles: Vec::new(),
            receiver,
            sender,
        }
    }

    pub fn spawn_task<F>(&mut self, future: F)
    where
        F: Future<Output = Msg> + Send + 'static,
    {
        let sender = self.sender.clone();
        let handle = tokio::spawn(async move {
            let msg = future.await;
            let _ = sender.send(msg);
        });
        self.handles.push(handle);
    }

    /// Drains all completions that have arrived since the last poll.
    pub fn poll_messages(&mut self) -> Vec<Msg> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.receiver.try_recv() {
            messages.push(msg);
        }
        messages
    }

    pub fn cleanup_completed_tasks(&mut self) {
        self.handles.retain(|handle| !handle.is_finished());
    }

    pub fn active_task_count(&self) -> usize {
        self.handles.len()
    }
}

impl Default for AsyncTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AsyncTaskManager {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}
