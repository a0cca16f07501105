use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataState<T> {
    Loading,
    Loaded(T),
    Error(String),
}

/// Holds whatever the most recent poll delivered. Results carry no ordering, so
/// a late response simply overwrites an earlier one.
pub struct AsyncData<T> {
    state: DataState<T>,
    receiver: UnboundedReceiver<Result<T, String>>,
}

impl<T> AsyncData<T> {
    pub fn new(receiver: UnboundedReceiver<Result<T, String>>) -> Self {
        Self {
            state: DataState::Loading,
            receiver,
        }
    }

    /// Applies every result that is already queued. Returns whether the state changed.
    pub fn try_update(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.receiver.try_recv() {
                Ok(result) => {
                    self.apply(result);
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.is_loading() {
                        self.state = DataState::Error("Data fetch failed: channel disconnected".to_string());
                        changed = true;
                    }
                    break;
                }
            }
        }
        changed
    }

    /// Waits for the next result. Returns `false` once every sender is gone.
    pub async fn wait_update(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(result) => {
                self.apply(result);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, result: Result<T, String>) {
        self.state = match result {
            Ok(data) => DataState::Loaded(data),
            Err(e) => DataState::Error(e),
        };
    }

    pub fn state(&self) -> &DataState<T> {
        &self.state
    }

    pub fn get_data(&self) -> Option<&T> {
        match &self.state {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DataState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            DataState::Error(e) => Some(e),
            _ => None,
        }
    }
}
