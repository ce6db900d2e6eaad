use tokio::sync::watch;

use crate::{
    log,
    style::{StyleRepository, UserStyle},
};

/// Observer registered on the style repository when a renderer is built.
/// The style current at registration is delivered by the first poll.
pub struct WatchCallbacks {
    rx: watch::Receiver<UserStyle>,
    closed: bool,
}

impl WatchCallbacks {
    pub fn new(repository: &impl StyleRepository) -> Self {
        let mut rx = repository.subscribe();
        rx.mark_changed();
        Self { rx, closed: false }
    }

    /// Latest style published since the previous poll. Intermediate styles
    /// published between two polls are coalesced.
    pub fn poll(&mut self) -> Option<UserStyle> {
        if self.closed {
            return None;
        }
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            Ok(false) => None,
            Err(_) => {
                println!("{} Style repository went away", log::WARN);
                self.closed = true;
                None
            }
        }
    }
}
