//=========================================================================
// Navigation Queue
//=========================================================================
//
// Queue for screen navigation requests.
//
// Controllers hold a `Navigator` and request screens during input
// handling or updates. The switcher owns the `NavigationQueue` and
// applies pending requests in FIFO order once the current stimulus has
// been handled.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::Screen;

//=== Navigator ===========================================================

/// Capability to request a screen change.
///
/// Cheap to clone; injected into controllers at construction.
#[derive(Debug, Clone)]
pub struct Navigator {
    sender: Sender<Screen>,
}

impl Navigator {
    /// Queues `screen` to be entered once the switcher processes requests.
    ///
    /// If the queue is gone (switcher dropped) the request is logged and
    /// discarded.
    pub fn request(&self, screen: Screen) {
        trace!(target: "navigation", "Navigation to {:?} requested", screen);

        if self.sender.send(screen).is_err() {
            warn!(target: "navigation", "Navigation queue closed, dropping request for {:?}", screen);
        }
    }
}

//=== NavigationQueue =====================================================

/// Receiving end of navigation requests, owned by the switcher.
#[derive(Debug)]
pub struct NavigationQueue {
    sender: Sender<Screen>,
    receiver: Receiver<Screen>,
}

impl NavigationQueue {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Hands out a navigator feeding this queue.
    pub fn navigator(&self) -> Navigator {
        Navigator {
            sender: self.sender.clone(),
        }
    }

    /// Returns true if no requests are pending.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Returns the number of pending requests.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Takes every pending request, leaving the queue empty.
    ///
    /// Requests queued while the returned batch is being applied are left
    /// for the next call.
    pub fn take(&self) -> Vec<Screen> {
        self.receiver.try_iter().collect()
    }
}

impl Default for NavigationQueue {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
