//! Inbox channel types.
//!
//! Every spawned handler owns a clone of the sender and reports its result
//! as a `UiEvent`. The runtime drains the receiver once per loop iteration.

use tokio::sync::mpsc;

use crate::events::UiEvent;

pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;
