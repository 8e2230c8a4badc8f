pub mod background;
pub mod input;
pub mod messages;
pub mod runtime;

pub use messages::BackgroundMessage;
pub use runtime::run_tui;

use crate::assistant::DetectiveAi;
use std::sync::mpsc;

/// What input handlers need to start background work
pub struct RuntimeContext<'a> {
    pub tx: &'a mpsc::Sender<messages::BackgroundMessage>,
    pub ai: &'a DetectiveAi,
}
