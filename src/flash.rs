use std::time::Duration;

use kuchiki::{ElementData, NodeDataRef};

use crate::page::{self, Page};
use crate::progress::Progress;

pub const FADE_DELAY: Duration = Duration::from_millis(4000);
pub const REMOVE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy)]
pub struct DismissSchedule {
    pub fade_delay: Duration,
    pub remove_delay: Duration,
}

impl DismissSchedule {
    pub fn new(fade_delay: Duration, remove_delay: Duration) -> Self {
        Self {
            fade_delay,
            remove_delay,
        }
    }
}

impl Default for DismissSchedule {
    fn default() -> Self {
        Self::new(FADE_DELAY, REMOVE_DELAY)
    }
}

// The banners present when the page was parsed. Banners inserted later
// are never picked up.
pub struct FlashBatch {
    messages: Vec<NodeDataRef<ElementData>>,
}

impl FlashBatch {
    pub fn collect(page: &Page, flash_class: &str) -> Self {
        Self {
            messages: page.flash_messages(flash_class),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn fade_all(&self) {
        for message in &self.messages {
            page::set_opacity(message, "0");
        }
    }

    pub fn remove_all(&self) {
        for message in &self.messages {
            // Tolerate banners some other pass already pulled out of the tree.
            if message.as_node().parent().is_some() {
                message.as_node().detach();
            }
        }
    }
}

// One shared timer pair for the whole batch: every banner fades at
// +fade_delay and is removed at +fade_delay+remove_delay. No cancellation.
pub async fn settle(batch: &FlashBatch, schedule: &DismissSchedule, progress: &Progress) {
    if batch.is_empty() {
        return;
    }

    progress.set_stage(format!("fading {} banner(s)", batch.len()));
    tokio::time::sleep(schedule.fade_delay).await;
    batch.fade_all();

    progress.set_stage("removing banners");
    tokio::time::sleep(schedule.remove_delay).await;
    batch.remove_all();
}
