use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub struct Progress {
    enabled: bool,
    stage: ProgressBar,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self {
                enabled: false,
                stage: ProgressBar::hidden(),
            };
        }

        let stage = ProgressBar::new_spinner();
        stage.set_style(
            ProgressStyle::with_template("{spinner} {msg}  [{elapsed_precise}]").unwrap(),
        );
        stage.enable_steady_tick(Duration::from_millis(80));

        Self {
            enabled: true,
            stage,
        }
    }

    pub fn set_stage(&self, msg: impl Into<String>) {
        if !self.enabled {
            return;
        }
        self.stage.set_message(msg.into());
    }

    pub fn finish(&self) {
        if !self.enabled {
            return;
        }
        self.stage.finish_with_message("done");
    }
}
