use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub fn pretty_spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]") {
        pb.set_style(style);
    }

    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
