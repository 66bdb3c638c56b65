//! Progress display for deflation runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Generation [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// One bar advancing per deflation pass, labelled with the tile count
pub struct GenerationProgress {
    bar: ProgressBar,
}

impl GenerationProgress {
    /// Create a bar for `total` generations
    pub fn new(total: u32) -> Self {
        let bar = ProgressBar::new(u64::from(total));
        bar.set_style(GENERATION_STYLE.clone());
        Self { bar }
    }

    /// A bar that draws nothing, for quiet runs and tests
    pub fn hidden(total: u32) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(u64::from(total));
        Self { bar }
    }

    /// Report that `generation` finished with `tiles` tiles
    pub fn update(&self, generation: u32, tiles: usize) {
        self.bar.set_position(u64::from(generation));
        self.bar.set_message(format!("{tiles} tiles"));
    }

    /// Generations reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar with the final tile count
    pub fn finish(&self, tiles: usize) {
        self.bar.finish_with_message(format!("{tiles} tiles"));
    }
}
