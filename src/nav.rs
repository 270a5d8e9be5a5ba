//! Navigation bar state
//!
//! Two booleans: whether the page has scrolled past the threshold, and
//! whether the mobile menu is open. Body scrolling is locked while the menu
//! is open.

use crate::config::NavConfig;

#[derive(Debug, Clone)]
pub struct NavState {
    threshold_px: f64,
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            threshold_px: config.scroll_threshold_px,
            scrolled: false,
            menu_open: false,
        }
    }

    /// Record the vertical scroll offset. Returns the "scrolled" flag.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.scrolled = scroll_y > self.threshold_px;
        self.scrolled
    }

    /// Flip the menu. Returns whether it is now open.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        tracing::debug!(open = self.menu_open, "nav menu toggled");
        self.menu_open
    }

    /// A menu link was followed
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Value for `document.body.style.overflow`
    pub fn body_overflow(&self) -> &'static str {
        if self.menu_open {
            "hidden"
        } else {
            ""
        }
    }
}
