//! Sidebar UI state machine.
//!
//! All state the page keeps about the sidebar lives in [`UiState`]. Input
//! events map to transitions; a renderer reads the resulting fields to set
//! classes, inline styles and the `--sidebar-width` layout variable.
//!
//! ```text
//! pointer down ──► resizing ──pointer move──► width = clamp(x, min, max)
//!                     │
//!                pointer up ──► idle, transitions restored
//!
//! toggle ──► collapsed flipped; on narrow viewports body scroll locks
//!            while the sidebar covers the page
//! ```

use crate::config::SidebarConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    config: SidebarConfig,
    /// Current sidebar width in px.
    pub width: u32,
    pub collapsed: bool,
    /// A resize drag is in progress.
    pub resizing: bool,
    /// CSS transitions on the sidebar and content are disabled.
    pub transitions_suspended: bool,
    /// Page body may not scroll (sidebar open as an overlay).
    pub body_scroll_locked: bool,
    /// Whether the last seen viewport was narrow.
    pub was_narrow: bool,
}

impl UiState {
    pub fn new(config: SidebarConfig, viewport_width: u32) -> Self {
        let was_narrow = viewport_width <= config.mobile_breakpoint;
        Self {
            width: config.default_width,
            config,
            collapsed: false,
            resizing: false,
            transitions_suspended: false,
            body_scroll_locked: false,
            was_narrow,
        }
    }

    pub fn is_narrow(&self, viewport_width: u32) -> bool {
        viewport_width <= self.config.mobile_breakpoint
    }

    /// Grab the resize handle.
    pub fn on_pointer_down(&mut self) {
        self.resizing = true;
    }

    /// Drag to `client_x`. Ignored unless a drag is in progress.
    pub fn on_pointer_move(&mut self, client_x: i32) {
        if !self.resizing {
            return;
        }
        let x = client_x.max(0) as u32;
        self.width = x.clamp(self.config.min_width, self.config.max_width);
        self.transitions_suspended = true;
    }

    /// Release the handle. Ignored unless a drag is in progress.
    pub fn on_pointer_up(&mut self) {
        if !self.resizing {
            return;
        }
        self.resizing = false;
        self.transitions_suspended = false;
    }

    /// Toggle button pressed.
    pub fn on_toggle(&mut self, viewport_width: u32) {
        self.collapsed = !self.collapsed;
        if self.is_narrow(viewport_width) {
            self.body_scroll_locked = !self.collapsed;
        }
    }

    /// A sidebar link was followed.
    pub fn on_nav_click(&mut self, viewport_width: u32) {
        if self.is_narrow(viewport_width) {
            self.collapsed = true;
            self.body_scroll_locked = false;
        }
    }

    /// Window resized.
    pub fn on_viewport_resize(&mut self, viewport_width: u32) {
        let narrow = self.is_narrow(viewport_width);
        if self.was_narrow && !narrow {
            self.width = self.config.default_width;
        }
        self.was_narrow = narrow;
        if !narrow {
            self.body_scroll_locked = false;
        }
    }

    /// Text selection is blocked while dragging.
    pub fn selection_blocked(&self) -> bool {
        self.resizing
    }

    /// Horizontal offset of the resize handle, in px.
    pub fn handle_offset(&self) -> u32 {
        self.width
    }

    /// Layout variables consumed by the stylesheet.
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        vec![("--sidebar-width", format!("{}px", self.width))]
    }

    /// Classes on the sidebar element.
    pub fn sidebar_classes(&self) -> Vec<&'static str> {
        if self.collapsed { vec!["collapsed"] } else { vec![] }
    }

    /// Classes on the layout container.
    pub fn container_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.collapsed {
            classes.push("sidebar-collapsed");
        }
        if self.resizing {
            classes.push("resizing");
        }
        classes
    }
}
