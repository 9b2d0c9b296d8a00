/// Read-only view of the host's scroll container.
///
/// The virtualizer never holds UI objects; it queries geometry through this trait whenever it
/// needs it. All values are in pixels.
pub trait Viewport {
    /// Current scroll position of the scrolling ancestor. May be negative during overscroll
    /// bounce on touch devices.
    fn scroll_top(&self) -> i64;

    /// Visible height of the scrolling ancestor.
    fn client_height(&self) -> u32;

    /// Full scrollable height of the scrolling ancestor.
    fn scroll_height(&self) -> u64;

    /// Position of the list container relative to its scrolling ancestor.
    fn container_top(&self) -> i64;
}

/// A plain snapshot of viewport geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportMetrics {
    pub scroll_top: i64,
    pub client_height: u32,
    pub scroll_height: u64,
    pub container_top: i64,
}

impl ViewportMetrics {
    pub fn new(client_height: u32) -> Self {
        Self {
            client_height,
            ..Self::default()
        }
    }

    pub fn with_scroll_top(mut self, scroll_top: i64) -> Self {
        self.scroll_top = scroll_top;
        self
    }

    pub fn with_scroll_height(mut self, scroll_height: u64) -> Self {
        self.scroll_height = scroll_height;
        self
    }

    pub fn with_container_top(mut self, container_top: i64) -> Self {
        self.container_top = container_top;
        self
    }

    /// Captures the current geometry of any viewport.
    pub fn capture(viewport: &impl Viewport) -> Self {
        Self {
            scroll_top: viewport.scroll_top(),
            client_height: viewport.client_height(),
            scroll_height: viewport.scroll_height(),
            container_top: viewport.container_top(),
        }
    }
}

impl Viewport for ViewportMetrics {
    fn scroll_top(&self) -> i64 {
        self.scroll_top
    }

    fn client_height(&self) -> u32 {
        self.client_height
    }

    fn scroll_height(&self) -> u64 {
        self.scroll_height
    }

    fn container_top(&self) -> i64 {
        self.container_top
    }
}

/// `true` when the container is at (or bounced above) its top edge.
pub fn is_scrolled_to_top(viewport: &impl Viewport) -> bool {
    viewport.scroll_top() <= 0
}

/// `true` when the remaining scrollable distance fits inside the visible area.
pub fn is_scrolled_to_bottom(viewport: &impl Viewport) -> bool {
    let scroll_top = u64::try_from(viewport.scroll_top()).unwrap_or(0);
    viewport.scroll_height().saturating_sub(scroll_top) <= u64::from(viewport.client_height())
}
