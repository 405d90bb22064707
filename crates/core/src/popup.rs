//! Popup window sizing and placement

/// Width of the authorization popup in CSS pixels
pub const POPUP_WIDTH: u32 = 1000;

/// Height of the authorization popup in CSS pixels
pub const POPUP_HEIGHT: u32 = 1000;

/// Window name passed to `window.open`
pub const POPUP_TITLE: &str = "Authorization";

/// How often the opener checks whether the popup was closed
pub const POLL_INTERVAL_MS: u32 = 100;

/// Dimensions and screen offset of the opener window
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub inner_width: f64,
    pub inner_height: f64,
    pub screen_left: f64,
    pub screen_top: f64,
}

/// Placement of a popup relative to the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopupGeometry {
    pub width: u32,
    pub height: u32,
    pub left: i32,
    pub top: i32,
}

impl PopupGeometry {
    /// Center a `width` x `height` popup over the opener.
    ///
    /// The screen offsets are added so the popup lands on the same monitor as
    /// the opener on multi-screen setups. Offsets may go negative when the
    /// opener is smaller than the popup.
    #[allow(clippy::cast_possible_truncation)]
    pub fn centered(viewport: Viewport, width: u32, height: u32) -> Self {
        let left = viewport.inner_width / 2.0 - f64::from(width) / 2.0 + viewport.screen_left;
        let top = viewport.inner_height / 2.0 - f64::from(height) / 2.0 + viewport.screen_top;
        Self {
            width,
            height,
            left: left.round() as i32,
            top: top.round() as i32,
        }
    }

    /// Feature string for `window.open`
    pub fn features(&self) -> String {
        format!(
            "scrollbars=yes,width={},height={},top={},left={}",
            self.width, self.height, self.top, self.left
        )
    }
}
