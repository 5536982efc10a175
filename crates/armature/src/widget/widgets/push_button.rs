//! Push button widget implementation.

use armature_core::{Object, ObjectId, Signal};

use crate::widget::{SizeHint, SizePolicy, SizePolicyPair, Widget, WidgetBase};

use super::label::CHAR_WIDTH;

/// A standard clickable button.
///
/// The host's pointer dispatch drives the press cycle through
/// [`press`](Self::press) and [`release`](Self::release);
/// [`click`](Self::click) performs both for keyboard activation and tests.
/// Disabled buttons drop the gesture silently.
///
/// # Signals
///
/// - `pressed(())`: Emitted when the button is pressed down
/// - `released(())`: Emitted when the button is released
/// - `clicked(())`: Emitted on a completed press/release cycle
pub struct PushButton {
    /// Widget base.
    base: WidgetBase,

    /// Button caption.
    text: String,

    /// Whether the button is currently held down.
    down: bool,

    /// Signal emitted when the button is pressed down.
    pub pressed: Signal<()>,

    /// Signal emitted when the button is released.
    pub released: Signal<()>,

    /// Signal emitted on a completed click.
    pub clicked: Signal<()>,
}

impl PushButton {
    /// Create a button with the given caption.
    pub fn new(text: impl Into<String>) -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_focusable(true);
        base.set_size_policy(SizePolicyPair::new(SizePolicy::Preferred, SizePolicy::Fixed));

        Self {
            base,
            text: text.into(),
            down: false,
            pressed: Signal::new(),
            released: Signal::new(),
            clicked: Signal::new(),
        }
    }

    /// Get the caption.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the caption.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.base.update();
    }

    /// Check if the button is currently held down.
    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Press the button down.
    pub fn press(&mut self) {
        if self.down || !self.base.is_effectively_enabled() {
            return;
        }
        self.down = true;
        self.base.update();
        self.pressed.emit(());
    }

    /// Release the button.
    ///
    /// A release completes the click when the button was down.
    pub fn release(&mut self) {
        if !self.down {
            return;
        }
        self.down = false;
        self.base.update();
        self.released.emit(());
        self.clicked.emit(());
    }

    /// Perform a full press/release cycle.
    pub fn click(&mut self) {
        if !self.base.is_effectively_enabled() {
            return;
        }
        self.press();
        self.release();
    }
}

impl Object for PushButton {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for PushButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let width = self.text.chars().count() as f32 * CHAR_WIDTH + 16.0;
        SizeHint::from_dimensions(width.max(24.0), 24.0)
            .with_minimum_dimensions(24.0, 24.0)
    }
}

static_assertions::assert_impl_all!(PushButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use armature_core::init_global_registry;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_click_cycle() {
        setup();
        let mut button = PushButton::new("+");
        let clicks = Arc::new(AtomicU32::new(0));
        let clicks_clone = clicks.clone();
        button.clicked.connect(move |_| {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        });

        button.click();
        button.click();
        assert_eq!(clicks.load(Ordering::SeqCst), 2);
        assert!(!button.is_down());
    }

    #[test]
    fn test_press_release_ordering() {
        setup();
        let mut button = PushButton::new("-");
        let log = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let log_clone = log.clone();
        button.pressed.connect(move |_| log_clone.lock().push("pressed"));
        let log_clone = log.clone();
        button.released.connect(move |_| log_clone.lock().push("released"));
        let log_clone = log.clone();
        button.clicked.connect(move |_| log_clone.lock().push("clicked"));

        button.press();
        assert!(button.is_down());
        button.release();

        assert_eq!(*log.lock(), vec!["pressed", "released", "clicked"]);
    }

    #[test]
    fn test_disabled_button_ignores_clicks() {
        setup();
        let mut button = PushButton::new("+");
        button.set_enabled(false);

        let clicks = Arc::new(AtomicU32::new(0));
        let clicks_clone = clicks.clone();
        button.clicked.connect(move |_| {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        });

        button.click();
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_release_without_press_is_noop() {
        setup();
        let mut button = PushButton::new("+");
        let clicks = Arc::new(AtomicU32::new(0));
        let clicks_clone = clicks.clone();
        button.clicked.connect(move |_| {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        });

        button.release();
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }
}
