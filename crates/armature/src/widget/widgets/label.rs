//! Label widget implementation.

use armature_core::{Object, ObjectId, Signal};

use crate::widget::{SizeHint, SizePolicy, SizePolicyPair, Widget, WidgetBase};

/// Approximate width of one character cell, used for size estimation.
pub(crate) const CHAR_WIDTH: f32 = 10.0;

/// Default label height.
const LINE_HEIGHT: f32 = 20.0;

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlign {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center horizontally.
    Center,
    /// Align to the right edge.
    Right,
}

/// A read-only text display widget.
///
/// Labels size themselves from their text unless a fixed width is set, in
/// which case the size hint stays constant no matter what the text says —
/// the property the labeled sliders rely on to avoid visible resizing.
///
/// # Signals
///
/// - `text_changed(String)`: Emitted when the text changes
pub struct Label {
    /// Widget base.
    base: WidgetBase,

    /// Displayed text.
    text: String,

    /// Horizontal alignment.
    horizontal_align: HorizontalAlign,

    /// Fixed display width, if pinned.
    fixed_width: Option<f32>,

    /// Signal emitted when the text changes.
    pub text_changed: Signal<String>,
}

impl Label {
    /// Create a label with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_size_policy(SizePolicyPair::new(SizePolicy::Preferred, SizePolicy::Fixed));

        Self {
            base,
            text: text.into(),
            horizontal_align: HorizontalAlign::default(),
            fixed_width: None,
            text_changed: Signal::new(),
        }
    }

    /// Get the text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let new_text = text.into();
        if self.text != new_text {
            self.text = new_text;
            self.base.update();
            self.text_changed.emit(self.text.clone());
        }
    }

    /// Set text using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Get the horizontal alignment.
    pub fn horizontal_align(&self) -> HorizontalAlign {
        self.horizontal_align
    }

    /// Set the horizontal alignment.
    pub fn set_horizontal_align(&mut self, align: HorizontalAlign) {
        if self.horizontal_align != align {
            self.horizontal_align = align;
            self.base.update();
        }
    }

    /// Set alignment using builder pattern.
    pub fn with_horizontal_align(mut self, align: HorizontalAlign) -> Self {
        self.horizontal_align = align;
        self
    }

    /// Get the fixed width, if pinned.
    pub fn fixed_width(&self) -> Option<f32> {
        self.fixed_width
    }

    /// Pin the label to a fixed display width.
    ///
    /// Pass `None` to size from the text again.
    pub fn set_fixed_width(&mut self, width: Option<f32>) {
        if self.fixed_width != width {
            self.fixed_width = width;
            self.base.update();
        }
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new("")
    }
}

impl Object for Label {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for Label {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let width = match self.fixed_width {
            Some(width) => width,
            None => (self.text.chars().count() as f32 * CHAR_WIDTH).max(CHAR_WIDTH),
        };
        let mut hint = SizeHint::from_dimensions(width, LINE_HEIGHT);
        if self.fixed_width.is_some() {
            hint = hint
                .with_minimum_dimensions(width, LINE_HEIGHT)
                .with_maximum(crate::widget::Size::new(width, LINE_HEIGHT));
        }
        hint
    }
}

static_assertions::assert_impl_all!(Label: Send, Sync);
