use crate::constants::GREETING_PREFIX;

/// An immutable list label. Identity is its text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DisplayItem {
    text: String,
}

impl DisplayItem {
    pub fn new(text: impl Into<String>) -> Self {
        DisplayItem { text: text.into() }
    }

    /// Text as shown by a greeting label
    pub fn greeting(&self) -> String {
        format!("{}!", self.text)
    }
}

/// Generate the static greeting list: `Hello Android #0` .. `#count-1`
pub fn greetings(count: usize) -> Vec<DisplayItem> {
    (0..count)
        .map(|i| DisplayItem::new(format!("{}{}", GREETING_PREFIX, i)))
        .collect()
}

/// 8-bit RGBA color. Alpha 0 means "draw nothing".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const RED: Rgba = Rgba::new(255, 0, 0, 255);
    pub const GREEN: Rgba = Rgba::new(0, 255, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Composite over an opaque black terminal background
    pub fn over_black(&self) -> (u8, u8, u8) {
        let scale = |c: u8| ((c as u16 * self.a as u16 + 127) / 255) as u8;
        (scale(self.r), scale(self.g), scale(self.b))
    }
}

/// State reported by the image loader. Opaque to the components that show it.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ImageStatus {
    #[default]
    Idle,
    Loading {
        received: usize,
    },
    Loaded {
        bytes: usize,
        content_type: Option<String>,
    },
    Failed(String),
}

impl ImageStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ImageStatus::Loaded { .. })
    }

    /// Short description for the status line
    pub fn describe(&self) -> String {
        match self {
            ImageStatus::Idle => String::from("image: idle"),
            ImageStatus::Loading { received } => format!("image: loading ({} bytes)", received),
            ImageStatus::Loaded { bytes, content_type } => format!(
                "image: {} bytes{}",
                bytes,
                content_type
                    .as_deref()
                    .map(|t| format!(" ({})", t))
                    .unwrap_or_default()
            ),
            ImageStatus::Failed(message) => format!("image: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greetings_are_numbered_from_zero() {
        let items = greetings(101);
        assert_eq!(items.len(), 101);
        assert_eq!(items[0].greeting(), "Hello Android #0!");
        assert_eq!(items[100].greeting(), "Hello Android #100!");
    }

    #[test]
    fn test_over_black_scales_by_alpha() {
        assert_eq!(Rgba::RED.over_black(), (255, 0, 0));
        assert_eq!(Rgba::new(255, 0, 0, 0).over_black(), (0, 0, 0));
        assert_eq!(Rgba::new(200, 100, 0, 128).over_black(), (100, 50, 0));
    }
}
