//! Image list rows and the avatar placeholder they carry

use crate::models::ImageStatus;

pub fn item_label(index: usize) -> String {
    format!("Item #{}", index)
}

/// Glyph drawn inside the circular avatar for a given loader status.
/// The loader owns its loading and error presentation; we only pick a glyph.
pub fn avatar_glyph(status: &ImageStatus) -> &'static str {
    match status {
        ImageStatus::Idle => "( )",
        ImageStatus::Loading { .. } => "(…)",
        ImageStatus::Loaded { .. } => "(@)",
        ImageStatus::Failed(_) => "(x)",
    }
}

/// Avatar width in terminal cells for a target size in dp.
/// One cell per ten dp, at least the glyph width.
pub fn avatar_cells(size_dp: u16) -> u16 {
    (size_dp / 10).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_label() {
        assert_eq!(item_label(0), "Item #0");
        assert_eq!(item_label(99), "Item #99");
    }

    #[test]
    fn test_avatar_follows_status() {
        assert_eq!(avatar_glyph(&ImageStatus::Idle), "( )");
        assert_eq!(
            avatar_glyph(&ImageStatus::Loaded { bytes: 10, content_type: None }),
            "(@)"
        );
        assert_eq!(avatar_glyph(&ImageStatus::Failed("boom".into())), "(x)");
    }

    #[test]
    fn test_avatar_cells() {
        assert_eq!(avatar_cells(50), 5);
        assert_eq!(avatar_cells(10), 3);
    }
}
