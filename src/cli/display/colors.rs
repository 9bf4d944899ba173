//! Color theme for CLI output

use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub error: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            error: TableColor::Red,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Get color for a sub-resource reference
    pub fn get_reference_color(&self, resolved: bool) -> TableColor {
        if resolved {
            self.success
        } else {
            self.error
        }
    }

    /// Get color for an optional gateway feature (firewall, private frontend)
    pub fn get_feature_color(&self, enabled: bool) -> TableColor {
        if enabled {
            self.info
        } else {
            self.muted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = ColorTheme::default();
        assert_eq!(theme.success, TableColor::Green);
        assert_eq!(theme.warning, TableColor::Yellow);
        assert_eq!(theme.error, TableColor::Red);
    }

    #[test]
    fn test_get_reference_color() {
        let theme = ColorTheme::default();
        assert_eq!(theme.get_reference_color(true), TableColor::Green);
        assert_eq!(theme.get_reference_color(false), TableColor::Red);
    }

    #[test]
    fn test_get_feature_color() {
        let theme = ColorTheme::default();
        assert_eq!(theme.get_feature_color(true), TableColor::Cyan);
        assert_eq!(theme.get_feature_color(false), TableColor::DarkGrey);
    }
}
