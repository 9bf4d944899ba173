//! Status icons for CLI output

/// Status icons for different states
pub struct StatusIcon;

impl StatusIcon {
    /// Reference resolves / feature enabled
    pub const SUCCESS: &'static str = "✓";

    /// Reference does not resolve
    pub const ERROR: &'static str = "✗";

    /// Optional feature not requested
    pub const DISABLED: &'static str = "-";

    /// Get icon for a sub-resource reference
    pub fn get_reference_icon(resolved: bool) -> &'static str {
        if resolved {
            Self::SUCCESS
        } else {
            Self::ERROR
        }
    }

    /// Get status text for a sub-resource reference
    pub fn get_reference_text(resolved: bool) -> &'static str {
        if resolved {
            "Resolved"
        } else {
            "Dangling"
        }
    }

    /// Get icon for an optional gateway feature
    pub fn get_feature_icon(enabled: bool) -> &'static str {
        if enabled {
            Self::SUCCESS
        } else {
            Self::DISABLED
        }
    }
}
