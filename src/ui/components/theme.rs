//! # Theme Configuration
//!
//! Centralized color and style configuration for the booking app. All visual
//! styling should use these constants so the palette stays consistent and
//! easy to change in one place.

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (buttons, tabs, hover states)
    pub interactive: InteractiveColors,
    /// Background and container colors
    pub layout: LayoutColors,
    /// Text colors
    pub typography: TypographyColors,
    /// Calendar-specific colors
    pub calendar: CalendarColors,
    /// Credit-balance display colors
    pub credits: CreditColors,
}

#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Primary action color (tabs, nav buttons, confirm buttons)
    pub accent: Color32,
    /// Inactive tab / disabled button background
    pub inactive_background: Color32,
    /// Disabled button text
    pub disabled_text: Color32,
    /// Destructive action color (remove session)
    pub destructive: Color32,
}

#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Window background
    pub window_background: Color32,
    /// Card and container background
    pub card_background: Color32,
    pub card_border: Color32,
    /// Header bar background
    pub header_background: Color32,
}

#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub white: Color32,
}

#[derive(Debug, Clone)]
pub struct CalendarColors {
    /// Fill of a reserved (non-interactive) slot block
    pub reserved_fill: Color32,
    pub reserved_border: Color32,
    pub reserved_text: Color32,
    /// Border of an available (clickable) slot
    pub available_border: Color32,
    pub available_fill: Color32,
    pub available_hover_fill: Color32,
    /// Day/time header text
    pub header_text: Color32,
    /// Grid line color
    pub grid_line: Color32,
}

#[derive(Debug, Clone)]
pub struct CreditColors {
    /// Credits-used figure
    pub used: Color32,
    /// Credits-remaining figure when healthy
    pub remaining_ok: Color32,
    /// Credits-remaining figure when running low (or negative)
    pub remaining_low: Color32,
    /// Badge background for per-session credit chips
    pub badge_background: Color32,
    pub badge_text: Color32,
}

/// The active theme - clean blue-and-gray scheme for the booking app
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        accent: Color32::from_rgb(37, 99, 235),
        inactive_background: Color32::from_rgb(243, 244, 246),
        disabled_text: Color32::from_rgb(156, 163, 175),
        destructive: Color32::from_rgb(220, 38, 38),
    },
    layout: LayoutColors {
        window_background: Color32::from_rgb(249, 250, 251),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(229, 231, 235),
        header_background: Color32::WHITE,
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(17, 24, 39),
        secondary: Color32::from_rgb(75, 85, 99),
        white: Color32::WHITE,
    },
    calendar: CalendarColors {
        reserved_fill: Color32::from_rgb(156, 163, 175),
        reserved_border: Color32::from_rgb(107, 114, 128),
        reserved_text: Color32::WHITE,
        available_border: Color32::from_rgb(37, 99, 235),
        available_fill: Color32::WHITE,
        available_hover_fill: Color32::from_rgb(239, 246, 255),
        header_text: Color32::from_rgb(55, 65, 81),
        grid_line: Color32::from_rgb(229, 231, 235),
    },
    credits: CreditColors {
        used: Color32::from_rgb(202, 138, 4),
        remaining_ok: Color32::from_rgb(22, 163, 74),
        remaining_low: Color32::from_rgb(220, 38, 38),
        badge_background: Color32::from_rgb(254, 249, 195),
        badge_text: Color32::from_rgb(133, 77, 14),
    },
};

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const ACCENT: Color32 = CURRENT_THEME.interactive.accent;
    pub const INACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.inactive_background;
    pub const DESTRUCTIVE: Color32 = CURRENT_THEME.interactive.destructive;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;

    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
}
