//! The closed set of UI element kinds that can carry their own font.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The kinds of UI elements a [`FontTable`](crate::FontTable) can
/// resolve fonts for.
///
/// This is a closed enumeration: every kind always resolves to a font,
/// either its own override or the table's global fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// The title of an alert window.
    AlertTitle,
    /// The message body of an alert window.
    AlertMessage,
    /// The alert window itself.
    Alert,
    /// A text button.
    TextButton,
    /// A static label.
    Label,
    /// A combo box / drop-down.
    ComboBox,
    /// A popup menu.
    PopupMenu,
    /// A menu bar.
    MenuBar,
    /// The value popup shown while dragging a slider.
    SliderPopup,
}

impl WidgetKind {
    /// All widget kinds, in declaration order.
    pub const ALL: [WidgetKind; 9] = [
        WidgetKind::AlertTitle,
        WidgetKind::AlertMessage,
        WidgetKind::Alert,
        WidgetKind::TextButton,
        WidgetKind::Label,
        WidgetKind::ComboBox,
        WidgetKind::PopupMenu,
        WidgetKind::MenuBar,
        WidgetKind::SliderPopup,
    ];

    /// The kebab-case name used in host configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlertTitle => "alert-title",
            Self::AlertMessage => "alert-message",
            Self::Alert => "alert",
            Self::TextButton => "text-button",
            Self::Label => "label",
            Self::ComboBox => "combo-box",
            Self::PopupMenu => "popup-menu",
            Self::MenuBar => "menu-bar",
            Self::SliderPopup => "slider-popup",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| Error::unknown_widget_kind(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_round_trip_through_names() {
        for kind in WidgetKind::ALL {
            assert_eq!(kind.as_str().parse::<WidgetKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = "spin-box".parse::<WidgetKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown widget kind 'spin-box'");
    }

    #[test]
    fn test_closed_set_size() {
        assert_eq!(WidgetKind::ALL.len(), 9);
    }
}
