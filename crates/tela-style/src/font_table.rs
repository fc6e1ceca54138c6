//! Widget-kind to font-name resolution.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::widget_kind::WidgetKind;

/// Default global font, chosen for mixed Latin/CJK interfaces.
pub const DEFAULT_FONT: &str = "STZhongsong";

/// Maps widget kinds to font names, with a single global fallback.
///
/// A kind without an override resolves to the global font; setting and
/// clearing overrides affects only that kind. Resolution is a pure read.
///
/// A `FontTable` is typically created once at application setup, shared
/// across widgets behind an `Arc`, and mutated only during setup. The
/// interior locks make sharing safe, but there is no notification when
/// the table changes: widgets pick up new fonts on their next render
/// pass.
///
/// # Example
///
/// ```
/// use tela_style::{FontTable, WidgetKind};
///
/// let table = FontTable::new("STZhongsong");
/// table.set_kind_font(WidgetKind::TextButton, "Arial");
///
/// assert_eq!(table.resolve(WidgetKind::TextButton), "Arial");
/// assert_eq!(table.resolve(WidgetKind::Label), "STZhongsong");
/// ```
#[derive(Debug)]
pub struct FontTable {
    /// The fallback font for kinds with no override.
    global: RwLock<String>,
    /// Per-kind overrides; absence means "use global".
    overrides: RwLock<HashMap<WidgetKind, String>>,
}

impl FontTable {
    /// Create a table where every kind resolves to `global`.
    pub fn new(global: impl Into<String>) -> Self {
        Self {
            global: RwLock::new(global.into()),
            overrides: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve the font name for a widget kind.
    ///
    /// Returns the kind's override if one is set, the global font
    /// otherwise. Always returns a non-empty name provided the table was
    /// populated with non-empty names.
    pub fn resolve(&self, kind: WidgetKind) -> String {
        if let Some(name) = self.overrides.read().get(&kind) {
            return name.clone();
        }
        self.global.read().clone()
    }

    /// Get the global fallback font name.
    pub fn global_font(&self) -> String {
        self.global.read().clone()
    }

    /// Change the global fallback for every kind without an override.
    pub fn set_global_font(&self, name: impl Into<String>) {
        let name = name.into();
        tracing::debug!(target: "tela_style::font_table", font = %name, "set global font");
        *self.global.write() = name;
    }

    /// Give one widget kind its own font.
    pub fn set_kind_font(&self, kind: WidgetKind, name: impl Into<String>) {
        let name = name.into();
        tracing::debug!(target: "tela_style::font_table", %kind, font = %name, "set kind font");
        self.overrides.write().insert(kind, name);
    }

    /// Remove a kind's override, reverting it to the global fallback.
    pub fn clear_kind_font(&self, kind: WidgetKind) {
        tracing::debug!(target: "tela_style::font_table", %kind, "clear kind font");
        self.overrides.write().remove(&kind);
    }

    /// Check whether a kind currently has its own font.
    pub fn has_kind_font(&self, kind: WidgetKind) -> bool {
        self.overrides.read().contains_key(&kind)
    }
}

impl Default for FontTable {
    fn default() -> Self {
        Self::new(DEFAULT_FONT)
    }
}

static_assertions::assert_impl_all!(FontTable: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_to_global_by_default() {
        let table = FontTable::new("STZhongsong");
        for kind in WidgetKind::ALL {
            assert_eq!(table.resolve(kind), "STZhongsong");
        }
    }

    #[test]
    fn test_override_then_clear() {
        let table = FontTable::new("STZhongsong");

        table.set_kind_font(WidgetKind::TextButton, "Arial");
        assert_eq!(table.resolve(WidgetKind::TextButton), "Arial");
        assert_eq!(table.resolve(WidgetKind::Label), "STZhongsong");

        table.clear_kind_font(WidgetKind::TextButton);
        assert_eq!(table.resolve(WidgetKind::TextButton), "STZhongsong");
    }

    #[test]
    fn test_overrides_are_isolated_per_kind() {
        let table = FontTable::new("Global");
        table.set_kind_font(WidgetKind::MenuBar, "Menlo");
        table.set_kind_font(WidgetKind::ComboBox, "Courier");

        table.clear_kind_font(WidgetKind::MenuBar);

        assert_eq!(table.resolve(WidgetKind::MenuBar), "Global");
        assert_eq!(table.resolve(WidgetKind::ComboBox), "Courier");
    }

    #[test]
    fn test_global_change_leaves_overrides_alone() {
        let table = FontTable::new("Old");
        table.set_kind_font(WidgetKind::Alert, "AlertFont");

        table.set_global_font("New");

        assert_eq!(table.resolve(WidgetKind::Alert), "AlertFont");
        assert_eq!(table.resolve(WidgetKind::Label), "New");
    }

    #[test]
    fn test_repeated_resolution_is_stable() {
        let table = FontTable::default();
        table.set_kind_font(WidgetKind::PopupMenu, "Helvetica");
        assert_eq!(table.resolve(WidgetKind::PopupMenu), "Helvetica");
        assert_eq!(table.resolve(WidgetKind::PopupMenu), "Helvetica");
        assert!(table.has_kind_font(WidgetKind::PopupMenu));
    }
}
