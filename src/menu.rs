//! Declarative menu-bar model.
//!
//! The main window owns a [`MenuBar`] value and renders it each frame;
//! [`install_zoom_menu`] splices the zoom entries into it once, at startup.
//! The model is generic over the command type so the window can mix its own
//! commands with [`ZoomCommand`]s in one bar.

use eframe::egui::{Key, KeyboardShortcut, Modifiers};

pub const VIEW_MENU_TITLE: &str = "View";
pub const TOOLS_MENU_TITLE: &str = "Tools";
pub const ZOOM_MENU_TITLE: &str = "Zoom";

pub const ZOOM_IN_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::CTRL, Key::Plus);
pub const ZOOM_OUT_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::CTRL, Key::Minus);
pub const ZOOM_RESET_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::CTRL, Key::Num0);

/// The three zoom actions exposed through the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomCommand {
    In,
    Out,
    Reset,
}

/// One actionable menu entry.
#[derive(Debug, Clone)]
pub struct MenuItem<C> {
    pub label: String,
    pub command: C,
    pub shortcut: Option<KeyboardShortcut>,
}

#[derive(Debug, Clone)]
pub enum MenuEntry<C> {
    Item(MenuItem<C>),
    Separator,
    Submenu(Menu<C>),
}

/// A titled menu: a top-level entry in the bar, or a submenu.
#[derive(Debug, Clone)]
pub struct Menu<C> {
    pub title: String,
    pub entries: Vec<MenuEntry<C>>,
}

impl<C> Menu<C> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn push_item(
        &mut self,
        label: impl Into<String>,
        command: C,
        shortcut: Option<KeyboardShortcut>,
    ) {
        self.entries.push(MenuEntry::Item(MenuItem {
            label: label.into(),
            command,
            shortcut,
        }));
    }

    pub fn push_separator(&mut self) {
        self.entries.push(MenuEntry::Separator);
    }

    pub fn push_submenu(&mut self, submenu: Menu<C>) {
        self.entries.push(MenuEntry::Submenu(submenu));
    }

    fn submenu(&self, title: &str) -> Option<&Menu<C>> {
        self.entries.iter().find_map(|entry| match entry {
            MenuEntry::Submenu(menu) if menu.title == title => Some(menu),
            _ => None,
        })
    }
}

/// The whole menu bar, in display order.
#[derive(Debug, Clone, Default)]
pub struct MenuBar<C> {
    pub menus: Vec<Menu<C>>,
}

impl<C> MenuBar<C> {
    pub fn new() -> Self {
        Self { menus: Vec::new() }
    }

    pub fn push_menu(&mut self, menu: Menu<C>) {
        self.menus.push(menu);
    }

    pub fn menu(&self, title: &str) -> Option<&Menu<C>> {
        self.menus.iter().find(|menu| menu.title == title)
    }

    /// Inserts a menu immediately before the menu with `anchor_title`,
    /// appending when no such menu exists. Returns the inserted menu.
    pub fn insert_before(&mut self, anchor_title: &str, menu: Menu<C>) -> &mut Menu<C> {
        let index = self
            .menus
            .iter()
            .position(|existing| existing.title == anchor_title)
            .unwrap_or(self.menus.len());
        self.menus.insert(index, menu);
        &mut self.menus[index]
    }
}

/// Ensures a "View" menu exists before "Tools" and populates its "Zoom"
/// submenu with the three zoom actions and their shortcuts.
///
/// Idempotent: a second call finds the existing submenu and changes nothing.
pub fn install_zoom_menu<C: From<ZoomCommand>>(bar: &mut MenuBar<C>) {
    let view = match bar
        .menus
        .iter()
        .position(|menu| menu.title == VIEW_MENU_TITLE)
    {
        Some(index) => &mut bar.menus[index],
        None => bar.insert_before(TOOLS_MENU_TITLE, Menu::new(VIEW_MENU_TITLE)),
    };

    if view.submenu(ZOOM_MENU_TITLE).is_some() {
        return;
    }

    let mut zoom = Menu::new(ZOOM_MENU_TITLE);
    zoom.push_item("Zoom In", ZoomCommand::In.into(), Some(ZOOM_IN_SHORTCUT));
    zoom.push_item("Zoom Out", ZoomCommand::Out.into(), Some(ZOOM_OUT_SHORTCUT));
    zoom.push_separator();
    zoom.push_item("Reset", ZoomCommand::Reset.into(), Some(ZOOM_RESET_SHORTCUT));
    view.push_submenu(zoom);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_with(titles: &[&str]) -> MenuBar<ZoomCommand> {
        let mut bar = MenuBar::new();
        for title in titles {
            bar.push_menu(Menu::new(*title));
        }
        bar
    }

    fn titles(bar: &MenuBar<ZoomCommand>) -> Vec<&str> {
        bar.menus.iter().map(|menu| menu.title.as_str()).collect()
    }

    #[test]
    fn view_menu_is_inserted_before_tools() {
        let mut bar = bar_with(&["File", "Tools", "Help"]);
        install_zoom_menu(&mut bar);
        assert_eq!(titles(&bar), ["File", "View", "Tools", "Help"]);
    }

    #[test]
    fn view_menu_is_appended_without_tools() {
        let mut bar = bar_with(&["File"]);
        install_zoom_menu(&mut bar);
        assert_eq!(titles(&bar), ["File", "View"]);
    }

    #[test]
    fn install_is_idempotent() {
        let mut bar = bar_with(&["Tools"]);
        install_zoom_menu(&mut bar);
        install_zoom_menu(&mut bar);

        assert_eq!(titles(&bar), ["View", "Tools"]);
        let view = bar.menu(VIEW_MENU_TITLE).unwrap();
        let zoom_submenus = view
            .entries
            .iter()
            .filter(|entry| matches!(entry, MenuEntry::Submenu(_)))
            .count();
        assert_eq!(zoom_submenus, 1);
    }

    #[test]
    fn existing_view_menu_is_reused() {
        let mut bar: MenuBar<ZoomCommand> = MenuBar::new();
        let mut view = Menu::new(VIEW_MENU_TITLE);
        view.push_separator();
        bar.push_menu(view);

        install_zoom_menu(&mut bar);

        assert_eq!(titles(&bar), [VIEW_MENU_TITLE]);
        let view = bar.menu(VIEW_MENU_TITLE).unwrap();
        assert!(view.submenu(ZOOM_MENU_TITLE).is_some());
    }

    #[test]
    fn zoom_actions_carry_their_shortcuts() {
        let mut bar = bar_with(&["Tools"]);
        install_zoom_menu(&mut bar);

        let zoom = bar
            .menu(VIEW_MENU_TITLE)
            .and_then(|view| view.submenu(ZOOM_MENU_TITLE))
            .unwrap();

        let items: Vec<&MenuItem<ZoomCommand>> = zoom
            .entries
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Item(item) => Some(item),
                _ => None,
            })
            .collect();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].command, ZoomCommand::In);
        assert_eq!(items[0].shortcut, Some(ZOOM_IN_SHORTCUT));
        assert_eq!(items[1].command, ZoomCommand::Out);
        assert_eq!(items[1].shortcut, Some(ZOOM_OUT_SHORTCUT));
        assert_eq!(items[2].command, ZoomCommand::Reset);
        assert_eq!(items[2].shortcut, Some(ZOOM_RESET_SHORTCUT));
    }
}
