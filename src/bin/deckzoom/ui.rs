//! UI rendering and input handling for the review window.

use crate::constants::{BASE_CARD_TEXT_SIZE, BASE_LIST_TEXT_SIZE};
use crate::{Command, DeckZoomApp, ReviewSession};
use deckzoom::menu::{self, MenuEntry};
use deckzoom::{ContentView, ScreenState, WheelEvent, ZoomCommand, ZoomDirection};
use eframe::egui;

impl DeckZoomApp {
    /// Handles the zoom keyboard shortcuts (Ctrl+'+', Ctrl+'-', Ctrl+'0').
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        // Ctrl+'=' is accepted as Zoom In too: '+' needs Shift on most layouts.
        let zoom_in_alt =
            egui::KeyboardShortcut::new(egui::Modifiers::CTRL, egui::Key::Equals);

        let mut command = None;
        ctx.input_mut(|i| {
            if i.consume_shortcut(&menu::ZOOM_IN_SHORTCUT) || i.consume_shortcut(&zoom_in_alt) {
                command = Some(ZoomCommand::In);
            } else if i.consume_shortcut(&menu::ZOOM_OUT_SHORTCUT) {
                command = Some(ZoomCommand::Out);
            } else if i.consume_shortcut(&menu::ZOOM_RESET_SHORTCUT) {
                command = Some(ZoomCommand::Reset);
            }
        });

        if let Some(command) = command {
            self.run_command(Command::Zoom(command));
        }
    }

    /// Routes wheel events through the zoom decorator. Intercepted events are
    /// removed from the input queue; everything else is left for egui's own
    /// scroll handling.
    pub fn handle_wheel_input(&mut self, ctx: &egui::Context) {
        let mut requests = Vec::new();
        ctx.input_mut(|i| {
            i.events.retain(|event| {
                if let egui::Event::MouseWheel {
                    delta, modifiers, ..
                } = event
                {
                    let wheel = WheelEvent {
                        ctrl: modifiers.ctrl,
                        delta_y: delta.y,
                    };
                    if let Some(direction) = self.wheel.wheel_event(&wheel) {
                        requests.push(direction);
                        return false;
                    }
                }
                true
            });
        });

        for direction in requests {
            let command = match direction {
                ZoomDirection::In => ZoomCommand::In,
                ZoomDirection::Out => ZoomCommand::Out,
            };
            self.run_command(Command::Zoom(command));
        }
    }

    /// Renders the menu-bar model and dispatches the triggered command.
    pub fn show_menu_bar(&mut self, ctx: &egui::Context) {
        let mut clicked: Option<Command> = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                for menu in &self.menu_bar.menus {
                    ui.menu_button(&menu.title, |ui| {
                        Self::show_menu_entries(ui, ctx, &menu.entries, &mut clicked);
                    });
                }
            });
        });

        if let Some(command) = clicked {
            self.run_command(command);
        }
    }

    fn show_menu_entries(
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        entries: &[MenuEntry<Command>],
        clicked: &mut Option<Command>,
    ) {
        for entry in entries {
            match entry {
                MenuEntry::Item(item) => {
                    let mut button = egui::Button::new(&item.label);
                    if let Some(shortcut) = &item.shortcut {
                        button = button.shortcut_text(ctx.format_shortcut(shortcut));
                    }
                    if ui.add(button).clicked() {
                        *clicked = Some(item.command);
                        ui.close();
                    }
                }
                MenuEntry::Separator => {
                    ui.separator();
                }
                MenuEntry::Submenu(submenu) => {
                    ui.menu_button(&submenu.title, |ui| {
                        Self::show_menu_entries(ui, ctx, &submenu.entries, clicked);
                    });
                }
            }
        }
    }

    /// Renders the bottom status bar: current screen, zoom level, hint.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.screen.label());
                ui.separator();
                ui.label(format!("Zoom {:.0}%", self.pane.zoom_factor() * 100.0));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("Ctrl+Scroll or Ctrl+/- to zoom, Ctrl+0 to reset");
                });
            });
        });
    }

    /// Renders the central content pane for the current screen.
    pub fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.screen {
                    ScreenState::DeckBrowser => self.show_deck_browser(ui),
                    ScreenState::Overview => self.show_overview(ui),
                    ScreenState::Review => self.show_review(ui),
                    ScreenState::Startup | ScreenState::ProfileManager => {}
                });
        });
    }

    fn show_deck_browser(&mut self, ui: &mut egui::Ui) {
        let zoom = self.pane.zoom_factor();

        ui.add_space(8.0);
        ui.label(content_text("Decks", BASE_LIST_TEXT_SIZE * 1.4, zoom).strong());
        ui.separator();

        let mut open_deck = None;
        for (index, deck) in self.decks.iter().enumerate() {
            let row = format!("{}  ({} cards)", deck.name, deck.cards.len());
            if ui
                .selectable_label(
                    self.selected_deck == index,
                    content_text(&row, BASE_LIST_TEXT_SIZE, zoom),
                )
                .clicked()
            {
                open_deck = Some(index);
            }
        }

        if let Some(index) = open_deck {
            self.selected_deck = index;
            self.set_screen(ScreenState::Overview);
        }
    }

    fn show_overview(&mut self, ui: &mut egui::Ui) {
        let zoom = self.pane.zoom_factor();
        let deck_name = self.decks[self.selected_deck].name.clone();
        let card_count = self.decks[self.selected_deck].cards.len();

        ui.add_space(8.0);
        ui.label(content_text(&deck_name, BASE_LIST_TEXT_SIZE * 1.4, zoom).strong());
        ui.separator();
        ui.label(content_text(
            &format!("{card_count} cards to review"),
            BASE_LIST_TEXT_SIZE,
            zoom,
        ));
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.button("Study Now").clicked() {
                self.session = Some(ReviewSession {
                    remaining: (0..card_count).collect(),
                    answer_shown: false,
                });
                self.set_screen(ScreenState::Review);
            }
            if ui.button("Back to Decks").clicked() {
                self.set_screen(ScreenState::DeckBrowser);
            }
        });
    }

    fn show_review(&mut self, ui: &mut egui::Ui) {
        let zoom = self.pane.zoom_factor();

        let Some(session) = &self.session else {
            self.set_screen(ScreenState::Overview);
            return;
        };

        let Some(&card_index) = session.remaining.first() else {
            ui.add_space(8.0);
            ui.label(content_text(
                "Deck finished, well done.",
                BASE_LIST_TEXT_SIZE * 1.2,
                zoom,
            ));
            ui.add_space(12.0);
            if ui.button("Back to Overview").clicked() {
                self.session = None;
                self.set_screen(ScreenState::Overview);
            }
            return;
        };

        let answer_shown = session.answer_shown;
        let deck = &self.decks[self.selected_deck];
        let card = &deck.cards[card_index];

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label(content_text(&card.front, BASE_CARD_TEXT_SIZE, zoom));
            if answer_shown {
                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);
                ui.label(content_text(&card.back, BASE_CARD_TEXT_SIZE, zoom));
            }
        });

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            if let Some(session) = &mut self.session {
                if !answer_shown {
                    if ui.button("Show Answer").clicked() {
                        session.answer_shown = true;
                    }
                } else {
                    ui.horizontal(|ui| {
                        if ui.button("Again").clicked() {
                            session.remaining.rotate_left(1);
                            session.answer_shown = false;
                        }
                        if ui.button("Good").clicked() {
                            session.remaining.remove(0);
                            session.answer_shown = false;
                        }
                    });
                }
            }
        });
    }
}

/// Content text scaled by the pane's zoom factor.
fn content_text(text: &str, base_size: f32, zoom: f32) -> egui::RichText {
    egui::RichText::new(text).size(base_size * zoom)
}
