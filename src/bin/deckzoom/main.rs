#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod constants;
mod decks;
mod ui;

use clap::Parser;
use constants::WINDOW_SIZE;
use deckzoom::menu::{self, Menu};
use deckzoom::{
    ContentView, JsonConfigStore, MenuBar, ScreenState, WheelEvent, WheelHandler, ZoomCommand,
    ZoomController, ZoomSettings, ZoomWheel, install_zoom_menu,
};
use decks::{Deck, builtin_decks};
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use std::path::PathBuf;

/// Minimal flashcard review window hosting the zoom controller.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the zoom settings file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,
}

/// The central content pane of the main window.
///
/// Holds the raw content scale. Kept independent of the window system's
/// display scale (egui's pixels-per-point); the factor only multiplies the
/// content text sizes.
pub struct ContentPane {
    zoom: f32,
}

impl ContentView for ContentPane {
    fn zoom_factor(&self) -> f32 {
        self.zoom
    }

    fn set_zoom_factor(&mut self, factor: f32) {
        self.zoom = factor;
    }
}

/// Receives the wheel events the zoom decorator does not intercept. Those
/// events stay in egui's input queue, so its scroll areas handle them; there
/// is nothing left to do here.
pub struct PaneScroll;

impl WheelHandler for PaneScroll {
    fn wheel_event(&mut self, _event: &WheelEvent) {}
}

/// Commands the menu bar can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Zoom(ZoomCommand),
    ShowDeckBrowser,
    OpenConfigFolder,
}

impl From<ZoomCommand> for Command {
    fn from(command: ZoomCommand) -> Self {
        Command::Zoom(command)
    }
}

/// One review pass over the selected deck.
pub struct ReviewSession {
    /// Card indices still to answer, front of the vec first.
    pub remaining: Vec<usize>,
    pub answer_shown: bool,
}

pub struct DeckZoomApp {
    decks: Vec<Deck>,
    selected_deck: usize,
    screen: ScreenState,
    session: Option<ReviewSession>,
    pane: ContentPane,
    controller: ZoomController<JsonConfigStore>,
    wheel: ZoomWheel<PaneScroll>,
    menu_bar: MenuBar<Command>,
    config_path: PathBuf,
    toasts: Toasts,
}

impl DeckZoomApp {
    fn new(config_path: PathBuf) -> Self {
        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let controller = match ZoomController::new(JsonConfigStore::new(&config_path)) {
            Ok(controller) => controller,
            Err(err) => {
                log::warn!("falling back to default zoom settings: {err}");
                toasts.add(Toast {
                    kind: ToastKind::Error,
                    text: format!("Could not load zoom settings: {err}").into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(10.0)
                        .show_icon(true),
                    ..Default::default()
                });
                ZoomController::with_settings(
                    JsonConfigStore::new(&config_path),
                    ZoomSettings::default(),
                )
            }
        };

        let mut menu_bar = MenuBar::new();
        let mut decks_menu = Menu::new("Decks");
        decks_menu.push_item("Deck Browser", Command::ShowDeckBrowser, None);
        menu_bar.push_menu(decks_menu);
        let mut tools_menu = Menu::new(menu::TOOLS_MENU_TITLE);
        tools_menu.push_item("Open Config Folder", Command::OpenConfigFolder, None);
        menu_bar.push_menu(tools_menu);
        install_zoom_menu(&mut menu_bar);

        let mut app = Self {
            decks: builtin_decks(),
            selected_deck: 0,
            screen: ScreenState::Startup,
            session: None,
            pane: ContentPane { zoom: 1.0 },
            controller,
            wheel: ZoomWheel::new(PaneScroll),
            menu_bar,
            config_path,
            toasts,
        };
        app.set_screen(ScreenState::DeckBrowser);
        app
    }

    /// Screen-state transition; applies the persisted zoom for the new screen.
    pub fn set_screen(&mut self, screen: ScreenState) {
        log::debug!(
            "screen change: {} -> {}",
            self.screen.label(),
            screen.label()
        );
        self.screen = screen;
        self.controller.apply_zoom(self.screen, &mut self.pane);
    }

    pub fn run_command(&mut self, command: Command) {
        match command {
            Command::Zoom(zoom) => self.run_zoom_command(zoom),
            Command::ShowDeckBrowser => {
                self.session = None;
                self.set_screen(ScreenState::DeckBrowser);
            }
            Command::OpenConfigFolder => {
                if let Some(dir) = self.config_path.parent()
                    && let Err(err) = open::that(dir)
                {
                    log::warn!("could not open {}: {err}", dir.display());
                }
            }
        }
    }

    fn run_zoom_command(&mut self, command: ZoomCommand) {
        let result = match command {
            ZoomCommand::In => self.controller.zoom_in(self.screen, &mut self.pane),
            ZoomCommand::Out => self.controller.zoom_out(self.screen, &mut self.pane),
            ZoomCommand::Reset => self.controller.reset_zoom(self.screen, &mut self.pane),
        };

        if let Err(err) = result {
            log::warn!("zoom settings not saved: {err}");
            self.toasts.add(Toast {
                kind: ToastKind::Error,
                text: format!("Zoom settings not saved: {err}").into(),
                options: ToastOptions::default()
                    .duration_in_seconds(8.0)
                    .show_icon(true),
                ..Default::default()
            });
        }
    }
}

impl eframe::App for DeckZoomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);
        self.handle_wheel_input(ctx);

        self.show_menu_bar(ctx);
        self.show_status_bar(ctx);
        self.show_central_panel(ctx);

        self.toasts.show(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let args = Args::parse();
    let config_path = match args.config {
        Some(path) => path,
        None => JsonConfigStore::default_path().unwrap_or_else(|err| {
            log::warn!("{err}; keeping zoom settings in the working directory");
            PathBuf::from("deckzoom-zoom.json")
        }),
    };
    log::info!("zoom settings file: {}", config_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Deck Zoom",
        options,
        Box::new(move |_cc| Ok(Box::new(DeckZoomApp::new(config_path)))),
    )
}
