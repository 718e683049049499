//! Main application UI and state management.
//! Menu screen for creating/opening decks, and the review screen where due
//! flashcards are shown, answered and graded.

use chrono::{Local, NaiveDate};
use eframe::egui;
use std::path::PathBuf;
use study_buddy::models::{Deck, ReviewSession};
use study_buddy::storage;
use study_buddy::{AppConfig, SessionError};
use tracing::{error, info, warn};

/// Application screen states
#[derive(Default, PartialEq)]
enum AppScreen {
    #[default]
    Menu,
    Review,
}

/// Modal message shown on top of the current screen
struct Message {
    title: String,
    body: String,
}

/// Main application state
pub struct StudyBuddyApp {
    deck: Deck,
    deck_path: PathBuf,
    /// Working date handed to the scheduler. Starts at the local date.
    today: NaiveDate,

    current_screen: AppScreen,
    session: ReviewSession,
    grade_entry: String,

    show_add_dialog: bool,
    new_front: String,
    new_back: String,

    message: Option<Message>,
    show_confirmation_dialog: bool,
    allowed_to_close: bool,
}

impl eframe::App for StudyBuddyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.current_screen {
            AppScreen::Menu => self.render_menu_screen(ctx),
            AppScreen::Review => self.render_review_screen(ctx),
        }

        if self.show_add_dialog {
            self.render_add_dialog(ctx);
        }

        if let Some(message) = &self.message {
            let mut dismissed = false;
            egui::Window::new(message.title.as_str())
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&message.body);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            if dismissed {
                self.message = None;
            }
        }

        // Handle window close requests with confirmation dialog
        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_confirmation_dialog = true;
        }

        if self.show_confirmation_dialog {
            egui::Window::new("Do you want to quit?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = false;
                        }

                        if ui.button("Yes").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        }
    }
}

impl StudyBuddyApp {
    /// Creates the app with the default deck loaded, or an empty one if it
    /// cannot be read.
    pub fn new(config: AppConfig) -> Self {
        let mut message = None;
        let deck = match storage::load_deck(&config.deck_path) {
            Ok(deck) => deck,
            Err(e) => {
                error!(path = %config.deck_path.display(), "failed to load deck: {}", e);
                message = Some(Message {
                    title: "Could not open deck".to_string(),
                    body: e.to_string(),
                });
                Deck::default()
            }
        };

        Self {
            deck,
            deck_path: config.deck_path,
            today: Local::now().date_naive(),
            current_screen: AppScreen::Menu,
            session: ReviewSession::default(),
            grade_entry: String::new(),
            show_add_dialog: false,
            new_front: String::new(),
            new_back: String::new(),
            message,
            show_confirmation_dialog: false,
            allowed_to_close: false,
        }
    }

    fn show_message(&mut self, title: &str, body: impl Into<String>) {
        self.message = Some(Message {
            title: title.to_string(),
            body: body.into(),
        });
    }

    /// Persists the current deck, reporting failures in a dialog.
    fn save(&mut self) -> bool {
        match storage::save_deck(&self.deck, &self.deck_path) {
            Ok(()) => true,
            Err(e) => {
                error!(path = %self.deck_path.display(), "failed to save deck: {}", e);
                self.show_message("Save failed", e.to_string());
                false
            }
        }
    }

    /// Renders the menu with deck creation and browsing
    fn render_menu_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.heading("Flashcards");
                ui.label(format!("Current deck: {}", self.deck_path.display()));
                ui.add_space(20.0);

                if ui.button("Create New Deck").clicked() {
                    self.create_new_deck();
                }
                ui.add_space(10.0);
                if ui.button("Browse Decks").clicked() {
                    self.browse_decks();
                }
            });
        });
    }

    /// Renders the review screen for the open deck
    fn render_review_screen(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("review_menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Add Flashcard").clicked() {
                    self.show_add_dialog = true;
                }
                if ui.button("Back to Menu").clicked() {
                    self.current_screen = AppScreen::Menu;
                }

                ui.separator();
                ui.label(self.today.format("%Y-%m-%d").to_string());
                if ui.button("Next Day").clicked() {
                    self.advance_day();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(self.session.status_message(&self.deck, self.today));
            ui.add_space(10.0);

            let Some(card) = self.session.current_card(&self.deck) else {
                ui.label("There are no flashcards to review at this time.");
                return;
            };
            let front = card.front.clone();
            let back = card.back.clone();
            let show_back = self.session.show_back;

            ui.group(|ui| {
                ui.set_min_height(200.0);
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.heading("Front:");
                    ui.label(&front);

                    ui.add_space(20.0);
                    ui.heading("Back:");
                    if show_back {
                        ui.label(&back);
                    } else {
                        ui.label("(Click 'Show Answer' to reveal)");
                    }
                });
            });

            ui.add_space(10.0);

            // Store actions to execute after UI rendering
            let mut action_reveal = false;
            let mut action_grade = false;

            ui.horizontal(|ui| {
                if ui.button("Show Answer").clicked() {
                    action_reveal = true;
                }

                ui.label("Grade (0-5):");
                let entry = ui.add(egui::TextEdit::singleline(&mut self.grade_entry).desired_width(40.0));
                let submitted = entry.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if ui.button("Grade").clicked() || submitted {
                    action_grade = true;
                }
            });

            if action_reveal {
                self.session.reveal_back();
            }
            if action_grade {
                self.grade();
            }
        });
    }

    fn render_add_dialog(&mut self, ctx: &egui::Context) {
        let mut submit = false;
        let mut cancel = false;

        egui::Window::new("Add Flashcard")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("add_flashcard_grid").show(ui, |ui| {
                    ui.label("Front:");
                    ui.text_edit_singleline(&mut self.new_front);
                    ui.end_row();

                    ui.label("Back:");
                    ui.text_edit_singleline(&mut self.new_back);
                    ui.end_row();
                });

                ui.horizontal(|ui| {
                    if ui.button("Submit").clicked() {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if submit {
            self.submit_new_flashcard();
        }
        if cancel {
            self.close_add_dialog();
        }
    }

    fn close_add_dialog(&mut self) {
        self.show_add_dialog = false;
        self.new_front.clear();
        self.new_back.clear();
    }

    fn submit_new_flashcard(&mut self) {
        if let Err(e) = self.deck.add_item(&self.new_front, &self.new_back) {
            warn!("flashcard rejected: {}", e);
            self.show_message("Invalid Flashcard", e.to_string());
            return;
        }

        info!(cards = self.deck.len(), "flashcard added");
        self.save();
        self.close_add_dialog();

        if self.session.is_completed() {
            self.session.next_card(&self.deck, self.today);
        }
    }

    fn grade(&mut self) {
        match self
            .session
            .grade_current_card(&mut self.deck, &self.grade_entry, self.today)
        {
            Ok(()) => {
                info!(reviewed = self.session.reviewed_count, "flashcard graded");
                self.grade_entry.clear();
                self.save();
                if self.session.is_completed() {
                    self.show_message(
                        "No Flashcards to Review",
                        "There are no flashcards to review at this time.",
                    );
                }
            }
            Err(SessionError::GradeEntry(entry)) => {
                warn!(entry = %entry, "rejected grade entry");
                self.show_message(
                    "Invalid Grade",
                    "Please enter a valid grade between 0 and 5.",
                );
            }
            Err(e) => {
                error!("grading failed: {}", e);
                self.show_message("Grading failed", e.to_string());
            }
        }
    }

    fn advance_day(&mut self) {
        if let Some(next) = self.today.succ_opt() {
            self.today = next;
            info!(today = %self.today, "advanced working date");
            if self.session.is_completed() {
                self.session.next_card(&self.deck, self.today);
            }
        }
    }

    /// Opens the review screen on the current deck
    fn open_review(&mut self) {
        self.session = ReviewSession::default();
        self.grade_entry.clear();
        self.current_screen = AppScreen::Review;

        if self.session.next_card(&self.deck, self.today).is_none() {
            self.show_message(
                "No Flashcards to Review",
                "There are no flashcards to review at this time.",
            );
        }
    }

    /// Handles deck creation through a save dialog
    fn create_new_deck(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("flashcards.json")
            .add_filter("JSON files", &["json"])
            .save_file()
        else {
            return;
        };

        match storage::create_deck(&path) {
            Ok(deck) => {
                self.deck = deck;
                self.deck_path = path;
                self.session = ReviewSession::default();
                self.show_message("Deck created", format!("Created {}", self.deck_path.display()));
            }
            Err(e) => {
                error!(path = %path.display(), "failed to create deck: {}", e);
                self.show_message("Could not create deck", e.to_string());
            }
        }
    }

    /// Handles deck selection through an open dialog
    fn browse_decks(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };

        match storage::load_deck(&path) {
            Ok(deck) => {
                self.deck = deck;
                self.deck_path = path;
                self.open_review();
            }
            Err(e) => {
                error!(path = %path.display(), "failed to open deck: {}", e);
                self.show_message("Could not open deck", e.to_string());
            }
        }
    }
}
