//! Application state.
//!
//! [`App`] wraps the [`DashboardModel`] with the UI-only bits: input mode,
//! row selection, help modal and notifications. Filter inputs are forwarded
//! to the model, which recomputes the visible rows synchronously.

use crate::config::TuiConfig;
use crate::keys::{Action, InputMode};
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::LedgerTheme;
use pledge_core::{DashboardModel, PromiseRecord};

pub const HELP_TEXT: &str = "/ search • c/C category • s/S status • x reset filters • j/k move • q quit";

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct App {
    pub config: TuiConfig,
    pub theme: LedgerTheme,
    pub model: DashboardModel,
    pub mode: InputMode,
    /// Index into the filtered rows.
    pub selected: Option<usize>,
    pub modal: Option<Modal>,
    pub notifications: Vec<Notification>,
}

impl App {
    pub fn new(config: TuiConfig, model: DashboardModel) -> Self {
        let selected = if model.filtered_len() > 0 { Some(0) } else { None };
        Self {
            config,
            theme: LedgerTheme::ledger(),
            model,
            mode: InputMode::Normal,
            selected,
            modal: None,
            notifications: Vec::new(),
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    pub fn selected_record(&self) -> Option<&PromiseRecord> {
        self.selected.and_then(|idx| self.model.filtered().nth(idx))
    }

    pub fn select_next(&mut self) {
        let len = self.model.filtered_len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) if idx + 1 < len => idx + 1,
            Some(idx) => idx,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.model.filtered_len() == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |idx| idx.saturating_sub(1)));
    }

    /// Apply one action. Returns `true` when the app should exit.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveDown => self.select_next(),
            Action::MoveUp => self.select_previous(),
            Action::OpenSearch => self.mode = InputMode::Search,
            Action::InputChar(ch) => {
                self.model.push_query_char(ch);
                self.after_filter_change();
            }
            Action::Backspace => {
                self.model.pop_query_char();
                self.after_filter_change();
            }
            Action::NextCategory | Action::PrevCategory => {
                self.model.cycle_category(action == Action::NextCategory);
                self.after_filter_change();
            }
            Action::NextStatus | Action::PrevStatus => {
                self.model.cycle_status(action == Action::NextStatus);
                self.after_filter_change();
            }
            Action::ResetFilters => {
                self.model.reset_filters();
                self.after_filter_change();
                self.notify(NotificationLevel::Info, "Filters reset.");
            }
            Action::OpenHelp => {
                self.modal = Some(Modal {
                    title: "Keybindings".to_string(),
                    message: HELP_TEXT.to_string(),
                })
            }
            Action::Confirm | Action::Cancel => {
                if self.mode == InputMode::Search {
                    self.mode = InputMode::Normal;
                } else {
                    self.modal = None;
                }
            }
        }
        false
    }

    fn after_filter_change(&mut self) {
        self.selected = if self.model.filtered_len() == 0 {
            None
        } else {
            Some(0)
        };
    }
}
