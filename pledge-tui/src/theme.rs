//! Ledger theme and color utilities.

use crate::notifications::NotificationLevel;
use pledge_core::{CardKind, ScoreLabel, Status};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct LedgerTheme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub secondary: Color,
    pub strong: Color,
    pub strong_bg: Color,
    pub moderate: Color,
    pub moderate_bg: Color,
    pub weak: Color,
    pub weak_bg: Color,
    pub in_progress: Color,
    pub pending: Color,
    pub stalled: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl Default for LedgerTheme {
    fn default() -> Self {
        Self::ledger()
    }
}

impl LedgerTheme {
    pub fn ledger() -> Self {
        Self {
            bg: Color::Rgb(248, 250, 252),
            bg_highlight: Color::Rgb(232, 238, 247),
            primary: Color::Rgb(30, 149, 214),
            secondary: Color::Rgb(100, 116, 139),
            strong: Color::Rgb(39, 174, 96),
            strong_bg: Color::Rgb(220, 252, 231),
            moderate: Color::Rgb(30, 149, 214),
            moderate_bg: Color::Rgb(219, 234, 254),
            weak: Color::Rgb(239, 75, 90),
            weak_bg: Color::Rgb(254, 226, 226),
            in_progress: Color::Rgb(30, 149, 214),
            pending: Color::Rgb(148, 163, 184),
            stalled: Color::Rgb(245, 158, 11),
            success: Color::Rgb(39, 174, 96),
            warning: Color::Rgb(245, 158, 11),
            error: Color::Rgb(239, 75, 90),
            info: Color::Rgb(30, 149, 214),
            text: Color::Rgb(15, 23, 42),
            text_dim: Color::Rgb(100, 116, 139),
            border: Color::Rgb(203, 213, 225),
            border_focus: Color::Rgb(30, 149, 214),
        }
    }
}

/// Gauge and label-pill colors (foreground, background) for a score band.
pub fn score_label_colors(label: ScoreLabel, theme: &LedgerTheme) -> (Color, Color) {
    match label {
        ScoreLabel::Strong => (theme.strong, theme.strong_bg),
        ScoreLabel::Moderate => (theme.moderate, theme.moderate_bg),
        ScoreLabel::Weak => (theme.weak, theme.weak_bg),
    }
}

pub fn status_color(status: &Status, theme: &LedgerTheme) -> Color {
    match status {
        Status::InProgress => theme.in_progress,
        Status::Completed => theme.success,
        Status::Broken => theme.error,
        Status::Stalled => theme.stalled,
        Status::Pending => theme.pending,
        Status::Other(_) => theme.text_dim,
    }
}

pub fn card_color(kind: CardKind, theme: &LedgerTheme) -> Color {
    match kind {
        CardKind::Total => theme.primary,
        CardKind::InProgress => theme.in_progress,
        CardKind::Completed => theme.success,
        CardKind::Broken => theme.error,
    }
}

pub fn notification_color(level: NotificationLevel, theme: &LedgerTheme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
        NotificationLevel::Success => theme.success,
    }
}
