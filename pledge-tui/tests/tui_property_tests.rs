use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use pledge_core::{
    CardKind, CategoryFilter, DashboardModel, DatasetSource, LoadError, ScoreLabel, ScoreScale,
    Status, StatusFilter,
};
use pledge_test_utils::fixtures;
use pledge_tui::config::{ScoreConfig, SourceConfig, SourceKind, ThemeConfig, TuiConfig};
use pledge_tui::keys::{map_key, Action, InputMode};
use pledge_tui::loader::{source_from_config, FileSource};
use pledge_tui::notifications::NotificationLevel;
use pledge_tui::state::App;
use pledge_tui::theme::{
    card_color, notification_color, score_label_colors, status_color, LedgerTheme,
};
use pledge_tui::views::render_view;
use proptest::prelude::*;
use ratatui::{backend::TestBackend, Terminal};
use std::io::Write;

fn base_config() -> TuiConfig {
    TuiConfig {
        source: SourceConfig {
            kind: SourceKind::File,
            location: "data/promises.json".to_string(),
        },
        request_timeout_ms: 5_000,
        tick_rate_ms: 250,
        log_path: "tmp/pledge-tui.log".into(),
        score: ScoreConfig {
            scale: ScoreScale::Unit,
        },
        theme: ThemeConfig {
            name: "ledger".to_string(),
        },
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn sample_app() -> App {
    let model = DashboardModel::new(fixtures::sample_dataset(), ScoreScale::Unit);
    App::new(base_config(), model)
}

fn render_to_string(app: &App) -> String {
    let backend = TestBackend::new(140, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| render_view(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

// ----------------------------------------------------------------------------
// Config
// ----------------------------------------------------------------------------

#[test]
fn config_base_is_valid() {
    assert!(base_config().validate().is_ok());
}

#[test]
fn config_requires_theme_name() {
    let mut config = base_config();
    config.theme = ThemeConfig {
        name: "unknown".to_string(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_requires_location() {
    let mut config = base_config();
    config.source.location = "   ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_zero_tick_rate() {
    let mut config = base_config();
    config.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn config_from_path_reads_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
request_timeout_ms = 1000
tick_rate_ms = 100
log_path = "pledge.log"

[source]
kind = "http"
location = "https://example.org/promises.json"

[score]
scale = "unit"

[theme]
name = "ledger"
"#
    )
    .unwrap();

    let config = TuiConfig::from_path(file.path()).unwrap();
    assert_eq!(config.source.kind, SourceKind::Http);
    assert_eq!(config.score.scale, ScoreScale::Unit);
    assert!(config.validate().is_ok());
    assert!(source_from_config(&config).is_ok());
}

// ----------------------------------------------------------------------------
// Loader
// ----------------------------------------------------------------------------

#[tokio::test]
async fn file_source_loads_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let body = serde_json::to_vec(&fixtures::sample_document()).unwrap();
    file.write_all(&body).unwrap();

    let source = FileSource::new(file.path());
    let dataset = source.load().await.unwrap();
    assert_eq!(dataset.len(), 6);
    assert_eq!(dataset.subject(), "Mayor");
}

#[tokio::test]
async fn file_source_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path().join("absent.json"));
    assert!(matches!(source.load().await, Err(LoadError::Io { .. })));
}

#[tokio::test]
async fn file_source_malformed_json_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"promises\": [ {\"promise\": ").unwrap();

    let source = FileSource::new(file.path());
    assert!(matches!(source.load().await, Err(LoadError::Malformed { .. })));
}

#[tokio::test]
async fn model_loads_through_configured_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("promises.json");
    std::fs::write(&path, serde_json::to_vec(&fixtures::sample_document()).unwrap()).unwrap();

    let mut config = base_config();
    config.source.location = path.display().to_string();
    let source = source_from_config(&config).unwrap();
    let model = DashboardModel::load(source.as_ref(), config.score.scale)
        .await
        .unwrap();
    assert_eq!(model.metrics().total, 6);
    assert_eq!(model.filtered_len(), 6);
}

// ----------------------------------------------------------------------------
// Keys
// ----------------------------------------------------------------------------

#[test]
fn ctrl_c_quits_in_every_mode() {
    let event = KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    };
    assert_eq!(map_key(event, InputMode::Normal), Some(Action::Quit));
    assert_eq!(map_key(event, InputMode::Search), Some(Action::Quit));
}

#[test]
fn escape_leaves_search() {
    assert_eq!(map_key(key(KeyCode::Esc), InputMode::Search), Some(Action::Cancel));
    assert_eq!(map_key(key(KeyCode::Enter), InputMode::Search), Some(Action::Confirm));
}

proptest! {
    #[test]
    fn search_mode_types_every_char(ch in any::<char>()) {
        prop_assert_eq!(
            map_key(key(KeyCode::Char(ch)), InputMode::Search),
            Some(Action::InputChar(ch))
        );
    }

    #[test]
    fn navigation_keys_consistent(use_vim in prop::bool::ANY) {
        let (down, up) = if use_vim {
            (KeyCode::Char('j'), KeyCode::Char('k'))
        } else {
            (KeyCode::Down, KeyCode::Up)
        };
        prop_assert_eq!(map_key(key(down), InputMode::Normal), Some(Action::MoveDown));
        prop_assert_eq!(map_key(key(up), InputMode::Normal), Some(Action::MoveUp));
    }

    #[test]
    fn all_action_keys_mapped(key_char in "[q?/cCsSxjk]") {
        let ch = key_char.chars().next().unwrap();
        prop_assert!(map_key(key(KeyCode::Char(ch)), InputMode::Normal).is_some());
    }

    // ------------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------------

    #[test]
    fn score_label_colors_follow_band(pct in 0u8..=100) {
        let theme = LedgerTheme::default();
        let (fg, bg) = score_label_colors(ScoreLabel::from_pct(pct), &theme);
        let expected = if pct >= 67 {
            (theme.strong, theme.strong_bg)
        } else if pct >= 34 {
            (theme.moderate, theme.moderate_bg)
        } else {
            (theme.weak, theme.weak_bg)
        };
        prop_assert_eq!((fg, bg), expected);
    }

    #[test]
    fn unknown_statuses_use_dim_text(code in "[a-z_]{1,12}") {
        let theme = LedgerTheme::default();
        let status = Status::from_code(&code);
        if !status.is_known() {
            prop_assert_eq!(status_color(&status, &theme), theme.text_dim);
        }
    }
}

#[test]
fn status_colors_match_cards() {
    let theme = LedgerTheme::default();
    assert_eq!(
        status_color(&Status::Completed, &theme),
        card_color(CardKind::Completed, &theme)
    );
    assert_eq!(
        status_color(&Status::Broken, &theme),
        card_color(CardKind::Broken, &theme)
    );
    assert_eq!(
        status_color(&Status::InProgress, &theme),
        card_color(CardKind::InProgress, &theme)
    );
}

#[test]
fn error_notifications_have_correct_color() {
    let theme = LedgerTheme::default();
    assert_eq!(notification_color(NotificationLevel::Error, &theme), theme.error);
    assert_eq!(notification_color(NotificationLevel::Warning, &theme), theme.warning);
    assert_eq!(notification_color(NotificationLevel::Info, &theme), theme.info);
}

// ----------------------------------------------------------------------------
// App state
// ----------------------------------------------------------------------------

#[test]
fn search_typing_filters_rows() {
    let mut app = sample_app();
    assert!(!app.handle_action(Action::OpenSearch));
    assert_eq!(app.mode, InputMode::Search);

    for ch in "BRIDGE".chars() {
        app.handle_action(Action::InputChar(ch));
    }
    assert_eq!(app.model.filtered_len(), 1);
    assert_eq!(app.selected, Some(0));
    assert_eq!(
        app.selected_record().map(|r| r.promise.as_str()),
        Some("Build a bridge")
    );

    app.handle_action(Action::Confirm);
    assert_eq!(app.mode, InputMode::Normal);
    assert_eq!(app.model.criteria().query, "BRIDGE");
}

#[test]
fn no_matches_clears_selection() {
    let mut app = sample_app();
    app.handle_action(Action::OpenSearch);
    for ch in "zzzz".chars() {
        app.handle_action(Action::InputChar(ch));
    }
    assert_eq!(app.model.filtered_len(), 0);
    assert_eq!(app.selected, None);
    assert!(app.selected_record().is_none());

    app.handle_action(Action::MoveDown);
    assert_eq!(app.selected, None);
}

#[test]
fn status_cycle_walks_known_statuses() {
    let mut app = sample_app();
    app.handle_action(Action::NextStatus);
    assert_eq!(
        app.model.criteria().status,
        StatusFilter::Only(Status::InProgress)
    );
    app.handle_action(Action::PrevStatus);
    assert_eq!(app.model.criteria().status, StatusFilter::All);
    app.handle_action(Action::PrevStatus);
    assert_eq!(app.model.criteria().status, StatusFilter::Only(Status::Pending));
    assert_eq!(app.model.filtered_len(), 1);
}

#[test]
fn category_cycle_and_reset() {
    let mut app = sample_app();
    app.handle_action(Action::PrevCategory);
    assert_eq!(
        app.model.criteria().category,
        CategoryFilter::Only("Infrastructure".to_string())
    );
    assert_eq!(app.model.filtered_len(), 1);

    app.handle_action(Action::ResetFilters);
    assert!(app.model.criteria().is_identity());
    assert_eq!(app.model.filtered_len(), 6);
    let last = app.notifications.last().unwrap();
    assert_eq!(last.level, NotificationLevel::Info);
    assert_eq!(last.message, "Filters reset.");
}

#[test]
fn filters_never_change_summary() {
    let mut app = sample_app();
    let metrics = app.model.metrics().clone();
    let score = app.model.score().clone();
    app.handle_action(Action::NextCategory);
    app.handle_action(Action::NextStatus);
    assert_eq!(app.model.metrics(), &metrics);
    assert_eq!(app.model.score(), &score);
}

#[test]
fn selection_stays_in_bounds() {
    let mut app = sample_app();
    for _ in 0..20 {
        app.handle_action(Action::MoveDown);
    }
    assert_eq!(app.selected, Some(5));
    for _ in 0..20 {
        app.handle_action(Action::MoveUp);
    }
    assert_eq!(app.selected, Some(0));
}

#[test]
fn help_modal_opens_and_closes() {
    let mut app = sample_app();
    app.handle_action(Action::OpenHelp);
    assert!(app.modal.is_some());
    app.handle_action(Action::Cancel);
    assert!(app.modal.is_none());
    assert!(app.handle_action(Action::Quit));
}

// ----------------------------------------------------------------------------
// Rendering
// ----------------------------------------------------------------------------

#[test]
fn dashboard_renders_title_and_rows() {
    let app = sample_app();
    let screen = render_to_string(&app);
    assert!(screen.contains("Mayor Promise Tracker"));
    assert!(screen.contains("Total Promises"));
    assert!(screen.contains("Build a bridge"));
    assert!(screen.contains("Accountability Score"));
}

#[test]
fn dashboard_renders_empty_state() {
    let mut app = sample_app();
    app.handle_action(Action::OpenSearch);
    for ch in "nothing matches".chars() {
        app.handle_action(Action::InputChar(ch));
    }
    let screen = render_to_string(&app);
    assert!(screen.contains("No promise matches"));
    assert!(!screen.contains("Build a bridge"));
}
