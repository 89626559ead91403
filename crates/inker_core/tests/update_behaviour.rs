use std::path::PathBuf;
use std::sync::Once;

use inker_core::{update, AppState, ConversionReport, CopyReport, Effect, Msg, Phase};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(inker_logging::initialize_for_tests);
}

fn select(state: AppState, path: &str) -> AppState {
    let (state, effects) = update(state, Msg::FileChosen(PathBuf::from(path)));
    assert!(effects.is_empty());
    state
}

fn convert_success(state: AppState, text: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::ConvertClicked);
    update(
        state,
        Msg::ConversionFinished(ConversionReport::Success {
            text: text.to_string(),
            write_failure: None,
        }),
    )
}

#[test]
fn file_chosen_replaces_selection_and_clears_result() {
    init_logging();
    let state = select(AppState::new(), "/scans/note.png");
    assert_eq!(state.view().phase, Phase::FileSelected);
    assert_eq!(state.view().selected_file.as_deref(), Some("note.png"));

    let (state, _) = convert_success(state, "Hello World");
    assert_eq!(state.view().result_text, "Hello World");

    // A new selection discards the previous result before any conversion runs.
    let state = select(state, "/scans/other.png");
    assert_eq!(state.view().phase, Phase::FileSelected);
    assert_eq!(state.view().result_text, "");
    assert_eq!(state.view().selected_file.as_deref(), Some("other.png"));
}

#[test]
fn convert_without_selection_is_advisory_only() {
    init_logging();
    let state = AppState::new();
    let before = state.view();

    let (next, effects) = update(state, Msg::ConvertClicked);

    assert_eq!(next.view(), before);
    assert_eq!(effects.len(), 1);
    assert!(matches!(effects[0], Effect::ShowAdvisory { .. }));
}

#[test]
fn convert_with_selection_enters_converting_and_requests_run() {
    init_logging();
    let state = select(AppState::new(), "/scans/note.png");

    let (state, effects) = update(state, Msg::ConvertClicked);

    assert_eq!(state.view().phase, Phase::Converting);
    assert_eq!(state.view().status, "Converting...");
    assert_eq!(
        effects,
        vec![Effect::RunConversion {
            path: PathBuf::from("/scans/note.png"),
        }]
    );
}

#[test]
fn conversion_success_displays_text() {
    init_logging();
    let state = select(AppState::new(), "/scans/note.png");
    let (state, effects) = convert_success(state, "Hello World");

    assert_eq!(state.view().phase, Phase::Converted);
    assert_eq!(state.view().result_text, "Hello World");
    assert!(effects.is_empty());
}

#[test]
fn empty_recognition_is_still_a_success() {
    init_logging();
    let state = select(AppState::new(), "/scans/blank.png");
    let (state, effects) = convert_success(state, "");

    assert_eq!(state.view().phase, Phase::Converted);
    assert_eq!(state.view().result_text, "");
    assert!(effects.is_empty());
}

#[test]
fn conversion_failure_alerts_and_shows_inline_status() {
    init_logging();
    let state = select(AppState::new(), "/scans/broken.png");
    let (state, _) = update(state, Msg::ConvertClicked);
    let (state, effects) = update(
        state,
        Msg::ConversionFinished(ConversionReport::Failed {
            message: "failed to load image: bad header".to_string(),
            advisory: false,
        }),
    );

    assert_eq!(state.view().phase, Phase::Failed);
    assert_eq!(state.view().result_text, "");
    assert_eq!(state.view().status, "failed to load image: bad header");
    assert_eq!(
        effects,
        vec![Effect::ShowAlert {
            message: "failed to load image: bad header".to_string(),
        }]
    );
}

#[test]
fn write_failure_keeps_result_but_alerts() {
    init_logging();
    let state = select(AppState::new(), "/scans/note.png");
    let (state, _) = update(state, Msg::ConvertClicked);
    let (state, effects) = update(
        state,
        Msg::ConversionFinished(ConversionReport::Success {
            text: "Hello World".to_string(),
            write_failure: Some("failed to write output file: disk full".to_string()),
        }),
    );

    // The recognized text survives the persistence failure.
    assert_eq!(state.view().phase, Phase::Converted);
    assert_eq!(state.view().result_text, "Hello World");
    assert_eq!(
        effects,
        vec![Effect::ShowAlert {
            message: "failed to write output file: disk full".to_string(),
        }]
    );
}

#[test]
fn copy_hands_displayed_text_to_the_bridge() {
    init_logging();
    let state = select(AppState::new(), "/scans/note.png");
    let (state, _) = convert_success(state, "Hello World");

    let (_state, effects) = update(state, Msg::CopyClicked);

    assert_eq!(
        effects,
        vec![Effect::CopyText {
            text: "Hello World".to_string(),
        }]
    );
}

#[test]
fn copy_success_is_informational() {
    init_logging();
    let state = select(AppState::new(), "/scans/note.png");
    let (state, _) = convert_success(state, "Hello World");
    let (state, effects) = update(state, Msg::CopyFinished(CopyReport::Copied));

    assert_eq!(state.view().phase, Phase::ClipboardCopied);
    assert_eq!(state.view().result_text, "Hello World");
    assert!(effects.is_empty());

    // Further copies stay possible from the copied state.
    let (state, effects) = update(state, Msg::CopyClicked);
    assert_eq!(
        effects,
        vec![Effect::CopyText {
            text: "Hello World".to_string(),
        }]
    );
    let (state, _) = update(state, Msg::CopyFinished(CopyReport::Copied));
    assert_eq!(state.view().phase, Phase::ClipboardCopied);
}

#[test]
fn copy_of_empty_text_reports_an_advisory() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(state, Msg::CopyClicked);
    assert_eq!(
        effects,
        vec![Effect::CopyText {
            text: String::new(),
        }]
    );

    let (state, effects) = update(
        state,
        Msg::CopyFinished(CopyReport::Failed {
            message: "no text to copy".to_string(),
            advisory: true,
        }),
    );

    assert_eq!(state.view().phase, Phase::Idle);
    assert_eq!(
        effects,
        vec![Effect::ShowAdvisory {
            message: "no text to copy".to_string(),
        }]
    );
}

#[test]
fn selection_after_copy_returns_to_file_selected() {
    init_logging();
    let state = select(AppState::new(), "/scans/note.png");
    let (state, _) = convert_success(state, "Hello World");
    let (state, _) = update(state, Msg::CopyFinished(CopyReport::Copied));

    let state = select(state, "/scans/next.png");

    assert_eq!(state.view().phase, Phase::FileSelected);
    assert_eq!(state.view().result_text, "");
}
