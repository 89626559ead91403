use crate::{AppState, ConversionReport, CopyReport, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileChosen(path) => {
            state.select_file(path);
            Vec::new()
        }
        Msg::ConvertClicked => match state.selected_path() {
            None => vec![Effect::ShowAdvisory {
                message: "Select an image file first.".to_string(),
            }],
            Some(path) => {
                let path = path.to_path_buf();
                state.begin_conversion();
                vec![Effect::RunConversion { path }]
            }
        },
        Msg::ConversionFinished(report) => match report {
            ConversionReport::Success {
                text,
                write_failure,
            } => {
                state.complete_conversion(text);
                match write_failure {
                    // A failed write does not revoke the recognized text.
                    Some(message) => vec![Effect::ShowAlert { message }],
                    None => Vec::new(),
                }
            }
            ConversionReport::Failed { message, advisory } => {
                if advisory {
                    vec![Effect::ShowAdvisory { message }]
                } else {
                    state.fail_conversion(message.clone());
                    vec![Effect::ShowAlert { message }]
                }
            }
        },
        Msg::CopyClicked => {
            // Whatever is displayed goes to the bridge; it rejects empty text.
            let text = state.text().unwrap_or_default().to_string();
            vec![Effect::CopyText { text }]
        }
        Msg::CopyFinished(report) => match report {
            CopyReport::Copied => {
                state.mark_copied();
                Vec::new()
            }
            CopyReport::Failed { message, advisory } => {
                if advisory {
                    vec![Effect::ShowAdvisory { message }]
                } else {
                    vec![Effect::ShowAlert { message }]
                }
            }
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
