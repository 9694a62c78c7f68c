//! Form state container: the single owner of submission and filter state.

use std::collections::HashSet;

use shared::{domain::FilterId, protocol::ClassifyResponse};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{input_error_message, UiEvent};

/// One rendered line of the filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredLine {
    pub filter: FilterId,
    pub values: String,
}

/// All transient state behind the form: input text, the last outcome, the
/// in-flight flag, and the filter selection. Mutated only on the UI thread,
/// either by user interaction or by draining backend events.
#[derive(Debug, Default)]
pub struct FormState {
    pub input_text: String,
    pub response: Option<ClassifyResponse>,
    pub error: Option<String>,
    pub loading: bool,
    pub selected_filters: HashSet<FilterId>,
    pub show_filters: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a submission attempt. The previous attempt's outcome is
    /// cleared before validation runs; on success the command to queue is
    /// returned, on failure the error surface is set and nothing is
    /// dispatched, so no network call can happen.
    pub fn try_submit(&mut self) -> Option<BackendCommand> {
        self.error = None;
        self.response = None;
        self.show_filters = false;

        match client_core::validate_input(&self.input_text) {
            Ok(()) => {
                self.begin_submission();
                Some(BackendCommand::Classify {
                    raw_input: self.input_text.clone(),
                })
            }
            Err(err) => {
                self.error = Some(input_error_message(&err));
                None
            }
        }
    }

    /// Clears any stale outcome and marks the call in flight.
    pub fn begin_submission(&mut self) {
        self.error = None;
        self.response = None;
        self.show_filters = false;
        self.loading = true;
    }

    /// Rolls back `begin_submission` when the command never left the UI.
    pub fn abort_submission(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Applies one backend event and returns the status-line text for it.
    /// Terminal events always clear the loading flag, success or failure.
    pub fn apply_event(&mut self, event: UiEvent) -> String {
        match event {
            UiEvent::Info(message) => message,
            UiEvent::ClassifyOk(response) => {
                self.loading = false;
                self.error = None;
                self.response = Some(response);
                self.show_filters = true;
                self.selected_filters = FilterId::ALL.into_iter().collect();
                "Classification complete".to_string()
            }
            UiEvent::Error(err) => {
                tracing::warn!(
                    category = ?err.category(),
                    context = ?err.context(),
                    "backend error surfaced to form"
                );
                self.loading = false;
                self.response = None;
                self.error = Some(err.message().to_string());
                err.message().to_string()
            }
        }
    }

    /// Replaces the filter selection wholesale. The widget only offers the
    /// enumerated values, so no validation is needed here.
    pub fn set_filters(&mut self, selection: impl IntoIterator<Item = FilterId>) {
        self.selected_filters = selection.into_iter().collect();
    }

    /// True when the filtered results panel should be rendered at all: a
    /// response exists and at least one filter is selected.
    pub fn filtered_view_available(&self) -> bool {
        self.response.is_some() && !self.selected_filters.is_empty()
    }

    /// Selected, non-empty response fields in render order, values
    /// comma-joined. Pure; no hidden mutation.
    pub fn filtered_lines(&self) -> Vec<FilteredLine> {
        let Some(response) = &self.response else {
            return Vec::new();
        };
        FilterId::ALL
            .into_iter()
            .filter(|filter| {
                self.selected_filters.contains(filter) && !response.field(*filter).is_empty()
            })
            .map(|filter| FilteredLine {
                filter,
                values: response.field(filter).join(","),
            })
            .collect()
    }

    /// The combined notice fires only when every filter is selected and every
    /// corresponding field is empty; a partial selection never triggers it.
    pub fn shows_no_data_notice(&self) -> bool {
        let Some(response) = &self.response else {
            return false;
        };
        FilterId::ALL
            .iter()
            .all(|filter| self.selected_filters.contains(filter))
            && response.all_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::{UiError, UiErrorContext};

    fn sample_response() -> ClassifyResponse {
        ClassifyResponse {
            numbers: vec!["2".to_string()],
            alphabets: vec!["A".to_string(), "B".to_string()],
            highest_alphabet: vec!["B".to_string()],
        }
    }

    fn http_error_event(status: u16) -> UiEvent {
        UiEvent::Error(UiError::from_message(
            UiErrorContext::Classify,
            format!("API call failed: API returned status {status}"),
        ))
    }

    #[test]
    fn try_submit_rejects_malformed_json_without_command() {
        let mut form = FormState::new();
        form.input_text = "not json".to_string();
        form.response = Some(sample_response());
        form.show_filters = true;

        assert!(form.try_submit().is_none());
        assert_eq!(
            form.error.as_deref(),
            Some("Invalid JSON format. Please check your input.")
        );
        assert!(!form.loading);
        // A new attempt clears the previous outcome even when validation
        // fails before dispatch.
        assert!(form.response.is_none());
        assert!(!form.show_filters);
    }

    #[test]
    fn try_submit_rejects_missing_data_array_without_command() {
        let mut form = FormState::new();
        form.input_text = r#"{"values": ["A"]}"#.to_string();

        assert!(form.try_submit().is_none());
        assert_eq!(
            form.error.as_deref(),
            Some("Invalid JSON format. Input must contain a \"data\" array.")
        );
        assert!(!form.loading);
    }

    #[test]
    fn try_submit_queues_raw_input_and_enters_loading() {
        let mut form = FormState::new();
        form.input_text = r#"{"data": ["A", "1"]}"#.to_string();
        form.error = Some("stale error".to_string());
        form.response = Some(sample_response());
        form.show_filters = true;

        let cmd = form.try_submit().expect("command");
        let BackendCommand::Classify { raw_input } = cmd;
        assert_eq!(raw_input, form.input_text);

        assert!(form.loading);
        assert!(form.error.is_none());
        assert!(form.response.is_none());
        assert!(!form.show_filters);
    }

    #[test]
    fn success_event_reveals_filters_with_all_selected() {
        let mut form = FormState::new();
        form.begin_submission();

        let status = form.apply_event(UiEvent::ClassifyOk(sample_response()));

        assert_eq!(status, "Classification complete");
        assert!(!form.loading);
        assert!(form.error.is_none());
        assert_eq!(form.response, Some(sample_response()));
        assert!(form.show_filters);
        assert_eq!(form.selected_filters.len(), FilterId::ALL.len());
        for filter in FilterId::ALL {
            assert!(form.selected_filters.contains(&filter));
        }
    }

    #[test]
    fn http_error_event_keeps_response_empty_and_clears_loading() {
        let mut form = FormState::new();
        form.begin_submission();
        assert!(form.loading);

        let status = form.apply_event(http_error_event(500));

        assert!(status.contains("500"));
        assert!(!form.loading);
        assert!(form.response.is_none());
        assert!(form.error.as_deref().unwrap_or_default().contains("500"));
    }

    #[test]
    fn loading_spans_submission_until_terminal_event() {
        let mut form = FormState::new();
        form.input_text = r#"{"data": []}"#.to_string();
        assert!(!form.loading);

        form.try_submit().expect("command");
        assert!(form.loading);

        form.apply_event(UiEvent::Info("Backend worker ready".to_string()));
        assert!(form.loading, "non-terminal events must not clear the flag");

        form.apply_event(UiEvent::ClassifyOk(ClassifyResponse::default()));
        assert!(!form.loading);
    }

    #[test]
    fn abort_rolls_back_optimistic_loading() {
        let mut form = FormState::new();
        form.begin_submission();

        form.abort_submission("UI command queue is full; please retry");

        assert!(!form.loading);
        assert_eq!(
            form.error.as_deref(),
            Some("UI command queue is full; please retry")
        );
    }

    #[test]
    fn filtered_lines_respect_selection_and_render_order() {
        let mut form = FormState::new();
        form.response = Some(ClassifyResponse {
            numbers: vec!["1".to_string(), "2".to_string()],
            alphabets: vec!["A".to_string()],
            highest_alphabet: vec!["A".to_string()],
        });

        form.set_filters([FilterId::Numbers]);
        let lines = form.filtered_lines();
        assert_eq!(
            lines,
            vec![FilteredLine {
                filter: FilterId::Numbers,
                values: "1,2".to_string(),
            }]
        );

        form.set_filters(FilterId::ALL);
        let filters: Vec<FilterId> = form.filtered_lines().iter().map(|l| l.filter).collect();
        assert_eq!(filters, FilterId::ALL.to_vec());
    }

    #[test]
    fn filtered_lines_skip_empty_fields() {
        let mut form = FormState::new();
        form.response = Some(ClassifyResponse {
            numbers: Vec::new(),
            alphabets: vec!["A".to_string()],
            highest_alphabet: Vec::new(),
        });
        form.set_filters(FilterId::ALL);

        let lines = form.filtered_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].filter, FilterId::Alphabets);
    }

    #[test]
    fn filtered_lines_are_idempotent() {
        let mut form = FormState::new();
        form.response = Some(sample_response());
        form.set_filters(FilterId::ALL);

        assert_eq!(form.filtered_lines(), form.filtered_lines());
        assert_eq!(form.shows_no_data_notice(), form.shows_no_data_notice());
    }

    #[test]
    fn no_data_notice_requires_full_selection_and_all_empty() {
        let mut form = FormState::new();
        form.response = Some(ClassifyResponse::default());

        form.set_filters(FilterId::ALL);
        assert!(form.shows_no_data_notice());

        // Dropping one filter from the selection defeats the compound
        // condition even though every field is empty.
        form.set_filters([FilterId::Numbers, FilterId::Alphabets]);
        assert!(!form.shows_no_data_notice());

        // Any populated field defeats it as well.
        form.set_filters(FilterId::ALL);
        form.response = Some(ClassifyResponse {
            numbers: vec!["3".to_string()],
            ..ClassifyResponse::default()
        });
        assert!(!form.shows_no_data_notice());
    }

    #[test]
    fn filtered_view_hidden_without_response_or_selection() {
        let mut form = FormState::new();
        assert!(!form.filtered_view_available());

        form.response = Some(sample_response());
        form.set_filters([]);
        assert!(!form.filtered_view_available());

        form.set_filters([FilterId::HighestAlphabet]);
        assert!(form.filtered_view_available());
    }
}
