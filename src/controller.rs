//! Status controller for the analysis lifecycle.
//!
//! Pure reducer: `reduce(state, event)` returns the next state plus the
//! commands the runtime must execute. No I/O happens here.
//!
//! Two completions race for the same state cell after a submission: the
//! cosmetic pacing timer and the real analysis call. Both carry the
//! generation of the submission that spawned them, and anything tagged with
//! an older generation is dropped.

use crate::agent::AgentError;
use crate::analysis::AnalysisDocument;

/// Lifecycle tag governing which UI region is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Searching,
    Analyzing,
    Completed,
    Error,
}

impl Status {
    /// A request is outstanding
    pub fn is_in_flight(self) -> bool {
        matches!(self, Status::Searching | Status::Analyzing)
    }
}

/// One of the five fixed report views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Info,
    Content,
    Competitors,
    Diagnosis,
    Proposal,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Info,
        Tab::Content,
        Tab::Competitors,
        Tab::Diagnosis,
        Tab::Proposal,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Info => "info",
            Tab::Content => "content",
            Tab::Competitors => "competitors",
            Tab::Diagnosis => "diagnosis",
            Tab::Proposal => "proposal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Info => "Basic Info",
            Tab::Content => "Content Analysis",
            Tab::Competitors => "Competitors",
            Tab::Diagnosis => "Improvement Plan",
            Tab::Proposal => "Growth Proposal",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.id() == id)
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Strip surrounding whitespace and one leading "@" from a handle.
pub fn normalize_handle(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed).trim().to_string()
}

/// Controller state. Owned by the UI loop and replaced on every event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub status: Status,
    /// Input text exactly as typed
    pub handle_text: String,
    pub document: Option<AnalysisDocument>,
    pub active_tab: Tab,
    /// Tag of the latest submission
    pub generation: u64,
    /// Normalized handle of the latest submission
    pub submitted: Option<String>,
}

/// Inputs to the reducer
#[derive(Debug)]
pub enum Event {
    Submit(String),
    PacingElapsed(u64),
    Settled {
        generation: u64,
        outcome: Result<AnalysisDocument, AgentError>,
    },
    Retry,
    SelectTab(Tab),
    Input(char),
    Backspace,
    ClearInput,
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the external analysis call
    Analyze { generation: u64, handle: String },
    /// Fire `Event::PacingElapsed` after the cosmetic delay
    SchedulePacing { generation: u64 },
}

/// Progress milestone shown while a request is outstanding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub percent: u16,
    pub label: String,
}

/// Apply one event to the state.
pub fn reduce(mut state: State, event: Event) -> (State, Vec<Command>) {
    match event {
        Event::Submit(raw) => {
            if state.status.is_in_flight() {
                return (state, Vec::new());
            }
            let handle = normalize_handle(&raw);
            if handle.is_empty() {
                return (state, Vec::new());
            }

            state.generation += 1;
            state.document = None;
            state.submitted = Some(handle.clone());
            state.status = Status::Searching;

            let generation = state.generation;
            (
                state,
                vec![
                    Command::SchedulePacing { generation },
                    Command::Analyze { generation, handle },
                ],
            )
        }
        Event::PacingElapsed(generation) => {
            if generation == state.generation && state.status == Status::Searching {
                state.status = Status::Analyzing;
            }
            (state, Vec::new())
        }
        Event::Settled {
            generation,
            outcome,
        } => {
            if generation != state.generation || !state.status.is_in_flight() {
                return (state, Vec::new());
            }
            match outcome {
                Ok(document) => {
                    state.document = Some(document);
                    state.status = Status::Completed;
                }
                Err(_) => {
                    state.document = None;
                    state.status = Status::Error;
                }
            }
            (state, Vec::new())
        }
        Event::Retry => {
            if state.status == Status::Error {
                state.status = Status::Idle;
            }
            (state, Vec::new())
        }
        Event::SelectTab(tab) => {
            state.active_tab = tab;
            (state, Vec::new())
        }
        Event::Input(c) => {
            if !state.status.is_in_flight() {
                state.handle_text.push(c);
            }
            (state, Vec::new())
        }
        Event::Backspace => {
            if !state.status.is_in_flight() {
                state.handle_text.pop();
            }
            (state, Vec::new())
        }
        Event::ClearInput => {
            if !state.status.is_in_flight() {
                state.handle_text.clear();
            }
            (state, Vec::new())
        }
    }
}

impl State {
    /// Submission is enabled
    pub fn can_submit(&self) -> bool {
        !self.status.is_in_flight() && !normalize_handle(&self.handle_text).is_empty()
    }

    /// The report region is visible
    pub fn shows_report(&self) -> bool {
        self.status == Status::Completed && self.document.is_some()
    }

    pub fn progress(&self) -> Option<Progress> {
        let handle = self.submitted.as_deref().unwrap_or_default();
        match self.status {
            Status::Searching => Some(Progress {
                percent: 35,
                label: format!("Collecting data for @{}", handle),
            }),
            Status::Analyzing => Some(Progress {
                percent: 75,
                label: "Processing metrics and insights...".to_string(),
            }),
            _ => None,
        }
    }

    /// User-facing message for the error state
    pub fn error_message(&self) -> Option<String> {
        (self.status == Status::Error).then(|| {
            format!(
                "insufficient public information for @{}",
                self.submitted.as_deref().unwrap_or_default()
            )
        })
    }

    pub fn submit_label(&self) -> &'static str {
        match self.status {
            Status::Searching => "Searching...",
            Status::Analyzing => "Analyzing...",
            _ => "Start analysis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures;

    fn submitted(raw: &str) -> (State, Vec<Command>) {
        reduce(State::default(), Event::Submit(raw.to_string()))
    }

    fn failure() -> Result<AnalysisDocument, AgentError> {
        Err(AgentError::RequestFailed("boom".to_string()))
    }

    #[test]
    fn normalize_strips_at_and_whitespace() {
        assert_eq!(normalize_handle(" @foo "), "foo");
        assert_eq!(normalize_handle("foo"), "foo");
        assert_eq!(normalize_handle("@ foo"), "foo");
        assert_eq!(normalize_handle("@@foo"), "@foo");
    }

    #[test]
    fn submit_moves_to_searching_and_emits_commands() {
        let (state, commands) = submitted(" @panaderia_sol ");
        assert_eq!(state.status, Status::Searching);
        assert_eq!(state.generation, 1);
        assert_eq!(state.submitted.as_deref(), Some("panaderia_sol"));
        assert_eq!(
            commands,
            vec![
                Command::SchedulePacing { generation: 1 },
                Command::Analyze {
                    generation: 1,
                    handle: "panaderia_sol".to_string()
                },
            ]
        );
    }

    #[test]
    fn empty_submit_is_a_noop() {
        for raw in ["", "   ", " @ "] {
            let (state, commands) = submitted(raw);
            assert_eq!(state, State::default());
            assert!(commands.is_empty());
        }
    }

    #[test]
    fn submit_while_in_flight_is_ignored() {
        let (state, _) = submitted("first");
        let (state, commands) = reduce(state, Event::Submit("second".to_string()));
        assert!(commands.is_empty());
        assert_eq!(state.generation, 1);
        assert_eq!(state.submitted.as_deref(), Some("first"));
    }

    #[test]
    fn success_stores_document_unchanged() {
        let (state, _) = submitted("panaderia_sol");
        let (state, _) = reduce(
            state,
            Event::Settled {
                generation: 1,
                outcome: Ok(fixtures::sample()),
            },
        );
        assert_eq!(state.status, Status::Completed);
        assert_eq!(state.document, Some(fixtures::sample()));
        assert!(state.shows_report());
    }

    #[test]
    fn failure_discards_previous_document() {
        let state = State {
            status: Status::Completed,
            document: Some(fixtures::sample()),
            ..State::default()
        };
        let (state, _) = reduce(state, Event::Submit("other".to_string()));
        let (state, _) = reduce(
            state,
            Event::Settled {
                generation: 1,
                outcome: failure(),
            },
        );
        assert_eq!(state.status, Status::Error);
        assert!(state.document.is_none());
        assert_eq!(
            state.error_message().as_deref(),
            Some("insufficient public information for @other")
        );
    }

    #[test]
    fn settlement_clears_document_even_if_one_is_held() {
        let state = State {
            status: Status::Searching,
            generation: 3,
            document: Some(fixtures::sample()),
            ..State::default()
        };
        let (state, _) = reduce(
            state,
            Event::Settled {
                generation: 3,
                outcome: failure(),
            },
        );
        assert_eq!(state.status, Status::Error);
        assert!(state.document.is_none());
    }

    #[test]
    fn pacing_moves_searching_to_analyzing() {
        let (state, _) = submitted("foo");
        let (state, _) = reduce(state, Event::PacingElapsed(1));
        assert_eq!(state.status, Status::Analyzing);
        assert_eq!(state.progress().unwrap().percent, 75);
    }

    #[test]
    fn late_pacing_never_overrides_terminal_state() {
        let (state, _) = submitted("foo");
        let (state, _) = reduce(
            state,
            Event::Settled {
                generation: 1,
                outcome: Ok(fixtures::sample()),
            },
        );
        let (state, _) = reduce(state, Event::PacingElapsed(1));
        assert_eq!(state.status, Status::Completed);

        let (state, _) = submitted("foo");
        let (state, _) = reduce(
            state,
            Event::Settled {
                generation: 1,
                outcome: failure(),
            },
        );
        let (state, _) = reduce(state, Event::PacingElapsed(1));
        assert_eq!(state.status, Status::Error);
    }

    #[test]
    fn stale_pacing_does_not_advance_newer_submission() {
        let (state, _) = submitted("foo");
        let (state, _) = reduce(
            state,
            Event::Settled {
                generation: 1,
                outcome: failure(),
            },
        );
        let (state, _) = reduce(state, Event::Retry);
        let (state, _) = reduce(state, Event::Submit("bar".to_string()));
        let (state, _) = reduce(state, Event::PacingElapsed(1));
        assert_eq!(state.status, Status::Searching);
        assert_eq!(state.generation, 2);
    }

    #[test]
    fn stale_settlement_is_ignored() {
        let state = State {
            status: Status::Searching,
            generation: 2,
            ..State::default()
        };
        let (state, _) = reduce(
            state,
            Event::Settled {
                generation: 1,
                outcome: Ok(fixtures::sample()),
            },
        );
        assert_eq!(state.status, Status::Searching);
        assert!(state.document.is_none());
    }

    #[test]
    fn retry_returns_to_idle_and_keeps_handle_text() {
        let mut state = State::default();
        for c in "@foo".chars() {
            state = reduce(state, Event::Input(c)).0;
        }
        let (state, _) = reduce(state, Event::Submit("@foo".to_string()));
        let (state, _) = reduce(
            state,
            Event::Settled {
                generation: 1,
                outcome: failure(),
            },
        );
        let (state, _) = reduce(state, Event::Retry);
        assert_eq!(state.status, Status::Idle);
        assert_eq!(state.handle_text, "@foo");
        assert!(state.can_submit());
    }

    #[test]
    fn retry_outside_error_is_a_noop() {
        let (state, _) = submitted("foo");
        let (state, _) = reduce(state, Event::Retry);
        assert_eq!(state.status, Status::Searching);
    }

    #[test]
    fn input_is_locked_while_in_flight() {
        let state = State {
            handle_text: "foo".to_string(),
            ..State::default()
        };
        let (state, _) = reduce(state, Event::Submit("foo".to_string()));
        let (state, _) = reduce(state, Event::Input('x'));
        let (state, _) = reduce(state, Event::Backspace);
        let (state, _) = reduce(state, Event::ClearInput);
        assert_eq!(state.handle_text, "foo");
        assert!(!state.can_submit());
    }

    #[test]
    fn select_tab_is_harmless_in_any_status() {
        let (state, _) = reduce(State::default(), Event::SelectTab(Tab::Diagnosis));
        assert_eq!(state.active_tab, Tab::Diagnosis);
        assert_eq!(state.status, Status::Idle);
    }

    #[test]
    fn progress_milestones() {
        let (state, _) = submitted("@foo");
        let progress = state.progress().unwrap();
        assert_eq!(progress.percent, 35);
        assert_eq!(progress.label, "Collecting data for @foo");
        assert!(State::default().progress().is_none());
    }

    #[test]
    fn submit_labels_follow_status() {
        let (state, _) = submitted("foo");
        assert_eq!(state.submit_label(), "Searching...");
        assert_eq!(State::default().submit_label(), "Start analysis");
    }

    #[test]
    fn tabs_cycle_and_resolve_ids() {
        assert_eq!(Tab::Proposal.next(), Tab::Info);
        assert_eq!(Tab::Info.previous(), Tab::Proposal);
        assert_eq!(Tab::from_id("competitors"), Some(Tab::Competitors));
        assert_eq!(Tab::from_id("stats"), None);
        assert_eq!(Tab::Diagnosis.index(), 3);
    }
}
