//! State of the lookup screen and the rules for moving between states.
//!
//! A [`ScreenController`] owns the query text and exactly one [`ScreenState`].
//! Only a submit changes the state, and it always replaces it as a whole.

use crate::{
    classify::classify,
    error::{FetchError, ScreenError},
    model::{DisplayCategory, WeatherResult},
    provider::WeatherProvider,
};

/// What the screen currently shows below the input.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenState {
    #[default]
    Idle,
    Error(ScreenError),
    Success(WeatherResult),
}

/// Side effect the presentation layer should carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Give up input focus (dismiss the keyboard, clear the prompt).
    ReleaseFocus,
}

/// Outcome of starting a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Query was blank; the state is already Error and nothing must be fetched.
    Rejected,
    /// Fetch `query` and hand the outcome back with `ticket`.
    Fetch { ticket: Ticket, query: String },
}

/// Identifies one begun fetch. Later tickets supersede earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct ScreenController<P> {
    provider: P,
    query: String,
    state: ScreenState,
    generation: u64,
}

impl<P: WeatherProvider> ScreenController<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, query: String::new(), state: ScreenState::Idle, generation: 0 }
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Whether the submit action should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Background category for the current state.
    pub fn display_category(&self) -> DisplayCategory {
        match &self.state {
            ScreenState::Success(result) => classify(&result.condition),
            ScreenState::Idle | ScreenState::Error(_) => DisplayCategory::Default,
        }
    }

    /// Validate the query and, if it is usable, issue a new ticket for it.
    ///
    /// Any submit, even a rejected one, supersedes fetches still in flight.
    pub fn begin_submit(&mut self) -> Submission {
        self.generation += 1;

        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            self.state = ScreenState::Error(ScreenError::EmptyInput);
            return Submission::Rejected;
        }

        Submission::Fetch { ticket: Ticket(self.generation), query: trimmed.to_owned() }
    }

    /// Apply a fetch outcome. Outcomes for superseded tickets are dropped.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<WeatherResult, FetchError>,
    ) -> Effect {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.generation,
                "dropping outcome of superseded request"
            );
            return Effect::None;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(
                    location = %result.location_name,
                    condition = %result.condition,
                    "weather updated"
                );
                self.state = ScreenState::Success(result);
                Effect::ReleaseFocus
            }
            Err(err) => {
                self.state = ScreenState::Error(err.into());
                Effect::None
            }
        }
    }

    /// Submit the current query: validate, fetch, and apply the outcome.
    pub async fn submit(&mut self) -> Effect {
        match self.begin_submit() {
            Submission::Rejected => Effect::None,
            Submission::Fetch { ticket, query } => {
                let outcome = self.provider.fetch_weather(&query).await;
                self.complete(ticket, outcome)
            }
        }
    }
}
