//! Presentation state machine for the route form, table, and map.

use crate::models::Waypoint;
use crate::validate::{validate_endpoints, ValidationError};

/// Which of the four presentation phases the page is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial: empty route, empty message.
    Idle,
    /// A request is in flight; the previous route or message stays
    /// visible until it resolves.
    Loading,
    /// A route was received, message cleared.
    Displayed,
    /// Validation or fetch failed, route cleared.
    Failed,
}

/// The single user-visible message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerMessage {
    Validation(ValidationError),
    NoRouteFound,
}

impl PlannerMessage {
    pub fn text(&self) -> &'static str {
        match self {
            PlannerMessage::Validation(ValidationError::RequiredBothEndpoints) => {
                "Please enter both a start and an end system"
            }
            PlannerMessage::Validation(ValidationError::SameEndpoint) => {
                "Start and end system must be different"
            }
            PlannerMessage::NoRouteFound => "No route found",
        }
    }
}

/// Handle for one issued request, used to match its resolution against
/// the most recent submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub start: String,
    pub end: String,
}

/// How a request to the routing service ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The service returned an ordered waypoint list. Zero or one
    /// waypoints is still success, just with no hop rows.
    Route(Vec<Waypoint>),
    /// Transport failure, non-success status, or malformed payload.
    /// The detail is logged by the caller, never surfaced here.
    NoRoute,
}

/// Form text, the displayed route, and the current message.
///
/// Exactly one of {route non-empty, message set, both empty} holds at
/// any time; the transition methods enforce it. Only one component may
/// mutate this state (single writer); the calculator, projector, and
/// overlay read snapshots of it.
#[derive(Debug, Default)]
pub struct PresentationState {
    start: String,
    end: String,
    route: Vec<Waypoint>,
    message: Option<PlannerMessage>,
    loading: bool,
    next_seq: u64,
    in_flight: Option<u64>,
}

impl PresentationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_start(&mut self, text: impl Into<String>) {
        self.start = text.into();
    }

    pub fn set_end(&mut self, text: impl Into<String>) {
        self.end = text.into();
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn route(&self) -> &[Waypoint] {
        &self.route
    }

    pub fn message(&self) -> Option<PlannerMessage> {
        self.message
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if !self.route.is_empty() {
            Phase::Displayed
        } else if self.message.is_some() {
            Phase::Failed
        } else {
            Phase::Idle
        }
    }

    /// The user triggered the find action.
    ///
    /// Validates the current form text. On failure the state moves to
    /// `Failed` with the per-kind message and no request is issued. On
    /// success the state moves to `Loading` and the returned ticket
    /// identifies the request to be made; a ticket from an earlier
    /// submission becomes stale the moment a new one is issued.
    pub fn submit(&mut self) -> Option<RequestTicket> {
        if let Err(err) = validate_endpoints(&self.start, &self.end) {
            self.route.clear();
            self.message = Some(PlannerMessage::Validation(err));
            self.loading = false;
            self.in_flight = None;
            return None;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        self.loading = true;
        Some(RequestTicket {
            seq,
            start: self.start.clone(),
            end: self.end.clone(),
        })
    }

    /// A request resolved.
    ///
    /// Applies only if `seq` names the most recent in-flight request;
    /// stale resolutions are discarded and `false` is returned
    /// (last-request-wins). A route replaces the previous one wholesale
    /// and clears the message; a failure clears the route and sets the
    /// fixed no-route message.
    pub fn resolve(&mut self, seq: u64, outcome: FetchOutcome) -> bool {
        if self.in_flight != Some(seq) {
            return false;
        }
        self.in_flight = None;
        self.loading = false;
        match outcome {
            FetchOutcome::Route(route) => {
                self.route = route;
                self.message = None;
            }
            FetchOutcome::NoRoute => {
                self.route.clear();
                self.message = Some(PlannerMessage::NoRouteFound);
            }
        }
        true
    }

    /// Reset to the initial phase, dropping route, message, and any
    /// in-flight request.
    pub fn clear(&mut self) {
        self.route.clear();
        self.message = None;
        self.loading = false;
        self.in_flight = None;
    }
}
