//! Planner controller: ties the state machine to fetch, table, and map.

use jump_core::{
    compute_jumps, project, FetchOutcome, JumpPlan, MapSurface, PresentationState, RequestTicket,
    RouteOverlay, Waypoint,
};
use jump_sdk::{FetchError, RouteClient};

/// Drives the presentation state and keeps table and map in sync.
///
/// This is the single writer of the presentation state. The map surface
/// is passed in per call so the controller never retains a reference to
/// the widget.
pub struct Planner<S: MapSurface> {
    state: PresentationState,
    plan: JumpPlan,
    overlay: RouteOverlay<S>,
}

impl<S: MapSurface> Default for Planner<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MapSurface> Planner<S> {
    pub fn new() -> Self {
        Self {
            state: PresentationState::new(),
            plan: JumpPlan::default(),
            overlay: RouteOverlay::new(),
        }
    }

    pub fn set_start(&mut self, text: impl Into<String>) {
        self.state.set_start(text);
    }

    pub fn set_end(&mut self, text: impl Into<String>) {
        self.state.set_end(text);
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn plan(&self) -> &JumpPlan {
        &self.plan
    }

    /// Submit the find action.
    ///
    /// On validation failure the table and map are cleared immediately
    /// and no ticket is returned; otherwise the returned ticket names
    /// the request to issue while the previous display stays visible.
    pub fn submit(&mut self, surface: &mut S) -> Option<RequestTicket> {
        let ticket = self.state.submit();
        if ticket.is_none() {
            self.sync(surface);
        }
        ticket
    }

    /// Feed a finished request back into the state machine.
    ///
    /// Transport detail is logged here and collapsed to the single
    /// no-route outcome. Returns false when the resolution was stale
    /// and nothing changed.
    pub fn complete(
        &mut self,
        surface: &mut S,
        ticket: &RequestTicket,
        result: Result<Vec<Waypoint>, FetchError>,
    ) -> bool {
        let outcome = match result {
            Ok(route) => FetchOutcome::Route(route),
            Err(err) => {
                tracing::warn!(error = %err, start = %ticket.start, end = %ticket.end,
                    "capital route request failed");
                FetchOutcome::NoRoute
            }
        };
        let applied = self.state.resolve(ticket.seq, outcome);
        if applied {
            self.sync(surface);
        } else {
            tracing::debug!(seq = ticket.seq, "discarded stale route resolution");
        }
        applied
    }

    /// Validate, fetch, and apply one find action end to end.
    pub async fn find_route(&mut self, client: &RouteClient, surface: &mut S) -> bool {
        let Some(ticket) = self.submit(surface) else {
            return false;
        };
        let result = client.capital_route(&ticket.start, &ticket.end).await;
        self.complete(surface, &ticket, result)
    }

    fn sync(&mut self, surface: &mut S) {
        let route = self.state.route();
        self.plan = compute_jumps(route);
        let points = project(route);
        self.overlay.render(surface, &points);
    }
}
