//! Loading / failed / ready projection for remote-backed page sections.

use aarohi_api::FetchResult;
use tracing::{debug, warn};

/// The three mutually exclusive render states of a remote-backed section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed; the page shows a manual retry affordance.
    Failed,
    /// Records arrived and are owned by the page until it unmounts.
    Ready(T),
}

/// Ticket identifying one fetch attempt.
///
/// Resolving with a stale ticket is ignored, so a slow response from before
/// a retry can never overwrite the state of the newer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// State holder for one remote-backed section of a page.
///
/// The panel is in exactly one [`Loadable`] state at any time. `begin` arms
/// Loading and issues a ticket; `resolve` applies a result only if its ticket
/// is still the current one (last-request-wins).
#[derive(Debug)]
pub struct RemotePanel<T> {
    state: Loadable<T>,
    generation: u64,
}

impl<T> RemotePanel<T> {
    /// Creates a panel in the Loading state, ready for the mount fetch.
    pub fn new() -> Self {
        Self {
            state: Loadable::Loading,
            generation: 0,
        }
    }

    /// Arms the Loading state and issues the ticket for a new fetch.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = Loadable::Loading;
        FetchTicket(self.generation)
    }

    /// Applies a fetch result, unless a newer fetch has been started since.
    pub fn resolve(&mut self, ticket: FetchTicket, result: FetchResult<T>) {
        if ticket.0 != self.generation {
            debug!(
                stale = ticket.0,
                current = self.generation,
                "dropping stale fetch result"
            );
            return;
        }
        match result {
            Ok(data) => self.state = Loadable::Ready(data),
            Err(error) => {
                warn!(%error, "remote section failed to load");
                self.state = Loadable::Failed;
            }
        }
    }

    /// The current render state.
    pub fn state(&self) -> &Loadable<T> {
        &self.state
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, Loadable::Loading)
    }

    /// Whether the last fetch failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, Loadable::Failed)
    }

    /// The loaded records, if ready.
    pub fn data(&self) -> Option<&T> {
        match &self.state {
            Loadable::Ready(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> Default for RemotePanel<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aarohi_api::FetchError;

    fn failed<T>() -> FetchResult<T> {
        Err(FetchError::Status { status: 500 })
    }

    #[test]
    fn test_exactly_one_state_at_a_time() {
        let mut panel: RemotePanel<Vec<u32>> = RemotePanel::new();
        assert!(panel.is_loading());
        assert!(!panel.is_failed());
        assert!(panel.data().is_none());

        let ticket = panel.begin();
        panel.resolve(ticket, Ok(vec![1, 2]));
        assert!(!panel.is_loading());
        assert!(!panel.is_failed());
        assert_eq!(panel.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_http_error_sets_failed_and_clears_loading() {
        let mut panel: RemotePanel<Vec<u32>> = RemotePanel::new();
        let ticket = panel.begin();
        panel.resolve(ticket, failed());
        assert!(panel.is_failed());
        assert!(!panel.is_loading());
    }

    #[test]
    fn test_retry_rearms_loading() {
        let mut panel: RemotePanel<Vec<u32>> = RemotePanel::new();
        let first = panel.begin();
        panel.resolve(first, failed());
        assert!(panel.is_failed());

        let second = panel.begin();
        assert!(panel.is_loading());
        panel.resolve(second, Ok(vec![9]));
        assert_eq!(panel.data(), Some(&vec![9]));
    }

    #[test]
    fn test_stale_response_never_overwrites_newer_request() {
        let mut panel: RemotePanel<Vec<u32>> = RemotePanel::new();
        let stale = panel.begin();
        let current = panel.begin();

        panel.resolve(current, Ok(vec![7]));
        // The slow first response arrives after the retry resolved.
        panel.resolve(stale, Ok(vec![1]));
        assert_eq!(panel.data(), Some(&vec![7]));

        // A stale failure is ignored the same way.
        panel.resolve(stale, failed());
        assert_eq!(panel.data(), Some(&vec![7]));
    }
}
