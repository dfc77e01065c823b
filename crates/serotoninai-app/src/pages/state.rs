//! Request lifecycle shared by every prediction page.
//!
//! ```text
//!   Idle ──submit──▶ Loading ──ok──▶ Shown
//!    ▲                  │
//!    └──── Failed ◀─err─┘
//! ```
//!
//! Each submit takes a ticket carrying the next sequence number. Only the
//! ticket matching the latest issued number may resolve the page; anything
//! else is stale and ignored. `reset` (leaving the page) invalidates the
//! ticket in flight.

#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Idle,
    Loading,
    Shown(T),
    /// Idle with the last error; no result panel.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Stale,
}

/// Returned by [`PageController::begin`] while a request is already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Busy;

#[derive(Debug)]
pub struct PageController<T> {
    state: PageState<T>,
    issued: u64,
}

impl<T> Default for PageController<T> {
    fn default() -> Self {
        Self { state: PageState::Idle, issued: 0 }
    }
}

impl<T> PageController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PageState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PageState::Loading)
    }

    pub fn result(&self) -> Option<&T> {
        match &self.state {
            PageState::Shown(value) => Some(value),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.state {
            PageState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Enter `Loading` and hand out the ticket for this request.
    pub fn begin(&mut self) -> Result<RequestTicket, Busy> {
        if self.is_loading() {
            return Err(Busy);
        }
        self.issued += 1;
        self.state = PageState::Loading;
        Ok(RequestTicket { seq: self.issued })
    }

    pub fn resolve<E: ToString>(&mut self, ticket: RequestTicket, outcome: Result<T, E>) -> Resolution {
        if ticket.seq != self.issued || !self.is_loading() {
            tracing::debug!(seq = ticket.seq, latest = self.issued, "Discarding stale response");
            return Resolution::Stale;
        }
        self.state = match outcome {
            Ok(value) => PageState::Shown(value),
            Err(e) => PageState::Failed(e.to_string()),
        };
        Resolution::Applied
    }

    /// Back to `Idle`; any ticket still out becomes stale.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.state = PageState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut page: PageController<f64> = PageController::new();
        assert_eq!(page.state(), &PageState::Idle);

        let ticket = page.begin().unwrap();
        assert!(page.is_loading());
        assert_eq!(page.resolve::<String>(ticket, Ok(8.2)), Resolution::Applied);
        assert_eq!(page.result(), Some(&8.2));
    }

    #[test]
    fn test_failure_hides_previous_result() {
        let mut page: PageController<f64> = PageController::new();
        let t1 = page.begin().unwrap();
        page.resolve::<String>(t1, Ok(7.0));

        let t2 = page.begin().unwrap();
        page.resolve(t2, Err("Prediction failed"));
        assert_eq!(page.result(), None);
        assert_eq!(page.last_error(), Some("Prediction failed"));
    }

    #[test]
    fn test_second_submit_refused_while_loading() {
        let mut page: PageController<f64> = PageController::new();
        let _t = page.begin().unwrap();
        assert_eq!(page.begin(), Err(Busy));
    }

    #[test]
    fn test_reset_makes_in_flight_ticket_stale() {
        let mut page: PageController<f64> = PageController::new();
        let old = page.begin().unwrap();
        page.reset();
        let new = page.begin().unwrap();
        assert!(new.seq() > old.seq());

        assert_eq!(page.resolve::<String>(old, Ok(1.0)), Resolution::Stale);
        assert!(page.is_loading());
        assert_eq!(page.resolve::<String>(new, Ok(2.0)), Resolution::Applied);
        assert_eq!(page.result(), Some(&2.0));
    }

    #[test]
    fn test_ticket_cannot_resolve_twice() {
        let mut page: PageController<f64> = PageController::new();
        let t = page.begin().unwrap();
        page.resolve::<String>(t, Ok(1.0));
        assert_eq!(page.resolve::<String>(t, Ok(5.0)), Resolution::Stale);
        assert_eq!(page.result(), Some(&1.0));
    }
}
