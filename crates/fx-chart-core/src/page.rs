// File: crates/fx-chart-core/src/page.rs
// Summary: Page controller tying selector, load state and fetch tickets together.
// Notes:
// - Every selection starts a new fetch and returns a ticket. Only the ticket from
//   the latest selection may change the load state; a slower, superseded fetch
//   resolving afterwards is dropped (last selection wins).

use crate::config::ChartConfig;
use crate::error::DataFetchError;
use crate::load_state::LoadState;
use crate::provider::DataProvider;
use crate::selector::TimeframeSelector;
use crate::series::Series;
use crate::timeframe::Timeframe;
use crate::view::{self, PageView};

/// Identifies one fetch request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub timeframe: Timeframe,
    pub generation: u64,
}

#[derive(Debug)]
pub struct ChartPage {
    selector: TimeframeSelector,
    state: LoadState,
    generation: u64,
}

impl ChartPage {
    /// New page in the loading state, with the ticket for the initial fetch.
    pub fn new(initial: Timeframe) -> (Self, FetchTicket) {
        let page = Self { selector: TimeframeSelector::new(initial), state: LoadState::Loading, generation: 0 };
        let ticket = page.current_ticket();
        (page, ticket)
    }

    pub fn timeframe(&self) -> Timeframe { self.selector.current() }
    pub fn state(&self) -> &LoadState { &self.state }
    pub fn selector_mut(&mut self) -> &mut TimeframeSelector { &mut self.selector }

    /// Ticket of the fetch whose result will be accepted.
    pub fn current_ticket(&self) -> FetchTicket {
        FetchTicket { timeframe: self.selector.current(), generation: self.generation }
    }

    /// Switch timeframe, enter loading and return the ticket for the new fetch.
    pub fn select(&mut self, timeframe: Timeframe) -> FetchTicket {
        self.selector.select(timeframe);
        self.generation += 1;
        self.state = LoadState::Loading;
        self.current_ticket()
    }

    /// Apply a fetch result. Returns false (and leaves state untouched) when the
    /// ticket has been superseded by a later selection.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<Series, DataFetchError>) -> bool {
        if ticket != self.current_ticket() {
            log::debug!(
                "dropping stale result for {} (generation {}, current {})",
                ticket.timeframe, ticket.generation, self.generation
            );
            return false;
        }
        match &result {
            Ok(s) => log::debug!("{}: {} points ready", ticket.timeframe, s.len()),
            Err(e) => log::warn!("{}: fetch failed: {e}", ticket.timeframe),
        }
        self.state = LoadState::from(result);
        true
    }

    /// Fetch the current ticket synchronously through `provider` and apply it.
    pub fn load_with<P: DataProvider>(&mut self, provider: &P) -> &LoadState {
        let ticket = self.current_ticket();
        let result = provider.fetch(ticket.timeframe);
        self.resolve(ticket, result);
        &self.state
    }

    pub fn view(&self) -> PageView {
        view::render(&self.state, self.timeframe())
    }

    /// Chart configuration when data is ready.
    pub fn config(&self) -> Option<ChartConfig> {
        self.state.series().map(|s| crate::config::build_config(s, self.timeframe()))
    }
}

impl Default for ChartPage {
    fn default() -> Self { Self::new(Timeframe::default()).0 }
}
