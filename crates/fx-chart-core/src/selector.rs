// File: crates/fx-chart-core/src/selector.rs
// Summary: Observable holder for the selected timeframe (single mutation entry point + subscribers).

use crate::timeframe::Timeframe;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Timeframe)>;

/// View-model for the timeframe buttons.
pub struct TimeframeSelector {
    current: Timeframe,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl TimeframeSelector {
    pub fn new(initial: Timeframe) -> Self {
        Self { current: initial, listeners: Vec::new(), next_id: 0 }
    }

    pub fn current(&self) -> Timeframe { self.current }

    /// Replace the current timeframe and notify subscribers. Subscribers are
    /// notified even when the value is unchanged (a repeated click re-fetches).
    /// Returns whether the value changed.
    pub fn select(&mut self, timeframe: Timeframe) -> bool {
        let changed = self.current != timeframe;
        self.current = timeframe;
        log::debug!("timeframe selected: {timeframe} (changed: {changed})");
        for (_, listener) in &mut self.listeners {
            listener(timeframe);
        }
        changed
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Timeframe) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }
}

impl Default for TimeframeSelector {
    fn default() -> Self { Self::new(Timeframe::default()) }
}

impl std::fmt::Debug for TimeframeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeframeSelector")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut sel = TimeframeSelector::default();
        let sink = Rc::clone(&seen);
        let id = sel.subscribe(move |tf| sink.borrow_mut().push(tf));

        assert!(sel.select(Timeframe::TenYears));
        assert!(!sel.select(Timeframe::TenYears));
        assert!(sel.unsubscribe(id));
        sel.select(Timeframe::HundredYears);

        assert_eq!(*seen.borrow(), vec![Timeframe::TenYears, Timeframe::TenYears]);
        assert_eq!(sel.current(), Timeframe::HundredYears);
        assert!(!sel.unsubscribe(id));
    }
}
