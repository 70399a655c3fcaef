//! Output representation for the key processor

/// What to deliver in place of one physical transition
///
/// Every pre-event must reach the system, in order, before the main event.
/// A missing main event means the original transition is swallowed.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputEvents<E> {
    pub pre_events: Vec<E>,
    pub main_event: Option<E>,
}

impl<E> Default for OutputEvents<E> {
    fn default() -> Self {
        Self::swallow()
    }
}

#[allow(clippy::len_without_is_empty)]
impl<E> OutputEvents<E> {
    /// Deliver nothing for the original transition
    pub fn swallow() -> Self {
        Self {
            pre_events: Vec::new(),
            main_event: None,
        }
    }

    /// Deliver `event` (original or substitute) in place of the transition
    pub fn deliver(event: E) -> Self {
        Self {
            pre_events: Vec::new(),
            main_event: Some(event),
        }
    }

    /// Deliver `event` first, ahead of the main event
    pub fn with_pre_event(mut self, event: E) -> Self {
        self.pre_events.push(event);
        self
    }

    pub fn is_swallowed(&self) -> bool {
        self.pre_events.is_empty() && self.main_event.is_none()
    }

    /// Total number of events to deliver
    pub fn len(&self) -> usize {
        self.pre_events.len() + usize::from(self.main_event.is_some())
    }

    /// All events in the order they must be delivered
    pub fn into_delivery_order(self) -> Vec<E> {
        let mut events = self.pre_events;
        events.extend(self.main_event);
        events
    }
}
