//! Single-owner state container.
//!
//! [`Store`] keeps the current [`GameState`], runs every dispatched action
//! through the engine and then calls its subscribers synchronously, so a
//! subscriber always sees a fully updated state.

use game_core::{Action, ActionError, GameEngine, GameError, GameState};

/// Callback invoked after every dispatch with the current state.
pub type Subscriber = Box<dyn FnMut(&GameState) + Send>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct Store {
    state: GameState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Store {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the store and returns the final state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Reduces `action` into the current state and notifies subscribers.
    ///
    /// Subscribers run whether or not the action was accepted; a rejected
    /// action leaves the state, including `last_action`, untouched and its
    /// reason is returned.
    pub fn dispatch(&mut self, action: &Action) -> Result<(), ActionError> {
        let result = GameEngine::new(&mut self.state).execute(action);

        match &result {
            Ok(()) => tracing::debug!(kind = action.kind().as_str(), "action applied"),
            Err(error) => tracing::debug!(
                kind = action.kind().as_str(),
                code = error.error_code(),
                severity = error.severity().as_str(),
                "action rejected: {}",
                error
            ),
        }

        self.notify();
        result
    }

    /// Registers a callback run after every dispatch.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&GameState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use game_core::{AddPlayerAction, Available, Class, MoveAction, PlayerId, Weapon, reduce};

    fn store() -> Store {
        Store::new(GameState::new(Available::new(
            vec![Class::new("warrior")],
            vec![Weapon::new("sword", 10)],
        )))
    }

    fn join(id: i64) -> Action {
        AddPlayerAction::new(PlayerId(id), "warrior", "sword", 0, 0).into()
    }

    #[test]
    fn dispatch_matches_pure_reduce() {
        let mut store = store();
        let action = join(1);
        let expected = reduce(store.state(), &action);

        store.dispatch(&action).unwrap();

        assert_eq!(store.state(), &expected);
    }

    #[test]
    fn subscribers_observe_every_dispatch() {
        let mut store = store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |state| {
            sink.lock().unwrap().push(state.last_action.clone());
        });

        let accepted = join(1);
        let rejected: Action = MoveAction::new(PlayerId(1), -3, 0).into();
        store.dispatch(&accepted).unwrap();
        assert!(store.dispatch(&rejected).is_err());

        // The rejected dispatch still notifies, with the stale last action.
        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![Some(accepted.clone()), Some(accepted)]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = store();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |_| *counter.lock().unwrap() += 1);

        store.dispatch(&join(1)).unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(&join(2)).unwrap();

        assert_eq!(*calls.lock().unwrap(), 1);
        assert_eq!(store.subscriber_count(), 0);
        assert_eq!(store.state().players().len(), 2);
    }
}
