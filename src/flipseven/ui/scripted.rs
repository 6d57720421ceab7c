//! A scripted interface, for testing.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::{Decision, Event, InputError, PlayerId, Ui};

#[derive(Debug, Default)]
struct Inner {
    player_counts: VecDeque<Option<u8>>,
    decisions: VecDeque<Option<Decision>>,
    targets: VecDeque<Option<PlayerId>>,
    events: Vec<Event>,
    rejections: Vec<InputError>,
}

/// A [`Ui`] that replays scripted responses and captures notifications.
#[derive(Debug, Default)]
pub struct ScriptedUi(Mutex<Inner>);

impl Ui for ScriptedUi {
    fn prompt_player_count(&self) -> Option<u8> {
        let mut inner = self.0.lock().unwrap();
        inner.player_counts.pop_front().expect("scripted count")
    }

    fn prompt_decision(&self, _: PlayerId) -> Option<Decision> {
        let mut inner = self.0.lock().unwrap();
        inner.decisions.pop_front().expect("scripted decision")
    }

    fn prompt_target(&self, _: PlayerId, _: &[PlayerId]) -> Option<PlayerId> {
        let mut inner = self.0.lock().unwrap();
        inner.targets.pop_front().expect("scripted target")
    }

    fn invalid_input(&self, err: &InputError) {
        let mut inner = self.0.lock().unwrap();
        inner.rejections.push(err.clone());
    }

    fn notify(&self, event: &Event) {
        let mut inner = self.0.lock().unwrap();
        inner.events.push(event.clone());
    }
}

impl ScriptedUi {
    /// Scripts a raw player-count response, parsed the way the console
    /// would.
    pub fn counts(self, raw: &str) -> Self {
        let mut inner = self.0.lock().unwrap();
        inner.player_counts.push_back(raw.trim().parse().ok());
        drop(inner);
        self
    }

    /// Scripts a raw decision response.
    pub fn decides(self, raw: &str) -> Self {
        let mut inner = self.0.lock().unwrap();
        inner.decisions.push_back(raw.parse().ok());
        drop(inner);
        self
    }

    /// Scripts a raw target response.
    pub fn targets(self, raw: &str) -> Self {
        let mut inner = self.0.lock().unwrap();
        inner
            .targets
            .push_back(raw.trim().parse::<u8>().ok().map(PlayerId));
        drop(inner);
        self
    }

    /// The notifications captured so far, in delivery order.
    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().events.clone()
    }

    /// The input rejections captured so far.
    pub fn rejections(&self) -> Vec<InputError> {
        self.0.lock().unwrap().rejections.clone()
    }

    /// The number of scripted decisions not yet consumed.
    pub fn decisions_remaining(&self) -> usize {
        self.0.lock().unwrap().decisions.len()
    }
}
