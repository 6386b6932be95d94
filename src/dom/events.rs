use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::foundation::ids::{NodeId, PageId};
use crate::style::table::PropertyTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
/// Whether a touch handler also stops propagation.
pub enum EventAction {
    /// Observe.
    On,
    /// Observe and stop propagation.
    Catch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
/// Propagation phase of a touch handler.
pub enum EventStage {
    /// Leaf to root.
    Bubble,
    /// Root to leaf.
    Capture,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
/// Touch point transition.
pub enum TouchType {
    /// `touchstart`.
    Down,
    /// `touchmove`.
    Move,
    /// `touchend`.
    Up,
    /// `touchcancel`.
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
/// One touch handler slot.
pub struct TouchEvent {
    /// On or catch.
    pub action: EventAction,
    /// Bubble or capture.
    pub stage: EventStage,
    /// Touch transition.
    pub touch: TouchType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
/// Framework event a node can bind.
pub enum EventKind {
    /// `blur`.
    Blur,
    /// `click`.
    Click,
    /// `focus`.
    Focus,
    /// `key`.
    Key,
    /// `longpress`.
    LongPress,
    /// `mouse`.
    Mouse,
    /// `swipe`.
    Swipe,
    /// Any of the sixteen touch names.
    Touch(TouchEvent),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
/// Opaque handle registered with the event dispatcher.
pub struct EventMarker {
    /// Node the handler belongs to.
    pub node: NodeId,
    /// Page scope.
    pub page: PageId,
    /// Event name as declared.
    pub event: String,
}

impl EventMarker {
    /// Marker for `event` on `node`.
    pub fn new(node: NodeId, event: impl Into<String>, page: PageId) -> Self {
        Self {
            node,
            page,
            event: event.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Markers gained and displaced by one `add_events` call.
pub struct EventChanges {
    /// Newly bound markers, to register.
    pub bound: Vec<EventMarker>,
    /// Markers a rebinding displaced, to release.
    pub replaced: Vec<EventMarker>,
}

/// Receives marker registrations; turns them into application callbacks.
pub trait EventDispatcher: Send + Sync {
    /// A marker was bound.
    fn register(&self, marker: &EventMarker);
    /// A marker's node is gone; the callback must not fire again.
    fn release(&self, marker: &EventMarker);
}

const fn touch(action: EventAction, stage: EventStage, touch: TouchType) -> EventKind {
    EventKind::Touch(TouchEvent {
        action,
        stage,
        touch,
    })
}

use EventAction::{Catch, On};
use EventStage::{Bubble, Capture};
use TouchType::{Cancel, Down, Move, Up};

static EVENT_ENTRIES: &[(&str, EventKind)] = &[
    ("blur", EventKind::Blur),
    ("capturetouchcancel", touch(On, Capture, Cancel)),
    ("capturetouchend", touch(On, Capture, Up)),
    ("capturetouchmove", touch(On, Capture, Move)),
    ("capturetouchstart", touch(On, Capture, Down)),
    ("catchbubbletouchcancel", touch(Catch, Bubble, Cancel)),
    ("catchbubbletouchend", touch(Catch, Bubble, Up)),
    ("catchbubbletouchmove", touch(Catch, Bubble, Move)),
    ("catchbubbletouchstart", touch(Catch, Bubble, Down)),
    ("catchcapturetouchcancel", touch(Catch, Capture, Cancel)),
    ("catchcapturetouchend", touch(Catch, Capture, Up)),
    ("catchcapturetouchmove", touch(Catch, Capture, Move)),
    ("catchcapturetouchstart", touch(Catch, Capture, Down)),
    ("click", EventKind::Click),
    ("focus", EventKind::Focus),
    ("key", EventKind::Key),
    ("longpress", EventKind::LongPress),
    ("mouse", EventKind::Mouse),
    ("swipe", EventKind::Swipe),
    ("touchcancel", touch(On, Bubble, Cancel)),
    ("touchend", touch(On, Bubble, Up)),
    ("touchmove", touch(On, Bubble, Move)),
    ("touchstart", touch(On, Bubble, Down)),
];

static EVENT_TABLE: LazyLock<PropertyTable<EventKind>> =
    LazyLock::new(|| PropertyTable::new(EVENT_ENTRIES));

/// Resolve an event name; `None` for names outside the generic table.
pub fn lookup_event(name: &str) -> Option<EventKind> {
    EVENT_TABLE.get(name)
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// Markers bound on one node.
pub struct EventBindings {
    singles: BTreeMap<EventKind, EventMarker>,
}

impl EventBindings {
    /// Bind `name`, recording the new marker and any marker it replaced.
    ///
    /// Returns `false` if the name is unknown.
    pub fn bind(
        &mut self,
        name: &str,
        node: NodeId,
        page: PageId,
        changes: &mut EventChanges,
    ) -> bool {
        let Some(event) = lookup_event(name) else {
            return false;
        };
        let marker = EventMarker::new(node, name, page);
        if let Some(old) = self.singles.insert(event, marker.clone()) {
            changes.replaced.push(old);
        }
        changes.bound.push(marker);
        true
    }

    /// Marker for `event`.
    pub fn get(&self, event: EventKind) -> Option<&EventMarker> {
        self.singles.get(&event)
    }

    /// `event` is bound.
    pub fn has(&self, event: EventKind) -> bool {
        self.singles.contains_key(&event)
    }

    /// Any touch slot is bound.
    pub fn has_touch(&self) -> bool {
        self.singles.keys().any(|k| matches!(k, EventKind::Touch(_)))
    }

    /// Bound touch markers.
    pub fn touch_markers(&self) -> impl Iterator<Item = &EventMarker> {
        self.singles
            .iter()
            .filter(|(k, _)| matches!(k, EventKind::Touch(_)))
            .map(|(_, m)| m)
    }

    /// Every bound marker.
    pub fn iter(&self) -> impl Iterator<Item = &EventMarker> {
        self.singles.values()
    }

    /// Remove and return every marker.
    pub fn take_all(&mut self) -> Vec<EventMarker> {
        std::mem::take(&mut self.singles).into_values().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/events.rs"]
mod tests;
