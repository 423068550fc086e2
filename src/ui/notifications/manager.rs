// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns one group per screen position. Each group holds the
//! toasts currently on screen and a FIFO list of toasts waiting for a free
//! slot. The visible count of a group never exceeds the configured ceiling,
//! and groups never share a ceiling.
//!
//! All deferred work (countdown start, expiry, grace delay, exit transition)
//! is expressed as deadlines that [`Manager::tick`] fires. The application
//! drives `tick` from a periodic subscription while any group is alive.

use super::notification::{Notification, NotificationId, Phase, Position};
use crate::config::{Settings, SettingsPatch, EXIT_TRANSITION, SHOW_DELAY, USER_CLOSE_GRACE};
use std::collections::{BTreeMap, VecDeque};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close control of a toast was pressed.
    Close(NotificationId),
    /// The pointer entered a toast.
    HoverEnter(NotificationId),
    /// The pointer left a toast.
    HoverLeave(NotificationId),
    /// Primary click on a toast body (pins or unpins it).
    Click(NotificationId),
    /// The expand/collapse control of a long toast was pressed.
    ToggleExpand(NotificationId),
    /// Tick for firing due deadlines.
    Tick(Instant),
}

/// Why a toast is being dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The countdown ran out. The toast starts hiding right away.
    Expired,
    /// The user pressed the close control. A short grace delay applies first.
    User,
}

/// Identity of the on-screen container of a position group.
///
/// A new id is allocated every time a group is created, so a group that was
/// torn down and recreated is distinguishable from the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(u64);

/// Something that happened during a [`Manager::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A toast finished entering and its countdown started.
    Shown(NotificationId),
    /// A toast's countdown ran out.
    Expired(NotificationId),
    /// A user-closed toast finished its grace delay and started hiding.
    Hidden(NotificationId),
    /// A toast left its group.
    Removed(NotificationId),
    /// A pending toast took a free slot.
    Promoted(NotificationId),
    /// A group became empty and its container went away.
    ContainerRemoved(Position, ContainerId),
}

#[derive(Debug)]
struct Group {
    container: ContainerId,
    /// On-screen order, top to bottom.
    visible: VecDeque<Notification>,
    pending: VecDeque<Notification>,
}

impl Group {
    fn new(container: ContainerId) -> Self {
        Self {
            container,
            visible: VecDeque::new(),
            pending: VecDeque::new(),
        }
    }

    /// Puts a toast on screen. Bottom zones insert at the front.
    fn show(&mut self, mut notification: Notification, now: Instant) {
        notification.phase = Phase::Entering {
            show_at: now + SHOW_DELAY,
        };
        if notification.position().is_bottom() {
            self.visible.push_front(notification);
        } else {
            self.visible.push_back(notification);
        }
    }

    fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.pending.is_empty()
    }
}

/// Manages the per-position queues and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    settings: Settings,
    groups: BTreeMap<Position, Group>,
    next_container: u64,
}

impl Manager {
    /// Creates a new empty notification manager with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Merges `patch` into the settings used by subsequent operations.
    ///
    /// A raised ceiling lets pending toasts in on the next tick. A lowered
    /// ceiling does not evict anything already on screen.
    pub fn configure(&mut self, patch: SettingsPatch) {
        self.settings.configure(patch);
        log::debug!(
            "notification settings updated: max_visible_toasts = {}",
            self.settings.max_visible_toasts()
        );
    }

    /// Requests a notification, showing it now if its group has room.
    pub fn enqueue(&mut self, notification: Notification) -> NotificationId {
        self.enqueue_at(notification, Instant::now())
    }

    /// [`Manager::enqueue`] with an explicit clock.
    pub fn enqueue_at(&mut self, mut notification: Notification, now: Instant) -> NotificationId {
        notification.arm(self.settings.default_duration());
        let id = notification.id();
        let position = notification.position();
        let ceiling = self.settings.max_visible_toasts();

        let next_container = &mut self.next_container;
        let group = self.groups.entry(position).or_insert_with(|| {
            *next_container += 1;
            log::debug!("creating toast container for {position}");
            Group::new(ContainerId(*next_container))
        });

        if group.visible.len() < ceiling {
            log::debug!("showing toast {id:?} at {position}");
            group.show(notification, now);
        } else {
            notification.phase = Phase::Queued;
            group.pending.push_back(notification);
            log::debug!(
                "queueing toast {id:?} at {position} ({} pending)",
                group.pending.len()
            );
        }
        id
    }

    /// Dismisses a notification.
    ///
    /// Returns `true` if something happened. Unknown ids and toasts that are
    /// already leaving are ignored.
    pub fn dismiss(&mut self, id: NotificationId, reason: DismissReason) -> bool {
        self.dismiss_at(id, reason, Instant::now())
    }

    /// [`Manager::dismiss`] with an explicit clock.
    pub fn dismiss_at(&mut self, id: NotificationId, reason: DismissReason, now: Instant) -> bool {
        let Some(position) = self.find_group(id) else {
            log::trace!("dismiss of unknown toast {id:?} ignored");
            return false;
        };
        let Some(group) = self.groups.get_mut(&position) else {
            return false;
        };

        // Pending toasts were never shown, drop them outright.
        if let Some(index) = group.pending.iter().position(|n| n.id() == id) {
            group.pending.remove(index);
            log::debug!("dropped pending toast {id:?} at {position}");
            self.tear_down_if_empty(position);
            return true;
        }

        let Some(notification) = group.visible.iter_mut().find(|n| n.id() == id) else {
            return false;
        };
        if notification.is_leaving() {
            return false;
        }

        notification.countdown.close(now);
        notification.phase = match reason {
            DismissReason::Expired => Phase::Hiding {
                remove_at: now + EXIT_TRANSITION,
            },
            DismissReason::User => Phase::Closing {
                hide_at: now + USER_CLOSE_GRACE,
            },
        };
        log::debug!("dismissing toast {id:?} at {position} ({reason:?})");
        true
    }

    /// Pointer entered a toast: pause unless pinned.
    pub fn hover_enter_at(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(notification) = self.interactive_mut(id) else {
            return false;
        };
        notification.hovered = true;
        if !notification.pinned && notification.phase == Phase::Shown {
            notification.countdown.pause(now);
        }
        true
    }

    /// Pointer left a toast: resume unless pinned.
    pub fn hover_leave_at(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(notification) = self.interactive_mut(id) else {
            return false;
        };
        notification.hovered = false;
        if !notification.pinned && notification.phase == Phase::Shown {
            notification.countdown.resume(now);
        }
        true
    }

    /// Primary click on a toast: pin and pause, or unpin and resume.
    pub fn click_at(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(notification) = self.interactive_mut(id) else {
            return false;
        };
        let shown = notification.phase == Phase::Shown;
        if notification.pinned {
            notification.pinned = false;
            if shown {
                notification.countdown.resume(now);
            }
            log::trace!("toast {id:?} unpinned");
        } else {
            notification.pinned = true;
            if shown {
                notification.countdown.pause(now);
            }
            log::trace!("toast {id:?} pinned");
        }
        true
    }

    /// Flips the expanded state of a long toast and pins it.
    ///
    /// Returns `false` for toasts without an expand control.
    pub fn toggle_expand_at(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(notification) = self.interactive_mut(id) else {
            return false;
        };
        if !notification.is_expandable() {
            return false;
        }
        notification.expanded = !notification.expanded;
        notification.pinned = true;
        if notification.phase == Phase::Shown {
            notification.countdown.pause(now);
        }
        true
    }

    /// Fires every deadline due at `now`, removes finished toasts, promotes
    /// pending ones into free slots and tears down empty groups.
    pub fn tick(&mut self, now: Instant) -> Vec<Event> {
        let ceiling = self.settings.max_visible_toasts();
        let mut events = Vec::new();
        let mut emptied = Vec::new();

        for (position, group) in &mut self.groups {
            for notification in &mut group.visible {
                advance(notification, now, &mut events);
            }

            group.visible.retain(|notification| {
                let finished = matches!(
                    notification.phase,
                    Phase::Hiding { remove_at } if now >= remove_at
                );
                if finished {
                    events.push(Event::Removed(notification.id()));
                }
                !finished
            });

            while group.visible.len() < ceiling {
                let Some(next) = group.pending.pop_front() else {
                    break;
                };
                let id = next.id();
                log::debug!("promoting toast {id:?} at {position}");
                group.show(next, now);
                events.push(Event::Promoted(id));
            }

            if group.is_empty() {
                emptied.push(*position);
            }
        }

        for position in emptied {
            if let Some(event) = self.tear_down_if_empty(position) {
                events.push(event);
            }
        }

        if !events.is_empty() {
            log::trace!("tick fired {} events", events.len());
        }
        events
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        let now = match message {
            Message::Tick(instant) => *instant,
            _ => Instant::now(),
        };
        self.handle_message_at(message, now);
    }

    /// [`Manager::handle_message`] with an explicit clock for interactions.
    pub fn handle_message_at(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Close(id) => {
                self.dismiss_at(*id, DismissReason::User, now);
            }
            Message::HoverEnter(id) => {
                self.hover_enter_at(*id, now);
            }
            Message::HoverLeave(id) => {
                self.hover_leave_at(*id, now);
            }
            Message::Click(id) => {
                self.click_at(*id, now);
            }
            Message::ToggleExpand(id) => {
                self.toggle_expand_at(*id, now);
            }
            Message::Tick(instant) => {
                self.tick(*instant);
            }
        }
    }

    /// Returns the on-screen notifications of a position, top to bottom.
    pub fn visible(&self, position: Position) -> impl Iterator<Item = &Notification> {
        self.groups
            .get(&position)
            .into_iter()
            .flat_map(|group| group.visible.iter())
    }

    /// Returns the number of on-screen notifications at a position.
    #[must_use]
    pub fn visible_count(&self, position: Position) -> usize {
        self.groups
            .get(&position)
            .map_or(0, |group| group.visible.len())
    }

    /// Returns the number of pending notifications at a position.
    #[must_use]
    pub fn pending_count(&self, position: Position) -> usize {
        self.groups
            .get(&position)
            .map_or(0, |group| group.pending.len())
    }

    /// Positions that currently have a container.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.groups.keys().copied()
    }

    /// Container of a position group, `None` when it has been torn down.
    #[must_use]
    pub fn container(&self, position: Position) -> Option<ContainerId> {
        self.groups.get(&position).map(|group| group.container)
    }

    /// Looks up a notification by id, visible or pending.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.groups
            .values()
            .flat_map(|group| group.visible.iter().chain(group.pending.iter()))
            .find(|notification| notification.id() == id)
    }

    /// Returns whether any group is alive (visible, pending or leaving toasts).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Clears all notifications and containers.
    pub fn clear(&mut self) {
        log::debug!("clearing {} toast containers", self.groups.len());
        self.groups.clear();
    }

    fn find_group(&self, id: NotificationId) -> Option<Position> {
        self.groups.iter().find_map(|(position, group)| {
            group
                .visible
                .iter()
                .chain(group.pending.iter())
                .any(|notification| notification.id() == id)
                .then_some(*position)
        })
    }

    /// On-screen toast that still reacts to pointer input.
    fn interactive_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.groups
            .values_mut()
            .flat_map(|group| group.visible.iter_mut())
            .find(|notification| notification.id() == id && !notification.is_leaving())
    }

    fn tear_down_if_empty(&mut self, position: Position) -> Option<Event> {
        if !self.groups.get(&position).is_some_and(Group::is_empty) {
            return None;
        }
        let group = self.groups.remove(&position)?;
        log::debug!("removing empty toast container for {position}");
        Some(Event::ContainerRemoved(position, group.container))
    }
}

/// Fires the deadline of a single on-screen toast if it is due.
fn advance(notification: &mut Notification, now: Instant, events: &mut Vec<Event>) {
    match notification.phase {
        Phase::Entering { show_at } if now >= show_at => {
            if notification.pinned || notification.hovered {
                notification.countdown.start(now);
                notification.countdown.pause(now);
            } else {
                notification.countdown.start(show_at);
            }
            notification.phase = Phase::Shown;
            events.push(Event::Shown(notification.id()));
        }
        Phase::Shown => {
            if let Some(handle) = notification.countdown.due(now) {
                if notification.countdown.expire(handle) {
                    notification.phase = Phase::Hiding {
                        remove_at: handle.at().unwrap_or(now) + EXIT_TRANSITION,
                    };
                    events.push(Event::Expired(notification.id()));
                }
            }
        }
        Phase::Closing { hide_at } if now >= hide_at => {
            notification.phase = Phase::Hiding {
                remove_at: hide_at + EXIT_TRANSITION,
            };
            events.push(Event::Hidden(notification.id()));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::timer::TimerState;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn manager_with_ceiling(max: usize) -> Manager {
        let mut manager = Manager::new();
        manager.configure(SettingsPatch::default().max_visible_toasts(max));
        manager
    }

    /// Lets a user-closed toast go through its grace delay and exit transition.
    fn run_close(manager: &mut Manager, id: NotificationId, at: Instant) -> Vec<Event> {
        assert!(manager.dismiss_at(id, DismissReason::User, at));
        let mut events = manager.tick(at + USER_CLOSE_GRACE);
        events.extend(manager.tick(at + USER_CLOSE_GRACE + EXIT_TRANSITION));
        events
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(Position::TopRight), 0);
        assert_eq!(manager.pending_count(Position::TopRight), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn enqueue_shows_when_space_available() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let id = manager.enqueue_at(Notification::success("saved"), t0);

        assert_eq!(manager.visible_count(Position::TopRight), 1);
        assert_eq!(
            manager.get(id).map(Notification::phase),
            Some(Phase::Entering {
                show_at: t0 + SHOW_DELAY
            })
        );

        let events = manager.tick(t0 + SHOW_DELAY);
        assert_eq!(events, vec![Event::Shown(id)]);
        assert_eq!(
            manager.get(id).map(Notification::timer_state),
            Some(TimerState::Running)
        );
    }

    #[test]
    fn enqueue_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let max = manager.settings().max_visible_toasts();

        for i in 0..max {
            manager.enqueue_at(Notification::info(format!("test-{i}")), t0);
        }
        let queued = manager.enqueue_at(Notification::info("queued"), t0);

        assert_eq!(manager.visible_count(Position::TopRight), max);
        assert_eq!(manager.pending_count(Position::TopRight), 1);
        assert_eq!(manager.get(queued).map(Notification::phase), Some(Phase::Queued));
    }

    #[test]
    fn visible_count_never_exceeds_ceiling() {
        let mut manager = manager_with_ceiling(2);
        let t0 = Instant::now();

        for i in 0..6 {
            manager.enqueue_at(
                Notification::info(format!("toast-{i}")).with_duration(ms(1000)),
                t0 + ms(i * 10),
            );
            assert!(manager.visible_count(Position::TopRight) <= 2);
        }

        for step in 0..100 {
            manager.tick(t0 + ms(step * 50));
            assert!(manager.visible_count(Position::TopRight) <= 2);
        }
        assert!(!manager.has_notifications());
    }

    #[test]
    fn promotion_is_fifo() {
        let mut manager = manager_with_ceiling(1);
        let t0 = Instant::now();

        let first = manager.enqueue_at(Notification::info("first"), t0);
        let a = manager.enqueue_at(Notification::info("A"), t0);
        let b = manager.enqueue_at(Notification::info("B"), t0);
        let c = manager.enqueue_at(Notification::info("C"), t0);
        manager.tick(t0 + SHOW_DELAY);

        let mut shown_order = Vec::new();
        let mut at = t0 + ms(500);
        let mut current = first;
        for _ in 0..3 {
            let events = run_close(&mut manager, current, at);
            let promoted: Vec<NotificationId> = events
                .iter()
                .filter_map(|event| match event {
                    Event::Promoted(id) => Some(*id),
                    _ => None,
                })
                .collect();
            assert_eq!(promoted.len(), 1);
            current = promoted[0];
            shown_order.push(current);
            at += ms(1000);
            manager.tick(at);
        }

        assert_eq!(shown_order, vec![a, b, c]);
    }

    #[test]
    fn groups_have_independent_ceilings() {
        let mut manager = manager_with_ceiling(1);
        let t0 = Instant::now();

        manager.enqueue_at(Notification::info("a"), t0);
        manager.enqueue_at(
            Notification::info("b").with_position(Position::BottomLeft),
            t0,
        );

        assert_eq!(manager.visible_count(Position::TopRight), 1);
        assert_eq!(manager.visible_count(Position::BottomLeft), 1);
        assert_eq!(manager.pending_count(Position::BottomLeft), 0);
    }

    #[test]
    fn bottom_zones_insert_newest_first() {
        let mut manager = Manager::new();
        let t0 = Instant::now();

        let top_a = manager.enqueue_at(Notification::info("a"), t0);
        let top_b = manager.enqueue_at(Notification::info("b"), t0);
        let bottom_a = manager.enqueue_at(
            Notification::info("a").with_position(Position::CenterBottom),
            t0,
        );
        let bottom_b = manager.enqueue_at(
            Notification::info("b").with_position(Position::CenterBottom),
            t0,
        );

        let top: Vec<_> = manager.visible(Position::TopRight).map(Notification::id).collect();
        let bottom: Vec<_> = manager
            .visible(Position::CenterBottom)
            .map(Notification::id)
            .collect();
        assert_eq!(top, vec![top_a, top_b]);
        assert_eq!(bottom, vec![bottom_b, bottom_a]);
    }

    #[test]
    fn countdown_expires_after_duration() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let id = manager.enqueue_at(Notification::info("bye").with_duration(ms(3000)), t0);
        let shown_at = t0 + SHOW_DELAY;
        manager.tick(shown_at);

        assert!(manager.tick(shown_at + ms(2999)).is_empty());
        assert_eq!(manager.tick(shown_at + ms(3000)), vec![Event::Expired(id)]);

        let events = manager.tick(shown_at + ms(3000) + EXIT_TRANSITION);
        assert!(events.contains(&Event::Removed(id)));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn hover_pause_preserves_remaining_time() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let id = manager.enqueue_at(Notification::info("hover").with_duration(ms(3000)), t0);
        let shown_at = t0 + SHOW_DELAY;
        manager.tick(shown_at);

        assert!(manager.hover_enter_at(id, shown_at + ms(1000)));
        let remaining = manager.get(id).map(|n| n.remaining(shown_at + ms(9000)));
        assert_eq!(remaining, Some(ms(2000)));
        assert!(manager.tick(shown_at + ms(9000)).is_empty());

        let left_at = shown_at + ms(10_000);
        assert!(manager.hover_leave_at(id, left_at));
        assert!(manager.tick(left_at + ms(1999)).is_empty());
        assert_eq!(manager.tick(left_at + ms(2000)), vec![Event::Expired(id)]);
    }

    #[test]
    fn click_pins_until_second_click() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let id = manager.enqueue_at(Notification::info("pin me").with_duration(ms(1000)), t0);
        let shown_at = t0 + SHOW_DELAY;
        manager.tick(shown_at);

        manager.hover_enter_at(id, shown_at + ms(100));
        manager.click_at(id, shown_at + ms(150));
        manager.hover_leave_at(id, shown_at + ms(200));

        let notification = manager.get(id).expect("still present");
        assert!(notification.is_pinned());
        assert_eq!(notification.timer_state(), TimerState::Paused);
        assert!(manager.tick(shown_at + ms(60_000)).is_empty());

        manager.click_at(id, shown_at + ms(60_000));
        let notification = manager.get(id).expect("still present");
        assert!(!notification.is_pinned());
        assert_eq!(notification.timer_state(), TimerState::Running);
        assert_eq!(
            manager.tick(shown_at + ms(60_900)),
            vec![Event::Expired(id)]
        );
    }

    #[test]
    fn toggle_expand_flips_state_and_pins() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let long = manager.enqueue_at(Notification::info("x".repeat(150)), t0);
        let short = manager.enqueue_at(Notification::info("short"), t0);
        manager.tick(t0 + SHOW_DELAY);

        assert!(manager.toggle_expand_at(long, t0 + ms(200)));
        let notification = manager.get(long).expect("present");
        assert!(notification.is_expanded());
        assert!(notification.is_pinned());
        assert_eq!(notification.timer_state(), TimerState::Paused);

        assert!(manager.toggle_expand_at(long, t0 + ms(300)));
        let notification = manager.get(long).expect("present");
        assert!(!notification.is_expanded());
        assert!(notification.is_pinned());

        assert!(!manager.toggle_expand_at(short, t0 + ms(300)));
        assert!(!manager.get(short).is_some_and(Notification::is_pinned));
    }

    #[test]
    fn closing_last_toast_tears_down_container() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let id = manager.enqueue_at(Notification::info("only"), t0);
        let container = manager.container(Position::TopRight).expect("created");
        manager.tick(t0 + SHOW_DELAY);

        let events = run_close(&mut manager, id, t0 + ms(500));
        assert!(events.contains(&Event::Removed(id)));
        assert!(events.contains(&Event::ContainerRemoved(Position::TopRight, container)));
        assert!(manager.container(Position::TopRight).is_none());

        manager.enqueue_at(Notification::info("again"), t0 + ms(2000));
        let fresh = manager.container(Position::TopRight).expect("recreated");
        assert_ne!(fresh, container);
    }

    #[test]
    fn container_survives_while_toasts_are_pending() {
        let mut manager = manager_with_ceiling(1);
        let t0 = Instant::now();
        let first = manager.enqueue_at(Notification::info("first"), t0);
        manager.enqueue_at(Notification::info("second"), t0);
        let container = manager.container(Position::TopRight);
        manager.tick(t0 + SHOW_DELAY);

        run_close(&mut manager, first, t0 + ms(500));
        assert_eq!(manager.container(Position::TopRight), container);
        assert_eq!(manager.visible_count(Position::TopRight), 1);
    }

    #[test]
    fn close_then_expiry_dismisses_once() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let id = manager.enqueue_at(Notification::info("race").with_duration(ms(300)), t0);
        let shown_at = t0 + SHOW_DELAY;
        manager.tick(shown_at);

        // Close just before the countdown would have run out.
        assert!(manager.dismiss_at(id, DismissReason::User, shown_at + ms(290)));
        assert!(!manager.dismiss_at(id, DismissReason::Expired, shown_at + ms(300)));

        let mut events = Vec::new();
        for step in 0..20 {
            events.extend(manager.tick(shown_at + ms(290 + step * 50)));
        }
        let removed = events
            .iter()
            .filter(|event| **event == Event::Removed(id))
            .count();
        assert_eq!(removed, 1);
        assert!(!events.contains(&Event::Expired(id)));
    }

    #[test]
    fn dismiss_pending_removes_it_from_queue() {
        let mut manager = manager_with_ceiling(1);
        let t0 = Instant::now();
        manager.enqueue_at(Notification::info("visible"), t0);
        let pending = manager.enqueue_at(Notification::info("pending"), t0);

        assert!(manager.dismiss_at(pending, DismissReason::User, t0));
        assert_eq!(manager.pending_count(Position::TopRight), 0);
        assert!(manager.get(pending).is_none());
    }

    #[test]
    fn stale_ids_are_ignored() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let fake_id = Notification::info("temp").id();

        assert!(!manager.dismiss_at(fake_id, DismissReason::User, t0));
        assert!(!manager.hover_enter_at(fake_id, t0));
        assert!(!manager.click_at(fake_id, t0));
        assert!(!manager.toggle_expand_at(fake_id, t0));
    }

    #[test]
    fn interaction_while_entering_starts_paused() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let id = manager.enqueue_at(Notification::info("early").with_duration(ms(1000)), t0);

        manager.hover_enter_at(id, t0 + ms(50));
        manager.tick(t0 + SHOW_DELAY);

        let notification = manager.get(id).expect("present");
        assert_eq!(notification.timer_state(), TimerState::Paused);
        assert_eq!(notification.remaining(t0 + ms(5000)), ms(1000));
    }

    #[test]
    fn raised_ceiling_promotes_on_next_tick() {
        let mut manager = manager_with_ceiling(1);
        let t0 = Instant::now();
        manager.enqueue_at(Notification::info("a"), t0);
        let b = manager.enqueue_at(Notification::info("b"), t0);

        manager.configure(SettingsPatch::default().max_visible_toasts(2));
        let events = manager.tick(t0 + ms(10));

        assert!(events.contains(&Event::Promoted(b)));
        assert_eq!(manager.visible_count(Position::TopRight), 2);
    }

    #[test]
    fn default_duration_applies_at_enqueue_time() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let before = manager.enqueue_at(Notification::info("before"), t0);

        manager.configure(SettingsPatch::default().default_duration(ms(8000)));
        let after = manager.enqueue_at(Notification::info("after"), t0);

        assert_eq!(
            manager.get(before).map(Notification::total_duration),
            Some(ms(3000))
        );
        assert_eq!(
            manager.get(after).map(Notification::total_duration),
            Some(ms(8000))
        );
    }

    #[test]
    fn handle_message_close_goes_through_grace_delay() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let id = manager.enqueue_at(Notification::info("close me"), t0);
        manager.tick(t0 + SHOW_DELAY);

        manager.handle_message_at(&Message::Close(id), t0 + ms(500));
        assert_eq!(
            manager.get(id).map(Notification::phase),
            Some(Phase::Closing {
                hide_at: t0 + ms(500) + USER_CLOSE_GRACE
            })
        );

        manager.handle_message(&Message::Tick(t0 + ms(500) + USER_CLOSE_GRACE));
        assert!(manager.get(id).is_some_and(Notification::is_leaving));
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        for position in Position::ALL {
            manager.enqueue_at(Notification::info("x").with_position(position), t0);
        }
        assert_eq!(manager.positions().count(), Position::ALL.len());

        manager.clear();
        assert!(!manager.has_notifications());
    }

    #[test]
    fn unbounded_duration_stays_on_screen() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let id = manager.enqueue_at(
            Notification::info("sticky").with_duration(Duration::MAX),
            t0,
        );

        manager.tick(t0 + ms(100));
        manager.tick(t0 + ms(3_600_000));

        let notification = manager.get(id).expect("still present");
        assert_eq!(notification.phase(), Phase::Shown);
        assert!(manager.dismiss_at(id, DismissReason::User, t0 + ms(3_600_001)));
    }
}
