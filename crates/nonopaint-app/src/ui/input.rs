use eframe::egui::{InputState, Key};

use crate::action::{
    Action, ActionRequestQueue, GridAction, HistoryAction, SettingsAction, ViewAction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Trigger {
    key: Key,
    command: bool,
    shift: bool,
}

impl Trigger {
    const fn new(key: Key, command: bool, shift: bool) -> Self {
        Self {
            key,
            command,
            shift,
        }
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn command(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger::new(key, true, false),
            action,
        }
    }

    const fn command_shift(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger::new(key, true, true),
            action,
        }
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger::new(key, false, false),
            action,
        }
    }
}

const SHORTCUTS: [Shortcut; 6] = [
    Shortcut::command(Key::Z, Action::History(HistoryAction::Undo)),
    Shortcut::command(Key::Y, Action::History(HistoryAction::Redo)),
    Shortcut::command_shift(Key::Z, Action::History(HistoryAction::Redo)),
    Shortcut::command(Key::Delete, Action::Grid(GridAction::ClearAll)),
    Shortcut::plain(Key::Home, Action::View(ViewAction::ResetPosition)),
    Shortcut::plain(Key::H, Action::Settings(SettingsAction::ToggleHideAnswer)),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is Ctrl on Windows/Linux and Cmd on Mac
    for shortcut in SHORTCUTS {
        let triggered = i.key_pressed(shortcut.trigger.key)
            && i.modifiers.command == shortcut.trigger.command
            && i.modifiers.shift == shortcut.trigger.shift;

        if triggered {
            action_queue.request(shortcut.action);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SHORTCUTS;

    #[test]
    fn triggers_are_unique() {
        let triggers: Vec<_> = SHORTCUTS.iter().map(|s| s.trigger).collect();
        for (i, a) in triggers.iter().enumerate() {
            assert!(
                triggers[i + 1..].iter().all(|b| a != b),
                "duplicate shortcut {a:?}"
            );
        }
    }
}
