//! Keyboard shortcut collection.

use eframe::egui;

/// Key presses of this frame, in arrival order.
///
/// The platform layer turns the clipboard chords into `Event::Copy` and
/// `Event::Paste` instead of `Event::Key`, so those are mapped back to
/// Cmd+C and Cmd+V here. Cut has no shortcut. Auto-repeat presses are dropped.
pub fn collect_key_presses(ctx: &egui::Context) -> Vec<(egui::Key, egui::Modifiers)> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } => Some((*key, *modifiers)),
                egui::Event::Copy => Some((egui::Key::C, egui::Modifiers::COMMAND)),
                egui::Event::Paste(_) => Some((egui::Key::V, egui::Modifiers::COMMAND)),
                _ => None,
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cioes::command::keymap::command_for_key;
    use cioes::Command;

    fn commands_for(events: Vec<egui::Event>) -> Vec<Command> {
        let ctx = egui::Context::default();
        let raw_input = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut presses = Vec::new();
        let _ = ctx.run(raw_input, |ctx| presses = collect_key_presses(ctx));
        presses
            .into_iter()
            .filter_map(|(key, modifiers)| command_for_key(key, modifiers))
            .collect()
    }

    #[test]
    fn test_clipboard_events_reach_keymap() {
        assert_eq!(commands_for(vec![egui::Event::Copy]), vec![Command::Copy]);
        assert_eq!(commands_for(vec![egui::Event::Paste(String::new())]), vec![Command::Paste]);
        assert!(commands_for(vec![egui::Event::Cut]).is_empty());
    }

    #[test]
    fn test_key_events_skip_repeats_and_releases() {
        let key = |pressed, repeat| egui::Event::Key {
            key: egui::Key::S,
            physical_key: None,
            pressed,
            repeat,
            modifiers: egui::Modifiers::COMMAND,
        };
        let commands = commands_for(vec![key(true, false), key(true, true), key(false, false)]);
        assert_eq!(commands, vec![Command::SaveProject]);
    }
}
