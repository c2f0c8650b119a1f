//! Static reply texts and the reply-keyboard layout.

use crate::RemoteKey;

/// Welcome banner sent in response to `/start`.
pub const TEXT_START: &str = "Hello, I am a bot that turns chat commands into infrared \
     signals for your TV.\n\nCheck /help command to see a list of available commands.";

/// Command reference sent in response to `/help`.
pub const TEXT_HELP: &str = "Available Commands:\n\n\
     /start - Show start text.\n\
     /help - Show actual text.\n\
     /send [CODE] - Send an IR signal of provided NEC.\n";

/// Sent when `/send` is missing its code argument.
pub const TEXT_SEND_NO_ARG: &str = "You need to provide a NEC code.\nExample:\n/send 0x10EF";

/// Sent when the `/send` argument is not a valid hex code.
pub const TEXT_SEND_BAD_ARG: &str = "Invalid NEC code.\nExample:\n/send 0x10EF";

/// Reply-keyboard button grid sent along with the welcome banner.
///
/// Every label resolves through [`RemoteKey::from_label`], so each button
/// press comes back as a dispatchable key message.
pub const KEYBOARD: &[&[&str]] = &[
    &["Power", "Prog+", "Prog-"],
    &["7", "8", "9", "Mute"],
    &["4", "5", "6", "Vol+"],
    &["1", "2", "3", "Vol-"],
    &["Media", "Up", "Info"],
    &["Left", "OK", "Right"],
    &["Settings", "Down", "Back"],
    &["0", "Exit"],
];

/// Render the keyboard grid as the JSON array-of-rows form chat transports
/// expect for reply-keyboard markup.
pub fn keyboard_json() -> String {
    serde_json::to_string(KEYBOARD).unwrap_or_else(|_| "[]".to_string())
}

/// Confirmation reply for a named key press.
pub fn key_sent(key: RemoteKey) -> String {
    match key {
        RemoteKey::Number0
        | RemoteKey::Number1
        | RemoteKey::Number2
        | RemoteKey::Number3
        | RemoteKey::Number4
        | RemoteKey::Number5
        | RemoteKey::Number6
        | RemoteKey::Number7
        | RemoteKey::Number8
        | RemoteKey::Number9 => format!("IR num {} signal sent.", key.label()),
        _ => format!("IR {} signal sent.", key.label()),
    }
}

/// Confirmation reply for a `/send` transmission, with the code formatted
/// as 4-digit uppercase hex.
pub fn custom_sent(code: u16) -> String {
    format!("IR Custom signal (0x{code:04X}) sent.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_labels_resolve() {
        for row in KEYBOARD {
            for label in *row {
                assert!(
                    RemoteKey::from_label(label).is_some(),
                    "keyboard label {label:?} has no key"
                );
            }
        }
    }

    #[test]
    fn test_keyboard_json_shape() {
        let json = keyboard_json();
        assert!(json.starts_with("[["));
        assert!(json.contains("\"Power\""));
        assert!(json.contains("\"Vol+\""));
    }

    #[test]
    fn test_confirmation_texts() {
        assert_eq!(custom_sent(0x10EF), "IR Custom signal (0x10EF) sent.");
        assert_eq!(custom_sent(0x004F), "IR Custom signal (0x004F) sent.");
        assert_eq!(key_sent(RemoteKey::Power), "IR Power signal sent.");
        assert_eq!(key_sent(RemoteKey::Number7), "IR num 7 signal sent.");
    }
}
