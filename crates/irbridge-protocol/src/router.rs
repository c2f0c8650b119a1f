//! Routing of inbound message text to remote-control actions.
//!
//! Dispatch is stateless: each line is matched independently and no session
//! state survives between messages. Slash commands match by prefix of the
//! command token, key presses by exact comparison of the whole line.

use crate::{count_words, parse_u16, RemoteKey, SendCodeError};
use log::debug;

/// What an inbound message asks the bridge to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Send the welcome banner and the reply keyboard.
    Start,
    /// Send the command reference text.
    Help,
    /// Transmit a user-supplied code, or report why the argument was bad.
    Send(Result<u16, SendCodeError>),
    /// Transmit the code bound to a named key.
    Key(RemoteKey),
}

/// Route a message line to an action.
///
/// Returns `None` for text that matches nothing; such messages are dropped
/// without a reply or a transmission.
pub fn route(text: &str) -> Option<Action> {
    let action = if text.starts_with("/start") {
        Action::Start
    } else if text.starts_with("/help") {
        Action::Help
    } else if text.starts_with("/send") {
        Action::Send(extract_send_code(text))
    } else {
        Action::Key(RemoteKey::from_label(text)?)
    };

    debug!("Routed {:?} to {:?}", text, action);
    Some(action)
}

/// Extract and parse the `/send` argument.
///
/// The argument is everything after the first space. A line with fewer than
/// two words, or nothing after that space, has no argument; each failure is
/// reported exactly once.
fn extract_send_code(text: &str) -> Result<u16, SendCodeError> {
    if count_words(text) < 2 {
        return Err(SendCodeError::MissingArgument);
    }

    let arg = match text.find(' ') {
        Some(pos) if pos + 1 < text.len() => &text[pos + 1..],
        _ => return Err(SendCodeError::MissingArgument),
    };

    parse_u16(arg, 16).map_err(|_| SendCodeError::InvalidCode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_slash_commands() {
        assert_eq!(route("/start"), Some(Action::Start));
        assert_eq!(route("/help"), Some(Action::Help));
        // Prefix match: trailing content is tolerated.
        assert_eq!(route("/start now"), Some(Action::Start));
        assert_eq!(route("/helpme"), Some(Action::Help));
    }

    #[test]
    fn test_route_keys() {
        assert_eq!(route("Power"), Some(Action::Key(RemoteKey::Power)));
        assert_eq!(route("Vol+"), Some(Action::Key(RemoteKey::VolumeUp)));
        assert_eq!(route("7"), Some(Action::Key(RemoteKey::Number7)));
        assert_eq!(route("OK"), Some(Action::Key(RemoteKey::Ok)));
    }

    #[test]
    fn test_route_unrecognized() {
        assert_eq!(route("banana"), None);
        assert_eq!(route(""), None);
        assert_eq!(route("power"), None); // case-sensitive
        assert_eq!(route("Power "), None); // whole-line match
    }

    #[test]
    fn test_send_with_code() {
        assert_eq!(route("/send 0x10EF"), Some(Action::Send(Ok(0x10EF))));
        assert_eq!(route("/send 10EF"), Some(Action::Send(Ok(0x10EF))));
    }

    #[test]
    fn test_send_missing_argument() {
        assert_eq!(
            route("/send"),
            Some(Action::Send(Err(SendCodeError::MissingArgument)))
        );
        assert_eq!(
            route("/send "),
            Some(Action::Send(Err(SendCodeError::MissingArgument)))
        );
    }

    #[test]
    fn test_send_invalid_argument() {
        assert_eq!(
            route("/send 0xZZ"),
            Some(Action::Send(Err(SendCodeError::InvalidCode)))
        );
        assert_eq!(
            route("/send banana"),
            Some(Action::Send(Err(SendCodeError::InvalidCode)))
        );
    }
}
