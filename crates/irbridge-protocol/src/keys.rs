//! Remote-key vocabulary for the target TV (LG 32LS570S).
//!
//! Each key binds a chat keyword to the 16-bit NEC command code the TV
//! understands. The table is static configuration data captured from the
//! factory handset, never derived at runtime. None of the codes is the
//! reserved repeat sentinel `0xFFFF`.

/// Remote-control keys that can be transmitted to the TV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteKey {
    /// Power toggle (`Power`)
    Power,
    /// On-screen help (`Help`)
    Help,
    /// Aspect ratio (`Ratio`)
    Ratio,
    /// Input source selection (`Media`)
    Input,
    /// TV/Radio toggle (`TvRad`)
    TvRadio,
    /// Digit 1 (`1`)
    Number1,
    /// Digit 2 (`2`)
    Number2,
    /// Digit 3 (`3`)
    Number3,
    /// Digit 4 (`4`)
    Number4,
    /// Digit 5 (`5`)
    Number5,
    /// Digit 6 (`6`)
    Number6,
    /// Digit 7 (`7`)
    Number7,
    /// Digit 8 (`8`)
    Number8,
    /// Digit 9 (`9`)
    Number9,
    /// Digit 0 (`0`)
    Number0,
    /// Volume up (`Vol+`)
    VolumeUp,
    /// Volume down (`Vol-`)
    VolumeDown,
    /// Programme up (`Prog+`)
    ProgramUp,
    /// Programme down (`Prog-`)
    ProgramDown,
    /// Favourite channels (`Fav`)
    Favorites,
    /// Programme info (`Info`)
    Info,
    /// Mute toggle (`Mute`)
    Mute,
    /// Settings menu (`Settings`)
    Settings,
    /// Home menu (`Home`)
    Home,
    /// Apps menu (`Apps`)
    Apps,
    /// Cursor left (`Left`)
    Left,
    /// Cursor right (`Right`)
    Right,
    /// Cursor up (`Up`)
    Up,
    /// Cursor down (`Down`)
    Down,
    /// Confirm (`OK`)
    Ok,
    /// Back (`Back`)
    Back,
    /// Programme guide (`Guide`)
    Guide,
    /// Exit menus (`Exit`)
    Exit,
    /// Red colour key (`Red`)
    Red,
    /// Green colour key (`Green`)
    Green,
    /// Yellow colour key (`Yellow`)
    Yellow,
    /// Blue colour key (`Blue`)
    Blue,
    /// Teletext (`Text`)
    Teletext,
    /// Teletext options (`T.Opt`)
    TeletextOptions,
    /// Quick menu (`Q.Menu`)
    QuickMenu,
    /// Stop playback (`Stop`)
    Stop,
    /// Start playback (`Play`)
    Play,
    /// Pause playback (`Pause`)
    Pause,
    /// Rewind (`Rew`)
    Rewind,
    /// Fast forward (`FF`)
    FastForward,
    /// Record (`Rec`)
    Record,
    /// Energy saving (`Energy`)
    EnergySaving,
    /// Audio description (`AD`)
    AudioDescription,
    /// App key (`App`)
    App,
}

impl RemoteKey {
    /// Every key in the vocabulary, in handset order.
    pub const ALL: [RemoteKey; 49] = [
        RemoteKey::Power,
        RemoteKey::Help,
        RemoteKey::Ratio,
        RemoteKey::Input,
        RemoteKey::TvRadio,
        RemoteKey::Number1,
        RemoteKey::Number2,
        RemoteKey::Number3,
        RemoteKey::Number4,
        RemoteKey::Number5,
        RemoteKey::Number6,
        RemoteKey::Number7,
        RemoteKey::Number8,
        RemoteKey::Number9,
        RemoteKey::Number0,
        RemoteKey::VolumeUp,
        RemoteKey::VolumeDown,
        RemoteKey::ProgramUp,
        RemoteKey::ProgramDown,
        RemoteKey::Favorites,
        RemoteKey::Info,
        RemoteKey::Mute,
        RemoteKey::Settings,
        RemoteKey::Home,
        RemoteKey::Apps,
        RemoteKey::Left,
        RemoteKey::Right,
        RemoteKey::Up,
        RemoteKey::Down,
        RemoteKey::Ok,
        RemoteKey::Back,
        RemoteKey::Guide,
        RemoteKey::Exit,
        RemoteKey::Red,
        RemoteKey::Green,
        RemoteKey::Yellow,
        RemoteKey::Blue,
        RemoteKey::Teletext,
        RemoteKey::TeletextOptions,
        RemoteKey::QuickMenu,
        RemoteKey::Stop,
        RemoteKey::Play,
        RemoteKey::Pause,
        RemoteKey::Rewind,
        RemoteKey::FastForward,
        RemoteKey::Record,
        RemoteKey::EnergySaving,
        RemoteKey::AudioDescription,
        RemoteKey::App,
    ];

    /// The 16-bit NEC command code bound to this key.
    pub fn code(&self) -> u16 {
        match self {
            RemoteKey::Power => 0x10EF,
            RemoteKey::Help => 0x5EA1,
            RemoteKey::Ratio => 0x9E61,
            RemoteKey::Input => 0xD02F,
            RemoteKey::TvRadio => 0x0FF0,
            RemoteKey::Number1 => 0x8877,
            RemoteKey::Number2 => 0x48B7,
            RemoteKey::Number3 => 0xC837,
            RemoteKey::Number4 => 0x28D7,
            RemoteKey::Number5 => 0xA857,
            RemoteKey::Number6 => 0x6897,
            RemoteKey::Number7 => 0xE817,
            RemoteKey::Number8 => 0x18E7,
            RemoteKey::Number9 => 0x9867,
            RemoteKey::Number0 => 0x08F7,
            RemoteKey::VolumeUp => 0x40BF,
            RemoteKey::VolumeDown => 0xC03F,
            RemoteKey::ProgramUp => 0x00FF,
            RemoteKey::ProgramDown => 0x807F,
            RemoteKey::Favorites => 0x7887,
            RemoteKey::Info => 0x55AA,
            RemoteKey::Mute => 0x906F,
            RemoteKey::Settings => 0xC23D,
            RemoteKey::Home => 0x3EC1,
            RemoteKey::Apps => 0x42BD,
            RemoteKey::Left => 0xE01F,
            RemoteKey::Right => 0x609F,
            RemoteKey::Up => 0x02FD,
            RemoteKey::Down => 0x827D,
            RemoteKey::Ok => 0x22DD,
            RemoteKey::Back => 0x14EB,
            RemoteKey::Guide => 0xD52A,
            RemoteKey::Exit => 0xDA25,
            RemoteKey::Red => 0x4EB1,
            RemoteKey::Green => 0x8E71,
            RemoteKey::Yellow => 0xC639,
            RemoteKey::Blue => 0x8679,
            RemoteKey::Teletext => 0x04FB,
            RemoteKey::TeletextOptions => 0x847B,
            RemoteKey::QuickMenu => 0xA25D,
            RemoteKey::Stop => 0x8D72,
            RemoteKey::Play => 0x0DF2,
            RemoteKey::Pause => 0x5DA2,
            RemoteKey::Rewind => 0xF10E,
            RemoteKey::FastForward => 0x718E,
            RemoteKey::Record => 0xBD42,
            RemoteKey::EnergySaving => 0xA956,
            RemoteKey::AudioDescription => 0x8976,
            RemoteKey::App => 0xF906,
        }
    }

    /// The chat keyword bound to this key.
    pub fn label(&self) -> &'static str {
        match self {
            RemoteKey::Power => "Power",
            RemoteKey::Help => "Help",
            RemoteKey::Ratio => "Ratio",
            RemoteKey::Input => "Media",
            RemoteKey::TvRadio => "TvRad",
            RemoteKey::Number1 => "1",
            RemoteKey::Number2 => "2",
            RemoteKey::Number3 => "3",
            RemoteKey::Number4 => "4",
            RemoteKey::Number5 => "5",
            RemoteKey::Number6 => "6",
            RemoteKey::Number7 => "7",
            RemoteKey::Number8 => "8",
            RemoteKey::Number9 => "9",
            RemoteKey::Number0 => "0",
            RemoteKey::VolumeUp => "Vol+",
            RemoteKey::VolumeDown => "Vol-",
            RemoteKey::ProgramUp => "Prog+",
            RemoteKey::ProgramDown => "Prog-",
            RemoteKey::Favorites => "Fav",
            RemoteKey::Info => "Info",
            RemoteKey::Mute => "Mute",
            RemoteKey::Settings => "Settings",
            RemoteKey::Home => "Home",
            RemoteKey::Apps => "Apps",
            RemoteKey::Left => "Left",
            RemoteKey::Right => "Right",
            RemoteKey::Up => "Up",
            RemoteKey::Down => "Down",
            RemoteKey::Ok => "OK",
            RemoteKey::Back => "Back",
            RemoteKey::Guide => "Guide",
            RemoteKey::Exit => "Exit",
            RemoteKey::Red => "Red",
            RemoteKey::Green => "Green",
            RemoteKey::Yellow => "Yellow",
            RemoteKey::Blue => "Blue",
            RemoteKey::Teletext => "Text",
            RemoteKey::TeletextOptions => "T.Opt",
            RemoteKey::QuickMenu => "Q.Menu",
            RemoteKey::Stop => "Stop",
            RemoteKey::Play => "Play",
            RemoteKey::Pause => "Pause",
            RemoteKey::Rewind => "Rew",
            RemoteKey::FastForward => "FF",
            RemoteKey::Record => "Rec",
            RemoteKey::EnergySaving => "Energy",
            RemoteKey::AudioDescription => "AD",
            RemoteKey::App => "App",
        }
    }

    /// Look up a key by its exact chat keyword.
    pub fn from_label(label: &str) -> Option<RemoteKey> {
        RemoteKey::ALL.iter().copied().find(|k| k.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nec_ir::CODE_RESERVED;
    use std::collections::HashSet;

    #[test]
    fn test_no_key_uses_reserved_code() {
        for key in RemoteKey::ALL {
            assert_ne!(key.code(), CODE_RESERVED, "{:?}", key);
        }
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: HashSet<&str> = RemoteKey::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels.len(), RemoteKey::ALL.len());
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes: HashSet<u16> = RemoteKey::ALL.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), RemoteKey::ALL.len());
    }

    #[test]
    fn test_from_label_round_trip() {
        for key in RemoteKey::ALL {
            assert_eq!(RemoteKey::from_label(key.label()), Some(key));
        }
        assert_eq!(RemoteKey::from_label("banana"), None);
        assert_eq!(RemoteKey::from_label("power"), None); // case-sensitive
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(RemoteKey::Power.code(), 0x10EF);
        assert_eq!(RemoteKey::VolumeUp.code(), 0x40BF);
        assert_eq!(RemoteKey::Input.code(), 0xD02F);
    }
}
