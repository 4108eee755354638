/// Keys that map to remote commands. The remote listener defines what each
/// character does; the client only checks membership and forwards the byte.
pub const COMMAND_KEYS: &[u8] = b"nrmedbca";

/// Key that ends the session.
pub const QUIT_KEY: u8 = b'x';

/// A single-character command accepted by the remote listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command(u8);

impl Command {
    /// Returns `Some` only when `key` is in the allowed command set.
    pub fn from_key(key: u8) -> Option<Self> {
        COMMAND_KEYS.contains(&key).then_some(Self(key))
    }

    /// The single byte written to the wire for this command.
    pub fn as_byte(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }
}

/// What the control loop should do with a polled key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Terminate the loop; no command is sent.
    Quit,
    /// Forward the command to the remote listener.
    Send(Command),
    /// No key, or a key outside the recognized set.
    Ignore,
}

impl KeyAction {
    pub fn classify(key: Option<u8>) -> Self {
        match key {
            Some(QUIT_KEY) => Self::Quit,
            Some(key) => Command::from_key(key).map_or(Self::Ignore, Self::Send),
            None => Self::Ignore,
        }
    }
}
