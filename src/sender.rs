use std::io::{self, Write};
use std::net::TcpStream;

use crate::app::CommandSink;
use crate::command::Command;

/// Sends one-character commands to the remote listener, one connection per
/// command. The connection is opened, written, and closed within a single
/// call; it is never reused.
pub struct CommandSender {
    host: String,
    port: u16,
}

impl CommandSender {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_owned(),
            port,
        }
    }

    /// Writes the command's single byte over a fresh connection. No framing,
    /// no acknowledgement, no response read. The stream is closed on every
    /// exit path when it goes out of scope.
    pub fn send(&self, command: Command) -> io::Result<()> {
        let mut stream = TcpStream::connect((self.host.as_str(), self.port))?;
        stream.write_all(&[command.as_byte()])?;
        Ok(())
    }
}

impl CommandSink for CommandSender {
    fn send(&mut self, command: Command) -> io::Result<()> {
        CommandSender::send(self, command)
    }
}
