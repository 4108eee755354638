use anyhow::Context;
use opencv::core::Mat;
use std::io;

use crate::command::{Command, KeyAction};
use crate::config::Config;
use crate::display::{DisplayError, DisplayWindow};
use crate::sender::CommandSender;
use crate::video_reader::FrameSource;

/// Pull interface over the video stream. Any non-success read is treated
/// as end-of-stream.
pub trait FrameStream {
    fn next_frame(&mut self) -> Option<Mat>;
}

/// Render-and-poll interface over the display window.
pub trait FrameSink {
    fn render(&mut self, frame: &Mat) -> Result<(), DisplayError>;
    fn poll_key(&mut self) -> Result<Option<u8>, DisplayError>;
}

/// Fire-and-forget command transmission.
pub trait CommandSink {
    fn send(&mut self, command: Command) -> io::Result<()>;
}

/// Opens the stream and the display window, then drives the control loop
/// until the stream ends or the quit key is pressed.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut source = FrameSource::open(&config.stream_source)
        .with_context(|| format!("Failed to open stream {}", config.stream_source))?;
    println!(
        "Stream opened: {}x{} @ {:.1} fps",
        source.width(),
        source.height(),
        source.fps()
    );

    let mut window = DisplayWindow::new("Stream").context("Failed to create display window")?;
    let mut sender = CommandSender::new(&config.command_host, config.command_port);

    run_loop(&mut source, &mut window, &mut sender)?;
    Ok(())
}

/// One read-display-dispatch cycle per iteration. Terminates cleanly when
/// the frame read fails or the quit key is pressed; a failed command send is
/// logged and never stops the loop.
pub fn run_loop<S, D, C>(stream: &mut S, display: &mut D, sender: &mut C) -> Result<(), DisplayError>
where
    S: FrameStream,
    D: FrameSink,
    C: CommandSink,
{
    loop {
        let Some(frame) = stream.next_frame() else {
            eprintln!("Failed to retrieve frame, stopping");
            return Ok(());
        };

        display.render(&frame)?;

        match KeyAction::classify(display.poll_key()?) {
            KeyAction::Quit => return Ok(()),
            KeyAction::Send(command) => {
                if let Err(e) = sender.send(command) {
                    eprintln!("Error sending command '{}': {}", command.as_char(), e);
                }
            }
            KeyAction::Ignore => {}
        }
    }
}
