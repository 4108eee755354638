use clap::Parser;

/// Camctl - stream viewer and remote command client
#[derive(Parser, Debug)]
#[command(name = "camctl")]
#[command(version)]
#[command(about = "View a video stream and send single-key commands to a remote listener")]
#[command(long_about = "Camctl opens a video stream (RTSP URL or local file), shows it in a window,
and forwards recognized key presses as one-character commands over TCP.

Keys: n, r, m, e, d, b, c, a send the matching command byte; x quits.
The meaning of each command is defined by the remote listener.")]
pub struct Cli {
    /// Video stream source (RTSP URL or local file path)
    #[arg(short, long)]
    pub stream: String,

    /// Command server host
    #[arg(short = 'H', long)]
    pub host: String,

    /// Command server port
    #[arg(short, long)]
    pub port: u16,
}
