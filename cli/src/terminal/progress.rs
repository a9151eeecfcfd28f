use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const TEMPLATE: &str = "{spinner:.blue} {msg} [{bar:30.green/white}] {pos}/{len}";

static PROGRESS: OnceLock<ProgressBar> = OnceLock::new();

/// The shared bar. Hidden until [`start`] gives it a terminal to draw on.
pub fn get_progress() -> &'static ProgressBar {
    PROGRESS.get_or_init(ProgressBar::hidden)
}

pub fn start(total: usize, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let pb: &ProgressBar = get_progress();
    let style: ProgressStyle = ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.set_length(total as u64);
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.enable_steady_tick(TICK_INTERVAL);
}

pub fn advance(port: u16) {
    let pb: &ProgressBar = get_progress();
    pb.set_message(format!("port {port}"));
    pb.inc(1);
}

pub fn finish() {
    get_progress().finish_and_clear();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Writes log lines to one of the standard streams without tearing the progress bar.
pub struct ProgressWriter {
    stream: Stream,
}

impl ProgressWriter {
    pub fn new(stream: Stream) -> Self {
        Self { stream }
    }
}

impl Write for ProgressWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        get_progress().suspend(|| match self.stream {
            Stream::Stdout => write_line(io::stdout().lock(), buf),
            Stream::Stderr => write_line(io::stderr().lock(), buf),
        })?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().flush(),
            Stream::Stderr => io::stderr().flush(),
        }
    }
}

fn write_line(mut out: impl Write, buf: &[u8]) -> io::Result<()> {
    out.write_all(buf)?;
    out.flush()
}
