//! Helpers for rendering into a `TestBackend`.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};

/// Draw once into a fresh test terminal and return the buffer.
///
/// The closure receives the frame and its full area.
pub fn draw<F>(width: u16, height: u16, f: F) -> Buffer
where
    F: FnOnce(&mut Frame, Rect),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let frame = terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    frame.buffer.clone()
}

/// One buffer row as a string.
pub fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

/// Whole buffer, rows joined with newlines.
pub fn text(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| row(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}
