//! Crossterm terminal driver for pathviz.
//!
//! Provides a [`CrosstermDriver`] that implements [`pathviz_render::Driver`]:
//! raw mode on the alternate screen, mouse capture, and diff frames written
//! as one batched burst per flush.

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute, queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_render::{
    Color, Driver, DriverError, Frame, FrameCell, Key, ModMask, MouseAction, Msg, Point,
};

fn to_ct_color(c: Color) -> CtColor {
    if c.is_default() {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

fn to_mod_mask(mods: KeyModifiers) -> ModMask {
    let mut m = ModMask::NONE;
    if mods.contains(KeyModifiers::SHIFT) {
        m = m | ModMask::SHIFT;
    }
    if mods.contains(KeyModifiers::CONTROL) {
        m = m | ModMask::CTRL;
    }
    if mods.contains(KeyModifiers::ALT) {
        m = m | ModMask::ALT;
    }
    m
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        _ => None,
    }
}

fn to_mouse_action(kind: MouseEventKind) -> Option<MouseAction> {
    let action = match kind {
        MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
        MouseEventKind::Down(MouseButton::Right) => MouseAction::Secondary,
        MouseEventKind::Down(MouseButton::Middle) => MouseAction::Auxiliary,
        MouseEventKind::Drag(MouseButton::Left) => MouseAction::DragMain,
        MouseEventKind::Drag(MouseButton::Right) => MouseAction::DragSecondary,
        MouseEventKind::Up(_) => MouseAction::Release,
        MouseEventKind::Moved => MouseAction::Move,
        _ => return None,
    };
    Some(action)
}

fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            // Some terminals also report releases and repeats.
            if kind != KeyEventKind::Press {
                return None;
            }
            to_key(code).map(|key| Msg::key_mod(key, to_mod_mask(modifiers)))
        }
        Event::Mouse(me) => to_mouse_action(me.kind).map(|action| Msg::Mouse {
            action,
            pos: Point::new(me.column as i32, me.row as i32),
            modifiers: to_mod_mask(me.modifiers),
        }),
        Event::Resize(w, h) => Some(Msg::Screen {
            width: w as i32,
            height: h as i32,
        }),
        _ => None,
    }
}

/// Queue one changed cell: move, colours, then the character. Bold is
/// reset right after the character so it never leaks into the next cell.
fn queue_cell<W: Write>(w: &mut W, fc: &FrameCell) -> io::Result<()> {
    let (p, g) = (fc.pos, fc.glyph);
    if p.x < 0 || p.y < 0 {
        return Ok(());
    }
    queue!(
        w,
        cursor::MoveTo(p.x as u16, p.y as u16),
        SetForegroundColor(to_ct_color(g.style.fg)),
        SetBackgroundColor(to_ct_color(g.style.bg))
    )?;
    if g.style.bold {
        queue!(
            w,
            style::SetAttribute(Attribute::Bold),
            style::Print(g.ch),
            style::SetAttribute(Attribute::Reset)
        )
    } else {
        queue!(w, style::Print(g.ch))
    }
}

/// A terminal back-end using crossterm. Mouse capture is always on: the
/// grid is edited with the mouse.
pub struct CrosstermDriver {
    active: bool,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self { active: false }
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), DriverError> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        log::debug!("terminal initialised");
        Ok(())
    }

    fn poll_msgs(&mut self, timeout: Duration, tx: &Sender<Msg>) -> Result<(), DriverError> {
        if !event::poll(timeout)? {
            return Ok(());
        }

        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            log::trace!("terminal event: {ev:?}");
            if let Some(msg) = to_msg(ev) {
                if tx.send(msg).is_err() {
                    // Receiver gone: the host is shutting down.
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> Result<(), DriverError> {
        let mut stdout = io::stdout().lock();

        for fc in &frame.cells {
            queue_cell(&mut stdout, fc)?;
        }

        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = execute!(
            io::stdout(),
            event::DisableMouseCapture,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}

impl Drop for CrosstermDriver {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};
    use pathviz_render::{Glyph, Style};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn space_and_chars_map_to_keys() {
        assert_eq!(
            to_msg(press(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Msg::key(Key::Space))
        );
        assert_eq!(
            to_msg(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Msg::key_mod(Key::Char('c'), ModMask::CTRL))
        );
        assert_eq!(to_msg(press(KeyCode::F(1), KeyModifiers::NONE)), None);
    }

    #[test]
    fn key_releases_are_dropped() {
        let ev = Event::Key(KeyEvent {
            code: KeyCode::Char('r'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(to_msg(ev), None);
    }

    #[test]
    fn drags_keep_their_button() {
        assert_eq!(
            to_msg(mouse(MouseEventKind::Drag(MouseButton::Left), 4, 2)),
            Some(Msg::mouse(MouseAction::DragMain, Point::new(4, 2)))
        );
        assert_eq!(
            to_msg(mouse(MouseEventKind::Drag(MouseButton::Right), 0, 0)),
            Some(Msg::mouse(MouseAction::DragSecondary, Point::ZERO))
        );
        assert_eq!(to_msg(mouse(MouseEventKind::ScrollUp, 0, 0)), None);
    }

    fn cell_bytes(style: Style) -> String {
        let fc = FrameCell {
            pos: Point::new(3, 1),
            glyph: Glyph::new('!', style),
        };
        let mut out = Vec::new();
        queue_cell(&mut out, &fc).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bold_cells_are_wrapped_in_bold_and_reset() {
        let out = cell_bytes(Style::default().with_fg(Color::from_rgb(9, 8, 7)).bold());
        assert!(out.starts_with("\x1b[2;4H"), "{out:?}");
        assert!(out.contains("\x1b[38;2;9;8;7m"), "{out:?}");
        assert!(out.ends_with("\x1b[1m!\x1b[0m"), "{out:?}");
    }

    #[test]
    fn plain_cells_carry_no_attributes() {
        let out = cell_bytes(Style::default());
        assert!(out.ends_with('!'), "{out:?}");
        assert!(!out.contains("\x1b[1m"));
        assert!(!out.contains("\x1b[0m"));
    }

    #[test]
    fn offscreen_cells_write_nothing() {
        let fc = FrameCell {
            pos: Point::new(-1, 0),
            glyph: Glyph::default(),
        };
        let mut out = Vec::new();
        queue_cell(&mut out, &fc).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn colors_map_to_rgb_or_reset() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
