//! BoardView: composes a terminal frame from a `GameSnapshot`.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::GameSnapshot;
use crate::frame::{Frame, Rgb, Style};
use crate::types::{Color, GRID_HEIGHT, GRID_WIDTH};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const CONTROLS: [(&str, &str); 5] = [
    ("←/→", "move"),
    ("↓", "down"),
    ("↑", "rotate"),
    ("space", "drop"),
    ("q", "quit"),
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    /// Terminal columns per grid cell.
    cell_width: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // Two columns per cell roughly squares up typical terminal glyphs.
        Self { cell_width: 2 }
    }
}

impl BoardView {
    pub fn new(cell_width: u16) -> Self {
        Self {
            cell_width: cell_width.max(1),
        }
    }

    /// Width and height of the bordered board, in terminal cells.
    pub fn board_extent(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.cell_width + 2,
            GRID_HEIGHT as u16 + 2,
        )
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);
        let (frame_w, frame_h) = self.board_extent();
        let left = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut frame, left, top, frame_w, frame_h);

        for row in 0..GRID_HEIGHT as usize {
            for col in 0..GRID_WIDTH as usize {
                let x = left + 1 + col as u16 * self.cell_width;
                let y = top + 1 + row as u16;
                let (ch, style) = match snap.visible_slot(row, col) {
                    Some(color) => ('█', Style::new(color_rgb(color), BOARD_BG).bold()),
                    None => ('·', Style::new(Rgb::new(90, 90, 100), BOARD_BG)),
                };
                frame.fill_rect(x, y, self.cell_width, 1, ch, style);
            }
        }

        self.draw_controls(&mut frame, left + frame_w + 2, top);

        if snap.game_over {
            let text = "GAME OVER";
            let x = left + frame_w.saturating_sub(text.len() as u16) / 2;
            let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
            frame.put_str(x, top + frame_h / 2, text, style);
        }
        frame
    }

    fn draw_border(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
        let (right, bottom) = (x + w - 1, y + h - 1);

        for dx in 1..w - 1 {
            frame.put(x + dx, y, '─', style);
            frame.put(x + dx, bottom, '─', style);
        }
        for dy in 1..h - 1 {
            frame.put(x, y + dy, '│', style);
            frame.put(right, y + dy, '│', style);
        }
        frame.put(x, y, '┌', style);
        frame.put(right, y, '┐', style);
        frame.put(x, bottom, '└', style);
        frame.put(right, bottom, '┘', style);
    }

    fn draw_controls(&self, frame: &mut Frame, x: u16, y: u16) {
        if x >= frame.width() {
            return;
        }
        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(170, 170, 170), PANEL_BG);

        frame.put_str(x, y, "CONTROLS", label);
        for (i, (key, action)) in CONTROLS.iter().enumerate() {
            let row = y + 1 + i as u16;
            frame.put_str(x, row, key, value);
            frame.put_str(x + 7, row, action, value);
        }
    }
}

fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Green => Rgb::new(100, 220, 120),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Magenta => Rgb::new(200, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Orange => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_extent_accounts_for_border_and_cell_width() {
        assert_eq!(BoardView::default().board_extent(), (22, 22));
        assert_eq!(BoardView::new(1).board_extent(), (12, 22));
        assert_eq!(BoardView::new(0).board_extent(), (12, 22));
    }

    #[test]
    fn every_color_maps_to_a_distinct_rgb() {
        let colors = [
            Color::Green,
            Color::Yellow,
            Color::Blue,
            Color::Magenta,
            Color::Red,
            Color::Cyan,
            Color::Orange,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(color_rgb(*a), color_rgb(*b));
            }
        }
    }
}
