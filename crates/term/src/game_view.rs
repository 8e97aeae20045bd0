//! GameView: maps a `RenderModel` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The same layout is
//! used for drawing and for mouse hit-testing, so a click always lands on what
//! the player sees.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rect, Rgb};
use crate::projection::{project, CellVisual, RenderModel, StatusBanner};
use crate::types::{GameAction, Mark, BOARD_CELLS, BOARD_SIDE};

const TITLE: &str = "Tic Tac Toe";
const FOOTER: &str = "Game state persists during session";
const NEW_ROUND_LABEL: &str = "[ New Round ]";
const RESET_SCORES_LABEL: &str = "[ Reset Scores ]";

/// Narrowest content column; the footer has to fit.
const MIN_CONTENT_W: u16 = 34;

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const EMPTY_BG: Rgb = Rgb::new(30, 30, 40);
const FILLED_BG: Rgb = Rgb::new(45, 45, 58);
const X_COLOR: Rgb = Rgb::new(52, 211, 153);
const O_COLOR: Rgb = Rgb::new(96, 165, 250);
const DRAW_COLOR: Rgb = Rgb::new(245, 158, 11);
const RESET_COLOR: Rgb = Rgb::new(248, 113, 113);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const MUTED: Rgb = Rgb::new(140, 140, 150);
const GRID: Rgb = Rgb::new(90, 90, 100);
const CURSOR: Rgb = Rgb::new(250, 250, 250);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// What a terminal position maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Cell(usize),
    NewRound,
    ResetScores,
}

impl From<HitTarget> for GameAction {
    fn from(value: HitTarget) -> Self {
        match value {
            HitTarget::Cell(index) => GameAction::PlayCell(index),
            HitTarget::NewRound => GameAction::NewRound,
            HitTarget::ResetScores => GameAction::ResetScores,
        }
    }
}

/// Screen geometry for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Column the whole layout is drawn in.
    pub content: Rect,
    pub title_y: u16,
    pub scores_y: u16,
    pub status_y: u16,
    /// Outer frame of the grid, including borders.
    pub grid: Rect,
    pub new_round: Rect,
    pub reset_scores: Rect,
    pub footer_y: u16,
    cell_w: u16,
    cell_h: u16,
}

impl Layout {
    /// Inner rectangle of board cell `index` (no borders).
    pub fn cell_rect(&self, index: usize) -> Rect {
        let side = BOARD_SIDE as usize;
        let row = (index / side) as u16;
        let col = (index % side) as u16;
        Rect::new(
            self.grid.x + 1 + col * (self.cell_w + 1),
            self.grid.y + 1 + row * (self.cell_h + 1),
            self.cell_w,
            self.cell_h,
        )
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitTarget> {
        if self.grid.contains(x, y) {
            return (0..BOARD_CELLS)
                .find(|&i| self.cell_rect(i).contains(x, y))
                .map(HitTarget::Cell);
        }
        if self.new_round.contains(x, y) {
            return Some(HitTarget::NewRound);
        }
        if self.reset_scores.contains(x, y) {
            return Some(HitTarget::ResetScores);
        }
        None
    }
}

/// A lightweight terminal renderer for the Tic-Tac-Toe game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Roughly square cells on typical terminal glyph aspect ratios.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// Cells narrower than 3 columns or shorter than 1 row are clamped.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(3),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Total rows used by the layout.
    pub fn content_height(&self) -> u16 {
        // title + gap, 3 score rows + gap, 2 status rows + gap,
        // grid + gap, controls + gap, footer
        2 + 4 + 3 + self.grid_h() + 1 + 2 + 1
    }

    fn grid_w(&self) -> u16 {
        self.cell_w * BOARD_SIDE as u16 + BOARD_SIDE as u16 + 1
    }

    fn grid_h(&self) -> u16 {
        self.cell_h * BOARD_SIDE as u16 + BOARD_SIDE as u16 + 1
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let grid_w = self.grid_w();
        let grid_h = self.grid_h();
        let content_w = grid_w.max(MIN_CONTENT_W);
        let content_h = self.content_height();

        let x = viewport.width.saturating_sub(content_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(content_h) / 2,
            AnchorY::Top => 0,
        };

        let title_y = y;
        let scores_y = title_y + 2;
        let status_y = scores_y + 4;
        let grid_y = status_y + 3;
        let controls_y = grid_y + grid_h + 1;
        let footer_y = controls_y + 2;

        let half = content_w / 2;
        let nr_w = NEW_ROUND_LABEL.chars().count() as u16;
        let rs_w = RESET_SCORES_LABEL.chars().count() as u16;

        Layout {
            content: Rect::new(x, y, content_w, content_h),
            title_y,
            scores_y,
            status_y,
            grid: Rect::new(x + (content_w - grid_w) / 2, grid_y, grid_w, grid_h),
            new_round: Rect::new(x + half.saturating_sub(nr_w) / 2, controls_y, nr_w, 1),
            reset_scores: Rect::new(
                x + half + (content_w - half).saturating_sub(rs_w) / 2,
                controls_y,
                rs_w,
                1,
            ),
            footer_y,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    /// Map a terminal position to a board cell or control.
    pub fn hit_test(&self, viewport: Viewport, x: u16, y: u16) -> Option<HitTarget> {
        self.layout(viewport).hit_test(x, y)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let model = project(snap, cursor);
        self.render_model_into(&model, viewport, fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, cursor: Option<usize>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    pub fn render_model_into(&self, model: &RenderModel, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT, SCREEN_BG).into_cell(' '));

        let layout = self.layout(viewport);
        let content = layout.content;

        fb.put_str_centered(
            content.x,
            layout.title_y,
            content.w,
            TITLE,
            CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold(),
        );

        self.draw_scores(fb, model, &layout);
        self.draw_status(fb, model.status, &layout);
        self.draw_grid(fb, model, &layout);
        self.draw_controls(fb, &layout);

        fb.put_str_centered(
            content.x,
            layout.footer_y,
            content.w,
            FOOTER,
            CellStyle::new(MUTED, SCREEN_BG).dim(),
        );
    }

    fn draw_scores(&self, fb: &mut FrameBuffer, model: &RenderModel, layout: &Layout) {
        let content = layout.content;
        let col_w = content.w / 3;
        let value = CellStyle::new(TEXT, SCREEN_BG).bold();
        let caption = CellStyle::new(MUTED, SCREEN_BG);

        let columns: [(&str, Rgb, u32, Option<&str>); 3] = [
            ("X", X_COLOR, model.scores.x_wins, Some("Wins")),
            ("Draws", DRAW_COLOR, model.scores.draws, None),
            ("O", O_COLOR, model.scores.o_wins, Some("Wins")),
        ];

        for (i, (label, color, count, sub)) in columns.into_iter().enumerate() {
            let x = content.x + col_w * i as u16;
            let y = layout.scores_y;
            fb.put_str_centered(x, y, col_w, label, CellStyle::new(color, SCREEN_BG).bold());

            let num_w = FrameBuffer::u32_width(count);
            fb.put_u32(x + col_w.saturating_sub(num_w) / 2, y + 1, count, value);

            if let Some(sub) = sub {
                fb.put_str_centered(x, y + 2, col_w, sub, caption);
            }
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, status: StatusBanner, layout: &Layout) {
        let content = layout.content;
        let y = layout.status_y;

        match status {
            StatusBanner::Win(_) | StatusBanner::Draw => {
                let color = if status.show_draw_banner() {
                    DRAW_COLOR
                } else {
                    X_COLOR
                };
                fb.put_str_centered(
                    content.x,
                    y,
                    content.w,
                    status.headline(),
                    CellStyle::new(color, SCREEN_BG).bold(),
                );
                if let Some(sub) = status.subline() {
                    fb.put_str_centered(
                        content.x,
                        y + 1,
                        content.w,
                        sub,
                        CellStyle::new(MUTED, SCREEN_BG),
                    );
                }
            }
            StatusBanner::Turn(current) => {
                // "Current turn:  X   O " with the side to move lit up.
                let label = status.headline();
                let total = label.chars().count() as u16 + 1 + 3 + 1 + 3;
                let start = content.x + content.w.saturating_sub(total) / 2;
                let mut x = fb.put_str(start, y, label, CellStyle::new(TEXT, SCREEN_BG)) + 1;
                for mark in [Mark::X, Mark::O] {
                    let style = if mark == current {
                        CellStyle::new(SCREEN_BG, mark_color(mark)).bold()
                    } else {
                        CellStyle::new(MUTED, FILLED_BG).dim()
                    };
                    fb.put_char(x, y, ' ', style);
                    fb.put_str(x + 1, y, mark.as_str(), style);
                    fb.put_char(x + 2, y, ' ', style);
                    x += 4;
                }
            }
        }
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, model: &RenderModel, layout: &Layout) {
        let grid = layout.grid;
        let line = CellStyle::new(GRID, SCREEN_BG);
        fb.draw_box(grid, line);

        // Inner separators and their junctions.
        for k in 1..BOARD_SIDE as u16 {
            let sx = grid.x + k * (self.cell_w + 1);
            let sy = grid.y + k * (self.cell_h + 1);
            for dy in 1..grid.h - 1 {
                fb.put_char(sx, grid.y + dy, '│', line);
            }
            for dx in 1..grid.w - 1 {
                fb.put_char(grid.x + dx, sy, '─', line);
            }
            fb.put_char(sx, grid.y, '┬', line);
            fb.put_char(sx, grid.y + grid.h - 1, '┴', line);
            fb.put_char(grid.x, sy, '├', line);
            fb.put_char(grid.x + grid.w - 1, sy, '┤', line);
        }
        for kx in 1..BOARD_SIDE as u16 {
            for ky in 1..BOARD_SIDE as u16 {
                fb.put_char(
                    grid.x + kx * (self.cell_w + 1),
                    grid.y + ky * (self.cell_h + 1),
                    '┼',
                    line,
                );
            }
        }

        for (i, cell) in model.cells.iter().enumerate() {
            let rect = layout.cell_rect(i);
            let (bg, fg, bold) = match cell.visual {
                CellVisual::Highlighted(Mark::X) => (Rgb::new(6, 78, 59), Rgb::new(167, 243, 208), true),
                CellVisual::Highlighted(Mark::O) => (Rgb::new(30, 58, 138), Rgb::new(191, 219, 254), true),
                CellVisual::Filled => (FILLED_BG, cell.mark.map(mark_color).unwrap_or(TEXT), true),
                CellVisual::Empty => (EMPTY_BG, GRID, false),
            };
            let fill = CellStyle {
                fg,
                bg,
                bold,
                dim: false,
            };
            fb.fill_rect(rect, ' ', fill);

            let cx = rect.x + rect.w / 2;
            let cy = rect.y + rect.h / 2;
            match cell.mark {
                Some(mark) => fb.put_char(cx, cy, mark_glyph(mark), fill),
                None if cell.interactive => fb.put_char(cx, cy, '·', fill.dim()),
                None => {}
            }
        }

        if let Some(index) = model.cursor {
            let rect = layout.cell_rect(index);
            fb.draw_box(
                Rect::new(rect.x - 1, rect.y - 1, rect.w + 2, rect.h + 2),
                CellStyle::new(CURSOR, SCREEN_BG).bold(),
            );
        }
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let nr = layout.new_round;
        let rs = layout.reset_scores;
        fb.put_str(nr.x, nr.y, NEW_ROUND_LABEL, CellStyle::new(TEXT, FILLED_BG).bold());
        fb.put_str(rs.x, rs.y, RESET_SCORES_LABEL, CellStyle::new(RESET_COLOR, FILLED_BG).bold());
    }
}

fn mark_color(mark: Mark) -> Rgb {
    match mark {
        Mark::X => X_COLOR,
        Mark::O => O_COLOR,
    }
}

fn mark_glyph(mark: Mark) -> char {
    match mark {
        Mark::X => '✕',
        Mark::O => '○',
    }
}
