use eframe::egui::{FontId, Pos2, Rect, Stroke, Ui, Vec2};

use crate::color;
use crate::state::MarkerOverlay;

// Board geometry in screen points.
const BOARD_PADDING: f32 = 6.0;
const LINE_SPACING: f32 = 2.0;
const STICK_HEIGHT: f32 = 14.0;
const STICK_WIDTH: f32 = 2.0;
const CORNER_RADIUS: f32 = 5.0;

// ---------------------------------------------------------------------------
// Marker overlay
// ---------------------------------------------------------------------------

/// Draw the marker above the selected bar: a rounded board with the country
/// name and rate, connected to the bar top by a short stick.
///
/// `anchor` is the screen position of the bar's top centre. The board is
/// sized to its text and clamped horizontally into `frame` so markers on
/// edge bars stay fully visible.
pub fn draw(ui: &Ui, frame: Rect, anchor: Pos2, overlay: &MarkerOverlay) {
    let painter = ui.painter();

    let name_galley = painter.layout_no_wrap(
        overlay.country_text.clone(),
        FontId::proportional(13.0),
        color::MARKER_TEXT,
    );
    let rate_galley = painter.layout_no_wrap(
        overlay.rate_text.clone(),
        FontId::proportional(12.0),
        color::MARKER_TEXT,
    );

    let text_width = name_galley.rect.width().max(rate_galley.rect.width());
    let board_size = Vec2::new(
        text_width + 2.0 * BOARD_PADDING,
        name_galley.rect.height() + rate_galley.rect.height() + LINE_SPACING + 2.0 * BOARD_PADDING,
    );

    let board_bottom = anchor.y - STICK_HEIGHT;
    let mut board_rect = Rect::from_min_size(
        Pos2::new(anchor.x - board_size.x / 2.0, board_bottom - board_size.y),
        board_size,
    );

    // Clamp into the plot frame for bars near either edge.
    if board_rect.min.x < frame.min.x {
        board_rect = board_rect.translate(Vec2::new(frame.min.x - board_rect.min.x, 0.0));
    }
    if board_rect.max.x > frame.max.x {
        board_rect = board_rect.translate(Vec2::new(frame.max.x - board_rect.max.x, 0.0));
    }

    painter.line_segment(
        [anchor, Pos2::new(anchor.x, board_rect.max.y)],
        Stroke::new(STICK_WIDTH, color::HIGHLIGHT),
    );
    painter.rect_filled(board_rect, CORNER_RADIUS, color::HIGHLIGHT);

    let name_pos = Pos2::new(
        board_rect.center().x - name_galley.rect.width() / 2.0,
        board_rect.min.y + BOARD_PADDING,
    );
    let rate_pos = Pos2::new(
        board_rect.center().x - rate_galley.rect.width() / 2.0,
        name_pos.y + name_galley.rect.height() + LINE_SPACING,
    );
    painter.galley(name_pos, name_galley, color::MARKER_TEXT);
    painter.galley(rate_pos, rate_galley, color::MARKER_TEXT);
}
