//! HUD overlay for the game screen: player panel, element legend, rankings
//! and the controls hint. Values are fixed, nothing here binds to the scene.

use macroquad::prelude::*;

use crate::constants::{HUD_PANEL_W, UI_PAD};
use crate::elements::Element;
use crate::state::{GameState, MOCK_SCORE};
use crate::ui;

/// One line of the element-hierarchy legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendRow {
    pub element: Element,
    pub beats: Element,
}

/// Legend rows, one per element in cycle order.
pub fn legend_rows() -> Vec<LegendRow> {
    Element::CYCLE
        .into_iter()
        .map(|element| LegendRow {
            element,
            beats: element.beats(),
        })
        .collect()
}

/// Ranking rows: (name, color, link count), sorted by link count descending.
pub fn ranking_rows(state: &GameState) -> Vec<(&'static str, Color, usize)> {
    let mut rows: Vec<(&'static str, Color, usize)> = state
        .players
        .iter()
        .map(|p| (p.name, p.color, p.links.len()))
        .collect();
    rows.sort_by(|a, b| b.2.cmp(&a.2));
    rows
}

pub fn draw(state: &GameState) {
    let w = screen_width();
    let h = screen_height();

    draw_player_panel(state, UI_PAD, 80.0);
    draw_legend_panel(w - HUD_PANEL_W - UI_PAD, UI_PAD);
    draw_rankings_panel(state, w - HUD_PANEL_W - UI_PAD, 240.0);

    // Arrow-key hint is copy only; no movement input is wired.
    ui::centered_text(
        "Drag to rotate  |  Scroll to zoom  |  Arrow keys to move",
        w * 0.5,
        h - 24.0,
        20.0,
        Color::from_rgba(255, 255, 255, 160),
    );
}

fn draw_player_panel(state: &GameState, x: f32, y: f32) {
    let Some(player) = state.players.first() else {
        return;
    };
    ui::panel(x, y, HUD_PANEL_W, 140.0);
    draw_text(player.name, x + 14.0, y + 30.0, 24.0, WHITE);

    // Element badge
    let badge_y = y + 44.0;
    draw_rectangle(x + 14.0, badge_y, 110.0, 28.0, player.element.color());
    draw_text(
        player.element.glyph(),
        x + 22.0,
        badge_y + 20.0,
        18.0,
        WHITE,
    );
    draw_text(
        player.element.name(),
        x + 52.0,
        badge_y + 20.0,
        18.0,
        WHITE,
    );

    draw_text(
        &format!("Links: {}", player.links.len()),
        x + 14.0,
        y + 104.0,
        20.0,
        Color::from_rgba(255, 255, 255, 210),
    );
    draw_text(
        &format!("Score: {}", MOCK_SCORE),
        x + 14.0,
        y + 128.0,
        20.0,
        Color::from_rgba(255, 255, 255, 210),
    );
}

fn draw_legend_panel(x: f32, y: f32) {
    let rows = legend_rows();
    let height = 48.0 + rows.len() as f32 * 28.0;
    ui::panel(x, y, HUD_PANEL_W, height);
    draw_text("ELEMENT HIERARCHY", x + 14.0, y + 28.0, 20.0, WHITE);

    let mut row_y = y + 58.0;
    for row in rows {
        draw_circle(x + 22.0, row_y - 6.0, 6.0, row.element.color());
        draw_text(row.element.name(), x + 38.0, row_y, 18.0, WHITE);
        draw_text(
            &format!("beats {}", row.beats.name()),
            x + 120.0,
            row_y,
            18.0,
            Color::from_rgba(255, 255, 255, 150),
        );
        row_y += 28.0;
    }
}

fn draw_rankings_panel(state: &GameState, x: f32, y: f32) {
    let rows = ranking_rows(state);
    let height = 48.0 + rows.len() as f32 * 26.0;
    ui::panel(x, y, HUD_PANEL_W, height);
    draw_text("RANKINGS", x + 14.0, y + 28.0, 20.0, WHITE);

    let mut row_y = y + 56.0;
    for (rank, (name, color, links)) in rows.into_iter().enumerate() {
        draw_text(&format!("{}.", rank + 1), x + 14.0, row_y, 18.0, WHITE);
        draw_text(name, x + 38.0, row_y, 18.0, color);
        draw_text(
            &format!("{} links", links),
            x + HUD_PANEL_W - 70.0,
            row_y,
            18.0,
            Color::from_rgba(255, 255, 255, 180),
        );
        row_y += 26.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::mock_state;

    #[test]
    fn legend_has_one_row_per_element() {
        let rows = legend_rows();
        assert_eq!(rows.len(), Element::CYCLE.len());
        for (element, row) in Element::CYCLE.into_iter().zip(&rows) {
            assert_eq!(row.element, element);
            assert_eq!(row.beats, element.beats());
        }
    }

    #[test]
    fn legend_shows_the_declared_cycle() {
        let rows = legend_rows();
        assert_eq!(rows[0].element, Element::Void);
        assert_eq!(rows[0].beats, Element::Earth);
        assert_eq!(rows[4].element, Element::Wind);
        assert_eq!(rows[4].beats, Element::Void);
    }

    #[test]
    fn rankings_cover_every_player() {
        let state = mock_state();
        let rows = ranking_rows(&state);
        assert_eq!(rows.len(), state.players.len());
        // Both mock serpents have 4 links; order stays stable.
        assert_eq!(rows[0].0, "Your Serpent");
        assert_eq!(rows[0].2, 4);
        assert_eq!(rows[1].0, "Earth Wyrm");
        assert_eq!(rows[1].2, 4);
    }
}
