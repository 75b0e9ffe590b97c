//! Landing screen: nav, hero, how-to-play steps, element cards, hierarchy
//! strip and footer, all built from the fixed element table. The only live
//! output is the PLAY NOW action; wallet/docs/social affordances are inert.

use macroquad::prelude::*;

use crate::app::ScreenAction;
use crate::constants::{LANDING_CONTENT_H, LANDING_NAV_H, LANDING_SCROLL_SPEED};
use crate::elements::Element;
use crate::ui;

/// How-to-play copy. Fixed, rendered as-is.
pub const STEPS: [Step; 3] = [
    Step {
        num: "01",
        title: "SPAWN",
        body: &[
            "Enter the arena as a serpent of elemental",
            "energy. Choose your starting position wisely.",
        ],
    },
    Step {
        num: "02",
        title: "CONSUME",
        body: &[
            "Absorb elemental orbs scattered across the",
            "3D space to grow your serpent and gain power.",
        ],
    },
    Step {
        num: "03",
        title: "DOMINATE",
        body: &[
            "Collide with rival serpents. Higher elements",
            "shatter lower ones. Rule the Godai.",
        ],
    },
];

pub struct Step {
    pub num: &'static str,
    pub title: &'static str,
    pub body: &'static [&'static str],
}

// Section anchors in content space (pre-scroll).
const HERO_Y: f32 = 150.0;
const HOW_TO_PLAY_Y: f32 = 760.0;
const ELEMENTS_Y: f32 = 1160.0;
const FOOTER_Y: f32 = 1800.0;

pub struct LandingView {
    scroll: f32,
}

impl LandingView {
    pub fn new() -> Self {
        Self { scroll: 0.0 }
    }

    pub fn frame(&mut self) -> ScreenAction {
        let w = screen_width();
        let h = screen_height();

        let (_wx, wy) = mouse_wheel();
        if wy.abs() > 0.001 {
            let max_scroll = (LANDING_CONTENT_H - h).max(0.0);
            self.scroll = (self.scroll - wy.signum() * LANDING_SCROLL_SPEED).clamp(0.0, max_scroll);
        }

        clear_background(Color::from_rgba(8, 10, 16, 255));
        draw_backdrop(w, h);

        let mut action = ScreenAction::None;

        let y0 = LANDING_NAV_H - self.scroll;
        if self.draw_hero(w, y0 + HERO_Y) {
            action = ScreenAction::Play;
        }
        draw_how_to_play(w, y0 + HOW_TO_PLAY_Y);
        draw_elements_section(w, y0 + ELEMENTS_Y);
        draw_footer(w, y0 + FOOTER_Y);

        // Nav last so it stays above scrolled content.
        if let Some(anchor) = draw_nav(w) {
            self.scroll = anchor;
        }

        action
    }

    fn draw_hero(&self, w: f32, y: f32) -> bool {
        let cx = w * 0.5;

        // Cheap glitch: a color-shifted echo behind the title.
        draw_text("GODAI", cx - 172.0, y + 4.0, 96.0, Color::from_rgba(231, 76, 60, 90));
        draw_text("GODAI", cx - 168.0, y, 96.0, Color::from_rgba(0, 188, 212, 230));
        ui::centered_text("ELEMENTAL SERPENT", cx, y + 50.0, 34.0, WHITE);
        ui::centered_text(
            "Command a serpent of pure elemental energy. Consume, grow, and",
            cx,
            y + 96.0,
            20.0,
            Color::from_rgba(255, 255, 255, 170),
        );
        ui::centered_text(
            "dominate the 3D arena in this fully onchain strategy game.",
            cx,
            y + 120.0,
            20.0,
            Color::from_rgba(255, 255, 255, 170),
        );

        let play = ui::primary_button(cx - 230.0, y + 160.0, 210.0, 52.0, "PLAY NOW");
        ui::ghost_button(cx + 20.0, y + 160.0, 210.0, 52.0, "READ DOCS");

        draw_stats_row(cx, y + 260.0);
        draw_serpent_preview(cx, y + 360.0);

        play
    }
}

fn draw_backdrop(w: f32, h: f32) {
    // Faint receding floor lines, standing in for the CSS grid-floor.
    let horizon = h * 0.55;
    for i in 0..10 {
        let t = i as f32 / 10.0;
        let ly = horizon + (h - horizon) * t * t;
        draw_line(0.0, ly, w, ly, 1.0, Color::from_rgba(0, 188, 212, 18));
    }
    for i in 0..16 {
        let t = i as f32 / 15.0;
        let x_top = w * (0.2 + 0.6 * t);
        let x_bottom = w * t;
        draw_line(x_top, horizon, x_bottom, h, 1.0, Color::from_rgba(0, 188, 212, 12));
    }
}

/// Fixed nav bar. Returns a scroll anchor when a section link is clicked.
fn draw_nav(w: f32) -> Option<f32> {
    draw_rectangle(0.0, 0.0, w, LANDING_NAV_H, Color::from_rgba(8, 10, 16, 235));
    draw_line(0.0, LANDING_NAV_H, w, LANDING_NAV_H, 1.0, Color::from_rgba(255, 255, 255, 30));

    draw_rectangle(24.0, 22.0, 28.0, 28.0, Element::Earth.color());
    draw_text("GODAI", 64.0, 46.0, 32.0, WHITE);

    let mut anchor = None;
    if ui::button(w - 520.0, 18.0, 150.0, 36.0, "HOW TO PLAY") {
        anchor = Some(HOW_TO_PLAY_Y - 40.0);
    }
    if ui::button(w - 356.0, 18.0, 120.0, 36.0, "ELEMENTS") {
        anchor = Some(ELEMENTS_Y - 40.0);
    }
    ui::ghost_button(w - 206.0, 18.0, 182.0, 36.0, "CONNECT WALLET");
    anchor
}

fn draw_stats_row(cx: f32, y: f32) {
    let stats = [("5", "ELEMENTS"), ("3D", "BATTLES"), ("ENDLESS", "STRATEGY")];
    let spacing = 240.0;
    let start = cx - spacing;
    for (i, (value, label)) in stats.iter().enumerate() {
        let x = start + i as f32 * spacing;
        ui::centered_text(value, x, y, 40.0, Color::from_rgba(0, 188, 212, 255));
        ui::centered_text(label, x, y + 28.0, 18.0, Color::from_rgba(255, 255, 255, 140));
    }
}

/// Five element tiles pulsing with phase-offset bobbing. Pure cosmetics.
fn draw_serpent_preview(cx: f32, y: f32) {
    let tile = 56.0;
    let gap = 10.0;
    let count = Element::CYCLE.len() as f32;
    let start_x = cx - (count * tile + (count - 1.0) * gap) * 0.5;
    let time = get_time() as f32;

    for (i, element) in Element::CYCLE.into_iter().enumerate() {
        let x = start_x + i as f32 * (tile + gap);
        let bob = (time * 2.0 + i as f32 * 0.4).sin() * 6.0;
        let ty = y + bob;
        draw_rectangle(x, ty, tile, tile, element.color());
        draw_rectangle_lines(x, ty, tile, tile, 2.0, Color::from_rgba(255, 255, 255, 60));
        let mt = measure_text(element.glyph(), None, 22, 1.0);
        draw_text(
            element.glyph(),
            x + (tile - mt.width) * 0.5,
            ty + tile * 0.62,
            22.0,
            WHITE,
        );
    }
}

fn draw_how_to_play(w: f32, y: f32) {
    let cx = w * 0.5;
    ui::centered_text("HOW TO PLAY", cx, y, 40.0, WHITE);

    let card_w = 340.0;
    let card_h = 190.0;
    let gap = 24.0;
    let total = STEPS.len() as f32 * card_w + (STEPS.len() as f32 - 1.0) * gap;
    let start_x = cx - total * 0.5;

    for (i, step) in STEPS.iter().enumerate() {
        let x = start_x + i as f32 * (card_w + gap);
        let cy = y + 40.0;
        ui::panel(x, cy, card_w, card_h);
        draw_text(step.num, x + 20.0, cy + 48.0, 44.0, Color::from_rgba(0, 188, 212, 200));
        draw_text(step.title, x + 20.0, cy + 86.0, 28.0, WHITE);
        let mut line_y = cy + 120.0;
        for line in step.body {
            draw_text(line, x + 20.0, line_y, 17.0, Color::from_rgba(255, 255, 255, 160));
            line_y += 22.0;
        }
    }
}

fn draw_elements_section(w: f32, y: f32) {
    let cx = w * 0.5;
    ui::centered_text("THE FIVE ELEMENTS", cx, y, 40.0, WHITE);
    ui::centered_text(
        "Master the cycle of creation and destruction",
        cx,
        y + 32.0,
        20.0,
        Color::from_rgba(255, 255, 255, 150),
    );

    let card_w = 200.0;
    let card_h = 220.0;
    let gap = 18.0;
    let count = Element::CYCLE.len() as f32;
    let start_x = cx - (count * card_w + (count - 1.0) * gap) * 0.5;

    for (i, element) in Element::CYCLE.into_iter().enumerate() {
        let x = start_x + i as f32 * (card_w + gap);
        let cy = y + 60.0;
        ui::panel(x, cy, card_w, card_h);
        draw_rectangle_lines(x, cy, card_w, card_h, 2.0, ui::with_alpha(element.color(), 0.5));

        draw_circle(x + card_w * 0.5, cy + 54.0, 26.0, element.color());
        let mt = measure_text(element.glyph(), None, 22, 1.0);
        draw_text(
            element.glyph(),
            x + (card_w - mt.width) * 0.5,
            cy + 61.0,
            22.0,
            WHITE,
        );
        ui::centered_text(element.name(), x + card_w * 0.5, cy + 116.0, 26.0, element.color());

        // Descriptions are short enough for two centered lines.
        let (first, rest) = split_description(element.description());
        ui::centered_text(first, x + card_w * 0.5, cy + 150.0, 16.0, Color::from_rgba(255, 255, 255, 160));
        if !rest.is_empty() {
            ui::centered_text(rest, x + card_w * 0.5, cy + 170.0, 16.0, Color::from_rgba(255, 255, 255, 160));
        }
    }

    draw_hierarchy_strip(cx, y + 330.0);
}

/// Break a card description near its midpoint at a word boundary.
fn split_description(desc: &str) -> (&str, &str) {
    let mid = desc.len() / 2;
    match desc[..mid].rfind(' ') {
        Some(idx) => (&desc[..idx], &desc[idx + 1..]),
        None => (desc, ""),
    }
}

fn draw_hierarchy_strip(cx: f32, y: f32) {
    ui::centered_text("ELEMENTAL HIERARCHY", cx, y, 26.0, WHITE);

    // "Void -> Earth -> Water -> Fire -> Wind", each name in its color.
    let arrow = "  >  ";
    let name_size = 24.0;
    let mut total = 0.0;
    for (i, element) in Element::CYCLE.into_iter().enumerate() {
        total += measure_text(element.name(), None, name_size as u16, 1.0).width;
        if i + 1 < Element::CYCLE.len() {
            total += measure_text(arrow, None, name_size as u16, 1.0).width;
        }
    }

    let mut x = cx - total * 0.5;
    let chain_y = y + 36.0;
    for (i, element) in Element::CYCLE.into_iter().enumerate() {
        draw_text(element.name(), x, chain_y, name_size, element.color());
        x += measure_text(element.name(), None, name_size as u16, 1.0).width;
        if i + 1 < Element::CYCLE.len() {
            draw_text(arrow, x, chain_y, name_size, Color::from_rgba(255, 255, 255, 120));
            x += measure_text(arrow, None, name_size as u16, 1.0).width;
        }
    }

    ui::centered_text(
        "Each element beats the next in the cycle",
        cx,
        y + 70.0,
        18.0,
        Color::from_rgba(255, 255, 255, 140),
    );
}

fn draw_footer(w: f32, y: f32) {
    let cx = w * 0.5;
    draw_line(0.0, y - 30.0, w, y - 30.0, 1.0, Color::from_rgba(255, 255, 255, 30));

    draw_rectangle(cx - 70.0, y - 6.0, 22.0, 22.0, Element::Earth.color());
    draw_text("GODAI", cx - 38.0, y + 12.0, 26.0, WHITE);

    ui::centered_text(
        "Fully onchain. Forever persistent. Truly yours.",
        cx,
        y + 44.0,
        18.0,
        Color::from_rgba(255, 255, 255, 150),
    );

    ui::ghost_button(cx - 190.0, y + 64.0, 110.0, 32.0, "GITHUB");
    ui::ghost_button(cx - 58.0, y + 64.0, 110.0, 32.0, "DISCORD");
    ui::ghost_button(cx + 74.0, y + 64.0, 110.0, 32.0, "TWITTER");

    ui::centered_text(
        "Built with Dojo Engine on Starknet",
        cx,
        y + 130.0,
        16.0,
        Color::from_rgba(255, 255, 255, 100),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_steps_of_copy() {
        assert_eq!(STEPS.len(), 3);
        for step in &STEPS {
            assert!(!step.title.is_empty());
            assert!(!step.body.is_empty());
        }
    }

    #[test]
    fn split_description_breaks_on_a_space() {
        for element in Element::CYCLE {
            let (first, rest) = split_description(element.description());
            assert!(!first.is_empty());
            assert!(!first.ends_with(' '));
            assert!(!rest.starts_with(' '));
        }
    }
}
