//! Small immediate-mode widgets shared by the landing and game screens.

use macroquad::prelude::*;

/// Clickable button. Returns true on the frame the left button is pressed
/// while hovering.
pub fn button(x: f32, y: f32, w: f32, h: f32, label: &str) -> bool {
    let hovered = {
        let (mx, my) = mouse_position();
        mx >= x && mx <= x + w && my >= y && my <= y + h
    };
    let pressed = hovered && is_mouse_button_pressed(MouseButton::Left);
    let col = if hovered {
        Color::from_rgba(90, 210, 255, 70)
    } else {
        Color::from_rgba(0, 0, 0, 60)
    };
    draw_rectangle(x, y, w, h, col);
    draw_rectangle_lines(x, y, w, h, 2.0, Color::from_rgba(255, 255, 255, 50));
    let mt = measure_text(label, None, 20, 1.0);
    draw_text(label, x + (w - mt.width) * 0.5, y + h * 0.65, 20.0, WHITE);
    pressed
}

/// Prominent call-to-action variant of [`button`].
pub fn primary_button(x: f32, y: f32, w: f32, h: f32, label: &str) -> bool {
    let hovered = {
        let (mx, my) = mouse_position();
        mx >= x && mx <= x + w && my >= y && my <= y + h
    };
    let pressed = hovered && is_mouse_button_pressed(MouseButton::Left);
    let col = if hovered {
        Color::from_rgba(231, 76, 60, 230)
    } else {
        Color::from_rgba(231, 76, 60, 180)
    };
    draw_rectangle(x, y, w, h, col);
    draw_rectangle_lines(x, y, w, h, 2.0, Color::from_rgba(255, 255, 255, 90));
    let mt = measure_text(label, None, 26, 1.0);
    draw_text(label, x + (w - mt.width) * 0.5, y + h * 0.65, 26.0, WHITE);
    pressed
}

/// Inert affordance (wallet connect, docs, footer links). Drawn dimmed,
/// never fires.
pub fn ghost_button(x: f32, y: f32, w: f32, h: f32, label: &str) {
    draw_rectangle(x, y, w, h, Color::from_rgba(255, 255, 255, 10));
    draw_rectangle_lines(x, y, w, h, 1.0, Color::from_rgba(255, 255, 255, 35));
    let mt = measure_text(label, None, 18, 1.0);
    draw_text(
        label,
        x + (w - mt.width) * 0.5,
        y + h * 0.65,
        18.0,
        Color::from_rgba(255, 255, 255, 130),
    );
}

/// Translucent panel with a thin outline, the common HUD backdrop.
pub fn panel(x: f32, y: f32, w: f32, h: f32) {
    draw_rectangle(x, y, w, h, Color::from_rgba(0, 0, 0, 110));
    draw_rectangle_lines(x, y, w, h, 2.0, Color::from_rgba(255, 255, 255, 40));
}

pub fn centered_text(text: &str, cx: f32, y: f32, size: f32, color: Color) {
    let mt = measure_text(text, None, size.round() as u16, 1.0);
    draw_text(text, cx - mt.width * 0.5, y, size, color);
}

/// Lighten a color toward white; used for head-segment emphasis.
pub fn lighten(c: Color, amount: f32) -> Color {
    Color::new(
        c.r + (1.0 - c.r) * amount,
        c.g + (1.0 - c.g) * amount,
        c.b + (1.0 - c.b) * amount,
        c.a,
    )
}

/// Same color with a different alpha.
pub fn with_alpha(c: Color, alpha: f32) -> Color {
    Color::new(c.r, c.g, c.b, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_toward_white() {
        let c = Color::new(0.2, 0.4, 0.6, 1.0);
        let l = lighten(c, 0.5);
        assert!(l.r > c.r && l.g > c.g && l.b > c.b);
        assert!((lighten(c, 1.0).r - 1.0).abs() < 1e-6);
        assert!((l.a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::new(0.2, 0.4, 0.6, 1.0);
        let t = with_alpha(c, 0.3);
        assert!((t.r - c.r).abs() < 1e-6);
        assert!((t.a - 0.3).abs() < 1e-6);
    }
}
