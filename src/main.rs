use macroquad::prelude::*;

mod app;
mod constants;
mod elements;
mod game;
mod landing;
mod state;
mod ui;

fn window_conf() -> Conf {
    Conf {
        window_title: "Godai: Elemental Serpent".to_owned(),
        window_width: 1280,
        window_height: 800,
        high_dpi: true,
        ..Default::default()
    }
}

fn main() {
    macroquad::Window::from_config(window_conf(), app::run());
}
