//! Game screen: orbit-camera 3D board plus the HUD overlay.

mod camera;
mod hud;
mod scene;

use macroquad::prelude::*;

use crate::app::ScreenAction;
use crate::constants::{BACK_BUTTON_H, BACK_BUTTON_W, UI_PAD};
use crate::state::GameState;
use crate::ui;

pub use camera::OrbitCamera;

pub struct GameView {
    state: GameState,
    scene: scene::SceneModel,
    camera: OrbitCamera,
}

impl GameView {
    pub fn new(state: GameState) -> Self {
        let scene = scene::build_scene(&state);
        Self {
            state,
            scene,
            camera: OrbitCamera::new(),
        }
    }

    pub fn frame(&mut self) -> ScreenAction {
        self.camera.handle_input();

        clear_background(Color::from_rgba(10, 12, 18, 255));

        let cam = self.camera.camera();
        set_camera(&cam);
        scene::draw_scene(&self.scene);

        set_default_camera();
        scene::draw_labels(&self.scene, &cam);
        hud::draw(&self.state);

        if ui::button(UI_PAD, UI_PAD, BACK_BUTTON_W, BACK_BUTTON_H, "< BACK TO HOME") {
            return ScreenAction::Back;
        }
        ScreenAction::None
    }
}
