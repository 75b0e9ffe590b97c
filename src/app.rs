use macroquad::prelude::*;

use crate::game::GameView;
use crate::landing::LandingView;
use crate::state;

/// The two screens the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    Game,
}

/// Transition request returned by the active screen's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    None,
    Play,
    Back,
}

/// View shell: holds the screen selector and nothing else.
#[derive(Debug, Default)]
pub struct Shell {
    screen: Screen,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn apply(&mut self, action: ScreenAction) {
        self.screen = match action {
            ScreenAction::Play => Screen::Game,
            ScreenAction::Back => Screen::Landing,
            ScreenAction::None => self.screen,
        };
    }
}

pub async fn run() {
    let mut shell = Shell::new();
    let mut landing = LandingView::new();
    let mut game = GameView::new(state::mock_state());

    info!("godai client started");

    loop {
        let action = match shell.screen() {
            Screen::Landing => landing.frame(),
            Screen::Game => game.frame(),
        };

        let prev = shell.screen();
        shell.apply(action);
        if shell.screen() != prev {
            info!("screen: {:?} -> {:?}", prev, shell.screen());
        }

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_landing() {
        let shell = Shell::new();
        assert_eq!(shell.screen(), Screen::Landing);
        assert_ne!(shell.screen(), Screen::Game);
    }

    #[test]
    fn play_enters_game_once() {
        let mut shell = Shell::new();
        shell.apply(ScreenAction::Play);
        assert_eq!(shell.screen(), Screen::Game);
        // A second Play is a no-op transition-wise.
        shell.apply(ScreenAction::Play);
        assert_eq!(shell.screen(), Screen::Game);
    }

    #[test]
    fn back_returns_to_landing() {
        let mut shell = Shell::new();
        shell.apply(ScreenAction::Play);
        shell.apply(ScreenAction::Back);
        assert_eq!(shell.screen(), Screen::Landing);
    }

    #[test]
    fn none_keeps_current_screen() {
        let mut shell = Shell::new();
        shell.apply(ScreenAction::None);
        assert_eq!(shell.screen(), Screen::Landing);
        shell.apply(ScreenAction::Play);
        shell.apply(ScreenAction::None);
        assert_eq!(shell.screen(), Screen::Game);
    }
}
