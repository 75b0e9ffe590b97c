//! Static 3D scene for the board view.
//!
//! [`build_scene`] turns the mock game state into a flat list of shapes once
//! at screen entry; drawing just walks that list every frame. Orb labels are
//! projected through the camera matrix and drawn as 2D text after the 3D pass.

use macroquad::camera::Camera;
use macroquad::prelude::*;

use crate::constants::{
    CELL_SIZE, GRID_CELLS, HEAD_BRIGHTEN, LINK_SIZE, ORB_HOVER, ORB_LABEL_FONT_SIZE,
    ORB_LABEL_RISE, ORB_RADIUS, WALL_ALPHA, WALL_HEIGHT, WALL_THICKNESS,
};
use crate::state::GameState;
use crate::ui::{lighten, with_alpha};

/// One serpent body segment.
pub struct LinkShape {
    pub center: Vec3,
    pub color: Color,
    pub head: bool,
}

pub struct OrbShape {
    pub center: Vec3,
    pub color: Color,
    pub label: &'static str,
}

/// Translucent boundary slab along one grid edge.
pub struct WallShape {
    pub center: Vec3,
    pub size: Vec3,
}

pub struct SceneModel {
    pub links: Vec<LinkShape>,
    pub orbs: Vec<OrbShape>,
    pub walls: Vec<WallShape>,
}

pub fn build_scene(state: &GameState) -> SceneModel {
    let mut links = Vec::new();
    for player in &state.players {
        for (i, pos) in player.links.iter().enumerate() {
            links.push(LinkShape {
                center: pos.to_world(),
                color: player.color,
                head: i == 0,
            });
        }
    }

    let orbs = state
        .orbs
        .iter()
        .map(|orb| OrbShape {
            center: orb.pos.to_world() + vec3(0.0, ORB_HOVER, 0.0),
            color: orb.color,
            label: orb.element.name(),
        })
        .collect();

    // Four slabs just outside the grid edge, matching the floor extent.
    let half = GRID_CELLS as f32 * CELL_SIZE * 0.5;
    let edge = half + WALL_THICKNESS * 0.5;
    let span = GRID_CELLS as f32 * CELL_SIZE;
    let wall_y = WALL_HEIGHT * 0.5;
    let walls = vec![
        WallShape {
            center: vec3(0.0, wall_y, -edge),
            size: vec3(span, WALL_HEIGHT, WALL_THICKNESS),
        },
        WallShape {
            center: vec3(0.0, wall_y, edge),
            size: vec3(span, WALL_HEIGHT, WALL_THICKNESS),
        },
        WallShape {
            center: vec3(-edge, wall_y, 0.0),
            size: vec3(WALL_THICKNESS, WALL_HEIGHT, span),
        },
        WallShape {
            center: vec3(edge, wall_y, 0.0),
            size: vec3(WALL_THICKNESS, WALL_HEIGHT, span),
        },
    ];

    SceneModel { links, orbs, walls }
}

/// Draw the 3D pass. Expects the caller to have set the scene camera.
pub fn draw_scene(scene: &SceneModel) {
    draw_grid(
        GRID_CELLS as u32,
        CELL_SIZE,
        Color::from_rgba(68, 68, 68, 255),
        Color::from_rgba(34, 34, 34, 255),
    );

    let link_size = vec3(LINK_SIZE, LINK_SIZE, LINK_SIZE);
    for link in &scene.links {
        if link.head {
            // Brightened body plus a wire shell instead of an emissive material.
            let glow = lighten(link.color, HEAD_BRIGHTEN);
            draw_cube(link.center, link_size, None, glow);
            draw_cube_wires(link.center, link_size * 1.08, lighten(link.color, 0.6));
        } else {
            draw_cube(link.center, link_size, None, link.color);
        }
    }

    for orb in &scene.orbs {
        draw_sphere(orb.center, ORB_RADIUS, None, orb.color);
    }

    // Translucent walls last so they blend over the board.
    let wall_color = with_alpha(RED, WALL_ALPHA);
    for wall in &scene.walls {
        draw_cube(wall.center, wall.size, None, wall_color);
    }
}

/// Draw orb labels as screen-space text. Expects the default camera.
pub fn draw_labels(scene: &SceneModel, camera: &Camera3D) {
    let matrix = camera.matrix();
    for orb in &scene.orbs {
        let world = orb.center + vec3(0.0, ORB_LABEL_RISE, 0.0);
        let Some((sx, sy)) = project_to_screen(matrix, world) else {
            continue;
        };
        let mt = measure_text(orb.label, None, ORB_LABEL_FONT_SIZE.round() as u16, 1.0);
        draw_text(orb.label, sx - mt.width * 0.5, sy, ORB_LABEL_FONT_SIZE, WHITE);
    }
}

/// World position to screen pixels through a view-projection matrix.
/// Returns None when the point is behind the camera.
fn project_to_screen(matrix: Mat4, world: Vec3) -> Option<(f32, f32)> {
    let clip = matrix * vec4(world.x, world.y, world.z, 1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    let sx = (ndc.x + 1.0) * 0.5 * screen_width();
    let sy = (1.0 - ndc.y) * 0.5 * screen_height();
    Some((sx, sy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::mock_state;

    #[test]
    fn one_cuboid_per_link() {
        let scene = build_scene(&mock_state());
        // Two players with four links each.
        assert_eq!(scene.links.len(), 8);
    }

    #[test]
    fn one_sphere_per_orb() {
        let scene = build_scene(&mock_state());
        assert_eq!(scene.orbs.len(), 5);
    }

    #[test]
    fn exactly_one_head_per_player() {
        let state = mock_state();
        let scene = build_scene(&state);
        let heads: Vec<&LinkShape> = scene.links.iter().filter(|l| l.head).collect();
        assert_eq!(heads.len(), state.players.len());
        // Heads are the first link of each chain.
        for (player, head) in state.players.iter().zip(&heads) {
            let expected = player.links[0].to_world();
            assert!((head.center - expected).length() < 1e-6);
        }
    }

    #[test]
    fn orbs_carry_element_labels() {
        let state = mock_state();
        let scene = build_scene(&state);
        for (orb, shape) in state.orbs.iter().zip(&scene.orbs) {
            assert_eq!(shape.label, orb.element.name());
            assert!(shape.center.y > orb.pos.to_world().y);
        }
    }

    #[test]
    fn four_boundary_walls_hug_the_grid() {
        let scene = build_scene(&mock_state());
        assert_eq!(scene.walls.len(), 4);
        let half = GRID_CELLS as f32 * CELL_SIZE * 0.5;
        for wall in &scene.walls {
            let reach = wall.center.x.abs().max(wall.center.z.abs());
            assert!(reach > half && reach < half + 1.0);
        }
    }
}
