// Board (visual only, never bounds-checked)
pub const GRID_CELLS: i32 = 20;
pub const CELL_SIZE: f32 = 1.0;

// Link cuboids leave a small gap between adjacent cells.
pub const LINK_SIZE: f32 = 0.9;
// How much brighter head segments draw than body segments.
pub const HEAD_BRIGHTEN: f32 = 0.3;

pub const ORB_RADIUS: f32 = 0.4;
// Orb centers float half a cell above the link row.
pub const ORB_HOVER: f32 = 0.5;
pub const ORB_LABEL_RISE: f32 = 0.8;
pub const ORB_LABEL_FONT_SIZE: f32 = 18.0;

// Boundary walls: thin translucent slabs just outside the grid edge.
pub const WALL_HEIGHT: f32 = 1.0;
pub const WALL_THICKNESS: f32 = 0.1;
pub const WALL_ALPHA: f32 = 0.3;

// Orbit camera. Start pose matches a camera at (15, 15, 15) looking at the
// board center with a 60 degree vertical field of view.
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_START_YAW: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_START_PITCH: f32 = 0.6155;
pub const CAMERA_START_DISTANCE: f32 = 26.0;
pub const CAMERA_ORBIT_SENS: f32 = 0.008;
pub const CAMERA_MAX_PITCH: f32 = 1.4;
pub const CAMERA_ZOOM_STEP: f32 = 0.1;
pub const CAMERA_MIN_DISTANCE: f32 = 6.0;
pub const CAMERA_MAX_DISTANCE: f32 = 80.0;
pub const CAMERA_PAN_SCALE: f32 = 0.002;

// UI
pub const UI_PAD: f32 = 16.0;
pub const HUD_PANEL_W: f32 = 280.0;
pub const BACK_BUTTON_W: f32 = 190.0;
pub const BACK_BUTTON_H: f32 = 40.0;

// Landing layout
pub const LANDING_NAV_H: f32 = 72.0;
pub const LANDING_CONTENT_H: f32 = 2080.0;
pub const LANDING_SCROLL_SPEED: f32 = 40.0;
