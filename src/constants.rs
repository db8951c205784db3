pub const WINDOW_WIDTH: i32 = 1280;            // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;            // Initial window height
pub const FPS: u32 = 60;                       // Frames per second

pub const SLIDE_INTERVAL_MS: u64 = 4000;       // Time each carousel slide stays up
pub const GALLERY_INTERVAL_MS: u64 = 4000;     // Time each gallery image stays up
pub const HEIGHT_REFRESH_MS: u64 = 0;          // Gallery height refresh, 0 = every frame

pub const PANEL_MARGIN: f32 = 20.0;            // Gap around the carousel and gallery panels
pub const DOT_RADIUS: f32 = 6.0;               // Radius of a carousel indicator
pub const DOT_SPACING: f32 = 22.0;             // Distance between indicator centres
pub const DOT_ROW_HEIGHT: f32 = 40.0;          // Strip under the slide reserved for indicators
