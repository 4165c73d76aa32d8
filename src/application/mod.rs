mod brush;
mod camera;
mod playback;
mod session;
mod stamp;

pub use brush::{Brush, StrokeMode};
pub use camera::Camera;
pub use playback::PlaybackController;
pub use session::Session;
pub use stamp::{ActiveStamp, StampTool, scatter_soup};
