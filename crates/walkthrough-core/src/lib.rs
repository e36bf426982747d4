pub mod annotation;
pub mod camera;
pub mod choreographer;
pub mod config;
pub mod constants;
pub mod css3d;
pub mod driver;
pub mod easing;
pub mod error;
pub mod overlay;
pub mod recipe;
pub mod render;
pub mod scene;
pub mod scroll;
pub mod state;
pub mod tween;

pub use annotation::*;
pub use camera::*;
pub use choreographer::*;
pub use config::*;
pub use driver::*;
pub use easing::*;
pub use error::{Result, WalkthroughError};
pub use overlay::*;
pub use recipe::*;
pub use render::*;
pub use scene::*;
pub use scroll::*;
pub use state::*;
pub use tween::*;
