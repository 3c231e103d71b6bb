pub mod choreographer;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod events;
pub mod gate;
pub mod loader;
pub mod material;
pub mod pose;
pub mod ports;
pub mod rig;
pub mod session;
pub mod showcase;
pub mod timeline;
pub mod tween;

pub use choreographer::Choreographer;
pub use config::*;
pub use constants::*;
pub use device::*;
pub use error::*;
pub use events::*;
pub use gate::*;
pub use loader::*;
pub use material::*;
pub use pose::*;
pub use ports::*;
pub use rig::*;
pub use session::*;
pub use showcase::*;
pub use timeline::*;
pub use tween::*;
