//! Pixel Raiders: a top-down arcade shooter with pixel-mask collision.
//!
//! The library holds the whole game core (entities, collision, waves and the
//! session state machine) behind the `frontend` traits.  The binary supplies
//! a terminal frontend.

pub mod assets;
pub mod config;
pub mod constants;
pub mod error;
pub mod frontend;
pub mod laser;
pub mod mask;
pub mod menu;
pub mod session;
pub mod ship;
pub mod wave;

pub use assets::{Assets, Sprite, SpriteId};
pub use error::{AssetError, GameError};
pub use session::{EndReason, Phase, Session};
pub use ship::{EnemyColor, Role, Ship};
