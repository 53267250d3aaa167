pub mod catalog;
pub mod common;
pub mod player;
pub mod world;

pub use catalog::{Available, Class, Weapon};
pub use common::{Coord, Hp, PlayerId};
pub use player::Player;
pub use world::WorldState;
