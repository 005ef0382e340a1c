mod id;
pub use id::*;

mod tag_ref;
pub use tag_ref::*;

mod size;
pub use size::*;

mod license;
pub use license::*;

mod frame;
pub use frame::*;

mod weapon;
pub use weapon::*;

mod system;
pub use system::*;

mod weapon_mod;
pub use weapon_mod::*;

mod talent;
pub use talent::*;

mod tag;
pub use tag::*;

mod skill;
pub use skill::*;

mod pilot_gear;
pub use pilot_gear::*;

mod core_bonus;
pub use core_bonus::*;

mod manufacturer;
pub use manufacturer::*;

mod status;
pub use status::*;

mod action;
pub use action::*;

mod background;
pub use background::*;

mod glossary;
pub use glossary::*;

mod reserve;
pub use reserve::*;

mod npc;
pub use npc::*;

mod mask;
pub use mask::*;

mod config;
pub use config::*;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
