/// Entity parsers are modules that turn a hunk of raw lines (or a whole
/// section) into records. Each parser is a struct with an associated
/// `parse` or `parse_section` function:
///
/// - `parse(hunk, ..) -> Result<Record, ParseError>` for entities that
///   map one hunk to one record;
/// - `parse_section(lines) -> (Vec<Record>, Vec<ParseError>)` for
///   entities located by walking a whole section.
///
/// Parsers are state-free: they locate landmark lines by linear scan and
/// slice the surrounding lines into fields. Anchor patterns live next to
/// the parser that owns them, and hunk-level failures are returned as
/// errors for the caller to report.
pub mod talent;
pub use talent::TalentParser;

pub mod tag;
pub use tag::TagParser;

pub mod skill;
pub use skill::SkillParser;

pub mod frame;
pub use frame::FrameParser;

pub mod manufacturer;
pub use manufacturer::{ManufacturerParser, MANUFACTURERS};

pub mod core_bonus;
pub use core_bonus::CoreBonusParser;

pub mod weapon;
pub use weapon::{GmsWeaponDescs, WeaponParser};

pub mod weapon_mod;
pub use weapon_mod::ModParser;

pub mod system;
pub use system::SystemParser;

pub mod pilot_gear;
pub use pilot_gear::PilotGearParser;

pub mod status;
pub use status::StatusParser;

pub mod action;
pub use action::ActionParser;

pub mod background;
pub use background::BackgroundParser;

pub mod glossary;
pub use glossary::GlossaryParser;

pub mod reserve;
pub use reserve::ReserveParser;

pub mod npc_class;
pub use npc_class::NpcClassParser;

pub mod npc_template;
pub use npc_template::NpcTemplateParser;

pub mod npc_feature;
pub use npc_feature::{FeatureOriginKind, NpcFeatureParser};
