use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use compendium_common::{Config, Mask};
use serde::Serialize;
use serde_json::Value;

mod encoding;
mod newline_fix;
mod output;

use output::DataOutput;

// Default output file names, inside the configured output directory.
const CORE_BONUSES: &str = "core_bonuses.json";
const FRAMES: &str = "frames.json";
const MANUFACTURERS: &str = "manufacturers.json";
const MODS: &str = "mods.json";
const PILOT_GEAR: &str = "pilot_gear.json";
const SKILLS: &str = "skills.json";
const SYSTEMS: &str = "systems.json";
const TAGS: &str = "tags.json";
const TALENTS: &str = "talents.json";
const WEAPONS: &str = "weapons.json";
const STATUSES: &str = "statuses.json";
const ACTIONS: &str = "actions.json";
const BACKGROUNDS: &str = "backgrounds.json";
const GLOSSARY: &str = "glossary.json";
const RESERVES: &str = "reserves.json";
const NPC_CLASSES: &str = "npc_classes.json";
const NPC_TEMPLATES: &str = "npc_templates.json";
const NPC_FEATURES: &str = "npc_features.json";

/// Parses rulebook text into normalized JSON records.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output to stdout instead of files.
    #[arg(long)]
    stdout: bool,
    /// Generate talents JSON.
    #[arg(short = 't', long)]
    talents: bool,
    /// Generate tag data JSON.
    #[arg(short = 'T', long)]
    tags: bool,
    /// Generate pilot gear JSON.
    #[arg(short = 'p', long)]
    pilot_gear: bool,
    /// Generate skill trigger JSON.
    #[arg(short = 's', long)]
    skills: bool,
    /// Generate frame, core bonus, and mech gear JSON.
    #[arg(short = 'f', long)]
    frames: bool,
    /// Generate status/condition JSON.
    #[arg(short = 'S', long)]
    statuses: bool,
    /// Generate action JSON.
    #[arg(short = 'a', long)]
    actions: bool,
    /// Generate pilot background JSON.
    #[arg(short = 'b', long)]
    backgrounds: bool,
    /// Generate combat glossary JSON.
    #[arg(short = 'g', long)]
    glossary: bool,
    /// Generate reserve JSON.
    #[arg(short = 'r', long)]
    reserves: bool,
    /// Generate NPC class, template, and feature JSON.
    #[arg(short = 'n', long)]
    npcs: bool,
    /// Mask file with overrides for specific ids.
    #[arg(short = 'm', long)]
    mask: Option<PathBuf>,
    /// Repair jammed line breaks, write the result to this file, and
    /// exit.
    #[arg(long, value_name = "OUT")]
    fix_newlines: Option<PathBuf>,
    /// Raw text input file.
    raw: PathBuf,
}

fn main() {
    let args = Args::parse();

    let lines = match encoding::read_lines(&args.raw) {
        Ok(lines) => lines,
        Err(err) => {
            eprintln!("Raw input file {} not found: {}", args.raw.display(), err);
            std::process::exit(1);
        }
    };

    if let Some(out) = &args.fix_newlines {
        if let Err(err) = newline_fix::write_fixed(&lines, out) {
            eprintln!("Error writing fixed file {}: {}", out.display(), err);
            std::process::exit(1);
        }
        return;
    }

    let config = match Config::load(".") {
        Ok(config) => config,
        Err(_) => std::process::exit(1),
    };

    let mask = match &args.mask {
        Some(path) => match Mask::load(path) {
            Ok(mask) => mask,
            Err(_) => std::process::exit(1),
        },
        None => Mask::empty(),
    };

    let emitter = Emitter {
        config,
        mask,
        stdout: args.stdout,
    };

    if args.talents {
        match compendium_parser::talents(&lines) {
            Ok(extraction) => {
                println!("Talents start: {}, end: {}", extraction.start, extraction.end);
                report_warnings(&extraction.warnings);
                emitter.emit("talents", TALENTS, "t_", &extraction.records);
            }
            Err(err) => report_skip(err),
        }
    }
    if args.tags {
        match compendium_parser::tags(&lines) {
            Ok(extraction) => {
                println!("Tags start: {}, end: {}", extraction.start, extraction.end);
                emitter.emit("tags", TAGS, "tg_", &extraction.records);
            }
            Err(err) => report_skip(err),
        }
    }
    if args.pilot_gear {
        match compendium_parser::pilot_gear(&lines) {
            Ok(extraction) => {
                println!(
                    "Pilot Gear start: {}, end: {}",
                    extraction.start, extraction.end
                );
                report_warnings(&extraction.warnings);
                emitter.emit("pilot gear", PILOT_GEAR, "pg_", &extraction.records);
            }
            Err(err) => report_skip(err),
        }
    }
    if args.skills {
        match compendium_parser::skills(&lines) {
            Ok(extraction) => {
                println!("Skills start: {}, end: {}", extraction.start, extraction.end);
                emitter.emit("skills", SKILLS, "sk_", &extraction.records);
            }
            Err(err) => report_skip(err),
        }
    }
    if args.frames {
        match compendium_parser::frames(&lines) {
            Ok(extraction) => {
                println!("Frames start: {}, end: {}", extraction.start, extraction.end);
                report_warnings(&extraction.warnings);
                emitter.emit("frames", FRAMES, "mf_", &extraction.frames);
                emitter.emit(
                    "manufacturers",
                    MANUFACTURERS,
                    "mfr_",
                    &extraction.manufacturers,
                );
                emitter.emit("core bonuses", CORE_BONUSES, "cb_", &extraction.core_bonuses);
                emitter.emit("weapons", WEAPONS, "mw_", &extraction.weapons);
                emitter.emit("mods", MODS, "wm_", &extraction.mods);
                emitter.emit("systems", SYSTEMS, "ms_", &extraction.systems);
            }
            Err(err) => report_skip(err),
        }
    }
    if args.statuses {
        match compendium_parser::statuses(&lines) {
            Ok(extraction) => {
                println!(
                    "Statuses start: {}, end: {}",
                    extraction.start, extraction.end
                );
                emitter.emit("statuses", STATUSES, "sts_", &extraction.records);
            }
            Err(err) => report_skip(err),
        }
    }
    if args.actions {
        match compendium_parser::actions(&lines) {
            Ok(extraction) => {
                println!("Actions start: {}, end: {}", extraction.start, extraction.end);
                report_warnings(&extraction.warnings);
                emitter.emit("actions", ACTIONS, "act_", &extraction.records);
            }
            Err(err) => report_skip(err),
        }
    }
    if args.backgrounds {
        match compendium_parser::backgrounds(&lines) {
            Ok(extraction) => {
                println!(
                    "Backgrounds start: {}, end: {}",
                    extraction.start, extraction.end
                );
                report_warnings(&extraction.warnings);
                emitter.emit("backgrounds", BACKGROUNDS, "pbg_", &extraction.records);
            }
            Err(err) => report_skip(err),
        }
    }
    if args.glossary {
        match compendium_parser::glossary(&lines) {
            Ok(extraction) => {
                println!(
                    "Glossary start: {}, end: {}",
                    extraction.start, extraction.end
                );
                emitter.emit("glossary", GLOSSARY, "", &extraction.records);
            }
            Err(err) => report_skip(err),
        }
    }
    if args.reserves {
        match compendium_parser::reserves(&lines) {
            Ok(extraction) => {
                println!(
                    "Reserves start: {}, end: {}",
                    extraction.start, extraction.end
                );
                emitter.emit("reserves", RESERVES, "reserve_", &extraction.records);
            }
            Err(err) => report_skip(err),
        }
    }
    if args.npcs {
        let mut features = Vec::new();
        match compendium_parser::npc_classes(&lines) {
            Ok(extraction) => {
                println!(
                    "NPC Classes start: {}, end: {}",
                    extraction.start, extraction.end
                );
                report_warnings(&extraction.warnings);
                emitter.emit("NPC classes", NPC_CLASSES, "npcc_", &extraction.records);
                features.extend(extraction.features);
            }
            Err(err) => report_skip(err),
        }
        match compendium_parser::npc_templates(&lines) {
            Ok(extraction) => {
                println!(
                    "NPC Templates start: {}, end: {}",
                    extraction.start, extraction.end
                );
                report_warnings(&extraction.warnings);
                emitter.emit("NPC templates", NPC_TEMPLATES, "npct_", &extraction.records);
                features.extend(extraction.features);
            }
            Err(err) => report_skip(err),
        }
        emitter.emit("NPC features", NPC_FEATURES, "npcf_", &features);
    }
}

struct Emitter {
    config: Config,
    mask: Mask,
    stdout: bool,
}

impl Emitter {
    /// Serializes a family's records, applies the mask, and writes the
    /// JSON array to its output target.
    fn emit<T: Serialize>(&self, family: &str, default_name: &str, prefix: &str, records: &[T]) {
        let mut values: Vec<Value> = Vec::with_capacity(records.len());
        for record in records {
            match serde_json::to_value(record) {
                Ok(value) => values.push(self.mask.apply(value)),
                Err(err) => {
                    eprintln!("{} could not serialize a {} record: {}", "WARNING:".yellow(), family, err);
                }
            }
        }
        if !prefix.is_empty() {
            self.mask.add_missing(&mut values, prefix);
        }

        let out = if self.stdout {
            DataOutput::stdout()
        } else {
            // Config overrides are keyed by the default file stem.
            let key = default_name.trim_end_matches(".json");
            DataOutput::file(self.config.output_path(key, default_name))
        };
        println!(
            "Outputting JSON for {} {} to {}",
            records.len(),
            family,
            out.target()
        );
        let json = match serde_json::to_string_pretty(&values) {
            Ok(json) => json,
            Err(err) => {
                eprintln!("Error serializing {}: {}", family, err);
                std::process::exit(1);
            }
        };
        if let Err(err) = out.write(&json) {
            eprintln!("Error opening file {}: {}", out.target(), err);
            std::process::exit(1);
        }
    }
}

fn report_warnings(warnings: &[compendium_parser::ParseError]) {
    for warning in warnings {
        eprintln!("{} {}", "WARNING:".yellow(), warning);
    }
}

fn report_skip(err: compendium_parser::ParseError) {
    eprintln!("{} {}", "ERROR:".red(), err);
}
