use thiserror::Error;

/// Errors produced while locating sections and parsing entity hunks.
///
/// Hunk-level errors are collected as warnings by the extraction
/// functions; only a missing section aborts a family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("There was a problem locating the {section} section! s{start}, e{end}")]
    SectionNotFound {
        section: &'static str,
        start: i64,
        end: i64,
    },
    #[error("{entity}: empty hunk")]
    EmptyHunk { entity: &'static str },
    #[error("{entity} \"{name}\": expected at least {expected} lines, found {found}")]
    HunkTooShort {
        entity: &'static str,
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("{entity} \"{name}\": missing \"{landmark}\" landmark")]
    MissingLandmark {
        entity: &'static str,
        name: String,
        landmark: &'static str,
    },
    #[error("{entity} \"{name}\": unknown stat \"{stat}\"")]
    UnknownStat {
        entity: &'static str,
        name: String,
        stat: String,
    },
    #[error("{entity} \"{name}\": bad value \"{value}\"")]
    BadValue {
        entity: &'static str,
        name: String,
        value: String,
    },
}
