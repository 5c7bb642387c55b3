extern crate regex;
extern crate serde;

use crate::error::{Error, Kind, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt, str::FromStr};

/// The annual sessions a term can belong to, with their registrar codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    FallQuarter,
    FallSemester,
    SummerSession2,
    SummerSpecial,
    SummerSession1,
    SpringQuarter,
    SpringSemester,
    WinterQuarter,
}

impl Season {
    pub const ALL: [Season; 8] = [
        Season::FallQuarter,
        Season::FallSemester,
        Season::SummerSession2,
        Season::SummerSpecial,
        Season::SummerSession1,
        Season::SpringQuarter,
        Season::SpringSemester,
        Season::WinterQuarter,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Season::FallQuarter => "10",
            Season::FallSemester => "09",
            Season::SummerSession2 => "07",
            Season::SummerSpecial => "06",
            Season::SummerSession1 => "05",
            Season::SpringQuarter => "03",
            Season::SpringSemester => "02",
            Season::WinterQuarter => "01",
        }
    }
    pub fn codes() -> impl Iterator<Item = &'static str> {
        IntoIterator::into_iter(Self::ALL).map(Season::code)
    }
    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.code() == code)
            .ok_or_else(|| {
                Error::with_description(Kind::Term, format!("unknown session code {:?}", code))
            })
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Season::FallQuarter => "Fall Quarter",
            Season::FallSemester => "Fall Semester",
            Season::SummerSession2 => "Summer Session 2",
            Season::SummerSpecial => "Summer Special",
            Season::SummerSession1 => "Summer Session 1",
            Season::SpringQuarter => "Spring Quarter",
            Season::SpringSemester => "Spring Semester",
            Season::WinterQuarter => "Winter Quarter",
        })
    }
}

/// An academic term, e.g. Fall Quarter 2014 (code `201410`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Term {
    pub year: u16,
    pub season: Season,
}

impl Term {
    pub fn new(year: u16, season: Season) -> Self {
        Term { year, season }
    }
    /// Registrar term code: the year followed by the two-digit session code.
    pub fn code(&self) -> String {
        format!("{}{}", self.year, self.season.code())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}

impl FromStr for Term {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        let regex = Regex::new(r"^([[:digit:]]{4})([[:digit:]]{2})$").unwrap();
        let caps = regex.captures(code.trim()).ok_or_else(|| {
            Error::with_description(Kind::Term, format!("malformed term code {:?}", code))
        })?;
        let year = caps[1]
            .parse()
            .map_err(|_| Error::with_description(Kind::Term, format!("bad year in {:?}", code)))?;
        Ok(Term::new(year, Season::from_code(&caps[2])?))
    }
}
impl TryFrom<String> for Term {
    type Error = Error;

    fn try_from(code: String) -> Result<Self> {
        code.parse()
    }
}
impl From<Term> for String {
    fn from(term: Term) -> String {
        term.code()
    }
}
