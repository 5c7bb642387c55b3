extern crate chrono;
extern crate regex;
extern crate serde;

use super::term::Term;
use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// Unit count: either fixed or a variable range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Units {
    Fixed(f32),
    Range(f32, f32),
}
impl Default for Units {
    fn default() -> Self {
        Units::Fixed(0.0)
    }
}
impl Units {
    /// Parses registrar unit text such as `4.0` or `1.0 - 5.0`.
    pub fn parse(text: &str) -> Option<Self> {
        let regex = Regex::new(r"([[:digit:]]+(?:\.[[:digit:]]+)?)(?:\s*-\s*([[:digit:]]+(?:\.[[:digit:]]+)?))?").unwrap();
        let caps = regex.captures(text)?;
        let low = caps[1].parse().ok()?;
        match caps.get(2) {
            Some(high) => Some(Units::Range(low, high.as_str().parse().ok()?)),
            None => Some(Units::Fixed(low)),
        }
    }
}
impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Fixed(u) => write!(f, "{:.1}", u),
            Units::Range(low, high) => write!(f, "{:.1} - {:.1}", low, high),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// e.g. `TR`
    pub days: String,
    /// e.g. `10:30 - 11:50 AM`
    pub hours: String,
    /// e.g. `Storer Hall 1322`
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalExam {
    At(NaiveDateTime),
    SeeInstructor,
}
impl Default for FinalExam {
    fn default() -> Self {
        FinalExam::SeeInstructor
    }
}
impl fmt::Display for FinalExam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinalExam::At(time) => write!(f, "{}", time.format("%A, %B %-d, %Y at %-I:%M %p")),
            FinalExam::SeeInstructor => f.write_str("See Instructor"),
        }
    }
}

/// Descriptive course fields, filled in as far as the source page allows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseAttributes {
    /// e.g. `ECS 040`
    pub name: String,
    pub number: String,
    /// e.g. `A01`
    pub section: String,
    pub title: String,
    pub units: Units,
    pub instructor: String,
    pub subject: String,
    pub ge_credit: Vec<String>,
    pub available_seats: u32,
    pub max_enrollment: u32,
    pub meetings: Vec<Meeting>,
    pub description: String,
    pub final_exam: FinalExam,
    /// e.g. `20 Day Drop`
    pub drop_time: String,
}

/// A course offering, identified by its CRN within a term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    crn: String,
    term: Term,
    #[serde(flatten)]
    attributes: CourseAttributes,
}

impl Course {
    pub fn new<T: Into<String>>(crn: T, term: Term, attributes: CourseAttributes) -> Self {
        Course {
            crn: crn.into(),
            term,
            attributes,
        }
    }
    pub fn crn(&self) -> &str {
        &self.crn
    }
    pub fn term(&self) -> &Term {
        &self.term
    }
    pub fn attributes(&self) -> &CourseAttributes {
        &self.attributes
    }
    pub fn name(&self) -> &str {
        &self.attributes.name
    }
    pub fn title(&self) -> &str {
        &self.attributes.title
    }
    pub fn instructor(&self) -> &str {
        &self.attributes.instructor
    }
    pub fn units(&self) -> Units {
        self.attributes.units
    }
    pub fn meetings(&self) -> &[Meeting] {
        &self.attributes.meetings
    }
    pub fn final_exam(&self) -> &FinalExam {
        &self.attributes.final_exam
    }
    pub fn has_open_seats(&self) -> bool {
        self.attributes.available_seats > 0
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.crn == other.crn && self.term == other.term
    }
}
impl Eq for Course {}
impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.crn.hash(state);
        self.term.hash(state);
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.term, self.attributes.name, self.attributes.title
        )
    }
}
