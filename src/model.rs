//! The résumé record consumed by a render call.
//!
//! All types deserialize from camelCase JSON so callers can hand over the
//! record as stored. Validation is separate from deserialization: a record
//! can be parsed with empty fields and is only refused when rendering starts.

use crate::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// End-date values meaning "still ongoing"
const CURRENT_SENTINELS: [&str; 3] = ["current", "actualidad", "present"];

/// Identity and contact channels. `name` and `email` are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub headline: Option<String>,
    pub age: Option<u32>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub id: String,
    pub position: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageEntry {
    pub id: String,
    pub name: String,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    pub id: String,
    pub name: String,
    pub position: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Id of the [WorkExperience] where the candidate and the referee met
    pub work_experience_id: Option<String>,
}

/// A complete résumé. Read-only input to a render call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub summary: Option<String>,
    pub experience: Vec<WorkExperience>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub languages: Vec<LanguageEntry>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub references: Vec<Reference>,
}

impl ResumeDocument {
    /// A résumé with only the required identity fields filled in
    pub fn new<N: Into<String>, E: Into<String>>(name: N, email: E) -> ResumeDocument {
        ResumeDocument {
            personal: PersonalInfo {
                name: name.into(),
                email: email.into(),
                ..PersonalInfo::default()
            },
            ..ResumeDocument::default()
        }
    }

    pub fn experience_by_id(&self, id: &str) -> Option<&WorkExperience> {
        self.experience.iter().find(|e| e.id == id)
    }

    /// Check the preconditions a render relies on: required fields are
    /// present and every date parses.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.personal.name) {
            return Err(ValidationError::MissingField("name"));
        }
        if is_blank(&self.personal.email) {
            return Err(ValidationError::MissingField("email"));
        }

        for (i, job) in self.experience.iter().enumerate() {
            if is_blank(&job.position) {
                return Err(ValidationError::MissingField("experience.position"));
            }
            if is_blank(&job.company) {
                return Err(ValidationError::MissingField("experience.company"));
            }
            if is_blank(&job.start_date) {
                return Err(ValidationError::MissingField("experience.startDate"));
            }
            check_date(&format!("experience[{i}].startDate"), &job.start_date)?;
            check_end_date(&format!("experience[{i}].endDate"), job.end_date.as_deref())?;
        }

        for (i, course) in self.education.iter().enumerate() {
            if is_blank(&course.degree) {
                return Err(ValidationError::MissingField("education.degree"));
            }
            if is_blank(&course.institution) {
                return Err(ValidationError::MissingField("education.institution"));
            }
            if let Some(start) = non_blank(course.start_date.as_deref()) {
                check_date(&format!("education[{i}].startDate"), start)?;
            }
            check_end_date(&format!("education[{i}].endDate"), course.end_date.as_deref())?;
        }

        for (i, cert) in self.certifications.iter().enumerate() {
            if is_blank(&cert.name) {
                return Err(ValidationError::MissingField("certifications.name"));
            }
            if let Some(date) = non_blank(cert.date.as_deref()) {
                check_date(&format!("certifications[{i}].date"), date)?;
            }
        }

        if self.skills.iter().any(|s| is_blank(&s.name)) {
            return Err(ValidationError::MissingField("skills.name"));
        }
        if self.languages.iter().any(|l| is_blank(&l.name)) {
            return Err(ValidationError::MissingField("languages.name"));
        }
        if self.projects.iter().any(|p| is_blank(&p.name)) {
            return Err(ValidationError::MissingField("projects.name"));
        }
        if self.references.iter().any(|r| is_blank(&r.name)) {
            return Err(ValidationError::MissingField("references.name"));
        }

        Ok(())
    }
}

impl WorkExperience {
    /// e.g. `Mar 2019 – Present`
    pub fn period(&self) -> String {
        format_period(Some(&self.start_date), self.end_date.as_deref(), self.is_current)
    }
}

impl EducationEntry {
    pub fn period(&self) -> String {
        format_period(self.start_date.as_deref(), self.end_date.as_deref(), self.is_current)
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !is_blank(s))
}

fn is_current_sentinel(s: &str) -> bool {
    let s = s.trim();
    CURRENT_SENTINELS.iter().any(|c| s.eq_ignore_ascii_case(c))
}

fn check_date(field: &str, value: &str) -> Result<(), ValidationError> {
    MonthYear::parse(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::InvalidDate {
            field: field.to_string(),
            value: value.to_string(),
        })
}

fn check_end_date(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    match non_blank(value) {
        Some(value) if !is_current_sentinel(value) => check_date(field, value),
        _ => Ok(()),
    }
}

/// A month-precision date as written on résumés
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthYear {
    date: NaiveDate,
    has_month: bool,
}

impl MonthYear {
    /// Parse `MM/YYYY`, `YYYY-MM` or a bare `YYYY`
    pub fn parse(value: &str) -> Option<MonthYear> {
        let value = value.trim();
        if value.len() == 4 && value.chars().all(|c| c.is_ascii_digit()) {
            let year = value.parse().ok()?;
            return Some(MonthYear {
                date: NaiveDate::from_ymd_opt(year, 1, 1)?,
                has_month: false,
            });
        }

        NaiveDate::parse_from_str(&format!("01/{value}"), "%d/%m/%Y")
            .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d"))
            .ok()
            .map(|date| MonthYear {
                date,
                has_month: true,
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_month {
            write!(f, "{}", self.date.format("%b %Y"))
        } else {
            write!(f, "{}", self.date.format("%Y"))
        }
    }
}

/// Display a single date, falling back to the raw text when it does not parse
pub fn format_date(value: &str) -> String {
    MonthYear::parse(value)
        .map(|d| d.to_string())
        .unwrap_or_else(|| value.trim().to_string())
}

/// Display a start/end pair as `Jan 2020 – Present`
pub fn format_period(start: Option<&str>, end: Option<&str>, is_current: bool) -> String {
    let start = non_blank(start).map(format_date);
    let end = match non_blank(end) {
        _ if is_current => Some("Present".to_string()),
        Some(end) if is_current_sentinel(end) => Some("Present".to_string()),
        Some(end) => Some(format_date(end)),
        None => None,
    };
    match (start, end) {
        (Some(start), Some(end)) => format!("{start} \u{2013} {end}"),
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> WorkExperience {
        WorkExperience {
            id: "exp-1".into(),
            position: "Engineer".into(),
            company: "Analytical Engines Ltd".into(),
            start_date: "03/2019".into(),
            ..WorkExperience::default()
        }
    }

    #[test]
    fn parses_supported_date_forms() {
        assert_eq!(format_date("03/2019"), "Mar 2019");
        assert_eq!(format_date("2019-11"), "Nov 2019");
        assert_eq!(format_date("2015"), "2015");
        assert!(MonthYear::parse("13/2019").is_none());
        assert!(MonthYear::parse("March").is_none());
        assert!(MonthYear::parse("03/2019").expect("parses") < MonthYear::parse("2020").expect("parses"));
    }

    #[test]
    fn current_entries_end_in_present() {
        let mut job = job();
        job.is_current = true;
        job.end_date = Some("current".into());
        assert_eq!(job.period(), "Mar 2019 \u{2013} Present");

        job.is_current = false;
        job.end_date = Some("Actualidad".into());
        assert_eq!(job.period(), "Mar 2019 \u{2013} Present");

        job.end_date = Some("06/2021".into());
        assert_eq!(job.period(), "Mar 2019 \u{2013} Jun 2021");

        job.end_date = None;
        assert_eq!(job.period(), "Mar 2019");
    }

    #[test]
    fn requires_identity() {
        assert_eq!(
            ResumeDocument::new("", "ada@example.com").validate(),
            Err(ValidationError::MissingField("name"))
        );
        assert_eq!(
            ResumeDocument::new("Ada Lovelace", "  ").validate(),
            Err(ValidationError::MissingField("email"))
        );
        assert!(ResumeDocument::new("Ada Lovelace", "ada@example.com")
            .validate()
            .is_ok());
    }

    #[test]
    fn rejects_unparsable_dates() {
        let mut resume = ResumeDocument::new("Ada Lovelace", "ada@example.com");
        let mut job = job();
        job.end_date = Some("someday".into());
        resume.experience.push(job);
        assert_eq!(
            resume.validate(),
            Err(ValidationError::InvalidDate {
                field: "experience[0].endDate".into(),
                value: "someday".into(),
            })
        );
    }

    #[test]
    fn finds_experience_by_id() {
        let mut resume = ResumeDocument::new("Ada Lovelace", "ada@example.com");
        resume.experience.push(job());
        assert!(resume.experience_by_id("exp-1").is_some());
        assert!(resume.experience_by_id("exp-2").is_none());
    }
}
