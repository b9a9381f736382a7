//! Turns the résumé record into layout-ready [Section]s.

use crate::layout::{Entry, Link, ListItem, Section, SectionContent, SectionKind};
use crate::model::{format_date, ResumeDocument};

fn non_blank(s: Option<&String>) -> Option<&str> {
    s.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn join_present(parts: &[Option<&str>], separator: &str) -> Option<String> {
    let joined = parts
        .iter()
        .flatten()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator);
    (!joined.is_empty()).then_some(joined)
}

/// Build the section of the given kind, or [None] if the résumé has nothing
/// to put in it
pub fn build_section(resume: &ResumeDocument, kind: SectionKind) -> Option<Section> {
    let content = match kind {
        SectionKind::Summary => SectionContent::Text(non_blank(resume.summary.as_ref())?.to_string()),
        SectionKind::Experience => SectionContent::Entries(
            resume
                .experience
                .iter()
                .map(|job| Entry {
                    heading: job.position.clone(),
                    aside: Some(job.period()).filter(|p| !p.is_empty()),
                    subtitle: join_present(
                        &[Some(job.company.as_str()), job.location.as_deref()],
                        " \u{00B7} ",
                    ),
                    details: Vec::new(),
                    body: non_blank(job.description.as_ref()).map(str::to_string),
                    link: None,
                })
                .collect(),
        ),
        SectionKind::Education => SectionContent::Entries(
            resume
                .education
                .iter()
                .map(|course| Entry {
                    heading: match non_blank(course.field_of_study.as_ref()) {
                        Some(field) => format!("{} in {}", course.degree.trim(), field),
                        None => course.degree.trim().to_string(),
                    },
                    aside: Some(course.period()).filter(|p| !p.is_empty()),
                    subtitle: Some(course.institution.trim().to_string()),
                    details: Vec::new(),
                    body: non_blank(course.description.as_ref()).map(str::to_string),
                    link: None,
                })
                .collect(),
        ),
        SectionKind::Skills => SectionContent::List(
            resume
                .skills
                .iter()
                .map(|skill| ListItem::new(skill.name.trim(), skill.level.clone()))
                .collect(),
        ),
        SectionKind::Languages => SectionContent::List(
            resume
                .languages
                .iter()
                .map(|language| ListItem::new(language.name.trim(), language.level.clone()))
                .collect(),
        ),
        SectionKind::Certifications => SectionContent::Entries(
            resume
                .certifications
                .iter()
                .map(|cert| Entry {
                    heading: cert.name.trim().to_string(),
                    aside: non_blank(cert.date.as_ref()).map(format_date),
                    subtitle: non_blank(cert.issuer.as_ref()).map(str::to_string),
                    link: non_blank(cert.url.as_ref()).map(|url| Link {
                        label: url.to_string(),
                        url: url.to_string(),
                    }),
                    ..Entry::default()
                })
                .collect(),
        ),
        SectionKind::Projects => SectionContent::Entries(
            resume
                .projects
                .iter()
                .map(|project| {
                    let technologies = join_present(
                        &project
                            .technologies
                            .iter()
                            .map(|t| Some(t.as_str()))
                            .collect::<Vec<_>>(),
                        ", ",
                    );
                    Entry {
                        heading: project.name.trim().to_string(),
                        details: technologies
                            .map(|t| format!("Technologies: {t}"))
                            .into_iter()
                            .collect(),
                        body: non_blank(project.description.as_ref()).map(str::to_string),
                        link: non_blank(project.url.as_ref()).map(|url| Link {
                            label: url.to_string(),
                            url: url.to_string(),
                        }),
                        ..Entry::default()
                    }
                })
                .collect(),
        ),
        SectionKind::References => SectionContent::Entries(
            resume
                .references
                .iter()
                .map(|reference| {
                    let mut details = Vec::new();
                    if let Some(id) = non_blank(reference.work_experience_id.as_ref()) {
                        match resume.experience_by_id(id) {
                            Some(job) => details.push(format!("Worked together at {}", job.company.trim())),
                            None => log::warn!(
                                "reference `{}` points at unknown experience `{id}`; ignoring the link",
                                reference.name
                            ),
                        }
                    }
                    if let Some(contact) = join_present(
                        &[reference.email.as_deref(), reference.phone.as_deref()],
                        " \u{00B7} ",
                    ) {
                        details.push(contact);
                    }
                    Entry {
                        heading: reference.name.trim().to_string(),
                        subtitle: join_present(
                            &[reference.position.as_deref(), reference.company.as_deref()],
                            ", ",
                        ),
                        details,
                        ..Entry::default()
                    }
                })
                .collect(),
        ),
    };

    let empty = match &content {
        SectionContent::Text(text) => text.is_empty(),
        SectionContent::Entries(entries) => entries.is_empty(),
        SectionContent::List(items) => items.is_empty(),
    };
    (!empty).then(|| Section::new(kind, content))
}

/// Build every non-empty section in `order`
pub fn build_sections(resume: &ResumeDocument, order: &[SectionKind]) -> Vec<Section> {
    order
        .iter()
        .filter_map(|kind| build_section(resume, *kind))
        .collect()
}

/// Slot each kind of `extra` into `order` ahead of the first section that
/// reads after it, so a kind lands where it would in a one-column résumé
pub fn merge_in_order(order: &[SectionKind], extra: &[SectionKind]) -> Vec<SectionKind> {
    let mut merged = order.to_vec();
    for kind in extra {
        if merged.contains(kind) {
            continue;
        }
        let at = merged.iter().position(|k| k > kind).unwrap_or(merged.len());
        merged.insert(at, *kind);
    }
    merged
}
