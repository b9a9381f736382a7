#![allow(dead_code)]

use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};
use resume_pdf::{
    Certification, DrawCommand, EducationEntry, LanguageEntry, Page, Project, Reference, Region,
    RenderedDocument, ResumeDocument, SkillEntry, WorkExperience,
};
use std::io::Cursor;

/// Float slack when comparing accumulated positions against page bounds
pub const EPSILON: f32 = 0.01;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Only the required identity fields
pub fn identity_only() -> ResumeDocument {
    let mut resume = ResumeDocument::new("María José Pérez", "mj.perez@example.com");
    resume.personal.headline = Some("Site Reliability Engineer".into());
    resume.personal.phone = Some("+34 600 000 000".into());
    resume.personal.location = Some("Valencia, Spain".into());
    resume
}

pub fn job(n: usize, description: String) -> WorkExperience {
    WorkExperience {
        id: format!("exp-{n}"),
        position: format!("Platform Engineer {n}"),
        company: format!("Company {n}"),
        location: Some("Remote".into()),
        start_date: format!("{:02}/20{:02}", n % 12 + 1, n % 20),
        end_date: Some("current".into()),
        is_current: n == 0,
        description: Some(description),
    }
}

pub fn skills(n: usize) -> Vec<SkillEntry> {
    (0..n)
        .map(|i| SkillEntry {
            id: format!("skill-{i}"),
            name: format!("Skill {i}"),
            level: Some("Expert".into()),
        })
        .collect()
}

/// A résumé with every section filled and `jobs` experience entries
pub fn full_resume(jobs: usize) -> ResumeDocument {
    let mut resume = identity_only();
    resume.summary = Some(lipsum::lipsum(60));
    resume.experience = (0..jobs).map(|n| job(n, lipsum::lipsum(40 + n % 30))).collect();
    resume.education = vec![EducationEntry {
        id: "edu-1".into(),
        degree: "BSc".into(),
        institution: "Universitat de València".into(),
        field_of_study: Some("Computer Science".into()),
        start_date: Some("09/2008".into()),
        end_date: Some("06/2012".into()),
        is_current: false,
        description: Some(lipsum::lipsum(25)),
    }];
    resume.skills = skills(9);
    resume.languages = vec![
        LanguageEntry {
            id: "lang-1".into(),
            name: "Spanish".into(),
            level: Some("Native".into()),
        },
        LanguageEntry {
            id: "lang-2".into(),
            name: "English".into(),
            level: Some("C1".into()),
        },
    ];
    resume.certifications = vec![Certification {
        id: "cert-1".into(),
        name: "Certified Kubernetes Administrator".into(),
        issuer: Some("CNCF".into()),
        date: Some("2021-04".into()),
        url: Some("https://example.com/cka/1234".into()),
    }];
    resume.projects = vec![Project {
        id: "proj-1".into(),
        name: "Chaos toolkit".into(),
        description: Some(lipsum::lipsum(30)),
        url: Some("https://example.com/chaos".into()),
        technologies: vec!["Rust".into(), "Kubernetes".into()],
    }];
    resume.references = vec![Reference {
        id: "ref-1".into(),
        name: "Joan Fuster".into(),
        position: Some("Engineering Manager".into()),
        company: Some("Company 0".into()),
        email: Some("joan@example.com".into()),
        phone: None,
        work_experience_id: Some("exp-0".into()),
    }];
    resume
}

/// A PNG of the given size with a simple gradient
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 200, 255])
    });
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(pixels)
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .expect("can encode png");
    bytes
}

pub fn writable_bottom(page: &Page) -> f32 {
    *(page.height() - page.margins().bottom)
}

/// Fail if anything flowed into the body crosses the writable bottom
pub fn assert_nothing_clipped(rendered: &RenderedDocument) {
    for (index, page) in rendered.pages().enumerate() {
        let bottom = writable_bottom(page);
        for command in page.region(Region::Body) {
            assert!(
                *command.bottom() <= bottom + EPSILON,
                "page {} command {:?} ends at {} below the writable bottom {}",
                index + 1,
                command,
                *command.bottom(),
                bottom
            );
        }
    }
}

/// Every text run in the body of a page
pub fn body_runs(page: &Page) -> Vec<(String, f32)> {
    page.region(Region::Body)
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Text(run) => Some((run.text.clone(), *run.y)),
            _ => None,
        })
        .collect()
}
