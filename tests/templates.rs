mod common;

use resume_pdf::layout::lists::{choose_format, ListFormat};
use resume_pdf::layout::{ColumnLayout, GeometryContext};
use resume_pdf::pagesize::A4;
use resume_pdf::{render, DrawCommand, Region, TemplateId};

fn main_column_width(id: TemplateId) -> resume_pdf::Pt {
    let definition = id.definition();
    GeometryContext::new(A4, definition.margins.clone(), definition.columns)
        .main()
        .width
}

#[test]
fn elegant_sidebar_repeats_byte_for_byte() {
    common::init_logging();
    let photo = common::png_bytes(200, 300);
    let rendered = render(&common::full_resume(20), "elegant", Some(&photo)).expect("renders");
    assert!(rendered.page_count() >= 2);

    let first = rendered.page(0).expect("first page");
    let second = rendered.page(1).expect("second page");
    assert!(!first.region(Region::Sidebar).is_empty());
    assert_eq!(
        first.region_content(Region::Sidebar),
        second.region_content(Region::Sidebar)
    );
    assert_ne!(
        first.region_content(Region::Body),
        second.region_content(Region::Body)
    );

    let sidebar = first.region_text(Region::Sidebar);
    assert!(sidebar.contains("CONTACT"));
    assert!(sidebar.contains("SKILLS"));
    assert!(!first.region_text(Region::Body).contains("SKILLS"));
}

#[test]
fn elegant_body_stays_right_of_the_sidebar() {
    common::init_logging();
    let rendered = render(&common::full_resume(10), "elegant", None).expect("renders");
    let band = match TemplateId::Elegant.definition().columns {
        ColumnLayout::Sidebar { band, .. } => band,
        ColumnLayout::Single => panic!("elegant has a sidebar"),
    };
    for page in rendered.pages() {
        for command in page.region(Region::Body) {
            if let DrawCommand::Text(run) = command {
                assert!(run.x > band, "{} starts inside the sidebar", run.text);
            }
        }
    }
}

#[test]
fn twenty_five_skills_in_classic_become_a_paragraph() {
    common::init_logging();
    let mut resume = common::identity_only();
    resume.skills = common::skills(25);
    let rendered = render(&resume, "classic", None).expect("renders");

    let body = rendered.page(0).expect("page").region_text(Region::Body);
    assert!(body.starts_with("SKILLS"));
    assert!(body.contains("Skill 0 (Expert), Skill 1 (Expert)"));
    assert!(!body.contains("\u{2014}"));
    assert_eq!(
        choose_format(25, main_column_width(TemplateId::Classic)),
        ListFormat::Paragraph
    );
}

fn skill_rows(count: usize) -> Vec<(String, f32)> {
    let mut resume = common::identity_only();
    resume.skills = common::skills(count);
    let rendered = render(&resume, "modern", None).expect("renders");
    common::body_runs(rendered.page(0).expect("page"))
        .into_iter()
        .filter(|(text, _)| text.starts_with("Skill "))
        .collect()
}

#[test]
fn list_density_switches_at_six_and_twenty() {
    common::init_logging();
    let width = main_column_width(TemplateId::Modern);
    assert_eq!(choose_format(6, width), ListFormat::Vertical);
    assert_eq!(choose_format(7, width), ListFormat::TwoColumn);
    assert_eq!(choose_format(20, width), ListFormat::TwoColumn);
    assert_eq!(choose_format(21, width), ListFormat::Paragraph);

    // six items: one per line, each on its own baseline
    let rows = skill_rows(6);
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].0, "Skill 0 \u{2014} Expert");
    assert!(rows.windows(2).all(|pair| pair[0].1 < pair[1].1));

    // seven items: the halves share baselines
    let rows = skill_rows(7);
    assert_eq!(rows.len(), 7);
    let left = rows.iter().find(|(text, _)| text.starts_with("Skill 0 ")).expect("left");
    let right = rows.iter().find(|(text, _)| text.starts_with("Skill 4 ")).expect("right");
    assert_eq!(left.1, right.1);

    let rows = skill_rows(20);
    assert_eq!(rows.len(), 20);

    // twenty-one items: a comma-joined paragraph
    let rows = skill_rows(21);
    assert!(rows.len() < 21);
    assert!(rows[0].0.starts_with("Skill 0 (Expert), Skill 1 (Expert)"));
}

#[test]
fn unknown_template_falls_back_to_modern() {
    common::init_logging();
    let resume = common::identity_only();
    let fallback = render(&resume, "neon-brutalist", None).expect("renders");
    let modern = render(&resume, "modern", None).expect("renders");
    assert_eq!(fallback.template(), TemplateId::Modern);
    assert_eq!(
        fallback.to_pdf_bytes().expect("serializes"),
        modern.to_pdf_bytes().expect("serializes")
    );
    assert_eq!(
        fallback.suggested_filename(),
        "maria-jose-perez-modern-resume.pdf"
    );
}

#[test]
fn certificate_and_project_urls_are_clickable() {
    common::init_logging();
    for id in TemplateId::ALL {
        let rendered = render(&common::full_resume(2), id.as_str(), None).expect("renders");
        let urls: Vec<_> = rendered
            .links()
            .into_iter()
            .map(|(_, link)| link.url.as_str())
            .collect();
        assert_eq!(
            urls,
            ["https://example.com/cka/1234", "https://example.com/chaos"],
            "{id}"
        );

        let bytes = rendered.to_pdf_bytes().expect("serializes");
        let pdf = String::from_utf8_lossy(&bytes);
        assert!(pdf.contains("/URI (https://example.com/chaos)"));
        assert!(!pdf.contains("mailto:"));
    }
}

#[test]
fn contact_details_are_plain_text() {
    common::init_logging();
    let rendered = render(&common::identity_only(), "classic", None).expect("renders");
    let values: Vec<_> = rendered
        .contact_fields()
        .iter()
        .map(|field| field.value.as_str())
        .collect();
    assert_eq!(
        values,
        ["mj.perez@example.com", "+34 600 000 000", "Valencia, Spain"]
    );
    assert!(rendered.links().is_empty());
    assert!(rendered
        .page(0)
        .expect("page")
        .region_text(Region::Header)
        .contains("mj.perez@example.com"));
}

#[test]
fn headers_are_richer_on_the_first_page() {
    common::init_logging();
    let photo = common::png_bytes(120, 90);
    for id in [TemplateId::Modern, TemplateId::Classic] {
        let rendered = render(&common::full_resume(25), id.as_str(), Some(&photo)).expect("renders");
        let has_photo = |index: usize| {
            rendered
                .page(index)
                .expect("page")
                .region(Region::Header)
                .iter()
                .any(|command| matches!(command, DrawCommand::Image { .. }))
        };
        assert!(has_photo(0), "{id} page 1 shows the photo");
        assert!(!has_photo(1), "{id} continuation pages do not");

        let first = rendered.page(0).expect("page").region_text(Region::Header);
        let second = rendered.page(1).expect("page").region_text(Region::Header);
        assert!(first.contains("Site Reliability Engineer"));
        assert!(!second.contains("Site Reliability Engineer"));
        assert!(second.contains("María José Pérez"));
    }
}

#[test]
fn document_info_names_the_candidate() {
    common::init_logging();
    let rendered = render(&common::full_resume(1), "elegant", None).expect("renders");
    let info = rendered.info().expect("has info");
    assert_eq!(info.title.as_deref(), Some("María José Pérez - Résumé"));
    assert_eq!(info.subject.as_deref(), Some("elegant template"));
    assert!(info
        .keywords
        .as_deref()
        .is_some_and(|k| k.starts_with("Skill 0, Skill 1")));
}

#[test]
fn crowded_sidebar_sections_keep_their_place_in_the_main_column() {
    common::init_logging();
    let mut resume = common::full_resume(2);
    resume.summary = Some(lipsum::lipsum(600));
    let rendered = render(&resume, "elegant", None).expect("renders");

    let titles: Vec<_> = rendered
        .outline()
        .entries
        .iter()
        .map(|entry| entry.title.as_str())
        .collect();
    assert_eq!(
        titles,
        [
            "Profile",
            "Experience",
            "Education",
            "Skills",
            "Languages",
            "Certifications",
            "Projects",
            "References"
        ]
    );

    // moved out of the sidebar, not dropped
    let sidebar = rendered.page(0).expect("page").region_text(Region::Sidebar);
    assert!(sidebar.contains("CONTACT"));
    assert!(!sidebar.contains("SKILLS"));
    let body = rendered
        .pages()
        .map(|page| page.region_text(Region::Body))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(body.contains("Lorem ipsum"));
    assert!(body.contains("Skill 8"));
    assert!(body.contains("Spanish"));
    common::assert_nothing_clipped(&rendered);
}
