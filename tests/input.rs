mod common;

use resume_pdf::compositor::{placeholder, photo_or_placeholder};
use resume_pdf::{
    render, DrawCommand, Region, RenderError, RenderOptions, RenderRequest, ResumeDocument,
    ValidationError,
};

fn fixture() -> ResumeDocument {
    serde_json::from_str(include_str!("fixtures/resume.json")).expect("fixture parses")
}

#[test]
fn json_fixture_renders() {
    common::init_logging();
    let resume = fixture();
    assert_eq!(resume.personal.age, Some(31));
    assert!(resume.experience[0].is_current);

    let rendered = render(&resume, "classic", None).expect("renders");
    assert_eq!(rendered.page_count(), 1);

    let body = rendered.page(0).expect("page").region_text(Region::Body);
    assert!(body.contains("Feb 2020 \u{2013} Present"));
    assert!(body.contains("Sep 2016 \u{2013} Jan 2020"));
    assert!(body.contains("2011 \u{2013} 2015"));
    assert!(body.contains("Worked together at Botiga Online"));
    assert!(body.contains("Cut reconciliation time from hours to minutes."));
    assert_eq!(rendered.suggested_filename(), "jordi-puig-ferrer-classic-resume.pdf");
}

#[test]
fn missing_identity_is_refused() {
    common::init_logging();
    let mut resume = fixture();
    resume.personal.name = "   ".into();
    match render(&resume, "modern", None) {
        Err(RenderError::Validation(ValidationError::MissingField(field))) => assert_eq!(field, "name"),
        other => panic!("expected a validation error, got {other:?}"),
    }

    let mut resume = fixture();
    resume.personal.email.clear();
    assert!(matches!(
        render(&resume, "elegant", None),
        Err(RenderError::Validation(ValidationError::MissingField("email")))
    ));
}

#[test]
fn bad_dates_are_refused() {
    common::init_logging();
    let mut resume = fixture();
    resume.experience[1].start_date = "last spring".into();
    let err = render(&resume, "modern", None).expect_err("date is invalid");
    assert_eq!(
        err.to_string(),
        "`experience[1].startDate` has an unrecognised date `last spring` (expected MM/YYYY)"
    );
}

#[test]
fn broken_photo_becomes_a_placeholder() {
    common::init_logging();
    let resume = fixture();
    let rendered = render(&resume, "modern", Some(b"\x89PNG not really")).expect("still renders");
    let header = rendered.page(0).expect("page").region(Region::Header);
    assert!(header
        .iter()
        .any(|command| matches!(command, DrawCommand::Image { .. })));

    assert_eq!(
        photo_or_placeholder(b"\x89PNG not really", 96),
        placeholder(96)
    );
}

#[test]
fn photos_are_cropped_square() {
    common::init_logging();
    for (w, h) in [(40, 400), (400, 40), (123, 77), (1, 1)] {
        let pixels = photo_or_placeholder(&common::png_bytes(w, h), 80);
        assert_eq!(pixels.width(), pixels.height(), "{w}x{h}");
        assert_eq!(pixels.width(), 80);
    }
}

#[test]
fn decoded_images_can_be_passed_directly() {
    common::init_logging();
    let resume = fixture();
    let image = image::load_from_memory(&common::png_bytes(300, 200)).expect("decodes");
    let rendered = RenderRequest::new(&resume)
        .template("elegant")
        .photo_image(image)
        .options(RenderOptions::new().photo_resolution(64).compress(false))
        .render()
        .expect("renders");
    let sidebar = rendered.page(0).expect("page").region(Region::Sidebar);
    assert!(sidebar
        .iter()
        .any(|command| matches!(command, DrawCommand::Image { .. })));

    let bytes = rendered.to_pdf_bytes().expect("serializes");
    let pdf = String::from_utf8_lossy(&bytes);
    assert!(pdf.contains("/Width 64"));
    assert!(pdf.contains("/SMask"));
    assert!(pdf.contains("/XObject <<"));
}

#[test]
fn pages_without_a_photo_list_no_images() {
    common::init_logging();
    let rendered = RenderRequest::new(&fixture())
        .options(RenderOptions::new().compress(false))
        .render()
        .expect("renders");
    let bytes = rendered.to_pdf_bytes().expect("serializes");
    assert!(!String::from_utf8_lossy(&bytes).contains("/XObject"));
}

#[test]
fn page_size_and_margins_can_be_overridden() {
    common::init_logging();
    let resume = fixture();
    let margins = resume_pdf::layout::Margins::all(resume_pdf::Pt(50.0));
    let rendered = RenderRequest::new(&resume)
        .template("modern")
        .options(
            RenderOptions::new()
                .page_size(resume_pdf::pagesize::LETTER)
                .margins(margins.clone()),
        )
        .render()
        .expect("renders");

    for page in rendered.pages() {
        assert_eq!(page.width(), resume_pdf::pagesize::LETTER.0);
        assert_eq!(page.height(), resume_pdf::pagesize::LETTER.1);
        assert_eq!(page.margins(), &margins);
        for command in page.region(Region::Body) {
            if let DrawCommand::Text(run) = command {
                assert!(*run.x >= 50.0 - common::EPSILON, "{} starts in the margin", run.text);
            }
        }
    }
    common::assert_nothing_clipped(&rendered);
}
