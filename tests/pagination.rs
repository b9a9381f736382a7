mod common;

use resume_pdf::layout::Margins;
use resume_pdf::{render, Pt, Region, RenderOptions, RenderRequest, TemplateId};

#[test]
fn same_input_gives_identical_bytes() {
    common::init_logging();
    let resume = common::full_resume(6);
    let photo = common::png_bytes(320, 240);

    for id in TemplateId::ALL {
        let first = render(&resume, id.as_str(), Some(&photo)).expect("renders");
        let second = render(&resume, id.as_str(), Some(&photo)).expect("renders");
        assert_eq!(
            first.to_pdf_bytes().expect("serializes"),
            second.to_pdf_bytes().expect("serializes"),
            "{id} output differs between runs"
        );
    }
}

#[test]
fn generation_stamp_is_opt_in() {
    common::init_logging();
    let resume = common::identity_only();
    let plain = render(&resume, "modern", None)
        .expect("renders")
        .to_pdf_bytes()
        .expect("serializes");
    assert!(!String::from_utf8_lossy(&plain).contains("/CreationDate"));

    let when = chrono::NaiveDate::from_ymd_opt(2024, 5, 17)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .expect("valid date");
    let stamped = RenderRequest::new(&resume)
        .options(RenderOptions::new().generated_at(when))
        .render()
        .expect("renders")
        .to_pdf_bytes()
        .expect("serializes");
    assert!(String::from_utf8_lossy(&stamped).contains("/CreationDate"));
}

#[test]
fn nothing_is_clipped_at_any_size() {
    common::init_logging();
    for id in TemplateId::ALL {
        for jobs in [0, 1, 2, 3, 5, 8, 13, 21, 34, 50] {
            let rendered = render(&common::full_resume(jobs), id.as_str(), None).expect("renders");
            common::assert_nothing_clipped(&rendered);
        }
    }
}

#[test]
fn page_count_never_shrinks_as_entries_grow() {
    common::init_logging();
    for id in TemplateId::ALL {
        let mut previous = 0;
        for jobs in 0..=30 {
            let pages = render(&common::full_resume(jobs), id.as_str(), None)
                .expect("renders")
                .page_count();
            assert!(
                pages >= previous,
                "{id}: {jobs} jobs gave {pages} pages, {} jobs gave {previous}",
                jobs - 1
            );
            previous = pages;
        }
    }
}

#[test]
fn long_description_spills_onto_a_second_page() {
    common::init_logging();
    let mut description = (0..100)
        .map(|i| format!("- Delivered milestone {i:02}"))
        .collect::<Vec<_>>()
        .join("\n");
    description.truncate(2000);
    assert_eq!(description.len(), 2000);

    let mut resume = common::identity_only();
    resume.experience.push(common::job(0, description));

    let rendered = render(&resume, "modern", None).expect("renders");
    assert!(rendered.page_count() >= 2);

    let second = rendered.page(1).expect("has a second page");
    assert!(second.region_text(Region::Header).contains("María José Pérez"));
    assert!(second.region_text(Region::Header).contains("Page 2"));
    assert!(second
        .region_text(Region::Body)
        .starts_with("Experience (cont.)"));
    assert_eq!(second.region_text(Region::Footer), "Page 2");
    common::assert_nothing_clipped(&rendered);
}

#[test]
fn identity_only_fits_on_one_page() {
    common::init_logging();
    let resume = common::identity_only();
    let photo = common::png_bytes(64, 64);
    for id in TemplateId::ALL {
        assert_eq!(render(&resume, id.as_str(), None).expect("renders").page_count(), 1);
        assert_eq!(
            render(&resume, id.as_str(), Some(&photo))
                .expect("renders")
                .page_count(),
            1
        );
    }
}

#[test]
fn every_page_gets_a_footer() {
    common::init_logging();
    let rendered = render(&common::full_resume(20), "classic", None).expect("renders");
    assert!(rendered.page_count() > 1);
    for (index, page) in rendered.pages().enumerate() {
        assert_eq!(page.region_text(Region::Footer), format!("Page {}", index + 1));
    }
}

#[test]
fn sections_are_bookmarked_once() {
    common::init_logging();
    let rendered = render(&common::full_resume(25), "modern", None).expect("renders");
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
    assert_eq!(rendered.outline().entries[0].page_index, 0);
}

#[test]
fn a_sliver_of_writable_height_still_terminates() {
    common::init_logging();
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let resume = common::full_resume(2);
        let margins = Margins::trbl(Pt(780.0), Pt(36.0), Pt(30.0), Pt(36.0));
        let rendered = RenderRequest::new(&resume)
            .template("elegant")
            .options(RenderOptions::new().margins(margins))
            .render();
        let _ = tx.send(rendered);
    });
    let rendered = rx
        .recv_timeout(std::time::Duration::from_secs(60))
        .expect("render finishes")
        .expect("renders");

    for (index, page) in rendered.pages().enumerate() {
        let runs = page
            .region(Region::Body)
            .iter()
            .filter(|command| command.text().is_some())
            .count();
        assert!(runs >= 2, "page {} holds only a title", index + 1);
    }
    let body = rendered
        .pages()
        .map(|page| page.region_text(Region::Body))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(body.contains("Platform Engineer 0"));
    assert!(body.contains("Platform Engineer 1"));
}

#[test]
fn an_entry_taller_than_a_page_is_drawn_whole() {
    common::init_logging();
    let position = (0..600)
        .map(|i| format!("Principal{i}"))
        .collect::<Vec<_>>()
        .join(" ");
    let mut resume = common::identity_only();
    let mut job = common::job(0, String::new());
    job.position = position.clone();
    resume.experience.push(job);

    let rendered = render(&resume, "modern", None).expect("renders");
    assert_eq!(rendered.page_count(), 1);

    let page = rendered.page(0).expect("page");
    let heading: Vec<_> = common::body_runs(page)
        .into_iter()
        .filter(|(text, _)| text.starts_with("Principal"))
        .collect();
    let joined = heading
        .iter()
        .map(|(text, _)| text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(joined, position);
    assert!(heading
        .iter()
        .any(|(_, y)| *y > common::writable_bottom(page)));
}
