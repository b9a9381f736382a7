//! The entry point: résumé + template name (+ photo) in, paginated document out.

use crate::compositor::{self, DEFAULT_PHOTO_RESOLUTION};
use crate::document::Document;
use crate::image::Image;
use crate::info::Info;
use crate::layout::{
    BreakPolicy, GeometryContext, LayoutCursor, Margins, PageController, SectionRenderer,
};
use crate::model::ResumeDocument;
use crate::outline::Outline;
use crate::page::{LinkAnnotation, Page};
use crate::pagesize::{PageSize, A4};
use crate::sections::{build_sections, merge_in_order};
use crate::template::{ActiveTemplate, ContactField, HeaderContent, TemplateId};
use crate::RenderError;
use chrono::NaiveDateTime;
use image::DynamicImage;
use std::io::Write;
use std::time::Instant;

/// Knobs for a render call. The defaults produce an A4 document with the
/// template's own margins and no timestamp, so repeated renders of the same
/// résumé are byte-identical.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub page_size: PageSize,
    /// Overrides the template's margins when set
    pub margins: Option<Margins>,
    pub break_policy: BreakPolicy,
    /// Edge length, in pixels, of the embedded photo
    pub photo_resolution: u32,
    /// Deflate page content streams
    pub compress: bool,
    /// Written as the PDF creation date when set
    pub generated_at: Option<NaiveDateTime>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            page_size: A4,
            margins: None,
            break_policy: BreakPolicy::default(),
            photo_resolution: DEFAULT_PHOTO_RESOLUTION,
            compress: true,
            generated_at: None,
        }
    }
}

impl RenderOptions {
    pub fn new() -> RenderOptions {
        RenderOptions::default()
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    pub fn break_policy(mut self, policy: BreakPolicy) -> Self {
        self.break_policy = policy;
        self
    }

    pub fn photo_resolution(mut self, pixels: u32) -> Self {
        self.photo_resolution = pixels;
        self
    }

    pub fn compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn generated_at(mut self, when: NaiveDateTime) -> Self {
        self.generated_at = Some(when);
        self
    }
}

enum PhotoSource<'a> {
    None,
    Bytes(&'a [u8]),
    Decoded(DynamicImage),
}

/// Builder for a single render call
pub struct RenderRequest<'a> {
    resume: &'a ResumeDocument,
    template: TemplateId,
    photo: PhotoSource<'a>,
    options: RenderOptions,
}

impl<'a> RenderRequest<'a> {
    pub fn new(resume: &'a ResumeDocument) -> RenderRequest<'a> {
        RenderRequest {
            resume,
            template: TemplateId::default(),
            photo: PhotoSource::None,
            options: RenderOptions::default(),
        }
    }

    /// Choose a template by name. Unknown names fall back to modern.
    pub fn template(mut self, name: &str) -> Self {
        self.template = TemplateId::resolve(name);
        self
    }

    pub fn template_id(mut self, id: TemplateId) -> Self {
        self.template = id;
        self
    }

    /// Encoded photo bytes (PNG, JPEG, ...). Undecodable bytes produce a
    /// placeholder rather than an error.
    pub fn photo_bytes(mut self, bytes: &'a [u8]) -> Self {
        self.photo = PhotoSource::Bytes(bytes);
        self
    }

    pub fn photo_image(mut self, image: DynamicImage) -> Self {
        self.photo = PhotoSource::Decoded(image);
        self
    }

    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn render(self) -> Result<RenderedDocument, RenderError> {
        let started = Instant::now();
        let resume = self.resume;
        resume.validate()?;

        let definition = self.template.definition();
        let margins = self
            .options
            .margins
            .clone()
            .unwrap_or_else(|| definition.margins.clone());
        let geometry = GeometryContext::new(self.options.page_size, margins, definition.columns);

        let mut doc = Document::default();
        let resolution = self.options.photo_resolution;
        let photo = match self.photo {
            PhotoSource::None => None,
            PhotoSource::Bytes(bytes) => Some(compositor::photo_or_placeholder(bytes, resolution)),
            PhotoSource::Decoded(image) => Some(compositor::recover(
                compositor::photo_from_image(&image, resolution),
                resolution,
            )),
        }
        .map(|pixels| doc.add_image(Image::new(pixels)));

        let content = HeaderContent::from_resume(resume);
        let sidebar_sections = build_sections(resume, definition.sidebar_sections);
        let (template, spilled) =
            ActiveTemplate::new(&definition, &geometry, &content, photo, &sidebar_sections);

        let order = merge_in_order(definition.section_order, &spilled);
        let sections = build_sections(resume, &order);

        let mut controller = PageController::new(geometry.clone(), self.options.break_policy);
        let mut cursor = LayoutCursor::new(geometry.main(), geometry.margins.top);
        controller.open_first_page(&mut doc, &template, &mut cursor);

        let style = definition.section_style();
        for section in &sections {
            SectionRenderer::new(&mut doc, &mut controller, &template, &mut cursor, &style)
                .render(section)?;
        }
        controller.finish(&mut doc, &template)?;

        doc.set_info(document_info(resume, self.template, self.options.generated_at));

        log::info!(
            "rendered résumé for {} with the {} template: {} page(s) in {}ms",
            content.name,
            self.template,
            doc.page_count(),
            started.elapsed().as_millis()
        );

        Ok(RenderedDocument {
            suggested_filename: suggested_filename(resume, self.template),
            document: doc,
            template: self.template,
            contact_fields: content.contact.clone(),
            compress: self.options.compress,
        })
    }
}

/// Render `resume` with the named template and an optional encoded photo
/// using the default [RenderOptions]
pub fn render(
    resume: &ResumeDocument,
    template: &str,
    photo: Option<&[u8]>,
) -> Result<RenderedDocument, RenderError> {
    let mut request = RenderRequest::new(resume).template(template);
    if let Some(bytes) = photo {
        request = request.photo_bytes(bytes);
    }
    request.render()
}

fn document_info(resume: &ResumeDocument, template: TemplateId, generated_at: Option<NaiveDateTime>) -> Info {
    let name = resume.personal.name.trim();
    let mut info = Info::new();
    info.title(format!("{name} - Résumé"))
        .author(name)
        .subject(format!("{template} template"));
    if !resume.skills.is_empty() {
        info.keywords(
            resume
                .skills
                .iter()
                .map(|s| s.name.trim())
                .collect::<Vec<_>>()
                .join(", "),
        );
    }
    if let Some(when) = generated_at {
        info.creation_date(when);
    }
    info
}

/// Fold a Latin-1 letter to its closest ASCII letters
fn fold(c: char) -> Option<&'static str> {
    Some(match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "a",
        'æ' | 'Æ' => "ae",
        'ç' | 'Ç' => "c",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ñ' | 'Ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => "u",
        'ý' | 'ÿ' | 'Ý' => "y",
        'ß' => "ss",
        _ => return None,
    })
}

/// A file name for the document, e.g. `maria-jose-perez-elegant-resume.pdf`
pub fn suggested_filename(resume: &ResumeDocument, template: TemplateId) -> String {
    let mut slug = String::new();
    for c in resume.personal.name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if let Some(folded) = fold(c) {
            slug.push_str(folded);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        format!("{template}-resume.pdf")
    } else {
        format!("{slug}-{template}-resume.pdf")
    }
}

/// The finished, paginated résumé. Immutable once returned.
#[derive(Debug)]
pub struct RenderedDocument {
    document: Document,
    template: TemplateId,
    contact_fields: Vec<ContactField>,
    suggested_filename: String,
    compress: bool,
}

impl RenderedDocument {
    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page> + '_ {
        self.document.pages()
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.document.page(index)
    }

    /// Every clickable link with the 0-based index of its page
    pub fn links(&self) -> Vec<(usize, &LinkAnnotation)> {
        self.pages()
            .enumerate()
            .flat_map(|(index, page)| page.links().iter().map(move |link| (index, link)))
            .collect()
    }

    /// Contact channels shown as plain text
    pub fn contact_fields(&self) -> &[ContactField] {
        &self.contact_fields
    }

    pub fn outline(&self) -> &Outline {
        self.document.outline()
    }

    pub fn info(&self) -> Option<&Info> {
        self.document.info.as_ref()
    }

    /// The template actually used, after any fallback
    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn suggested_filename(&self) -> &str {
        &self.suggested_filename
    }

    pub fn write<W: Write>(&self, w: W) -> Result<(), RenderError> {
        self.document.write(w, self.compress)
    }

    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        self.write(&mut bytes)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_are_ascii_slugs() {
        let resume = ResumeDocument::new("María José  Pérez", "mj@example.com");
        assert_eq!(
            suggested_filename(&resume, TemplateId::Elegant),
            "maria-jose-perez-elegant-resume.pdf"
        );
        let resume = ResumeDocument::new("李 小龍", "lee@example.com");
        assert_eq!(suggested_filename(&resume, TemplateId::Modern), "modern-resume.pdf");
    }

    #[test]
    fn info_describes_the_document() {
        let resume = ResumeDocument::new("Ada Lovelace", "ada@example.com");
        let info = document_info(&resume, TemplateId::Classic, None);
        assert_eq!(info.title.as_deref(), Some("Ada Lovelace - Résumé"));
        assert_eq!(info.subject.as_deref(), Some("classic template"));
        assert!(info.keywords.is_none());
        assert!(info.creation_date.is_none());
    }
}
