use crate::colour::Colour;
use crate::content::render_commands;
use crate::font::BuiltinFont;
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use id_arena::{Arena, Id};
use pdf_writer::types::{ActionType, AnnotationType};
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Str};
use std::collections::BTreeSet;

/// Everything needed to draw a run of text. Styles are plain values handed to
/// each draw call; there is no "current font" or "current colour" anywhere.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TextStyle {
    pub font: BuiltinFont,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    pub const fn new(font: BuiltinFont, size: Pt, colour: Colour) -> TextStyle {
        TextStyle { font, size, colour }
    }

    pub fn line_height(&self) -> Pt {
        self.font.line_height(self.size)
    }

    pub fn width_of(&self, text: &str) -> Pt {
        self.font.width_of_text(text, self.size)
    }

    pub fn with_font(self, font: BuiltinFont) -> TextStyle {
        TextStyle { font, ..self }
    }

    pub fn with_size(self, size: Pt) -> TextStyle {
        TextStyle { size, ..self }
    }

    pub fn with_colour(self, colour: Colour) -> TextStyle {
        TextStyle { colour, ..self }
    }
}

/// A single line of text. `y` is the top of the line box; the baseline sits
/// one ascent below it.
#[derive(Clone, PartialEq, Debug)]
pub struct TextRun {
    pub text: String,
    pub style: TextStyle,
    pub x: Pt,
    pub y: Pt,
}

/// One drawing operation on a page, in top-down layout coordinates
#[derive(Clone, PartialEq, Debug)]
pub enum DrawCommand {
    Text(TextRun),
    Rule {
        x1: Pt,
        x2: Pt,
        y: Pt,
        thickness: Pt,
        colour: Colour,
    },
    FillRect {
        rect: Rect,
        colour: Colour,
    },
    Image {
        image: Id<Image>,
        rect: Rect,
    },
}

impl DrawCommand {
    /// The top edge of the area this command paints
    pub fn top(&self) -> Pt {
        match self {
            DrawCommand::Text(run) => run.y,
            DrawCommand::Rule { y, thickness, .. } => *y - *thickness / 2.0,
            DrawCommand::FillRect { rect, .. } | DrawCommand::Image { rect, .. } => rect.y1,
        }
    }

    /// The bottom edge of the area this command paints
    pub fn bottom(&self) -> Pt {
        match self {
            DrawCommand::Text(run) => run.y + run.style.line_height(),
            DrawCommand::Rule { y, thickness, .. } => *y + *thickness / 2.0,
            DrawCommand::FillRect { rect, .. } | DrawCommand::Image { rect, .. } => rect.y2,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text(run) => Some(run.text.as_str()),
            _ => None,
        }
    }
}

/// The parts of a page. Header and sidebar are replayed by the template on
/// every page, the body holds flowed content and the footer carries the page
/// caption.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Region {
    Header,
    Sidebar,
    Body,
    Footer,
}

/// A clickable URI over some text
#[derive(Debug, Clone, PartialEq)]
pub struct LinkAnnotation {
    pub rect: Rect,
    pub url: String,
}

/// A single page of the document. Draw commands are append-only: once pushed
/// they are never reordered or removed.
#[derive(Debug, Clone)]
pub struct Page {
    size: PageSize,
    margins: Margins,
    header: Vec<DrawCommand>,
    sidebar: Vec<DrawCommand>,
    body: Vec<DrawCommand>,
    footer: Vec<DrawCommand>,
    links: Vec<LinkAnnotation>,
}

impl Page {
    pub fn new(size: PageSize, margins: Margins) -> Page {
        Page {
            size,
            margins,
            header: Vec::new(),
            sidebar: Vec::new(),
            body: Vec::new(),
            footer: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn width(&self) -> Pt {
        self.size.0
    }

    pub fn height(&self) -> Pt {
        self.size.1
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    /// Where content can live, i.e. within the margins
    pub fn content_box(&self) -> Rect {
        Rect {
            x1: self.margins.left,
            y1: self.margins.top,
            x2: self.size.0 - self.margins.right,
            y2: self.size.1 - self.margins.bottom,
        }
    }

    pub fn push(&mut self, region: Region, command: DrawCommand) {
        self.region_mut(region).push(command);
    }

    /// Convenience for pushing a [DrawCommand::Text]
    pub fn add_text<S: Into<String>>(
        &mut self,
        region: Region,
        text: S,
        style: TextStyle,
        x: Pt,
        y: Pt,
    ) {
        self.push(
            region,
            DrawCommand::Text(TextRun {
                text: text.into(),
                style,
                x,
                y,
            }),
        );
    }

    pub fn add_link<S: Into<String>>(&mut self, rect: Rect, url: S) {
        self.links.push(LinkAnnotation {
            rect,
            url: url.into(),
        });
    }

    pub fn region(&self, region: Region) -> &[DrawCommand] {
        match region {
            Region::Header => &self.header,
            Region::Sidebar => &self.sidebar,
            Region::Body => &self.body,
            Region::Footer => &self.footer,
        }
    }

    fn region_mut(&mut self, region: Region) -> &mut Vec<DrawCommand> {
        match region {
            Region::Header => &mut self.header,
            Region::Sidebar => &mut self.sidebar,
            Region::Body => &mut self.body,
            Region::Footer => &mut self.footer,
        }
    }

    pub fn links(&self) -> &[LinkAnnotation] {
        &self.links
    }

    /// All text drawn in a region, one run per line
    pub fn region_text(&self, region: Region) -> String {
        self.region(region)
            .iter()
            .filter_map(DrawCommand::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// All text on the page, in painting order
    pub fn text(&self) -> String {
        [Region::Header, Region::Sidebar, Region::Body, Region::Footer]
            .into_iter()
            .map(|region| self.region_text(region))
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The uncompressed content stream for a single region
    pub fn region_content(&self, region: Region) -> Vec<u8> {
        let mut content = Content::new();
        render_commands(&mut content, self.region(region), self.height());
        content.finish().to_vec()
    }

    pub(crate) fn fonts_used(&self, into: &mut BTreeSet<BuiltinFont>) {
        for region in [Region::Header, Region::Sidebar, Region::Body, Region::Footer] {
            for command in self.region(region) {
                if let DrawCommand::Text(run) = command {
                    into.insert(run.style.font);
                }
            }
        }
    }

    fn render(&self) -> Vec<u8> {
        let mut content = Content::new();
        // sidebar backgrounds go down first so the header can paint over them
        for region in [Region::Sidebar, Region::Header, Region::Body, Region::Footer] {
            render_commands(&mut content, self.region(region), self.height());
        }
        content.finish().to_vec()
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &BTreeSet<BuiltinFont>,
        images: &Arena<Image>,
        compress: bool,
        writer: &mut Pdf,
    ) -> Result<(), crate::RenderError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(crate::RenderError::PageMissing)?;
        let page_tree = refs.get_or_gen(RefType::PageTree);
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let annotation_ids: Vec<_> = (0..self.links.len())
            .map(|index| {
                refs.gen(RefType::Annotation {
                    page: page_index,
                    index,
                })
            })
            .collect();

        let mut page = writer.page(id);
        page.media_box(pdf_writer::Rect::new(
            0.0,
            0.0,
            self.width().into(),
            self.height().into(),
        ));
        page.art_box(self.content_box().to_pdf(self.height()));
        page.parent(page_tree);
        page.contents(content_id);
        if !annotation_ids.is_empty() {
            page.annotations(annotation_ids.iter().copied());
        }

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for font in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(*font)) {
                resource_fonts.pair(Name(font.resource_name().as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        if images.len() > 0 {
            let mut resource_xobjects = resources.x_objects();
            for (image_id, _) in images.iter() {
                if let Some(image_ref) = refs.get(RefType::Image(image_id.index())) {
                    resource_xobjects
                        .pair(Name(format!("I{}", image_id.index()).as_bytes()), image_ref);
                }
            }
            resource_xobjects.finish();
        }
        resources.finish();
        page.finish();

        for (link, annotation_id) in self.links.iter().zip(annotation_ids) {
            let mut annotation = writer.annotation(annotation_id);
            annotation
                .subtype(AnnotationType::Link)
                .rect(link.rect.to_pdf(self.height()))
                .border(0.0, 0.0, 0.0, None);
            annotation
                .action()
                .action_type(ActionType::Uri)
                .uri(Str(link.url.as_bytes()));
        }

        let rendered = self.render();
        if compress {
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&rendered, 6);
            writer
                .stream(content_id, &compressed)
                .filter(Filter::FlateDecode);
        } else {
            writer.stream(content_id, &rendered);
        }

        Ok(())
    }
}
