//! Visual templates.
//!
//! A template is declarative: colours, fonts, margins, column layout,
//! section order and a function that draws the page header. Everything to do
//! with measuring, breaking pages and flowing text lives in
//! [layout](crate::layout) and is shared by all of them.

mod classic;
mod elegant;
mod modern;

use crate::colour::Colour;
use crate::font::BuiltinFont;
use crate::image::Image;
use crate::layout::{
    ColumnLayout, GeometryContext, HeaderDrawer, Margins, Section, SectionKind, SectionStyle,
};
use crate::model::ResumeDocument;
use crate::page::{DrawCommand, Page, Region, TextStyle};
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::Id;
use std::fmt;

/// The available templates
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Elegant,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Modern, TemplateId::Classic, TemplateId::Elegant];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Elegant => "elegant",
        }
    }

    /// Look a template up by name, ignoring case and surrounding whitespace
    pub fn parse(name: &str) -> Option<TemplateId> {
        let name = name.trim();
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(name))
    }

    /// Like [TemplateId::parse], but unknown names fall back to
    /// [TemplateId::Modern] with a warning
    pub fn resolve(name: &str) -> TemplateId {
        TemplateId::parse(name).unwrap_or_else(|| {
            log::warn!("unknown template `{name}`; falling back to modern");
            TemplateId::Modern
        })
    }

    pub fn definition(self) -> TemplateDefinition {
        match self {
            TemplateId::Modern => modern::definition(),
            TemplateId::Classic => classic::definition(),
            TemplateId::Elegant => elegant::definition(),
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    /// Section titles, banners
    pub primary: Colour,
    /// Subtitles and highlights
    pub accent: Colour,
    pub text: Colour,
    pub muted: Colour,
    pub rule: Colour,
    pub link: Colour,
    /// Text drawn on top of `primary`
    pub on_primary: Colour,
    pub sidebar_background: Option<Colour>,
    pub sidebar_text: Colour,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Typography {
    pub regular: BuiltinFont,
    pub bold: BuiltinFont,
    pub italic: BuiltinFont,
    pub name_size: Pt,
    pub headline_size: Pt,
    pub title_size: Pt,
    pub heading_size: Pt,
    pub body_size: Pt,
    pub small_size: Pt,
}

/// Draws the header of one page onto a [Canvas] and returns the y where
/// flowed content may start
pub type HeaderFn = fn(&mut Canvas<'_>) -> Pt;

/// Draws the static sidebar onto a [Canvas]. Returns the kinds of the
/// sections that did not fit, which then flow in the main column instead.
pub type SidebarFn = fn(&mut Canvas<'_>, &[Section]) -> Vec<SectionKind>;

/// Everything that makes a template look the way it does
#[derive(Clone)]
pub struct TemplateDefinition {
    pub id: TemplateId,
    pub palette: Palette,
    pub typography: Typography,
    pub margins: Margins,
    pub columns: ColumnLayout,
    /// Main-column sections, top to bottom
    pub section_order: &'static [SectionKind],
    /// Sections drawn once into the sidebar and repeated on every page
    pub sidebar_sections: &'static [SectionKind],
    pub uppercase_titles: bool,
    pub title_rule: Pt,
    pub header: HeaderFn,
    pub sidebar: Option<SidebarFn>,
}

impl TemplateDefinition {
    pub fn section_style(&self) -> SectionStyle {
        let t = &self.typography;
        let p = &self.palette;
        SectionStyle {
            title: TextStyle::new(t.bold, t.title_size, p.primary),
            uppercase_titles: self.uppercase_titles,
            rule_colour: p.rule,
            rule_thickness: self.title_rule,
            heading: TextStyle::new(t.bold, t.heading_size, p.text),
            aside: TextStyle::new(t.regular, t.small_size, p.muted),
            subtitle: TextStyle::new(t.italic, t.body_size, p.accent),
            detail: TextStyle::new(t.regular, t.small_size, p.muted),
            body: TextStyle::new(t.regular, t.body_size, p.text),
            link: TextStyle::new(t.regular, t.small_size, p.link),
            list: TextStyle::new(t.regular, t.body_size, p.text),
            title_gap: Pt(6.0),
            entry_gap: Pt(6.0),
            section_gap: Pt(12.0),
        }
    }
}

/// A plain-text contact channel. Shown on the page, never turned into a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactField {
    pub label: &'static str,
    pub value: String,
}

impl ContactField {
    pub fn display(&self) -> String {
        match self.label {
            "Age" => format!("Age {}", self.value),
            _ => self.value.clone(),
        }
    }
}

/// The identity block every header draws from
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderContent {
    pub name: String,
    pub headline: Option<String>,
    pub contact: Vec<ContactField>,
}

impl HeaderContent {
    pub fn from_resume(resume: &ResumeDocument) -> HeaderContent {
        let personal = &resume.personal;
        let mut contact = Vec::new();
        let mut add = |label: &'static str, value: Option<&str>| {
            if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
                contact.push(ContactField {
                    label,
                    value: value.to_string(),
                });
            }
        };
        add("Email", Some(personal.email.as_str()));
        add("Phone", personal.phone.as_deref());
        add("Location", personal.location.as_deref());
        add("Website", personal.website.as_deref());
        add("Age", personal.age.map(|a| a.to_string()).as_deref());

        HeaderContent {
            name: personal.name.trim().to_string(),
            headline: personal
                .headline
                .as_deref()
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string),
            contact,
        }
    }

    /// All contact channels on one line
    pub fn contact_line(&self) -> String {
        self.contact
            .iter()
            .map(ContactField::display)
            .collect::<Vec<_>>()
            .join("  \u{00B7}  ")
    }
}

/// What a header or sidebar function draws on: one region of one page plus
/// the template's look and the candidate's identity
pub struct Canvas<'p> {
    pub page: &'p mut Page,
    pub region: Region,
    pub page_number: usize,
    pub geometry: &'p GeometryContext,
    pub palette: &'p Palette,
    pub typography: &'p Typography,
    pub content: &'p HeaderContent,
    pub photo: Option<Id<Image>>,
}

impl<'p> Canvas<'p> {
    pub fn is_first_page(&self) -> bool {
        self.page_number == 1
    }

    pub fn text<S: Into<String>>(&mut self, text: S, style: TextStyle, x: Pt, y: Pt) {
        self.page.add_text(self.region, text, style, x, y);
    }

    /// Draw `text` so that it ends at `right`
    pub fn text_right(&mut self, text: &str, style: TextStyle, right: Pt, y: Pt) {
        let x = right - style.width_of(text);
        self.text(text, style, x, y);
    }

    /// Draw `text` centred on `centre`
    pub fn text_centred(&mut self, text: &str, style: TextStyle, centre: Pt, y: Pt) {
        let x = centre - style.width_of(text) / 2.0;
        self.text(text, style, x, y);
    }

    /// Wrap `text` to `width` and draw it line by line from `y`, returning
    /// the y below the last line
    pub fn paragraph(&mut self, text: &str, style: TextStyle, x: Pt, y: Pt, width: Pt) -> Pt {
        let mut y = y;
        for line in crate::layout::text::wrap_text(text, &style, width) {
            self.text(line, style, x, y);
            y += style.line_height();
        }
        y
    }

    /// Like [Canvas::paragraph] but each line is centred on `centre`
    pub fn paragraph_centred(&mut self, text: &str, style: TextStyle, centre: Pt, y: Pt, width: Pt) -> Pt {
        let mut y = y;
        for line in crate::layout::text::wrap_text(text, &style, width) {
            self.text_centred(&line, style, centre, y);
            y += style.line_height();
        }
        y
    }

    pub fn fill(&mut self, rect: Rect, colour: Colour) {
        self.page
            .push(self.region, DrawCommand::FillRect { rect, colour });
    }

    pub fn rule(&mut self, x1: Pt, x2: Pt, y: Pt, thickness: Pt, colour: Colour) {
        self.page.push(
            self.region,
            DrawCommand::Rule {
                x1,
                x2,
                y,
                thickness,
                colour,
            },
        );
    }

    /// Place the profile photo, if there is one. Returns whether it was drawn.
    pub fn photo(&mut self, rect: Rect) -> bool {
        match self.photo {
            Some(image) => {
                self.page
                    .push(self.region, DrawCommand::Image { image, rect });
                true
            }
            None => false,
        }
    }
}

/// A template bound to one render: it knows the candidate, the page
/// geometry and the photo, and it carries the sidebar drawn once up front
/// so every page repeats it exactly.
pub struct ActiveTemplate<'a> {
    definition: &'a TemplateDefinition,
    geometry: &'a GeometryContext,
    content: &'a HeaderContent,
    photo: Option<Id<Image>>,
    sidebar: Vec<DrawCommand>,
}

impl<'a> ActiveTemplate<'a> {
    /// Bind `definition` to a render. Returns the template and the kinds of
    /// any sidebar sections that did not fit in the sidebar.
    pub fn new(
        definition: &'a TemplateDefinition,
        geometry: &'a GeometryContext,
        content: &'a HeaderContent,
        photo: Option<Id<Image>>,
        sidebar_sections: &[Section],
    ) -> (ActiveTemplate<'a>, Vec<SectionKind>) {
        let mut spilled = Vec::new();
        let mut sidebar = Vec::new();

        match definition.sidebar {
            Some(draw_sidebar) if geometry.sidebar().is_some() => {
                let mut scratch = Page::new(geometry.page_size, geometry.margins.clone());
                let mut canvas = Canvas {
                    page: &mut scratch,
                    region: Region::Sidebar,
                    page_number: 1,
                    geometry,
                    palette: &definition.palette,
                    typography: &definition.typography,
                    content,
                    photo,
                };
                spilled = draw_sidebar(&mut canvas, sidebar_sections);
                sidebar = scratch.region(Region::Sidebar).to_vec();
            }
            _ => spilled.extend(sidebar_sections.iter().map(|s| s.kind)),
        }

        if !spilled.is_empty() {
            log::warn!(
                "{} sidebar section(s) do not fit the sidebar; flowing them in the main column",
                spilled.len()
            );
        }

        (
            ActiveTemplate {
                definition,
                geometry,
                content,
                photo,
                sidebar,
            },
            spilled,
        )
    }

    pub fn definition(&self) -> &TemplateDefinition {
        self.definition
    }
}

impl HeaderDrawer for ActiveTemplate<'_> {
    fn draw_header(&self, page: &mut Page, page_number: usize) -> Pt {
        for command in &self.sidebar {
            page.push(Region::Sidebar, command.clone());
        }
        let mut canvas = Canvas {
            page,
            region: Region::Header,
            page_number,
            geometry: self.geometry,
            palette: &self.definition.palette,
            typography: &self.definition.typography,
            content: self.content,
            photo: self.photo,
        };
        (self.definition.header)(&mut canvas)
    }

    fn draw_footer(&self, page: &mut Page, page_number: usize) {
        let t = &self.definition.typography;
        let style = TextStyle::new(t.regular, t.small_size, self.definition.palette.muted);
        let main = self.geometry.main();
        let caption = format!("Page {page_number}");
        let y = self.geometry.writable_bottom()
            + (self.geometry.bottom_margin() - style.line_height()) / 2.0;
        let x = main.x + (main.width - style.width_of(&caption)) / 2.0;
        page.add_text(Region::Footer, caption, style, x, y);
    }
}
