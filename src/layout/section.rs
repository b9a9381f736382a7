use crate::colour::Colour;
use crate::document::Document;
use crate::layout::lists::{format_list, ListItem};
use crate::layout::text::{render_lines, wrap_text, TextBox, TRAILING_GAP};
use crate::layout::{FlowResult, HeaderDrawer, LayoutCursor, PageController};
use crate::page::{DrawCommand, Page, Region, TextStyle};
use crate::rect::Rect;
use crate::units::Pt;
use crate::RenderError;

/// The kinds of titled block a résumé is made of, declared in the order a
/// résumé reads: profile first, references last
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Languages,
    Certifications,
    Projects,
    References,
}

impl SectionKind {
    /// Sections whose entries are short and bounded
    pub fn is_compact(self) -> bool {
        matches!(
            self,
            SectionKind::Skills
                | SectionKind::Languages
                | SectionKind::Certifications
                | SectionKind::References
        )
    }

    /// Representative height of one entry, used to decide whether the
    /// section title should start on a new page
    pub fn entry_estimate(self) -> Pt {
        match self {
            SectionKind::Experience => Pt(60.0),
            SectionKind::Education => Pt(40.0),
            SectionKind::Certifications | SectionKind::References => Pt(25.0),
            SectionKind::Projects => Pt(50.0),
            SectionKind::Summary => Pt(40.0),
            SectionKind::Skills | SectionKind::Languages => Pt(25.0),
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            SectionKind::Summary => "Profile",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Languages => "Languages",
            SectionKind::Certifications => "Certifications",
            SectionKind::Projects => "Projects",
            SectionKind::References => "References",
        }
    }
}

/// A labelled, clickable URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// One entry of an entry-based section (a job, a degree, a certificate...)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    /// Bold first line, e.g. the position
    pub heading: String,
    /// Right-aligned beside the heading, e.g. the date range
    pub aside: Option<String>,
    /// Second line, e.g. the company
    pub subtitle: Option<String>,
    /// Further short single-line facts
    pub details: Vec<String>,
    /// Free text, flowed across pages if it has to be
    pub body: Option<String>,
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Text(String),
    Entries(Vec<Entry>),
    List(Vec<ListItem>),
}

/// A titled block ready for layout
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub content: SectionContent,
}

impl Section {
    pub fn new(kind: SectionKind, content: SectionContent) -> Section {
        Section {
            kind,
            title: kind.default_title().to_string(),
            content,
        }
    }
}

/// How a template wants its sections to look
#[derive(Debug, Clone, PartialEq)]
pub struct SectionStyle {
    pub title: TextStyle,
    pub uppercase_titles: bool,
    pub rule_colour: Colour,
    pub rule_thickness: Pt,
    pub heading: TextStyle,
    pub aside: TextStyle,
    pub subtitle: TextStyle,
    pub detail: TextStyle,
    pub body: TextStyle,
    pub link: TextStyle,
    pub list: TextStyle,
    /// Space between the title rule and the first entry
    pub title_gap: Pt,
    pub entry_gap: Pt,
    pub section_gap: Pt,
}

impl SectionStyle {
    fn title_height(&self) -> Pt {
        self.title.line_height() + Pt(2.0) + self.rule_thickness + self.title_gap
    }

    fn title_text(&self, title: &str) -> String {
        if self.uppercase_titles {
            title.to_uppercase()
        } else {
            title.to_string()
        }
    }
}

/// Minimum gap kept between a heading and its right-aligned aside
const ASIDE_GAP: Pt = Pt(8.0);

/// The fixed-field lines of an entry, wrapped for the current column
struct EntryLines {
    aside_width: Pt,
    heading: Vec<String>,
    subtitle: Vec<String>,
    details: Vec<String>,
    /// Height of the fixed fields plus the first body line
    needed: Pt,
}

/// Draws one titled section into the main column, asking the
/// [PageController] for space before every block and breaking pages as
/// needed. A section that spills onto a new page gets a "(cont.)" title
/// at the top of that page.
pub struct SectionRenderer<'a> {
    doc: &'a mut Document,
    controller: &'a mut PageController,
    header: &'a dyn HeaderDrawer,
    cursor: &'a mut LayoutCursor,
    style: &'a SectionStyle,
    /// Page and y just below a title drawn at the top of the flow area
    fresh_top: Option<(usize, Pt)>,
}

impl<'a> SectionRenderer<'a> {
    pub fn new(
        doc: &'a mut Document,
        controller: &'a mut PageController,
        header: &'a dyn HeaderDrawer,
        cursor: &'a mut LayoutCursor,
        style: &'a SectionStyle,
    ) -> SectionRenderer<'a> {
        SectionRenderer {
            doc,
            controller,
            header,
            cursor,
            style,
            fresh_top: None,
        }
    }

    pub fn render(&mut self, section: &Section) -> Result<(), RenderError> {
        let first = self.first_block_height(section);
        let opening = self.style.title_height() + section.kind.entry_estimate().max(first);
        if self
            .controller
            .should_break(self.cursor, opening, section.kind.is_compact())
        {
            log::debug!("moving section `{}` to a new page", section.title);
            self.controller
                .break_page(self.doc, self.header, self.cursor)?;
        }

        self.doc
            .add_bookmark(&section.title, self.cursor.page_index, self.cursor.y);
        self.draw_title(&section.title)?;

        match &section.content {
            SectionContent::Text(text) => {
                self.flow_body(&section.title, text, self.style.body)?;
            }
            SectionContent::Entries(entries) => {
                for entry in entries {
                    self.draw_entry(&section.title, entry)?;
                }
            }
            SectionContent::List(items) => self.draw_list(&section.title, items)?,
        }

        self.cursor.advance(self.style.section_gap);
        Ok(())
    }

    fn page(&mut self) -> Result<&mut Page, RenderError> {
        self.doc.last_page_mut().ok_or(RenderError::PageMissing)
    }

    /// True when nothing but a title has been flowed onto this page, so a
    /// break would only repeat the same position on the next one
    fn at_fresh_top(&self) -> bool {
        self.controller.at_page_top(self.cursor)
            || self.fresh_top == Some((self.cursor.page_index, self.cursor.y))
    }

    /// Height the first block after the title needs on the same page
    fn first_block_height(&self, section: &Section) -> Pt {
        match &section.content {
            SectionContent::Text(text) if !text.trim().is_empty() => self.style.body.line_height(),
            SectionContent::Text(_) => Pt(0.0),
            SectionContent::Entries(entries) => entries
                .first()
                .map(|entry| self.measure_entry(entry).needed)
                .unwrap_or_default(),
            SectionContent::List(_) => self.style.list.line_height(),
        }
    }

    fn draw_title(&mut self, title: &str) -> Result<(), RenderError> {
        let style = self.style;
        let fresh = self.at_fresh_top();
        let (x, y, right) = (self.cursor.x, self.cursor.y, self.cursor.right());
        let rule_y = y + style.title.line_height() + Pt(2.0) + style.rule_thickness / 2.0;

        let page = self.page()?;
        page.add_text(Region::Body, style.title_text(title), style.title, x, y);
        page.push(
            Region::Body,
            DrawCommand::Rule {
                x1: x,
                x2: right,
                y: rule_y,
                thickness: style.rule_thickness,
                colour: style.rule_colour,
            },
        );
        self.cursor.advance(style.title_height());
        self.fresh_top = fresh.then_some((self.cursor.page_index, self.cursor.y));
        Ok(())
    }

    /// Make sure `needed` fits below the cursor, breaking the page (and
    /// drawing a continued title) if it does not
    fn ensure_space(&mut self, title: &str, needed: Pt) -> Result<(), RenderError> {
        if self.controller.has_space(self.cursor, needed) {
            return Ok(());
        }
        if self.at_fresh_top() {
            log::warn!(
                "entry of {:.1}pt in `{title}` is taller than the writable page; drawing it whole",
                *needed
            );
            return Ok(());
        }
        self.continue_on_new_page(title)
    }

    fn continue_on_new_page(&mut self, title: &str) -> Result<(), RenderError> {
        self.controller
            .break_page(self.doc, self.header, self.cursor)?;
        self.draw_title(&format!("{title} (cont.)"))
    }

    fn measure_entry(&self, entry: &Entry) -> EntryLines {
        let style = self.style;
        let width = self.cursor.column_width;

        let aside_width = entry
            .aside
            .as_deref()
            .map(|aside| style.aside.width_of(aside))
            .unwrap_or_default();
        let heading_width = if aside_width > Pt(0.0) {
            (width - aside_width - ASIDE_GAP).max(width / 2.0)
        } else {
            width
        };
        let heading = wrap_text(&entry.heading, &style.heading, heading_width);
        let subtitle = entry
            .subtitle
            .as_deref()
            .map(|s| wrap_text(s, &style.subtitle, width))
            .unwrap_or_default();
        let details: Vec<String> = entry
            .details
            .iter()
            .flat_map(|d| wrap_text(d, &style.detail, width))
            .collect();

        let mut needed = style.heading.line_height() * heading.len().max(1) as f32
            + style.subtitle.line_height() * subtitle.len() as f32
            + style.detail.line_height() * details.len() as f32;
        // keep the heading together with the first line of its body
        if entry.body.as_deref().is_some_and(|b| !b.trim().is_empty()) {
            needed += style.body.line_height();
        }

        EntryLines {
            aside_width,
            heading,
            subtitle,
            details,
            needed,
        }
    }

    fn draw_entry(&mut self, title: &str, entry: &Entry) -> Result<(), RenderError> {
        let style = self.style;
        let EntryLines {
            aside_width,
            heading,
            subtitle,
            details,
            needed,
        } = self.measure_entry(entry);
        self.ensure_space(title, needed)?;

        let (x, right) = (self.cursor.x, self.cursor.right());
        let mut y = self.cursor.y;
        let page = self.page()?;
        if let Some(aside) = entry.aside.as_deref() {
            page.add_text(Region::Body, aside, style.aside, right - aside_width, y);
        }
        for line in heading {
            page.add_text(Region::Body, line, style.heading, x, y);
            y += style.heading.line_height();
        }
        if entry.heading.trim().is_empty() {
            y += style.heading.line_height();
        }
        for line in subtitle {
            page.add_text(Region::Body, line, style.subtitle, x, y);
            y += style.subtitle.line_height();
        }
        for line in details {
            page.add_text(Region::Body, line, style.detail, x, y);
            y += style.detail.line_height();
        }
        self.cursor.y = y;

        if let Some(link) = &entry.link {
            self.draw_link(title, link)?;
        }
        match entry.body.as_deref() {
            Some(body) if !body.trim().is_empty() => self.flow_body(title, body, style.body)?,
            _ => self.cursor.advance(TRAILING_GAP),
        }

        self.cursor.advance(style.entry_gap);
        Ok(())
    }

    fn draw_link(&mut self, title: &str, link: &Link) -> Result<(), RenderError> {
        let style = self.style.link;
        let lines = wrap_text(&link.label, &style, self.cursor.column_width);
        for line in lines {
            self.ensure_space(title, style.line_height())?;
            let (x, y) = (self.cursor.x, self.cursor.y);
            let rect = Rect::from_xywh(x, y, style.width_of(&line), style.line_height());
            let page = self.page()?;
            page.add_text(Region::Body, line, style, x, y);
            page.add_link(rect, link.url.as_str());
            self.cursor.advance(style.line_height());
        }
        Ok(())
    }

    /// Flow free text, spilling onto as many pages as it needs
    fn flow_body(&mut self, title: &str, text: &str, style: TextStyle) -> Result<(), RenderError> {
        let mut lines = wrap_text(text, &style, self.cursor.column_width);
        if lines.is_empty() {
            return Ok(());
        }

        loop {
            let bounds = TextBox {
                x: self.cursor.x,
                y: self.cursor.y,
                max_width: self.cursor.column_width,
                bottom: self.controller.geometry().writable_bottom(),
            };
            let at_top = self.at_fresh_top();
            let page = self.page()?;
            match render_lines(page, Region::Body, lines, bounds, style, true) {
                FlowResult::Placed(y) => {
                    self.cursor.y = y;
                    return Ok(());
                }
                FlowResult::Overflow { y, mut remaining } => {
                    if y == bounds.y && at_top && !remaining.is_empty() {
                        // not even one line fits on an empty page
                        log::warn!("line in `{title}` is taller than the writable page");
                        let line = remaining.remove(0);
                        page.add_text(Region::Body, line, style, bounds.x, bounds.y);
                        self.cursor.y = bounds.y + style.line_height();
                    } else {
                        self.cursor.y = y;
                    }
                    if remaining.is_empty() {
                        self.cursor.advance(TRAILING_GAP);
                        return Ok(());
                    }
                    self.continue_on_new_page(title)?;
                    lines = remaining;
                }
                FlowResult::NeedsNewPage => {
                    // only produced without continuation
                    return Ok(());
                }
            }
        }
    }

    fn draw_list(&mut self, title: &str, items: &[ListItem]) -> Result<(), RenderError> {
        let style = self.style.list;
        let layout = format_list(items, self.cursor.column_width, &style);
        for row in layout.rows {
            self.ensure_space(title, style.line_height())?;
            let (x, y) = (self.cursor.x, self.cursor.y);
            let page = self.page()?;
            for cell in row.cells {
                page.add_text(Region::Body, cell.text, style, x + cell.offset, y);
            }
            self.cursor.advance(style.line_height());
        }
        self.cursor.advance(TRAILING_GAP);
        Ok(())
    }
}
