use crate::document::Document;
use crate::layout::{GeometryContext, LayoutCursor};
use crate::page::Page;
use crate::units::Pt;
use crate::RenderError;

/// Thresholds deciding whether a block should start on a fresh page even
/// though it would technically fit.
///
/// Large blocks are pushed to the next page rather than started in a thin
/// strip at the bottom; short compact blocks are allowed to use up trailing
/// space. The values are tuned by eye and exposed so callers can adjust them.
///
/// A block that does not fit always breaks. A block that fits breaks only
/// when it is larger than `large_block` and less than
/// `large_block_min_remaining` of the page is left, unless it is a compact
/// block no taller than `compact_block` with at least
/// `compact_min_remaining` left, which always stays.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BreakPolicy {
    /// Blocks taller than this are "large"
    pub large_block: Pt,
    /// A large block breaks unless at least this fraction of the page height remains
    pub large_block_min_remaining: f32,
    /// Compact blocks up to this height are exempt from the large block rule...
    pub compact_block: Pt,
    /// ...while at least this fraction of the page height remains
    pub compact_min_remaining: f32,
}

impl Default for BreakPolicy {
    fn default() -> Self {
        BreakPolicy {
            large_block: Pt(60.0),
            large_block_min_remaining: 0.30,
            compact_block: Pt(40.0),
            compact_min_remaining: 0.20,
        }
    }
}

/// Draws whatever a template repeats on every page.
///
/// `page_number` is 1-based, so `1` means the first page and anything
/// larger is a continuation.
pub trait HeaderDrawer {
    /// Draw the header (and any static sidebar) onto a fresh page and return
    /// the y at which flowed content may start
    fn draw_header(&self, page: &mut Page, page_number: usize) -> Pt;

    /// Draw the page caption onto a finished page
    fn draw_footer(&self, page: &mut Page, page_number: usize);
}

/// Owns the page lifecycle of a render: opening pages, replaying headers,
/// closing pages with a footer, and deciding when a block no longer fits.
#[derive(Debug, Clone)]
pub struct PageController {
    geometry: GeometryContext,
    policy: BreakPolicy,
    /// y at which flowed content starts on the current page
    content_top: Pt,
    pages_opened: usize,
}

impl PageController {
    pub fn new(geometry: GeometryContext, policy: BreakPolicy) -> PageController {
        let content_top = geometry.margins.top;
        PageController {
            geometry,
            policy,
            content_top,
            pages_opened: 0,
        }
    }

    pub fn geometry(&self) -> &GeometryContext {
        &self.geometry
    }

    pub fn policy(&self) -> &BreakPolicy {
        &self.policy
    }

    /// Number of pages opened so far
    pub fn page_count(&self) -> usize {
        self.pages_opened
    }

    /// True iff a block of `needed` height starting at the cursor stays above
    /// the writable bottom
    pub fn has_space(&self, cursor: &LayoutCursor, needed: Pt) -> bool {
        cursor.y + needed <= self.geometry.writable_bottom()
    }

    /// Whether the cursor sits where flowed content starts on its page.
    /// Breaking from here would only produce an empty page.
    pub fn at_page_top(&self, cursor: &LayoutCursor) -> bool {
        cursor.y <= self.content_top
    }

    /// Decide whether a block of `needed` height should be moved to a new page
    pub fn should_break(&self, cursor: &LayoutCursor, needed: Pt, is_compact: bool) -> bool {
        if !self.has_space(cursor, needed) {
            if self.at_page_top(cursor) {
                log::warn!(
                    "block of {:.1}pt is taller than the writable page; drawing it whole",
                    *needed
                );
                return false;
            }
            return true;
        }

        let remaining = *(self.geometry.writable_bottom() - cursor.y) / *self.geometry.page_height();
        if is_compact
            && needed <= self.policy.compact_block
            && remaining >= self.policy.compact_min_remaining
        {
            return false;
        }
        needed > self.policy.large_block && remaining < self.policy.large_block_min_remaining
    }

    fn open_page(&mut self, doc: &mut Document, header: &dyn HeaderDrawer, cursor: &mut LayoutCursor) {
        let mut page = Page::new(self.geometry.page_size, self.geometry.margins.clone());
        self.pages_opened += 1;
        let top = header.draw_header(&mut page, self.pages_opened);
        doc.add_page(page);

        self.content_top = top;
        cursor.y = top;
        cursor.page_index = self.pages_opened - 1;
    }

    /// Open page 1 and place the cursor below its header
    pub fn open_first_page(
        &mut self,
        doc: &mut Document,
        header: &dyn HeaderDrawer,
        cursor: &mut LayoutCursor,
    ) {
        self.open_page(doc, header, cursor);
    }

    /// Close the current page with its footer, open the next one, replay the
    /// header and reset the cursor to the top of the flow area
    pub fn break_page(
        &mut self,
        doc: &mut Document,
        header: &dyn HeaderDrawer,
        cursor: &mut LayoutCursor,
    ) -> Result<(), RenderError> {
        let outgoing = self.pages_opened;
        let page = doc.last_page_mut().ok_or(RenderError::PageMissing)?;
        header.draw_footer(page, outgoing);

        self.open_page(doc, header, cursor);
        log::debug!(
            "page break after page {outgoing}; content resumes at {:.1}pt",
            *cursor.y
        );
        Ok(())
    }

    /// Draw the closing footer on the last page
    pub fn finish(&mut self, doc: &mut Document, header: &dyn HeaderDrawer) -> Result<(), RenderError> {
        let page = doc.last_page_mut().ok_or(RenderError::PageMissing)?;
        header.draw_footer(page, self.pages_opened);
        Ok(())
    }
}
