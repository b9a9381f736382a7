use crate::{
    image::Image,
    info::Info,
    outline::Outline,
    page::Page,
    refs::{ObjectReferences, RefType},
    RenderError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf};
use std::{collections::BTreeSet, io::Write};

#[derive(Default, Debug)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pages: Arena<Page>,
    page_order: Vec<Id<Page>>,
    images: Arena<Image>,
    outline: Outline,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Get the page at a 0-based index
    pub fn page(&self, page_index: usize) -> Option<&Page> {
        self.page_order
            .get(page_index)
            .and_then(|id| self.pages.get(*id))
    }

    /// The page currently being filled, i.e. the last one
    pub fn last_page_mut(&mut self) -> Option<&mut Page> {
        let id = *self.page_order.last()?;
        self.pages.get_mut(id)
    }

    /// Pages in document order
    pub fn pages(&self) -> impl Iterator<Item = &Page> + '_ {
        self.page_order.iter().filter_map(|id| self.pages.get(*id))
    }

    /// Add an image to the document structure. Images are stored "globally" within the
    /// document, such that any page can place it by referring to the returned id.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    pub fn image(&self, id: Id<Image>) -> Option<&Image> {
        self.images.get(id)
    }

    /// Add a bookmark in the document outline pointing to a page with a given index.
    /// `top` is measured from the top of that page.
    pub fn add_bookmark<S: ToString>(&mut self, title: S, page_index: usize, top: crate::Pt) {
        let height = self
            .page(page_index)
            .map(Page::height)
            .unwrap_or_default();
        self.outline
            .add_bookmark(page_index, title.to_string(), (height - top).into());
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Write the entire document to the writer. The whole document is rendered
    /// in memory first, then written out in one go.
    ///
    /// Object ids are allocated in a fixed order (info, pages, fonts, images,
    /// page contents, outline), so writing the same document twice produces the
    /// same bytes.
    pub fn write<W: Write>(&self, mut w: W, compress: bool) -> Result<(), RenderError> {
        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<_> = (0..self.page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        let mut fonts = BTreeSet::new();
        for page in self.pages() {
            page.fonts_used(&mut fonts);
        }
        for font in fonts.iter() {
            font.write(&mut refs, &mut writer);
        }

        for (id, image) in self.images.iter() {
            image.write(&mut refs, id.index(), &mut writer);
        }

        for (page_index, id) in self.page_order.iter().enumerate() {
            let page = self.pages.get(*id).ok_or(RenderError::PageMissing)?;
            page.write(
                &mut refs,
                page_index,
                &fonts,
                &self.images,
                compress,
                &mut writer,
            )?;
        }

        self.outline.write(&mut refs, &mut writer);

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outlines_id) = refs.get(RefType::Outlines) {
            catalog.outlines(outlines_id);
        }
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}
