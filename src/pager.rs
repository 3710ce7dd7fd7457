use tracing::{debug, error};

use super::error::ExecuteError;

pub const PAGE_SIZE: usize = 4096;
pub const TABLE_MAX_PAGES: usize = 100;

pub type Page = Box<[u8]>;

/// In-memory page store. A slot is `None` until the page is first touched;
/// allocated pages stay put until the whole pager is closed.
#[derive(Default)]
pub struct Pager {
    pages: Vec<Option<Page>>,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns page `page_num`, allocating a zeroed page on first use.
    pub fn get_page(&mut self, page_num: usize) -> Result<&mut [u8], ExecuteError> {
        let alloc_err = |source| {
            error!(page_num, "page allocation failed");
            ExecuteError::AllocationFailure { page_num, source }
        };

        if page_num >= self.pages.len() {
            self.pages
                .try_reserve(page_num + 1 - self.pages.len())
                .map_err(alloc_err)?;
            self.pages.resize_with(page_num + 1, || None);
        }

        let page = match &mut self.pages[page_num] {
            Some(page) => page,
            slot => {
                let mut buf = Vec::new();
                buf.try_reserve_exact(PAGE_SIZE).map_err(alloc_err)?;
                buf.resize(PAGE_SIZE, 0);
                debug!(page_num, "allocated page");
                slot.insert(buf.into_boxed_slice())
            }
        };
        Ok(&mut page[..])
    }

    /// Returns page `page_num` if it has been allocated.
    pub fn page(&self, page_num: usize) -> Option<&[u8]> {
        self.pages.get(page_num)?.as_deref()
    }

    pub fn is_allocated(&self, page_num: usize) -> bool {
        self.page(page_num).is_some()
    }

    pub fn num_allocated(&self) -> usize {
        self.pages.iter().filter(|p| p.is_some()).count()
    }

    /// Releases every page.
    pub fn close(&mut self) {
        self.pages = Vec::new();
    }
}
