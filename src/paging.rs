// Page-at-a-time iteration over list RPCs
//
// The remote side returns list results one page at a time, each page carrying
// an opaque continuation token. The pagers below present those pages as a
// single lazy sequence, issuing a follow-up call only when the consumer
// crosses a page boundary. Fetching is injected by the caller; no retry and
// no caching happen here.

use async_trait::async_trait;
use tracing::debug;

use crate::error::Error;

/// A list request descriptor that carries a continuation token field.
pub trait PageableRequest: Clone {
    /// Overwrite the continuation token for the next page fetch.
    fn set_page_token(&mut self, token: String);
}

/// A single page of list results.
pub trait PageableResponse {
    type Item;

    /// Continuation token for the following page; empty means end-of-results.
    fn next_page_token(&self) -> &str;

    /// The page's items, in the order the remote returned them.
    fn into_items(self) -> Vec<Self::Item>;
}

/// Asynchronous invocation collaborator for follow-up page fetches.
///
/// Implementations are responsible for credentials, serialization, retry and
/// timeouts; a failed call must surface as exactly one `Err`.
#[async_trait]
pub trait AsyncPageFetcher<R, P>: Send + Sync
where
    R: Send + Sync,
{
    async fn fetch_page(&self, request: &R) -> Result<P, Error>;
}

#[async_trait]
impl<R, P, T> AsyncPageFetcher<R, P> for std::sync::Arc<T>
where
    R: Send + Sync,
    T: AsyncPageFetcher<R, P> + ?Sized,
{
    async fn fetch_page(&self, request: &R) -> Result<P, Error> {
        (**self).fetch_page(request).await
    }
}

/// Synchronous pager over an injected fetch function.
///
/// Construction takes the first page (already fetched by the caller), the
/// originating request used as the template for follow-up requests, and the
/// fetch function. Consume with [`Pager::pages`] or [`Pager::items`]; both
/// are single-pass and non-rewindable.
pub struct Pager<R, P, F>
where
    R: PageableRequest,
    P: PageableResponse,
    F: FnMut(&R) -> Result<P, Error>,
{
    request: R,
    first: P,
    fetch: F,
}

impl<R, P, F> Pager<R, P, F>
where
    R: PageableRequest,
    P: PageableResponse,
    F: FnMut(&R) -> Result<P, Error>,
{
    pub fn new(request: R, first: P, fetch: F) -> Self {
        Self {
            request,
            first,
            fetch,
        }
    }

    /// Iterate page by page.
    pub fn pages(self) -> Pages<R, P, F> {
        Pages {
            request: self.request,
            fetch: self.fetch,
            pending_first: Some(self.first),
            next_token: String::new(),
            done: false,
        }
    }

    /// Iterate item by item, fetching the next page when the current one is
    /// exhausted.
    pub fn items(self) -> Items<R, P, F> {
        Items {
            pages: self.pages(),
            current: Vec::new().into_iter(),
        }
    }
}

/// Page-at-a-time iterator produced by [`Pager::pages`].
pub struct Pages<R, P, F>
where
    R: PageableRequest,
    P: PageableResponse,
    F: FnMut(&R) -> Result<P, Error>,
{
    request: R,
    fetch: F,
    pending_first: Option<P>,
    next_token: String,
    done: bool,
}

impl<R, P, F> Iterator for Pages<R, P, F>
where
    R: PageableRequest,
    P: PageableResponse,
    F: FnMut(&R) -> Result<P, Error>,
{
    type Item = Result<P, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(first) = self.pending_first.take() {
            self.next_token = first.next_page_token().to_string();
            if self.next_token.is_empty() {
                self.done = true;
            }
            return Some(Ok(first));
        }

        if self.next_token.is_empty() {
            self.done = true;
            return None;
        }

        let mut request = self.request.clone();
        request.set_page_token(self.next_token.clone());
        debug!("fetching next result page");

        match (self.fetch)(&request) {
            Ok(page) => {
                self.next_token = page.next_page_token().to_string();
                if self.next_token.is_empty() {
                    self.done = true;
                }
                Some(Ok(page))
            }
            Err(err) => {
                // A failed fetch ends the sequence; it is not resumable.
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Item-at-a-time iterator produced by [`Pager::items`].
pub struct Items<R, P, F>
where
    R: PageableRequest,
    P: PageableResponse,
    F: FnMut(&R) -> Result<P, Error>,
{
    pages: Pages<R, P, F>,
    current: std::vec::IntoIter<P::Item>,
}

impl<R, P, F> Iterator for Items<R, P, F>
where
    R: PageableRequest,
    P: PageableResponse,
    F: FnMut(&R) -> Result<P, Error>,
{
    type Item = Result<P::Item, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(Ok(item));
            }
            match self.pages.next() {
                Some(Ok(page)) => self.current = page.into_items().into_iter(),
                Some(Err(err)) => return Some(Err(err)),
                None => return None,
            }
        }
    }
}

/// Asynchronous pager; suspends only at the injected page fetch.
///
/// Single-consumer and non-rewindable, like [`Pager`]. After an error has
/// been returned the pager is exhausted; end-of-results and failure are
/// reported as distinct outcomes (`Ok(None)` vs `Err`).
pub struct AsyncPager<R, P>
where
    R: PageableRequest + Send + Sync,
    P: PageableResponse,
{
    request: R,
    fetcher: Box<dyn AsyncPageFetcher<R, P>>,
    pending_first: Option<P>,
    next_token: String,
    current: std::vec::IntoIter<P::Item>,
    done: bool,
}

impl<R, P> AsyncPager<R, P>
where
    R: PageableRequest + Send + Sync,
    P: PageableResponse,
{
    pub fn new(request: R, first: P, fetcher: Box<dyn AsyncPageFetcher<R, P>>) -> Self {
        Self {
            request,
            fetcher,
            pending_first: Some(first),
            next_token: String::new(),
            current: Vec::new().into_iter(),
            done: false,
        }
    }

    /// Pull the next page, or `Ok(None)` once the sequence is exhausted.
    pub async fn next_page(&mut self) -> Result<Option<P>, Error> {
        if self.done {
            return Ok(None);
        }

        if let Some(first) = self.pending_first.take() {
            self.next_token = first.next_page_token().to_string();
            if self.next_token.is_empty() {
                self.done = true;
            }
            return Ok(Some(first));
        }

        if self.next_token.is_empty() {
            self.done = true;
            return Ok(None);
        }

        let mut request = self.request.clone();
        request.set_page_token(self.next_token.clone());
        debug!("fetching next result page");

        match self.fetcher.fetch_page(&request).await {
            Ok(page) => {
                self.next_token = page.next_page_token().to_string();
                if self.next_token.is_empty() {
                    self.done = true;
                }
                Ok(Some(page))
            }
            Err(err) => {
                self.done = true;
                Err(err)
            }
        }
    }

    /// Pull the next item, fetching the next page when the current one is
    /// exhausted. `Ok(None)` signals a clean end-of-results.
    pub async fn next_item(&mut self) -> Result<Option<P::Item>, Error> {
        loop {
            if let Some(item) = self.current.next() {
                return Ok(Some(item));
            }
            match self.next_page().await? {
                Some(page) => self.current = page.into_items().into_iter(),
                None => return Ok(None),
            }
        }
    }

    /// Drain every remaining item into a vector.
    pub async fn all_items(mut self) -> Result<Vec<P::Item>, Error> {
        let mut items = Vec::new();
        while let Some(item) = self.next_item().await? {
            items.push(item);
        }
        Ok(items)
    }
}
