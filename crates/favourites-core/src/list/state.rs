//! Item List State Machine
//!
//! Sans-IO bookkeeping for the paginated favourites view. Callers ask the
//! state what to do (`mount`, `request_page`, `begin_add`, ...), perform the
//! request themselves, then hand the result back through an `apply_*`
//! method, which returns the [`Followup`] they must carry out next.
//!
//! Phases: `Idle -> Fetching -> {Loaded, Errored}`, and any user action moves
//! back to `Fetching`. List fetches carry a sequence number; only the
//! response to the most recently issued fetch is applied.

use crate::api::{ApiError, ApiResult};
use crate::domain::{ErrorCode, FavouriteItem, ItemKey, Page, ProductLink, PAGE_SIZE};
use crate::messages;

use super::notice::{Notice, NoticeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Idle,
    Fetching,
    Loaded,
    Errored,
}

/// Permission to fetch one page; required to apply the response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    page: u32,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// 1-based page number
    pub fn page(&self) -> u32 {
        self.page
    }

    /// 0-based index sent on the wire
    pub fn page_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }
}

/// What the caller has to do after applying a result
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Followup {
    None,
    /// Fetch this page and apply the result
    Fetch(FetchTicket),
    /// The session expired; log the user out
    Deauthenticate,
    /// The response was superseded by a newer fetch and was dropped
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemListState {
    current_page: u32,
    items: Vec<FavouriteItem>,
    total_pages: u32,
    phase: ListPhase,
    notice: Option<Notice>,
    latest_seq: u64,
}

impl Default for ItemListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemListState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            items: Vec::new(),
            total_pages: 0,
            phase: ListPhase::Idle,
            notice: None,
            latest_seq: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn items(&self) -> &[FavouriteItem] {
        &self.items
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    // ========================
    // Fetching
    // ========================

    /// First load: always page 1
    pub fn mount(&mut self) -> FetchTicket {
        self.current_page = 1;
        self.begin_fetch()
    }

    /// Reload the current page
    pub fn refresh(&mut self) -> FetchTicket {
        self.begin_fetch()
    }

    /// Switch to `page` (1-based). `None` when nothing changes.
    pub fn request_page(&mut self, page: u32) -> Option<FetchTicket> {
        if page == 0 || page == self.current_page {
            return None;
        }
        self.current_page = page;
        Some(self.begin_fetch())
    }

    fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.phase = ListPhase::Fetching;
        FetchTicket {
            seq: self.latest_seq,
            page: self.current_page,
        }
    }

    /// A stale response never touches the list, but a 401 on it still
    /// ends the session.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: ApiResult<Page>) -> Followup {
        if ticket.seq != self.latest_seq {
            if matches!(result, Err(ApiError::Unauthorized)) {
                return self.fail(ApiError::Unauthorized, messages::FETCH_FAILED);
            }
            log::debug!(
                "dropping stale page {} response (seq {} < {})",
                ticket.page,
                ticket.seq,
                self.latest_seq
            );
            return Followup::Ignored;
        }
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_pages = page.total_pages;
                self.phase = ListPhase::Loaded;
                // A pending success (e.g. the delete that emptied the page) wins
                let confirming = matches!(&self.notice, Some(n) if n.kind == NoticeKind::Success);
                if self.items.is_empty() && !confirming {
                    self.notice = Some(Notice::info(messages::LIST_EMPTY));
                }
                Followup::None
            }
            Err(err) => self.fail(err, messages::FETCH_FAILED),
        }
    }

    // ========================
    // Adding
    // ========================

    /// Validate a pasted link. On failure records a notice and returns `None`;
    /// no request should be made.
    pub fn begin_add(&mut self, raw_link: &str) -> Option<ItemKey> {
        match ProductLink::parse(raw_link) {
            Ok(link) => {
                self.phase = ListPhase::Fetching;
                Some(link.key())
            }
            Err(err) => {
                log::debug!("rejected link {:?}: {}", raw_link, err);
                self.notice = Some(Notice::error(messages::INCORRECT_FORMAT));
                None
            }
        }
    }

    /// Items are listed newest first, so a new favourite only shows up
    /// locally while page 1 is on screen.
    pub fn apply_add(&mut self, result: ApiResult<FavouriteItem>) -> Followup {
        match result {
            Ok(item) => {
                if self.current_page == 1 {
                    let key = item.key();
                    self.items.retain(|i| i.key() != key);
                    self.items.insert(0, item);
                    self.items.truncate(PAGE_SIZE);
                    if self.total_pages == 0 {
                        self.total_pages = 1;
                    }
                }
                self.phase = ListPhase::Loaded;
                self.notice = Some(Notice::success(messages::ADDED));
                Followup::None
            }
            Err(ApiError::Rejected(ErrorCode::ItemAlreadyFavourite)) => {
                self.phase = ListPhase::Errored;
                self.notice = Some(Notice::error(messages::ALREADY_FAVOURITE));
                Followup::None
            }
            Err(err) => self.fail(err, messages::ADD_FAILED),
        }
    }

    // ========================
    // Deleting
    // ========================

    pub fn begin_delete(&mut self) {
        self.phase = ListPhase::Fetching;
    }

    /// On success always re-fetch: totals may have shifted. Stepping back a
    /// page when the last item of a later page was removed.
    pub fn apply_delete(&mut self, key: ItemKey, result: ApiResult<()>) -> Followup {
        match result {
            Ok(()) => {
                let before = self.items.len();
                self.items.retain(|i| i.key() != key);
                let emptied = before > 0 && self.items.is_empty();
                if emptied && self.current_page > 1 {
                    self.current_page -= 1;
                }
                self.notice = Some(Notice::success(messages::REMOVED));
                Followup::Fetch(self.begin_fetch())
            }
            Err(err) => self.fail(err, messages::UNEXPECTED),
        }
    }

    fn fail(&mut self, err: ApiError, rejected_message: &str) -> Followup {
        log::warn!("favourites request failed: {}", err);
        self.phase = ListPhase::Errored;
        match err {
            ApiError::Unauthorized => {
                self.notice = Some(Notice::error(messages::SESSION_EXPIRED));
                Followup::Deauthenticate
            }
            ApiError::Rejected(_) => {
                self.notice = Some(Notice::error(rejected_message));
                Followup::None
            }
            _ => {
                self.notice = Some(Notice::error(messages::UNEXPECTED));
                Followup::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Price;

    fn item(n: u64) -> FavouriteItem {
        FavouriteItem {
            item_id: n,
            shop_id: 100 + n,
            name: format!("Item {}", n),
            price: Price(n as i64 * 100_000),
        }
    }

    fn page(number: u32, ids: &[u64], total_pages: u32) -> Page {
        Page {
            number,
            items: ids.iter().copied().map(item).collect(),
            total_pages,
        }
    }

    fn loaded(number: u32, ids: &[u64], total_pages: u32) -> ItemListState {
        let mut state = ItemListState::new();
        let mut ticket = state.mount();
        if number != 1 {
            ticket = state.request_page(number).unwrap();
        }
        assert_eq!(state.apply_fetch(ticket, Ok(page(number, ids, total_pages))), Followup::None);
        state
    }

    #[test]
    fn test_mount_fetches_first_page() {
        let mut state = ItemListState::new();
        assert_eq!(state.phase(), ListPhase::Idle);
        let ticket = state.mount();
        assert_eq!(ticket.page(), 1);
        assert_eq!(ticket.page_index(), 0);
        assert_eq!(state.phase(), ListPhase::Fetching);

        let _ = state.apply_fetch(ticket, Ok(page(1, &[1, 2, 3], 2)));
        assert_eq!(state.phase(), ListPhase::Loaded);
        assert_eq!(state.items().len(), 3);
        assert_eq!(state.total_pages(), 2);
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_empty_list_notice() {
        let state = loaded(1, &[], 0);
        let notice = state.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.text, messages::LIST_EMPTY);
    }

    #[test]
    fn test_request_same_page_is_noop() {
        let mut state = loaded(1, &[1], 1);
        assert!(state.request_page(1).is_none());
        assert!(state.request_page(0).is_none());
        let ticket = state.request_page(3).unwrap();
        assert_eq!(ticket.page(), 3);
        assert_eq!(ticket.page_index(), 2);
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn test_stale_fetch_ignored() {
        let mut state = loaded(1, &[1, 2, 3, 4, 5], 3);
        let to_two = state.request_page(2).unwrap();
        let to_three = state.request_page(3).unwrap();

        // Page 3 resolves first, then the older page 2 request
        let _ = state.apply_fetch(to_three, Ok(page(3, &[11], 3)));
        assert_eq!(state.apply_fetch(to_two, Ok(page(2, &[6, 7, 8, 9, 10], 3))), Followup::Ignored);

        assert_eq!(state.current_page(), 3);
        assert_eq!(state.items()[0].item_id, 11);
    }

    #[test]
    fn test_stale_unauthorized_still_deauthenticates() {
        let mut state = ItemListState::new();
        let first = state.mount();
        let second = state.refresh();

        let _ = state.apply_fetch(second, Err(ApiError::Transport("offline".into())));
        assert_eq!(state.apply_fetch(first, Err(ApiError::Unauthorized)), Followup::Deauthenticate);
        assert_eq!(state.notice().unwrap().text, messages::SESSION_EXPIRED);
    }

    #[test]
    fn test_stale_failure_ignored() {
        let mut state = loaded(1, &[1, 2], 1);
        let first = state.refresh();
        let second = state.refresh();

        let _ = state.apply_fetch(second, Ok(page(1, &[1, 2], 1)));
        assert_eq!(
            state.apply_fetch(first, Err(ApiError::Transport("offline".into()))),
            Followup::Ignored
        );
        assert_eq!(state.phase(), ListPhase::Loaded);
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_add_on_first_page_splices_head() {
        let mut state = loaded(1, &[1, 2, 3, 4, 5], 2);
        assert!(state.begin_add("https://shopee.sg/Mug-i.361953971.9168461947").is_some());
        let _ = state.apply_add(Ok(item(9)));

        assert_eq!(state.items().len(), PAGE_SIZE);
        assert_eq!(state.items()[0].item_id, 9);
        assert_eq!(state.items()[4].item_id, 4);
        assert_eq!(state.notice().unwrap().kind, NoticeKind::Success);
    }

    #[test]
    fn test_add_into_empty_list() {
        let mut state = loaded(1, &[], 0);
        let _ = state.apply_add(Ok(item(1)));
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_add_on_other_page_leaves_cache() {
        let mut state = loaded(2, &[6, 7], 2);
        let before = state.items().to_vec();
        let _ = state.apply_add(Ok(item(9)));
        assert_eq!(state.items(), before.as_slice());
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_add_rejects_bad_link_without_request() {
        let mut state = loaded(1, &[1], 1);
        assert_eq!(state.begin_add("https://shopee.sg/not-a-product"), None);
        assert_eq!(state.notice().unwrap().text, messages::INCORRECT_FORMAT);
        assert_eq!(state.phase(), ListPhase::Loaded);
    }

    #[test]
    fn test_add_duplicate_message() {
        let mut state = loaded(1, &[1], 1);
        let _ = state.apply_add(Err(ApiError::Rejected(ErrorCode::ItemAlreadyFavourite)));
        assert_eq!(state.notice().unwrap().text, messages::ALREADY_FAVOURITE);
        assert_eq!(state.items().len(), 1);

        let _ = state.apply_add(Err(ApiError::Rejected(ErrorCode::Other(350032))));
        assert_eq!(state.notice().unwrap().text, messages::ADD_FAILED);
    }

    #[test]
    fn test_delete_refetches_current_page() {
        let mut state = loaded(1, &[1, 2], 1);
        state.begin_delete();
        let followup = state.apply_delete(item(1).key(), Ok(()));
        match followup {
            Followup::Fetch(ticket) => assert_eq!(ticket.page(), 1),
            other => panic!("expected fetch, got {:?}", other),
        }
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].item_id, 2);
    }

    #[test]
    fn test_delete_last_item_steps_back() {
        let mut state = loaded(3, &[11], 3);
        let followup = state.apply_delete(item(11).key(), Ok(()));
        assert_eq!(state.current_page(), 2);
        match followup {
            Followup::Fetch(ticket) => assert_eq!(ticket.page_index(), 1),
            other => panic!("expected fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_last_item_on_first_page_stays() {
        let mut state = loaded(1, &[1], 1);
        let followup = state.apply_delete(item(1).key(), Ok(()));
        assert_eq!(state.current_page(), 1);
        assert!(matches!(followup, Followup::Fetch(t) if t.page() == 1));
    }

    #[test]
    fn test_delete_emptying_list_keeps_removed_notice() {
        let mut state = loaded(1, &[1], 1);
        state.begin_delete();
        let Followup::Fetch(ticket) = state.apply_delete(item(1).key(), Ok(())) else {
            panic!("expected fetch");
        };
        let _ = state.apply_fetch(ticket, Ok(page(1, &[], 0)));

        let notice = state.take_notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, messages::REMOVED);
    }

    #[test]
    fn test_delete_failure_is_handled() {
        let mut state = loaded(1, &[1], 1);
        let followup = state.apply_delete(ItemKey::new(42, 42), Err(ApiError::Rejected(ErrorCode::Other(350015))));
        assert_eq!(followup, Followup::None);
        assert_eq!(state.phase(), ListPhase::Errored);
        assert_eq!(state.notice().unwrap().text, messages::UNEXPECTED);
        assert_eq!(state.items().len(), 1);
    }

    #[test]
    fn test_unauthorized_always_deauthenticates() {
        let mut state = ItemListState::new();
        let ticket = state.mount();
        assert_eq!(state.apply_fetch(ticket, Err(ApiError::Unauthorized)), Followup::Deauthenticate);
        assert_eq!(state.apply_add(Err(ApiError::Unauthorized)), Followup::Deauthenticate);
        assert_eq!(state.apply_delete(ItemKey::new(1, 1), Err(ApiError::Unauthorized)), Followup::Deauthenticate);
        assert_eq!(state.notice().unwrap().text, messages::SESSION_EXPIRED);
    }

    #[test]
    fn test_errored_is_not_terminal() {
        let mut state = ItemListState::new();
        let ticket = state.mount();
        let _ = state.apply_fetch(ticket, Err(ApiError::Transport("offline".into())));
        assert_eq!(state.phase(), ListPhase::Errored);
        assert_eq!(state.take_notice().unwrap().text, messages::UNEXPECTED);
        assert!(state.notice().is_none());

        let ticket = state.refresh();
        let _ = state.apply_fetch(ticket, Ok(page(1, &[1], 1)));
        assert_eq!(state.phase(), ListPhase::Loaded);
    }
}
