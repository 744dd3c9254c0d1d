//! # Paginated users-list state machine
//!
//! [`UserListState`] is the pure state behind the users table: the current
//! page of items, the page cursor, and a tagged [`RequestState`] instead of
//! the conflated loading/error booleans the feature grew up with.
//!
//! Two deliberate limitations are part of the contract:
//!
//! - `has_next_page` is the heuristic `items.len() == page_size`. The server
//!   exposes no total count, so a final page that happens to be exactly full
//!   shows one extra (empty) page. An approximation, not a boundary signal.
//! - List, search, and reload-after-mutation share one in-flight slot. A
//!   request issued while another is pending is neither queued nor cancelled;
//!   whichever response resolves last wins. Documented hazard, kept as-is.
//!
//! Search results replace the items without touching the page cursor — search
//! does not compose with pagination, so a later page navigation refetches the
//! unfiltered list at whatever page the cursor points to.

use store::User;

/// Lifecycle of the single in-flight fetch slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// State of the paginated, searchable users view.
#[derive(Clone, Debug, PartialEq)]
pub struct UserListState {
    pub items: Vec<User>,
    pub current_page: u32,
    pub page_size: u32,
    pub has_next_page: bool,
    pub request: RequestState,
}

impl UserListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            page_size,
            has_next_page: false,
            request: RequestState::Idle,
        }
    }

    /// A page fetch is leaving for `page`.
    pub fn begin(&mut self, page: u32) {
        self.current_page = page;
        self.request = RequestState::Pending;
    }

    /// A search fetch is leaving; the page cursor is untouched.
    pub fn begin_search(&mut self) {
        self.request = RequestState::Pending;
    }

    /// A page of items arrived in server order.
    pub fn apply_page(&mut self, items: Vec<User>) {
        self.has_next_page = items.len() as u32 == self.page_size;
        self.items = items;
        self.request = RequestState::Succeeded;
    }

    /// Search results replace the list; paging state is left alone.
    pub fn apply_search(&mut self, items: Vec<User>) {
        self.items = items;
        self.request = RequestState::Succeeded;
    }

    /// The in-flight fetch failed; items from the last success stay visible.
    pub fn fail(&mut self) {
        self.request = RequestState::Failed;
    }

    /// Advance the cursor. Returns whether the page actually changed — only a
    /// change triggers a refetch.
    pub fn next(&mut self) -> bool {
        if self.has_next_page {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Step the cursor back, never below page 1.
    pub fn previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn is_loading(&self) -> bool {
        self.request == RequestState::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(count: usize) -> Vec<User> {
        (0..count)
            .map(|i| User {
                id: i as i64,
                name: format!("User {i}"),
                username: format!("user{i}"),
                email: format!("user{i}@example.com"),
                telephone: "0123456789".to_string(),
                location: "Lagos".to_string(),
                is_admin: false,
            })
            .collect()
    }

    #[test]
    fn full_page_means_has_next() {
        let mut list = UserListState::new(10);
        list.begin(1);
        list.apply_page(users(10));
        assert!(list.has_next_page);
        assert_eq!(list.request, RequestState::Succeeded);
    }

    #[test]
    fn short_page_means_no_next() {
        let mut list = UserListState::new(10);
        list.begin(1);
        list.apply_page(users(3));
        assert!(!list.has_next_page);
    }

    #[test]
    fn next_is_noop_without_next_page() {
        let mut list = UserListState::new(10);
        list.apply_page(users(3));
        assert!(!list.next());
        assert_eq!(list.current_page, 1);
    }

    #[test]
    fn next_advances_when_page_is_full() {
        let mut list = UserListState::new(10);
        list.apply_page(users(10));
        assert!(list.next());
        assert_eq!(list.current_page, 2);
    }

    #[test]
    fn previous_is_noop_on_first_page() {
        let mut list = UserListState::new(10);
        assert!(!list.previous());
        assert_eq!(list.current_page, 1);
    }

    #[test]
    fn previous_steps_back_from_later_pages() {
        let mut list = UserListState::new(10);
        list.apply_page(users(10));
        list.next();
        assert!(list.previous());
        assert_eq!(list.current_page, 1);
    }

    #[test]
    fn begin_marks_pending_and_moves_cursor() {
        let mut list = UserListState::new(10);
        list.begin(4);
        assert!(list.is_loading());
        assert_eq!(list.current_page, 4);
    }

    #[test]
    fn failure_keeps_last_items_visible() {
        let mut list = UserListState::new(10);
        list.apply_page(users(5));
        list.begin(2);
        list.fail();
        assert_eq!(list.request, RequestState::Failed);
        assert_eq!(list.items.len(), 5);
    }

    #[test]
    fn search_replaces_items_without_touching_the_cursor() {
        let mut list = UserListState::new(10);
        list.apply_page(users(10));
        list.next();
        let page_before = list.current_page;
        let has_next_before = list.has_next_page;

        list.begin_search();
        list.apply_search(users(2));

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.current_page, page_before);
        assert_eq!(list.has_next_page, has_next_before);
    }
}
