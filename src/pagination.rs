//! Page-slicing state shared by the project gallery and the profile lists.
//!
//! [`Pager`] is the pure state machine: two integers, synchronous
//! transitions, clamping so a stale button click can never slice out of
//! range. [`PaginationControls`] renders it once for every caller.

use crate::config::MAX_PAGE_BUTTONS;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

/// `max(1, ceil(total_items / page_size))`; an empty list still has one page.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size).max(1)
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_pages(total_items, self.page_size)
    }

    /// Current page clamped into `[1, total_pages]`. The stored page can be
    /// stale when the item count shrinks under it; slicing always goes
    /// through this.
    fn clamped_page(&self, total_items: usize) -> usize {
        self.page.clamp(1, self.total_pages(total_items))
    }

    pub fn start_index(&self, total_items: usize) -> usize {
        (self.clamped_page(total_items) - 1) * self.page_size
    }

    /// The visible contiguous slice of `items`.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start_index(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// Navigate to `page`. Out-of-range targets are a no-op; returns whether
    /// the transition happened so callers fire their change observer only on
    /// real transitions.
    pub fn set_page(&mut self, page: usize, total_items: usize) -> bool {
        if page < 1 || page > self.total_pages(total_items) {
            return false;
        }
        self.page = page;
        true
    }

    /// Change the page size; always resets to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        debug_assert!(page_size >= 1);
        self.page_size = page_size;
        self.page = 1;
    }

    /// Page numbers to render as buttons: the whole range when it fits,
    /// otherwise a window anchored left, anchored right, or centered on the
    /// current page.
    pub fn buttons(&self, total_items: usize, max_buttons: usize) -> Vec<usize> {
        let total = self.total_pages(total_items);
        let page = self.clamped_page(total_items);
        let half = max_buttons / 2;
        let first = if total <= max_buttons {
            1
        } else if page <= half + 1 {
            1
        } else if page >= total - half {
            total - max_buttons + 1
        } else {
            page - half
        };
        (first..=total).take(max_buttons.min(total)).collect()
    }
}

/// Shared pagination bar: page-size selector, optional "Page x of y" info,
/// previous/next arrows and the windowed page buttons.
///
/// `on_change` is invoked with the new `(page, page_size)` after every real
/// transition; callers use it to reset their highlighted-item index.
#[component]
pub fn PaginationControls<F>(
    pager: RwSignal<Pager>,
    total_items: Signal<usize>,
    page_size_options: &'static [usize],
    on_change: F,
    #[prop(default = true)] show_info: bool,
    #[prop(default = "items")] noun: &'static str,
) -> impl IntoView
where
    F: Fn(usize, usize) + Clone + 'static,
{
    let select_change = {
        let on_change = on_change.clone();
        move |ev: ev::Event| {
            let Ok(size) = event_target_value(&ev).parse::<usize>() else {
                return;
            };
            pager.update(|p| p.set_page_size(size));
            on_change(1, size);
        }
    };
    let goto = {
        let on_change = on_change.clone();
        move |page: usize| {
            let mut moved = false;
            pager.update(|p| moved = p.set_page(page, total_items.get_untracked()));
            if moved {
                on_change(page, pager.get_untracked().page_size());
            }
        }
    };
    let goto_prev = {
        let goto = goto.clone();
        move |_| {
            let page = pager.get_untracked().page();
            if page > 1 {
                goto(page - 1);
            }
        }
    };
    let goto_next = {
        let goto = goto.clone();
        move |_| {
            let p = pager.get_untracked();
            if p.page() < p.total_pages(total_items.get_untracked()) {
                goto(p.page() + 1);
            }
        }
    };

    view! {
        <div class="flex flex-col sm:flex-row items-center justify-between mt-8 pt-6 border-t border-cyan-400/20">
            <div class="flex items-center space-x-2 mb-4 sm:mb-0">
                <span class="text-sm opacity-70">"Show:"</span>
                <select
                    class="bg-white/10 backdrop-blur border border-white/20 rounded-lg px-3 py-1 text-sm focus:outline-none focus:ring-2 focus:ring-cyan-400"
                    on:change=select_change
                >
                    {page_size_options
                        .iter()
                        .map(|option| {
                            let option = *option;
                            view! {
                                <option
                                    value=option
                                    selected=move || pager.get().page_size() == option
                                >
                                    {option}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <span class="text-sm opacity-70">{noun} " per page"</span>
            </div>

            <div class="flex items-center space-x-2">
                {show_info
                    .then(|| {
                        view! {
                            <span class="text-sm opacity-60 mr-4">
                                {move || {
                                    let p = pager.get();
                                    let total = total_items.get();
                                    format!(
                                        "Page {} of {} ({} total {})",
                                        p.page(),
                                        p.total_pages(total),
                                        total,
                                        noun,
                                    )
                                }}
                            </span>
                        }
                    })}
                <button
                    class="p-2 rounded-lg bg-white/10 border border-white/20 disabled:opacity-50 disabled:cursor-not-allowed hover:bg-white/20 transition-all"
                    disabled=move || pager.get().page() == 1
                    on:click=goto_prev
                    aria-label="Previous page"
                >
                    <svg class="w-4 h-4" viewBox="0 0 24 24" fill="none">
                        <path
                            d="M15 19l-7-7 7-7"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        />
                    </svg>
                </button>
                <div class="flex items-center space-x-1">
                    {move || {
                        let p = pager.get();
                        let total = total_items.get();
                        p.buttons(total, MAX_PAGE_BUTTONS)
                            .into_iter()
                            .map(|page| {
                                let goto = goto.clone();
                                let current = page == p.page();
                                view! {
                                    <button
                                        class=move || {
                                            if current {
                                                "px-3 py-1 rounded-lg text-sm bg-gradient-to-r from-cyan-500 to-emerald-500 text-white shadow-lg"
                                            } else {
                                                "px-3 py-1 rounded-lg text-sm bg-white/10 border border-white/20 hover:bg-white/20 transition-all"
                                            }
                                        }
                                        aria-current=current.then_some("page")
                                        on:click=move |_| goto(page)
                                    >
                                        {page}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <button
                    class="p-2 rounded-lg bg-white/10 border border-white/20 disabled:opacity-50 disabled:cursor-not-allowed hover:bg-white/20 transition-all"
                    disabled=move || {
                        let p = pager.get();
                        p.page() >= p.total_pages(total_items.get())
                    }
                    on:click=goto_next
                    aria-label="Next page"
                >
                    <svg class="w-4 h-4" viewBox="0 0 24 24" fill="none">
                        <path
                            d="M9 5l7 7-7 7"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        />
                    </svg>
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up_and_never_hits_zero() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(15, 6), 3);
        assert_eq!(total_pages(1, 12), 1);
    }

    #[test]
    fn visible_slice_is_full_except_last_page() {
        let items: Vec<u32> = (0..7).collect();
        let mut pager = Pager::new(3);
        assert_eq!(pager.visible(&items), &[0, 1, 2]);
        assert!(pager.set_page(2, items.len()));
        assert_eq!(pager.visible(&items), &[3, 4, 5]);
        assert!(pager.set_page(3, items.len()));
        assert_eq!(pager.visible(&items), &[6]);
    }

    #[test]
    fn every_item_appears_exactly_once_across_pages() {
        let items: Vec<u32> = (0..23).collect();
        let mut pager = Pager::new(5);
        let mut seen = Vec::new();
        for page in 1..=pager.total_pages(items.len()) {
            assert!(pager.set_page(page, items.len()));
            seen.extend_from_slice(pager.visible(&items));
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn out_of_range_navigation_is_a_no_op() {
        let mut pager = Pager::new(3);
        assert!(!pager.set_page(0, 7));
        assert!(!pager.set_page(4, 7));
        assert_eq!(pager.page(), 1);
        assert!(pager.set_page(3, 7));
        assert!(!pager.set_page(4, 7));
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn changing_page_size_resets_to_first_page() {
        let mut pager = Pager::new(3);
        assert!(pager.set_page(3, 20));
        pager.set_page_size(9);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.page_size(), 9);
    }

    #[test]
    fn stale_page_clamps_instead_of_panicking() {
        let items: Vec<u32> = (0..20).collect();
        let mut pager = Pager::new(3);
        assert!(pager.set_page(7, items.len()));
        // Item count shrinks under the pager, e.g. after a refetch.
        let fewer = &items[..4];
        assert_eq!(pager.visible(fewer), &[3]);
        assert_eq!(pager.start_index(fewer.len()), 3);
    }

    #[test]
    fn button_window_anchors_left_center_right() {
        let mut pager = Pager::new(1);
        let total_items = 10;
        assert!(pager.set_page(1, total_items));
        assert_eq!(pager.buttons(total_items, 5), vec![1, 2, 3, 4, 5]);
        assert!(pager.set_page(3, total_items));
        assert_eq!(pager.buttons(total_items, 5), vec![1, 2, 3, 4, 5]);
        assert!(pager.set_page(5, total_items));
        assert_eq!(pager.buttons(total_items, 5), vec![3, 4, 5, 6, 7]);
        assert!(pager.set_page(8, total_items));
        assert_eq!(pager.buttons(total_items, 5), vec![6, 7, 8, 9, 10]);
        assert!(pager.set_page(10, total_items));
        assert_eq!(pager.buttons(total_items, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn button_window_shrinks_to_page_count() {
        let pager = Pager::new(4);
        assert_eq!(pager.buttons(12, 5), vec![1, 2, 3]);
        assert_eq!(pager.buttons(0, 5), vec![1]);
    }
}
