//! Page and profile sub-view state machine.
//!
//! Exactly one page is visible, and on the profile page exactly one
//! sub-view. Title, back-button visibility and the highlighted nav entry
//! are all derived here so the draw layer never decides them.

use crate::state::TuiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Diary,
    QuickAdd,
    Log,
    Scan,
    Plan,
    Profile,
    FoodDetail,
}

impl Page {
    /// Pages reachable from the nav bar, in bar order.
    pub const NAV_BAR: [Page; 6] = [
        Page::Diary,
        Page::QuickAdd,
        Page::Log,
        Page::Scan,
        Page::Plan,
        Page::Profile,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Diary => "Today",
            Page::QuickAdd => "Quick Add",
            Page::Log => "Log",
            Page::Scan => "Scan",
            Page::Plan => "Plan",
            Page::Profile => "Profile",
            Page::FoodDetail => "Food Detail",
        }
    }

    /// Short label for the nav bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Diary => "Diary",
            Page::QuickAdd => "Add",
            Page::Log => "Log",
            Page::Scan => "Scan",
            Page::Plan => "Plan",
            Page::Profile => "Profile",
            Page::FoodDetail => "Food",
        }
    }

    /// Nav bar page for a 1-based slot number.
    pub fn from_nav_slot(slot: usize) -> Option<Page> {
        slot.checked_sub(1)
            .and_then(|i| Self::NAV_BAR.get(i))
            .copied()
    }

    fn shows_back(self) -> bool {
        matches!(self, Page::QuickAdd | Page::Log | Page::FoodDetail)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileView {
    #[default]
    Main,
    UpdateGoals,
    UpdateInfo,
}

impl ProfileView {
    pub fn title(self) -> &'static str {
        match self {
            ProfileView::Main => "Profile",
            ProfileView::UpdateGoals => "Update Goals",
            ProfileView::UpdateInfo => "Update Info",
        }
    }
}

/// Current page, profile sub-view and the derived header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    page: Page,
    profile_view: ProfileView,
    title: &'static str,
    back_visible: bool,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            page: Page::Diary,
            profile_view: ProfileView::Main,
            title: Page::Diary.title(),
            back_visible: false,
        }
    }
}

impl Navigation {
    pub fn page(&self) -> Page {
        self.page
    }

    pub fn profile_view(&self) -> ProfileView {
        self.profile_view
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn back_visible(&self) -> bool {
        self.back_visible
    }

    /// Whether `page`'s nav entry is highlighted.
    pub fn is_active(&self, page: Page) -> bool {
        self.page == page
    }
}

/// Where back leads from the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackTarget {
    ProfileMain,
    /// Leave an edit in progress: drop the selected log entry, then diary.
    DiaryClearingSelection,
    QuickAdd,
    Diary,
}

/// Resolves the back target. The checks run in a fixed order.
pub fn resolve_back_target(nav: &Navigation, selected_log: Option<i64>) -> Option<BackTarget> {
    if nav.page == Page::Profile && nav.profile_view != ProfileView::Main {
        return Some(BackTarget::ProfileMain);
    }
    if nav.page == Page::FoodDetail {
        return Some(if selected_log.is_some() {
            BackTarget::DiaryClearingSelection
        } else {
            BackTarget::QuickAdd
        });
    }
    if matches!(nav.page, Page::QuickAdd | Page::Log) {
        return Some(BackTarget::Diary);
    }
    None
}

/// Shows `page` and updates everything derived from it.
pub fn go_to_page(tui: &mut TuiState, page: Page) {
    tracing::debug!(from = ?tui.nav.page, to = ?page, "navigate");

    if tui.nav.page == Page::FoodDetail && page != Page::FoodDetail {
        tui.selection.log_id = None;
    }
    // A food still loading for an edit would reopen the editor uninvited.
    if tui.nav.page == Page::Log && page != Page::Log {
        tui.tasks.food_load.clear();
    }

    tui.nav.page = page;
    tui.nav.title = page.title();
    tui.nav.back_visible = page.shows_back();

    match page {
        Page::Profile => go_to_profile_view(tui, ProfileView::Main),
        Page::Log => tui.refresh_log_page(),
        _ => {}
    }
}

/// Shows a profile sub-view. Only meaningful while the profile page is visible.
pub fn go_to_profile_view(tui: &mut TuiState, view: ProfileView) {
    tracing::debug!(?view, "profile view");
    tui.nav.profile_view = view;
    tui.nav.title = view.title();
    tui.nav.back_visible = view != ProfileView::Main;
}

/// Applies the back target, if any. Returns whether anything changed.
pub fn go_back(tui: &mut TuiState) -> bool {
    let Some(target) = resolve_back_target(&tui.nav, tui.selection.log_id) else {
        return false;
    };
    match target {
        BackTarget::ProfileMain => go_to_profile_view(tui, ProfileView::Main),
        BackTarget::DiaryClearingSelection => {
            tui.selection.log_id = None;
            go_to_page(tui, Page::Diary);
        }
        BackTarget::QuickAdd => go_to_page(tui, Page::QuickAdd),
        BackTarget::Diary => go_to_page(tui, Page::Diary),
    }
    true
}
