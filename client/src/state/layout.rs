//! Layout chrome state and navigation menu.
//!
//! DESIGN
//! ======
//! Navigation entries are static data so the sidebar stays presentational and
//! the active-item rule can be tested without rendering.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

pub const DRAWER_WIDTH: u32 = 260;
pub const BRAND: &str = "DataIdea BRICS";
pub const BRAND_SHORT: &str = "BRICS";

pub const NOTIFICATIONS: [&str; 3] = [
    "New model available: GPT-4o",
    "Usage limit reached for Project A",
    "Weekly report is ready",
];

/// A single navigable menu item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    /// Icon name used in the `nav-icon--*` class.
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEntry {
    Link(NavLink),
    /// Collapsible group of links.
    Group {
        label: &'static str,
        icon: &'static str,
        children: &'static [NavLink],
    },
}

const ANALYTICS_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Prompts",
        path: "/prompts",
        icon: "chat",
    },
    NavLink {
        label: "Models",
        path: "/models",
        icon: "chart",
    },
    NavLink {
        label: "Users",
        path: "/users",
        icon: "people",
    },
];

pub const NAV_MENU: [NavEntry; 5] = [
    NavEntry::Link(NavLink {
        label: "Dashboard",
        path: "/",
        icon: "dashboard",
    }),
    NavEntry::Group {
        label: "Analytics",
        icon: "bar-chart",
        children: &ANALYTICS_LINKS,
    },
    NavEntry::Link(NavLink {
        label: "Models",
        path: "/model-management",
        icon: "model",
    }),
    NavEntry::Link(NavLink {
        label: "Feedback",
        path: "/feedback",
        icon: "feedback",
    }),
    NavEntry::Link(NavLink {
        label: "Settings",
        path: "/settings",
        icon: "settings",
    }),
];

pub const HELP_LINK: NavLink = NavLink {
    label: "Help & Support",
    path: "/help",
    icon: "help",
};

/// Whether the menu item for `path` is highlighted at `current`. The root
/// only matches exactly; everything else matches by prefix.
pub fn is_active(path: &str, current: &str) -> bool {
    if path == "/" {
        current == "/"
    } else {
        current.starts_with(path)
    }
}

/// Open/closed flags for the shell's drawers and menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutState {
    pub sidebar_open: bool,
    pub analytics_open: bool,
    pub notifications_open: bool,
    pub account_open: bool,
}

impl LayoutState {
    /// Initial state; the sidebar starts closed below the `md` breakpoint.
    pub fn new(wide: bool) -> Self {
        Self {
            sidebar_open: wide,
            analytics_open: true,
            notifications_open: false,
            account_open: false,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn toggle_analytics(&mut self) {
        self.analytics_open = !self.analytics_open;
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
        self.account_open = false;
    }

    pub fn toggle_account(&mut self) {
        self.account_open = !self.account_open;
        self.notifications_open = false;
    }

    pub fn close_menus(&mut self) {
        self.notifications_open = false;
        self.account_open = false;
    }

    /// After following a menu link. Narrow layouts close the drawer.
    pub fn navigated(&mut self, wide: bool) {
        if !wide {
            self.sidebar_open = false;
        }
        self.close_menus();
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(true)
    }
}
