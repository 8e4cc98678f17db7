use crate::foundation::error::{FolioError, FolioResult};
use std::fmt;

/// Scroll offset past which the navbar switches to its compact look.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Where a link points: a route path, or an element id on the home page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum NavTarget {
    /// Route path such as `/` or `/project/siem-tool`.
    Path(String),
    /// Element id scrolled into view on the home page (`/#id`).
    Anchor(String),
}

impl NavTarget {
    /// Parse an href; `/#id` becomes an anchor, anything else a path.
    pub fn parse(href: &str) -> Self {
        match href.strip_prefix("/#") {
            Some(id) if !id.is_empty() => Self::Anchor(id.to_owned()),
            _ => Self::Path(href.to_owned()),
        }
    }

    /// Case-study route for `id`.
    pub fn project(id: &str) -> Self {
        Self::Path(format!("/project/{id}"))
    }

    /// Href form of this target.
    pub fn href(&self) -> String {
        match self {
            Self::Path(p) => p.clone(),
            Self::Anchor(id) => format!("/#{id}"),
        }
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// View a path resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Single-page home: hero, about, showcase, footer.
    Home,
    /// Case-study page for a project id.
    Project(String),
}

impl Route {
    /// Resolve a pathname. Unknown paths resolve to `None`.
    pub fn resolve(pathname: &str) -> Option<Self> {
        if pathname == "/" || pathname.is_empty() {
            return Some(Self::Home);
        }
        let id = pathname.strip_prefix("/project/")?.trim_end_matches('/');
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Self::Project(id.to_owned()))
    }

    /// Project id carried by the route.
    pub fn project_id(&self) -> Option<&str> {
        match self {
            Self::Project(id) => Some(id.as_str()),
            Self::Home => None,
        }
    }
}

/// Navbar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavItem {
    pub fn target(&self) -> NavTarget {
        NavTarget::parse(self.href)
    }

    /// Highlighted when the pathname equals the href, or the location hash names its anchor.
    pub fn is_active(&self, pathname: &str, hash: &str) -> bool {
        if pathname == self.href {
            return true;
        }
        // An empty hash would otherwise match Home on every page.
        !hash.is_empty() && self.href.strip_prefix('/') == Some(hash)
    }
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        name: "Home",
        href: "/",
    },
    NavItem {
        name: "Projects",
        href: "/#projects",
    },
    NavItem {
        name: "About",
        href: "/#about",
    },
    NavItem {
        name: "Contact",
        href: "/#contact",
    },
];

/// Call-to-action button beside the nav items.
pub const CALL_TO_ACTION: NavItem = NavItem {
    name: "Let's Talk",
    href: "/#contact",
};

/// Items highlighted for the location `(pathname, hash)`.
pub fn active_items(pathname: &str, hash: &str) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| item.is_active(pathname, hash))
        .collect()
}

/// Routing collaborator: receives navigation requests.
pub trait Navigator {
    /// Go to `target`.
    fn navigate(&mut self, target: &NavTarget) -> FolioResult<()>;
}

/// Navigator that records every request, for tests and dry runs.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Vec<NavTarget>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests in arrival order.
    pub fn history(&self) -> &[NavTarget] {
        &self.history
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, target: &NavTarget) -> FolioResult<()> {
        self.history.push(target.clone());
        Ok(())
    }
}

/// Navbar interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    /// Compact look once the page scrolled past [`SCROLLED_THRESHOLD_PX`].
    pub scrolled: bool,
    /// Mobile menu visibility.
    pub menu_open: bool,
}

impl NavbarState {
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD_PX;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Follow the item named `name`, closing the mobile menu.
    pub fn select(&mut self, name: &str, nav: &mut dyn Navigator) -> FolioResult<()> {
        let item = NAV_ITEMS
            .iter()
            .chain(std::iter::once(&CALL_TO_ACTION))
            .find(|i| i.name == name)
            .ok_or_else(|| FolioError::validation(format!("unknown nav item '{name}'")))?;
        self.menu_open = false;
        nav.navigate(&item.target())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/nav.rs"]
mod tests;
