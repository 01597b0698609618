//! Static route table.
//!
//! Every path maps to exactly one [`Page`]. Sections that have no page yet
//! (services, projects, blogs, testimonials) and unknown paths all resolve to
//! the 404 page; there is no separate "coming soon" placeholder.

/// A known path, or `Unknown` for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/contact`: home scrolled to the contact form.
    Contact,
    /// `/about`
    About,
    /// `/services`
    Services,
    /// `/projects`
    Projects,
    /// `/blogs`
    Blogs,
    /// `/testimonials`
    Testimonials,
    /// Any other path.
    Unknown,
}

/// What gets rendered for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Home page.
    Home {
        /// Jump to the contact section after mount.
        scroll_to_contact: bool,
    },
    /// About page.
    About,
    /// 404 page.
    NotFound,
}

impl Route {
    /// Every named route, excluding `Unknown`.
    pub const KNOWN: [Route; 7] = [
        Route::Home,
        Route::Contact,
        Route::About,
        Route::Services,
        Route::Projects,
        Route::Blogs,
        Route::Testimonials,
    ];

    /// Resolve a location pathname.
    ///
    /// A single trailing slash is ignored so `/about/` matches `/about`.
    pub fn from_path(path: &str) -> Self {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        Self::KNOWN
            .into_iter()
            .find(|route| route.path() == trimmed)
            .unwrap_or(Route::Unknown)
    }

    /// Canonical path. `Unknown` has no path of its own and reports `/404`.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Contact => "/contact",
            Route::About => "/about",
            Route::Services => "/services",
            Route::Projects => "/projects",
            Route::Blogs => "/blogs",
            Route::Testimonials => "/testimonials",
            Route::Unknown => "/404",
        }
    }

    /// Page rendered for this route.
    pub fn page(self) -> Page {
        match self {
            Route::Home => Page::Home {
                scroll_to_contact: false,
            },
            Route::Contact => Page::Home {
                scroll_to_contact: true,
            },
            Route::About => Page::About,
            Route::Services
            | Route::Projects
            | Route::Blogs
            | Route::Testimonials
            | Route::Unknown => Page::NotFound,
        }
    }

    /// The footer is omitted on the 404 page.
    pub fn shows_footer(self) -> bool {
        self.page() != Page::NotFound
    }
}

/// A link in the header or footer navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Link text.
    pub label: &'static str,
    /// Link target.
    pub route: Route,
}

/// Links left of the logo (after the home icon).
pub const NAV_LEFT: [NavItem; 2] = [
    NavItem {
        label: "Services",
        route: Route::Services,
    },
    NavItem {
        label: "About",
        route: Route::About,
    },
];

/// Links right of the logo.
pub const NAV_RIGHT: [NavItem; 3] = [
    NavItem {
        label: "Projects",
        route: Route::Projects,
    },
    NavItem {
        label: "Blogs",
        route: Route::Blogs,
    },
    NavItem {
        label: "Testimonials",
        route: Route::Testimonials,
    },
];

/// Full list used by the mobile menu and footer.
pub fn mobile_nav() -> impl Iterator<Item = NavItem> {
    std::iter::once(NavItem {
        label: "Home",
        route: Route::Home,
    })
    .chain(NAV_LEFT)
    .chain(NAV_RIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve_to_their_route() {
        for route in Route::KNOWN {
            assert_eq!(
                Route::from_path(route.path()),
                route,
                "path {} should resolve back to {:?}",
                route.path(),
                route
            );
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::from_path("/about/"), Route::About);
        assert_eq!(Route::from_path("/"), Route::Home);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::from_path("/nope"), Route::Unknown);
        assert_eq!(Route::from_path("/about/team"), Route::Unknown);
        assert_eq!(Route::from_path(""), Route::Unknown);
        assert_eq!(Route::Unknown.page(), Page::NotFound);
    }

    #[test]
    fn unbuilt_sections_render_not_found_uniformly() {
        for route in [
            Route::Services,
            Route::Projects,
            Route::Blogs,
            Route::Testimonials,
        ] {
            assert_eq!(route.page(), Page::NotFound, "{:?}", route);
            assert!(!route.shows_footer(), "{:?} should hide footer", route);
        }
    }

    #[test]
    fn contact_renders_home_scrolled_to_form() {
        assert_eq!(
            Route::Contact.page(),
            Page::Home {
                scroll_to_contact: true
            }
        );
        assert!(Route::Contact.shows_footer());
    }

    #[test]
    fn mobile_nav_lists_home_first_then_desktop_order() {
        let labels: Vec<_> = mobile_nav().map(|item| item.label).collect();
        assert_eq!(
            labels,
            vec!["Home", "Services", "About", "Projects", "Blogs", "Testimonials"]
        );
    }
}
