use std::collections::HashMap;

use serde::Serialize;

use super::guard::is_public_path;

/// Screens the client can show.
///
/// Stands in for the view component a route loads; resolving a route yields
/// its view, and the presentation layer decides how to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    Splash,
    Welcome,
    Login,
    Register,
    RegisterFinance,
    Terms,
    ResetPassword,
    Home,
    Assets,
    Bot,
    Search,
    Favorites,
    AssetDetail,
    CompanyDetail,
    Trading,
    Transactions,
    News,
    NewsDetail,
    Transfer,
    Profile,
    Settings,
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    /// Path pattern; `:name` segments capture a parameter
    pub pattern: &'static str,
    pub name: &'static str,
    pub view: View,
    /// Main tabs show the bottom navigation bar
    pub show_bottom_nav: bool,
}

impl RouteDescriptor {
    const fn new(pattern: &'static str, name: &'static str, view: View) -> Self {
        Self {
            pattern,
            name,
            view,
            show_bottom_nav: false,
        }
    }

    const fn with_bottom_nav(self) -> Self {
        Self {
            show_bottom_nav: true,
            ..self
        }
    }

    /// Routes outside the public allow-list need a session.
    pub fn requires_auth(&self) -> bool {
        !is_public_path(self.pattern)
    }

    /// Match a concrete path against this route's pattern, returning the
    /// captured parameters on success.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let mut pattern_segments = self.pattern.split('/');
        let mut path_segments = path.split('/');
        let mut params = HashMap::new();

        loop {
            match (pattern_segments.next(), path_segments.next()) {
                (None, None) => return Some(params),
                (Some(pat), Some(seg)) => {
                    if let Some(name) = pat.strip_prefix(':') {
                        if seg.is_empty() {
                            return None;
                        }
                        params.insert(name.to_string(), seg.to_string());
                    } else if pat != seg {
                        return None;
                    }
                }
                _ => return None,
            }
        }
    }
}

/// The client's fixed route table
pub const ROUTES: &[RouteDescriptor] = &[
    // Auth routes
    RouteDescriptor::new("/", "splash", View::Splash),
    RouteDescriptor::new("/welcome", "welcome", View::Welcome),
    RouteDescriptor::new("/login", "login", View::Login),
    RouteDescriptor::new("/register", "register", View::Register),
    RouteDescriptor::new("/register/finance", "register-finance", View::RegisterFinance),
    RouteDescriptor::new("/terms", "terms", View::Terms),
    RouteDescriptor::new("/reset-password", "reset-password", View::ResetPassword),
    // Main routes
    RouteDescriptor::new("/home", "home", View::Home).with_bottom_nav(),
    RouteDescriptor::new("/assets", "assets", View::Assets).with_bottom_nav(),
    RouteDescriptor::new("/bot", "bot", View::Bot).with_bottom_nav(),
    RouteDescriptor::new("/search", "search", View::Search).with_bottom_nav(),
    RouteDescriptor::new("/favorites", "favorites", View::Favorites).with_bottom_nav(),
    // Detail routes
    RouteDescriptor::new("/assets/detail", "assets-detail", View::AssetDetail),
    RouteDescriptor::new("/company/:symbol", "company-detail", View::CompanyDetail),
    RouteDescriptor::new("/trading/:symbol", "trading", View::Trading),
    RouteDescriptor::new("/transactions", "transactions", View::Transactions).with_bottom_nav(),
    RouteDescriptor::new("/news", "news", View::News),
    RouteDescriptor::new("/news/:id", "news-detail", View::NewsDetail),
    RouteDescriptor::new("/transfer", "transfer", View::Transfer),
    // Settings routes
    RouteDescriptor::new("/profile", "profile", View::Profile).with_bottom_nav(),
    RouteDescriptor::new("/settings", "settings", View::Settings),
];

/// A route resolved for a concrete path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: &'static RouteDescriptor,
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Lookup over a set of route descriptors.
///
/// Routes are tried in declaration order; the first match wins.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [RouteDescriptor],
}

impl RouteTable {
    pub const fn new(routes: &'static [RouteDescriptor]) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &'static [RouteDescriptor] {
        self.routes
    }

    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.routes.iter().find_map(|route| {
            route.matches(path).map(|params| RouteMatch { route, params })
        })
    }

    pub fn by_name(&self, name: &str) -> Option<&'static RouteDescriptor> {
        self.routes.iter().find(|r| r.name == name)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(ROUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_static_routes() {
        let table = RouteTable::default();
        assert_eq!(table.resolve("/").unwrap().route.view, View::Splash);
        assert_eq!(table.resolve("/home").unwrap().route.view, View::Home);
        assert_eq!(table.resolve("/assets").unwrap().route.view, View::Assets);
        assert_eq!(table.resolve("/assets/detail").unwrap().route.view, View::AssetDetail);
        assert_eq!(table.resolve("/register/finance").unwrap().route.name, "register-finance");
    }

    #[test]
    fn test_resolve_extracts_params() {
        let table = RouteTable::default();

        let company = table.resolve("/company/AMZN").unwrap();
        assert_eq!(company.route.name, "company-detail");
        assert_eq!(company.param("symbol"), Some("AMZN"));

        let news = table.resolve("/news/42").unwrap();
        assert_eq!(news.route.view, View::NewsDetail);
        assert_eq!(news.param("id"), Some("42"));

        // Static /news is not swallowed by /news/:id
        let list = table.resolve("/news").unwrap();
        assert_eq!(list.route.view, View::News);
        assert!(list.params.is_empty());
    }

    #[test]
    fn test_resolve_unknown_paths() {
        let table = RouteTable::default();
        assert!(table.resolve("/nope").is_none());
        assert!(table.resolve("/company").is_none());
        assert!(table.resolve("/company/").is_none());
        assert!(table.resolve("/company/AMZN/extra").is_none());
        assert!(table.resolve("").is_none());
    }

    #[test]
    fn test_requires_auth_follows_allow_list() {
        let table = RouteTable::default();
        let public: Vec<_> = table
            .routes()
            .iter()
            .filter(|r| !r.requires_auth())
            .map(|r| r.name)
            .collect();
        assert_eq!(
            public,
            vec!["splash", "welcome", "login", "register", "register-finance", "terms", "reset-password"]
        );
        assert!(table.by_name("trading").unwrap().requires_auth());
    }

    #[test]
    fn test_bottom_nav_routes() {
        let table = RouteTable::default();
        let tabs: Vec<_> = table
            .routes()
            .iter()
            .filter(|r| r.show_bottom_nav)
            .map(|r| r.name)
            .collect();
        assert_eq!(
            tabs,
            vec!["home", "assets", "bot", "search", "favorites", "transactions", "profile"]
        );
    }

    #[test]
    fn test_route_names_are_unique() {
        let table = RouteTable::default();
        for route in table.routes() {
            assert_eq!(table.by_name(route.name).unwrap().pattern, route.pattern);
        }
    }
}
