use gloo::utils::document;
use serde_json::Value;
use web_sys::wasm_bindgen::JsValue;

use crate::error::{DomError, PropsError};
use crate::pages::{Page, PageKind};

#[derive(Debug, Clone, PartialEq)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
    pub property: String,
}

impl MetaTag {
    pub fn new(name: &str, content: &str, property: &str) -> Self {
        MetaTag {
            name: name.to_string(),
            content: content.to_string(),
            property: property.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: &str, href: &str) -> Self {
        Link {
            rel: rel.to_string(),
            href: href.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageRoute {
    pub route: String,
    pub kind: PageKind,
    /// Overrides the site title on this page.
    pub title: Option<String>,
    /// Static props, used when the server injected none.
    pub props: Option<Value>,
}

impl PageRoute {
    pub fn new(route: &str, kind: PageKind) -> Self {
        PageRoute {
            route: route.to_string(),
            kind,
            title: None,
            props: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_props(mut self, props: Value) -> Self {
        self.props = Some(props);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteOptions {
    pub title: String,
    pub lang: String,
    pub class: String,
    pub meta_tags: Vec<MetaTag>,
    pub links: Vec<Link>,
    pub pages: Vec<PageRoute>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        SiteOptions {
            title: String::new(),
            lang: "en".to_string(),
            class: String::new(),
            meta_tags: Vec::new(),
            links: Vec::new(),
            pages: Vec::new(),
        }
    }
}

/// A resolved page and the props payloads that were dropped on the way.
#[derive(Debug)]
pub struct Resolution {
    pub page: Page,
    pub dropped: Vec<PropsError>,
}

pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

impl SiteOptions {
    pub fn route(&self, path: &str) -> Option<&PageRoute> {
        let path = normalize_path(path);
        self.pages.iter().find(|p| normalize_path(&p.route) == path)
    }

    /// Injected props win over the route's static props, which win over the loader.
    pub fn resolve(&self, path: &str, injected: Option<&Value>) -> Result<Page, PropsError> {
        let Some(page) = self.route(path) else {
            return Ok(Page::NotFound(path.to_string()));
        };
        Page::load(page.kind, &page.route, injected.or(page.props.as_ref()))
    }

    /// Like `resolve`, but props that do not fit the page are dropped in turn
    /// (injected, then static) until the page's loader is used.
    pub fn resolve_or_load(&self, path: &str, injected: Option<&Value>) -> Resolution {
        let Some(page) = self.route(path) else {
            return Resolution {
                page: Page::NotFound(path.to_string()),
                dropped: Vec::new(),
            };
        };
        let mut dropped = Vec::new();
        for props in [injected, page.props.as_ref()].into_iter().flatten() {
            match Page::load(page.kind, &page.route, Some(props)) {
                Ok(loaded) => return Resolution { page: loaded, dropped },
                Err(err) => dropped.push(err),
            }
        }
        Resolution {
            page: Page::from_loader(page.kind, &page.route),
            dropped,
        }
    }

    pub fn title_for(&self, path: &str) -> &str {
        self.route(path)
            .and_then(|p| p.title.as_deref())
            .unwrap_or(&self.title)
    }

    pub fn apply(&self, path: &str) -> Result<(), DomError> {
        let document = document();
        let title = self.title_for(path);
        if !title.is_empty() {
            document.set_title(title);
        }
        if let Some(root) = document.document_element() {
            root.set_attribute("lang", &self.lang).map_err(dom_error)?;
            if !self.class.is_empty() {
                root.set_attribute("class", &self.class).map_err(dom_error)?;
            }
        }
        let Some(head) = document.head() else {
            return Ok(());
        };
        for tag in &self.meta_tags {
            let meta = document.create_element("meta").map_err(dom_error)?;
            meta.set_attribute("name", &tag.name).map_err(dom_error)?;
            meta.set_attribute("content", &tag.content).map_err(dom_error)?;
            meta.set_attribute("property", &tag.property).map_err(dom_error)?;
            head.append_child(&meta).map_err(dom_error)?;
        }
        for link in &self.links {
            let element = document.create_element("link").map_err(dom_error)?;
            element.set_attribute("rel", &link.rel).map_err(dom_error)?;
            element.set_attribute("href", &link.href).map_err(dom_error)?;
            head.append_child(&element).map_err(dom_error)?;
        }
        Ok(())
    }
}

fn dom_error(err: JsValue) -> DomError {
    DomError(format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::home::HomeProps;
    use serde_json::json;

    fn site() -> SiteOptions {
        SiteOptions {
            title: "Picsel".to_string(),
            pages: vec![
                PageRoute::new("/", PageKind::Home).with_props(json!({"Name": "Picsel", "InitialNumber": 4})),
                PageRoute::new("/about", PageKind::About).with_title("About Picsel"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn normalizes_paths() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/about/"), "/about");
        assert_eq!(normalize_path("/about"), "/about");
    }

    #[test]
    fn default_lang_is_en() {
        assert_eq!(SiteOptions::default().lang, "en");
    }

    #[test]
    fn routes_by_exact_path() {
        let site = site();
        assert_eq!(site.route("/about/").map(|p| p.kind), Some(PageKind::About));
        assert_eq!(site.route("").map(|p| p.kind), Some(PageKind::Home));
        assert!(site.route("/about/team").is_none());
    }

    #[test]
    fn resolves_static_props() {
        let page = site().resolve("/", None).unwrap();
        assert_eq!(page, Page::Home(HomeProps { name: "Picsel".to_string(), initial_number: Some(4) }));
    }

    #[test]
    fn injected_props_win() {
        let injected = json!({"InitialNumber": 11});
        let page = site().resolve("/", Some(&injected)).unwrap();
        assert_eq!(page, Page::Home(HomeProps { name: String::new(), initial_number: Some(11) }));
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(site().resolve("/missing", None).unwrap(), Page::NotFound("/missing".to_string()));
    }

    #[test]
    fn page_title_overrides_site_title() {
        let site = site();
        assert_eq!(site.title_for("/about/"), "About Picsel");
        assert_eq!(site.title_for("/"), "Picsel");
        assert_eq!(site.title_for("/missing"), "Picsel");
    }

    #[test]
    fn links_default_empty() {
        let mut site = SiteOptions::default();
        assert!(site.links.is_empty());
        site.links.push(Link::new("icon", "/public/favicon.ico"));
        assert_eq!(site.links[0], Link { rel: "icon".to_string(), href: "/public/favicon.ico".to_string() });
    }

    #[test]
    fn null_initial_number_keeps_injected_props() {
        let injected = json!({"Name": "x", "InitialNumber": null});
        let page = site().resolve("/", Some(&injected)).unwrap();
        assert_eq!(page, Page::Home(HomeProps { name: "x".to_string(), initial_number: None }));
    }

    #[test]
    fn mismatched_injected_props_fall_back_to_static_props() {
        let injected = json!({"InitialNumber": "seven"});
        let resolution = site().resolve_or_load("/", Some(&injected));
        assert_eq!(resolution.page, Page::Home(HomeProps { name: "Picsel".to_string(), initial_number: Some(4) }));
        assert_eq!(resolution.dropped.len(), 1);
        assert!(matches!(resolution.dropped[0], PropsError::Mismatch { page: "home", .. }));
    }

    #[test]
    fn mismatched_props_fall_back_to_loader() {
        let site = SiteOptions {
            pages: vec![PageRoute::new("/", PageKind::Index).with_props(json!({"time": 3}))],
            ..Default::default()
        };
        let injected = json!({"route": ["/"]});
        let resolution = site.resolve_or_load("/", Some(&injected));
        assert_eq!(resolution.dropped.len(), 2);
        let Page::Index(props) = resolution.page else {
            panic!("expected index page");
        };
        assert_eq!(props.route, "/");
        assert!(!props.time.is_empty());
    }

    #[test]
    fn fitting_props_drop_nothing() {
        let resolution = site().resolve_or_load("/about", None);
        assert!(resolution.dropped.is_empty());
        assert_eq!(resolution.page, Page::About(crate::loader::load_about()));
        let resolution = site().resolve_or_load("/missing", None);
        assert_eq!(resolution.page, Page::NotFound("/missing".to_string()));
    }
}
