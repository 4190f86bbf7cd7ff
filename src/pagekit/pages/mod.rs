use serde::de::DeserializeOwned;
use serde_json::Value;
use yew::prelude::*;

use crate::components::Layout;
use crate::error::{PropsError, Result};
use crate::loader;

pub mod about;
pub mod home;
pub mod index;

use about::{About, AboutProps};
use home::{Home, HomeProps};
use index::{Index, IndexProps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Index,
    About,
}

impl PageKind {
    pub fn name(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Index => "index",
            PageKind::About => "about",
        }
    }
}

/// A page together with the properties it renders with.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home(HomeProps),
    Index(IndexProps),
    About(AboutProps),
    NotFound(String),
}

impl Page {
    /// Builds the page from `props` when given, otherwise from the page's loader.
    pub fn load(kind: PageKind, route: &str, props: Option<&Value>) -> Result<Page> {
        let Some(value) = props else {
            return Ok(Page::from_loader(kind, route));
        };
        let page = match kind {
            PageKind::Home => Page::Home(from_value(kind, value)?),
            PageKind::Index => Page::Index(from_value(kind, value)?),
            PageKind::About => Page::About(from_value(kind, value)?),
        };
        Ok(page)
    }

    pub fn from_loader(kind: PageKind, route: &str) -> Page {
        match kind {
            PageKind::Home => Page::Home(loader::load_home()),
            PageKind::Index => Page::Index(loader::load_index(route)),
            PageKind::About => Page::About(loader::load_about()),
        }
    }
}

fn from_value<T: DeserializeOwned>(kind: PageKind, value: &Value) -> Result<T> {
    serde_json::from_value(value.clone()).map_err(|source| PropsError::Mismatch {
        page: kind.name(),
        source,
    })
}

#[derive(Properties, PartialEq)]
pub struct PageViewProps {
    pub page: Page,
}

#[function_component]
pub fn PageView(props: &PageViewProps) -> Html {
    match &props.page {
        Page::Home(p) => html! { <Home ..p.clone() /> },
        Page::Index(p) => html! { <Index ..p.clone() /> },
        Page::About(p) => html! { <About ..p.clone() /> },
        Page::NotFound(path) => html! {
            <Layout>
                <div class="flex flex-col gap-4 p-8">
                    <h1>{"Not found"}</h1>
                    <p>{format!("No page at {path}")}</p>
                    <a href="/">{"Home"}</a>
                </div>
            </Layout>
        },
    }
}
