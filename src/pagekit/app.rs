use gloo::utils::window;
use gloo_console::{error, log};
use yew::prelude::*;

use crate::loader;
use crate::pages::{Page, PageView};
use crate::site::SiteOptions;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub site: SiteOptions,
}

pub fn current_path() -> String {
    window().location().pathname().unwrap_or_else(|_| "/".to_string())
}

fn current_page(site: &SiteOptions) -> Page {
    let path = current_path();
    let injected = loader::injected_props().unwrap_or_else(|err| {
        error!(format!("ignoring page props: {err}"));
        None
    });

    let resolution = site.resolve_or_load(&path, injected.as_ref());
    for err in &resolution.dropped {
        error!(format!("{err}, falling back"));
    }
    resolution.page
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    let page = use_memo(props.site.clone(), |site| {
        let page = current_page(site);
        log!(format!("rendering {:?}", page));
        page
    });

    html! {
        <PageView page={(*page).clone()} />
    }
}
