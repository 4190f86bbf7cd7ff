use serde::Deserialize;
use yew::prelude::*;

use crate::components::{Counter, Layout};

#[derive(Properties, PartialEq, Clone, Debug, Default, Deserialize)]
pub struct HomeProps {
    // Carried with the page props but not rendered.
    #[prop_or_default]
    #[serde(rename = "Name", default)]
    pub name: String,
    #[prop_or_default]
    #[serde(rename = "InitialNumber", default)]
    pub initial_number: Option<i64>,
}

#[function_component]
pub fn Home(props: &HomeProps) -> Html {
    html! {
        <Layout>
            <div class="bg-green-500">
                <Counter default_num={props.initial_number} />

                <a href="/about">{"About"}</a>
            </div>
        </Layout>
    }
}
