use serde::Deserialize;
use yew::prelude::*;

use crate::components::Layout;

#[derive(Properties, PartialEq, Clone, Debug, Default, Deserialize)]
pub struct AboutProps {
    #[prop_or_default]
    #[serde(default)]
    pub description: String,
}

#[function_component]
pub fn About(props: &AboutProps) -> Html {
    html! {
        <Layout>
            <div class="flex flex-col gap-4 p-8">
                <h1>{"About"}</h1>
                <p>{props.description.clone()}</p>
                <a href="/">{"Home"}</a>
            </div>
        </Layout>
    }
}
