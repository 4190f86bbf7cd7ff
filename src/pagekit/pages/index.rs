use serde::Deserialize;
use yew::prelude::*;

use crate::components::{Counter, Layout};

#[derive(Properties, PartialEq, Clone, Debug, Default, Deserialize)]
pub struct IndexProps {
    #[prop_or_default]
    #[serde(default)]
    pub time: String,
    #[prop_or_default]
    #[serde(default)]
    pub route: String,
}

/// Landing page showing the route it was served for and the load time.
#[function_component]
pub fn Index(props: &IndexProps) -> Html {
    html! {
        <Layout>
            <div class="flex flex-col gap-4 p-8">
                <Counter />
                <p>{"Time: "}{props.time.clone()}</p>
                <p>{"Route: "}{props.route.clone()}</p>
            </div>
        </Layout>
    }
}
