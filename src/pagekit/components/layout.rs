use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
    // Accepted for page metadata, not rendered.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub absolute_navbar: bool,
}

/// Full height, scrollable column that every page renders into.
#[function_component]
pub fn Layout(props: &LayoutProps) -> Html {
    html! {
        <main class="relative flex min-h-screen flex-col overflow-auto">
            { for props.children.iter() }
        </main>
    }
}
