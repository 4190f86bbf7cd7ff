use yew::prelude::*;

const BUTTON_CLASSES: &str = "inline-flex items-center justify-center rounded-md bg-primary px-4 py-2 text-sm font-medium text-primary-foreground hover:bg-primary/90";

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Button(props: &ButtonProps) -> Html {
    let class = classes!(BUTTON_CLASSES, props.class.clone());
    html! {
        <button type="button" {class} onclick={props.onclick.clone()}>
            { for props.children.iter() }
        </button>
    }
}
