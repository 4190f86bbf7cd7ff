pub mod app;
pub mod components;
pub mod error;
pub mod loader;
pub mod pages;
pub mod site;

#[cfg(test)]
pub(crate) mod testing {
    use yew::{BaseComponent, ServerRenderer};

    /// Renders a component to static markup, without hydration markers.
    pub async fn render<C>(props: C::Properties) -> String
    where
        C: BaseComponent,
        C::Properties: Send,
    {
        ServerRenderer::<C>::with_props(move || props)
            .hydratable(false)
            .render()
            .await
    }
}
