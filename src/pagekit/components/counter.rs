use std::rc::Rc;

use gloo_console::log;
use yew::prelude::*;

use super::Button;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountState {
    count: i64,
}

impl CountState {
    /// A missing default starts the count at zero.
    pub fn new(default: Option<i64>) -> Self {
        CountState { count: default.unwrap_or(0) }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn increment(self) -> Self {
        CountState { count: self.count.saturating_add(1) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountAction {
    Increment,
}

impl Reducible for CountState {
    type Action = CountAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountAction::Increment => Rc::new(self.increment()),
        }
    }
}

/// Maps any event to an increment dispatched on `dispatch`.
pub fn increment_on<E: 'static>(dispatch: Callback<CountAction>) -> Callback<E> {
    dispatch.reform(|_| CountAction::Increment)
}

#[derive(Properties, PartialEq, Clone, Default)]
pub struct CounterProps {
    #[prop_or_default]
    pub default_num: Option<i64>,
}

#[function_component]
pub fn Counter(props: &CounterProps) -> Html {
    let default_num = props.default_num;
    let counter = use_reducer(move || CountState::new(default_num));
    let dispatch = counter.dispatcher();
    let onclick = increment_on::<MouseEvent>(Callback::from(move |action: CountAction| {
        log!(format!("counter: {:?}", action));
        dispatch.dispatch(action);
    }));

    html! {
        <div>
            <h1>{counter.count()}</h1>
            <Button {onclick}>{"Click me"}</Button>
        </div>
    }
}
