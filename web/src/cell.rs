use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct CellProps {
    pub is_lit: bool,
    pub on_activate: Callback<()>,
}

/// Visual class of a cell, the only thing that depends on its state.
pub(crate) const fn cell_class(is_lit: bool) -> &'static str {
    if is_lit { "cell-lit" } else { "cell-unlit" }
}

/// Wraps `on_activate` into an event handler that reports each event exactly once.
pub(crate) fn activation_handler<E: 'static>(on_activate: Callback<()>) -> Callback<E> {
    Callback::from(move |_: E| on_activate.emit(()))
}

#[function_component(CellView)]
pub(crate) fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        is_lit,
        on_activate,
    } = props.clone();

    let class = classes!("cell", cell_class(is_lit));

    log::trace!("render cell (lit: {})", is_lit);
    let onclick = activation_handler::<MouseEvent>(on_activate);

    html! {
        <td {class} {onclick}/>
    }
}
