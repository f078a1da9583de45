use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
}

/// Button that leans toward the pointer. The offsets land in the `--mx`
/// and `--my` custom properties; the stylesheet does the actual movement.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();

    let onmousemove = {
        let node = node.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(button) = node.cast::<HtmlElement>() {
                let rect = button.get_bounding_client_rect();
                let x = e.client_x() as f64 - rect.left() - rect.width() / 2.0;
                let y = e.client_y() as f64 - rect.top() - rect.height() / 2.0;
                let style = button.style();
                let _ = style.set_property("--mx", &format!("{}px", x * 0.2));
                let _ = style.set_property("--my", &format!("{}px", y * 0.2));
            }
        })
    };

    let onmouseleave = {
        let node = node.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(button) = node.cast::<HtmlElement>() {
                let style = button.style();
                let _ = style.set_property("--mx", "0px");
                let _ = style.set_property("--my", "0px");
            }
        })
    };

    html! {
        <button
            ref={node}
            class={classes!("btn", props.class.clone())}
            onclick={props.onclick.clone()}
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
        </button>
    }
}
