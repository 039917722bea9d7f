use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SlideButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Pill button with a clay fill that slides up on hover.
#[function_component(SlideButton)]
pub fn slide_button(props: &SlideButtonProps) -> Html {
    html! {
        <button class={classes!("slide-button", props.class.clone())}>
            <style>
                {r#"
                    .slide-button {
                        position: relative;
                        overflow: hidden;
                        border-radius: var(--radius-soft);
                        border: 1px solid currentColor;
                        background: transparent;
                        color: inherit;
                        padding: 0.75rem 1.5rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        letter-spacing: 0.08em;
                        cursor: pointer;
                        transition: transform 0.5s;
                    }
                    .slide-button:hover {
                        transform: scale(1.03);
                    }
                    .slide-button .slide-fill {
                        position: absolute;
                        inset: 0;
                        transform: translateY(100%);
                        background: var(--clay);
                        transition: transform 0.5s;
                    }
                    .slide-button:hover .slide-fill {
                        transform: translateY(0);
                    }
                    .slide-button .slide-label {
                        position: relative;
                        z-index: 10;
                    }
                "#}
            </style>
            <span class="slide-fill"></span>
            <span class="slide-label">{ for props.children.iter() }</span>
        </button>
    }
}
