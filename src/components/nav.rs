use yew::prelude::*;

use crate::components::slide_button::SlideButton;
use crate::content::NAV_LINKS;

/// Floating navigation pill. The `scrolled` class is toggled by the page
/// sequencer once the document has moved past its trigger.
#[function_component(FloatingNav)]
pub fn floating_nav() -> Html {
    html! {
        <nav class="floating-nav">
            <style>
                {r#"
                    .floating-nav {
                        position: fixed;
                        left: 50%;
                        top: 1.5rem;
                        z-index: 50;
                        display: flex;
                        width: min(92vw, 960px);
                        transform: translateX(-50%);
                        align-items: center;
                        justify-content: space-between;
                        border-radius: 9999px;
                        padding: 1rem 1.25rem;
                        color: #fff;
                        transition: all 0.5s;
                    }
                    .floating-nav.scrolled {
                        background: rgba(242, 240, 233, 0.8);
                        color: var(--moss);
                        backdrop-filter: blur(18px);
                        border: 1px solid rgba(46, 64, 54, 0.15);
                        box-shadow: 0 12px 40px rgba(26, 26, 26, 0.08);
                    }
                    .floating-nav .brand {
                        font-size: 0.875rem;
                        font-weight: 600;
                        letter-spacing: 0.2em;
                    }
                    .floating-nav .links {
                        display: none;
                        gap: 1.5rem;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                    }
                    .floating-nav .slide-button {
                        font-size: 0.75rem;
                        border-color: rgba(255, 255, 255, 0.4);
                    }
                    @media (min-width: 768px) {
                        .floating-nav { padding: 1rem 2rem; }
                        .floating-nav .links { display: flex; }
                    }
                "#}
            </style>
            <span class="brand">{"NURA HEALTH"}</span>
            <div class="links">
                { for NAV_LINKS.iter().map(|link| html! {
                    <a href={link.href}>{link.label}</a>
                }) }
            </div>
            <SlideButton>{"진단 시작"}</SlideButton>
        </nav>
    }
}
