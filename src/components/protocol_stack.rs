use yew::prelude::*;

use crate::content::{EKG_PATH, PROTOCOL_TITLES};
use crate::theme::MOSS;

/// Three sticky cards. While a card is held under the next one the sequencer
/// scales, fades and blurs it; the final card is never covered.
#[function_component(ProtocolStack)]
pub fn protocol_stack() -> Html {
    html! {
        <section id="protocols" class="protocol-stack">
            <style>
                {r#"
                    .protocol-stack {
                        display: flex;
                        flex-direction: column;
                        gap: 4rem;
                        width: min(95vw, 1420px);
                        margin: 0 auto;
                        padding: 6rem 0;
                    }
                    .stack-card {
                        position: sticky;
                        top: 3.5rem;
                        display: flex;
                        align-items: center;
                        min-height: 88vh;
                        border-radius: var(--radius-softer);
                        border: 1px solid rgba(46, 64, 54, 0.2);
                        background: #fff;
                        padding: 2.5rem;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }
                    .stack-card.pinned {
                        box-shadow: 0 30px 60px -15px rgba(0, 0, 0, 0.25);
                    }
                    .stack-card .body {
                        margin: 0 auto;
                        width: 100%;
                        max-width: 56rem;
                        text-align: center;
                    }
                    .stack-card h3 {
                        margin: 0 0 2rem;
                        font-size: 1.25rem;
                        font-weight: 600;
                        letter-spacing: 0.12em;
                        color: var(--moss);
                    }
                    .helix {
                        position: relative;
                        width: 16rem;
                        height: 16rem;
                        margin: 0 auto;
                    }
                    .helix-outer, .helix-inner {
                        position: absolute;
                        border-radius: 9999px;
                    }
                    .helix-outer {
                        inset: 0;
                        border: 4px dashed rgba(46, 64, 54, 0.6);
                    }
                    .helix-inner {
                        inset: 2rem;
                        border: 4px solid rgba(204, 88, 51, 0.7);
                    }
                    .cell-grid {
                        position: relative;
                        height: 16rem;
                        margin: 0 auto;
                        overflow: hidden;
                        border-radius: var(--radius-softer);
                        background: rgba(46, 64, 54, 0.1);
                    }
                    .cell-grid .dots {
                        position: absolute;
                        inset: 0;
                        background-image: radial-gradient(#2E4036 1px, transparent 1px);
                        background-size: 22px 22px;
                    }
                    .laser-scan {
                        position: absolute;
                        left: -40%;
                        top: 0;
                        width: 33.333%;
                        height: 100%;
                        background: linear-gradient(to right, transparent, rgba(204, 88, 51, 0.7), transparent);
                    }
                    .ekg {
                        width: 100%;
                        max-width: 48rem;
                        height: 15rem;
                        margin: 0 auto;
                    }
                    @media (min-width: 768px) {
                        .stack-card { padding: 3.5rem; }
                    }
                "#}
            </style>
            <article class="stack-card">
                <div class="body">
                    <h3>{PROTOCOL_TITLES[0]}</h3>
                    <div class="helix">
                        <div class="helix-outer"></div>
                        <div class="helix-inner"></div>
                    </div>
                </div>
            </article>
            <article class="stack-card">
                <div class="body">
                    <h3>{PROTOCOL_TITLES[1]}</h3>
                    <div class="cell-grid">
                        <div class="dots"></div>
                        <div class="laser-scan"></div>
                    </div>
                </div>
            </article>
            <article class="stack-card">
                <div class="body">
                    <h3>{PROTOCOL_TITLES[2]}</h3>
                    <svg class="ekg" viewBox="0 0 360 100">
                        <path
                            class="ekg-line"
                            d={EKG_PATH}
                            fill="none"
                            stroke={MOSS}
                            stroke-width="4"
                            stroke-dasharray="350"
                        />
                    </svg>
                </div>
            </article>
        </section>
    }
}
