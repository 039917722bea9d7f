use yew::prelude::*;

use crate::components::slide_button::SlideButton;
use crate::content::{Tier, MEMBERSHIP_TIERS};

#[derive(Properties, PartialEq)]
struct TierCardProps {
    tier: Tier,
}

#[function_component(TierCard)]
fn tier_card(props: &TierCardProps) -> Html {
    let tier = props.tier;
    html! {
        <article class={classes!("tier", tier.featured.then_some("featured"))}>
            <h3>{tier.name}</h3>
            <p class="price mono">{tier.price}</p>
            <p class="blurb">{tier.blurb}</p>
            <SlideButton class={classes!("join")}>{"Join Protocol"}</SlideButton>
        </article>
    }
}

#[function_component(Membership)]
pub fn membership() -> Html {
    html! {
        <section id="membership" class="membership">
            <style>
                {r#"
                    .membership {
                        display: grid;
                        gap: 1.5rem;
                        width: min(92vw, 1240px);
                        margin: 0 auto;
                        padding: 5rem 0;
                    }
                    .membership .tier {
                        border-radius: var(--radius-softer);
                        border: 1px solid rgba(46, 64, 54, 0.2);
                        background: #fff;
                        color: var(--charcoal);
                        padding: 2rem;
                    }
                    .membership .tier.featured {
                        border-color: var(--moss);
                        background: var(--moss);
                        color: var(--cream);
                    }
                    .membership h3 {
                        margin: 0;
                        font-size: 1.5rem;
                        font-weight: 600;
                    }
                    .membership .price {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                    }
                    .membership .blurb {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        opacity: 0.8;
                    }
                    .membership .join {
                        width: 100%;
                        margin-top: 2rem;
                        border-color: rgba(46, 64, 54, 0.3);
                        color: var(--moss);
                    }
                    .membership .featured .join {
                        border-color: var(--clay);
                        color: var(--cream);
                    }
                    @media (min-width: 768px) {
                        .membership { grid-template-columns: repeat(3, minmax(0, 1fr)); }
                    }
                "#}
            </style>
            { for MEMBERSHIP_TIERS.iter().map(|tier| html! {
                <TierCard key={tier.name} tier={*tier} />
            }) }
        </section>
    }
}
