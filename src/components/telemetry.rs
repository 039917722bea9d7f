use yew::prelude::*;

use crate::content::TELEMETRY_MESSAGES;
use crate::hooks::use_rotator;

#[derive(Properties, PartialEq)]
pub struct TelemetryFeedProps {
    pub period_ms: u32,
}

#[function_component(TelemetryFeed)]
pub fn telemetry_feed(props: &TelemetryFeedProps) -> Html {
    let index = use_rotator(TELEMETRY_MESSAGES.len(), props.period_ms);

    html! {
        <div class="telemetry mono">
            <style>
                {r#"
                    .telemetry {
                        border-radius: var(--radius-soft);
                        background: var(--charcoal);
                        color: var(--cream);
                        padding: 1.5rem;
                    }
                    .telemetry .caret {
                        display: inline-block;
                        width: 2px;
                        height: 1.25rem;
                        margin-left: 0.25rem;
                        vertical-align: middle;
                        background: var(--clay);
                    }
                    .telemetry .feed {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-top: 1rem;
                        font-size: 0.75rem;
                        color: rgba(242, 240, 233, 0.7);
                    }
                    .telemetry .dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        border: 2px solid var(--clay);
                    }
                "#}
            </style>
            <span>{TELEMETRY_MESSAGES[index]}</span>
            <span class="caret pulse"></span>
            <div class="feed">
                <span class="dot"></span>
                {"Live Feed"}
            </div>
        </div>
    }
}
