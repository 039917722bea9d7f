use yew::prelude::*;

use crate::content::{SCHEDULED_DAY, WEEK_DAYS};
use crate::theme::MOSS;

/// Mock weekly scheduler. The cursor and the save button are driven by the
/// page's ambient loops through their `cursor-protocol` and `save-fade` classes.
#[function_component(ProtocolScheduler)]
pub fn protocol_scheduler() -> Html {
    html! {
        <div class="scheduler">
            <style>
                {r#"
                    .scheduler .days {
                        display: grid;
                        grid-template-columns: repeat(7, minmax(0, 1fr));
                        gap: 0.5rem;
                        text-align: center;
                        font-size: 11px;
                    }
                    .scheduler .day {
                        border-radius: 0.75rem;
                        padding: 0.75rem 0.25rem;
                        background: var(--cream);
                        color: rgba(26, 26, 26, 0.8);
                    }
                    .scheduler .day.scheduled {
                        background: var(--clay);
                        color: var(--cream);
                    }
                    .scheduler .track {
                        position: relative;
                        height: 3rem;
                        margin-top: 1.5rem;
                        overflow: hidden;
                        border-radius: var(--radius-soft);
                        background: var(--cream);
                    }
                    .scheduler .cursor-protocol {
                        position: absolute;
                        left: 0.5rem;
                        top: 0.5rem;
                        width: 2rem;
                        height: 2rem;
                    }
                    .scheduler .save-fade {
                        position: absolute;
                        right: 0.75rem;
                        top: 0.625rem;
                        border: none;
                        border-radius: 9999px;
                        background: var(--moss);
                        color: var(--cream);
                        padding: 0.5rem 1rem;
                        font-size: 0.75rem;
                    }
                "#}
            </style>
            <div class="days mono">
                { for WEEK_DAYS.iter().enumerate().map(|(index, day)| html! {
                    <div key={*day} class={classes!("day", (index == SCHEDULED_DAY).then_some("scheduled"))}>
                        {day}
                    </div>
                }) }
            </div>
            <div class="track">
                <svg class="cursor-protocol" viewBox="0 0 24 24">
                    <path fill={MOSS} d="M5 3l14 8-6 2-2 6z" />
                </svg>
                <button class="save-fade">{"SAVE"}</button>
            </div>
        </div>
    }
}
