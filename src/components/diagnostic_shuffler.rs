use yew::prelude::*;

use crate::content::DIAGNOSTIC_CARDS;
use crate::hooks::use_rotator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Active,
    Next,
    Previous,
}

impl Slot {
    /// Where card `index` sits when `active` is in front.
    pub fn of(index: usize, active: usize, len: usize) -> Slot {
        match (index + len - active % len) % len {
            0 => Slot::Active,
            1 => Slot::Next,
            _ => Slot::Previous,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Slot::Active => "slot-active",
            Slot::Next => "slot-next",
            Slot::Previous => "slot-previous",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DiagnosticShufflerProps {
    pub period_ms: u32,
}

#[function_component(DiagnosticShuffler)]
pub fn diagnostic_shuffler(props: &DiagnosticShufflerProps) -> Html {
    let active = use_rotator(DIAGNOSTIC_CARDS.len(), props.period_ms);

    html! {
        <div class="shuffler">
            <style>
                {r#"
                    .shuffler {
                        position: relative;
                        height: 13rem;
                        overflow: hidden;
                        border-radius: var(--radius-soft);
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: rgba(255, 255, 255, 0.05);
                        padding: 1rem;
                    }
                    .shuffler .card {
                        position: absolute;
                        left: 1rem;
                        right: 1rem;
                        top: 4.75rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.1);
                        padding: 1rem 1.25rem;
                        font-weight: 600;
                        transition: all 0.7s;
                    }
                    .shuffler .slot-active { transform: translateY(0); opacity: 1; }
                    .shuffler .slot-next { transform: translateY(72px); opacity: 0.45; }
                    .shuffler .slot-previous { transform: translateY(-72px); opacity: 0.25; }
                "#}
            </style>
            { for DIAGNOSTIC_CARDS.iter().enumerate().map(|(index, label)| {
                let slot = Slot::of(index, active, DIAGNOSTIC_CARDS.len());
                html! {
                    <div key={*label} class={classes!("card", slot.class())}>{label}</div>
                }
            }) }
        </div>
    }
}
