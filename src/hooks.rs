use yew::prelude::*;

use crate::sequencer::dom::DomScheduler;
use crate::sequencer::rotator;

/// Index into a list of `list_length` items that advances every `period_ms`
/// while the component is mounted.
#[hook]
pub fn use_rotator(list_length: usize, period_ms: u32) -> usize {
    let index = use_state(|| 0usize);

    {
        let setter = index.setter();
        use_effect_with_deps(
            move |&(list_length, period_ms)| {
                let handle = match rotator::start(
                    DomScheduler::shared(),
                    list_length,
                    period_ms,
                    move |next| setter.set(next),
                ) {
                    Ok(handle) => Some(handle),
                    Err(err) => {
                        gloo_console::error!(format!("rotator not started: {}", err));
                        None
                    }
                };

                move || {
                    // Stops the interval on unmount or when the inputs change.
                    drop(handle);
                }
            },
            (list_length, period_ms),
        );
    }

    *index % list_length.max(1)
}
