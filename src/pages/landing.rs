use std::rc::Rc;

use log::{debug, info};
use web_sys::Element;
use yew::prelude::*;

use crate::components::{
    diagnostic_shuffler::DiagnosticShuffler, footer::Footer, membership::Membership,
    nav::FloatingNav, protocol_scheduler::ProtocolScheduler, protocol_stack::ProtocolStack,
    telemetry::TelemetryFeed,
};
use crate::config::LandingConfig;
use crate::content::{HERO, MANIFEST};
use crate::sequencer::{
    self,
    dom::{DomScheduler, DomSurface},
};

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_state(LandingConfig::load);
    let root = use_node_ref();

    {
        let config = (*config).clone();
        let root = root.clone();
        use_effect_with_deps(
            move |_| {
                let guard = match config.validate() {
                    Err(err) => {
                        gloo_console::error!(format!("landing animations disabled: {}", err));
                        None
                    }
                    Ok(choreography) => root
                        .cast::<Element>()
                        .and_then(DomSurface::scoped)
                        .map(|surface| {
                            sequencer::mount(
                                Rc::new(surface),
                                DomScheduler::shared(),
                                choreography,
                            )
                        })
                        .and_then(|mounted| match mounted {
                            Ok(guard) => Some(guard),
                            Err(err) => {
                                gloo_console::error!(format!("sequencer not mounted: {}", err));
                                None
                            }
                        }),
                };

                move || {
                    if let Some(mut guard) = guard {
                        debug!("disposing landing sequencer");
                        guard.dispose();
                    }
                }
            },
            (),
        );
    }

    info!("Rendering landing page");

    html! {
        <main ref={root} class="landing">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        display: flex;
                        align-items: flex-end;
                        height: 100dvh;
                        overflow: hidden;
                        border-radius: 0 0 var(--radius-softer) var(--radius-softer);
                        padding: 0 8vw 12vh;
                        color: var(--cream);
                    }
                    .hero img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero .shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top right, #000, rgba(46, 64, 54, 0.9), rgba(46, 64, 54, 0.25));
                    }
                    .hero .copy {
                        position: relative;
                        z-index: 10;
                        max-width: 64rem;
                    }
                    .hero .eyebrow {
                        font-size: 0.75rem;
                        letter-spacing: 0.28em;
                        color: rgba(242, 240, 233, 0.8);
                    }
                    .hero h1 {
                        margin: 0;
                        font-size: 3rem;
                        font-weight: 800;
                        line-height: 0.88;
                        letter-spacing: var(--tracking-tightest);
                    }
                    .hero h2 {
                        margin: 0;
                        font-size: 3.75rem;
                        font-weight: 400;
                        line-height: 1;
                    }
                    .hero .lede {
                        max-width: 36rem;
                        color: rgba(242, 240, 233, 0.85);
                    }
                    .features {
                        display: grid;
                        gap: 1.5rem;
                        width: min(93vw, 1320px);
                        margin: 0 auto;
                        padding: 6rem 0;
                    }
                    .features article {
                        border-radius: var(--radius-softer);
                        border: 1px solid rgba(46, 64, 54, 0.15);
                        background: #fff;
                        padding: 2rem;
                    }
                    .features article.dark {
                        border: none;
                        background: var(--moss);
                        color: var(--cream);
                    }
                    .features .label {
                        margin: 0 0 1.5rem;
                        font-size: 0.75rem;
                        letter-spacing: 0.18em;
                        color: var(--moss);
                    }
                    .features .dark .label {
                        color: inherit;
                    }
                    .philosophy {
                        position: relative;
                        overflow: hidden;
                        border-radius: var(--radius-softer);
                        background: var(--charcoal);
                        color: var(--cream);
                        padding: 7rem 8vw;
                        font-size: 1.875rem;
                        font-weight: 600;
                        line-height: 1.08;
                    }
                    .philosophy p {
                        overflow: hidden;
                        margin: 0 0 2rem;
                    }
                    .manifest-reveal {
                        display: inline-block;
                    }
                    .manifest-reveal.accent {
                        color: var(--clay);
                    }
                    @media (min-width: 768px) {
                        .hero .copy { margin-left: 4vw; }
                        .hero h1 { font-size: 6rem; }
                        .hero h2 { font-size: 9rem; }
                        .hero .lede { font-size: 1.125rem; }
                        .features { grid-template-columns: repeat(3, minmax(0, 1fr)); }
                        .philosophy { font-size: 3.75rem; }
                    }
                "#}
            </style>
            <FloatingNav />

            <section class="hero">
                <img src={HERO.image_url} alt={HERO.image_alt} />
                <div class="shade"></div>
                <div class="copy">
                    <p class="hero-stagger eyebrow mono">{HERO.eyebrow}</p>
                    <h1 class="hero-stagger">{HERO.title}</h1>
                    <h2 class="hero-stagger serif-accent">{HERO.accent}</h2>
                    <p class="hero-stagger lede">{HERO.body}</p>
                </div>
            </section>

            <section id="features" class="features">
                <article class="dark">
                    <p class="label">{"진단 셔플러"}</p>
                    <DiagnosticShuffler period_ms={config.diagnostics_period_ms} />
                </article>
                <article>
                    <p class="label">{"텔레메트리 타이프라이터"}</p>
                    <TelemetryFeed period_ms={config.telemetry_period_ms} />
                </article>
                <article>
                    <p class="label">{"목 커서 프로토콜 스케줄러"}</p>
                    <ProtocolScheduler />
                </article>
            </section>

            <section id="philosophy" class="philosophy">
                <p><span class="manifest-reveal">{MANIFEST[0]}</span></p>
                <p><span class="manifest-reveal accent serif-accent">{MANIFEST[1]}</span></p>
            </section>

            <ProtocolStack />
            <Membership />
            <Footer />
        </main>
    }
}
