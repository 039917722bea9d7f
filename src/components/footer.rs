use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        border-radius: var(--radius-top-huge) var(--radius-top-huge) 0 0;
                        background: var(--charcoal);
                        color: var(--cream);
                        padding: 3rem 8vw;
                    }
                    .site-footer .row {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .site-footer .core {
                        font-size: 0.875rem;
                        letter-spacing: 0.18em;
                    }
                    .site-footer .status {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.75rem;
                        color: #4ade80;
                    }
                    .site-footer .status-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #4ade80;
                    }
                "#}
            </style>
            <div class="row">
                <p class="core">{"NURA HEALTH SYSTEM CORE"}</p>
                <p class="status mono">
                    <span class="status-dot pulse"></span>
                    {"시스템 정상 가동"}
                </p>
            </div>
        </footer>
    }
}
