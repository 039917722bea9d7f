use std::str::FromStr;

use stylist::ast::Sheet;
use stylist::yew::Global;
use stylist::StyleSource;
use yew::prelude::*;

pub const MOSS: &str = "#2E4036";

/// Design tokens, base rules and the shared `pulse` animation.
const BASE_CSS: &str = r#"
    :root {
        --moss: #2E4036;
        --clay: #CC5833;
        --cream: #F2F0E9;
        --charcoal: #1A1A1A;
        --radius-soft: 2rem;
        --radius-softer: 3rem;
        --radius-top-huge: 4rem;
        --tracking-tightest: -0.05em;
        --font-sans: "Plus Jakarta Sans", "Outfit", sans-serif;
        --font-serif-accent: "Cormorant Garamond", serif;
        --font-mono: "JetBrains Mono", monospace;
    }

    html, body {
        margin: 0;
        padding: 0;
        background: #F2F0E9;
        color: #1A1A1A;
        font-family: "Plus Jakarta Sans", "Outfit", sans-serif;
        -webkit-font-smoothing: antialiased;
    }

    *, *::before, *::after {
        box-sizing: border-box;
    }

    a {
        color: inherit;
        text-decoration: none;
    }

    .mono {
        font-family: "JetBrains Mono", monospace;
    }

    .serif-accent {
        font-family: "Cormorant Garamond", serif;
        font-style: italic;
    }

    @keyframes pulse {
        50% { opacity: 0.5; }
    }

    .pulse {
        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
    }
"#;

fn base_sheet() -> Result<Sheet, stylist::Error> {
    Sheet::from_str(BASE_CSS)
}

/// Registers the base stylesheet for every section.
#[function_component(Theme)]
pub fn theme() -> Html {
    match base_sheet() {
        Ok(sheet) => html! { <Global css={StyleSource::from(sheet)} /> },
        Err(err) => {
            gloo_console::error!(format!("invalid base stylesheet: {}", err));
            html! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_sheet_parses() {
        assert!(base_sheet().is_ok());
    }

    #[test]
    fn test_pulse_is_global() {
        assert!(BASE_CSS.contains("@keyframes pulse"));
        assert!(BASE_CSS.contains(".pulse {"));
        assert!(BASE_CSS.contains("--clay: #CC5833;"));
    }
}
