use std::str::FromStr;

use log::error;
use stylist::ast::Sheet;
use stylist::yew::Global;
use stylist::StyleSource;
use yew::prelude::*;

/// Page-wide palette and fonts plus the shared decorative classes.
pub const THEME_CSS: &str = r#"
:root {
    --navy-950: #050a18;
    --navy-900: #0a1128;
    --navy-800: #121c3d;
    --gold-100: #fdf8e7;
    --gold-200: #f7e7ce;
    --gold-300: #e6c57a;
    --gold-400: #d4af37;
    --font-display: 'Cinzel', serif;
    --font-script: 'Great Vibes', cursive;
    --font-body: 'EB Garamond', serif;
}

html, body {
    margin: 0;
    padding: 0;
    background: var(--navy-900);
    color: var(--gold-100);
    font-family: var(--font-body);
    -webkit-font-smoothing: antialiased;
}

::selection {
    background: var(--gold-400);
    color: var(--navy-950);
}

.invitation {
    position: relative;
    min-height: 100vh;
    overflow-x: hidden;
    background: var(--navy-900);
}

.main-wrapper {
    position: relative;
    opacity: 0;
    transition: opacity 1s;
}

.main-wrapper.entered {
    opacity: 1;
}

.main-wrapper main {
    position: relative;
    z-index: 10;
}

.background-layer {
    position: fixed;
    inset: 0;
    z-index: 0;
    overflow: hidden;
    pointer-events: none;
}

.background-fade {
    position: absolute;
    left: 0;
    width: 100%;
    height: 10rem;
}

.background-fade.top {
    top: 0;
    background: linear-gradient(to bottom, var(--navy-900), transparent);
}

.background-fade.bottom {
    bottom: 0;
    background: linear-gradient(to top, var(--navy-900), transparent);
}

.script-amp {
    font-family: var(--font-script);
    font-weight: normal;
    color: var(--gold-400);
    margin: 0 0.5rem;
}

.paper-texture {
    position: absolute;
    inset: 0;
    opacity: 0.1;
    pointer-events: none;
    background-image: url('https://www.transparenttextures.com/patterns/natural-paper.png');
}

.stardust {
    position: absolute;
    inset: 0;
    opacity: 0.2;
    pointer-events: none;
    background-image: url('https://www.transparenttextures.com/patterns/stardust.png');
}

.ornament-rule {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    opacity: 0.5;
}

.ornament-rule .line {
    height: 1px;
    width: 3rem;
    background: var(--gold-400);
}

.ornament-rule .dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 50%;
    background: var(--gold-400);
}

.sparkles {
    position: absolute;
    inset: 0;
    overflow: hidden;
    pointer-events: none;
}

.sparkle {
    position: absolute;
    border-radius: 50%;
    background: var(--gold-200);
    box-shadow: 0 0 6px var(--gold-400);
}

.floating-icons {
    position: absolute;
    inset: 0;
    overflow: hidden;
    pointer-events: none;
}

.floating-icon {
    position: absolute;
    color: rgba(212, 175, 55, 0.4);
    opacity: 0;
    will-change: transform, opacity;
}

.floating-mandalas {
    position: absolute;
    inset: 0;
    overflow: hidden;
    pointer-events: none;
}

.floating-mandala {
    position: absolute;
    width: 600px;
    height: 600px;
    opacity: 0.05;
    color: var(--gold-400);
    stroke: currentColor;
}

.decorative-corner {
    position: absolute;
    width: 8rem;
    height: 8rem;
    opacity: 0.6;
}

.corner-tl { top: 0; left: 0; }
.corner-tr { top: 0; right: 0; }
.corner-br { bottom: 0; right: 0; }
.corner-bl { bottom: 0; left: 0; }
"#;

/// Keyframe loops referenced by component styles. Served as a plain
/// `<style>` element next to the global sheet.
pub const KEYFRAMES_CSS: &str = r#"
@keyframes twinkle {
    0%, 100% { opacity: 0.2; transform: scale(0.8); }
    50% { opacity: 1; transform: scale(1.2); }
}

@keyframes spin-slow {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}

@keyframes pulse-slow {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.6; }
}

@keyframes ping {
    75%, 100% { transform: scale(2); opacity: 0; }
}

@keyframes bounce {
    0%, 100% { transform: translate(-50%, -25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
    50% { transform: translate(-50%, 0); animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
}
"#;

/// Mounts [`THEME_CSS`] and [`KEYFRAMES_CSS`] on the document. The global
/// sheet is skipped if it is rejected.
#[function_component(Theme)]
pub fn theme() -> Html {
    let sheet = use_memo(
        |_| match Sheet::from_str(THEME_CSS) {
            Ok(sheet) => Some(sheet),
            Err(err) => {
                error!("theme stylesheet rejected: {}", err);
                None
            }
        },
        (),
    );

    html! {
        <>
            {
                match sheet.as_ref() {
                    Some(sheet) => html! { <Global css={StyleSource::from(sheet.clone())} /> },
                    None => html! {},
                }
            }
            <style>{KEYFRAMES_CSS}</style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parses() {
        assert!(Sheet::from_str(THEME_CSS).is_ok());
    }

    #[test]
    fn animations_used_by_components_are_defined() {
        for name in ["twinkle", "spin-slow", "pulse-slow", "ping", "bounce"] {
            assert!(KEYFRAMES_CSS.contains(&format!("@keyframes {} ", name)), "missing {}", name);
        }
    }
}
