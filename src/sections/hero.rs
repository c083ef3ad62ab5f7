use gloo_events::EventListener;
use log::warn;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::entry_overlay::EntryContext;
use crate::config;
use crate::error;
use crate::motion::{apply_pose, clear_pose, Pose};
use crate::reveal::{play_reveal, RevealHandle};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1544078751-58fee2d8a03b?q=80&w=2070&auto=format&fit=crop";

/// Background and text poses for a hero whose rect is `(top, height)`.
pub fn scrub_poses(top: f64, height: f64, viewport_height: f64) -> (Pose, Pose) {
    let parallax = config::HERO_PARALLAX_EASE.apply(config::hero_parallax().progress(top, height, viewport_height));
    let fade = config::HERO_TEXT_FADE_EASE.apply(config::hero_text_fade().progress(top, height, viewport_height));
    (
        Pose::REST.y_percent(config::HERO_PARALLAX_Y_PERCENT * parallax),
        Pose::lerp(&Pose::REST, &config::hero_text_faded(), fade),
    )
}

fn apply_scrub(section_ref: &NodeRef, image_ref: &NodeRef, text_ref: &NodeRef) {
    let (Some(section), Some(image), Some(text)) = (
        section_ref.cast::<HtmlElement>(),
        image_ref.cast::<HtmlElement>(),
        text_ref.cast::<HtmlElement>(),
    ) else {
        return;
    };
    let Ok(viewport_height) = error::viewport_height() else { return };
    let rect = section.get_bounding_client_rect();
    let (image_pose, text_pose) = scrub_poses(rect.top(), rect.height(), viewport_height);
    for (element, pose) in [(&image, &image_pose), (&text, &text_pose)] {
        if let Err(err) = apply_pose(element, pose) {
            warn!("hero scrub not applied: {}", err);
        }
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let section_ref = use_node_ref();
    let image_ref = use_node_ref();
    let text_ref = use_node_ref();
    let entered = use_context::<EntryContext>().map(|c| c.entered).unwrap_or(true);

    // Parallax and fade follow the scroll position for the life of the hero.
    {
        let section_ref = section_ref.clone();
        let image_ref = image_ref.clone();
        let text_ref = text_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = match error::window() {
                    Ok(window) => {
                        let section_ref = section_ref.clone();
                        let image_ref = image_ref.clone();
                        let text_ref = text_ref.clone();
                        Some(EventListener::new(&window, "scroll", move |_| {
                            apply_scrub(&section_ref, &image_ref, &text_ref);
                        }))
                    }
                    Err(err) => {
                        warn!("hero scroll listener not attached: {}", err);
                        None
                    }
                };
                apply_scrub(&section_ref, &image_ref, &text_ref);

                move || {
                    drop(listener);
                    for node in [&image_ref, &text_ref] {
                        if let Some(element) = node.cast::<HtmlElement>() {
                            if let Err(err) = clear_pose(&element) {
                                warn!("hero pose not cleared: {}", err);
                            }
                        }
                    }
                }
            },
            (),
        );
    }

    // Staggered intro of the text lines once the doors have opened.
    {
        let text_ref = text_ref.clone();
        use_effect_with_deps(
            move |entered| {
                let mut intro: Option<RevealHandle> = None;
                if *entered {
                    if let Some(text) = text_ref.cast::<HtmlElement>() {
                        match play_reveal(&text, config::hero_intro(), config::HERO_INTRO_DELAY) {
                            Ok(handle) => intro = Some(handle),
                            Err(err) => warn!("hero intro skipped: {}", err),
                        }
                    }
                }
                move || drop(intro)
            },
            entered,
        );
    }

    let image_style = format!("background-image: url('{}');", HERO_IMAGE);

    html! {
        <section ref={section_ref} class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--navy-900);
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                    }
                    .hero-image {
                        position: absolute;
                        left: 0;
                        right: 0;
                        top: -10%;
                        height: 120%;
                        background-size: cover;
                        background-position: center;
                    }
                    .hero-tint {
                        position: absolute;
                        inset: 0;
                        background: rgba(10, 17, 40, 0.4);
                        mix-blend-mode: multiply;
                    }
                    .hero-gradient {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, var(--navy-900), rgba(10, 17, 40, 0.6), rgba(10, 17, 40, 0.3));
                    }
                    .hero-text {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 1.5rem;
                        width: 100%;
                        max-width: 56rem;
                    }
                    .hero-kicker {
                        display: inline-block;
                        border-bottom: 1px solid rgba(212, 175, 55, 0.4);
                        padding-bottom: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .hero-kicker p {
                        font-family: var(--font-display);
                        color: var(--gold-300);
                        letter-spacing: 0.4em;
                        font-size: 0.8rem;
                        text-transform: uppercase;
                        margin: 0;
                    }
                    .hero-names {
                        font-family: var(--font-display);
                        font-size: clamp(3rem, 9vw, 8rem);
                        color: var(--gold-100);
                        letter-spacing: 0.1em;
                        margin: 0.5rem 0;
                        text-shadow: 0 5px 5px rgba(0, 0, 0, 0.5);
                    }
                    .hero-divider {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 2rem;
                        opacity: 0.8;
                    }
                    .hero-rule {
                        height: 1px;
                        width: 6rem;
                        background: linear-gradient(to right, transparent, var(--gold-400));
                    }
                    .hero-rule.flipped {
                        background: linear-gradient(to left, transparent, var(--gold-400));
                    }
                    .hero-diamond {
                        width: 0.5rem;
                        height: 0.5rem;
                        transform: rotate(45deg);
                        border: 1px solid var(--gold-400);
                        background: rgba(212, 175, 55, 0.2);
                    }
                    .hero-invite {
                        font-size: clamp(1.25rem, 3vw, 1.9rem);
                        color: var(--gold-200);
                        font-style: italic;
                        line-height: 1.6;
                    }
                    .hero-date {
                        display: inline-flex;
                        align-items: center;
                        gap: 1rem;
                        margin-top: 3rem;
                        padding: 1rem 2rem;
                        font-family: var(--font-display);
                        color: var(--gold-100);
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        border: 1px solid rgba(212, 175, 55, 0.3);
                        background: rgba(5, 10, 24, 0.3);
                        backdrop-filter: blur(4px);
                    }
                    .hero-dot {
                        width: 0.4rem;
                        height: 0.4rem;
                        border-radius: 50%;
                        background: var(--gold-400);
                    }
                    .scroll-hint {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        opacity: 0.6;
                        color: var(--gold-300);
                        animation: bounce 1s infinite;
                    }
                    .scroll-hint span {
                        font-family: var(--font-display);
                        font-size: 10px;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .scroll-hint svg {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                "#}
            </style>
            <div class="hero-backdrop">
                <div ref={image_ref} class="hero-image" style={image_style}></div>
                <div class="hero-tint"></div>
                <div class="hero-gradient"></div>
            </div>

            <div ref={text_ref} class="hero-text">
                <div class="hero-text-line hero-kicker">
                    <p>{"Together with their families"}</p>
                </div>
                <h1 class="hero-text-line hero-names">
                    {"Arpit "}<span class="script-amp">{"&"}</span>{" Jyoti"}
                </h1>
                <div class="hero-divider">
                    <div class="hero-text-line hero-rule"></div>
                    <div class="hero-text-line"><div class="hero-diamond"></div></div>
                    <div class="hero-text-line hero-rule flipped"></div>
                </div>
                <p class="hero-text-line hero-invite">
                    {"Invite you to share in their joy"}<br />{"and celebration of love"}
                </p>
                <p class="hero-text-line hero-date">
                    <span>{"Dec 14, 2024"}</span>
                    <span class="hero-dot"></span>
                    <span>{"Udaipur"}</span>
                </p>
            </div>

            <div class="scroll-hint">
                <span>{"Scroll"}</span>
                <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1" d="M19 14l-7 7m0 0l-7-7m7 7V3" />
                </svg>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_at_rest_before_scrolling() {
        let (image, text) = scrub_poses(0.0, 900.0, 900.0);
        assert_eq!(image, Pose::REST);
        assert_eq!(text, Pose::REST);
    }

    #[test]
    fn text_is_gone_before_the_parallax_ends() {
        let (image, text) = scrub_poses(-450.0, 900.0, 900.0);
        let faded = config::hero_text_faded();
        assert!((image.y_percent - 10.0).abs() < 1e-9);
        assert_eq!(text.opacity, 0.0);
        assert!((text.y - faded.y).abs() < 1e-9);
        assert!((text.scale - faded.scale).abs() < 1e-9);
    }

    #[test]
    fn text_fade_eases_out() {
        // Halfway through the fade range: 40% of a 900px hero is 360px.
        let (image, text) = scrub_poses(-180.0, 900.0, 900.0);
        assert!((text.opacity - 0.25).abs() < 1e-9);
        assert!((image.y_percent - 4.0).abs() < 1e-9);
    }

    #[test]
    fn parallax_stops_at_twenty_percent() {
        let (image, _) = scrub_poses(-5000.0, 900.0, 900.0);
        assert_eq!(image.y_percent, config::HERO_PARALLAX_Y_PERCENT);
    }
}
