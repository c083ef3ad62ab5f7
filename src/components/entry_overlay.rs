use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::decor::{Corner, DecorativeCorner, MandalaPattern, Sparkles};
use crate::config;
use crate::entry::{EntryController, EntryPart};
use crate::motion::driver::set_display;
use crate::motion::{apply_pose, run_frames, AnimationHandle, FrameControl};

/// Whether the guest has opened the doors. Provided by the root view; the
/// entry overlay is the only thing that changes it.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryContext {
    pub entered: bool,
}

#[derive(Properties, PartialEq)]
pub struct EntryOverlayProps {
    pub on_entered: Callback<()>,
}

#[function_component(EntryOverlay)]
pub fn entry_overlay(props: &EntryOverlayProps) -> Html {
    let container_ref = use_node_ref();
    let content_ref = use_node_ref();
    let left_door_ref = use_node_ref();
    let right_door_ref = use_node_ref();

    let controller = use_mut_ref(|| EntryController::new(&config::entry_timing()));
    let animation = use_mut_ref(|| None::<AnimationHandle>);

    // Stop the frame loop if the overlay is torn down mid-sequence.
    {
        let animation = animation.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    animation.borrow_mut().take();
                }
            },
            (),
        );
    }

    let open_doors = {
        let container_ref = container_ref.clone();
        let content_ref = content_ref.clone();
        let left_door_ref = left_door_ref.clone();
        let right_door_ref = right_door_ref.clone();
        let controller = controller.clone();
        let animation = animation.clone();
        let on_entered = props.on_entered.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if !controller.borrow_mut().activate() {
                return;
            }

            let container = container_ref.cast::<HtmlElement>();
            let parts = [
                (EntryPart::Content, content_ref.cast::<HtmlElement>()),
                (EntryPart::Container, container.clone()),
                (EntryPart::LeftDoor, left_door_ref.cast::<HtmlElement>()),
                (EntryPart::RightDoor, right_door_ref.cast::<HtmlElement>()),
            ];
            let controller = controller.clone();
            let on_entered = on_entered.clone();
            let mut hidden = false;

            let handle = run_frames(move |elapsed| {
                let frame = controller.borrow_mut().advance(elapsed);
                for (part, pose) in &frame.poses {
                    let element = parts.iter().find(|(p, _)| p == part).and_then(|(_, el)| el.as_ref());
                    if let Some(element) = element {
                        if let Err(err) = apply_pose(element, pose) {
                            log::warn!("entry frame not applied: {}", err);
                        }
                    }
                }
                if frame.overlay_hidden && !hidden {
                    hidden = true;
                    if let Some(container) = &container {
                        if let Err(err) = set_display(container, "none") {
                            log::warn!("could not hide entry overlay: {}", err);
                        }
                    }
                }
                if frame.entered {
                    on_entered.emit(());
                    FrameControl::Finished
                } else {
                    FrameControl::Continue
                }
            });
            *animation.borrow_mut() = Some(handle);
        })
    };

    html! {
        <div ref={container_ref} class="entry-overlay">
            <style>
                {r#"
                    .entry-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        background: var(--navy-900);
                        perspective: 2000px;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .entry-backdrop {
                        position: absolute;
                        inset: 0;
                        background: var(--navy-950);
                    }
                    .door {
                        position: absolute;
                        top: 0;
                        width: 50%;
                        height: 100%;
                        background: var(--navy-900);
                        z-index: 20;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                    }
                    .door-left {
                        left: 0;
                        justify-content: flex-end;
                        border-right: 1px solid rgba(212, 175, 55, 0.3);
                        box-shadow: 10px 0 50px rgba(0, 0, 0, 0.8);
                        transform-origin: left center;
                    }
                    .door-right {
                        right: 0;
                        justify-content: flex-start;
                        border-left: 1px solid rgba(212, 175, 55, 0.3);
                        box-shadow: -10px 0 50px rgba(0, 0, 0, 0.8);
                        transform-origin: right center;
                    }
                    .door-frame {
                        position: absolute;
                        inset: 1rem;
                        border: 1px solid rgba(212, 175, 55, 0.2);
                    }
                    .door-mandala {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        opacity: 0.1;
                        color: var(--gold-400);
                    }
                    .door-mandala .mandala {
                        width: 120%;
                        animation: spin-slow 60s linear infinite;
                    }
                    .door-handle {
                        width: 2.5rem;
                        height: 8rem;
                        border: 2px solid rgba(212, 175, 55, 0.3);
                        display: flex;
                        align-items: center;
                        background: rgba(5, 10, 24, 0.8);
                        backdrop-filter: blur(4px);
                    }
                    .door-left .door-handle {
                        margin-right: 1rem;
                        border-radius: 9999px 0 0 9999px;
                        justify-content: flex-end;
                        padding-right: 0.75rem;
                    }
                    .door-right .door-handle {
                        margin-left: 1rem;
                        border-radius: 0 9999px 9999px 0;
                        justify-content: flex-start;
                        padding-left: 0.75rem;
                    }
                    .door-knob {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                        background: var(--gold-400);
                        box-shadow: 0 0 15px #d4af37;
                    }
                    .entry-content {
                        position: relative;
                        z-index: 30;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        padding: 0 1rem;
                        max-width: 32rem;
                    }
                    .entry-om {
                        font-size: 2.5rem;
                        color: var(--gold-400);
                        margin-bottom: 1.5rem;
                        animation: pulse-slow 4s ease-in-out infinite;
                    }
                    .entry-kicker {
                        font-family: var(--font-display);
                        color: var(--gold-300);
                        letter-spacing: 0.4em;
                        text-transform: uppercase;
                        font-weight: bold;
                        margin-bottom: 1rem;
                    }
                    .entry-names {
                        font-family: var(--font-display);
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        color: var(--gold-100);
                        letter-spacing: 0.05em;
                        margin: 0 0 2.5rem;
                    }
                    .entry-button {
                        position: relative;
                        padding: 0.75rem 2.5rem;
                        border: 1px solid rgba(212, 175, 55, 0.4);
                        background: rgba(5, 10, 24, 0.4);
                        color: var(--gold-200);
                        font-family: var(--font-display);
                        letter-spacing: 0.3em;
                        font-size: 0.7rem;
                        text-transform: uppercase;
                        cursor: pointer;
                        transition: box-shadow 0.5s, border-color 0.5s, color 0.5s;
                    }
                    .entry-button:hover {
                        box-shadow: 0 0 30px rgba(212, 175, 55, 0.4);
                        border-color: var(--gold-400);
                        color: white;
                    }
                    .entry-corners {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                    }
                "#}
            </style>
            <div class="entry-backdrop"></div>

            <div ref={left_door_ref} class="door door-left">
                <div class="paper-texture"></div>
                <div class="door-frame"></div>
                <div class="door-mandala"><MandalaPattern /></div>
                <div class="door-handle"><div class="door-knob"></div></div>
            </div>

            <div ref={right_door_ref} class="door door-right">
                <div class="paper-texture"></div>
                <div class="door-frame"></div>
                <div class="door-mandala"><MandalaPattern /></div>
                <div class="door-handle"><div class="door-knob"></div></div>
            </div>

            <div ref={content_ref} class="entry-content">
                <div class="entry-om">{"🕉️"}</div>
                <p class="entry-kicker">{"The Wedding Of"}</p>
                <h1 class="entry-names">
                    {"Arpit "}<span class="script-amp">{"&"}</span>{" Jyoti"}
                </h1>
                <button class="entry-button" onclick={open_doors}>
                    {"Enter Celebration"}
                </button>
                <div class="entry-corners">
                    { for Corner::ALL.iter().map(|corner| html! { <DecorativeCorner corner={*corner} /> }) }
                </div>
            </div>

            <Sparkles count={config::ENTRY_SPARKLES} />
        </div>
    }
}
