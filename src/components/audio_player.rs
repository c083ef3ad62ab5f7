use gloo_events::EventListener;
use log::{debug, warn};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlAudioElement, MouseEvent};
use yew::prelude::*;

use crate::audio::{AudioCommand, AudioToggle, PlaybackState};
use crate::config;

// HTMLMediaElement.HAVE_METADATA
const HAVE_METADATA: u16 = 1;

#[function_component(AudioPlayer)]
pub fn audio_player() -> Html {
    let audio_ref = use_node_ref();
    let toggle = use_mut_ref(AudioToggle::new);
    let state = use_state(PlaybackState::default);

    // Loop the track and fix its volume once it reports it is ready.
    {
        let audio_ref = audio_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = audio_ref.cast::<HtmlAudioElement>().map(|audio| {
                    audio.set_loop(true);
                    if audio.ready_state() >= HAVE_METADATA {
                        audio.set_volume(config::AUDIO_VOLUME);
                    }
                    let target = audio.clone();
                    EventListener::new(&audio, "loadedmetadata", move |_| {
                        target.set_volume(config::AUDIO_VOLUME);
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    let onclick = {
        let audio_ref = audio_ref.clone();
        let toggle = toggle.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(audio) = audio_ref.cast::<HtmlAudioElement>() else {
                return;
            };
            let command = toggle.borrow_mut().toggle();
            state.set(toggle.borrow().state());

            match command {
                AudioCommand::Pause => {
                    if let Err(err) = audio.pause() {
                        warn!("pause failed: {:?}", err);
                    }
                }
                AudioCommand::Play(request) => {
                    let toggle = toggle.clone();
                    let state = state.clone();
                    let started = audio.play();
                    spawn_local(async move {
                        let result = match started {
                            Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
                            Err(err) => Err(err),
                        };
                        if let Err(err) = result {
                            debug!("play request {} rejected: {:?}", request, err);
                            if toggle.borrow_mut().play_rejected(request) {
                                state.set(toggle.borrow().state());
                            }
                        }
                    });
                }
            }
        })
    };

    let playing = *state == PlaybackState::Playing;

    html! {
        <div class="audio-player">
            <style>
                {r#"
                    .audio-player {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 60;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .audio-label {
                        max-width: 0;
                        opacity: 0;
                        overflow: hidden;
                        transition: max-width 0.7s, opacity 0.7s;
                    }
                    .audio-label.visible {
                        max-width: 200px;
                        opacity: 1;
                    }
                    .audio-label span {
                        font-family: var(--font-display);
                        font-size: 10px;
                        letter-spacing: 0.1em;
                        color: var(--gold-400);
                        text-transform: uppercase;
                        background: rgba(5, 10, 24, 0.8);
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(212, 175, 55, 0.2);
                        white-space: nowrap;
                    }
                    .audio-button {
                        position: relative;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        border: 1px solid rgba(212, 175, 55, 0.3);
                        background: rgba(5, 10, 24, 0.8);
                        color: var(--gold-400);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                        box-shadow: 0 0 20px rgba(0, 0, 0, 0.5);
                        transition: transform 0.3s, border-color 0.3s;
                    }
                    .audio-button:hover {
                        transform: scale(1.05);
                        border-color: var(--gold-400);
                    }
                    .audio-button svg {
                        width: 1rem;
                        height: 1rem;
                    }
                    .audio-ring {
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        border: 1px solid rgba(212, 175, 55, 0.4);
                        animation: ping 2s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }
                    .audio-ring.late {
                        border-color: rgba(212, 175, 55, 0.2);
                        animation-delay: 0.6s;
                    }
                "#}
            </style>
            <div class={classes!("audio-label", playing.then(|| "visible"))}>
                <span>{config::AUDIO_LABEL}</span>
            </div>
            <button class="audio-button" onclick={onclick}>
                <audio ref={audio_ref} src={config::AUDIO_URL} />
                {
                    if playing {
                        html! {
                            <svg fill="currentColor" viewBox="0 0 24 24">
                                <rect x="6" y="4" width="4" height="16" />
                                <rect x="14" y="4" width="4" height="16" />
                            </svg>
                        }
                    } else {
                        html! {
                            <svg fill="currentColor" viewBox="0 0 24 24">
                                <path d="M8 5v14l11-7z" />
                            </svg>
                        }
                    }
                }
                {
                    if playing {
                        html! {
                            <>
                                <div class="audio-ring"></div>
                                <div class="audio-ring late"></div>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </button>
        </div>
    }
}
