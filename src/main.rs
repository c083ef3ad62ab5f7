use log::{info, warn};
use yew::prelude::*;

mod ambient;
mod audio;
mod config;
mod countdown;
mod entry;
mod error;
mod motion;
mod reveal;
mod theme;
mod components {
    pub mod audio_player;
    pub mod decor;
    pub mod entry_overlay;
}
mod sections {
    pub mod countdown;
    pub mod events;
    pub mod footer;
    pub mod hero;
    pub mod story;
}

use components::{
    audio_player::AudioPlayer,
    decor::{FloatingIcons, FloatingMandalas, Sparkles},
    entry_overlay::{EntryContext, EntryOverlay},
};
use sections::{
    countdown::CountdownSection,
    events::EventsSection,
    footer::Footer,
    hero::HeroSection,
    story::StorySection,
};
use theme::Theme;

/// Body overflow while the guest is still in front of the doors.
fn body_overflow(entered: bool) -> &'static str {
    if entered {
        "unset"
    } else {
        "hidden"
    }
}

fn lock_scroll(entered: bool) -> error::DomResult<()> {
    error::body()?.style().set_property("overflow", body_overflow(entered))?;
    Ok(())
}

#[function_component]
fn App() -> Html {
    let entered = use_state(|| false);

    use_effect_with_deps(
        move |entered| {
            if let Err(err) = lock_scroll(*entered) {
                warn!("could not update scroll lock: {}", err);
            }
            || ()
        },
        *entered,
    );

    let on_entered = {
        let entered = entered.clone();
        Callback::from(move |_| {
            info!("guest entered the celebration");
            entered.set(true);
        })
    };

    let context = EntryContext { entered: *entered };

    html! {
        <ContextProvider<EntryContext> context={context}>
            <Theme />
            <div class="invitation">
                {
                    if *entered {
                        html! {}
                    } else {
                        html! { <EntryOverlay on_entered={on_entered} /> }
                    }
                }

                <div class={classes!("main-wrapper", (*entered).then(|| "entered"))}>
                    <div class="background-layer">
                        <FloatingMandalas />
                        <FloatingIcons />
                        <Sparkles count={config::BACKGROUND_SPARKLES} />
                        <div class="background-fade top"></div>
                        <div class="background-fade bottom"></div>
                    </div>

                    <AudioPlayer />

                    <main>
                        <HeroSection />
                        <StorySection />
                        <EventsSection />
                        <CountdownSection />
                    </main>

                    <Footer />
                </div>
            </div>
        </ContextProvider<EntryContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::warn!(format!("logger unavailable: {}", err));
    }

    info!("Starting invitation");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_is_locked_until_entry() {
        assert_eq!(body_overflow(false), "hidden");
        assert_eq!(body_overflow(true), "unset");
    }
}
