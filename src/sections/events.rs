use yew::prelude::*;

use crate::components::entry_overlay::EntryContext;
use crate::config;
use crate::reveal::use_scroll_reveal;

#[derive(Clone, Debug, PartialEq)]
pub struct EventDetails {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub venue: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    /// Outline icon, drawn in a 24x24 box.
    pub icon_path: &'static str,
}

pub const EVENTS: [EventDetails; 3] = [
    EventDetails {
        title: "Haldi Ceremony",
        date: "Dec 12th",
        time: "10:30 AM",
        venue: "The City Palace",
        description: "A vibrant morning of colors, blessings, and traditional folk music to begin the festivities.",
        image_url: "https://images.unsplash.com/photo-1605218457336-9274474744d0?q=80&w=800&auto=format&fit=crop",
        icon_path: "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z",
    },
    EventDetails {
        title: "Sangeet Night",
        date: "Dec 13th",
        time: "07:30 PM",
        venue: "Royal Ballroom",
        description: "Put on your dancing shoes for a glamorous night of music, performances, and celebration.",
        image_url: "https://images.unsplash.com/photo-1545232979-8bf68ee9b1af?q=80&w=800&auto=format&fit=crop",
        icon_path: "M9 19V6l12-3v13M9 19c0 1.105-1.343 2-3 2s-3-.895-3-2 1.343-2 3-2 3 .895 3 2zm12-3c0 1.105-1.343 2-3 2s-3-.895-3-2 1.343-2 3-2 3 .895 3 2zM9 10l12-3",
    },
    EventDetails {
        title: "The Wedding",
        date: "Dec 14th",
        time: "06:00 PM",
        venue: "Zenana Mahal",
        description: "The sacred union under the starlit sky as we take our seven vows surrounded by loved ones.",
        image_url: "https://images.unsplash.com/photo-1583939003579-730e3918a45a?q=80&w=800&auto=format&fit=crop",
        icon_path: "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z",
    },
];

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: EventDetails,
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let event = &props.event;
    html! {
        <div class="event-card">
            <div class="event-photo">
                <img src={event.image_url} alt={event.title} />
            </div>
            <div class="event-corner"></div>
            <div class="event-body">
                <div class="event-heading">
                    <div class="event-icon">
                        <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1" d={event.icon_path} />
                        </svg>
                    </div>
                    <h3>{event.title}</h3>
                </div>
                <div class="event-when">
                    <p class="event-date">{event.date}</p>
                    <p class="event-time">{event.time}</p>
                </div>
                <p class="event-description">{event.description}</p>
                <div class="event-venue">
                    <svg fill="currentColor" viewBox="0 0 24 24">
                        <path d="M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z" />
                    </svg>
                    <span>{event.venue}</span>
                </div>
                <button class="event-map">{"View Map"}</button>
            </div>
        </div>
    }
}

#[function_component(EventsSection)]
pub fn events_section() -> Html {
    let section_ref = use_node_ref();
    let entered = use_context::<EntryContext>().map(|c| c.entered).unwrap_or(true);

    use_scroll_reveal(section_ref.clone(), config::EVENTS_THRESHOLD, config::event_cards_reveal(), entered);

    html! {
        <section ref={section_ref} class="events">
            <style>
                {r#"
                    .events {
                        position: relative;
                        padding: 8rem 1.5rem;
                        background: var(--navy-800);
                    }
                    .events-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .events-header {
                        text-align: center;
                        margin-bottom: 5rem;
                    }
                    .events-kicker {
                        display: block;
                        font-family: var(--font-display);
                        font-size: 0.75rem;
                        letter-spacing: 0.8em;
                        color: rgba(212, 175, 55, 0.6);
                        text-transform: uppercase;
                    }
                    .events-title {
                        font-family: var(--font-script);
                        font-size: clamp(3.75rem, 8vw, 4.5rem);
                        color: var(--gold-100);
                        margin: 1rem 0;
                    }
                    .events-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 1024px) {
                        .events-grid {
                            grid-template-columns: repeat(3, 1fr);
                            gap: 3rem;
                        }
                    }
                    .event-card {
                        position: relative;
                        overflow: hidden;
                        height: 100%;
                        padding: 2.5rem;
                        background: var(--navy-950);
                        border: 1px solid rgba(212, 175, 55, 0.1);
                        border-radius: 2px;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                        transition: border-color 0.5s;
                    }
                    .event-card:hover {
                        border-color: rgba(212, 175, 55, 0.4);
                    }
                    .event-photo {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transition: opacity 1s ease-in-out;
                    }
                    .event-card:hover .event-photo {
                        opacity: 0.2;
                    }
                    .event-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: grayscale(100%);
                        transform: scale(1.1);
                        transition: transform 2s;
                    }
                    .event-card:hover .event-photo img {
                        transform: scale(1);
                    }
                    .event-corner {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 5rem;
                        height: 5rem;
                        background: rgba(212, 175, 55, 0.05);
                        transform: translate(2.5rem, -2.5rem) rotate(-45deg);
                    }
                    .event-body {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        height: 100%;
                    }
                    .event-heading {
                        margin-bottom: 1.5rem;
                        transition: transform 0.5s;
                    }
                    .event-card:hover .event-heading {
                        transform: translateY(-0.5rem);
                    }
                    .event-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        border: 1px solid rgba(212, 175, 55, 0.3);
                        background: var(--navy-900);
                        color: var(--gold-400);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .event-icon svg {
                        width: 2rem;
                        height: 2rem;
                    }
                    .event-heading h3 {
                        font-family: var(--font-display);
                        font-size: 1.25rem;
                        color: var(--gold-100);
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        margin: 0;
                    }
                    .event-when {
                        width: 100%;
                        padding: 1rem 0;
                        margin-bottom: 1.5rem;
                        border-top: 1px solid rgba(212, 175, 55, 0.1);
                        border-bottom: 1px solid rgba(212, 175, 55, 0.1);
                    }
                    .event-date {
                        font-size: 1.9rem;
                        font-style: italic;
                        font-weight: 600;
                        color: var(--gold-400);
                        margin: 0;
                    }
                    .event-time {
                        font-family: var(--font-display);
                        font-size: 10px;
                        letter-spacing: 0.3em;
                        color: rgba(255, 255, 255, 0.5);
                        margin: 0.25rem 0 0;
                    }
                    .event-description {
                        flex-grow: 1;
                        max-width: 280px;
                        font-size: 1.1rem;
                        line-height: 1.6;
                        color: rgba(253, 248, 231, 0.7);
                        margin: 0 0 2rem;
                    }
                    .event-venue {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                        opacity: 0.7;
                        color: var(--gold-200);
                        font-family: var(--font-display);
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                    }
                    .event-venue svg {
                        width: 1rem;
                        height: 1rem;
                        color: var(--gold-400);
                    }
                    .event-map {
                        padding: 0.5rem 2rem;
                        background: transparent;
                        border: 1px solid rgba(212, 175, 55, 0.3);
                        color: var(--gold-300);
                        font-family: var(--font-display);
                        font-size: 10px;
                        letter-spacing: 0.4em;
                        text-transform: uppercase;
                        cursor: pointer;
                        transition: background 0.3s, color 0.3s;
                    }
                    .event-map:hover {
                        background: var(--gold-400);
                        color: var(--navy-950);
                    }
                "#}
            </style>
            <div class="paper-texture"></div>
            <div class="events-inner">
                <div class="events-header">
                    <span class="events-kicker">{"Royal Celebrations"}</span>
                    <h2 class="events-title">{"The Events"}</h2>
                    <div class="ornament-rule">
                        <div class="line"></div>
                        <div class="dot"></div>
                        <div class="line"></div>
                    </div>
                </div>
                <div class="events-grid">
                    { for EVENTS.iter().map(|event| html! { <EventCard event={event.clone()} /> }) }
                </div>
            </div>
        </section>
    }
}
