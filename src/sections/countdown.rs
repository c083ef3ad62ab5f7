use chrono::Utc;
use gloo_timers::callback::Interval;
use log::{info, warn};
use yew::prelude::*;

use crate::components::entry_overlay::EntryContext;
use crate::config;
use crate::countdown::{compute, pad2, resolve_local_target, CountdownBreakdown};
use crate::reveal::use_scroll_reveal;

#[derive(Properties, PartialEq)]
struct TimerUnitProps {
    value: u64,
    label: &'static str,
}

#[function_component(TimerUnit)]
fn timer_unit(props: &TimerUnitProps) -> Html {
    html! {
        <div class="timer-block">
            <div class="timer-shine"></div>
            <span class="timer-value">{pad2(props.value)}</span>
            <span class="timer-label">{props.label}</span>
        </div>
    }
}

#[function_component(CountdownSection)]
pub fn countdown_section() -> Html {
    let section_ref = use_node_ref();
    let entered = use_context::<EntryContext>().map(|c| c.entered).unwrap_or(true);

    let target = use_memo(
        |_| {
            let target = resolve_local_target(config::COUNTDOWN_TARGET);
            if target.is_none() {
                warn!("countdown target `{}` is not a valid date", config::COUNTDOWN_TARGET);
            }
            target
        },
        (),
    );
    let remaining = {
        let target = *target;
        use_state(move || target.map(|t| compute(t, Utc::now())).unwrap_or(CountdownBreakdown::ZERO))
    };

    {
        let remaining = remaining.clone();
        let target = *target;
        use_effect_with_deps(
            move |_| {
                let interval = target.and_then(|target| {
                    let now = compute(target, Utc::now());
                    remaining.set(now);
                    if now.is_zero() {
                        info!("countdown target has passed, timer stays at zero");
                        return None;
                    }
                    Some(Interval::new(config::COUNTDOWN_TICK_MS, move || {
                        remaining.set(compute(target, Utc::now()));
                    }))
                });
                move || drop(interval)
            },
            (),
        );
    }

    use_scroll_reveal(section_ref.clone(), config::TIMER_THRESHOLD, config::timer_blocks_reveal(), entered);
    use_scroll_reveal(section_ref.clone(), config::RSVP_THRESHOLD, config::rsvp_reveal(), entered);

    let time = *remaining;

    html! {
        <section ref={section_ref} class="countdown">
            <style>
                {r#"
                    .countdown {
                        position: relative;
                        overflow: hidden;
                        padding: 8rem 1.5rem;
                        text-align: center;
                        background: var(--navy-900);
                    }
                    .countdown-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .countdown-kicker {
                        font-size: 0.75rem;
                        letter-spacing: 0.4em;
                        text-transform: uppercase;
                        color: var(--gold-200);
                        animation: pulse-slow 2s ease-in-out infinite;
                    }
                    .countdown-date {
                        font-family: var(--font-display);
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        color: var(--gold-400);
                        margin: 1rem 0 4rem;
                    }
                    .timer {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 2rem;
                    }
                    .timer-block {
                        position: relative;
                        overflow: hidden;
                        min-width: 150px;
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        background: linear-gradient(to bottom right, var(--navy-950), var(--navy-900));
                        border: 1px solid rgba(212, 175, 55, 0.2);
                        border-radius: 2px;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.4);
                    }
                    .timer-shine {
                        position: absolute;
                        inset: 0;
                        background: rgba(212, 175, 55, 0.05);
                        transform: translateY(100%);
                        transition: transform 0.5s;
                    }
                    .timer-block:hover .timer-shine {
                        transform: translateY(0);
                    }
                    .timer-value {
                        position: relative;
                        font-family: var(--font-display);
                        font-size: clamp(1.9rem, 6vw, 3.75rem);
                        font-weight: bold;
                        color: var(--gold-100);
                        font-variant-numeric: tabular-nums;
                    }
                    .timer-label {
                        position: relative;
                        margin-top: 1rem;
                        font-family: var(--font-display);
                        font-size: 10px;
                        letter-spacing: 0.4em;
                        text-transform: uppercase;
                        color: var(--gold-400);
                        opacity: 0.7;
                    }
                    .rsvp-box {
                        position: relative;
                        max-width: 42rem;
                        margin: 6rem auto 0;
                        padding: 4rem;
                        background: rgba(5, 10, 24, 0.8);
                        backdrop-filter: blur(4px);
                        border: 4px double rgba(212, 175, 55, 0.2);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .rsvp-corner {
                        position: absolute;
                        width: 2rem;
                        height: 2rem;
                        border-color: rgba(212, 175, 55, 0.6);
                        border-style: solid;
                        border-width: 0;
                    }
                    .rsvp-corner.tl { top: 1rem; left: 1rem; border-top-width: 1px; border-left-width: 1px; }
                    .rsvp-corner.tr { top: 1rem; right: 1rem; border-top-width: 1px; border-right-width: 1px; }
                    .rsvp-corner.bl { bottom: 1rem; left: 1rem; border-bottom-width: 1px; border-left-width: 1px; }
                    .rsvp-corner.br { bottom: 1rem; right: 1rem; border-bottom-width: 1px; border-right-width: 1px; }
                    .rsvp-title {
                        font-family: var(--font-script);
                        font-size: 3rem;
                        color: var(--gold-100);
                        margin: 0 0 1.5rem;
                    }
                    .rsvp-text {
                        font-size: 1.1rem;
                        font-style: italic;
                        line-height: 1.6;
                        color: rgba(247, 231, 206, 0.6);
                        margin: 0 0 2.5rem;
                    }
                    .rsvp-button {
                        position: relative;
                        overflow: hidden;
                        padding: 1rem 3rem;
                        background: transparent;
                        border: 1px solid rgba(212, 175, 55, 0.4);
                        color: var(--gold-400);
                        font-family: var(--font-display);
                        font-weight: bold;
                        font-size: 0.75rem;
                        letter-spacing: 0.4em;
                        text-transform: uppercase;
                        cursor: pointer;
                        transition: border-color 0.4s, color 0.4s, box-shadow 0.4s;
                    }
                    .rsvp-fill {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        left: 0;
                        width: 0;
                        background: var(--gold-400);
                        transition: width 0.4s ease-out;
                    }
                    .rsvp-button:hover {
                        border-color: var(--gold-400);
                        color: var(--navy-950);
                        box-shadow: 0 0 30px rgba(212, 175, 55, 0.4);
                    }
                    .rsvp-button:hover .rsvp-fill {
                        width: 100%;
                    }
                    .rsvp-button span {
                        position: relative;
                        z-index: 10;
                    }
                "#}
            </style>
            <div class="stardust"></div>
            <div class="countdown-inner">
                <p class="countdown-kicker">{"Save The Date"}</p>
                <h3 class="countdown-date">{"December 14th, 2024"}</h3>

                <div class="timer">
                    <TimerUnit value={time.days} label="Days" />
                    <TimerUnit value={u64::from(time.hours)} label="Hours" />
                    <TimerUnit value={u64::from(time.minutes)} label="Mins" />
                    <TimerUnit value={u64::from(time.seconds)} label="Secs" />
                </div>

                <div class="rsvp-box">
                    <div class="rsvp-corner tl"></div>
                    <div class="rsvp-corner tr"></div>
                    <div class="rsvp-corner bl"></div>
                    <div class="rsvp-corner br"></div>
                    <h4 class="rsvp-title">{"Will You Join Us?"}</h4>
                    <p class="rsvp-text">
                        {"We would be honored by your presence as we begin this new chapter of our lives together."}
                    </p>
                    <button class="rsvp-button">
                        <div class="rsvp-fill"></div>
                        <span>{"R.S.V.P. Now"}</span>
                    </button>
                </div>
            </div>
        </section>
    }
}
