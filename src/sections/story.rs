use yew::prelude::*;

use crate::components::entry_overlay::EntryContext;
use crate::config;
use crate::reveal::use_scroll_reveal;

const PORTRAIT: &str = "https://images.unsplash.com/photo-1595814433015-e6f5cd696144?q=80&w=1200&auto=format&fit=crop";

#[function_component(StorySection)]
pub fn story_section() -> Html {
    let section_ref = use_node_ref();
    let entered = use_context::<EntryContext>().map(|c| c.entered).unwrap_or(true);

    use_scroll_reveal(section_ref.clone(), config::STORY_THRESHOLD, config::story_image_reveal(), entered);
    use_scroll_reveal(section_ref.clone(), config::STORY_THRESHOLD, config::story_text_reveal(), entered);

    html! {
        <section ref={section_ref} class="story">
            <style>
                {r#"
                    .story {
                        position: relative;
                        overflow: hidden;
                        padding: 8rem 1.5rem;
                        background: var(--navy-900);
                    }
                    .story-grid {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    @media (min-width: 768px) {
                        .story-grid {
                            grid-template-columns: 1fr 1fr;
                            gap: 6rem;
                        }
                    }
                    .story-portrait {
                        position: relative;
                    }
                    .portrait-frame {
                        position: absolute;
                        width: 100%;
                        height: 100%;
                        border: 1px solid rgba(212, 175, 55, 0.2);
                        pointer-events: none;
                        transition: transform 0.7s;
                    }
                    .portrait-frame.upper {
                        top: -1rem;
                        left: -1rem;
                        border-radius: 9999px 9999px 0 0;
                    }
                    .portrait-frame.lower {
                        bottom: -1rem;
                        right: -1rem;
                        border-radius: 0 0 9999px 9999px;
                    }
                    .story-portrait:hover .portrait-frame.upper {
                        transform: translate(-0.5rem, -0.5rem);
                    }
                    .story-portrait:hover .portrait-frame.lower {
                        transform: translate(0.5rem, 0.5rem);
                    }
                    .portrait-image {
                        position: relative;
                        z-index: 10;
                        border-radius: 9999px;
                        overflow: hidden;
                        border: 4px solid var(--navy-800);
                        background: var(--navy-950);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .portrait-image img {
                        display: block;
                        width: 100%;
                        height: 500px;
                        object-fit: cover;
                        filter: grayscale(20%);
                        transition: filter 1s, transform 1s;
                    }
                    .story-portrait:hover .portrait-image img {
                        filter: none;
                        transform: scale(1.05);
                    }
                    .story-text {
                        text-align: center;
                    }
                    .story-text > * + * {
                        margin-top: 2.5rem;
                    }
                    @media (min-width: 768px) {
                        .story-text {
                            text-align: left;
                        }
                    }
                    .story-title {
                        font-family: var(--font-display);
                        font-size: clamp(3rem, 6vw, 3.75rem);
                        color: var(--gold-200);
                        letter-spacing: 0.1em;
                        font-weight: 300;
                        text-transform: uppercase;
                        margin: 0 0 1rem;
                    }
                    .story-rule {
                        width: 6rem;
                        height: 1px;
                        background: rgba(212, 175, 55, 0.4);
                    }
                    .story-body p {
                        font-size: 1.4rem;
                        line-height: 1.7;
                        color: rgba(253, 248, 231, 0.8);
                    }
                    .story-quote {
                        float: left;
                        margin-right: 0.5rem;
                        font-family: var(--font-script);
                        font-size: 3rem;
                        color: var(--gold-400);
                    }
                    .story-signature {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .story-signature .name {
                        font-family: var(--font-script);
                        font-size: 3.75rem;
                        color: var(--gold-400);
                    }
                    .story-signature .amp {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        border: 1px solid rgba(212, 175, 55, 0.3);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-family: var(--font-display);
                        color: var(--gold-200);
                    }
                    .story-motto {
                        font-family: var(--font-display);
                        font-size: 0.75rem;
                        letter-spacing: 0.4em;
                        color: rgba(212, 175, 55, 0.6);
                        text-transform: uppercase;
                    }
                "#}
            </style>
            <div class="story-grid">
                <div class="story-portrait">
                    <div class="portrait-frame upper"></div>
                    <div class="portrait-frame lower"></div>
                    <div class="portrait-image">
                        <img src={PORTRAIT} alt="The Couple" />
                    </div>
                </div>

                <div class="story-text">
                    <div>
                        <h2 class="story-title">{"Our Journey"}</h2>
                        <div class="story-rule"></div>
                    </div>
                    <div class="story-body">
                        <p>
                            <span class="story-quote">{"\""}</span>
                            {"In the middle of an ordinary life, love gives us a fairy tale. Across distance and time, destiny brought us together."}
                        </p>
                        <p>
                            {"What started as a simple conversation blossomed into a beautiful promise of forever. We invite you to be part of our happiest moment as we turn the page to a new chapter."}
                        </p>
                    </div>
                    <div>
                        <div class="story-signature">
                            <span class="name">{"Arpit"}</span>
                            <div class="amp">{"&"}</div>
                            <span class="name">{"Jyoti"}</span>
                        </div>
                        <p class="story-motto">{"Forever Begins Now"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
