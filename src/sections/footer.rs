use yew::prelude::*;

use crate::ambient::Glyph;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <style>
                {r#"
                    .footer {
                        position: relative;
                        z-index: 20;
                        padding: 6rem 1.5rem;
                        text-align: center;
                        background: linear-gradient(to top, var(--navy-950), var(--navy-900));
                        border-top: 1px solid rgba(212, 175, 55, 0.1);
                    }
                    .footer-heart {
                        display: flex;
                        justify-content: center;
                        margin-bottom: 2rem;
                        color: rgba(212, 175, 55, 0.2);
                    }
                    .footer-heart svg {
                        width: 3rem;
                        height: 3rem;
                    }
                    .footer-thanks {
                        font-family: var(--font-script);
                        font-size: clamp(3rem, 8vw, 4.5rem);
                        color: var(--gold-400);
                        margin: 0 0 2rem;
                    }
                    .footer-families {
                        font-family: var(--font-display);
                        font-size: 0.8rem;
                        letter-spacing: 0.4em;
                        text-transform: uppercase;
                        color: var(--gold-200);
                        opacity: 0.6;
                    }
                "#}
            </style>
            <div class="footer-heart">
                <svg viewBox="0 0 24 24" fill="currentColor"><path d={Glyph::Heart.path()} /></svg>
            </div>
            <p class="footer-thanks">{"Thank You"}</p>
            <p class="footer-families">{"The Sharma & Verma Families"}</p>
        </footer>
    }
}
