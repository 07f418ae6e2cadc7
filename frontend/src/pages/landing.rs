use yew::prelude::*;

use crate::config;
use crate::pages::faq::Faq;
use crate::pages::hero::Hero;
use crate::pages::services::Services;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if window.location().hash().map(|hash| hash.is_empty()).unwrap_or(true) {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Hero />
            <Services />
            <Faq />

            <footer class="site-footer">
                <a class="footer-logo" href="#inicio">{config::SITE_NAME}</a>
                <a class="footer-link" href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                    {"@leaveyourmark.pt"}
                </a>
                <p class="footer-copy">
                    {format!("© {} {}. Todos os direitos reservados.", config::COPYRIGHT_YEAR, config::SITE_NAME)}
                </p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    color: #ffffff;
                    background: #0d0d0d;
                    overflow-x: hidden;
                }

                .text-gradient {
                    background: linear-gradient(45deg, #fff, #F5B041);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .card-glass {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(245, 176, 65, 0.1);
                }

                .site-footer {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 4rem 2rem;
                    border-top: 1px solid rgba(245, 176, 65, 0.1);
                }

                .footer-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    font-style: italic;
                    color: #fff;
                    text-decoration: none;
                }

                .footer-link {
                    color: #F5B041;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-link:hover {
                    color: #fff;
                }

                .footer-copy {
                    color: #666;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </div>
    }
}
