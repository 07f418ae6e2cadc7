use yew::prelude::*;

use crate::components::pull_cord::PullCord;
use crate::components::reveal_headline::RevealHeadline;
use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    let light_on = use_state(|| false);

    let on_change = {
        let light_on = light_on.clone();
        Callback::from(move |on: bool| light_on.set(on))
    };

    html! {
        <section id="inicio" class={classes!("hero", (*light_on).then(|| "lit"))}>
            <div class="hero-background">
                <div class="hero-blob blob-left"></div>
                <div class="hero-blob blob-right"></div>
                <div class="hero-blob blob-center"></div>
            </div>

            <PullCord {on_change} />

            <div class="hero-content">
                <RevealHeadline text={config::HEADLINE} light_on={*light_on} />
                <div class="hero-divider"></div>
                <p class="hero-subtitle">{config::TAGLINE}</p>
                <div class="hero-actions">
                    <a class="hero-cta" href="#servicos">
                        {"Começe Agora"}
                        <span class="hero-cta-arrow">{"→"}</span>
                    </a>
                    <a class="hero-secondary" href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                        {"Instagram"}
                    </a>
                </div>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-dot"></div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: radial-gradient(ellipse at top, #1f1a12 0%, #0d0d0d 70%);
                    transition: background 0.6s ease;
                }

                .hero.lit {
                    background: radial-gradient(ellipse at top, #3a2a10 0%, #111 70%);
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }

                .hero-blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    background: rgba(245, 176, 65, 0.1);
                }

                .blob-left {
                    top: 25%;
                    left: 25%;
                    width: 600px;
                    height: 600px;
                }

                .blob-right {
                    bottom: 25%;
                    right: 25%;
                    width: 600px;
                    height: 600px;
                }

                .blob-center {
                    top: 50%;
                    left: 50%;
                    width: 800px;
                    height: 800px;
                    transform: translate(-50%, -50%);
                    background: rgba(245, 176, 65, 0.05);
                }

                .hero-content {
                    position: relative;
                    z-index: 2;
                    max-width: 1100px;
                    padding: 0 1rem;
                    text-align: center;
                }

                .hero-divider {
                    width: 8rem;
                    height: 4px;
                    margin: 1.5rem auto;
                    border-radius: 999px;
                    background: linear-gradient(to right, #F5B041, rgba(245, 176, 65, 0.5));
                }

                .hero-subtitle {
                    font-size: clamp(1.5rem, 3vw, 2.25rem);
                    font-weight: 300;
                    color: #999;
                    max-width: 48rem;
                    margin: 0 auto;
                    line-height: 1.5;
                }

                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                    padding-top: 3rem;
                }

                .hero-cta,
                .hero-secondary {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1.25rem 2rem;
                    border-radius: 12px;
                    font-size: 1.1rem;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .hero-cta {
                    background: #F5B041;
                    color: #111;
                    box-shadow: 0 0 32px rgba(245, 176, 65, 0.35);
                }

                .hero-cta:hover {
                    background: rgba(245, 176, 65, 0.9);
                }

                .hero-cta-arrow {
                    transition: transform 0.3s ease;
                }

                .hero-cta:hover .hero-cta-arrow {
                    transform: translateX(4px);
                }

                .hero-secondary {
                    border: 1px solid rgba(245, 176, 65, 0.5);
                    color: #fff;
                }

                .hero-secondary:hover {
                    background: rgba(245, 176, 65, 0.1);
                }

                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 24px;
                    height: 40px;
                    border: 2px solid rgba(245, 176, 65, 0.5);
                    border-radius: 999px;
                    display: flex;
                    justify-content: center;
                    padding: 8px;
                    animation: bounce 1.5s infinite;
                }

                .scroll-dot {
                    width: 4px;
                    height: 12px;
                    border-radius: 999px;
                    background: #F5B041;
                    animation: pulse 2s infinite;
                }

                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, -25%); }
                }

                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }
                "#}
            </style>
        </section>
    }
}
