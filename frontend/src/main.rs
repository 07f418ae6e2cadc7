use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::{Event, MouseEvent};

mod config;
mod listener;
mod interaction {
    pub mod accordion;
    pub mod cord;
    pub mod reveal;
    pub mod wave;
}
mod components {
    pub mod pull_cord;
    pub mod reveal_headline;
}
mod pages {
    pub mod faq;
    pub mod hero;
    pub mod landing;
    pub mod services;
}

use listener::ScopedListener;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#inicio", "Início"),
    ("#servicos", "Serviços"),
    ("#faq", "FAQ"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let mut last = false;
            let listener = ScopedListener::window("scroll", move |_: Event| {
                if let Some(scroll_y) = web_sys::window().and_then(|window| window.scroll_y().ok()) {
                    let scrolled = scroll_y > config::NAV_SCROLL_THRESHOLD_PX;
                    if scrolled != last {
                        last = scrolled;
                        is_scrolled.set(scrolled);
                    }
                }
            });
            if let Err(err) = &listener {
                gloo_console::error!("Failed to listen for scroll:", err.clone());
            }

            move || drop(listener)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Links are in-page anchors, so the default navigation must still happen.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#inicio" class="nav-logo">{config::SITE_NAME}</a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <a
                        href={config::INSTAGRAM_URL}
                        class="nav-cta"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Instagram"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    transition: background 0.3s ease, backdrop-filter 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(13, 13, 13, 0.85);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(245, 176, 65, 0.1);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1.25rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    color: #fff;
                    font-weight: 700;
                    font-style: italic;
                    font-size: 1.25rem;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    color: #ccc;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: #F5B041;
                }

                .nav-cta {
                    padding: 0.5rem 1.25rem;
                    border: 1px solid rgba(245, 176, 65, 0.5);
                    border-radius: 8px;
                    color: #fff;
                    text-decoration: none;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(13, 13, 13, 0.95);
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
