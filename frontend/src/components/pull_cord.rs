use gloo_timers::callback::Interval;
use web_sys::{Element, Event};
use yew::prelude::*;

use crate::config;
use crate::interaction::cord::{CordAction, CordConfig, CordState, GesturePolicy};
use crate::interaction::wave::{cord_path, should_animate, CordGeometry, WaveAction, WaveState};
use crate::listener::{pointer_client_y, ScopedListener};

#[derive(Properties, PartialEq)]
pub struct PullCordProps {
    #[prop_or_else(config::cord_config)]
    pub config: CordConfig,
    /// Called with the new light state whenever a pull flips it.
    #[prop_or_default]
    pub on_change: Callback<bool>,
}

#[function_component(PullCord)]
pub fn pull_cord(props: &PullCordProps) -> Html {
    let cord = {
        let config = props.config;
        use_reducer(move || CordState::new(config))
    };
    let wave = use_reducer(WaveState::default);
    let hovered = use_state(|| false);
    let handle_ref = use_node_ref();
    let geometry = CordGeometry::default();

    // Moves and releases can land anywhere on the page once a drag started,
    // so they are tracked on the window while the cord is mounted.
    {
        let dispatcher = cord.dispatcher();
        use_effect_with_deps(
            move |_| {
                let on_move = {
                    let dispatcher = dispatcher.clone();
                    move |event: Event| {
                        if let Some(y) = pointer_client_y(&event) {
                            dispatcher.dispatch(CordAction::Move(y));
                        }
                    }
                };
                let on_release = move |_: Event| dispatcher.dispatch(CordAction::Release);

                let listeners = ScopedListener::window_many(&["mousemove", "touchmove"], on_move).and_then(|mut listeners| {
                    listeners.extend(ScopedListener::window_many(&["mouseup", "touchend", "touchcancel"], on_release)?);
                    Ok(listeners)
                });
                let listeners = match listeners {
                    Ok(listeners) => listeners,
                    Err(err) => {
                        gloo_console::error!("Failed to attach pull cord listeners:", err);
                        Vec::new()
                    }
                };

                move || drop(listeners)
            },
            (),
        );
    }

    {
        let on_change = props.on_change.clone();
        use_effect_with_deps(
            move |light_on| {
                on_change.emit(*light_on);
                || ()
            },
            cord.light_on(),
        );
    }

    {
        let dispatcher = wave.dispatcher();
        use_effect_with_deps(
            move |&(dragging, offset)| {
                dispatcher.dispatch(WaveAction::Track { dragging, offset });
                || ()
            },
            (cord.is_dragging(), cord.offset()),
        );
    }

    // Touch presses cancel the emulated mouse events that would follow, which
    // needs a non-passive listener on the handle.
    {
        let dispatcher = cord.dispatcher();
        let handle_ref = handle_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = handle_ref.cast::<Element>().map(|handle| {
                    ScopedListener::non_passive(&handle, "touchstart", move |event: Event| {
                        event.prevent_default();
                        if let Some(y) = pointer_client_y(&event) {
                            dispatcher.dispatch(CordAction::Press(y));
                        }
                    })
                });
                if let Some(Err(err)) = &listener {
                    gloo_console::error!("Failed to attach pull cord touch listener:", err.clone());
                }
                move || drop(listener)
            },
            (),
        );
    }

    {
        let dispatcher = wave.dispatcher();
        let active = should_animate(*hovered, cord.is_dragging(), wave.is_returning());
        use_effect_with_deps(
            move |active| {
                let interval = active.then(|| {
                    Interval::new(config::WAVE_TICK_MS, move || dispatcher.dispatch(WaveAction::Tick))
                });
                move || drop(interval)
            },
            active,
        );
    }

    let onmousedown = {
        let cord = cord.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cord.dispatch(CordAction::Press(e.client_y() as f64));
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let offset = if cord.is_dragging() {
        cord.offset()
    } else {
        wave.return_offset().unwrap_or(0.0)
    };
    let path = cord_path(&geometry, offset, cord.progress(), wave.phase());
    let handle_y = geometry.handle_y(offset);
    let height = geometry.handle_y(cord.config().max()) + 30.0;
    let threshold_y = geometry.handle_y(cord.config().threshold());
    let latched = cord.config().policy() == GesturePolicy::Latch && cord.light_on();

    html! {
        <div
            class={classes!(
                "pull-cord",
                cord.is_dragging().then(|| "dragging"),
                cord.light_on().then(|| "lit"),
                latched.then(|| "latched"),
            )}
            {onmouseenter}
            {onmouseleave}
        >
            <svg
                width="60"
                height={height.to_string()}
                viewBox={format!("0 0 60 {}", height)}
                role="img"
                aria-label="Puxe a corda para acender a luz"
            >
                <line
                    class="cord-threshold"
                    x1="18"
                    x2="42"
                    y1={format!("{:.2}", threshold_y)}
                    y2={format!("{:.2}", threshold_y)}
                />
                <path class="cord-line" d={path} />
                <g
                    ref={handle_ref}
                    class="cord-handle"
                    transform={format!("translate({} {:.2})", geometry.anchor_x, handle_y)}
                    {onmousedown}
                >
                    <circle r="14" class="cord-handle-hit" />
                    <circle r="8" class="cord-handle-knob" />
                </g>
            </svg>
            <style>
                {r#"
                .pull-cord {
                    position: absolute;
                    top: 0;
                    right: 12%;
                    z-index: 5;
                    touch-action: none;
                }

                .cord-line {
                    fill: none;
                    stroke: rgba(255, 255, 255, 0.6);
                    stroke-width: 2;
                    stroke-linecap: round;
                }

                .cord-threshold {
                    stroke: rgba(245, 176, 65, 0.25);
                    stroke-width: 1;
                    stroke-dasharray: 2 3;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .pull-cord.dragging .cord-threshold {
                    opacity: 1;
                }

                .cord-handle {
                    cursor: grab;
                }

                .pull-cord.latched .cord-handle {
                    cursor: default;
                    pointer-events: none;
                }

                .pull-cord.dragging .cord-handle {
                    cursor: grabbing;
                }

                .cord-handle-hit {
                    fill: transparent;
                }

                .cord-handle-knob {
                    fill: #ddd;
                    transition: fill 0.3s ease, filter 0.3s ease;
                }

                .pull-cord.lit .cord-handle-knob {
                    fill: #F5B041;
                    filter: drop-shadow(0 0 8px rgba(245, 176, 65, 0.9));
                }

                @media (max-width: 768px) {
                    .pull-cord {
                        right: 6%;
                    }
                }
                "#}
            </style>
        </div>
    }
}
