use yew::prelude::*;
use web_sys::{Element, Event};

use crate::config;
use crate::interaction::reveal::{glow_layer_style, RevealMask};
use crate::listener::pointer_client;

#[derive(Properties, PartialEq)]
pub struct RevealHeadlineProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub light_on: bool,
}

/// Headline drawn three times on top of each other: a dim base, a bright copy
/// visible only around the pointer and a glow copy lit by the pull cord.
#[function_component(RevealHeadline)]
pub fn reveal_headline(props: &RevealHeadlineProps) -> Html {
    let headline_ref = use_node_ref();
    let mask = use_state(|| RevealMask::new(config::REVEAL_RADIUS_PX));

    let track = {
        let mask = mask.clone();
        let headline_ref = headline_ref.clone();
        move |event: Event| {
            if let (Some(element), Some((x, y))) = (headline_ref.cast::<Element>(), pointer_client(&event)) {
                let rect = element.get_bounding_client_rect();
                let mut next = *mask;
                next.move_to(x - rect.left(), y - rect.top());
                mask.set(next);
            }
        }
    };

    let onmousemove = {
        let track = track.clone();
        Callback::from(move |e: MouseEvent| track(e.into()))
    };
    let ontouchmove = Callback::from(move |e: TouchEvent| track(e.into()));

    let hide = {
        let mask = mask.clone();
        Callback::from(move |_: Event| {
            let mut next = *mask;
            next.clear();
            mask.set(next);
        })
    };
    let onmouseleave = {
        let hide = hide.clone();
        Callback::from(move |e: MouseEvent| hide.emit(e.into()))
    };
    let ontouchend = Callback::from(move |e: TouchEvent| hide.emit(e.into()));

    html! {
        <>
            <h1
                ref={headline_ref}
                class={classes!("reveal-headline", mask.center().is_some().then(|| "revealing"))}
                {onmousemove}
                {onmouseleave}
                {ontouchmove}
                {ontouchend}
            >
                <span class="reveal-layer reveal-base">{&props.text}</span>
                <span class="reveal-layer reveal-bright" aria-hidden="true" style={mask.bright_layer_style()}>
                    {&props.text}
                </span>
                <span class="reveal-layer reveal-glow" aria-hidden="true" style={glow_layer_style(props.light_on)}>
                    {&props.text}
                </span>
            </h1>
            <style>
                {r#"
                .reveal-headline {
                    position: relative;
                    display: inline-block;
                    margin: 0;
                    font-size: clamp(3.5rem, 11vw, 8rem);
                    font-weight: 800;
                    font-style: italic;
                    line-height: 1.1;
                    cursor: default;
                    user-select: none;
                }

                .reveal-headline.revealing {
                    cursor: crosshair;
                }

                .reveal-layer {
                    display: block;
                }

                .reveal-base {
                    color: rgba(255, 255, 255, 0.15);
                }

                .reveal-bright,
                .reveal-glow {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }

                .reveal-bright {
                    background: linear-gradient(45deg, #fff, #F5B041);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .reveal-glow {
                    color: #F5B041;
                    text-shadow: 0 0 24px rgba(245, 176, 65, 0.8), 0 0 60px rgba(245, 176, 65, 0.5);
                }
                "#}
            </style>
        </>
    }
}
