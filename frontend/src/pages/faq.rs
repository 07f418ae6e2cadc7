use yew::prelude::*;
use web_sys::Event;

use crate::interaction::accordion::{index_from_hash, item_id, AccordionAction, AccordionState};
use crate::listener::ScopedListener;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Quais serviços vocês oferecem?",
        answer: "Oferecemos produção audiovisual, marketing digital, fotografia e design. Desde gravação e edição de vídeos até criação de conteúdo para redes sociais, sessões fotográficas e design de capas e flyers.",
    },
    FaqEntry {
        question: "Quanto tempo demora um projeto?",
        answer: "O tempo varia conforme o projeto. Vídeos simples podem ficar prontos em 1-2 dias, enquanto projetos mais complexos podem levar uma semana ou mais. Sempre priorizamos qualidade e rapidez na entrega.",
    },
    FaqEntry {
        question: "Como funciona o processo de orçamento?",
        answer: "Entre em contato conosco pelo WhatsApp ou e-mail com detalhes do seu projeto. Analisamos suas necessidades e enviamos um orçamento personalizado em até 24 horas.",
    },
    FaqEntry {
        question: "Vocês trabalham com que tipo de clientes?",
        answer: "Trabalhamos com marcas, artistas, empresas e empreendedores que buscam destacar-se no mercado digital através de conteúdo de qualidade e estratégias eficazes.",
    },
    FaqEntry {
        question: "Posso solicitar alterações no trabalho final?",
        answer: "Sim! Incluímos revisões no nosso processo para garantir que o resultado final esteja alinhado com suas expectativas e objetivos.",
    },
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: AttrValue,
    open: bool,
    on_toggle: Callback<usize>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    let id = item_id(props.index);
    let answer_id = format!("{}-answer", id);

    html! {
        <div id={id} class={classes!("faq-item", "card-glass", props.open.then(|| "open"))}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={props.open.to_string()}
                aria-controls={answer_id.clone()}
            >
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div id={answer_id} class="faq-answer" role="region">
                { for props.children.iter() }
            </div>
        </div>
    }
}

fn open_from_location(dispatcher: &UseReducerDispatcher<AccordionState>) {
    let hash = web_sys::window().and_then(|window| window.location().hash().ok());
    if let Some(index) = hash.as_deref().and_then(index_from_hash) {
        log::debug!("Opening FAQ entry {} from URL", index);
        dispatcher.dispatch(AccordionAction::Open(index));
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_reducer(|| AccordionState::new(FAQ_ENTRIES.len()));

    // `#item-N` links open the matching entry, on load and on hash change.
    {
        let dispatcher = accordion.dispatcher();
        use_effect_with_deps(
            move |_| {
                open_from_location(&dispatcher);
                let listener = ScopedListener::window("hashchange", move |_: Event| {
                    open_from_location(&dispatcher);
                });
                if let Err(err) = &listener {
                    gloo_console::error!("Failed to listen for hash changes:", err.clone());
                }
                move || drop(listener)
            },
            (),
        );
    }

    let on_toggle = {
        let dispatcher = accordion.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(AccordionAction::Toggle(index)))
    };

    html! {
        <section id="faq" class="faq-section">
            <h2>{"Perguntas "}<span class="text-gradient">{"Frequentes"}</span></h2>

            <div class="faq-list">
                { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| html! {
                    <FaqItem
                        key={index}
                        {index}
                        question={entry.question}
                        open={accordion.is_open(index)}
                        on_toggle={on_toggle.clone()}
                    >
                        <p>{entry.answer}</p>
                    </FaqItem>
                }) }
            </div>

            <style>
                {r#"
                .faq-section {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 8rem 2rem;
                }

                .faq-section h2 {
                    font-size: clamp(2.5rem, 6vw, 3.75rem);
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .faq-item {
                    border-radius: 16px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(245, 176, 65, 0.3);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem 2rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.2rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    transition: color 0.3s ease;
                }

                .faq-question:hover {
                    color: #F5B041;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #F5B041;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 2rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 2rem 1.5rem;
                }

                .faq-answer p {
                    color: #999;
                    font-size: 1.05rem;
                    line-height: 1.6;
                    margin: 0;
                }

                @media (max-width: 768px) {
                    .faq-section {
                        padding: 4rem 1rem;
                    }

                    .faq-question {
                        font-size: 1.1rem;
                        padding: 1rem;
                    }

                    .faq-answer,
                    .faq-item.open .faq-answer {
                        padding-left: 1rem;
                        padding-right: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_fixed_entries() {
        assert_eq!(FAQ_ENTRIES.len(), 5);
        assert_eq!(FAQ_ENTRIES[0].question, "Quais serviços vocês oferecem?");
        assert_eq!(FAQ_ENTRIES[4].question, "Posso solicitar alterações no trabalho final?");
        assert!(FAQ_ENTRIES[2].answer.contains("24 horas"));
    }

    #[test]
    fn every_entry_is_a_question_with_an_answer() {
        for entry in FAQ_ENTRIES {
            assert!(entry.question.ends_with('?'), "{}", entry.question);
            assert!(!entry.answer.trim().is_empty());
        }
    }

    #[test]
    fn expanding_each_entry_keeps_one_open() {
        let mut state = AccordionState::new(FAQ_ENTRIES.len());
        for index in 0..FAQ_ENTRIES.len() {
            state.toggle(index);
            let open = (0..FAQ_ENTRIES.len()).filter(|&i| state.is_open(i)).count();
            assert_eq!(open, 1);
            assert_eq!(state.open_index(), Some(index));
        }
    }
}
