use yew::prelude::*;

const SERVICES: &[(&str, &str, &str)] = &[
    (
        "🎬",
        "Produção Audiovisual",
        "Gravação e edição de vídeos para marcas, artistas e eventos.",
    ),
    (
        "📈",
        "Marketing Digital",
        "Conteúdo e estratégia para redes sociais que fazem a sua marca crescer.",
    ),
    (
        "📷",
        "Fotografia",
        "Sessões fotográficas de produto, retrato e evento.",
    ),
    (
        "🎨",
        "Design",
        "Capas, flyers e identidade visual com impacto.",
    ),
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="servicos" class="services">
            <h2>{"O Que "}<span class="text-gradient">{"Fazemos"}</span></h2>
            <div class="services-grid">
                { for SERVICES.iter().map(|(icon, title, description)| html! {
                    <div class="service-card card-glass">
                        <span class="service-icon">{*icon}</span>
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .services {
                    padding: 8rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    text-align: center;
                }

                .services h2 {
                    font-size: clamp(2.5rem, 6vw, 3.75rem);
                    margin-bottom: 4rem;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }

                .service-card {
                    padding: 2rem;
                    border-radius: 16px;
                    text-align: left;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }

                .service-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(245, 176, 65, 0.3);
                }

                .service-icon {
                    font-size: 2rem;
                }

                .service-card h3 {
                    color: #F5B041;
                    margin: 1rem 0 0.5rem;
                }

                .service-card p {
                    color: #999;
                    line-height: 1.6;
                }

                @media (max-width: 768px) {
                    .services {
                        padding: 4rem 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
