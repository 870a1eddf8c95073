use yew::prelude::*;
use crate::components::contact_form::ContactForm;
use crate::components::fade_in::FadeInSection;
use crate::components::footer::Footer;
use crate::components::nav::{scroll_to_section, Nav};
use crate::components::network_graph::NetworkGraphBackground;

struct Service {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

static SERVICES: [Service; 3] = [
    Service {
        icon: "⚙",
        title: "Prozessoptimierung durch KI",
        text: "Unsere KI-gestützten Lösungen analysieren Ihre bestehenden Geschäftsprozesse und identifizieren Optimierungspotenziale. Durch intelligente Automatisierung steigern wir die Effizienz und reduzieren Fehlerquoten.",
    },
    Service {
        icon: "🛠",
        title: "Maßgeschneiderte Automatisierungslösungen",
        text: "Wir entwickeln individuelle Automatisierungslösungen, die perfekt auf Ihre Unternehmensanforderungen zugeschnitten sind. Unsere Systeme integrieren sich nahtlos in Ihre bestehende Infrastruktur.",
    },
    Service {
        icon: "📊",
        title: "Datengetriebene Entscheidungsunterstützung",
        text: "Unsere fortschrittlichen Analysewerkzeuge verwandeln Ihre Daten in wertvolle Erkenntnisse. Mit Machine Learning und prädiktiver Analytik unterstützen wir Ihre Entscheidungsfindung.",
    },
];

static HIGHLIGHTS: [(&str, &str); 3] = [
    ("🎓", "Akademische Expertise"),
    ("💼", "Umfangreiches Portfolio"),
    ("⏱", "Langjährige Erfahrung"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section("kontakt"));

    html! {
        <>
            <style>
            {r#"
                .hero {
                    position: relative;
                    z-index: 10;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 5rem 1rem;
                    text-align: center;
                }
                .hero h1 {
                    font-size: clamp(1.9rem, 5vw, 3.75rem);
                    font-weight: 700;
                    line-height: 1.2;
                    margin-bottom: 2rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                }
                .hero-note {
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    opacity: 0.8;
                }
                .landing-section {
                    position: relative;
                    z-index: 10;
                    padding: 5rem 1rem;
                }
                .landing-section h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .section-content {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    padding: 1.5rem;
                    border-radius: 12px;
                    text-align: center;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                }
                .theme-dark .service-card { background: #1f2937; }
                .theme-light .service-card { background: #fff; }
                .service-icon { font-size: 3rem; margin-bottom: 1rem; }
                .service-card h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .highlight {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    font-size: 1.125rem;
                    font-weight: 500;
                    margin-top: 1rem;
                }
                .team-image {
                    position: relative;
                }
                .team-image::before {
                    content: '';
                    position: absolute;
                    inset: 0;
                    border-radius: 8px;
                    background: linear-gradient(135deg, #7EB2FF, #1E90FF);
                    opacity: 0.2;
                    transform: rotate(3deg);
                }
                .team-image img {
                    position: relative;
                    width: 100%;
                    border-radius: 8px;
                }
                @media (max-width: 768px) {
                    .services-grid, .about-grid { grid-template-columns: 1fr; }
                    .hero { padding: 2.5rem 1rem; }
                }
            "#}
            </style>
            <NetworkGraphBackground />
            <Nav />

            <main class="hero">
                <FadeInSection>
                    <h1>{"KI-Optimierte & Automatisierte Geschäftsprozesse"}</h1>
                    <p class="hero-subtitle muted">
                        {"Wir revolutionieren Ihre Geschäftsprozesse durch KI und Automatisierung. Steigern Sie Effizienz, \
                          Qualität und Kundenzufriedenheit mit unseren maßgeschneiderten Lösungen."}
                    </p>
                    <button class="pill-button large" onclick={to_contact}>
                        {"Kostenlose Beratung →"}
                    </button>
                    <p class="hero-note">{"Wir entdecken neue Anwendungsfälle für Ihr Unternehmen."}</p>
                </FadeInSection>
            </main>

            <section id="leistungen" class="landing-section">
                <FadeInSection>
                    <div class="section-content">
                        <h2>{"Leistungen"}</h2>
                        <div class="services-grid">
                            { for SERVICES.iter().map(|service| html! {
                                <div class="service-card">
                                    <div class="service-icon">{service.icon}</div>
                                    <h3>{service.title}</h3>
                                    <p class="muted">{service.text}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </FadeInSection>
            </section>

            <section id="about" class="landing-section">
                <FadeInSection>
                    <div class="section-content">
                        <h2>{"Über uns"}</h2>
                        <div class="about-grid">
                            <div>
                                <h3>{"Unser Team"}</h3>
                                <p class="muted">
                                    {"AgentFlow verfügt über langjährige Erfahrung aus akademischer Laufbahn und unserem Portfolio. \
                                      Wir blicken auf jahrelange Erfahrungen in der Prozessmodellierung, -optimierung und Automatisierung zurück."}
                                </p>
                                { for HIGHLIGHTS.iter().map(|(icon, label)| html! {
                                    <div class="highlight">
                                        <span>{*icon}</span>
                                        <span>{*label}</span>
                                    </div>
                                }) }
                            </div>
                            <div class="team-image">
                                <img src="/images/team-at-work.jpg" alt="Team at work" width="600" height="400" />
                            </div>
                        </div>
                    </div>
                </FadeInSection>
            </section>

            <section id="kontakt" class="landing-section">
                <FadeInSection>
                    <div class="section-content">
                        <h2>{"Kontaktieren Sie uns"}</h2>
                        <ContactForm />
                    </div>
                </FadeInSection>
            </section>

            <Footer />
        </>
    }
}
