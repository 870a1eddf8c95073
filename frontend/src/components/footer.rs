use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
            {r#"
                .site-footer {
                    position: relative;
                    z-index: 10;
                    padding: 4rem 1rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .footer-grid h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .footer-grid ul {
                    list-style: none;
                    padding: 0;
                }
                .footer-grid li { margin-bottom: 0.5rem; }
                .site-footer a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .theme-dark .site-footer { background: #000; color: #d1d5db; }
                .theme-dark .site-footer h3 { color: #fff; }
                .theme-dark .site-footer a:hover { color: #fff; }
                .theme-light .site-footer { background: #fff; color: #000; }
                .theme-light .site-footer a:hover { color: #4b5563; }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 2rem auto 0;
                    padding-top: 2rem;
                    text-align: center;
                    border-top: 1px solid;
                }
                .theme-dark .footer-bottom { border-color: #1f2937; }
                .theme-light .footer-bottom { border-color: #e5e7eb; }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
            "#}
            </style>
            <div class="footer-grid">
                <div>
                    <h3>{"Kontakt"}</h3>
                    <p>
                        {format!("Email: {}", config::CONTACT_EMAIL)}<br />
                        {format!("Adresse: {}", config::CONTACT_ADDRESS)}
                    </p>
                </div>
                <div>
                    <h3>{"Links"}</h3>
                    <ul>
                        <li>
                            <Link<Route> to={Route::Impressum}>{"Impressum"}</Link<Route>>
                        </li>
                        <li>
                            <Link<Route> to={Route::Datenschutz}>{"Datenschutzerklärung"}</Link<Route>>
                        </li>
                    </ul>
                </div>
                <div>
                    <h3>{"Folgen Sie uns"}</h3>
                    <a href={config::INSTAGRAM_URL} aria-label="Instagram" target="_blank" rel="noopener noreferrer">
                        {"Instagram"}
                    </a>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} AgentFlow. Alle Rechte vorbehalten.", year)}</p>
            </div>
        </footer>
    }
}
