use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::components::footer::Footer;
use crate::components::nav::Nav;

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub title: AttrValue,
    pub children: Children,
}

/// Shared frame of the imprint and privacy pages.
#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.title.clone(),
        );
    }

    html! {
        <>
            <style>
            {r#"
                .legal-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 2rem 1rem;
                }
                .back-link {
                    display: inline-flex;
                    align-items: center;
                    margin-bottom: 1.5rem;
                    text-decoration: none;
                }
                .back-link:hover { text-decoration: underline; }
                .theme-dark .back-link { color: #7EB2FF; }
                .theme-light .back-link { color: #2563eb; }
                .legal-content h1 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }
                .legal-card {
                    padding: 1.5rem;
                    border-radius: 8px;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .theme-dark .legal-card { background: #1f2937; }
                .theme-light .legal-card { background: #fff; }
                .legal-card h2 { font-size: 1.5rem; font-weight: 600; margin-bottom: 1rem; }
                .legal-card h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }
                .legal-card h4 { font-size: 1.125rem; font-weight: 600; margin-bottom: 0.5rem; }
                .legal-card p { margin-bottom: 1rem; line-height: 1.6; }
            "#}
            </style>
            <Nav legal={true} />
            <main class="legal-content">
                <Link<Route> to={Route::Home} classes={classes!("back-link")}>
                    {"← Zurück zur Startseite"}
                </Link<Route>>
                <h1>{props.title.clone()}</h1>
                <div class="legal-card">
                    { for props.children.iter() }
                </div>
            </main>
            <Footer />
        </>
    }
}
