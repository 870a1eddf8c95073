use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod graph;
mod state;
mod components {
    pub mod contact_form;
    pub mod fade_in;
    pub mod footer;
    pub mod nav;
    pub mod network_graph;
}
mod pages {
    pub mod datenschutz;
    pub mod impressum;
    pub mod landing;
    pub mod legal;
}

use pages::{
    datenschutz::Datenschutz,
    impressum::Impressum,
    landing::Landing,
};
use state::{Theme, ThemeContext};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/impressum")]
    Impressum,
    #[at("/datenschutz")]
    Datenschutz,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Impressum => {
            info!("Rendering Impressum page");
            html! { <Impressum /> }
        },
        Route::Datenschutz => {
            info!("Rendering Datenschutz page");
            html! { <Datenschutz /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Seite nicht gefunden"}</h1>
                    <Link<Route> to={Route::Home}>{"Zurück zur Startseite"}</Link<Route>>
                </div>
            }
        },
    }
}


#[function_component]
fn App() -> Html {
    let theme: ThemeContext = use_state(Theme::default);

    // mirror the theme on <html> and keep the page from scrolling sideways
    {
        use_effect_with_deps(move |theme: &Theme| {
            let document = web_sys::window().and_then(|w| w.document());
            if let Some(root) = document.as_ref().and_then(|d| d.document_element()) {
                let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
            }
            let body = document.as_ref().and_then(|d| d.body());
            if let Some(body) = &body {
                let _ = body.style().set_property("overflow-x", "hidden");
            }
            move || {
                if let Some(body) = body {
                    let _ = body.style().set_property("overflow-x", "auto");
                }
            }
        }, *theme);
    }

    html! {
        <ContextProvider<ThemeContext> context={theme.clone()}>
            <div class={theme.page_class()}>
                <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: 'Manrope', 'Inter', sans-serif;
                    }
                    .page {
                        min-height: 100vh;
                        position: relative;
                        overflow-x: hidden;
                        transition: background-color 0.3s ease, color 0.3s ease;
                    }
                    .page.theme-dark { background: #000; color: #fff; }
                    .page.theme-light { background: #fff; color: #000; }
                    .theme-dark .muted { color: #d1d5db; }
                    .theme-light .muted { color: #4b5563; }
                    .pill-button {
                        border: none;
                        border-radius: 9999px;
                        padding: 0.5rem 1.25rem;
                        font: inherit;
                        cursor: pointer;
                        transition: background-color 0.2s ease;
                    }
                    .pill-button.large { font-size: 1.125rem; padding: 0.75rem 2rem; }
                    .theme-dark .pill-button { background: #fff; color: #000; }
                    .theme-dark .pill-button:hover { background: #e5e7eb; }
                    .theme-light .pill-button { background: #000; color: #fff; }
                    .theme-light .pill-button:hover { background: #1f2937; }
                    .fade-in { opacity: 0; transition: opacity 1s ease; }
                    .fade-in.visible { opacity: 1; }
                    .sr-only {
                        position: absolute;
                        width: 1px;
                        height: 1px;
                        overflow: hidden;
                        clip: rect(0, 0, 0, 0);
                        white-space: nowrap;
                    }
                    .not-found {
                        min-height: 60vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                    }
                    .not-found a { color: inherit; }
                "#}
                </style>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </div>
        </ContextProvider<ThemeContext>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
