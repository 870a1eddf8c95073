use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};
use crate::Route;
use crate::state::ThemeContext;

/// Height of the header, section jumps land just below it.
const HEADER_OFFSET: f64 = 80.0;

pub fn scroll_to_section(section_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(section) = window
        .document()
        .and_then(|document| document.get_element_by_id(section_id))
    else {
        log::warn!("No section with id {}", section_id);
        return;
    };

    let top = section.get_bounding_client_rect().top()
        + window.page_y_offset().unwrap_or(0.0)
        - HEADER_OFFSET;
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    /// Legal pages only link back home instead of listing the landing sections.
    #[prop_or_default]
    pub legal: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let theme_ctx = use_context::<ThemeContext>();
    let theme = theme_ctx.as_ref().map(|t| **t).unwrap_or_default();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_theme = {
        let theme_ctx = theme_ctx.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(theme_ctx) = &theme_ctx {
                theme_ctx.set(theme_ctx.toggled());
            }
        })
    };

    let section_link = |section_id: &'static str, label: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(section_id);
            menu_open.set(false);
        });
        html! {
            <a href={format!("#{}", section_id)} class="nav-link" {onclick}>{label}</a>
        }
    };

    let menu_class = if *menu_open {
        "nav-menu mobile-menu-open"
    } else {
        "nav-menu"
    };

    html! {
        <header class="site-header">
            <style>
            {r#"
                .site-header {
                    position: relative;
                    z-index: 10;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem;
                }
                .site-header nav {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo img {
                    width: 120px;
                    height: 32px;
                }
                .nav-menu {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .theme-dark .nav-link { color: #d1d5db; }
                .theme-dark .nav-link:hover { color: #fff; }
                .theme-light .nav-link { color: #4b5563; }
                .theme-light .nav-link:hover { color: #000; }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.5rem;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .theme-toggle {
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.25rem;
                    padding: 0.5rem;
                    border-radius: 9999px;
                    cursor: pointer;
                }
                .theme-dark .theme-toggle:hover { background: #374151; }
                .theme-light .theme-toggle:hover { background: #e5e7eb; }
                @media (max-width: 768px) {
                    .burger-menu { display: block; }
                    .nav-menu {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem;
                        background: #000;
                    }
                    .nav-menu.mobile-menu-open { display: flex; }
                }
            "#}
            </style>
            <nav>
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src={theme.logo_src()} alt="AgentFlow Logo" />
                </Link<Route>>
                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-expanded={(*menu_open).to_string()}
                    aria-controls="main-menu"
                >
                    {"☰"}
                    <span class="sr-only">{"Toggle menu"}</span>
                </button>
                <div id="main-menu" class={menu_class}>
                    if props.legal {
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Startseite"}
                        </Link<Route>>
                    } else {
                        { section_link("leistungen", "01 LEISTUNGEN") }
                        { section_link("about", "02 ÜBER UNS") }
                        { section_link("kontakt", "03 KONTAKT") }
                        <button
                            class="pill-button"
                            onclick={Callback::from(|_: MouseEvent| scroll_to_section("kontakt"))}
                        >
                            {"Termin vereinbaren"}
                        </button>
                    }
                    <button
                        class="theme-toggle"
                        onclick={toggle_theme}
                        aria-label={theme.toggle_label()}
                    >
                        {theme.toggle_icon()}
                    </button>
                </div>
            </nav>
        </header>
    }
}
