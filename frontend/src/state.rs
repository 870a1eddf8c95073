use yew::{hook, use_context, UseStateHandle};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class on the outermost page wrapper, the page stylesheets key off it.
    pub fn page_class(self) -> &'static str {
        match self {
            Theme::Dark => "page theme-dark",
            Theme::Light => "page theme-light",
        }
    }

    pub fn logo_src(self) -> &'static str {
        match self {
            Theme::Dark => "/images/logo-dark.svg",
            Theme::Light => "/images/logo-light.svg",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light mode",
            Theme::Light => "Switch to dark mode",
        }
    }

    /// Icon shown on the toggle: the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }

    /// Base rgb for the background graph, alpha is chosen per element.
    pub fn ink(self) -> (u8, u8, u8) {
        match self {
            Theme::Dark => (255, 255, 255),
            Theme::Light => (0, 0, 0),
        }
    }
}

/// Shared through a `ContextProvider` so every route sees the same theme.
pub type ThemeContext = UseStateHandle<Theme>;

/// Current theme for components that only read it.
#[hook]
pub fn use_theme() -> Theme {
    use_context::<ThemeContext>()
        .map(|t| *t)
        .unwrap_or_default()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Outcome of a finished request. Only the ok flag matters, the body is never read.
    pub fn from_response_ok(ok: bool) -> Self {
        if ok {
            SubmissionStatus::Success
        } else {
            SubmissionStatus::Error
        }
    }

    pub fn is_submitting(self) -> bool {
        self == SubmissionStatus::Submitting
    }

    pub fn button_label(self) -> &'static str {
        if self.is_submitting() {
            "Wird gesendet..."
        } else {
            "Nachricht senden"
        }
    }

    pub fn feedback(self) -> Option<(&'static str, &'static str)> {
        match self {
            SubmissionStatus::Success => Some((
                "form-feedback success",
                "Ihre Nachricht wurde erfolgreich gesendet!",
            )),
            SubmissionStatus::Error => Some((
                "form-feedback error",
                "Es gab einen Fehler beim Senden Ihrer Nachricht. Bitte versuchen Sie es später erneut.",
            )),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}

/// Options of the "Bereich" radio group on the contact form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactArea {
    #[default]
    Vermietung,
    Unternehmen,
    SocialMedia,
    Sonstiges,
}

impl ContactArea {
    pub const ALL: [ContactArea; 4] = [
        ContactArea::Vermietung,
        ContactArea::Unternehmen,
        ContactArea::SocialMedia,
        ContactArea::Sonstiges,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ContactArea::Vermietung => "vermietung",
            ContactArea::Unternehmen => "unternehmen",
            ContactArea::SocialMedia => "social-media",
            ContactArea::Sonstiges => "sonstiges",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactArea::Vermietung => "Vermietung",
            ContactArea::Unternehmen => "Unternehmen",
            ContactArea::SocialMedia => "Social Media",
            ContactArea::Sonstiges => "Sonstiges",
        }
    }
}
