//! Translation catalog and the locale context shared by the landing page.

use yew::prelude::*;

/// Languages the landing page ships translations and date formats for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    De,
    Es,
    Fr,
    It,
    Pt,
    Nl,
}

impl Language {
    /// Parse a BCP 47 tag such as `de`, `pt-BR` or `es_419`. Region subtags
    /// are ignored and unknown languages fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "de" => Self::De,
            "es" => Self::Es,
            "fr" => Self::Fr,
            "it" => Self::It,
            "pt" => Self::Pt,
            "nl" => Self::Nl,
            _ => Self::En,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::It => "it",
            Self::Pt => "pt",
            Self::Nl => "nl",
        }
    }
}

/// Look up `key` for `language`, falling back to English and then to the key
/// itself so a missing string is visible rather than blank.
pub fn resolve(language: Language, key: &str) -> String {
    lookup(catalog(language), key)
        .or_else(|| lookup(catalog(Language::En), key))
        .unwrap_or(key)
        .to_string()
}

fn lookup(
    catalog: &'static [(&'static str, &'static str)],
    key: &str,
) -> Option<&'static str> {
    catalog
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}

fn catalog(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::En => EN,
        Language::De => DE,
        Language::Es => ES,
        Language::Fr => FR,
        Language::It => IT,
        Language::Pt => PT,
        Language::Nl => NL,
    }
}

const EN: &[(&str, &str)] = &[
    ("loading", "Loading..."),
    (
        "loading-error-try-again-later",
        "Unable to load data. Try again later.",
    ),
    (
        "page-index:community-events-content-heading",
        "Get involved with the community",
    ),
    (
        "page-index:community-events-content-1",
        "Join our monthly community calls for updates on development and \
         news from across the ecosystem. Ask questions, share ideas and \
         give feedback.",
    ),
    (
        "page-index:community-events-content-2",
        "Calls are open to everyone. Add the next one to your calendar or \
         say hello on Discord in the meantime.",
    ),
    (
        "page-index:community-events-no-events-planned",
        "No events planned",
    ),
    (
        "page-index:community-events-add-to-calendar",
        "Add to calendar",
    ),
    ("page-index:community-events-upcoming-calls", "Upcoming calls"),
    ("page-index:community-events-previous-calls", "Previous calls"),
    (
        "page-index:community-events-no-upcoming-calls",
        "No upcoming calls",
    ),
    (
        "page-index:community-events-there-are-no-past-calls",
        "There are no past calls",
    ),
];

const DE: &[(&str, &str)] = &[
    ("loading", "Wird geladen..."),
    (
        "loading-error-try-again-later",
        "Daten konnten nicht geladen werden. Bitte später erneut versuchen.",
    ),
    (
        "page-index:community-events-content-heading",
        "Mach mit in der Community",
    ),
    (
        "page-index:community-events-content-1",
        "Nimm an unseren monatlichen Community-Calls teil und erfahre \
         Neuigkeiten zur Entwicklung und aus dem Ökosystem.",
    ),
    (
        "page-index:community-events-content-2",
        "Die Calls sind offen für alle. Trag den nächsten in deinen Kalender \
         ein oder sag auf Discord Hallo.",
    ),
    (
        "page-index:community-events-no-events-planned",
        "Keine Veranstaltungen geplant",
    ),
    (
        "page-index:community-events-add-to-calendar",
        "Zum Kalender hinzufügen",
    ),
    ("page-index:community-events-upcoming-calls", "Kommende Calls"),
    ("page-index:community-events-previous-calls", "Vergangene Calls"),
    (
        "page-index:community-events-no-upcoming-calls",
        "Keine kommenden Calls",
    ),
    (
        "page-index:community-events-there-are-no-past-calls",
        "Es gibt keine vergangenen Calls",
    ),
];

const ES: &[(&str, &str)] = &[
    ("loading", "Cargando..."),
    (
        "loading-error-try-again-later",
        "No se pudieron cargar los datos. Inténtalo más tarde.",
    ),
    (
        "page-index:community-events-content-heading",
        "Participa en la comunidad",
    ),
    (
        "page-index:community-events-content-1",
        "Únete a nuestras llamadas mensuales para conocer las novedades del \
         desarrollo y del ecosistema.",
    ),
    (
        "page-index:community-events-content-2",
        "Las llamadas están abiertas a todos. Añade la próxima a tu \
         calendario o saluda en Discord.",
    ),
    (
        "page-index:community-events-no-events-planned",
        "No hay eventos planeados",
    ),
    (
        "page-index:community-events-add-to-calendar",
        "Añadir al calendario",
    ),
    ("page-index:community-events-upcoming-calls", "Próximas llamadas"),
    (
        "page-index:community-events-previous-calls",
        "Llamadas anteriores",
    ),
    (
        "page-index:community-events-no-upcoming-calls",
        "No hay próximas llamadas",
    ),
    (
        "page-index:community-events-there-are-no-past-calls",
        "No hay llamadas anteriores",
    ),
];

const FR: &[(&str, &str)] = &[
    ("loading", "Chargement..."),
    (
        "loading-error-try-again-later",
        "Impossible de charger les données. Réessayez plus tard.",
    ),
    (
        "page-index:community-events-no-events-planned",
        "Aucun événement prévu",
    ),
    (
        "page-index:community-events-add-to-calendar",
        "Ajouter au calendrier",
    ),
    ("page-index:community-events-upcoming-calls", "Appels à venir"),
    ("page-index:community-events-previous-calls", "Appels précédents"),
    (
        "page-index:community-events-no-upcoming-calls",
        "Aucun appel à venir",
    ),
    (
        "page-index:community-events-there-are-no-past-calls",
        "Il n'y a pas d'appels précédents",
    ),
];

const IT: &[(&str, &str)] = &[
    ("loading", "Caricamento..."),
    (
        "page-index:community-events-add-to-calendar",
        "Aggiungi al calendario",
    ),
];

const PT: &[(&str, &str)] = &[
    ("loading", "Carregando..."),
    (
        "page-index:community-events-add-to-calendar",
        "Adicionar ao calendário",
    ),
];

const NL: &[(&str, &str)] = &[
    ("loading", "Laden..."),
    (
        "page-index:community-events-add-to-calendar",
        "Toevoegen aan agenda",
    ),
];

/// The active language, provided once near the root of the app.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocaleContext {
    pub language: Language,
}

/// Read the browser's preferred language, defaulting to English.
pub fn browser_language() -> Language {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map(|tag| Language::from_tag(&tag))
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct LocaleProviderProps {
    /// Overrides the browser language when set.
    #[prop_or_default]
    pub language: Option<Language>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn LocaleProvider(props: &LocaleProviderProps) -> Html {
    let context = LocaleContext {
        language: props.language.unwrap_or_else(browser_language),
    };

    html! {
        <ContextProvider<LocaleContext> {context}>
            {props.children.clone()}
        </ContextProvider<LocaleContext>>
    }
}

/// The language from the nearest [`LocaleProvider`], or English outside one.
#[hook]
pub fn use_language() -> Language {
    use_context::<LocaleContext>()
        .map(|context| context.language)
        .unwrap_or_default()
}
