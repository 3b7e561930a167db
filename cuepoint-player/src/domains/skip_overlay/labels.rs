//! Localized text for the ask-to-skip badge.

const FALLBACK_LOCALE: &str = "en";

const ASK_TO_SKIP: &[(&str, &str)] = &[
    ("en", "Press select to skip"),
    ("de", "Zum Überspringen Auswahl drücken"),
    ("es", "Pulsa seleccionar para saltar"),
    ("fr", "Appuyez sur sélection pour passer"),
    ("it", "Premi seleziona per saltare"),
    ("nl", "Druk op selecteren om over te slaan"),
    ("pt", "Pressione selecionar para pular"),
    ("pt-br", "Aperte selecionar para pular"),
    ("sv", "Tryck på välj för att hoppa över"),
];

/// Label for `locale`, trying the full tag, then its language subtag, then
/// English. Accepts `pt-BR`, `pt_BR` and `pt`.
pub fn ask_to_skip_label(locale: &str) -> &'static str {
    let normalized = locale.trim().replace('_', "-").to_ascii_lowercase();
    let language = normalized.split('-').next().unwrap_or_default();

    lookup(&normalized)
        .or_else(|| lookup(language))
        .or_else(|| lookup(FALLBACK_LOCALE))
        .unwrap_or("Skip")
}

fn lookup(tag: &str) -> Option<&'static str> {
    ASK_TO_SKIP
        .iter()
        .find(|(candidate, _)| *candidate == tag)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_specific_label_wins() {
        assert_eq!(ask_to_skip_label("pt_BR"), "Aperte selecionar para pular");
        assert_eq!(
            ask_to_skip_label("pt-PT"),
            "Pressione selecionar para pular"
        );
    }

    #[test]
    fn falls_back_to_language_then_english() {
        assert_eq!(
            ask_to_skip_label("DE-at"),
            "Zum Überspringen Auswahl drücken"
        );
        assert_eq!(ask_to_skip_label("ja"), "Press select to skip");
        assert_eq!(ask_to_skip_label(""), "Press select to skip");
    }
}
