//! Practice material lookup.
//!
//! The engine asks a [`ContentProvider`] for sentences by language and topic
//! and falls back to generic text when the provider has nothing.

use crate::adaptive::types::SkillCategory;

pub const PRACTICE_FALLBACK: &str = "Practice reading short sentences aloud, focusing on this skill.";
pub const ADVANCED_FALLBACK: &str = "Read a longer passage aloud at a natural pace without pausing.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTopic {
    Practice(SkillCategory),
    Advanced,
}

pub trait ContentProvider: Send + Sync {
    /// Returns `None` when the language or topic is not covered.
    fn phrase(&self, language: &str, topic: ContentTopic) -> Option<String>;
}

pub fn practice_content(
    provider: &dyn ContentProvider,
    language: &str,
    category: SkillCategory,
) -> String {
    provider
        .phrase(language, ContentTopic::Practice(category))
        .unwrap_or_else(|| PRACTICE_FALLBACK.to_string())
}

pub fn advanced_content(provider: &dyn ContentProvider, language: &str) -> String {
    provider
        .phrase(language, ContentTopic::Advanced)
        .unwrap_or_else(|| ADVANCED_FALLBACK.to_string())
}

/// Built-in sentences for the languages the app ships with.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContentProvider;

impl StaticContentProvider {
    fn lookup(language: &str, topic: ContentTopic) -> Option<&'static str> {
        use ContentTopic::*;
        use SkillCategory::*;

        let phrase = match (language, topic) {
            ("es", Practice(Accuracy)) => "El perro corre rápidamente por el parque.",
            ("es", Practice(Fluency)) => "Me gustaría reservar una mesa para dos personas esta noche.",
            ("es", Practice(Completeness)) => "Mañana por la mañana vamos a visitar a nuestros abuelos.",
            ("es", Practice(Prosody)) => "¿De verdad vas a venir a la fiesta el sábado?",
            ("es", Advanced) => "Aunque llovía a cántaros, decidieron continuar con la excursión hasta la cima.",

            ("fr", Practice(Accuracy)) => "Les chaussettes de l'archiduchesse sont-elles sèches ?",
            ("fr", Practice(Fluency)) => "Je voudrais un café et un croissant, s'il vous plaît.",
            ("fr", Practice(Completeness)) => "Nous sommes allés au marché pour acheter des légumes frais.",
            ("fr", Practice(Prosody)) => "Tu viens avec nous ce soir, n'est-ce pas ?",
            ("fr", Advanced) => "Bien qu'il fût tard, ils poursuivirent la discussion jusqu'à l'aube.",

            ("de", Practice(Accuracy)) => "Fischers Fritz fischt frische Fische.",
            ("de", Practice(Fluency)) => "Können Sie mir bitte den Weg zum Bahnhof zeigen?",
            ("de", Practice(Completeness)) => "Am Wochenende fahren wir mit dem Zug an die Ostsee.",
            ("de", Practice(Prosody)) => "Hast du wirklich schon alles erledigt?",
            ("de", Advanced) => "Obwohl das Wetter schlecht war, haben wir die Wanderung bis zum Gipfel fortgesetzt.",

            ("it", Practice(Accuracy)) => "Trentatré trentini entrarono a Trento tutti e trentatré trotterellando.",
            ("it", Practice(Fluency)) => "Vorrei prenotare un tavolo per quattro persone, per favore.",
            ("it", Practice(Completeness)) => "Domani mattina andiamo al mercato a comprare la frutta.",
            ("it", Practice(Prosody)) => "Davvero hai finito tutto il lavoro?",
            ("it", Advanced) => "Nonostante la pioggia battente, proseguirono il cammino fino al rifugio.",

            ("ja", Practice(Accuracy)) => "東京特許許可局",
            ("ja", Practice(Fluency)) => "駅までの道を教えていただけますか。",
            ("ja", Practice(Completeness)) => "明日の朝、友達と一緒に公園へ行きます。",
            ("ja", Practice(Prosody)) => "本当にもう全部終わったんですか？",
            ("ja", Advanced) => "雨が激しく降っていたにもかかわらず、彼らは山頂まで登り続けた。",

            ("en", Practice(Accuracy)) => "She sells seashells by the seashore.",
            ("en", Practice(Fluency)) => "Could you tell me the way to the nearest train station?",
            ("en", Practice(Completeness)) => "Tomorrow morning we are going to visit our grandparents.",
            ("en", Practice(Prosody)) => "Are you really coming to the party on Saturday?",
            ("en", Advanced) => "Although it was pouring with rain, they carried on walking all the way to the summit.",

            _ => return None,
        };
        Some(phrase)
    }
}

impl ContentProvider for StaticContentProvider {
    fn phrase(&self, language: &str, topic: ContentTopic) -> Option<String> {
        let primary = primary_subtag(language);
        Self::lookup(&primary, topic).map(str::to_string)
    }
}

/// "es-MX" / "ES_mx" -> "es"
fn primary_subtag(language: &str) -> String {
    language
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}
