//! Decides whether a user message warrants a live legal lookup.
//!
//! Matching is plain substring search over a lowercased message. Keywords are
//! stems where the language inflects, so "закон" also catches "закона" and
//! "законодательство". Unrelated words sharing a stem are accepted as false
//! positives.

/// Legal and administrative stems in Russian, English, Kazakh and Turkish.
pub const KEYWORDS: &[&str] = &[
    // Russian
    "закон",
    "стать",
    "кодекс",
    "прав",
    "суд",
    "налог",
    "штраф",
    "договор",
    "труд",
    "зарплат",
    "пособи",
    "пенси",
    "лиценз",
    "виз",
    "гражданств",
    "наследств",
    "алимент",
    "развод",
    "нотариус",
    "постановлени",
    "указ",
    // English
    "law",
    "legal",
    "legislation",
    "article",
    "statute",
    "regulation",
    "court",
    "lawyer",
    "attorney",
    "contract",
    "taxes",
    "taxation",
    "income tax",
    "penalt",
    "minimum wage",
    "salary",
    "employment",
    "visa",
    "citizenship",
    "inheritance",
    "divorce",
    "alimony",
    "license",
    "licence",
    "rights",
    "criminal code",
    "civil code",
    // Kazakh
    "заң",
    "құқық",
    "бап",
    "сот",
    "салық",
    "айыппұл",
    "шарт",
    "жалақы",
    "еңбек",
    "зейнетақы",
    "азаматтық",
    // Turkish
    "kanun",
    "yasa",
    "madde",
    "hukuk",
    "mahkeme",
    "vergi",
    "sözleşme",
    "dava",
    "avukat",
    "asgari ücret",
    "tazminat",
    "vatandaş",
    "yönetmelik",
];

/// Decides whether a message should be enriched with search results
pub trait Classifier: Send + Sync {
    fn should_search(&self, text: &str) -> bool;
}

/// Keyword matcher over [`KEYWORDS`]
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordClassifier;

impl Classifier for KeywordClassifier {
    fn should_search(&self, text: &str) -> bool {
        should_search(text)
    }
}

/// Never asks for a search. Used when enrichment is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverSearch;

impl Classifier for NeverSearch {
    fn should_search(&self, _text: &str) -> bool {
        false
    }
}

pub fn should_search(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let lowered = text.to_lowercase();
    let matched = KEYWORDS.iter().find(|keyword| lowered.contains(*keyword));
    if let Some(keyword) = matched {
        tracing::debug!(keyword, "message matched legal keyword");
    }
    matched.is_some()
}
