//! Language pipeline: entity extraction and lemmatized tokenization.
//!
//! The analyzer only sees the [`LanguagePipeline`] trait. [`load_pipeline`] picks
//! the first supported language from a preference list and reports failure as a
//! value, which the analyzer turns into degraded mode.
//!
//! [`RuleBasedPipeline`] is the built-in implementation: capitalized spans are
//! entity candidates, labelled through small gazetteers; tokens are lower-cased,
//! stripped of elisions and stop words, then lemmatized by an exception table and
//! suffix rules.

use super::analysis::Entity;
use super::lexicon::{
    FIRST_NAMES, IRREGULAR_LEMMAS, LOCATIONS, ORGANIZATIONS, ORGANIZATION_SUFFIXES, PERSON_TITLES,
    STOPWORDS_EN, STOPWORDS_FR,
};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};
use thiserror::Error;
use tracing::{info, warn};

pub const LABEL_PERSON: &str = "PER";
pub const LABEL_LOCATION: &str = "LOC";
pub const LABEL_ORGANIZATION: &str = "ORG";
pub const LABEL_MISC: &str = "MISC";

/// Elided articles and pronouns dropped before lemmatization (`l'ami` -> `ami`).
const ELISIONS: &[&str] = &["l", "d", "j", "m", "n", "s", "t", "c", "qu", "jusqu", "lorsqu", "puisqu"];

// NOTE: expect() is acceptable here: both patterns are literals
static ENTITY_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’\-][\p{L}\p{N}]+)*").expect("Invalid regex: entity word pattern")
});
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:'[\p{L}]+)?").expect("Invalid regex: token pattern")
});

/// Text analysis capability used by the turn analyzer.
pub trait LanguagePipeline: Send + Sync {
    /// ISO code of the loaded language.
    fn language(&self) -> &str;

    /// Named entities with byte offsets into `text`.
    fn entities(&self, text: &str) -> Vec<Entity>;

    /// Lower-cased lemmas, without stop words or punctuation.
    fn lemmatize(&self, text: &str) -> Vec<String>;
}

/// No pipeline could be set up for any requested language.
#[derive(Debug, Clone, Error)]
#[error("no language pipeline available for [{requested}]: {reason}")]
pub struct PipelineUnavailable {
    pub requested: String,
    pub reason: String,
}

/// Loads the first supported language in preference order.
pub fn load_pipeline<S: AsRef<str>>(languages: &[S]) -> Result<Arc<dyn LanguagePipeline>, PipelineUnavailable> {
    let requested = languages
        .iter()
        .map(|l| l.as_ref())
        .collect::<Vec<_>>()
        .join(", ");

    let mut failures = Vec::new();
    for language in languages {
        match RuleBasedPipeline::for_language(language.as_ref()) {
            Ok(pipeline) => {
                info!("Language pipeline loaded: {}", pipeline.language());
                return Ok(Arc::new(pipeline));
            }
            Err(reason) => {
                warn!("Language pipeline '{}' unavailable: {}", language.as_ref(), reason);
                failures.push(reason);
            }
        }
    }

    let reason = if failures.is_empty() {
        "no language requested".to_string()
    } else {
        failures.join("; ")
    };
    Err(PipelineUnavailable { requested, reason })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lang {
    French,
    English,
}

/// Built-in French / English pipeline.
pub struct RuleBasedPipeline {
    lang: Lang,
    stopwords: HashSet<&'static str>,
    irregular: HashMap<&'static str, &'static str>,
}

/// A word of the original text: lower-cased form and byte span.
struct Word {
    lower: String,
    start: usize,
    end: usize,
    capitalized: bool,
    sentence_initial: bool,
}

impl RuleBasedPipeline {
    /// Builds the pipeline for `fr` or `en`; any other code is unsupported.
    pub fn for_language(code: &str) -> Result<Self, String> {
        let lang = match code.trim().to_lowercase().as_str() {
            "fr" | "fr_fr" | "french" => Lang::French,
            "en" | "en_us" | "en_gb" | "english" => Lang::English,
            "none" => return Err("language analysis disabled".to_string()),
            other => return Err(format!("unsupported language '{}'", other)),
        };

        let stopwords = match lang {
            Lang::French => STOPWORDS_FR.iter().copied().collect(),
            Lang::English => STOPWORDS_EN.iter().copied().collect(),
        };

        Ok(Self {
            lang,
            stopwords,
            irregular: IRREGULAR_LEMMAS.iter().copied().collect(),
        })
    }

    fn words(&self, text: &str) -> Vec<Word> {
        ENTITY_WORD
            .find_iter(text)
            .map(|m| {
                let before = text[..m.start()].trim_end();
                Word {
                    lower: m.as_str().to_lowercase(),
                    start: m.start(),
                    end: m.end(),
                    capitalized: m.as_str().chars().next().is_some_and(char::is_uppercase),
                    sentence_initial: before
                        .chars()
                        .last()
                        .map_or(true, |c| matches!(c, '.' | '!' | '?' | '…')),
                }
            })
            .collect()
    }

    fn is_known(lower: &str) -> bool {
        LOCATIONS.contains(&lower) || ORGANIZATIONS.contains(&lower) || FIRST_NAMES.contains(&lower)
    }

    fn is_title(lower: &str) -> bool {
        PERSON_TITLES.contains(&lower)
    }

    /// Turns one run of capitalized words into at most one entity.
    fn entity_from_run(&self, text: &str, run: &[&Word], preceded_by_title: bool) -> Option<Entity> {
        let mut titled = preceded_by_title;
        let mut first = 0;
        let mut last = run.len();

        while first < last && Self::is_title(&run[first].lower) {
            titled = true;
            first += 1;
        }
        if first < last && run[first].sentence_initial && !titled && !Self::is_known(&run[first].lower) {
            first += 1;
        }
        while first < last && self.stopwords.contains(run[first].lower.as_str()) {
            first += 1;
        }
        while last > first && self.stopwords.contains(run[last - 1].lower.as_str()) {
            last -= 1;
        }
        if first >= last {
            return None;
        }

        let words = &run[first..last];
        let start = words[0].start;
        let end = words[words.len() - 1].end;
        let span = &text[start..end];
        let lower = span.to_lowercase();
        let first_word = words[0].lower.as_str();
        let last_word = words[words.len() - 1].lower.as_str();

        let label = if titled {
            LABEL_PERSON
        } else if LOCATIONS.contains(&lower.as_str()) {
            LABEL_LOCATION
        } else if ORGANIZATIONS.contains(&lower.as_str())
            || ORGANIZATION_SUFFIXES.contains(&last_word)
            || ORGANIZATION_SUFFIXES.contains(&first_word)
            || (span.chars().count() >= 2 && span.chars().all(|c| c.is_uppercase() || c.is_ascii_digit()))
        {
            LABEL_ORGANIZATION
        } else if FIRST_NAMES.contains(&first_word) {
            LABEL_PERSON
        } else {
            LABEL_MISC
        };

        Some(Entity {
            text: span.to_string(),
            label: label.to_string(),
            start,
            end,
        })
    }

    fn lemma(&self, token: &str) -> String {
        if let Some(lemma) = self.irregular.get(token) {
            return (*lemma).to_string();
        }

        let chars = token.chars().count();
        match self.lang {
            Lang::French => {
                if chars > 4 && token.ends_with("aux") {
                    format!("{}al", &token[..token.len() - 3])
                } else if chars > 3 && (token.ends_with('s') || token.ends_with('x')) {
                    let stem = &token[..token.len() - 1];
                    // "jamais", "plus", "gros" are not plurals
                    if stem.ends_with(['i', 'u', 's', 'o', 'a']) {
                        token.to_string()
                    } else {
                        stem.to_string()
                    }
                } else {
                    token.to_string()
                }
            }
            Lang::English => {
                if chars > 4 && token.ends_with("ies") {
                    format!("{}y", &token[..token.len() - 3])
                } else if token.ends_with("sses") {
                    token[..token.len() - 2].to_string()
                } else if chars > 3
                    && token.ends_with('s')
                    && !(token.ends_with("ss") || token.ends_with("us") || token.ends_with("is"))
                {
                    token[..token.len() - 1].to_string()
                } else {
                    token.to_string()
                }
            }
        }
    }
}

fn strip_elision(token: &str) -> &str {
    match token.split_once('\'') {
        Some((head, tail)) if ELISIONS.contains(&head) => tail,
        _ => token,
    }
}

impl LanguagePipeline for RuleBasedPipeline {
    fn language(&self) -> &str {
        match self.lang {
            Lang::French => "fr",
            Lang::English => "en",
        }
    }

    fn entities(&self, text: &str) -> Vec<Entity> {
        let words = self.words(text);
        let mut entities = Vec::new();
        let mut run: Vec<&Word> = Vec::new();
        let mut run_after_title = false;

        for (i, word) in words.iter().enumerate() {
            let joins_run = run
                .last()
                .is_some_and(|prev| !text[prev.end..word.start].is_empty() && text[prev.end..word.start].chars().all(char::is_whitespace));

            if word.capitalized && (run.is_empty() || joins_run) {
                if run.is_empty() {
                    run_after_title = i > 0 && Self::is_title(&words[i - 1].lower);
                }
                run.push(word);
                continue;
            }

            if !run.is_empty() {
                entities.extend(self.entity_from_run(text, &run, run_after_title));
                run.clear();
            }
            if word.capitalized {
                run_after_title = i > 0 && Self::is_title(&words[i - 1].lower);
                run.push(word);
            }
        }
        if !run.is_empty() {
            entities.extend(self.entity_from_run(text, &run, run_after_title));
        }

        entities
    }

    fn lemmatize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase().replace('’', "'");
        TOKEN
            .find_iter(&lower)
            .map(|m| strip_elision(m.as_str()))
            .filter(|t| !t.is_empty() && !self.stopwords.contains(t))
            .map(|t| self.lemma(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn french() -> RuleBasedPipeline {
        RuleBasedPipeline::for_language("fr").unwrap()
    }

    #[test]
    fn test_load_pipeline_prefers_first_supported() {
        let pipeline = load_pipeline(&["de", "en", "fr"]).unwrap();
        assert_eq!(pipeline.language(), "en");
    }

    #[test]
    fn test_load_pipeline_unavailable() {
        let err = load_pipeline(&["none"]).err().unwrap();
        assert!(err.reason.contains("disabled"));

        let empty: [&str; 0] = [];
        let err = load_pipeline(&empty).err().unwrap();
        assert_eq!(err.reason, "no language requested");
    }

    #[test]
    fn test_location_and_person() {
        let text = "Hier, Marie est allée à Paris avec Monsieur Dupont.";
        let entities = french().entities(text);

        let found: Vec<(&str, &str)> = entities.iter().map(|e| (e.text.as_str(), e.label.as_str())).collect();
        assert_eq!(found, vec![("Marie", "PER"), ("Paris", "LOC"), ("Dupont", "PER")]);
    }

    #[test]
    fn test_offsets_slice_original_text() {
        let text = "Bonjour, je travaille chez Google à Montréal, près de l'Université Laval.";
        for entity in french().entities(text) {
            assert_eq!(&text[entity.start..entity.end], entity.text);
        }
    }

    #[test]
    fn test_multi_word_location() {
        let entities = french().entities("Je pars demain pour New York.");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "New York");
        assert_eq!(entities[0].label, "LOC");
    }

    #[test]
    fn test_sentence_initial_word_is_not_an_entity() {
        let entities = french().entities("Bonjour, comment vas-tu?");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_acronym_is_organization() {
        let entities = french().entities("Mon train SNCF a du retard");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, "ORG");
    }

    #[test]
    fn test_lemmatize_drops_stopwords_and_punctuation() {
        let tokens = french().lemmatize("Les chevaux sont dans les prés, n'est-ce pas ?");
        assert_eq!(tokens, vec!["cheval", "pré"]);
    }

    #[test]
    fn test_lemmatize_irregular_verbs() {
        let tokens = french().lemmatize("Tu peux m'aider ?");
        assert_eq!(tokens, vec!["pouvoir", "aider"]);
    }

    #[test]
    fn test_english_lemmatize() {
        let pipeline = RuleBasedPipeline::for_language("en").unwrap();
        let tokens = pipeline.lemmatize("The cities were full of happy children");
        assert_eq!(tokens, vec!["city", "full", "happy", "child"]);
    }
}
