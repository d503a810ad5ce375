//! Closed-class and domain verb lexicons
//!
//! Lookups take lowercase words.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::shared::models::PartOfSpeech;

pub const MODALS: &[&str] = &[
    "must", "shall", "will", "may", "can", "could", "should", "would", "might",
];

const BE_FORMS: &[&str] = &["am", "is", "are", "was", "were", "be", "been", "being"];
const HAVE_FORMS: &[&str] = &["have", "has", "had", "having"];
const DO_FORMS: &[&str] = &["do", "does", "did", "done", "doing"];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "all", "any", "some",
    "no", "its", "their", "our", "your", "his", "her", "my", "either", "neither", "both",
    "such", "other", "another",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "onto", "within",
    "without", "through", "throughout", "during", "before", "after", "above", "below", "under",
    "over", "between", "among", "against", "across", "via", "per", "about", "upon", "toward",
    "towards", "beyond", "along", "around", "near", "except",
];

const PRONOUNS: &[&str] = &[
    "it", "they", "them", "he", "she", "we", "you", "i", "us", "him", "me", "who", "whom",
    "whose", "which", "what", "itself", "themselves", "himself", "herself", "ourselves",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet"];

const SUBORDINATORS: &[&str] = &[
    "if", "when", "unless", "provided", "while", "although", "because", "whether", "until",
    "where", "whenever", "than", "as", "since", "once", "though",
];

const ADVERBS: &[&str] = &[
    "also", "only", "then", "there", "here", "very", "always", "never", "immediately",
    "otherwise", "however", "therefore", "thus", "prior", "not", "just", "too", "again",
    "further", "currently", "normally", "generally", "so",
];

const ADJECTIVES: &[&str] = &[
    "actual", "appropriate", "available", "electronic", "electromagnetic", "friendly",
    "hostile", "necessary", "joint", "unauthorized", "specific", "separate",
    "critical", "primary", "secondary", "adjacent", "same", "different", "real", "potential",
];

/// Extra spaCy-style stopwords that are not closed-class
const EXTRA_STOPWORDS: &[&str] = &[
    "part", "name", "side", "top", "front", "back", "whole", "several", "various", "many",
    "much", "more", "most", "few", "own", "thereby", "whereby", "hereby", "etc",
];

/// Base forms of verbs that occur in EMS doctrine
const VERBS: &[&str] = &[
    "accomplish", "achieve", "allocate", "allow", "apply", "approve", "assess", "assign",
    "authorize", "avoid", "broadcast", "comply", "conduct", "confirm", "consider", "control",
    "coordinate", "deconflict", "degrade", "delegate", "deny", "designate", "detect",
    "develop", "direct", "disrupt", "emit", "employ", "enable", "ensure", "establish",
    "evaluate", "execute", "exploit", "follow", "forbid", "identify", "include", "inform",
    "integrate", "interfere", "issue", "jam", "limit", "locate", "maintain", "manage",
    "minimize", "monitor", "notify", "obtain", "operate", "perform", "permit", "plan",
    "prevent", "prohibit", "protect", "provide", "publish", "radiate", "receive", "record",
    "reduce", "report", "request", "require", "resolve", "restrict", "retain", "review",
    "submit", "support", "synchronize", "track", "transmit", "use", "verify",
];

/// Verbs that are just as often nouns ("status reports", "frequency use")
const NOUN_VERBS: &[&str] = &[
    "control", "issue", "jam", "limit", "monitor", "plan", "record", "report", "request",
    "review", "support", "track", "use",
];

/// Lemmas after which `to` introduces an infinitive
pub const INFINITIVE_LICENSORS: &[&str] = &[
    "require", "authorize", "allow", "permit", "permission", "need", "able",
];

lazy_static! {
    static ref CLOSED_CLASS: HashMap<&'static str, (PartOfSpeech, &'static str)> = {
        let mut map = HashMap::new();
        let mut insert = |words: &[&'static str], pos: PartOfSpeech, lemma: Option<&'static str>| {
            for &w in words {
                map.entry(w).or_insert((pos, lemma.unwrap_or(w)));
            }
        };
        insert(MODALS, PartOfSpeech::Aux, None);
        insert(BE_FORMS, PartOfSpeech::Aux, Some("be"));
        insert(HAVE_FORMS, PartOfSpeech::Aux, Some("have"));
        insert(DO_FORMS, PartOfSpeech::Aux, Some("do"));
        insert(&["not", "n't"], PartOfSpeech::Part, Some("not"));
        insert(DETERMINERS, PartOfSpeech::Det, None);
        insert(PREPOSITIONS, PartOfSpeech::Adp, None);
        insert(PRONOUNS, PartOfSpeech::Pron, None);
        insert(COORDINATORS, PartOfSpeech::Cconj, None);
        insert(SUBORDINATORS, PartOfSpeech::Sconj, None);
        insert(ADVERBS, PartOfSpeech::Adv, None);
        map
    };
    static ref STOPWORDS: HashSet<&'static str> = {
        let mut set: HashSet<&'static str> = CLOSED_CLASS.keys().copied().collect();
        set.extend(EXTRA_STOPWORDS.iter().copied());
        set
    };
    static ref VERB_SET: HashSet<&'static str> = VERBS.iter().copied().collect();
    static ref NOUN_VERB_SET: HashSet<&'static str> = NOUN_VERBS.iter().copied().collect();
    static ref ADJECTIVE_SET: HashSet<&'static str> = ADJECTIVES.iter().copied().collect();
}

pub fn closed_class(lower: &str) -> Option<(PartOfSpeech, &'static str)> {
    CLOSED_CLASS.get(lower).copied()
}

pub fn is_stopword(lower: &str) -> bool {
    STOPWORDS.contains(lower)
}

pub fn is_modal(lower: &str) -> bool {
    MODALS.iter().any(|m| *m == lower)
}

pub fn is_adjective(lower: &str) -> bool {
    if ADJECTIVE_SET.contains(lower) {
        return true;
    }
    lower.len() >= 6
        && ["ous", "ful", "able", "ible"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
}

/// True when the lemma is commonly used as a noun as well
pub fn is_noun_verb(lemma: &str) -> bool {
    NOUN_VERB_SET.contains(lemma)
}

/// Lemma of a known verb form, e.g. `coordinated` → `coordinate`
pub fn verb_lemma(lower: &str) -> Option<String> {
    if VERB_SET.contains(lower) {
        return Some(lower.to_string());
    }
    inflection_candidates(lower)
        .into_iter()
        .find(|candidate| VERB_SET.contains(candidate.as_str()))
}

/// Best-effort lemma for an unknown `-ing`/`-ed` form
pub fn guess_verb_lemma(lower: &str) -> String {
    let stem = lower
        .strip_suffix("ing")
        .or_else(|| lower.strip_suffix("ed"))
        .unwrap_or(lower);
    if stem.ends_with("ll") {
        return stem.to_string();
    }
    undouble(stem).unwrap_or_else(|| stem.to_string())
}

/// Singular form of a noun
pub fn noun_lemma(lower: &str) -> String {
    if let Some(stem) = lower.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{}y", stem);
        }
    }
    if let Some(stem) = lower.strip_suffix("sses") {
        return format!("{}ss", stem);
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return lower.to_string();
    }
    match lower.strip_suffix('s') {
        Some(stem) if stem.len() >= 3 => stem.to_string(),
        _ => lower.to_string(),
    }
}

fn inflection_candidates(word: &str) -> Vec<String> {
    let mut out = Vec::new();
    for suffix in ["ing", "ed"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            out.push(stem.to_string());
            out.push(format!("{}e", stem));
            if let Some(single) = undouble(stem) {
                out.push(single);
            }
            if suffix == "ed" {
                if let Some(base) = stem.strip_suffix('i') {
                    out.push(format!("{}y", base));
                }
            }
        }
    }
    if let Some(stem) = word.strip_suffix("ies") {
        out.push(format!("{}y", stem));
    }
    if let Some(stem) = word.strip_suffix("es") {
        out.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        out.push(stem.to_string());
    }
    out
}

/// `jamm` → `jam`, `transmitt` → `transmit`
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    let is_consonant = |c: char| c.is_ascii_alphabetic() && !"aeiou".contains(c);
    if last == before && is_consonant(last) && !matches!(last, 's' | 'z') {
        Some(stem[..stem.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}
