use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?…]+(?:\s*["'»”’)\]])*\s+"#).expect("Failed to compile sentence end regex.")
});

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]*\r?\n").expect("Failed to compile paragraph break regex."));

const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "mme", "mlle", "mm", "pr", "prof", "st", "ste", "vs", "cf", "fig",
    "ex", "p.ex", "e.g", "i.e", "jr", "sr", "env", "min", "max", "approx",
];

/// Words that name something by a single capital letter (ex. "vitamine C"), after which a
/// period ends the sentence.
const LETTER_NAMED_PREFIXES: &[&str] = &[
    "vitamine", "vitamines", "vitamin", "vitamins", "hépatite", "hepatitis", "groupe", "group",
    "type", "catégorie", "category", "annexe", "appendix",
];

/// Splits prose into sentences.
///
/// A sentence ends at terminal punctuation (`.`, `!`, `?`, `…`, optionally followed by closing
/// quotes or brackets) when whitespace and then an uppercase letter, a digit or an opening quote
/// follow. A blank line always ends a sentence. A period directly after a known abbreviation or
/// a single-letter initial does not end a sentence, unless the letter names something (ex.
/// "vitamine C."). Sentences are trimmed, and empty ones are skipped.
pub fn split_sentences(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .flat_map(split_paragraph)
        .collect()
}

fn split_paragraph(paragraph: &str) -> Vec<String> {
    let mut sentences = vec![];
    let mut start = 0;
    for boundary in SENTENCE_END.find_iter(paragraph) {
        let rest = &paragraph[boundary.end()..];
        let candidate = &paragraph[start..boundary.start()];
        if !starts_sentence(rest) || ends_with_abbreviation(candidate, boundary.as_str()) {
            continue;
        }
        push_sentence(&mut sentences, &paragraph[start..boundary.end()]);
        start = boundary.end();
    }
    push_sentence(&mut sentences, &paragraph[start..]);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, sentence: &str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string())
    }
}

fn starts_sentence(rest: &str) -> bool {
    match rest.chars().next() {
        Some(c) => c.is_uppercase() || c.is_numeric() || "\"'«“‘(¿¡-—".contains(c),
        None => true,
    }
}

fn ends_with_abbreviation(candidate: &str, terminator: &str) -> bool {
    if !terminator.starts_with('.') || terminator.trim_end().len() > 1 {
        return false;
    }
    let mut words = candidate.split_whitespace().rev();
    let Some(last_word) = words.next() else {
        return false;
    };
    let last_word = last_word.trim_start_matches(|c: char| !c.is_alphanumeric());
    let is_initial = last_word.chars().count() == 1
        && last_word.chars().all(|c| c.is_alphabetic())
        && !words.next().map(is_letter_named_prefix).unwrap_or(false);
    is_initial || ABBREVIATIONS.contains(&last_word.to_lowercase().as_str())
}

fn is_letter_named_prefix(word: &str) -> bool {
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
    LETTER_NAMED_PREFIXES.contains(&word.as_str())
}
