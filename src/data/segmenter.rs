// ============================================================
// Layer 4 - Sentence / Word Segmenter
// ============================================================
// Turns normalised text into sentences of word tokens.
//
//   - Sentences end at a run of `.` `?` `!` `…` followed by
//     whitespace or the end of the text. Tamil has no letter
//     case, so no capital-letter lookahead is used.
//   - Words come from the tokenizers crate: NFC + lowercase
//     normaliser, then a whitespace/punctuation pre-tokenizer.
//     Tamil vowel signs and virama are word characters, so a
//     word is never split inside a syllable.
//
// Sentences with two or fewer tokens carry almost no context
// and are dropped here, before indexing.
//
// Reference: tokenizers crate documentation (pre-tokenizers)

use tokenizers::{
    normalizers::{Lowercase, Sequence as NormalizerSequence, NFC},
    pre_tokenizers::{
        punctuation::Punctuation,
        sequence::Sequence as PreTokenizerSequence,
        whitespace::WhitespaceSplit,
    },
    NormalizedString, Normalizer, OffsetReferential, OffsetType, PreTokenizedString,
    PreTokenizer, SplitDelimiterBehavior,
};

use crate::domain::error::PipelineError;
use crate::domain::language::Language;
use crate::domain::traits::Segmenter;

/// Sentences shorter than this are discarded
pub const MIN_SENTENCE_TOKENS: usize = 3;

pub struct TextSegmenter {
    languages:     Vec<Language>,
    normalizer:    NormalizerSequence,
    pre_tokenizer: PreTokenizerSequence,
}

impl TextSegmenter {
    /// Segmenter for every language it knows (Tamil and English)
    pub fn new() -> Self {
        Self::with_languages(&[Language::Tamil, Language::English])
    }

    /// Segmenter restricted to the given languages
    pub fn with_languages(languages: &[Language]) -> Self {
        let normalizer = NormalizerSequence::new(vec![NFC.into(), Lowercase.into()]);
        let pre_tokenizer = PreTokenizerSequence::new(vec![
            WhitespaceSplit.into(),
            Punctuation::new(SplitDelimiterBehavior::Removed).into(),
        ]);
        Self {
            languages: languages.to_vec(),
            normalizer,
            pre_tokenizer,
        }
    }

    fn normalized(&self, text: &str) -> Result<NormalizedString, PipelineError> {
        let mut normalized = NormalizedString::from(text);
        self.normalizer
            .normalize(&mut normalized)
            .map_err(|e| PipelineError::Segmentation(e.to_string()))?;
        Ok(normalized)
    }

    /// NFC + lowercase form of `text`, the form every token is stored in
    pub fn normalize_token(&self, text: &str) -> Result<String, PipelineError> {
        Ok(self.normalized(text)?.get().to_string())
    }

    /// Lowercased word tokens of one sentence, punctuation removed
    fn words(&self, sentence: &str) -> Result<Vec<String>, PipelineError> {
        let mut pre = PreTokenizedString::from(self.normalized(sentence)?);
        self.pre_tokenizer
            .pre_tokenize(&mut pre)
            .map_err(|e| PipelineError::Segmentation(e.to_string()))?;

        Ok(pre
            .get_splits(OffsetReferential::Normalized, OffsetType::Byte)
            .into_iter()
            .map(|(word, _, _)| word.to_string())
            .filter(|word| !word.is_empty())
            .collect())
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '?' | '!' | '\u{2026}')
}

/// Borrowed, trimmed sentence slices of `text`, terminal
/// punctuation kept.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut out   = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        // a run like "?!" or "..." ends the sentence once
        let mut end = i + c.len_utf8();
        while let Some(&(j, d)) = chars.peek() {
            if !is_terminal(d) {
                break;
            }
            end = j + d.len_utf8();
            chars.next();
        }
        if chars.peek().map_or(true, |&(_, d)| d.is_whitespace()) {
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                out.push(sentence);
            }
            start = end;
        }
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        out.push(rest);
    }
    out
}

impl Default for TextSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for TextSegmenter {
    fn segment(&self, text: &str, lang: Language) -> Result<Vec<Vec<String>>, PipelineError> {
        if !self.languages.contains(&lang) {
            return Err(PipelineError::UnsupportedLanguage(lang.code().to_string()));
        }

        let mut sentences = Vec::new();
        let mut dropped   = 0usize;

        for raw in split_sentences(text) {
            let words = self.words(raw)?;
            if words.len() < MIN_SENTENCE_TOKENS {
                dropped += 1;
                continue;
            }
            sentences.push(words);
        }

        tracing::debug!(
            "Segmented {} sentences ({} short sentences dropped, lang={})",
            sentences.len(),
            dropped,
            lang
        );
        Ok(sentences)
    }
}
