//! Question generation: one multiple-choice question per subtopic.
//!
//! For every subtopic the correct option is the first sentence of its
//! content and three decoys are random sentences drawn from *other*
//! subtopics of the same topic. "Sentence" here means a piece of the text
//! split on the literal `". "`; a content without that delimiter is one
//! sentence. Decoys are not deduplicated, against each other or against
//! the correct option.
//!
//! ## RNG ordering
//!
//! Per question: three `(subtopic, sentence)` draw pairs for the decoys,
//! then three draws for the shuffle (partner for index 3, 2, 1). A topic
//! with no other subtopics skips the decoy draws. Tests with a scripted
//! source depend on this order.

use crate::quiz_engine::{
    models::{Question, SubtopicRecord},
    random::RandomSource,
};

pub const SENTENCE_DELIMITER: &str = ". ";
pub const DECOY_COUNT: usize = 3;

pub const NO_CONTENT: &str = "No content available";
pub const UNTITLED_TOPIC: &str = "this topic";
pub const CORRECT_FALLBACK: &str = "Correct answer";
pub const INCORRECT_FALLBACK: &str = "Incorrect option";

/// Content, else title, else `fallback`.
pub fn resolve_content<'a>(subtopic: &'a SubtopicRecord, fallback: &'a str) -> &'a str {
    subtopic.content().or_else(|| subtopic.title()).unwrap_or(fallback)
}

pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_DELIMITER).collect()
}

pub fn prompt_for(subtopic: &SubtopicRecord) -> String {
    format!(
        "What best describes \"{}\"?",
        subtopic.title().unwrap_or(UNTITLED_TOPIC)
    )
}

/// Text up to the first `". "`, falling back to the title and then to
/// [`CORRECT_FALLBACK`] when that piece is empty.
pub fn correct_option_for(subtopic: &SubtopicRecord) -> String {
    let content = resolve_content(subtopic, NO_CONTENT);
    let first = content.split(SENTENCE_DELIMITER).next().unwrap_or_default();
    if !first.is_empty() {
        return first.to_string();
    }
    subtopic.title().unwrap_or(CORRECT_FALLBACK).to_string()
}

/// Draw [`DECOY_COUNT`] decoys for `current` from the subtopics whose title
/// differs from its own. Draws are with replacement.
pub fn decoys_for<R: RandomSource + ?Sized>(
    rng: &mut R,
    subtopics: &[SubtopicRecord],
    current: &SubtopicRecord,
) -> Vec<String> {
    let others: Vec<&SubtopicRecord> = subtopics
        .iter()
        .filter(|s| s.title() != current.title())
        .collect();

    if others.is_empty() {
        log::warn!(
            "no other subtopics to draw decoys from for {:?}; using placeholders",
            current.title().unwrap_or(UNTITLED_TOPIC)
        );
        return vec![INCORRECT_FALLBACK.to_string(); DECOY_COUNT];
    }

    (0..DECOY_COUNT)
        .map(|_| {
            let source = others[rng.index(others.len())];
            let sentences = split_sentences(resolve_content(source, INCORRECT_FALLBACK));
            sentences[rng.index(sentences.len())].to_string()
        })
        .collect()
}

/// In-place Fisher-Yates: swap each index from the last down to 1 with a
/// partner drawn uniformly from `0..=i`.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}

pub fn generate_question<R: RandomSource + ?Sized>(
    rng: &mut R,
    subtopics: &[SubtopicRecord],
    subtopic: &SubtopicRecord,
) -> Question {
    let correct_option = correct_option_for(subtopic);
    let mut options = Vec::with_capacity(DECOY_COUNT + 1);
    options.push(correct_option.clone());
    options.extend(decoys_for(rng, subtopics, subtopic));
    shuffle(&mut options, rng);

    Question {
        prompt: prompt_for(subtopic),
        options,
        correct_option,
    }
}

/// One question per subtopic, in subtopic order.
pub fn generate_questions<R: RandomSource + ?Sized>(
    rng: &mut R,
    subtopics: &[SubtopicRecord],
) -> Vec<Question> {
    subtopics
        .iter()
        .map(|s| generate_question(rng, subtopics, s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::random::scripted::Scripted;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rec(title: &str, content: &str) -> SubtopicRecord {
        SubtopicRecord::new(title, content)
    }

    #[test]
    fn content_falls_back_to_title_then_literal() {
        let full = rec("T", "C");
        let title_only = SubtopicRecord { title: Some("T".into()), content: None };
        let empty = SubtopicRecord::default();
        assert_eq!(resolve_content(&full, NO_CONTENT), "C");
        assert_eq!(resolve_content(&title_only, NO_CONTENT), "T");
        assert_eq!(resolve_content(&empty, NO_CONTENT), NO_CONTENT);
    }

    #[test]
    fn prompt_uses_title_or_placeholder() {
        assert_eq!(prompt_for(&rec("IoT", "x")), "What best describes \"IoT\"?");
        assert_eq!(
            prompt_for(&SubtopicRecord::default()),
            "What best describes \"this topic\"?"
        );
    }

    #[test]
    fn correct_option_is_text_before_first_delimiter() {
        assert_eq!(correct_option_for(&rec("T", "One. Two. Three.")), "One");
        assert_eq!(correct_option_for(&rec("T", "No delimiter here.")), "No delimiter here.");
        // "e.g. x" splits too: the heuristic is kept as is.
        assert_eq!(correct_option_for(&rec("T", "See e.g. this")), "See e.g");
    }

    #[test]
    fn correct_option_falls_back_when_first_piece_is_empty() {
        assert_eq!(correct_option_for(&rec("Title", ". starts with delimiter")), "Title");
        let untitled = SubtopicRecord { title: None, content: Some(". x".into()) };
        assert_eq!(correct_option_for(&untitled), CORRECT_FALLBACK);
        assert_eq!(correct_option_for(&SubtopicRecord::default()), NO_CONTENT);
    }

    #[test]
    fn lone_subtopic_gets_placeholder_decoys() {
        let subs = vec![rec("Only", "Only one. Really.")];
        let mut rng = Scripted::new(&[]);
        assert_eq!(decoys_for(&mut rng, &subs, &subs[0]), vec![INCORRECT_FALLBACK; 3]);
    }

    #[test]
    fn decoys_exclude_every_subtopic_sharing_the_title() {
        let subs = vec![rec("Same", "Mine."), rec("Same", "Also mine."), rec("Other", "Theirs")];
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(decoys_for(&mut rng, &subs, &subs[0]), vec!["Theirs"; 3]);
        }
        let twins = vec![rec("Same", "A"), rec("Same", "B")];
        assert_eq!(decoys_for(&mut rng, &twins, &twins[0]), vec![INCORRECT_FALLBACK; 3]);
    }

    #[test]
    fn decoy_draws_follow_the_random_source() {
        let subs = vec![
            rec("A", "A1. A2"),
            rec("B", "B1. B2. B3"),
            rec("C", "C only"),
        ];
        // others of A = [B, C]; draws (subtopic, sentence) x3.
        let mut rng = Scripted::new(&[0, 2, 1, 0, 0, 0]);
        assert_eq!(decoys_for(&mut rng, &subs, &subs[0]), ["B3", "C only", "B1"]);
    }

    #[test]
    fn decoy_for_untitled_source_uses_its_fallback() {
        let subs = vec![rec("A", "A1"), SubtopicRecord::default()];
        let mut rng = Scripted::new(&[]);
        assert_eq!(decoys_for(&mut rng, &subs, &subs[0]), vec![INCORRECT_FALLBACK; 3]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in 0..10usize {
            let mut items: Vec<usize> = (0..n).collect();
            shuffle(&mut items, &mut rng);
            items.sort_unstable();
            assert_eq!(items, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn shuffle_swaps_from_the_back() {
        let mut items = vec!["a", "b", "c", "d"];
        // i=3 <-> 0, i=2 <-> 2, i=1 <-> 0
        shuffle(&mut items, &mut Scripted::new(&[0, 2, 0]));
        assert_eq!(items, ["b", "d", "c", "a"]);
    }

    #[test]
    fn question_options_are_exact_under_scripted_source() {
        let subs = vec![rec("A", "A1. A2"), rec("B", "B1. B2"), rec("C", "C1")];
        // decoys: B2, C1, B1; shuffle draws: 3<->3, 2<->2, 1<->1 (identity)
        let mut rng = Scripted::new(&[0, 1, 1, 0, 0, 0, 3, 2, 1]);
        let q = generate_question(&mut rng, &subs, &subs[0]);
        assert_eq!(q.prompt, "What best describes \"A\"?");
        assert_eq!(q.correct_option, "A1");
        assert_eq!(q.options, ["A1", "B2", "C1", "B1"]);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn every_question_has_four_options_including_the_answer() {
        let mut rng = StdRng::seed_from_u64(42);
        let subs = vec![rec("A", "A1. A2"), rec("B", "B1")];
        for q in generate_questions(&mut rng, &subs) {
            assert_eq!(q.options.len(), 4);
            assert!(q.options.contains(&q.correct_option));
        }
    }

    #[test]
    fn generation_preserves_subtopic_order_and_multiset() {
        let subs = vec![rec("A", "A1"), rec("B", "B1"), rec("C", "C1"), rec("D", "D1")];
        let mut rng = StdRng::seed_from_u64(9);
        let qs = generate_questions(&mut rng, &subs);
        let prompts: Vec<&str> = qs.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(
            prompts,
            [
                "What best describes \"A\"?",
                "What best describes \"B\"?",
                "What best describes \"C\"?",
                "What best describes \"D\"?",
            ]
        );
        for q in &qs {
            let others = q.options.iter().filter(|o| **o != q.correct_option).count();
            assert_eq!(others, 3);
        }
        // Same seed, same questions.
        let again = generate_questions(&mut StdRng::seed_from_u64(9), &subs);
        assert_eq!(qs, again);
    }

    #[test]
    fn empty_topic_generates_nothing() {
        let mut rng = Scripted::new(&[]);
        assert!(generate_questions(&mut rng, &[]).is_empty());
    }
}
