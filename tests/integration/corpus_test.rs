//! Batch processing and corpus cleaning tests.

use super::helpers::read_fixture;
use corpusprep::{
    clean_corpus, Batch, CleaningStats, EmojiStrategy, Pipeline, ProcessedComment, ProcessedEntry,
};

fn accepted(position: usize, text: &str) -> ProcessedEntry {
    ProcessedEntry::new(position, ProcessedComment::Accepted(text.to_string()))
}

#[test]
fn dedup_keeps_first_occurrence() {
    let (corpus, stats) = clean_corpus(vec![
        accepted(0, "abc"),
        accepted(1, "xyz"),
        accepted(2, "abc"),
    ]);

    assert_eq!(corpus.texts().collect::<Vec<_>>(), vec!["abc", "xyz"]);
    assert_eq!(stats.removed_duplicate_count, 1);
}

#[test]
fn flat_batch_end_to_end() {
    let batch = Batch::from_json(&read_fixture("flat_batch.json")).unwrap();
    let pipeline = Pipeline::default();
    let (corpus, stats) = clean_corpus(pipeline.process_batch(batch.comments()));

    assert_eq!(corpus.texts().collect::<Vec<_>>(), vec!["abc", "xyz"]);
    assert_eq!(
        stats,
        CleaningStats {
            initial_count: 5,
            rejected_count: 2,
            removed_empty_count: 0,
            removed_duplicate_count: 1,
            final_count: 2,
        }
    );
}

#[test]
fn grouped_batch_end_to_end() {
    let batch = Batch::from_json(&read_fixture("grouped_batch.json")).unwrap();
    assert_eq!(batch.len(), 9);

    let pipeline = Pipeline::new(EmojiStrategy::Separate, 3);
    let (corpus, stats) = clean_corpus(pipeline.process_batch(batch.comments()));

    assert_eq!(
        corpus.texts().collect::<Vec<_>>(),
        vec!["joao olhaa isso!! 😃 😃 <URL>", "GOOL!!", "que jogo 👍"]
    );
    assert_eq!(
        corpus.iter().map(|e| e.position).collect::<Vec<_>>(),
        vec![0, 1, 6]
    );

    // The duplicate "GOOL!!" from the second post lost to the first one.
    let second = &corpus.entries()[1];
    assert_eq!(second.source.as_ref().unwrap().key, "fla-x-flu");

    let third = &corpus.entries()[2];
    assert_eq!(
        third.source.as_ref().unwrap().to_string(),
        "vasco-x-bota_21.07.2025"
    );

    assert_eq!(stats.initial_count, 9);
    assert_eq!(stats.rejected_count, 5);
    assert_eq!(stats.removed_duplicate_count, 1);
    assert_eq!(stats.final_count, 3);
}

#[test]
fn corpus_invariants_hold_for_mixed_batch() {
    let batch = Batch::from_texts([
        "boa!!!!",
        "BOA!!!!",
        "boa!!",
        "   ",
        "boooa!!!!!",
        "x",
        "👍👍",
        "👍 👍",
    ]);
    let pipeline = Pipeline::default();
    let (corpus, stats) = clean_corpus(pipeline.process_batch(batch.comments()));

    let texts: Vec<_> = corpus.texts().collect();
    let mut unique = texts.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), texts.len(), "no duplicates: {texts:?}");
    assert!(texts.iter().all(|t| !t.trim().is_empty()));

    let positions: Vec<_> = corpus.iter().map(|e| e.position).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(texts, vec!["boa!!", "BOA!!", "booa!!", "👍 👍"]);
    assert_eq!(
        stats.initial_count - stats.removed_total(),
        stats.final_count
    );
}

#[test]
fn parallel_processing_matches_sequential() {
    let texts: Vec<String> = (0..500)
        .map(|i| format!("comentário número {}!!!!! {}", i % 37, "é".repeat(i % 5)))
        .collect();
    let batch = Batch::from_texts(texts.iter().cloned());
    let pipeline = Pipeline::default();

    let parallel: Vec<_> = pipeline
        .process_batch(batch.comments())
        .into_iter()
        .map(|e| e.result)
        .collect();
    let sequential: Vec<_> = texts.iter().map(|t| pipeline.process(t)).collect();

    assert_eq!(parallel, sequential);

    // Suffixes of three or four "é" collapse to two, leaving three variants
    // per number.
    let (corpus, _) = clean_corpus(pipeline.process_batch(batch.comments()));
    assert_eq!(corpus.len(), 37 * 3);
}
