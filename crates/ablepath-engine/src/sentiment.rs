use ablepath_core::models::effectiveness::Sentiment;
use ablepath_rules::lexicon::SentimentLexicon;

/// Tag feedback by keyword presence. Positive keywords are checked first:
/// "it was hard at first but it's comfortable now" reads as positive.
pub fn classify(lexicon: &SentimentLexicon, text: &str) -> Sentiment {
    let text = text.to_lowercase();
    if lexicon.positive.iter().any(|k| text.contains(k.as_str())) {
        Sentiment::Positive
    } else if lexicon.negative.iter().any(|k| text.contains(k.as_str())) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
