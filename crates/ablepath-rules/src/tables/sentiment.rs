use crate::lexicon::SentimentLexicon;

const POSITIVE: &[&str] = &[
    "좋아", "좋았", "좋네", "편리", "편해졌", "편안", "만족", "도움이 됐", "도움이 많이", "개선",
    "나아졌", "쉬워졌", "good", "great", "helpful", "better", "easier", "satisfied",
];

const NEGATIVE: &[&str] = &[
    "불편", "어려", "힘들", "나빠", "불만", "아파", "아프", "소용없", "별로", "bad", "worse",
    "difficult", "useless", "uncomfortable",
];

pub fn builtin() -> SentimentLexicon {
    SentimentLexicon {
        positive: POSITIVE.iter().map(|k| k.to_string()).collect(),
        negative: NEGATIVE.iter().map(|k| k.to_string()).collect(),
    }
}
