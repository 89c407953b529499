//! Pre/post effectiveness scoring for a device that has been in use.

use ablepath_core::models::effectiveness::{
    EffectivenessInput, EffectivenessResult, Evaluation, Interpretation, InterpretationBands,
};
use ablepath_rules::RuleSet;
use ablepath_rules::policy::PointStep;

use crate::sentiment;

/// Input is assumed valid: [`EffectivenessInput`] can only hold 1–5 ratings.
pub fn calculate(input: &EffectivenessInput, bands: &InterpretationBands) -> EffectivenessResult {
    let importance = i32::from(input.importance.get());
    let pre = i32::from(input.pre_difficulty.get());
    let post = i32::from(input.post_difficulty.get());

    let improvement = pre - post;
    let effectiveness_score = improvement * importance;
    let improvement_percentage = if pre > 0 {
        f64::from(improvement) / f64::from(pre) * 100.0
    } else {
        0.0
    };

    EffectivenessResult {
        effectiveness_score,
        improvement,
        improvement_percentage,
        interpretation: Interpretation::from_score(effectiveness_score, bands),
    }
}

/// Points for an effectiveness score. Zero or negative scores earn nothing.
pub fn award_points(effectiveness_score: i32, steps: &[PointStep]) -> u32 {
    if effectiveness_score <= 0 {
        return 0;
    }
    steps
        .iter()
        .find(|step| effectiveness_score >= step.min_score)
        .map(|step| step.points)
        .unwrap_or(0)
}

/// Score a completed rating form. Sentiment is only tagged for non-blank
/// feedback.
pub fn evaluate(rules: &RuleSet, input: &EffectivenessInput, feedback: Option<&str>) -> Evaluation {
    let result = calculate(input, &rules.policy.interpretation);
    let points = award_points(result.effectiveness_score, &rules.policy.point_steps);
    let sentiment = feedback
        .filter(|text| !text.trim().is_empty())
        .map(|text| sentiment::classify(&rules.sentiment, text));

    Evaluation {
        result,
        points,
        sentiment,
    }
}
