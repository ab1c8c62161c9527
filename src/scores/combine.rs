use tracing::debug;

use crate::scores::{CombinedVerdict, ModelOpinion, ScoringProfile, VerdictLabel};

/// Arbitrates between the clinical and image opinions.
///
/// Agreement averages the two confidences. Disagreement defers to the more
/// confident model when the gap exceeds `disagreement_threshold` (minus a
/// penalty), and otherwise reports uncertainty whose confidence grows with the
/// gap.
pub fn combine(
    clinical: &ModelOpinion,
    image: &ModelOpinion,
    profile: &ScoringProfile,
) -> CombinedVerdict {
    let a = u32::from(clinical.confidence);
    let b = u32::from(image.confidence);

    if clinical.predicted_positive == image.predicted_positive {
        return CombinedVerdict {
            label: clinical.label(),
            confidence: round_half_up_div(a + b, 2) as u8,
        };
    }

    let diff = a.abs_diff(b);
    if diff > u32::from(profile.disagreement_threshold) {
        // Ties cannot reach this branch; image wins only when strictly higher.
        let (winner, source) = if image.confidence > clinical.confidence {
            (image, "image")
        } else {
            (clinical, "clinical")
        };
        debug!(
            winner = source,
            diff,
            "disagreement resolved by confidence"
        );
        return CombinedVerdict {
            label: winner.label(),
            confidence: winner
                .confidence
                .saturating_sub(profile.disagreement_penalty),
        };
    }

    CombinedVerdict {
        label: VerdictLabel::Uncertain,
        confidence: (50 + round_half_up_div(diff, 4)).min(100) as u8,
    }
}

fn round_half_up_div(num: u32, den: u32) -> u32 {
    (num + den / 2) / den
}
