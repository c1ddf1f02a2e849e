//! Health classification from nutrition signals.

use super::entities::{Classification, NutritionSignal};
use super::ports::NutritionGateway;

const NUTRI_SCORE_GREEN_MAX: i64 = 5;
const NOVA_GROUP_GREEN_MAX: i64 = 2;

/// Walks product records in response order; the first record carrying a
/// decisive signal settles the classification and later records are never
/// inspected. A record with neither signal is skipped. Within one record the
/// nutrition score outranks the NOVA group.
pub fn classify(signals: &[NutritionSignal]) -> Classification {
    for signal in signals {
        if let Some(score) = signal.nutri_score {
            return if score <= NUTRI_SCORE_GREEN_MAX {
                Classification::Green
            } else {
                Classification::Red
            };
        }
        if let Some(nova) = signal.nova_group {
            return if nova <= NOVA_GROUP_GREEN_MAX {
                Classification::Green
            } else {
                Classification::Red
            };
        }
    }
    Classification::Unknown
}

/// Looks the item up and classifies it. A failed lookup degrades to
/// `Unknown` instead of failing the caller's add.
pub async fn classify_item<N: NutritionGateway>(gateway: &N, item: &str) -> Classification {
    match gateway.search_signals(item).await {
        Ok(signals) => classify(&signals),
        Err(error) => {
            println!("[classify] nutrition lookup failed for {item:?}: {error}");
            Classification::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: i64) -> NutritionSignal {
        NutritionSignal {
            nutri_score: Some(value),
            nova_group: None,
        }
    }

    fn nova(value: i64) -> NutritionSignal {
        NutritionSignal {
            nutri_score: None,
            nova_group: Some(value),
        }
    }

    #[test]
    fn low_nutrition_score_is_green() {
        assert_eq!(classify(&[score(3)]), Classification::Green);
        assert_eq!(classify(&[score(5)]), Classification::Green);
    }

    #[test]
    fn high_nutrition_score_is_red() {
        assert_eq!(classify(&[score(6)]), Classification::Red);
        assert_eq!(classify(&[score(12)]), Classification::Red);
    }

    #[test]
    fn nova_group_decides_when_score_is_absent() {
        assert_eq!(classify(&[nova(1)]), Classification::Green);
        assert_eq!(classify(&[nova(2)]), Classification::Green);
        assert_eq!(classify(&[nova(4)]), Classification::Red);
    }

    #[test]
    fn score_outranks_nova_group_within_a_record() {
        let record = NutritionSignal {
            nutri_score: Some(12),
            nova_group: Some(1),
        };
        assert_eq!(classify(&[record]), Classification::Red);
    }

    #[test]
    fn signalless_records_are_skipped_until_one_decides() {
        let records = [NutritionSignal::default(), NutritionSignal::default(), nova(4)];
        assert_eq!(classify(&records), Classification::Red);
    }

    #[test]
    fn first_decisive_record_wins_over_later_ones() {
        let records = [score(3), score(20), nova(4)];
        assert_eq!(classify(&records), Classification::Green);
    }

    #[test]
    fn no_signals_anywhere_is_unknown() {
        assert_eq!(classify(&[]), Classification::Unknown);
        assert_eq!(
            classify(&[NutritionSignal::default(), NutritionSignal::default()]),
            Classification::Unknown
        );
    }
}
