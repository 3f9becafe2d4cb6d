//! View models for the kata list and result panel.
//!
//! Nothing here touches egui or the network; `ui::app` paints these.

use shared::{
    domain::{KataId, ResultStatus},
    protocol::{KataSummary, SubmissionResult},
};

use crate::controller::{Intent, KataListState};

pub const EMPTY_LIST_MESSAGE: &str = "No katas available";
pub const CARD_HINT: &str = "Click to start solving this kata";
pub const LOADING_MESSAGE: &str = "Loading katas...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KataCard {
    pub kata_id: KataId,
    pub title: String,
    pub hint: &'static str,
}

impl KataCard {
    /// The intent raised when the card is clicked.
    pub fn intent(&self) -> Intent {
        Intent::SelectKata(self.kata_id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KataListView {
    Loading { message: &'static str },
    Empty { message: &'static str },
    Cards(Vec<KataCard>),
    Failed { message: String },
}

pub fn render_list(katas: &[KataSummary]) -> KataListView {
    if katas.is_empty() {
        return KataListView::Empty {
            message: EMPTY_LIST_MESSAGE,
        };
    }

    KataListView::Cards(
        katas
            .iter()
            .map(|kata| KataCard {
                kata_id: kata.id.clone(),
                title: kata.title.clone(),
                hint: CARD_HINT,
            })
            .collect(),
    )
}

pub fn render_list_state(state: &KataListState) -> KataListView {
    match state {
        KataListState::Loading => KataListView::Loading {
            message: LOADING_MESSAGE,
        },
        KataListState::Loaded(katas) => render_list(katas),
        KataListState::Failed(message) => KataListView::Failed {
            message: message.clone(),
        },
    }
}

/// Styling of the result panel. Derived from the current result only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTone {
    Pass,
    Fail,
    Error,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub tone: ResultTone,
    pub icon: &'static str,
    pub headline: String,
    pub message: String,
}

pub fn render_result(result: &SubmissionResult) -> ResultView {
    let tone = match result.status {
        ResultStatus::Pass => ResultTone::Pass,
        ResultStatus::Fail => ResultTone::Fail,
        ResultStatus::Error => ResultTone::Error,
        ResultStatus::Other(_) => ResultTone::Neutral,
    };
    ResultView {
        tone,
        icon: result.status.icon(),
        headline: result.headline(),
        message: result.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, title: &str) -> KataSummary {
        KataSummary {
            id: KataId::from(id),
            title: title.to_string(),
        }
    }

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(
            render_list(&[]),
            KataListView::Empty {
                message: "No katas available"
            }
        );
    }

    #[test]
    fn renders_one_card_per_kata_in_order() {
        let katas = vec![summary("add-numbers", "Add Two Numbers"), summary("42", "Sum")];
        let KataListView::Cards(cards) = render_list(&katas) else {
            panic!("expected cards");
        };

        assert_eq!(cards.len(), katas.len());
        for (card, kata) in cards.iter().zip(&katas) {
            assert_eq!(card.title, kata.title);
            assert_eq!(card.hint, CARD_HINT);
            assert_eq!(card.intent(), Intent::SelectKata(kata.id.clone()));
        }
    }

    #[test]
    fn list_state_maps_to_loading_and_failure_panels() {
        assert!(matches!(
            render_list_state(&KataListState::Loading),
            KataListView::Loading { .. }
        ));
        assert_eq!(
            render_list_state(&KataListState::Failed("Failed to load katas. Please try again.".into())),
            KataListView::Failed {
                message: "Failed to load katas. Please try again.".to_string()
            }
        );
        assert_eq!(
            render_list_state(&KataListState::Loaded(Vec::new())),
            render_list(&[])
        );
    }

    #[test]
    fn result_statuses_map_to_icons_and_tones() {
        let cases = [
            (ResultStatus::Pass, "✅", ResultTone::Pass, "✅ PASS"),
            (ResultStatus::Fail, "❌", ResultTone::Fail, "❌ FAIL"),
            (ResultStatus::Error, "⚠️", ResultTone::Error, "⚠️ ERROR"),
        ];
        for (status, icon, tone, headline) in cases {
            let view = render_result(&SubmissionResult::new(status, "ok"));
            assert_eq!(view.icon, icon);
            assert_eq!(view.tone, tone);
            assert_eq!(view.headline, headline);
            assert_eq!(view.message, "ok");
        }
    }

    #[test]
    fn unknown_status_has_no_icon_and_neutral_tone() {
        let view = render_result(&SubmissionResult::new(
            ResultStatus::Other("SKIPPED".to_string()),
            "not run",
        ));
        assert_eq!(view.icon, "");
        assert_eq!(view.tone, ResultTone::Neutral);
        assert_eq!(view.headline, "SKIPPED");
    }

    #[test]
    fn tone_follows_latest_result_only() {
        let fail = render_result(&SubmissionResult::new(ResultStatus::Fail, "nope"));
        let pass = render_result(&SubmissionResult::new(ResultStatus::Pass, "All tests passed"));
        assert_eq!(fail.tone, ResultTone::Fail);
        assert_eq!(pass.tone, ResultTone::Pass);
        assert_eq!(pass.headline, "✅ PASS");
        assert_eq!(pass.message, "All tests passed");
    }
}
