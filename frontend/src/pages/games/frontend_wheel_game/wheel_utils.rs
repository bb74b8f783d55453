use shared::{RewardEntry, RewardTable};
use yew::prelude::*;

use crate::styles;

/// Chance shown in the legend, e.g. `40%` or `2.5%`.
pub fn format_chance(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{}%", weight as i64)
    } else {
        format!("{:.1}%", weight)
    }
}

pub fn format_last_reward(last_reward: Option<&str>) -> String {
    last_reward.unwrap_or("-").to_string()
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "Spin" };

    let button_class = if props.disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning { "inline-block mr-2 animate-spin" } else { "hidden" };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                id="spinButton"
                onclick={props.onclick.clone()}
                disabled={props.disabled}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50 bg-transparent"
            >
                <div class="flex items-center justify-center">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub total_spins: u64,
    pub last_reward: Option<String>,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    html! {
        <div class="grid grid-cols-2 gap-4 mt-6">
            <div class={styles::STAT_CARD}>
                <div class={styles::TEXT_SMALL}>{"Total Spins"}</div>
                <div id="totalSpins" class={styles::STAT_VALUE}>{props.total_spins}</div>
            </div>
            <div class={styles::STAT_CARD}>
                <div class={styles::TEXT_SMALL}>{"Last Reward"}</div>
                <div id="lastReward" class={styles::STAT_VALUE}>
                    {format_last_reward(props.last_reward.as_deref())}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RewardLegendProps {
    pub table: RewardTable,
}

#[function_component(RewardLegend)]
pub fn reward_legend(props: &RewardLegendProps) -> Html {
    html! {
        <div class="mt-8 bg-gray-50 dark:bg-gray-700/30 p-6 rounded-xl shadow-sm">
            <h3 class="font-bold text-lg mb-3 text-center text-gray-800 dark:text-gray-200">{"Rewards"}</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                {for props.table.iter().map(|reward| html! {
                    <div
                        class="bg-white dark:bg-gray-800 p-3 rounded-lg shadow-sm flex items-center border-l-4"
                        style={format!("border-color: {};", reward.color)}
                    >
                        <div class="text-2xl mr-3 flex-shrink-0">{&reward.icon}</div>
                        <div class="text-left">
                            <div class="font-medium text-gray-900 dark:text-white">{&reward.name}</div>
                            <div class={styles::TEXT_SMALL}>{format!("{} chance", format_chance(reward.weight))}</div>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub reward: Option<RewardEntry>,
    pub open: bool,
    pub on_close: Callback<MouseEvent>,
    pub on_spin_again: Callback<MouseEvent>,
}

#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let Some(reward) = props.reward.as_ref() else {
        return html! {};
    };

    let actions = if props.open {
        html! {
            <div class="mt-6 flex justify-center gap-3">
                <button id="closeModal" class={styles::BUTTON_SECONDARY} onclick={props.on_close.clone()}>
                    {"Close"}
                </button>
                <button id="spinAgain" class={styles::BUTTON_PRIMARY} onclick={props.on_spin_again.clone()}>
                    {"Spin Again"}
                </button>
            </div>
        }
    } else {
        html! {}
    };

    // Clicking the backdrop closes; clicks inside the panel stay inside.
    html! {
        <div
            id="resultModal"
            role="dialog"
            aria-hidden={modal_aria_hidden(props.open)}
            class={classes!(styles::MODAL_BACKDROP, if props.open { "show opacity-100" } else { "opacity-0 pointer-events-none" })}
            onclick={props.on_close.clone()}
        >
            <div
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                class={classes!(styles::MODAL_PANEL, if props.open { "scale-100" } else { "scale-90" })}
            >
                <div id="rewardIcon" class="text-6xl mb-4 animate-bounce">{&reward.icon}</div>
                <h2 id="rewardTitle" class={styles::TEXT_H2}>{&reward.name}</h2>
                <p id="rewardDescription" class={classes!(styles::TEXT_BODY, "mt-2")}>{&reward.description}</p>
                {actions}
            </div>
        </div>
    }
}

/// A closed modal stays mounted for the fade-out but is hidden from
/// assistive tech; its buttons are not rendered, so Tab skips it.
fn modal_aria_hidden(open: bool) -> &'static str {
    if open {
        "false"
    } else {
        "true"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_chance() {
        assert_eq!(format_chance(40.0), "40%");
        assert_eq!(format_chance(2.5), "2.5%");
    }

    #[test]
    fn test_format_last_reward() {
        assert_eq!(format_last_reward(None), "-");
        assert_eq!(format_last_reward(Some("Skin Epic")), "Skin Epic");
    }

    #[test]
    fn test_closed_modal_hidden_from_assistive_tech() {
        assert_eq!(modal_aria_hidden(false), "true");
        assert_eq!(modal_aria_hidden(true), "false");
    }
}
