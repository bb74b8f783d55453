pub mod pages;
pub mod styles;

use shared::{RewardTable, RewardTableError, WheelConfig, WheelConfigError};
use yew::prelude::*;

use crate::pages::games::{log_startup, FrontendWheelGame};

/// Loads and validates the reward table. A bad table stops the app here,
/// before a spin is possible.
pub fn load_rewards() -> Result<RewardTable, RewardTableError> {
    let table = RewardTable::default_table()?;
    log_startup(&table);
    Ok(table)
}

/// Checks the wheel tunables before the wheel mounts.
pub fn load_config() -> Result<WheelConfig, WheelConfigError> {
    let config = WheelConfig::default();
    config.validate()?;
    Ok(config)
}

#[function_component(App)]
pub fn app() -> Html {
    let startup = use_memo((), |_| {
        let table = load_rewards().map_err(|e| {
            log::error!("Reward table rejected: {}", e);
            e.to_string()
        })?;
        let config = load_config().map_err(|e| {
            log::error!("Wheel config rejected: {}", e);
            e.to_string()
        })?;
        Ok::<_, String>((table, config))
    });

    html! {
        <div class={styles::CONTAINER}>
            {
                match &*startup {
                    Ok((table, config)) => html! {
                        <FrontendWheelGame table={table.clone()} config={config.clone()} />
                    },
                    Err(message) => html! {
                        <div class={classes!(styles::CARD_ERROR, "max-w-md", "mx-auto", "mt-16")}>
                            {format!("The wheel could not start: {}", message)}
                        </div>
                    },
                }
            }
        </div>
    }
}
