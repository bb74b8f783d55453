mod audio;
mod display;
mod timers;
mod wheel_canvas;
mod wheel_utils;

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::{error, info};
use shared::{RewardTable, SpinController, TimerEvent, WheelConfig, WheelKey, WheelRng};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::styles;
use display::WheelDisplay;
use timers::TimeoutScheduler;
use wheel_canvas::WheelCanvas;
use wheel_utils::{ResultModal, RewardLegend, SpinButton, StatsPanel};

type WheelController = SpinController<WheelDisplay, WheelRng, TimeoutScheduler>;

pub enum Msg {
    Spin,
    Dismiss,
    SpinAgain,
    Key(WheelKey),
    Timer(TimerEvent),
}

#[derive(Properties, PartialEq)]
pub struct FrontendWheelGameProps {
    pub table: RewardTable,
    #[prop_or_default]
    pub config: WheelConfig,
}

pub struct FrontendWheelGame {
    controller: WheelController,
    /// Mirrors `accepts_spin_key` for the keydown listener, which runs outside `update`.
    spin_key_armed: Rc<Cell<bool>>,
    _keydown_listener: Option<EventListener>,
}

impl Component for FrontendWheelGame {
    type Message = Msg;
    type Properties = FrontendWheelGameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let scheduler = TimeoutScheduler::new(ctx.link().callback(Msg::Timer));
        let controller = SpinController::new(
            props.table.clone(),
            props.config.clone(),
            WheelDisplay::new(),
            WheelRng::from_entropy(),
            scheduler,
        );

        let spin_key_armed = Rc::new(Cell::new(controller.accepts_spin_key()));

        let keydown_listener = web_sys::window().map(|window| {
            let link = ctx.link().clone();
            let armed = spin_key_armed.clone();
            EventListener::new(&window, "keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    let key = WheelKey::from_key(&event.key());
                    if key == WheelKey::Other {
                        return;
                    }
                    if claims_default_action(key, armed.get()) {
                        event.prevent_default();
                    }
                    link.send_message(Msg::Key(key));
                }
            })
        });
        if keydown_listener.is_none() {
            error!("No window available, keyboard controls disabled");
        }

        Self {
            controller,
            spin_key_armed,
            _keydown_listener: keydown_listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let changed = match msg {
            Msg::Spin => {
                self.controller.spin();
                true
            }
            Msg::Dismiss => {
                self.controller.dismiss();
                true
            }
            Msg::SpinAgain => {
                self.controller.spin_again();
                true
            }
            Msg::Key(key) => self.controller.handle_key(key),
            Msg::Timer(event) => {
                self.controller.handle_timer(event);
                true
            }
        };
        self.spin_key_armed.set(self.controller.accepts_spin_key());
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let display = self.controller.port();
        let table = self.controller.table();

        let on_spin = ctx.link().callback(|_| Msg::Spin);
        let on_close = ctx.link().callback(|_| Msg::Dismiss);
        let on_spin_again = ctx.link().callback(|_| Msg::SpinAgain);

        html! {
            <div class="container mx-auto px-4 py-8">
                <h1 class="text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white">
                    <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">{"Spin Wheel"}</span>
                </h1>

                <div class={styles::CARD_WHEEL}>
                    <div class="relative mx-auto mb-8 flex justify-center items-center">
                        <WheelCanvas
                            table={table.clone()}
                            rotation={display.rotation}
                            is_spinning={display.spinning}
                            duration_ms={self.controller.config().spin_duration_ms}
                        />
                    </div>

                    <div class="flex justify-center mt-4">
                        <div class="w-full max-w-[300px]">
                            <SpinButton
                                is_spinning={display.spinning}
                                disabled={!display.input_enabled}
                                onclick={on_spin}
                            />
                        </div>
                    </div>

                    <StatsPanel total_spins={display.total_spins} last_reward={display.last_reward.clone()} />
                    <RewardLegend table={table.clone()} />

                    <p class={classes!(styles::TEXT_HINT, "text-center", "mt-4")}>
                        {"Press Enter or Space to spin, Escape to close the result."}
                    </p>
                </div>

                <ResultModal
                    reward={display.result.clone()}
                    open={display.result_open}
                    on_close={on_close}
                    on_spin_again={on_spin_again}
                />
            </div>
        }
    }
}

/// Enter/Space are taken over (no scroll, no button click) only when they are
/// about to start a spin. Otherwise a focused "Close" or "Spin Again" button
/// must still activate from the keyboard.
fn claims_default_action(key: WheelKey, spin_key_armed: bool) -> bool {
    matches!(key, WheelKey::Enter | WheelKey::Space) && spin_key_armed
}

/// Logs the loaded table once, as the page comes up.
pub fn log_startup(table: &RewardTable) {
    info!("Spin wheel initialized");
    match serde_json::to_string(table) {
        Ok(json) => info!("Rewards: {}", json),
        Err(e) => error!("Failed to serialize reward table: {}", e),
    }
}
