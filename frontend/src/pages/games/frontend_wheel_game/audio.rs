use std::fmt;

use shared::ToneKind;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

const TONE_GAIN: f32 = 0.3;
const TONE_FLOOR: f32 = 0.01;

const SPIN_FREQUENCY: f32 = 200.0;
const SPIN_SECONDS: f64 = 0.5;

// C5 then E5
const WIN_FIRST_FREQUENCY: f32 = 523.25;
const WIN_SECOND_FREQUENCY: f32 = 659.25;
const WIN_NOTE_SECONDS: f64 = 0.3;
const WIN_SECOND_DELAY_SECONDS: f64 = 0.15;

#[derive(Debug, Clone, PartialEq)]
pub enum ToneError {
    Unavailable(String),
    Node(String),
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneError::Unavailable(e) => write!(f, "Audio not supported: {}", e),
            ToneError::Node(e) => write!(f, "Audio node error: {}", e),
        }
    }
}

impl std::error::Error for ToneError {}

impl From<JsValue> for ToneError {
    fn from(value: JsValue) -> Self {
        ToneError::Node(format!("{:?}", value))
    }
}

/// Short sine blips built on the Web Audio API. The context is created on
/// first use, since browsers only allow audio after a user gesture.
#[derive(Default)]
pub struct TonePlayer {
    context: Option<AudioContext>,
}

impl TonePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, kind: ToneKind) -> Result<(), ToneError> {
        let context = self.context()?;
        let now = context.current_time();
        match kind {
            ToneKind::Start => note(&context, SPIN_FREQUENCY, now, SPIN_SECONDS),
            ToneKind::Win => {
                note(&context, WIN_FIRST_FREQUENCY, now, WIN_NOTE_SECONDS)?;
                note(&context, WIN_SECOND_FREQUENCY, now + WIN_SECOND_DELAY_SECONDS, WIN_NOTE_SECONDS)
            }
        }
    }

    fn context(&mut self) -> Result<AudioContext, ToneError> {
        if let Some(context) = &self.context {
            return Ok(context.clone());
        }
        let context = AudioContext::new().map_err(|e| ToneError::Unavailable(format!("{:?}", e)))?;
        self.context = Some(context.clone());
        Ok(context)
    }
}

fn note(context: &AudioContext, frequency: f32, start: f64, seconds: f64) -> Result<(), ToneError> {
    let oscillator = context.create_oscillator()?;
    let gain = context.create_gain()?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&context.destination())?;

    oscillator.set_type(OscillatorType::Sine);
    oscillator.frequency().set_value(frequency);

    gain.gain().set_value_at_time(TONE_GAIN, start)?;
    gain.gain().exponential_ramp_to_value_at_time(TONE_FLOOR, start + seconds)?;

    oscillator.start_with_when(start)?;
    oscillator.stop_with_when(start + seconds)?;
    Ok(())
}
