use crate::models::{GenerationRequest, TattooStyle, TextPrompt, TextToImageRequest};

pub const NEGATIVE_PROMPT: &str = "blurry, low quality, text, watermark, signature";
pub const PROMPT_WEIGHT: f32 = 1.0;
pub const NEGATIVE_PROMPT_WEIGHT: f32 = -1.0;

pub const CFG_SCALE: u32 = 7;
pub const STEPS: u32 = 30;
pub const SAMPLES: u32 = 1;

pub fn tattoo_prompt(prompt: &str, style: TattooStyle) -> String {
    format!(
        "{}, {} tattoo style, high quality, detailed, professional tattoo design",
        prompt.trim(),
        style.id()
    )
}

/// Expects an already validated request.
pub fn build_payload(request: &GenerationRequest) -> TextToImageRequest {
    TextToImageRequest {
        text_prompts: vec![
            TextPrompt {
                text: tattoo_prompt(&request.prompt, request.style),
                weight: PROMPT_WEIGHT,
            },
            TextPrompt {
                text: NEGATIVE_PROMPT.to_string(),
                weight: NEGATIVE_PROMPT_WEIGHT,
            },
        ],
        cfg_scale: CFG_SCALE,
        height: request.height,
        width: request.width,
        steps: STEPS,
        samples: SAMPLES,
    }
}
