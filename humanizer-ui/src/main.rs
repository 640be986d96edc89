use std::time::{Duration, Instant};

use eframe::{egui, Frame};
use egui::Context;

use reqwest::blocking::Client;
use reqwest::Result;
use serde::Serialize;

const SERVER_URL: &str = "http://127.0.0.1:5000";

/// How long the "Copied!" label stays visible.
const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

/// Tones offered by the UI, serialized as the server expects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Tone {
    Casual,
    Formal,
    Persuasive,
}

/// JSON body sent to `/v1/humanize`.
#[derive(Serialize)]
struct HumanizeRequest<'a> {
    text: &'a str,
    tone: Tone,
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        Ok(Self { client })
    }

    /// Sends a POST request to `/v1/humanize`.
    fn post_humanize(&self, text: &str, tone: Tone) -> Result<String> {
        let response = self.client
            .post(format!("{SERVER_URL}/v1/humanize"))
            .json(&HumanizeRequest { text, tone })
            .send()?
            .error_for_status()?;

        response.text()
    }
}

/// Global UI state (MUST persist between frames in egui).
struct HumanizerUI {
    rest: RESTContext,
    input: String,
    tone: Tone,
    output: Option<String>,
    error: Option<String>,
    copied_at: Option<Instant>,
}

impl HumanizerUI {
    /// Initializes the UI with sane defaults.
    fn new() -> Result<Self> {
        Ok(Self {
            rest: RESTContext::new()?,
            input: String::new(),
            tone: Tone::Casual,
            output: None,
            error: None,
            copied_at: None,
        })
    }

    /// Performs the humanize request. "Regenerate" simply calls it again.
    fn humanize(&mut self) {
        match self.rest.post_humanize(&self.input, self.tone) {
            Ok(text) => {
                self.output = Some(text);
                self.error = None;
            }
            Err(e) => self.error = Some(format!("Error: {e}")),
        }
        self.copied_at = None;
    }
}

impl eframe::App for HumanizerUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Text Humanizer");
            ui.label("Transform your text into natural, human-like writing");
            ui.separator();

            ui.label("Input Text");
            ui.add(
                egui::TextEdit::multiline(&mut self.input)
                    .hint_text("Enter your text here...")
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            );

            ui.horizontal(|ui| {
                ui.label("Tone");
                ui.radio_value(&mut self.tone, Tone::Casual, "Casual");
                ui.radio_value(&mut self.tone, Tone::Formal, "Formal");
                ui.radio_value(&mut self.tone, Tone::Persuasive, "Persuasive");
            });

            let has_input = !self.input.trim().is_empty();
            if ui
                .add_enabled(has_input, egui::Button::new("Humanize").min_size([200.0, 40.0].into()))
                .clicked()
            {
                self.humanize();
            }

            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::RED, error);
            }

            let Some(output) = self.output.clone() else {
                return;
            };

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Humanized Text");
                if ui.button("Regenerate").clicked() {
                    self.humanize();
                }
                if ui.button("Copy").clicked() {
                    ui.ctx().copy_text(output.clone());
                    self.copied_at = Some(Instant::now());
                }
                if self.copied_at.is_some_and(|t| t.elapsed() < COPIED_FEEDBACK) {
                    ui.label("Copied!");
                    ctx.request_repaint_after(COPIED_FEEDBACK);
                }
            });

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.label(output);
            });
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 560.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "text-humanizer",
        options,
        Box::new(|_| Ok(Box::new(HumanizerUI::new()?))),
    )
}
