use std::time::Instant;

use eframe::egui;
use eframe::egui::{Button, FontFamily, FontId, RichText, TextStyle, ViewportCommand, Visuals};
use tokio::{task, time};

use crate::clock::{ClockFace, LocalClock, TimeSource, TICK_INTERVAL};
use crate::style::Background;

/// Window geometry and flags for the clock.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub title: String,
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub frameless: bool,
    pub always_on_top: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: String::from("clock"),
            position: [0.0, 0.0],
            size: [100.0, 30.0],
            frameless: true,
            always_on_top: true,
        }
    }
}

impl WidgetConfig {
    pub fn viewport(&self) -> egui::ViewportBuilder {
        let mut viewport = egui::ViewportBuilder::default()
            .with_title(self.title.clone())
            .with_position(self.position)
            .with_inner_size(self.size)
            .with_decorations(!self.frameless)
            .with_resizable(false);
        if self.always_on_top {
            viewport = viewport.with_always_on_top();
        }
        viewport
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: self.viewport(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Running,
    Closed,
}

pub struct ClockApp<S: TimeSource = LocalClock> {
    source: S,
    face: ClockFace,
    background: Background,
    state: WidgetState,
}

impl ClockApp<LocalClock> {
    pub fn new(cc: &eframe::CreationContext<'_>, background: Background) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles = [(
            TextStyle::Button,
            FontId::new(14.0, FontFamily::Monospace),
        )]
        .into();
        cc.egui_ctx.set_style(style);

        // Wake the UI thread once per tick even when no input arrives.
        let ctx = cc.egui_ctx.to_owned();
        task::spawn(async move {
            let mut interval = time::interval(TICK_INTERVAL);

            loop {
                interval.tick().await;
                ctx.request_repaint();
            }
        });

        Self::with_source(LocalClock, background)
    }
}

impl<S: TimeSource> ClockApp<S> {
    /// Builds the widget state without touching the window or the runtime.
    pub fn with_source(source: S, background: Background) -> Self {
        let face = ClockFace::new(&source, Instant::now());
        Self {
            source,
            face,
            background,
            state: WidgetState::Running,
        }
    }

    pub fn label(&self) -> &str {
        self.face.label()
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn background(&self) -> Background {
        self.background
    }

    /// Returns `true` only on the first click, when the window should close.
    pub fn close(&mut self) -> bool {
        match self.state {
            WidgetState::Running => {
                self.state = WidgetState::Closed;
                true
            }
            WidgetState::Closed => false,
        }
    }

    fn button(&self) -> Button<'static> {
        let button = Button::new(RichText::from(self.face.label().to_owned()));
        match self.background.fill() {
            Some(color) => button.fill(color),
            None => button,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.face.tick(&self.source, now);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let response = ui.add_sized(ui.available_size(), self.button());
                if response.clicked() && self.close() {
                    tracing::info!("clock clicked, closing");
                    ctx.send_viewport_cmd(ViewportCommand::Close);
                }
            });

        if self.state == WidgetState::Running {
            ctx.request_repaint_after(self.face.until_next_tick(now));
        }
    }
}

impl<S: TimeSource> eframe::App for ClockApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn clear_color(&self, visuals: &Visuals) -> [f32; 4] {
        // the viewport is opaque, so clear with the panel color
        visuals.panel_fill.to_normalized_gamma_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveTime;
    use eframe::egui::{
        pos2, vec2, Color32, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, ViewportId,
    };
    use eframe::App as _;

    const CENTER: Pos2 = pos2(50.0, 15.0);

    fn frame(events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(100.0, 30.0))),
            events,
            ..Default::default()
        }
    }

    fn button(pressed: bool) -> Event {
        Event::PointerButton {
            pos: CENTER,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Moves onto the button, presses and releases. Returns whether any of
    /// those frames asked the root viewport to close.
    fn click(ctx: &egui::Context, app: &mut ClockApp<FixedClock>) -> bool {
        let mut closed = false;
        for events in [
            vec![Event::PointerMoved(CENTER)],
            vec![button(true)],
            vec![button(false)],
        ] {
            let out = ctx.run(frame(events), |ctx| app.show(ctx));
            closed |= out.viewport_output[&ViewportId::ROOT]
                .commands
                .contains(&ViewportCommand::Close);
        }
        closed
    }

    fn noon() -> FixedClock {
        FixedClock(NaiveTime::from_hms_opt(12, 0, 7).unwrap())
    }

    #[test]
    fn starts_running_with_current_time() {
        let app = ClockApp::with_source(noon(), Background::Default);
        assert_eq!(app.state(), WidgetState::Running);
        assert_eq!(app.label(), "12:00:07");
    }

    #[test]
    fn click_closes_once() {
        let mut app = ClockApp::with_source(noon(), Background::Default);
        assert!(app.close());
        assert_eq!(app.state(), WidgetState::Closed);
        assert!(!app.close());
        assert_eq!(app.state(), WidgetState::Closed);
    }

    #[test]
    fn keeps_requested_background() {
        let app = ClockApp::with_source(noon(), Background::from_arg(Some("red")));
        assert_eq!(app.background().fill(), Some(Color32::from_rgb(255, 0, 0)));

        let app = ClockApp::with_source(noon(), Background::from_arg(None));
        assert_eq!(app.background().fill(), None);
    }

    #[test]
    fn renders_a_frame_headless() {
        let ctx = egui::Context::default();
        let mut app = ClockApp::with_source(noon(), Background::from_arg(Some("blue")));
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));
        assert_eq!(app.state(), WidgetState::Running);
        assert_eq!(app.label(), "12:00:07");
    }

    #[test]
    fn clicking_the_button_closes_the_window() {
        let ctx = egui::Context::default();
        let mut app = ClockApp::with_source(noon(), Background::Default);
        let _ = ctx.run(frame(vec![]), |ctx| app.show(ctx));

        assert!(click(&ctx, &mut app));
        assert_eq!(app.state(), WidgetState::Closed);

        assert!(!click(&ctx, &mut app));
        assert_eq!(app.state(), WidgetState::Closed);
    }

    #[test]
    fn no_click_no_close() {
        let ctx = egui::Context::default();
        let mut app = ClockApp::with_source(noon(), Background::Default);
        let out = ctx.run(frame(vec![Event::PointerMoved(CENTER)]), |ctx| app.show(ctx));
        assert!(!out.viewport_output[&ViewportId::ROOT]
            .commands
            .contains(&ViewportCommand::Close));
        assert_eq!(app.state(), WidgetState::Running);
    }

    #[test]
    fn clears_with_an_opaque_color() {
        let app = ClockApp::with_source(noon(), Background::Default);
        let [_, _, _, alpha] = app.clear_color(&Visuals::light());
        assert_eq!(alpha, 1.0);
    }

    #[test]
    fn default_window_is_small_frameless_and_on_top() {
        let config = WidgetConfig::default();
        assert_eq!(config.size, [100.0, 30.0]);
        assert_eq!(config.position, [0.0, 0.0]);

        let viewport = config.viewport();
        assert_eq!(viewport.decorations, Some(false));
        assert_eq!(viewport.window_level, Some(egui::WindowLevel::AlwaysOnTop));
        assert_eq!(viewport.inner_size, Some(egui::vec2(100.0, 30.0)));
    }
}
