//! Main application structure

use std::cell::RefCell;
use std::path::PathBuf;

use eframe::egui;
use fleet_app::{Config, FleetSession, LogNotifier, Notifier};
use fleet_types::Result;
use tracing::warn;

use crate::fleet_panel::FleetPanel;

/// Main application state
pub struct FleetApp {
    config: Config,
    session: FleetSession,
    panel: FleetPanel,
    /// Alert shown in the bottom bar: (message, is_error)
    status_message: Option<(String, bool)>,
}

impl FleetApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let config = Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "using default configuration");
            Config::default()
        });

        apply_theme(&cc.egui_ctx, config.dark_theme);

        let alerts = RefCell::new(Vec::new());
        let notifier = |msg: &str| {
            LogNotifier.notify(msg);
            alerts.borrow_mut().push(msg.to_string());
        };

        let session = match FleetSession::open(config.clone(), &notifier) {
            Ok(session) => session,
            Err(e) => {
                // No data directory on this platform
                notifier(format!("❌ {}", e).as_str());
                let fallback = Config {
                    data_file: Some(fallback_data_file()),
                    ..config.clone()
                };
                FleetSession::open(fallback, &notifier)?
            }
        };

        let panel = FleetPanel::new(session.store().manager());
        let status_message = alerts.into_inner().pop().map(|msg| (msg, true));

        Ok(Self {
            config,
            session,
            panel,
            status_message,
        })
    }

    /// Reopen the session on another fleet file chosen by the user
    fn open_file(&mut self, path: PathBuf) {
        self.config.data_file = Some(path);

        let alerts = RefCell::new(Vec::new());
        let notifier = |msg: &str| {
            LogNotifier.notify(msg);
            alerts.borrow_mut().push(msg.to_string());
        };
        match FleetSession::open(self.config.clone(), &notifier) {
            Ok(session) => {
                self.session = session;
                self.panel = FleetPanel::new(self.session.store().manager());
                self.status_message = match alerts.into_inner().pop() {
                    Some(msg) => Some((msg, true)),
                    None => Some((
                        format!("Opened {}", self.session.data_file().display()),
                        false,
                    )),
                };
                self.persist_config();
            }
            Err(e) => self.status_message = Some((format!("❌ {}", e), true)),
        }
    }

    fn save_fleet(&mut self) {
        self.status_message = Some(match self.session.save() {
            Ok(()) => (
                format!("Saved to {}", self.session.data_file().display()),
                false,
            ),
            Err(e) => (format!("❌ {}", e), true),
        });
    }

    fn persist_config(&mut self) {
        if let Err(e) = self.config.save() {
            warn!(error = %e, "failed to save configuration");
            self.status_message = Some((format!("❌ {}", e), true));
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = if self.config.dark_theme {
                "Dark theme"
            } else {
                "Light theme"
            };
            if ui.checkbox(&mut self.config.dark_theme, label).changed() {
                apply_theme(ui.ctx(), self.config.dark_theme);
                self.persist_config();
            }

            ui.separator();

            if ui.button("Open...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("CSV", &["csv"])
                    .pick_file()
                {
                    self.open_file(path);
                }
            }
            let save_button = ui.add_enabled(
                self.session.load_failure().is_none(),
                egui::Button::new("Save"),
            );
            if save_button.clicked() {
                self.save_fleet();
            }
            if let Some(reason) = self.session.load_failure() {
                save_button.on_disabled_hover_text(format!(
                    "The fleet file could not be loaded, saving would overwrite it: {}",
                    reason
                ));
            }
        });
    }
}

impl eframe::App for FleetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_toolbar(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            if let Some((ref msg, is_error)) = self.status_message {
                let color = if is_error {
                    egui::Color32::LIGHT_RED
                } else {
                    egui::Color32::LIGHT_GREEN
                };
                ui.label(egui::RichText::new(msg).color(color));
            } else {
                ui.label(format!(
                    "{} vehicles, {} available",
                    self.session.store().len(),
                    self.session.store().available_count()
                ));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(manager) = self.panel.ui(ui, &mut self.session) {
                self.config.manager = manager;
                self.persist_config();
            }
        });
    }
}

fn apply_theme(ctx: &egui::Context, dark: bool) {
    if dark {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}

fn fallback_data_file() -> PathBuf {
    std::env::temp_dir()
        .join("fleet-manager")
        .join("automobili.csv")
}
