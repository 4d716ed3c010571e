//! Fleet panel: manager editing, add-vehicle form and vehicle list

use eframe::egui::{self, Color32, RichText, Ui};
use fleet_app::FleetSession;
use fleet_domain::NewVehicle;
use fleet_types::ValidationError;

/// Feedback line shown under the vehicle list
struct Feedback {
    text: String,
    is_error: bool,
}

/// Form and list state for the single fleet screen
pub struct FleetPanel {
    manager_input: String,
    new_brand: String,
    new_model: String,
    new_year: String,
    /// Seat counter driven by the -/+ buttons
    new_seats: u32,
    feedback: Vec<Feedback>,
}

impl FleetPanel {
    pub fn new(manager: &str) -> Self {
        Self {
            manager_input: manager.to_string(),
            new_brand: String::new(),
            new_model: String::new(),
            new_year: String::new(),
            new_seats: 0,
            feedback: Vec::new(),
        }
    }

    /// Draw the panel. Returns the new manager name when it was confirmed.
    pub fn ui(&mut self, ui: &mut Ui, session: &mut FleetSession) -> Option<String> {
        let store = session.store();
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(store.name()).size(38.0).strong());
            ui.label(
                RichText::new(format!("Manager: {}", store.manager()))
                    .size(16.0)
                    .strong(),
            );
        });
        ui.separator();

        let manager = self.render_manager_form(ui, session);
        ui.separator();

        self.render_add_form(ui, session);
        ui.separator();

        self.render_vehicle_list(ui, session);
        manager
    }

    fn render_manager_form(&mut self, ui: &mut Ui, session: &mut FleetSession) -> Option<String> {
        ui.label(RichText::new("Edit information").size(20.0));
        let mut confirmed = None;
        ui.horizontal(|ui| {
            ui.label("Manager:");
            ui.add(egui::TextEdit::singleline(&mut self.manager_input).desired_width(240.0));
            if ui.button("Confirm").clicked() {
                session.set_manager(self.manager_input.trim());
                confirmed = Some(session.store().manager().to_string());
            }
        });
        confirmed
    }

    fn render_add_form(&mut self, ui: &mut Ui, session: &mut FleetSession) {
        ui.label(RichText::new("Add a new car").size(20.0));

        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.new_brand)
                    .hint_text("Brand")
                    .desired_width(140.0),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.new_model)
                    .hint_text("Model")
                    .desired_width(140.0),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.new_year)
                    .hint_text("Year")
                    .desired_width(60.0),
            );

            ui.add_space(10.0);
            if ui
                .add_enabled(
                    self.new_seats > 0,
                    egui::Button::new(RichText::new("−").color(Color32::RED)),
                )
                .clicked()
            {
                self.new_seats -= 1;
            }
            ui.label(RichText::new(self.new_seats.to_string()).color(Color32::GREEN));
            if ui
                .button(RichText::new("+").color(Color32::GREEN))
                .clicked()
            {
                self.new_seats = self.new_seats.saturating_add(1);
            }
        });

        if ui.button("Confirm").clicked() {
            match self.submit(session) {
                Ok(text) => self.feedback.push(Feedback {
                    text,
                    is_error: false,
                }),
                // Keep the form filled in so the user can fix it
                Err(e) => self.feedback.push(Feedback {
                    text: format!("⛔ {}", e),
                    is_error: true,
                }),
            }
        }
    }

    fn submit(&mut self, session: &mut FleetSession) -> Result<String, ValidationError> {
        let year = NewVehicle::parse_year(&self.new_year)?;
        let draft = NewVehicle::new(self.new_brand.as_str(), self.new_model.as_str(), year, self.new_seats);
        let vehicle = session.add(draft)?;

        self.new_brand.clear();
        self.new_model.clear();
        self.new_year.clear();
        self.new_seats = 0;
        Ok(format!("{} {}", vehicle.status_icon(), vehicle))
    }

    fn render_vehicle_list(&mut self, ui: &mut Ui, session: &FleetSession) {
        ui.label(RichText::new("Cars").size(20.0));

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for vehicle in session.store().sorted_by_brand() {
                    ui.label(format!("{} {}", vehicle.status_icon(), vehicle));
                }

                if !self.feedback.is_empty() {
                    ui.add_space(8.0);
                    for line in &self.feedback {
                        let color = if line.is_error {
                            Color32::LIGHT_RED
                        } else {
                            Color32::LIGHT_GREEN
                        };
                        ui.label(RichText::new(&line.text).color(color));
                    }
                }
            });
    }
}
