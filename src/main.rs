//! Desktop shell for the gym planner and persistent user settings.

use dirs_next as dirs;
use eframe::{App, CreationContext, Frame, NativeOptions, egui};
use rfd::FileDialog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{error, info, warn};

mod metrics;
mod profile;
use profile::{
    ALL_ACTIVITIES, ALL_DIET_PREFS, ALL_EXPERIENCE_LEVELS, ALL_GENDERS, ALL_GOALS, ProfileForm,
    UserProfile,
};
mod catalog;
mod planner;
use planner::{GeneratedPlan, generate_plan};
mod report;
use report::{PLACEHOLDER_TEXT, render_text};
mod export;
use export::save_plan;
mod assets;
use assets::{Asset, BANNER_FILE, BANNER_SIZE, SIDE_FILE, SIDE_SIZE};

const APP_TITLE: &str = "Smart Gym Planner";
const APP_SUBTITLE: &str = "Personalised workout & diet guide";
const SIDE_CAPTION: &str = "Stay consistent.\nSmall daily steps → big results.";
const SIDE_HINT: &str = "Tip: Add 'assets/gym_side.jpg' to show a motivation photo here.";

fn default_assets_dir() -> String {
    "assets".into()
}

fn default_report_font_size() -> f32 {
    13.0
}

fn default_true() -> bool {
    true
}

/// Persistent display preferences.
///
/// Stored as JSON in the user's config directory. Profile details entered in
/// the form are never written here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Settings {
    #[serde(default = "default_assets_dir")]
    assets_dir: String,
    #[serde(default = "default_true")]
    show_banner: bool,
    #[serde(default = "default_true")]
    show_side_image: bool,
    #[serde(default = "default_true")]
    dark_mode: bool,
    #[serde(default = "default_report_font_size")]
    report_font_size: f32,
    #[serde(default)]
    open_after_export: bool,
    #[serde(default)]
    last_export_dir: Option<String>,
}

impl Settings {
    const FILE: &'static str = "smart_gym_planner_settings.json";

    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(Self::FILE))
    }

    /// Load settings from the JSON configuration file, falling back to
    /// defaults when it is missing or unreadable.
    fn load() -> Self {
        if let Some(path) = Self::path() {
            if let Ok(data) = std::fs::read_to_string(&path) {
                match serde_json::from_str(&data) {
                    Ok(cfg) => return cfg,
                    Err(e) => warn!("Ignoring invalid settings in {}: {e}", path.display()),
                }
            }
        }
        Self::default()
    }

    fn save(&self) {
        if let Some(path) = Self::path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(data) = serde_json::to_string_pretty(self) {
                if let Err(e) = std::fs::write(&path, data) {
                    error!("Failed to save settings to {}: {e}", path.display());
                }
            }
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            show_banner: true,
            show_side_image: true,
            dark_mode: true,
            report_font_size: default_report_font_size(),
            open_after_export: false,
            last_export_dir: None,
        }
    }
}

/// Uploaded image, or the text to show where it would go.
enum ImageSlot {
    Texture(egui::TextureHandle),
    Text(&'static str),
}

impl ImageSlot {
    fn from_asset(ctx: &egui::Context, name: &str, asset: Asset) -> Self {
        match asset {
            Asset::Loaded(img) => {
                ImageSlot::Texture(ctx.load_texture(name, img, egui::TextureOptions::default()))
            }
            Asset::Placeholder(text) => ImageSlot::Text(text),
        }
    }
}

struct PlannerApp {
    settings: Settings,
    settings_dirty: bool,
    form: ProfileForm,
    profile: Option<UserProfile>,
    plan: Option<GeneratedPlan>,
    report: String,
    error_message: Option<String>,
    banner: ImageSlot,
    side: ImageSlot,
    show_settings: bool,
    show_about: bool,
    toast_start: Option<Instant>,
    toast_message: Option<String>,
}

impl PlannerApp {
    fn new(cc: &CreationContext<'_>) -> Self {
        let mut app = Self::with_settings(Settings::load());
        app.load_images(&cc.egui_ctx);
        app
    }

    fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            settings_dirty: false,
            form: ProfileForm::default(),
            profile: None,
            plan: None,
            report: PLACEHOLDER_TEXT.to_string(),
            error_message: None,
            banner: ImageSlot::Text(APP_TITLE),
            side: ImageSlot::Text(SIDE_HINT),
            show_settings: false,
            show_about: false,
            toast_start: None,
            toast_message: None,
        }
    }

    fn load_images(&mut self, ctx: &egui::Context) {
        let dir = Path::new(&self.settings.assets_dir);
        let banner = Asset::load_or(dir, BANNER_FILE, BANNER_SIZE, APP_TITLE);
        let side = Asset::load_or(dir, SIDE_FILE, SIDE_SIZE, SIDE_HINT);
        self.banner = ImageSlot::from_asset(ctx, "gym_banner", banner);
        self.side = ImageSlot::from_asset(ctx, "gym_side", side);
    }

    /// Validate the form and, when it parses, replace the current plan.
    fn generate(&mut self) {
        match self.form.parse() {
            Ok(profile) => {
                let plan = generate_plan(&profile);
                self.report = render_text(&profile, &plan);
                self.profile = Some(profile);
                self.plan = Some(plan);
                self.error_message = None;
            }
            Err(e) => {
                warn!("Form rejected: {e:?}");
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn export_plan(&mut self) {
        let (Some(profile), Some(plan)) = (&self.profile, &self.plan) else {
            self.error_message = Some("Generate a plan before exporting.".into());
            return;
        };
        let mut dialog = FileDialog::new()
            .add_filter("Text", &["txt"])
            .add_filter("HTML", &["html"])
            .add_filter("JSON", &["json"])
            .add_filter("CSV", &["csv"])
            .set_file_name("gym_plan.txt");
        if let Some(dir) = &self.settings.last_export_dir {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.save_file() else {
            return;
        };
        match save_plan(&path, profile, plan) {
            Ok(format) => {
                info!("Exported plan as {format:?} to {}", path.display());
                let name = path
                    .file_name()
                    .map(|f| f.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                self.toast_message = Some(format!("Saved plan to {name}"));
                self.toast_start = Some(Instant::now());
                self.settings.last_export_dir =
                    path.parent().map(|p| p.display().to_string());
                self.settings_dirty = true;
                if self.settings.open_after_export {
                    if let Err(e) = open::that(&path) {
                        error!("Failed to open {}: {e}", path.display());
                    }
                }
            }
            Err(e) => {
                error!("Failed to export plan: {e}");
                self.error_message = Some(format!("Failed to export plan: {e}"));
            }
        }
    }

    fn combo(ui: &mut egui::Ui, id: &str, value: &mut String, options: &[&'static str]) {
        egui::ComboBox::from_id_source(id)
            .width(140.0)
            .selected_text(if value.is_empty() {
                "Select".to_string()
            } else {
                value.clone()
            })
            .show_ui(ui, |ui| {
                for opt in options {
                    ui.selectable_value(value, opt.to_string(), *opt);
                }
            });
    }

    fn details_form(&mut self, ui: &mut egui::Ui) {
        let genders = ALL_GENDERS.map(|g| g.key());
        let goals = ALL_GOALS.map(|g| g.key());
        let activities = ALL_ACTIVITIES.map(|a| a.key());
        let levels = ALL_EXPERIENCE_LEVELS.map(|e| e.key());
        let diets = ALL_DIET_PREFS.map(|d| d.key());

        egui::Grid::new("details_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                let form = &mut self.form;
                ui.label("Name (optional):");
                ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(140.0));
                ui.end_row();

                ui.label("Age (years):");
                ui.add(egui::TextEdit::singleline(&mut form.age).desired_width(70.0));
                ui.end_row();

                ui.label("Gender:");
                Self::combo(ui, "gender_combo", &mut form.gender, &genders);
                ui.end_row();

                ui.label("Height (cm):");
                ui.add(egui::TextEdit::singleline(&mut form.height).desired_width(70.0));
                ui.end_row();

                ui.label("Weight (kg):");
                ui.add(egui::TextEdit::singleline(&mut form.weight).desired_width(70.0));
                ui.end_row();

                ui.label("Goal:");
                Self::combo(ui, "goal_combo", &mut form.goal, &goals);
                ui.end_row();

                ui.label("Activity level:");
                Self::combo(ui, "activity_combo", &mut form.activity, &activities);
                ui.end_row();

                ui.label("Gym experience:");
                Self::combo(ui, "experience_combo", &mut form.experience, &levels);
                ui.end_row();

                ui.label("Diet preference:");
                Self::combo(ui, "diet_combo", &mut form.diet_pref, &diets);
                ui.end_row();

                ui.label("Notes / injuries:");
                ui.add(egui::TextEdit::singleline(&mut form.notes).desired_width(200.0));
                ui.end_row();
            });

        ui.add_space(12.0);
        let button = egui::Button::new("Generate Plan").min_size(egui::vec2(ui.available_width(), 28.0));
        if ui.add(button).clicked() {
            self.generate();
        }
    }

    fn draw(&mut self, ctx: &egui::Context) {
        ctx.set_visuals(if self.settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Export Plan").clicked() {
                        self.export_plan();
                        ui.close_menu();
                    }
                    if ui.button("Settings").clicked() {
                        self.show_settings = true;
                        ui.close_menu();
                    }
                    if ui.button("Usage Tips").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::TopBottomPanel::top("header").show(ctx, |ui| match &self.banner {
            ImageSlot::Texture(tex) if self.settings.show_banner => {
                ui.image((tex.id(), tex.size_vec2()));
            }
            _ => {
                ui.horizontal(|ui| {
                    ui.heading(APP_TITLE);
                    ui.add_space(12.0);
                    ui.small(APP_SUBTITLE);
                });
            }
        });

        egui::SidePanel::left("details_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.strong("Your Details");
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| self.details_form(ui));
            });

        if self.settings.show_side_image {
            egui::SidePanel::right("side_panel")
                .resizable(false)
                .show(ctx, |ui| match &self.side {
                    ImageSlot::Texture(tex) => {
                        ui.image((tex.id(), tex.size_vec2()));
                        ui.vertical_centered(|ui| ui.small(SIDE_CAPTION));
                    }
                    ImageSlot::Text(text) => {
                        ui.small(*text);
                    }
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.strong("Your Plan");
            ui.separator();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let text = egui::RichText::new(&self.report)
                        .monospace()
                        .size(self.settings.report_font_size);
                    ui.add(egui::Label::new(text).wrap(true));
                });
        });

        if let Some(msg) = self.error_message.clone() {
            let mut close = false;
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(msg);
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                });
            if close {
                self.error_message = None;
            }
        }

        if self.show_about {
            egui::Window::new("Usage Tips")
                .open(&mut self.show_about)
                .resizable(true)
                .show(ctx, |ui| {
                    ui.heading(APP_TITLE);
                    ui.separator();
                    ui.label("\u{2022} Fill in your details on the left and press \"Generate Plan\".");
                    ui.label("\u{2022} Age, height and weight must be numbers.");
                    ui.label("\u{2022} Export the plan as text, HTML, JSON or CSV from the File menu.");
                    ui.label("\u{2022} Put gym_banner.jpg and gym_side.jpg in the assets folder to show photos.");
                });
        }

        if self.show_settings {
            let mut open = self.show_settings;
            let mut reload = false;
            egui::Window::new("Settings")
                .open(&mut open)
                .resizable(true)
                .show(ctx, |ui| {
                    egui::Grid::new("settings_grid").num_columns(2).show(ui, |ui| {
                        ui.label("Assets folder:");
                        if ui
                            .text_edit_singleline(&mut self.settings.assets_dir)
                            .changed()
                        {
                            self.settings_dirty = true;
                        }
                        ui.end_row();

                        if ui.button("Reload images").clicked() {
                            reload = true;
                        }
                        ui.end_row();

                        if ui
                            .checkbox(&mut self.settings.show_banner, "Show banner")
                            .changed()
                        {
                            self.settings_dirty = true;
                        }
                        if ui
                            .checkbox(&mut self.settings.show_side_image, "Show side panel")
                            .changed()
                        {
                            self.settings_dirty = true;
                        }
                        ui.end_row();

                        if ui.checkbox(&mut self.settings.dark_mode, "Dark mode").changed() {
                            self.settings_dirty = true;
                        }
                        if ui
                            .checkbox(
                                &mut self.settings.open_after_export,
                                "Open file after export",
                            )
                            .changed()
                        {
                            self.settings_dirty = true;
                        }
                        ui.end_row();

                        ui.label("Report font size:");
                        if ui
                            .add(egui::Slider::new(
                                &mut self.settings.report_font_size,
                                9.0..=20.0,
                            ))
                            .changed()
                        {
                            self.settings_dirty = true;
                        }
                        ui.end_row();
                    });
                });
            self.show_settings = open;
            if reload {
                self.load_images(ctx);
            }
        }

        if let Some(start) = self.toast_start {
            if start.elapsed() < Duration::from_secs(3) {
                if let Some(ref msg) = self.toast_message {
                    egui::Area::new(egui::Id::new("export_toast"))
                        .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
                        .show(ctx, |ui| {
                            ui.label(msg);
                        });
                }
            } else {
                self.toast_start = None;
                self.toast_message = None;
            }
        }

        if self.settings_dirty {
            self.settings.save();
            self.settings_dirty = false;
        }
    }
}

impl App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.draw(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.save();
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 650.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Box::new(PlannerApp::new(cc))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    /// Point the config directory at a temp dir for the duration of `f`.
    fn with_config_dir(f: impl FnOnce()) {
        use std::env;

        let _guard = ENV_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let prev_config = env::var_os("XDG_CONFIG_HOME");
        unsafe {
            env::set_var("XDG_CONFIG_HOME", dir.path());
        }

        f();

        if let Some(val) = prev_config {
            unsafe {
                env::set_var("XDG_CONFIG_HOME", val);
            }
        } else {
            unsafe {
                env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    fn filled_form() -> ProfileForm {
        ProfileForm {
            name: "Alex".into(),
            age: "31".into(),
            gender: "Male".into(),
            height: "175".into(),
            weight: "80".into(),
            goal: "muscle-gain".into(),
            activity: "moderate".into(),
            experience: "advanced".into(),
            diet_pref: "non-veg".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn settings_roundtrip() {
        let mut s = Settings::default();
        s.assets_dir = "/opt/gym/assets".into();
        s.show_banner = false;
        s.dark_mode = false;
        s.report_font_size = 16.0;
        s.open_after_export = true;
        s.last_export_dir = Some("/tmp".into());

        let json = serde_json::to_string(&s).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, loaded);
    }

    #[test]
    fn settings_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str("{\"dark_mode\": false}").unwrap();
        assert!(!loaded.dark_mode);
        assert!(loaded.show_banner);
        assert_eq!(loaded.assets_dir, "assets");
        assert_eq!(loaded.report_font_size, 13.0);
    }

    #[test]
    fn settings_persist_in_config_dir() {
        with_config_dir(|| {
            let mut s = Settings::default();
            s.report_font_size = 18.0;
            s.save();
            assert_eq!(Settings::load().report_font_size, 18.0);

            std::fs::write(Settings::path().unwrap(), "not json").unwrap();
            assert_eq!(Settings::load(), Settings::default());
        });
    }

    #[test]
    fn generate_renders_report() {
        let mut app = PlannerApp::with_settings(Settings::default());
        assert_eq!(app.report, PLACEHOLDER_TEXT);
        app.form = filled_form();
        app.generate();
        assert!(app.error_message.is_none());
        assert!(app.report.starts_with("=== SMART GYM PLANNER ===\nPersonalised plan for: Alex"));
        assert!(app.report.contains("BMI: 26.1 (Overweight)"));
        assert!(app.report.contains("Height: 175.0 cm | Weight: 80.0 kg"));
        assert_eq!(app.plan.as_ref().unwrap().diet.base_protein_g, 128);
    }

    #[test]
    fn invalid_form_keeps_previous_plan() {
        let mut app = PlannerApp::with_settings(Settings::default());
        app.form = filled_form();
        app.generate();
        let previous = app.report.clone();

        app.form.weight = "heavy".into();
        app.generate();
        assert_eq!(
            app.error_message.as_deref(),
            Some("Please enter valid numbers for age, height and weight.")
        );
        assert_eq!(app.report, previous);

        app.form = filled_form();
        app.form.gender.clear();
        app.generate();
        assert_eq!(
            app.error_message.as_deref(),
            Some("Please fill all required fields.")
        );
    }

    #[test]
    fn draw_runs_headless() {
        with_config_dir(|| {
            let mut app = PlannerApp::with_settings(Settings::default());
            app.form = filled_form();
            app.generate();
            app.show_about = true;
            app.show_settings = true;
            app.settings_dirty = true;

            let ctx = egui::Context::default();
            let _ = ctx.run(Default::default(), |ctx| app.draw(ctx));

            assert!(!app.settings_dirty);
            assert!(Settings::path().unwrap().exists());
        });
    }
}
