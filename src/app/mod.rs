//! `PortfolioApp`: the top-level egui application state.
//!
//! This module declares the struct and its frame loop. Drawing is split
//! across the sibling sub-modules:
//!
//! - `toolbar`:    top bar with name, clock, socials and theme toggle
//! - `navigation`: sidebar, mobile menu and prev/next footer
//! - `content`:    the active section's page
//! - `sphere`:     skills sphere painting and drag input

pub mod content;
pub mod navigation;
pub mod sphere;
pub mod toolbar;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;

use portfolio_viewer::config::AppConfig;
use portfolio_viewer::contact::gateway::{EmailGateway, EmailJsGateway};
use portfolio_viewer::contact::ContactForm;
use portfolio_viewer::content::list_projects;
use portfolio_viewer::net::image::{icon_source, ImageLoader};
use portfolio_viewer::sphere::skills::{SkillLayout, SKILLS};
use portfolio_viewer::sphere::{radius_for_width, SphereState};
use portfolio_viewer::view::section::Section;
use portfolio_viewer::view::ViewController;

use crate::ui;

/// Below this window width the sidebar collapses into a menu.
pub const MOBILE_BREAKPOINT: f32 = 1024.0;

/// Whether the window is too narrow for the sidebar.
pub fn is_narrow(width: f32) -> bool {
    width < MOBILE_BREAKPOINT
}

/// Poll interval while images are still loading.
const IMAGE_POLL: Duration = Duration::from_millis(100);

// ─── Application state ───────────────────────────────────────────────────────

pub struct PortfolioApp {
    pub config: AppConfig,
    pub view: ViewController,
    pub contact: ContactForm,
    pub gateway: Arc<dyn EmailGateway>,
    /// Present only while the Skills section is on screen.
    pub sphere: Option<SphereState>,
    pub skill_layout: SkillLayout,
    pub image_loader: ImageLoader,
    pub textures: HashMap<String, egui::TextureHandle>,
    pub scroll_to_top: bool,
    /// `file://` URL of the resume, if the file exists.
    pub resume_url: Option<String>,
}

impl PortfolioApp {
    pub fn new(config: AppConfig) -> Self {
        let gateway: Arc<dyn EmailGateway> = Arc::new(EmailJsGateway::new(&config.emailjs));
        let resume_url = file_url(&config.assets.path_of(&config.assets.resume_file));
        if resume_url.is_none() {
            log::warn!(
                "resume not found at {}",
                config.assets.path_of(&config.assets.resume_file).display()
            );
        }

        let mut app = Self {
            config,
            view: ViewController::new(Instant::now()),
            contact: ContactForm::new(),
            gateway,
            sphere: None,
            skill_layout: SkillLayout::default(),
            image_loader: ImageLoader::new(),
            textures: HashMap::new(),
            scroll_to_top: false,
            resume_url,
        };
        app.request_images();
        app
    }

    /// Source string for a file in the assets directory.
    pub fn asset_source(&self, file: &str) -> String {
        self.config.assets.path_of(file).to_string_lossy().into_owned()
    }

    pub fn icon_source(&self, slug: &str) -> String {
        icon_source(&self.config.assets.icon_source, slug)
    }

    fn request_images(&mut self) {
        let mut sources = vec![self.asset_source(&self.config.assets.profile_image)];
        for project in list_projects() {
            if let Some(image) = project.image {
                sources.push(self.asset_source(image));
            }
        }
        for skill in SKILLS {
            sources.push(self.icon_source(skill.slug));
        }
        for source in &sources {
            self.image_loader.request(source);
        }
        log::debug!("requested {} images", sources.len());
    }

    /// Upload finished images as textures.
    fn upload_images(&mut self, ctx: &egui::Context) {
        for source in self.image_loader.poll() {
            if self.textures.contains_key(&source) {
                continue;
            }
            let is_icon = SKILLS.iter().any(|s| self.icon_source(s.slug) == source);
            if let Some(data) = self.image_loader.get(&source) {
                let mut image = egui::ColorImage::from_rgba_unmultiplied(
                    [data.width as usize, data.height as usize],
                    &data.rgba,
                );
                if is_icon {
                    sphere::icon_mask(&mut image);
                }
                let tex = ctx.load_texture(
                    format!("img_{}", source),
                    image,
                    egui::TextureOptions::LINEAR,
                );
                self.textures.insert(source, tex);
            }
        }
    }

    pub fn texture(&self, source: &str) -> Option<&egui::TextureHandle> {
        self.textures.get(source)
    }

    /// Mount the sphere when its section is shown, drop it when left.
    fn sync_sphere(&mut self, window_width: f32) {
        let radius = radius_for_width(window_width);
        if self.view.active_section() != Section::SkillsAndTools {
            if self.sphere.take().is_some() {
                log::debug!("unmounting skills sphere");
            }
            return;
        }
        match self.sphere.as_mut() {
            Some(state) => state.set_radius(radius),
            None => {
                log::debug!("mounting skills sphere (r = {})", radius);
                self.sphere = Some(SphereState::new(radius));
            }
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if self.sphere.is_some() || self.view.transition_progress(now) < 1.0 {
            ctx.request_repaint();
            return;
        }

        let mut wake = [
            self.view.next_wakeup(now),
            self.contact.next_wakeup(now),
            (self.image_loader.pending_count() > 0).then_some(IMAGE_POLL),
        ]
        .into_iter()
        .flatten()
        .min();
        if self.contact.is_sending() {
            wake = Some(wake.map_or(IMAGE_POLL, |w| w.min(IMAGE_POLL)));
        }
        if let Some(after) = wake {
            ctx.request_repaint_after(after);
        }
    }

    /// Stop every timer and abandon the in-flight submission.
    pub fn teardown(&mut self) {
        log::info!("shutting down after {} section transitions", self.view.transitions());
        self.view.shutdown();
        self.contact.shutdown();
        self.sphere = None;
    }
}

fn file_url(path: &std::path::Path) -> Option<String> {
    let absolute = std::fs::canonicalize(path).ok()?;
    url::Url::from_file_path(absolute).ok().map(String::from)
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        let effects = self.view.poll(now);
        if effects.scroll_reset {
            self.scroll_to_top = true;
        }
        self.contact.poll(now);
        self.upload_images(ctx);

        if let Some(dark) = self.view.take_theme_change() {
            ctx.set_visuals(ui::visuals(dark));
        }

        let width = ctx.screen_rect().width();
        let narrow = is_narrow(width);
        if !narrow && self.view.state().mobile_menu_open {
            self.view.close_mobile_menu();
        }
        self.sync_sphere(width);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui, narrow, now);
        });

        if narrow && self.view.state().mobile_menu_open {
            egui::TopBottomPanel::top("mobile_menu").show(ctx, |ui| {
                self.draw_mobile_menu(ui, now);
            });
        }

        if !narrow {
            egui::SidePanel::left("sidebar")
                .resizable(false)
                .exact_width(220.0)
                .show(ctx, |ui| {
                    self.draw_sidebar(ui, now);
                });
        }

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            self.draw_footer(ui, now);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui, now);
        });

        self.schedule_repaint(ctx, now);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.teardown();
    }
}
