//! Page sections and the reveal wrapper they share.
//!
//! Every section is drawn top to bottom inside the page scroll area. Blocks
//! that should animate in are wrapped in [`PortfolioApp::reveal`], which
//! registers them with the reveal choreographer, paints them with the current
//! transition style and reports their visibility back after layout.

use super::state::{PortfolioApp, Section};
use crate::constants::{CONTENT_MAX_WIDTH, SECTION_SPACING, SKILL_CLOUD_HEIGHT, SKILL_CLOUD_RGB};
use crate::contact::{Field, SubmitStatus};
use crate::content::*;
use crate::reveal::{visible_fraction, Transition};
use crate::skill_cloud::{cloud_layout, CloudMotion};
use crate::typewriter::{typed_text, TypewriterTiming};
use eframe::egui;
use std::hash::Hash;

/// Accent colour shared with the particle hue.
const ACCENT: egui::Color32 = egui::Color32::from_rgb(65, 105, 225);

/// Seconds between siblings in grouped reveals (cards, list items).
const GROUP_STAGGER: f32 = 0.2;

impl PortfolioApp {
    /// Draws `add_contents` with a reveal transition keyed by `key`.
    ///
    /// The block is laid out at its resting position for allocation and
    /// visibility purposes; only its painting is offset and faded.
    pub(super) fn reveal<R>(
        &mut self,
        ui: &mut egui::Ui,
        key: impl Hash,
        transition: Transition,
        add_contents: impl FnOnce(&mut Self, &mut egui::Ui) -> R,
    ) -> R {
        let id = egui::Id::new(("reveal", key));
        self.reveals.register(id, transition);
        let now = ui.input(|i| i.time);
        let style = self.reveals.style(id, now);

        let resting = ui.available_rect_before_wrap();
        let mut child = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(resting.translate(style.offset))
                .layout(*ui.layout()),
        );
        child.set_opacity(style.opacity);
        let result = add_contents(self, &mut child);

        let rect = child.min_rect().translate(-style.offset);
        ui.allocate_rect(rect, egui::Sense::hover());
        self.reveals.observe(id, visible_fraction(rect, ui.clip_rect()), now);
        result
    }

    fn forget_reveal(&mut self, key: impl Hash) {
        self.reveals.unmount(egui::Id::new(("reveal", key)));
    }

    fn section_header(&mut self, ui: &mut egui::Ui, section: Section, title: &str, subtitle: &str) {
        let transition = Transition::fade_up(&self.reveal);
        self.reveal(ui, (section, "header"), transition, |_, ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new(title).size(30.0).strong());
                ui.label(egui::RichText::new(subtitle).size(16.0).weak());
            });
        });
        ui.add_space(24.0);
    }

    /// Draws the whole page in section order.
    pub(super) fn draw_page(&mut self, ui: &mut egui::Ui) {
        let Some(content) = self.content.take() else {
            ui.centered_and_justified(|ui| {
                ui.label("Portfolio content could not be loaded.");
            });
            return;
        };

        for section in Section::ALL {
            if self.scroll_target == Some(section) {
                let anchor = egui::Rect::from_min_size(ui.cursor().min, egui::vec2(1.0, 1.0));
                ui.scroll_to_rect(anchor, Some(egui::Align::TOP));
                self.scroll_target = None;
            }
            if section == Section::Hero {
                self.draw_hero(ui, &content);
                continue;
            }
            let margin = ((ui.available_width() - CONTENT_MAX_WIDTH) / 2.0).max(16.0);
            ui.add_space(SECTION_SPACING / 2.0);
            ui.horizontal(|ui| {
                ui.add_space(margin);
                ui.vertical(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH.min(ui.available_width() - margin));
                    self.draw_section(ui, section, &content);
                });
            });
            ui.add_space(SECTION_SPACING / 2.0);
        }

        draw_footer(ui, &content);
        self.draw_blog_reader(ui.ctx(), &content);
        self.draw_toast(ui.ctx());
        self.content = Some(content);
    }

    fn draw_toast(&self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let Some(text) = self.contact.toast(now) else {
            return;
        };
        egui::Area::new(egui::Id::new("contact_toast"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new(text).strong());
                });
            });
    }

    fn draw_section(&mut self, ui: &mut egui::Ui, section: Section, content: &PortfolioContent) {
        match section {
            Section::Hero => self.draw_hero(ui, content),
            Section::About => self.draw_about(ui, content),
            Section::Projects => self.draw_projects(ui, content),
            Section::Skills => self.draw_skills(ui, content),
            Section::Education => self.draw_education(ui, &content.education),
            Section::Experience => self.draw_experience(ui, &content.experience),
            Section::Goals => self.draw_goals(ui, &content.goals),
            Section::Blog => self.draw_blog(ui, content),
            Section::Contact => self.draw_contact(ui, &content.contact),
        }
    }

    fn draw_hero(&mut self, ui: &mut egui::Ui, content: &PortfolioContent) {
        let height = ui.clip_rect().height().max(320.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::hover());

        if self.animated_background {
            let hero = self.hero.get_or_insert_with(|| {
                super::hero::HeroView::mount(
                    self.animator.clone(),
                    crate::types::CanvasBounds::new(rect.width(), rect.height()),
                )
            });
            hero.show(ui, rect);
        }

        let mut overlay = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(rect.shrink(24.0))
                .layout(egui::Layout::top_down(egui::Align::Center)),
        );
        overlay.add_space(rect.height() * 0.25);

        let intro = Transition {
            duration: 0.8,
            ..Transition::fade_up(&self.reveal)
        };
        self.reveal(&mut overlay, "hero-intro", intro, |app, ui| {
            ui.label(
                egui::RichText::new(&content.profile.name)
                    .size(56.0)
                    .strong()
                    .color(ACCENT),
            );
            let elapsed = ui.input(|i| i.time);
            let role = typed_text(&content.profile.roles, elapsed, TypewriterTiming::default());
            ui.label(egui::RichText::new(format!("{role}|")).size(28.0));
            ui.add_space(12.0);
            ui.label(egui::RichText::new(&content.profile.tagline).size(18.0).weak());
            ui.add_space(24.0);
            ui.horizontal(|ui| {
                if ui.button("View My Projects").clicked() {
                    app.scroll_target = Some(Section::Projects);
                }
                if ui.button("Contact Me").clicked() {
                    app.scroll_target = Some(Section::Contact);
                }
            });
        });

        overlay.add_space(48.0);
        let hint = Transition::fade_in(1.0).delayed(1.0);
        self.reveal(&mut overlay, "hero-hint", hint, |app, ui| {
            if ui.link("Scroll down").clicked() {
                app.scroll_target = Some(Section::About);
            }
        });
        // Keep the typewriter moving even without the particle loop
        ui.ctx().request_repaint_after(std::time::Duration::from_millis(50));
    }

    fn draw_about(&mut self, ui: &mut egui::Ui, content: &PortfolioContent) {
        self.section_header(ui, Section::About, "About Me", "Get to know more about me and my background");

        let bio = Transition::fade_up(&self.reveal);
        self.reveal(ui, "about-bio", bio, |_, ui| {
            ui.label(egui::RichText::new(&content.profile.bio).size(16.0));
        });
        ui.add_space(16.0);

        for (index, item) in content.about.iter().enumerate() {
            let transition = Transition::fade_up(&self.reveal).staggered(index, GROUP_STAGGER);
            self.reveal(ui, ("about-item", index), transition, |_, ui| {
                card(ui, |ui| {
                    ui.label(egui::RichText::new(&item.title).strong().size(17.0));
                    ui.label(egui::RichText::new(&item.description).weak());
                });
            });
        }
    }

    fn draw_projects(&mut self, ui: &mut egui::Ui, content: &PortfolioContent) {
        self.section_header(ui, Section::Projects, "Projects", "Check out some of my recent work");

        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.project_filter, ProjectFilter::All, "All Projects");
                ui.selectable_value(&mut self.project_filter, ProjectFilter::Featured, "Featured");
            });
        });
        ui.add_space(16.0);

        // Filtered-out cards are unmounted so they animate again when shown
        for project in &content.projects {
            if !content.projects_matching(self.project_filter).any(|p| p.title == project.title) {
                self.forget_reveal(("project", project.title.as_str()));
            }
        }
        let projects: Vec<&Project> = content.projects_matching(self.project_filter).collect();
        for (index, project) in projects.into_iter().enumerate() {
            let transition = Transition::fade_up(&self.reveal).staggered(index, self.reveal.stagger);
            self.reveal(ui, ("project", project.title.as_str()), transition, |_, ui| {
                card(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&project.title).strong().size(18.0));
                        if project.featured {
                            ui.label(egui::RichText::new("Featured").small().color(ACCENT));
                        }
                    });
                    ui.label(&project.description);
                    tags(ui, &project.tags);
                    ui.horizontal(|ui| {
                        if let Some(url) = &project.github_url {
                            ui.hyperlink_to("Code", url);
                        }
                        if let Some(url) = &project.demo_url {
                            ui.hyperlink_to("Live Demo", url);
                        }
                    });
                });
            });
        }
    }

    fn draw_skills(&mut self, ui: &mut egui::Ui, content: &PortfolioContent) {
        self.section_header(ui, Section::Skills, "Skills & Technologies", "My technical toolkit and expertise");

        let names: Vec<&str> = content
            .skills
            .iter()
            .flat_map(|category| category.skills.iter().map(|skill| skill.name.as_str()))
            .collect();
        let cloud = Transition::fade_in(self.reveal.duration);
        self.reveal(ui, "skill-cloud", cloud, |_, ui| skill_cloud(ui, &names));
        ui.add_space(24.0);

        for (index, category) in content.skills.iter().enumerate() {
            let transition = Transition::fade_up(&self.reveal).staggered(index, self.reveal.stagger);
            self.reveal(ui, ("skills", index), transition, |_, ui| {
                card(ui, |ui| {
                    ui.label(egui::RichText::new(&category.title).strong().size(18.0));
                    ui.add_space(8.0);
                    egui::Grid::new(("skill-grid", index))
                        .num_columns(2)
                        .spacing([16.0, 6.0])
                        .show(ui, |ui| {
                            for skill in &category.skills {
                                ui.label(&skill.name);
                                ui.add(
                                    egui::ProgressBar::new(f32::from(skill.level) / 100.0)
                                        .desired_width(220.0)
                                        .text(format!("{}%", skill.level)),
                                );
                                ui.end_row();
                            }
                        });
                });
            });
        }
    }

    fn draw_education(&mut self, ui: &mut egui::Ui, education: &Education) {
        self.section_header(ui, Section::Education, "Education", "My academic background and qualifications");

        let degree = Transition::fade_up(&self.reveal);
        self.reveal(ui, "education-degree", degree, |_, ui| {
            card(ui, |ui| {
                ui.label(egui::RichText::new(&education.degree).strong().size(18.0));
                ui.label(format!("{} · {}", education.institution, education.duration));
            });
        });

        let lists = [
            ("Core Subjects", &education.subjects),
            ("Certifications", &education.certifications),
            ("Achievements", &education.achievements),
        ];
        for (index, (title, items)) in lists.into_iter().enumerate() {
            let transition = Transition::fade_up(&self.reveal).staggered(index + 1, GROUP_STAGGER);
            self.reveal(ui, ("education-list", index), transition, |_, ui| {
                card(ui, |ui| {
                    ui.label(egui::RichText::new(title).strong());
                    for item in items.iter() {
                        ui.label(format!("• {item}"));
                    }
                });
            });
        }
    }

    fn draw_experience(&mut self, ui: &mut egui::Ui, experience: &[Experience]) {
        self.section_header(ui, Section::Experience, "Professional Experience", "My work history and professional journey");

        for (index, job) in experience.iter().enumerate() {
            let transition = Transition::slide_from_left(&self.reveal).staggered(index, 0.3);
            self.reveal(ui, ("experience", index), transition, |_, ui| {
                card(ui, |ui| {
                    ui.label(egui::RichText::new(&job.position).strong().size(18.0));
                    ui.label(egui::RichText::new(format!("{} · {}", job.company, job.period)).weak());
                    ui.label(&job.description);
                    tags(ui, &job.skills);
                });
            });
        }
    }

    fn draw_goals(&mut self, ui: &mut egui::Ui, goals: &Goals) {
        self.section_header(ui, Section::Goals, "Goals & Aspirations", "My vision for the future and career objectives");

        let vision = Transition::slide_from_left(&self.reveal);
        self.reveal(ui, "goals-vision", vision, |_, ui| {
            ui.label(egui::RichText::new(&goals.vision).size(16.0));
        });
        ui.add_space(16.0);

        for (heading, items) in [("Short-Term Goals", &goals.short_term), ("Long-Term Vision", &goals.long_term)] {
            ui.label(egui::RichText::new(heading).strong().size(18.0));
            for (index, goal) in items.iter().enumerate() {
                let transition = Transition::fade_up(&self.reveal).staggered(index, GROUP_STAGGER);
                self.reveal(ui, ("goal", heading, index), transition, |_, ui| {
                    card(ui, |ui| {
                        ui.label(egui::RichText::new(&goal.title).strong());
                        ui.label(egui::RichText::new(&goal.description).weak());
                    });
                });
            }
            ui.add_space(12.0);
        }
    }

    fn draw_blog(&mut self, ui: &mut egui::Ui, content: &PortfolioContent) {
        self.section_header(ui, Section::Blog, "Blog & Articles", "Thoughts, insights, and experiences");

        ui.horizontal_wrapped(|ui| {
            for category in content.blog_categories() {
                let label = category.clone();
                ui.selectable_value(&mut self.blog_category, category, label);
            }
        });
        ui.add_space(16.0);

        let category = self.blog_category.clone();
        for post in &content.blog {
            if category != ALL_CATEGORIES && post.category != category {
                self.forget_reveal(("blog", post.title.as_str()));
            }
        }
        for (index, post) in content.posts_in(&category).enumerate() {
            let transition = Transition::fade_up(&self.reveal).staggered(index, self.reveal.stagger);
            self.reveal(ui, ("blog", post.title.as_str()), transition, |app, ui| {
                card(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&post.category).small().color(ACCENT));
                        ui.label(egui::RichText::new(&post.date).small().weak());
                    });
                    ui.label(egui::RichText::new(&post.title).strong().size(17.0));
                    ui.label(&post.excerpt);
                    if ui.button("Read More").clicked() {
                        app.open_post = Some(post.title.clone());
                    }
                });
            });
        }
    }

    fn draw_blog_reader(&mut self, ctx: &egui::Context, content: &PortfolioContent) {
        let Some(post) = self
            .open_post
            .as_deref()
            .and_then(|title| content.blog.iter().find(|post| post.title == title))
        else {
            self.open_post = None;
            return;
        };
        let mut open = true;
        egui::Window::new(post.title.as_str())
            .open(&mut open)
            .collapsible(false)
            .default_width(560.0)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(format!("{} · {}", post.category, post.date)).weak());
                ui.separator();
                egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                    for paragraph in post.content.split("\n\n") {
                        ui.label(paragraph);
                        ui.add_space(8.0);
                    }
                });
            });
        if !open {
            self.open_post = None;
        }
    }

    fn draw_contact(&mut self, ui: &mut egui::Ui, channels: &[ContactChannel]) {
        self.section_header(ui, Section::Contact, "Contact Me", "Get in touch for opportunities or just to say hello");

        let form = Transition::fade_up(&self.reveal);
        self.reveal(ui, "contact-form", form, |app, ui| {
            card(ui, |ui| app.draw_contact_form(ui));
        });

        for (index, channel) in channels.iter().enumerate() {
            let transition = Transition::fade_up(&self.reveal).staggered(index, GROUP_STAGGER);
            self.reveal(ui, ("contact-channel", index), transition, |_, ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&channel.title).strong());
                    ui.hyperlink_to(&channel.value, &channel.link);
                });
            });
        }
    }

    fn draw_contact_form(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Send Me a Message").strong().size(18.0));
        ui.add_space(8.0);

        if let SubmitStatus::Sent { .. } = self.contact.status {
            ui.label(egui::RichText::new("Message Sent!").strong().color(ACCENT));
            ui.label("Thank you for reaching out. I'll get back to you as soon as possible.");
            return;
        }

        let busy = self.contact.is_busy();
        let fields = [
            (Field::Name, "Name", "Your name"),
            (Field::Email, "Email", "your.email@example.com"),
            (Field::Subject, "Subject", "What is this regarding?"),
            (Field::Message, "Message", "Your message..."),
        ];
        for (field, label, hint) in fields {
            ui.label(label);
            let value = match field {
                Field::Name => &mut self.contact.form.name,
                Field::Email => &mut self.contact.form.email,
                Field::Subject => &mut self.contact.form.subject,
                Field::Message => &mut self.contact.form.message,
            };
            let edit = if field == Field::Message {
                egui::TextEdit::multiline(value).desired_rows(4)
            } else {
                egui::TextEdit::singleline(value)
            };
            ui.add_enabled(!busy, edit.hint_text(hint).desired_width(f32::INFINITY));
            if let Some(error) = self.contact.error_for(field) {
                ui.colored_label(ui.visuals().error_fg_color, error.message);
            }
            ui.add_space(6.0);
        }

        let label = if busy { "Sending..." } else { "Send Message" };
        if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
            let now = ui.input(|i| i.time);
            if let Err(errors) = self.contact.submit(now) {
                log::debug!("Contact form rejected with {} errors", errors.len());
            }
        }
    }
}

fn draw_footer(ui: &mut egui::Ui, content: &PortfolioContent) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(egui::Margin::symmetric(24, 24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&content.footer.credit).small().weak());
                    ui.label(egui::RichText::new(content.copyright_line()).small().weak());
                });
                ui.add_space(24.0);
                for channel in content.footer_links() {
                    ui.hyperlink_to(&channel.title, &channel.link);
                }
            });
        });
}

fn skill_cloud(ui: &mut egui::Ui, names: &[&str]) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), SKILL_CLOUD_HEIGHT),
        egui::Sense::hover(),
    );
    if !ui.is_rect_visible(rect) {
        return;
    }

    let time = ui.input(|i| i.time);
    let radii = (rect.width() * 0.4, rect.height() * 0.35);
    let mut labels: Vec<_> = names
        .iter()
        .zip(cloud_layout(names.len(), radii, time, CloudMotion::default()))
        .collect();
    // Back of the ring first
    labels.sort_by(|a, b| a.1.depth.total_cmp(&b.1.depth));

    let (r, g, b) = SKILL_CLOUD_RGB;
    let painter = ui.painter_at(rect);
    for (name, label) in labels {
        let alpha = ((0.35 + 0.65 * label.depth) * 255.0).round() as u8;
        painter.text(
            rect.center() + egui::vec2(label.offset.0, label.offset.1),
            egui::Align2::CENTER_CENTER,
            *name,
            egui::FontId::proportional(12.0 + 8.0 * label.depth),
            egui::Color32::from_rgba_unmultiplied(r, g, b, alpha),
        );
    }
    ui.ctx().request_repaint();
}

fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let inner = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner;
    ui.add_space(12.0);
    inner
}

fn tags(ui: &mut egui::Ui, tags: &[String]) {
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            ui.label(egui::RichText::new(tag).small().background_color(ui.visuals().faint_bg_color));
        }
    });
}
