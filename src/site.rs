//! Server-side rendering of the single-page site.
//!
//! Every section is a dioxus component; the page is rendered to a string
//! with `dioxus-ssr`, which escapes all text and attribute values. The
//! `<html>` element carries the active `lang` and `dir` so right-to-left
//! layout mirrors the whole document.

use crate::contact::{FormSnapshot, SubmissionStatus};
use crate::i18n::{Language, LanguageStrings, LocaleSnapshot};
use dioxus::prelude::*;

/// Company name, never translated in the footer.
pub const COMPANY_NAME: &str = "NOVAYTEK";

/// Anchors of the page regions, in navigation order.
pub const SECTIONS: [&str; 4] = ["home", "projects", "about", "contact"];

/// Highlights under the contact details, shown in every language.
pub const HIGHLIGHTS: [&str; 2] = ["24/7 Support", "<24h Response"];

/// One figure of the metrics strip.
#[derive(Debug, Clone, Copy)]
pub struct Metric {
    pub value: u32,
    pub suffix: &'static str,
    /// Key under `about.stats` holding the label
    pub label_key: &'static str,
}

pub const METRICS: [Metric; 4] = [
    Metric { value: 150, suffix: "+", label_key: "projects" },
    Metric { value: 98, suffix: "%", label_key: "clients" },
    Metric { value: 12, suffix: "+", label_key: "years" },
    Metric { value: 50, suffix: "+", label_key: "team" },
];

/// Render the full page.
pub fn render_page(locale: &LocaleSnapshot, form: &FormSnapshot, year: i32) -> String {
    let page = dioxus_ssr::render_element(rsx! {
        Page { locale: *locale, form: form.clone(), year: year }
    });
    format!("<!DOCTYPE html>\n{}", page)
}

#[component]
fn Page(locale: LocaleSnapshot, form: FormSnapshot, year: i32) -> Element {
    let t = locale.strings;

    rsx! {
        html { lang: "{locale.language}", dir: "{locale.direction}",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{t.hero.title} | {t.hero.subtitle}" }
            }
            body {
                Nav { active: locale.language, t: t }
                main {
                    Hero { t: t }
                    MetricsStrip { t: t }
                    Projects { t: t }
                    About { t: t }
                    Contact { t: t, form: form.clone() }
                }
                Footer { t: t, year: year }
            }
        }
    }
}

/// Section links plus the three-way language selector.
#[component]
fn Nav(active: Language, t: &'static LanguageStrings) -> Element {
    let labels = [t.nav.home, t.nav.projects, t.nav.about, t.nav.contact];
    let links: Vec<(&str, &str)> = SECTIONS.into_iter().zip(labels).collect();
    let options: Vec<(Language, bool)> = Language::all()
        .into_iter()
        .map(|language| (language, language == active))
        .collect();

    rsx! {
        header { class: "site-nav",
            nav {
                ul { class: "sections",
                    for (anchor, label) in links {
                        li { key: "{anchor}",
                            a { href: "#{anchor}", "{label}" }
                        }
                    }
                }
                form { class: "language-selector", method: "post", action: "/language",
                    for (language, pressed) in options {
                        button {
                            key: "{language}",
                            r#type: "submit",
                            name: "lang",
                            value: "{language}",
                            lang: "{language}",
                            title: "{language.native_name()}",
                            aria_pressed: "{pressed}",
                            "{language.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Hero(t: &'static LanguageStrings) -> Element {
    rsx! {
        section { id: "home", class: "hero",
            h1 { "{t.hero.title}" }
            p { class: "subtitle", "{t.hero.subtitle}" }
            p { class: "tagline", "{t.hero.tagline}" }
            p { "{t.hero.description}" }
            div { class: "cta",
                a { href: "#contact", "{t.hero.cta}" }
                a { href: "#about", "{t.hero.cta_secondary}" }
            }
        }
    }
}

#[component]
fn MetricsStrip(t: &'static LanguageStrings) -> Element {
    let figures: Vec<(String, &str)> = METRICS
        .iter()
        .map(|metric| {
            let label = t
                .get(&format!("about.stats.{}", metric.label_key))
                .unwrap_or(metric.label_key);
            (format!("{}{}", metric.value, metric.suffix), label)
        })
        .collect();

    rsx! {
        section { class: "metrics",
            for (figure, label) in figures {
                div { key: "{label}", class: "metric",
                    span { class: "value", "{figure}" }
                    span { class: "label", "{label}" }
                }
            }
        }
    }
}

#[component]
fn Projects(t: &'static LanguageStrings) -> Element {
    rsx! {
        section { id: "projects",
            h2 { "{t.projects.title}" }
            p { class: "subtitle", "{t.projects.subtitle}" }
            div { class: "projects",
                for (i, project) in t.projects.items.iter().enumerate() {
                    article { key: "{i}", class: "project",
                        span { class: "badge", "Project {i + 1}" }
                        h3 { "{project.title}" }
                        p { "{project.description}" }
                        p { class: "tech", "{project.tech}" }
                        span { class: "view", "{t.projects.view_project}" }
                    }
                }
            }
        }
    }
}

#[component]
fn About(t: &'static LanguageStrings) -> Element {
    let about = &t.about;

    rsx! {
        section { id: "about",
            h2 { "{about.title}" }
            p { class: "subtitle", "{about.subtitle}" }
            div { class: "mission",
                h3 { "{about.mission}" }
                p { "{about.mission_text}" }
            }
            div { class: "vision",
                h3 { "{about.vision}" }
                p { "{about.vision_text}" }
            }
            h3 { "{about.values}" }
            ul { class: "values",
                for value in about.value_items.iter() {
                    li { key: "{value.title}",
                        h4 { "{value.title}" }
                        p { "{value.description}" }
                    }
                }
            }
        }
    }
}

/// Contact details, status banner and the form itself.
///
/// While a submission is sending the button is disabled and shows the
/// `sending` label. Failure details are never rendered, only the generic
/// translated message.
#[component]
fn Contact(t: &'static LanguageStrings, form: FormSnapshot) -> Element {
    let c = &t.contact;
    let f = &form.fields;
    let sending = form.status == SubmissionStatus::Sending;

    rsx! {
        section { id: "contact",
            h2 { "{c.title}" }
            p { class: "subtitle", "{c.subtitle}" }
            aside { class: "contact-info",
                dl {
                    dt { "{c.info.address}" }
                    dd { "{c.info.address_text}" }
                    dt { "{c.info.email}" }
                    dd { "{c.info.email_text}" }
                    dt { "{c.info.phone}" }
                    dd { "{c.info.phone_text}" }
                }
                p { class: "highlights",
                    for highlight in HIGHLIGHTS {
                        span { key: "{highlight}", "{highlight}" }
                    }
                }
            }
            form { class: "contact-form", method: "post", action: "/contact",
                TextInput { name: "name", kind: "text", caption: c.form.name, value: f.name.clone(), required: true }
                TextInput { name: "email", kind: "email", caption: c.form.email, value: f.email.clone(), required: true }
                TextInput { name: "phone", kind: "tel", caption: c.form.phone, value: f.phone.clone(), required: false }
                TextInput { name: "subject", kind: "text", caption: c.form.subject, value: f.subject.clone(), required: true }
                label { r#for: "message", "{c.form.message}" }
                textarea { id: "message", name: "message", rows: "5", required: true, "{f.message}" }

                if form.status == SubmissionStatus::Success {
                    div { class: "form-status success", role: "status", "{c.form.success}" }
                }
                if form.status == SubmissionStatus::Error {
                    div { class: "form-status error", role: "alert", "{c.form.error}" }
                }

                if sending {
                    button { r#type: "submit", disabled: true, "{c.form.sending}" }
                } else {
                    button { r#type: "submit", "{c.form.submit}" }
                }
            }
        }
    }
}

#[component]
fn TextInput(
    name: &'static str,
    kind: &'static str,
    caption: &'static str,
    value: String,
    required: bool,
) -> Element {
    rsx! {
        label { r#for: "{name}", "{caption}" }
        if required {
            input { r#type: "{kind}", id: "{name}", name: "{name}", value: "{value}", required: true }
        } else {
            input { r#type: "{kind}", id: "{name}", name: "{name}", value: "{value}" }
        }
    }
}

#[component]
fn Footer(t: &'static LanguageStrings, year: i32) -> Element {
    rsx! {
        footer {
            h2 { "{COMPANY_NAME}" }
            p { class: "tagline", "{t.footer.tagline}" }
            p { "© {year} {COMPANY_NAME}. {t.footer.rights}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactFields;

    fn page(language: Language, form: &FormSnapshot) -> String {
        render_page(&LocaleSnapshot::from(language), form, 2026)
    }

    fn contact(language: Language, status: SubmissionStatus, fields: ContactFields) -> String {
        dioxus_ssr::render_element(rsx! {
            Contact { t: language.strings(), form: FormSnapshot { status, fields } }
        })
    }

    // ==================== Direction Tests ====================

    #[test]
    fn test_english_page_is_ltr() {
        let html = page(Language::ENGLISH, &FormSnapshot::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("lang=\"en\""));
        assert!(html.contains("dir=\"ltr\""));
    }

    #[test]
    fn test_french_page_is_ltr() {
        let html = page(Language::FRENCH, &FormSnapshot::default());
        assert!(html.contains("lang=\"fr\""));
        assert!(html.contains("dir=\"ltr\""));
        assert!(html.contains("Nos Projets"));
    }

    #[test]
    fn test_arabic_page_is_rtl() {
        let html = page(Language::ARABIC, &FormSnapshot::default());
        assert!(html.contains("dir=\"rtl\""));
        assert!(!html.contains("dir=\"ltr\""));
        assert!(html.contains("مشاريعنا"));
    }

    // ==================== Section Tests ====================

    #[test]
    fn test_all_sections_are_anchored() {
        let html = page(Language::ENGLISH, &FormSnapshot::default());
        for anchor in SECTIONS {
            assert!(html.contains(&format!("href=\"#{}\"", anchor)), "{}", anchor);
            assert!(html.contains(&format!("id=\"{}\"", anchor)), "{}", anchor);
        }
    }

    #[test]
    fn test_language_selector_marks_active_language() {
        let html = dioxus_ssr::render_element(rsx! {
            Nav { active: Language::FRENCH, t: Language::FRENCH.strings() }
        });

        assert_eq!(html.matches("aria-pressed=\"true\"").count(), 1);
        assert_eq!(html.matches("aria-pressed=\"false\"").count(), 2);
        assert!(html.contains("title=\"Français\""));

        let start = html.find("value=\"fr\"").unwrap();
        let end = start + html[start..].find("</button>").unwrap();
        let french_button = &html[start..end];
        assert!(french_button.contains("aria-pressed=\"true\""));
        assert!(french_button.ends_with("FR"));
    }

    #[test]
    fn test_metrics_strip_uses_translated_labels() {
        let html = dioxus_ssr::render_element(rsx! {
            MetricsStrip { t: Language::FRENCH.strings() }
        });
        for figure in ["150+", "98%", "12+", "50+"] {
            assert!(html.contains(figure), "{}", figure);
        }
        assert!(html.contains("Projets Réalisés"));
        assert!(html.contains("Clients Satisfaits"));
    }

    #[test]
    fn test_projects_render_every_item() {
        let html = dioxus_ssr::render_element(rsx! {
            Projects { t: Language::ENGLISH.strings() }
        });
        assert_eq!(html.matches("class=\"project\"").count(), 6);
        assert!(html.contains("Project 1"));
        assert!(html.contains("Project 6"));
        assert!(html.contains("AWS, Docker, Kubernetes"));
    }

    #[test]
    fn test_about_renders_values() {
        let html = dioxus_ssr::render_element(rsx! {
            About { t: Language::ARABIC.strings() }
        });
        assert_eq!(html.matches("<h4>").count(), 4);
        assert!(html.contains("الشراكة"));
    }

    #[test]
    fn test_footer_has_year_and_rights() {
        let html = dioxus_ssr::render_element(rsx! {
            Footer { t: Language::ENGLISH.strings(), year: 2026 }
        });
        assert!(html.contains("© 2026 NOVAYTEK. All rights reserved."));
    }

    // ==================== Contact Form Tests ====================

    #[test]
    fn test_idle_form_has_no_status_banner() {
        let html = contact(Language::ENGLISH, SubmissionStatus::Idle, ContactFields::default());

        assert!(!html.contains("form-status"));
        assert!(!html.contains("disabled"));
        assert!(html.contains("Send Message"));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("type=\"tel\""));
        assert!(html.contains("24/7 Support"));
        assert!(html.contains("&lt;24h Response"));
    }

    #[test]
    fn test_sending_disables_button() {
        let html = contact(Language::FRENCH, SubmissionStatus::Sending, ContactFields::default());

        assert!(html.contains("disabled"));
        assert!(html.contains("Envoi en cours..."));
        assert!(!html.contains("Envoyer le Message"));
    }

    #[test]
    fn test_success_banner() {
        let html = contact(Language::ENGLISH, SubmissionStatus::Success, ContactFields::default());
        assert!(html.contains("Message sent successfully! We will get back to you soon."));
        assert!(!html.contains("Failed to send message"));
    }

    #[test]
    fn test_error_banner_keeps_escaped_fields() {
        let fields = ContactFields {
            name: "Jane \"JD\" Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            subject: "Hi".to_string(),
            message: "<script>alert(1)</script>".to_string(),
        };
        let html = contact(Language::ARABIC, SubmissionStatus::Error, fields);

        assert!(html.contains("فشل إرسال الرسالة. يرجى المحاولة مرة أخرى."));
        assert!(html.contains("JD"));
        assert!(!html.contains("Jane \"JD\""));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
